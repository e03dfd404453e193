//! SIMD helpers for window arithmetic.
//!
//! These use the `wide` crate for portable SIMD operations. Every window is
//! reduced independently, so results never depend on what came before the
//! window (no running-sum drift).

use wide::f64x4;

/// SIMD-optimized sum of a slice.
pub fn sum_simd(data: &[f64]) -> f64 {
    let chunks = data.len() / 4;
    let mut simd_sum = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let values = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        simd_sum += values;
    }

    let mut result = simd_sum.reduce_add();

    // Handle remaining elements
    for &value in &data[(chunks * 4)..] {
        result += value;
    }

    result
}

/// Arithmetic mean of a slice, `None` when empty.
pub fn mean_simd(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(sum_simd(data) / data.len() as f64)
}

/// Population variance (divides by `n`), `None` when empty.
pub fn population_variance_simd(data: &[f64]) -> Option<f64> {
    let mean = mean_simd(data)?;
    let mean_vec = f64x4::splat(mean);

    let chunks = data.len() / 4;
    let mut sum_sq = 0.0;

    for i in 0..chunks {
        let idx = i * 4;
        let values = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let diff = values - mean_vec;
        sum_sq += (diff * diff).reduce_add();
    }

    for &value in &data[(chunks * 4)..] {
        let diff = value - mean;
        sum_sq += diff * diff;
    }

    Some(sum_sq / data.len() as f64)
}

/// Split consecutive differences into gains and losses.
///
/// Entry `j` of both vectors describes the move from `data[j]` to
/// `data[j + 1]`; both are non-negative.
pub fn split_changes_simd(data: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if data.len() < 2 {
        return (vec![], vec![]);
    }

    let moves = data.len() - 1;
    let mut gains = Vec::with_capacity(moves);
    let mut losses = Vec::with_capacity(moves);

    let chunks = moves / 4;
    let zero = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let prev = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        let curr = f64x4::new([
            data[idx + 1],
            data[idx + 2],
            data[idx + 3],
            data[idx + 4],
        ]);

        let diff = curr - prev;
        gains.extend(diff.max(zero).to_array());
        losses.extend((-diff).max(zero).to_array());
    }

    for i in (chunks * 4)..moves {
        let change = data[i + 1] - data[i];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    (gains, losses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_simd() {
        let data: Vec<f64> = (1..=100).map(|x| x as f64).collect();
        assert!((sum_simd(&data) - 5050.0).abs() < 1e-10);
        assert_eq!(sum_simd(&[]), 0.0);
    }

    #[test]
    fn test_mean_simd() {
        assert_eq!(mean_simd(&[]), None);
        assert!((mean_simd(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_variance() {
        // Population std dev of [2,4,4,4,5,5,7,9] is exactly 2
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let variance = population_variance_simd(&data).unwrap();
        assert!((variance - 4.0).abs() < 1e-12);

        assert_eq!(population_variance_simd(&[3.0]), Some(0.0));
    }

    #[test]
    fn test_split_changes() {
        let data = vec![10.0, 12.0, 11.0, 11.0, 14.0, 9.0, 10.0];
        let (gains, losses) = split_changes_simd(&data);

        assert_eq!(gains, vec![2.0, 0.0, 0.0, 3.0, 0.0, 1.0]);
        assert_eq!(losses, vec![0.0, 1.0, 0.0, 0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_split_changes_short_input() {
        let (gains, losses) = split_changes_simd(&[5.0]);
        assert!(gains.is_empty());
        assert!(losses.is_empty());
    }
}
