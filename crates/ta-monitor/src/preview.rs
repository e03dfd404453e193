//! Plain-text preview of a decorated series.

use std::fmt::Write;
use tabled::{settings::Style, Table, Tabled};
use ta_core::types::{DecoratedRow, Series, SignalSide};

/// One table line of the preview.
#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "date")]
    date: String,
    #[tabled(rename = "open")]
    open: String,
    #[tabled(rename = "high")]
    high: String,
    #[tabled(rename = "low")]
    low: String,
    #[tabled(rename = "close")]
    close: String,
    #[tabled(rename = "volume")]
    volume: String,
    #[tabled(rename = "sma")]
    sma: String,
    #[tabled(rename = "upper")]
    upper: String,
    #[tabled(rename = "lower")]
    lower: String,
    #[tabled(rename = "rsi")]
    rsi: String,
    #[tabled(rename = "buy")]
    buy: String,
    #[tabled(rename = "sell")]
    sell: String,
}

impl From<&DecoratedRow> for PreviewRow {
    fn from(row: &DecoratedRow) -> Self {
        let opt = |v: Option<f64>, precision: usize| match v {
            Some(v) => format!("{v:.precision$}"),
            None => "-".to_string(),
        };
        let flag = |v: Option<u8>| if v.is_some() { "*".to_string() } else { String::new() };

        Self {
            date: row.date.format("%Y-%m-%d %H:%M").to_string(),
            open: format!("{:.2}", row.open),
            high: format!("{:.2}", row.high),
            low: format!("{:.2}", row.low),
            close: format!("{:.2}", row.close),
            volume: format!("{:.4}", row.volume),
            sma: opt(row.sma_price, 2),
            upper: opt(row.band_upper, 2),
            lower: opt(row.band_lower, 2),
            rsi: opt(row.rsi, 1),
            buy: flag(row.buy_signal),
            sell: flag(row.sell_signal),
        }
    }
}

/// Render the first `rows` positions as a table.
pub fn render_preview(series: &Series, rows: usize) -> String {
    let preview: Vec<PreviewRow> = series
        .rows()
        .take(rows)
        .map(|row| PreviewRow::from(&row))
        .collect();

    let mut table = Table::new(preview);
    table.with(Style::psql());

    let mut out = table.to_string();
    out.push('\n');
    if series.len() > rows {
        let _ = writeln!(out, "... {} more rows", series.len() - rows);
    }
    out
}

/// Counts and timestamps of triggered signals.
pub fn signal_summary(series: &Series) -> String {
    let mut out = String::new();
    if let Some(pair) = &series.pair {
        let _ = writeln!(out, "{pair}: {} bars", series.len());
    }
    for side in [SignalSide::Buy, SignalSide::Sell] {
        let positions = series.signal_positions(side);
        let _ = writeln!(out, "{side} signals: {}", positions.len());
        for i in positions {
            if let Some(bar) = series.get(i) {
                let _ = writeln!(
                    out,
                    "  {}  close {:.2}",
                    bar.date.format("%Y-%m-%d %H:%M"),
                    bar.close
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use ta_core::types::{Column, PriceBar, SignalState};

    fn series(n: usize) -> Series {
        let bars = (0..n)
            .map(|i| {
                let date = DateTime::from_timestamp(1_700_000_000 + i as i64 * 3600, 0).unwrap();
                PriceBar::new(date, 10.0, 11.0, 9.0, 10.5, 2.0)
            })
            .collect();
        let mut series = Series::new(bars).with_pair("BTC/USD");
        let mut rsi = vec![None; n];
        rsi[n - 1] = Some(61.34);
        series.set_column(Column::Rsi, rsi).unwrap();
        let mut buys = vec![SignalState::Unset; n];
        buys[n - 1] = SignalState::Triggered;
        series.set_signals(SignalSide::Buy, buys).unwrap();
        series
    }

    #[test]
    fn test_preview_table() {
        let table = render_preview(&series(3), 10);
        let lines: Vec<&str> = table.lines().collect();

        // Header, separator, three rows
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("date") && lines[0].contains("rsi"));
        assert!(lines[1].starts_with('-'));
        assert!(lines[2].contains("2023-11-14 22:13"));
        assert!(lines[2].contains(" - "));
        assert!(lines[4].contains("61.3"));
        assert!(lines[4].contains('*'));
        assert!(!lines[3].contains('*'));
        assert!(!table.contains("more rows"));
    }

    #[test]
    fn test_preview_truncates() {
        let table = render_preview(&series(5), 2);
        assert!(table.ends_with("... 3 more rows\n"));
    }

    #[test]
    fn test_signal_summary() {
        let summary = signal_summary(&series(2));
        assert!(summary.starts_with("BTC/USD: 2 bars"));
        assert!(summary.contains("buy signals: 1"));
        assert!(summary.contains("2023-11-14 23:13  close 10.50"));
        assert!(summary.contains("sell signals: 0"));
    }
}
