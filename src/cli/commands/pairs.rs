//! List pairs command.

use anyhow::Result;
use ta_core::types::{AssetPair, Interval};

pub async fn run() -> Result<()> {
    println!("Supported Pairs");
    println!("═══════════════════════════════");
    println!();
    println!("  {:<10} {}", "Pair", "Kraken code");
    println!("  ───────────────────────────");
    for pair in AssetPair::all() {
        println!("  {:<10} {}", pair.display_name(), pair.kraken_code());
    }
    println!();

    let intervals: Vec<String> = Interval::all().iter().map(|i| i.to_string()).collect();
    println!("Intervals: {}", intervals.join(", "));
    println!();
    println!("Use --pair <name> with the analyze command to select a pair.");

    Ok(())
}
