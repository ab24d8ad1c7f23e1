use std::env;

use rayon::prelude::*;
use serde::Serialize;

use csisim::config::{Horizon, ProjectionInputs};
use csisim::projection::project;
use csisim::report::report_rows;
use csisim::tiers::resolve_tier;

/// Horizon totals for one score, flattened for NDJSON output.
#[derive(Debug, Serialize)]
struct SweepEntry {
    score: i64,
    service_pct: f64,
    repeat_pct: f64,
    service_customers: i64,
    repeat_purchases: i64,
    total_profit: i64,
}

/// Sweep the whole score range with otherwise-canonical inputs and emit one
/// NDJSON line per score: the projection's aggregate row. Makes the tier
/// step discontinuities at 701/801/901 visible in the horizon totals.
///
/// Usage: score_sweep [step] — default step 1 over 0..=1000.
fn main() {
    let step: i64 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    assert!(step > 0, "step must be positive");

    let base = ProjectionInputs::canonical();
    let horizon = Horizon::canonical();

    let scores: Vec<i64> = (0..=1000).step_by(step as usize).collect();
    let entries: Vec<SweepEntry> = scores
        .into_par_iter()
        .map(|score| {
            let inputs = ProjectionInputs { score, ..base };
            let rows = report_rows(&project(&inputs, horizon), &inputs);
            let total = rows[0];
            let tier = resolve_tier(score);
            SweepEntry {
                score,
                service_pct: tier.service_pct,
                repeat_pct: tier.repeat_pct,
                service_customers: total.service_customers,
                repeat_purchases: total.repeat_purchases,
                total_profit: total.total_profit,
            }
        })
        .collect();

    for entry in &entries {
        println!("{}", serde_json::to_string(entry).expect("serialisation failed"));
    }

    // Per-tier summary to stderr.
    eprintln!(
        "score_sweep: {} scores, step {step}, horizon {}–{}",
        entries.len(),
        horizon.start,
        horizon.end
    );
    for (name, lo, hi) in [
        ("base", 0i64, 700i64),
        ("701+", 701, 800),
        ("801+", 801, 900),
        ("901+", 901, 1000),
    ] {
        let band: Vec<&SweepEntry> =
            entries.iter().filter(|e| (lo..=hi).contains(&e.score)).collect();
        if band.is_empty() {
            continue;
        }
        let min = band.iter().map(|e| e.total_profit).min().unwrap_or(0);
        let max = band.iter().map(|e| e.total_profit).max().unwrap_or(0);
        eprintln!(
            "  tier={name:<5} scores={:>4}  profit_min={min}  profit_max={max}",
            band.len()
        );
    }
}
