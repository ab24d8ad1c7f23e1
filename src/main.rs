use std::fs::File;
use std::io::BufWriter;

use csisim::config::{Horizon, ProjectionInputs};
use csisim::projection::project;
use csisim::report::{Row, report_rows, write_csv, write_ndjson};
use csisim::tiers::resolve_tier;
use csisim::types::Year;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut inputs = ProjectionInputs::canonical();
    let mut start_year: Option<i32> = None;
    let mut years_override: Option<u32> = None;
    let mut output_path = "projection.ndjson".to_string();
    let mut csv_path_opt: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--score" => {
                i += 1;
                inputs.score = args[i].parse().expect("--score requires an integer");
            }
            "--sample" => {
                i += 1;
                inputs.sample_size = args[i].parse().expect("--sample requires an integer");
            }
            "--ownership" => {
                i += 1;
                inputs.ownership_years =
                    args[i].parse().expect("--ownership requires an integer");
            }
            "--warranty" => {
                i += 1;
                inputs.warranty_years = args[i].parse().expect("--warranty requires an integer");
            }
            "--vehicle-profit" => {
                i += 1;
                inputs.vehicle_profit =
                    args[i].parse().expect("--vehicle-profit requires an integer");
            }
            "--service-profit" => {
                i += 1;
                inputs.service_profit =
                    args[i].parse().expect("--service-profit requires an integer");
            }
            "--start-year" => {
                i += 1;
                start_year = Some(args[i].parse().expect("--start-year requires an integer"));
            }
            "--years" => {
                i += 1;
                years_override = Some(args[i].parse().expect("--years requires a positive u32"));
            }
            "--output" => {
                i += 1;
                output_path = args[i].clone();
            }
            "--csv" => {
                i += 1;
                csv_path_opt = Some(args[i].clone());
            }
            "--quiet" => quiet = true,
            _ => {}
        }
        i += 1;
    }

    let canonical = Horizon::canonical();
    let start = Year(start_year.unwrap_or(canonical.start.0));
    let horizon = match years_override {
        Some(n) => Horizon::spanning(start, n),
        None => Horizon::spanning(start, canonical.len() as u32),
    };

    let ledger = project(&inputs, horizon);
    let rows = report_rows(&ledger, &inputs);

    let file = File::create(&output_path)
        .unwrap_or_else(|e| panic!("failed to create {output_path}: {e}"));
    let mut writer = BufWriter::new(file);
    write_ndjson(&mut writer, &rows).expect("failed to write NDJSON rows");

    if let Some(ref csv_path) = csv_path_opt {
        let file = File::create(csv_path)
            .unwrap_or_else(|e| panic!("failed to create {csv_path}: {e}"));
        let mut writer = BufWriter::new(file);
        write_csv(&mut writer, &rows).expect("failed to write CSV");
    }

    if !quiet {
        let tier = resolve_tier(inputs.score);
        eprintln!(
            "score {} → tier (service {:.0}%, repeat {:.0}%), horizon {}–{}",
            inputs.score,
            tier.service_pct * 100.0,
            tier.repeat_pct * 100.0,
            horizon.start,
            horizon.end
        );
        print_table(&rows);
        println!("\nRows written → {output_path}");
    }
}

fn print_table(rows: &[Row]) {
    println!(
        "{:>6} | {:>17} | {:>16} | {:>14}",
        "Year", "Service customers", "Repeat purchases", "Total profit"
    );
    println!("{}", "-".repeat(6 + 3 + 17 + 3 + 16 + 3 + 14));
    // The aggregate row leads the sequence; print it last so the table reads
    // top-to-bottom chronologically with the total underneath.
    for row in &rows[1..] {
        println!(
            "{:>6} | {:>17} | {:>16} | {:>14}",
            row.label.to_string(),
            row.service_customers,
            row.repeat_purchases,
            row.total_profit
        );
    }
    if let Some(total) = rows.first() {
        println!("{}", "-".repeat(6 + 3 + 17 + 3 + 16 + 3 + 14));
        println!(
            "{:>6} | {:>17} | {:>16} | {:>14}",
            total.label.to_string(),
            total.service_customers,
            total.repeat_purchases,
            total.total_profit
        );
    }
}
