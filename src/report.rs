use std::io::{self, Write};

use serde::Serialize;

use crate::config::ProjectionInputs;
use crate::projection::{YearLedger, round_half_even};
use crate::types::RowLabel;

/// One display/export row. Counts are rounded here, once, and profit is
/// derived from the rounded counts — never from the raw accruals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: RowLabel,
    pub service_customers: i64,
    pub repeat_purchases: i64,
    pub total_profit: i64,
}

/// Build the output sequence from a ledger: the aggregate row first, then
/// one row per year in ascending order.
///
/// The aggregate is the column-wise sum of the already-rounded per-year
/// values (sum-of-rounded, not round-of-sum), so the Total row always equals
/// what a reader adding up the table by hand would get.
pub fn report_rows(ledger: &[YearLedger], inputs: &ProjectionInputs) -> Vec<Row> {
    let year_rows: Vec<Row> = ledger
        .iter()
        .map(|l| {
            let service_customers = round_half_even(l.service_customers);
            let repeat_purchases = round_half_even(l.repeat_customers);
            Row {
                label: RowLabel::Year(l.year),
                service_customers,
                repeat_purchases,
                total_profit: service_customers * inputs.service_profit
                    + repeat_purchases * inputs.vehicle_profit,
            }
        })
        .collect();

    let total = Row {
        label: RowLabel::Total,
        service_customers: year_rows.iter().map(|r| r.service_customers).sum(),
        repeat_purchases: year_rows.iter().map(|r| r.repeat_purchases).sum(),
        total_profit: year_rows.iter().map(|r| r.total_profit).sum(),
    };

    let mut rows = Vec::with_capacity(year_rows.len() + 1);
    rows.push(total);
    rows.extend(year_rows);
    rows
}

/// Flatten rows to CSV in sequence order (Total row first). Locale-free:
/// plain integers, no thousand separators.
pub fn write_csv<W: Write>(w: &mut W, rows: &[Row]) -> io::Result<()> {
    writeln!(w, "year,service_customers,repeat_purchases,total_profit")?;
    for row in rows {
        writeln!(
            w,
            "{},{},{},{}",
            row.label, row.service_customers, row.repeat_purchases, row.total_profit
        )?;
    }
    Ok(())
}

/// One NDJSON line per row, in sequence order.
pub fn write_ndjson<W: Write>(w: &mut W, rows: &[Row]) -> io::Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *w, row)?;
        writeln!(w)?;
    }
    Ok(())
}
