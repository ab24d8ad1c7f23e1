use crate::config::{Horizon, ProjectionInputs};
use crate::tiers::{Tier, resolve_tier};
use crate::types::Year;

/// A cohort of customers that entered service in a given year. Waves are
/// append-only: a wave is never removed, it just stops contributing once it
/// falls outside its warranty window and has spent its one repeat purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub origin_year: Year,
    /// Fractional customers, carried unrounded across generations.
    pub count: f64,
    /// Set the first year `age >= ownership_years`; a wave spawns at most
    /// one child wave, ever.
    pub has_repeated: bool,
}

/// Unrounded per-year accruals. Rounding and profit derivation happen at
/// report time so rounding error never compounds across wave generations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearLedger {
    pub year: Year,
    /// Sum of `count * service_pct` over waves inside their warranty window.
    pub service_customers: f64,
    /// Sum of newly spawned repeat-purchase counts for the year.
    pub repeat_customers: f64,
}

/// Round half to even, matching the reference calculator's rounding rule.
pub fn round_half_even(x: f64) -> i64 {
    x.round_ties_even() as i64
}

/// Run the cohort projection over the horizon: one ledger entry per year,
/// in ascending year order.
///
/// Each year iterates a fixed-size snapshot of the wave set. Children
/// spawned in year `y` are queued and appended only after the full pass, so
/// a wave never accrues service or repeats in its own origin year — it
/// becomes eligible from `y + 1`.
pub fn project(inputs: &ProjectionInputs, horizon: Horizon) -> Vec<YearLedger> {
    let Tier { service_pct, repeat_pct } = resolve_tier(inputs.score);

    let mut waves = vec![Wave {
        origin_year: horizon.anchor_year(),
        count: inputs.sample_size as f64,
        has_repeated: false,
    }];

    let mut ledger = Vec::with_capacity(horizon.len());
    for year in horizon.years() {
        let mut service_customers = 0.0;
        let mut repeat_customers = 0.0;
        let mut spawned: Vec<Wave> = Vec::new();

        let active = waves.len();
        for wave in &mut waves[..active] {
            let age = (year.0 - wave.origin_year.0) as i64;

            // Age 0 never accrues: the purchase year itself has no service event.
            if 1 <= age && age <= inputs.warranty_years {
                service_customers += wave.count * service_pct;
            }

            if !wave.has_repeated && age >= inputs.ownership_years {
                let repeats = wave.count * repeat_pct;
                repeat_customers += repeats;
                wave.has_repeated = true;
                spawned.push(Wave { origin_year: year, count: repeats, has_repeated: false });
            }
        }
        waves.extend(spawned);

        ledger.push(YearLedger { year, service_customers, repeat_customers });
    }
    ledger
}
