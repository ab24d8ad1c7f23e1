use crate::types::Year;

/// Inclusive run of calendar years the projection covers. The initial wave
/// is anchored one year before `start`, so age 1 is reachable in the first
/// horizon year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub start: Year,
    pub end: Year,
}

impl Horizon {
    pub fn new(start: Year, end: Year) -> Self {
        assert!(start <= end, "horizon start {start} must not be after end {end}");
        Horizon { start, end }
    }

    /// Build from a start year and a year count (the CLI's `--years` shape).
    pub fn spanning(start: Year, years: u32) -> Self {
        assert!(years > 0, "horizon must cover at least one year");
        Horizon { start, end: Year(start.0 + years as i32 - 1) }
    }

    /// The year the initial wave enters service.
    pub fn anchor_year(&self) -> Year {
        self.start.back(1)
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0 + 1) as usize
    }

    pub fn years(&self) -> impl Iterator<Item = Year> {
        (self.start.0..=self.end.0).map(Year)
    }

    /// The reference 15-year horizon.
    pub fn canonical() -> Self {
        Horizon { start: Year(2026), end: Year(2040) }
    }
}

/// The six inputs of one projection run. Signed throughout: the engine is
/// permissive by design and lets zero or negative values propagate
/// arithmetically rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionInputs {
    /// Customer satisfaction index, nominally 0..=1000.
    pub score: i64,
    /// Size of the initial sales cohort.
    pub sample_size: i64,
    /// Years a customer typically keeps the vehicle before buying again.
    pub ownership_years: i64,
    /// Years of warranty during which service visits accrue.
    pub warranty_years: i64,
    /// Profit per vehicle sale.
    pub vehicle_profit: i64,
    /// Profit per service customer per year.
    pub service_profit: i64,
}

impl ProjectionInputs {
    /// Reference inputs: the score the original calculator defaults to,
    /// with a round thousand-vehicle cohort.
    pub fn canonical() -> Self {
        ProjectionInputs {
            score: 870,
            sample_size: 1000,
            ownership_years: 3,
            warranty_years: 2,
            vehicle_profit: 500,
            service_profit: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_horizon_spans_fifteen_years() {
        let h = Horizon::canonical();
        assert_eq!(h.len(), 15);
        assert_eq!(h.years().count(), 15);
        assert_eq!(h.anchor_year(), Year(2025));
    }

    #[test]
    fn spanning_is_inclusive_of_the_start_year() {
        let h = Horizon::spanning(Year(2026), 2);
        assert_eq!(h.end, Year(2027));
        assert_eq!(h.years().collect::<Vec<_>>(), vec![Year(2026), Year(2027)]);
    }

    #[test]
    fn single_year_horizon_is_valid() {
        let h = Horizon::spanning(Year(2030), 1);
        assert_eq!(h.start, h.end);
        assert_eq!(h.len(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one year")]
    fn zero_year_horizon_is_rejected() {
        let _ = Horizon::spanning(Year(2026), 0);
    }
}
