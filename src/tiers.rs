/// Retention percentages selected from the satisfaction score. Immutable for
/// the whole projection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Fraction of a wave that books a service visit in each warranty year.
    pub service_pct: f64,
    /// Fraction of a wave that buys again once ownership duration is reached.
    pub repeat_pct: f64,
}

/// Descending threshold table: `(inclusive lower score bound, tier)`.
/// Scanned in order, first match wins. The percentages step at the
/// boundaries by design — dealer satisfaction bands are not smoothed.
const TIER_TABLE: [(i64, Tier); 3] = [
    (901, Tier { service_pct: 0.74, repeat_pct: 0.35 }),
    (801, Tier { service_pct: 0.51, repeat_pct: 0.24 }),
    (701, Tier { service_pct: 0.32, repeat_pct: 0.19 }),
];

/// Catch-all tier for scores below every table threshold.
const BASE_TIER: Tier = Tier { service_pct: 0.14, repeat_pct: 0.16 };

/// Resolve a satisfaction score to its retention tier. Total over all of
/// `i64` — out-of-range scores fall into the top or base tier.
pub fn resolve_tier(score: i64) -> Tier {
    for (threshold, tier) in TIER_TABLE {
        if score >= threshold {
            return tier;
        }
    }
    BASE_TIER
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn boundary_scores_are_inclusive_lower_bounds() {
        assert_eq!(resolve_tier(901), Tier { service_pct: 0.74, repeat_pct: 0.35 });
        assert_eq!(resolve_tier(801), Tier { service_pct: 0.51, repeat_pct: 0.24 });
        assert_eq!(resolve_tier(701), Tier { service_pct: 0.32, repeat_pct: 0.19 });
    }

    #[test]
    fn scores_one_below_a_boundary_stay_in_the_lower_tier() {
        assert_eq!(resolve_tier(900).service_pct, 0.51);
        assert_eq!(resolve_tier(800).service_pct, 0.32);
        assert_eq!(resolve_tier(700).service_pct, 0.14);
    }

    #[test]
    fn out_of_declared_range_scores_still_resolve() {
        assert_eq!(resolve_tier(-5), BASE_TIER);
        assert_eq!(resolve_tier(1000), resolve_tier(901));
        assert_eq!(resolve_tier(i64::MAX).repeat_pct, 0.35);
    }

    proptest! {
        #[test]
        fn every_score_up_to_700_gets_the_base_tier(score in 0i64..=700) {
            prop_assert_eq!(resolve_tier(score), BASE_TIER);
        }

        #[test]
        fn resolution_is_monotone_in_score(a in 0i64..=1000, b in 0i64..=1000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(resolve_tier(lo).service_pct <= resolve_tier(hi).service_pct);
            prop_assert!(resolve_tier(lo).repeat_pct <= resolve_tier(hi).repeat_pct);
        }
    }
}
