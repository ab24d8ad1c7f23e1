use std::fmt;

use serde::Serialize;

/// Calendar year. Signed so that the anchor year (one before the horizon
/// start) and wave ages (`year - origin_year`) are plain subtractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Year(pub i32);

impl Year {
    /// The year a given number of years before this one.
    pub fn back(self, years: i32) -> Self {
        Year(self.0 - years)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First column of a report row: either a calendar year or the aggregate
/// sentinel. The Total row sorts first in the output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowLabel {
    Total,
    Year(Year),
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLabel::Total => write!(f, "Total"),
            RowLabel::Year(y) => write!(f, "{y}"),
        }
    }
}
