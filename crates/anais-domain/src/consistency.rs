//! Consistency module - how tightly clustered a document's years are

use std::collections::BTreeSet;

/// Temporal consistency of a set of years
///
/// Classified by the largest gap between consecutive distinct years:
/// - Single: fewer than two distinct years
/// - Tight: largest gap up to 10 years
/// - Close: largest gap up to 25 years
/// - Moderate: largest gap up to 50 years
/// - Scattered: anything wider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsistencyLevel {
    /// Nothing to compare
    Single,

    /// Years within a decade of each other
    Tight,

    /// Years within a generation of each other
    Close,

    /// Years within half a century of each other
    Moderate,

    /// Years more than half a century apart
    Scattered,
}

impl ConsistencyLevel {
    /// Classify a set of years (duplicates and order are irrelevant)
    pub fn assess(years: &[i32]) -> Self {
        let distinct: BTreeSet<i32> = years.iter().copied().collect();

        let max_gap = distinct
            .iter()
            .zip(distinct.iter().skip(1))
            .map(|(a, b)| i64::from(*b) - i64::from(*a))
            .max();

        match max_gap {
            None => ConsistencyLevel::Single,
            Some(gap) => Self::from_max_gap(gap),
        }
    }

    /// Classify by the largest gap between consecutive years
    pub fn from_max_gap(max_gap: i64) -> Self {
        match max_gap {
            g if g <= 10 => ConsistencyLevel::Tight,
            g if g <= 25 => ConsistencyLevel::Close,
            g if g <= 50 => ConsistencyLevel::Moderate,
            _ => ConsistencyLevel::Scattered,
        }
    }

    /// Numeric score used by indexers
    pub fn score(&self) -> f64 {
        match self {
            ConsistencyLevel::Single => 1.0,
            ConsistencyLevel::Tight => 0.9,
            ConsistencyLevel::Close => 0.7,
            ConsistencyLevel::Moderate => 0.5,
            ConsistencyLevel::Scattered => 0.3,
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsistencyLevel::Single => "single",
            ConsistencyLevel::Tight => "tight",
            ConsistencyLevel::Close => "close",
            ConsistencyLevel::Moderate => "moderate",
            ConsistencyLevel::Scattered => "scattered",
        }
    }
}

/// Consistency score of a set of years, one of `{0.3, 0.5, 0.7, 0.9, 1.0}`
pub fn consistency_score(years: &[i32]) -> f64 {
    ConsistencyLevel::assess(years).score()
}
