//! Windowed mean and mean absolute deviation (DMA)

use crate::statistics::round_half_even;
use std::collections::BTreeSet;

/// First year of the default analysis window
pub const DEFAULT_WINDOW_START: i32 = 1200;

/// Last year of the default analysis window
pub const DEFAULT_WINDOW_END: i32 = 2025;

/// Inclusive window of years considered by the windowed summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearWindow {
    /// First year accepted
    pub start: i32,
    /// Last year accepted
    pub end: i32,
}

impl YearWindow {
    /// Create a new window
    ///
    /// # Errors
    /// Returns error if `start > end`
    pub fn new(start: i32, end: i32) -> Result<Self, String> {
        if start > end {
            return Err(format!("Window start {} is after window end {}", start, end));
        }
        Ok(Self { start, end })
    }

    /// Check if a year falls inside the window (bounds included)
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
        }
    }
}

/// Rounded mean and mean absolute deviation of a set of years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanDeviation {
    /// Mean year, rounded half to even
    pub mean: i32,
    /// Average of `|year - mean|`, rounded half to even
    pub mean_absolute_deviation: i32,
}

impl MeanDeviation {
    /// Compute over the distinct years of `years`
    ///
    /// Returns `None` when there are no years. The deviation is taken from the
    /// unrounded mean.
    pub fn compute(years: impl IntoIterator<Item = i32>) -> Option<Self> {
        let distinct: BTreeSet<i32> = years.into_iter().collect();
        if distinct.is_empty() {
            return None;
        }

        let n = distinct.len() as f64;
        let mean = distinct.iter().map(|&y| f64::from(y)).sum::<f64>() / n;
        let deviation = distinct
            .iter()
            .map(|&y| (f64::from(y) - mean).abs())
            .sum::<f64>()
            / n;

        // Both values are bounded by the i32 inputs
        Some(Self {
            mean: round_half_even(mean) as i32,
            mean_absolute_deviation: round_half_even(deviation) as i32,
        })
    }
}
