//! Statistics over representative years
//!
//! Computes central tendency and spread for the combined year list of a
//! document. The standard deviation is the population deviation.
//!
//! Rounding is half to even everywhere in this crate (`1712.5 -> 1712`,
//! `1737.5 -> 1738`).

use std::fmt;

/// Round to the nearest integer, ties to even
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Error raised when a statistical computation produces an unusable value
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsError {
    /// An input value was NaN or infinite
    NonFiniteInput {
        /// Position of the offending value
        index: usize,
    },

    /// An intermediate or final value was NaN or infinite
    NonFiniteResult {
        /// Name of the quantity being computed
        quantity: &'static str,
    },

    /// A rounded bound does not fit in a year
    OutOfRange {
        /// Name of the quantity being computed
        quantity: &'static str,
        /// The rounded value
        value: i64,
    },
}

impl fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticsError::NonFiniteInput { index } => {
                write!(f, "non-finite input value at position {}", index)
            }
            StatisticsError::NonFiniteResult { quantity } => {
                write!(f, "computation of {} produced a non-finite value", quantity)
            }
            StatisticsError::OutOfRange { quantity, value } => {
                write!(f, "{} rounded to {} which is not a valid year", quantity, value)
            }
        }
    }
}

impl std::error::Error for StatisticsError {}

/// Central tendency and spread of a non-empty sample
#[derive(Debug, Clone, PartialEq)]
pub struct Spread {
    /// Arithmetic mean
    pub mean: f64,

    /// Median (average of the two middle values for even-length samples)
    pub median: f64,

    /// Population standard deviation, exactly 0.0 for a single value
    pub standard_deviation: f64,

    /// `(round(mean - sd), round(mean + sd))`
    pub dense_range: (i32, i32),
}

impl Spread {
    /// Compute the spread of a sample
    ///
    /// Returns `Ok(None)` for an empty sample.
    ///
    /// # Errors
    /// Returns [`StatisticsError`] if any input or derived value is not finite
    pub fn compute(values: &[f64]) -> Result<Option<Self>, StatisticsError> {
        if values.is_empty() {
            return Ok(None);
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatisticsError::NonFiniteInput { index });
        }

        let n = values.len() as f64;
        let mean = ensure_finite(values.iter().sum::<f64>() / n, "mean")?;
        let median = ensure_finite(median(values), "median")?;

        let standard_deviation = if values.len() > 1 {
            let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
            ensure_finite(variance.sqrt(), "standard deviation")?
        } else {
            0.0
        };

        let dense_start = to_year(mean - standard_deviation, "dense range start")?;
        let dense_end = to_year(mean + standard_deviation, "dense range end")?;

        Ok(Some(Self {
            mean,
            median,
            standard_deviation,
            dense_range: (dense_start, dense_end),
        }))
    }

    /// Compute the spread of a list of years
    ///
    /// # Errors
    /// See [`Spread::compute`]
    pub fn of_years(years: &[i32]) -> Result<Option<Self>, StatisticsError> {
        let values: Vec<f64> = years.iter().map(|&y| f64::from(y)).collect();
        Self::compute(&values)
    }
}

/// Format a year range as `"{minimum} - {maximum}"`
pub fn full_range(minimum: i32, maximum: i32) -> String {
    format!("{} - {}", minimum, maximum)
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn ensure_finite(value: f64, quantity: &'static str) -> Result<f64, StatisticsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatisticsError::NonFiniteResult { quantity })
    }
}

fn to_year(value: f64, quantity: &'static str) -> Result<i32, StatisticsError> {
    let rounded = round_half_even(ensure_finite(value, quantity)?);
    i32::try_from(rounded).map_err(|_| StatisticsError::OutOfRange {
        quantity,
        value: rounded,
    })
}
