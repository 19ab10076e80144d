//! Anais Domain Layer
//!
//! This crate contains the temporal model and arithmetic behind Anais' date
//! extraction. It has ZERO external runtime dependencies and defines the value
//! objects, computations and trait interfaces the extractor builds upon.
//!
//! ## Key Concepts
//!
//! - **Year Interval**: `[start, end]` span resolved from a century phrase
//! - **Representative Year**: interval midpoint, rounded half to even
//! - **Spread**: mean, median, population deviation and dense range
//! - **Consistency**: how tightly a document's years cluster
//! - **Windowed Summary**: mean and mean absolute deviation (DMA) inside a
//!   window of years
//! - **Century Label**: "século XIX" style label for a year
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure functions over years, no I/O
//! - Trait definitions for reporting extraction events

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod century;
pub mod consistency;
pub mod interval;
pub mod statistics;
pub mod traits;
pub mod window;

// Re-exports for convenience
pub use century::{century_label, century_of, CENTURY_SPAN};
pub use consistency::{consistency_score, ConsistencyLevel};
pub use interval::YearInterval;
pub use statistics::{full_range, round_half_even, Spread, StatisticsError};
pub use traits::{ExtractionEvent, ExtractionObserver, NoopObserver};
pub use window::{MeanDeviation, YearWindow};
