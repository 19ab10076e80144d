//! Anais Extractor
//!
//! Finds dates in Portuguese historical text and summarizes them.
//!
//! # Overview
//!
//! Documents mention time in two ways: bare years ("em 1822") and century
//! phrases ("finais do século XVIII", "primeira metade do séc. XIX"). The
//! extractor recognises both with configurable regular expressions, resolves
//! each century phrase to a year interval, and builds a statistical summary
//! and a document-level temporal context.
//!
//! # Architecture
//!
//! ```text
//! Text → MatchDispatcher → IntervalResolver → DateAggregate → DateAnalysisResult
//!                                                   ↓
//!                                            TemporalContext
//! ```
//!
//! # Key Features
//!
//! - **Configurable lexicon**: century and part-of-century tables plus
//!   patterns loaded from JSON or TOML
//! - **Deduplication**: repeated years and intervals count once
//! - **Statistics**: mean, median, population deviation and dense range
//! - **Temporal context**: windowed mean and DMA, centuries and consistency
//! - **Fail-closed**: a broken configuration yields empty results, never a
//!   panic
//!
//! # Example Usage
//!
//! ```no_run
//! use anais_extractor::DateExtractor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = DateExtractor::from_path("config/date_config.json")?;
//!
//! let text = "Carta escrita em 1822, em finais do século XVIII.";
//! let result = extractor.extract_and_analyze(text);
//! println!("Representative years: {:?}", result.combined_representative_years);
//!
//! let context = extractor.temporal_context("Carta escrita em 1822.");
//! println!("Consistency: {}", context.consistency);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregate;
mod config;
mod context;
mod error;
mod extractor;
mod matcher;
mod observer;
mod report;
mod resolver;
mod types;


pub use aggregate::DateAggregate;
pub use config::{DateConfig, PartOffsets, RegexPatterns};
pub use context::{build_context, windowed_mean_deviation, windowed_years};
pub use error::{ConfigError, ExtractorError};
pub use extractor::DateExtractor;
pub use matcher::{DateMatch, MatchDispatcher};
pub use observer::{RecordingObserver, TracingObserver};
pub use report::{AnalysisReport, ReportStatus};
pub use resolver::{normalize_century, normalize_part, IntervalResolver};
pub use types::{DateAnalysisResult, DateInfo, DateKind, PrincipalPeriod, TemporalContext};

// Domain types that appear in this crate's public API
pub use anais_domain::{
    ExtractionEvent, ExtractionObserver, MeanDeviation, YearInterval, YearWindow,
};
