//! Trait definitions for external interactions
//!
//! Extraction never fails on a single bad match. Conditions worth reporting
//! are delivered as [`ExtractionEvent`]s to an [`ExtractionObserver`] supplied
//! by the caller; infrastructure implementations (logging, test capture) live
//! in other crates.

use std::fmt;

/// A recoverable condition noticed while extracting dates
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionEvent {
    /// Digits matched by the year pattern could not be read as a year
    NumericConversionFailed {
        /// Text matched by the numeric branch
        raw: String,
    },

    /// The textual branch matched but its named groups could not be recovered
    TextualRematchFailed {
        /// Text matched by the textual branch
        raw: String,
    },

    /// The century label is not in the century map; the match is dropped
    UnrecognizedCentury {
        /// Century text as captured
        original: String,
        /// Century text after normalisation
        normalized: String,
    },

    /// The part phrase is not in the part map; the whole century is used
    UnrecognizedPart {
        /// Part phrase as captured
        original: String,
        /// Part phrase after normalisation
        normalized: String,
    },

    /// Statistical fields were discarded
    StatisticsFailed {
        /// Description of the failure
        reason: String,
    },

    /// Extraction was requested from an extractor without a valid configuration
    ExtractionDisabled,
}

impl ExtractionEvent {
    /// Short machine-readable name of the event
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionEvent::NumericConversionFailed { .. } => "numeric_conversion_failed",
            ExtractionEvent::TextualRematchFailed { .. } => "textual_rematch_failed",
            ExtractionEvent::UnrecognizedCentury { .. } => "unrecognized_century",
            ExtractionEvent::UnrecognizedPart { .. } => "unrecognized_part",
            ExtractionEvent::StatisticsFailed { .. } => "statistics_failed",
            ExtractionEvent::ExtractionDisabled => "extraction_disabled",
        }
    }

    /// Whether the event indicates a broken configuration or computation
    /// rather than unexpected input text
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ExtractionEvent::StatisticsFailed { .. } | ExtractionEvent::ExtractionDisabled
        )
    }
}

impl fmt::Display for ExtractionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionEvent::NumericConversionFailed { raw } => {
                write!(f, "could not convert numeric year from match '{}'", raw)
            }
            ExtractionEvent::TextualRematchFailed { raw } => {
                write!(f, "textual match '{}' failed to re-match for its parts", raw)
            }
            ExtractionEvent::UnrecognizedCentury { original, normalized } => {
                write!(f, "unrecognized century '{}' (original: '{}')", normalized, original)
            }
            ExtractionEvent::UnrecognizedPart { original, normalized } => {
                write!(
                    f,
                    "unrecognized part phrase '{}' (normalized: '{}'), using whole century",
                    original, normalized
                )
            }
            ExtractionEvent::StatisticsFailed { reason } => {
                write!(f, "statistical analysis failed: {}", reason)
            }
            ExtractionEvent::ExtractionDisabled => {
                write!(f, "date configuration is invalid, extraction disabled")
            }
        }
    }
}

/// Trait for receiving extraction events
///
/// Implemented by the infrastructure layer (anais-extractor)
pub trait ExtractionObserver: Send + Sync {
    /// Receive one event
    fn observe(&self, event: &ExtractionEvent);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {
    fn observe(&self, _event: &ExtractionEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        let event = ExtractionEvent::UnrecognizedCentury {
            original: "século XXX".to_string(),
            normalized: "xxx".to_string(),
        };
        assert_eq!(event.kind(), "unrecognized_century");
        assert!(!event.is_error());
        assert!(ExtractionEvent::ExtractionDisabled.is_error());
    }

    #[test]
    fn test_event_display() {
        let event = ExtractionEvent::UnrecognizedPart {
            original: "metade".to_string(),
            normalized: "metade".to_string(),
        };
        assert!(event.to_string().contains("using whole century"));
    }
}
