//! Result types for date extraction
//!
//! All results serialize to JSON for storage and indexing. The temporal
//! context keeps the Portuguese keys used by the document store.

use serde::{Deserialize, Serialize};

/// Statistical summary of the dates found in one document
///
/// Lists are sorted ascending without duplicates. Statistical fields are
/// `None` when no year was found, and `mean`, `median`,
/// `standard_deviation`, `full_range` and `dense_range_stddev` are also
/// `None` when the statistics could not be computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateAnalysisResult {
    /// Distinct years written as numbers
    pub direct_numeric_years: Vec<i32>,

    /// Distinct `(start, end)` intervals resolved from century phrases
    pub calculated_textual_intervals: Vec<(i32, i32)>,

    /// Numeric years merged with interval midpoints
    pub combined_representative_years: Vec<i32>,

    /// Length of `combined_representative_years`
    pub count: usize,

    /// Arithmetic mean
    pub mean: Option<f64>,

    /// Median
    pub median: Option<f64>,

    /// Earliest representative year
    pub minimum: Option<i32>,

    /// Latest representative year
    pub maximum: Option<i32>,

    /// Population standard deviation
    pub standard_deviation: Option<f64>,

    /// `"{minimum} - {maximum}"`
    pub full_range: Option<String>,

    /// `(round(mean - sd), round(mean + sd))`
    pub dense_range_stddev: Option<(i32, i32)>,
}

impl DateAnalysisResult {
    /// Result with no dates and no statistics
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the statistical fields are populated
    pub fn has_statistics(&self) -> bool {
        self.mean.is_some()
    }
}

/// How a date reference was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    /// A bare year
    Numeric,
    /// A century phrase
    Textual,
}

/// One date reference of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    /// The year itself, or the representative year of an interval
    pub year: i32,

    /// First year of the interval (textual references only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_start: Option<i32>,

    /// Last year of the interval (textual references only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_end: Option<i32>,

    /// How the reference was written
    #[serde(rename = "type")]
    pub kind: DateKind,

    /// Century label of `year`, e.g. "século XIX"
    pub century: String,
}

/// Earliest and latest year of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalPeriod {
    /// Earliest year
    #[serde(rename = "inicio")]
    pub start: Option<i32>,

    /// Latest year
    #[serde(rename = "fim")]
    pub end: Option<i32>,
}

/// Document-level temporal summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalContext {
    /// Rounded mean of the years inside the analysis window
    #[serde(rename = "media_anos")]
    pub mean_year: Option<i32>,

    /// Rounded mean absolute deviation (DMA) inside the analysis window
    #[serde(rename = "desvio_medio_absoluto")]
    pub mean_absolute_deviation: Option<i32>,

    /// Number of date references found
    #[serde(rename = "anos_encontrados")]
    pub years_found: usize,

    /// Earliest and latest year found
    #[serde(rename = "periodo_principal")]
    pub principal_period: PrincipalPeriod,

    /// Distinct century labels, sorted
    #[serde(rename = "seculos_mencionados")]
    pub centuries_mentioned: Vec<String>,

    /// Consistency score in `{0.3, 0.5, 0.7, 0.9, 1.0}`, or 0.0 when empty
    #[serde(rename = "consistencia_temporal")]
    pub consistency: f64,

    /// Distinct years, sorted
    #[serde(rename = "anos_listados")]
    pub listed_years: Vec<i32>,
}

impl TemporalContext {
    /// Context reported when extraction could not run
    pub fn empty() -> Self {
        Self {
            mean_year: None,
            mean_absolute_deviation: None,
            years_found: 0,
            principal_period: PrincipalPeriod::default(),
            centuries_mentioned: Vec::new(),
            consistency: 0.0,
            listed_years: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_has_no_statistics() {
        let result = DateAnalysisResult::empty();
        assert_eq!(result.count, 0);
        assert!(!result.has_statistics());
        assert!(result.minimum.is_none());
    }

    #[test]
    fn test_intervals_serialize_as_pairs() {
        let result = DateAnalysisResult {
            calculated_textual_intervals: vec![(1700, 1750)],
            ..DateAnalysisResult::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["calculated_textual_intervals"], serde_json::json!([[1700, 1750]]));
        assert!(json["mean"].is_null());
    }

    #[test]
    fn test_date_info_keys() {
        let info = DateInfo {
            year: 1822,
            year_start: None,
            year_end: None,
            kind: DateKind::Numeric,
            century: "século XIX".to_string(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "numeric");
        assert!(json.get("year_start").is_none());
    }

    #[test]
    fn test_temporal_context_storage_keys() {
        let json = serde_json::to_value(TemporalContext::empty()).unwrap();
        assert!(json["media_anos"].is_null());
        assert_eq!(json["anos_encontrados"], 0);
        assert!(json["periodo_principal"]["inicio"].is_null());
        assert_eq!(json["consistencia_temporal"], 0.0);
        assert_eq!(json["anos_listados"], serde_json::json!([]));
    }
}
