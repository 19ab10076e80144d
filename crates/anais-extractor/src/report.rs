//! Status envelope for analysis reports written to disk

use crate::error::ExtractorError;
use crate::types::DateAnalysisResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info};

/// Outcome of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Dates were found and analyzed
    #[serde(rename = "Sucesso")]
    Success,
    /// The run completed without relevant dates
    #[serde(rename = "Aviso")]
    Warning,
    /// The run failed
    #[serde(rename = "Erro")]
    Error,
}

/// Report with a status, a human-readable message and optional results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport<T> {
    /// Outcome of the run
    pub status: ReportStatus,
    /// Human-readable summary
    pub message: String,
    /// Payload, absent on failure
    pub results: Option<T>,
}

impl<T> AnalysisReport<T> {
    /// Create a report
    pub fn new(status: ReportStatus, message: impl Into<String>, results: Option<T>) -> Self {
        Self {
            status,
            message: message.into(),
            results,
        }
    }

    /// Report a failed run
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(ReportStatus::Error, message, None)
    }
}

impl AnalysisReport<DateAnalysisResult> {
    /// Wrap a date analysis
    pub fn from_analysis(result: DateAnalysisResult) -> Self {
        if result.count > 0 {
            let message = format!("{} datas representativas analisadas.", result.count);
            Self::new(ReportStatus::Success, message, Some(result))
        } else {
            Self::new(
                ReportStatus::Warning,
                "Nenhuma data relevante encontrada ou analisada.",
                Some(result),
            )
        }
    }
}

impl<T: Serialize> AnalysisReport<T> {
    /// Pretty JSON with four-space indentation
    ///
    /// Non-ASCII characters are written as-is.
    pub fn to_json_pretty(&self) -> Result<String, ExtractorError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;

        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write the report as pretty JSON
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ExtractorError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;

        std::fs::write(path, json).map_err(|e| {
            error!("Failed to write report to '{}': {}", path.display(), e);
            ExtractorError::Io(e)
        })?;

        info!("Report written to '{}'", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_success_report() {
        let result = DateAnalysisResult {
            direct_numeric_years: vec![1822],
            combined_representative_years: vec![1822],
            count: 1,
            ..DateAnalysisResult::default()
        };

        let report = AnalysisReport::from_analysis(result);

        assert_eq!(report.status, ReportStatus::Success);
        assert_eq!(report.message, "1 datas representativas analisadas.");
    }

    #[test]
    fn test_warning_report_without_dates() {
        let report = AnalysisReport::from_analysis(DateAnalysisResult::empty());
        assert_eq!(report.status, ReportStatus::Warning);
        assert_eq!(report.message, "Nenhuma data relevante encontrada ou analisada.");
        assert!(report.results.is_some());
    }

    #[test]
    fn test_failure_report_serialization() {
        let report = AnalysisReport::<DateAnalysisResult>::failure("Ficheiro não encontrado");
        let json = report.to_json_pretty().unwrap();

        assert!(json.contains("\"status\": \"Erro\""));
        assert!(json.contains("\"results\": null"));
        assert!(json.contains("não"));
        assert!(json.contains("\n    \"message\""));
    }

    #[test]
    fn test_write_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("analise_datas.json");

        AnalysisReport::from_analysis(DateAnalysisResult::empty())
            .write_to(&path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: AnalysisReport<DateAnalysisResult> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.status, ReportStatus::Warning);
    }
}
