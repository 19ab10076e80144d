//! Integration tests for anais-extractor
//!
//! These tests load the reference Portuguese lexicon from disk and run the
//! full extraction pipeline over document-like text.

use anais_extractor::{
    AnalysisReport, DateConfig, DateExtractor, ExtractorError, RecordingObserver, ReportStatus,
    TemporalContext,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::Builder;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/date_config.json")
}

fn load_extractor() -> DateExtractor {
    DateExtractor::from_path(fixture_path()).unwrap()
}

#[test]
fn test_fixture_loads() {
    let config = DateConfig::from_file(fixture_path()).unwrap();
    assert_eq!(config.century_count(), 10);
    assert_eq!(config.part_count(), 7);
    assert_eq!(config.base_year("xviii"), Some(1700));
}

#[test]
fn test_document_analysis() {
    let extractor = load_extractor();

    let text = "Auto de vistoria lavrado em 1822. O edifício, construído em \
                meados do século XVIII, foi ampliado no último quartel do séc. XVIII \
                e novamente em 1822.";
    let result = extractor.extract_and_analyze(text);

    assert_eq!(result.direct_numeric_years, vec![1822]);
    assert_eq!(result.calculated_textual_intervals, vec![(1740, 1760), (1775, 1800)]);
    // Midpoint of (1775, 1800) is 1787.5, rounded to even
    assert_eq!(result.combined_representative_years, vec![1750, 1788, 1822]);
    assert_eq!(result.count, 3);
    assert_eq!(result.minimum, Some(1750));
    assert_eq!(result.maximum, Some(1822));
}

#[test]
fn test_century_with_and_without_part() {
    let extractor = load_extractor();

    let result = extractor.extract_and_analyze("Século XVIII. Primeiro quartel do século XVIII.");

    assert_eq!(result.calculated_textual_intervals, vec![(1700, 1725), (1700, 1800)]);
    // 1712.5 rounds down to the even neighbour
    assert_eq!(result.combined_representative_years, vec![1712, 1750]);
}

#[test]
fn test_statistics_over_three_years() {
    let extractor = load_extractor();

    let result = extractor.extract_and_analyze("Anos de 1800, 1700 e 1750.");

    assert_eq!(result.mean, Some(1750.0));
    assert_eq!(result.median, Some(1750.0));
    let sd = result.standard_deviation.unwrap();
    assert!((sd - 40.824829).abs() < 1e-4);
    assert_eq!(result.dense_range_stddev, Some((1709, 1791)));
    assert_eq!(result.full_range.as_deref(), Some("1700 - 1800"));
}

#[test]
fn test_temporal_context_of_document() {
    let extractor = load_extractor();

    let context = extractor
        .temporal_context("Carta de 1808, resposta de 1810, segunda metade do século XIX.");

    assert_eq!(context.years_found, 3);
    assert_eq!(context.listed_years, vec![1808, 1810, 1875]);
    assert_eq!(context.principal_period.start, Some(1808));
    assert_eq!(context.principal_period.end, Some(1875));
    assert_eq!(context.centuries_mentioned, vec!["século XIX".to_string()]);
    // Largest gap 65 years
    assert_eq!(context.consistency, 0.3);

    let json = serde_json::to_value(&context).unwrap();
    assert_eq!(json["periodo_principal"]["fim"], 1875);
    assert_eq!(json["seculos_mencionados"][0], "século XIX");
}

#[test]
fn test_observer_receives_warnings() {
    let observer = Arc::new(RecordingObserver::new());
    let extractor = load_extractor().with_observer(observer.clone());

    let result = extractor.extract_and_analyze("Século XXV, século XI e 1640.");

    assert_eq!(result.direct_numeric_years, vec![1640]);
    assert!(result.calculated_textual_intervals.is_empty());
    assert_eq!(observer.count_of("unrecognized_century"), 2);
}

#[test]
fn test_toml_configuration() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[century_map]
xvii = 1600
xviii = 1700

[part_map]
inicio = [0, 20]
final = [80, 100]
"primeira metade" = [0, 50]

[regex_patterns]
year = '\b(?P<year>1[2-9]\d{{2}})\b'
textual_phrase = '''
    (?:(?P<part>in[ií]cio|finais|final|primeira\s+metade)\s+d[oa]\s+)?
    s[ée]culo\s+(?P<century>[xvi]+)\b
'''

[analysis_window]
start = 1650
end = 1800
"#
    )
    .unwrap();

    let extractor = DateExtractor::from_path(file.path()).unwrap();
    let result = extractor.extract_and_analyze("Finais do século XVII e 1701.");

    assert_eq!(result.calculated_textual_intervals, vec![(1680, 1700)]);
    assert_eq!(result.combined_representative_years, vec![1690, 1701]);

    let window = extractor.config().unwrap().analysis_window();
    assert_eq!((window.start, window.end), (1650, 1800));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = DateExtractor::from_path("/nonexistent/date_config.json");
    assert!(matches!(result, Err(ExtractorError::Config(_))));
}

#[test]
fn test_broken_config_fails_closed() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{ "century_map": {{ "xviii": 1700 }} }}"#).unwrap();

    let extractor = DateExtractor::from_path_or_disabled(file.path());

    assert!(!extractor.is_enabled());
    assert_eq!(extractor.extract_and_analyze("1750").count, 0);
    assert!(extractor.extract_dates("1750").is_empty());
    assert_eq!(extractor.temporal_context("1750"), TemporalContext::empty());
}

#[test]
fn test_report_round_trip_on_disk() {
    let extractor = load_extractor();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analise.json");

    let report = AnalysisReport::from_analysis(extractor.extract_and_analyze("Em 1755 e 1756."));
    report.write_to(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"status\": \"Sucesso\""));
    assert!(written.contains("2 datas representativas analisadas."));
    assert_eq!(report.status, ReportStatus::Success);
}

#[test]
fn test_shared_extractor_across_threads() {
    let extractor = load_extractor();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let extractor = &extractor;
                scope.spawn(move || {
                    let text = format!("Em {} e no século XIX.", 1700 + i);
                    extractor.extract_and_analyze(&text)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.direct_numeric_years, vec![1700 + i as i32]);
            assert_eq!(result.calculated_textual_intervals, vec![(1800, 1900)]);
        }
    });
}
