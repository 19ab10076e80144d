//! Merge the matches of one document into deduplicated, sorted year sets

use crate::types::{DateAnalysisResult, DateInfo, DateKind};
use anais_domain::{
    century_label, full_range, ExtractionEvent, ExtractionObserver, Spread, YearInterval,
};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Years and intervals found in one document
///
/// Both sets are ordered, so every list derived from them is sorted and free
/// of duplicates. Identical intervals collapse even when written differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateAggregate {
    numeric_years: BTreeSet<i32>,
    intervals: BTreeSet<YearInterval>,
}

impl DateAggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a numeric year
    pub fn add_year(&mut self, year: i32) {
        self.numeric_years.insert(year);
    }

    /// Record a resolved interval
    pub fn add_interval(&mut self, interval: YearInterval) {
        self.intervals.insert(interval);
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.numeric_years.is_empty() && self.intervals.is_empty()
    }

    /// Distinct numeric years, ascending
    pub fn numeric_years(&self) -> Vec<i32> {
        self.numeric_years.iter().copied().collect()
    }

    /// Distinct intervals, ascending by `(start, end)`
    pub fn intervals(&self) -> Vec<YearInterval> {
        self.intervals.iter().copied().collect()
    }

    /// Numeric years merged with interval midpoints, ascending and distinct
    pub fn representative_years(&self) -> Vec<i32> {
        let combined: BTreeSet<i32> = self
            .numeric_years
            .iter()
            .copied()
            .chain(self.intervals.iter().map(YearInterval::representative_year))
            .collect();
        combined.into_iter().collect()
    }

    /// One entry per numeric year, then one per interval
    pub fn date_infos(&self) -> Vec<DateInfo> {
        let numeric = self.numeric_years.iter().map(|&year| DateInfo {
            year,
            year_start: None,
            year_end: None,
            kind: DateKind::Numeric,
            century: century_label(year),
        });

        let textual = self.intervals.iter().map(|interval| {
            let year = interval.representative_year();
            DateInfo {
                year,
                year_start: Some(interval.start),
                year_end: Some(interval.end),
                kind: DateKind::Textual,
                century: century_label(year),
            }
        });

        numeric.chain(textual).collect()
    }

    /// Build the statistical summary
    ///
    /// If the statistics cannot be computed, only `mean`, `median`,
    /// `standard_deviation`, `full_range` and `dense_range_stddev` are left
    /// empty and the observer is told why.
    pub fn analyze(&self, observer: &dyn ExtractionObserver) -> DateAnalysisResult {
        let combined = self.representative_years();

        info!(
            "Found {} numeric years and {} distinct textual intervals",
            self.numeric_years.len(),
            self.intervals.len()
        );

        let mut result = DateAnalysisResult {
            direct_numeric_years: self.numeric_years(),
            calculated_textual_intervals: self
                .intervals
                .iter()
                .map(YearInterval::as_tuple)
                .collect(),
            count: combined.len(),
            minimum: combined.first().copied(),
            maximum: combined.last().copied(),
            ..DateAnalysisResult::default()
        };

        let (Some(minimum), Some(maximum)) = (result.minimum, result.maximum) else {
            info!("No representative dates found for statistical analysis");
            result.combined_representative_years = combined;
            return result;
        };

        match Spread::of_years(&combined) {
            Ok(Some(spread)) => {
                result.mean = Some(spread.mean);
                result.median = Some(spread.median);
                result.standard_deviation = Some(spread.standard_deviation);
                result.full_range = Some(full_range(minimum, maximum));
                result.dense_range_stddev = Some(spread.dense_range);
                debug!("Date statistics complete");
            }
            Ok(None) => {}
            Err(e) => {
                observer.observe(&ExtractionEvent::StatisticsFailed {
                    reason: e.to_string(),
                });
            }
        }

        result.combined_representative_years = combined;
        result
    }
}
