//! Document-level temporal context built from date references

use crate::types::{DateInfo, DateKind, PrincipalPeriod, TemporalContext};
use anais_domain::{consistency_score, MeanDeviation, YearWindow};
use std::collections::BTreeSet;

/// Years of the references that fall inside the window
///
/// Every reference contributes its `year`; textual references also
/// contribute their start year. End years are never counted.
pub fn windowed_years(infos: &[DateInfo], window: YearWindow) -> BTreeSet<i32> {
    let mut years = BTreeSet::new();

    for info in infos {
        if window.contains(info.year) {
            years.insert(info.year);
        }
        if info.kind == DateKind::Textual {
            if let Some(start) = info.year_start.filter(|&s| window.contains(s)) {
                years.insert(start);
            }
        }
    }

    years
}

/// Mean and mean absolute deviation of the windowed years
pub fn windowed_mean_deviation(infos: &[DateInfo], window: YearWindow) -> Option<MeanDeviation> {
    MeanDeviation::compute(windowed_years(infos, window))
}

/// Summarize the references of one document
pub fn build_context(infos: &[DateInfo], window: YearWindow) -> TemporalContext {
    let windowed = windowed_mean_deviation(infos, window);
    let years: Vec<i32> = infos.iter().map(|info| info.year).collect();

    let centuries: BTreeSet<&str> = infos.iter().map(|info| info.century.as_str()).collect();
    let listed: BTreeSet<i32> = years.iter().copied().collect();

    TemporalContext {
        mean_year: windowed.map(|w| w.mean),
        mean_absolute_deviation: windowed.map(|w| w.mean_absolute_deviation),
        years_found: years.len(),
        principal_period: PrincipalPeriod {
            start: years.iter().min().copied(),
            end: years.iter().max().copied(),
        },
        centuries_mentioned: centuries.into_iter().map(str::to_string).collect(),
        consistency: consistency_score(&years),
        listed_years: listed.into_iter().collect(),
    }
}
