//! Resolve textual century phrases into year intervals

use crate::config::DateConfig;
use anais_domain::{ExtractionEvent, ExtractionObserver, YearInterval};
use regex::Regex;
use std::sync::LazyLock;

/// Words meaning "century" that may precede the numeral ("século", "séc.")
static CENTURY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bs[ée]c(?:ulo)?\.?\s*").expect("century prefix pattern is valid")
});

/// Normalize captured century text into a `century_map` key
///
/// Lowercases, trims and strips the word for "century":
/// `"Século XVIII"` becomes `"xviii"`.
pub fn normalize_century(century: &str) -> String {
    let lowered = century.trim().to_lowercase();
    CENTURY_PREFIX.replace_all(&lowered, "").trim().to_string()
}

/// Normalize a captured part-of-century phrase into a `part_map` key
///
/// Lowercases, trims, folds `í` and `ç`, and maps the plural "finais" to
/// "final". No other variants are folded; unknown phrases fall back to the
/// whole century.
pub fn normalize_part(part: &str) -> String {
    part.trim()
        .to_lowercase()
        .replace('í', "i")
        .replace('ç', "c")
        .replace("finais", "final")
}

/// Converts textual matches into year intervals using the configured lexicon
#[derive(Debug, Clone, Copy)]
pub struct IntervalResolver<'a> {
    config: &'a DateConfig,
}

impl<'a> IntervalResolver<'a> {
    /// Create a resolver over a configuration
    pub fn new(config: &'a DateConfig) -> Self {
        Self { config }
    }

    /// Resolve a century and optional part phrase
    ///
    /// Returns `None` only when the century itself is unknown. An unknown part
    /// phrase resolves to the whole century. Every returned interval lies
    /// inside `[base_year, base_year + 100]`.
    pub fn resolve(
        &self,
        century: &str,
        part: Option<&str>,
        observer: &dyn ExtractionObserver,
    ) -> Option<YearInterval> {
        let normalized_century = normalize_century(century);
        let Some(base_year) = self.config.base_year(&normalized_century) else {
            observer.observe(&ExtractionEvent::UnrecognizedCentury {
                original: century.to_string(),
                normalized: normalized_century,
            });
            return None;
        };

        let Some(part) = part.filter(|p| !p.is_empty()) else {
            return Some(YearInterval::whole_century(base_year));
        };

        let normalized_part = normalize_part(part);
        match self.config.part_offsets(&normalized_part) {
            Some(offsets) => Some(YearInterval::within_century(
                base_year,
                offsets.start,
                offsets.end,
            )),
            None => {
                observer.observe(&ExtractionEvent::UnrecognizedPart {
                    original: part.to_string(),
                    normalized: normalized_part,
                });
                Some(YearInterval::whole_century(base_year))
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::{PartOffsets, RegexPatterns};
    use anais_domain::NoopObserver;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    proptest! {
        /// Property: resolved intervals are ordered and stay inside their century
        #[test]
        fn test_resolved_interval_invariant(
            base in (12i32..21).prop_map(|c| c * 100),
            start_offset in -1000i64..1000,
            end_offset in -1000i64..1000,
        ) {
            let config = DateConfig::new(
                BTreeMap::from([("c".to_string(), base)]),
                BTreeMap::from([("p".to_string(), PartOffsets::new(start_offset, end_offset))]),
                RegexPatterns {
                    year: r"(?P<year>\d{4})".to_string(),
                    textual_phrase: r"(?P<century>c)".to_string(),
                },
            ).unwrap();
            let resolver = IntervalResolver::new(&config);

            let interval = resolver.resolve("c", Some("p"), &NoopObserver).unwrap();

            prop_assert!(interval.start <= interval.end);
            prop_assert!(interval.start >= base && interval.end <= base + 100);
        }
    }
}
