//! Configuration for the Extractor
//!
//! The date lexicon (century labels, part-of-century offsets) and the two
//! recognition patterns are data, loaded once from JSON or TOML and validated
//! into a typed [`DateConfig`].

use crate::error::ConfigError;
use anais_domain::{round_half_even, YearWindow};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Offsets of a part of a century, in years after the century's base year
///
/// Values are kept as written; clamping to `[0, 100]` happens on resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOffsets {
    /// Offset of the first year
    pub start: i64,
    /// Offset of the last year
    pub end: i64,
}

impl PartOffsets {
    /// Create new offsets
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Patterns recognising numeric years and textual century phrases
///
/// Both are compiled case-insensitive with extended syntax, so literal spaces
/// must be written as `\s` or `[ ]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexPatterns {
    /// Pattern with the named group `year`
    pub year: String,

    /// Pattern with the named groups `century` and (optionally) `part`
    pub textual_phrase: String,
}

/// Validated, immutable date configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DateConfig {
    century_map: BTreeMap<String, i32>,
    part_map: BTreeMap<String, PartOffsets>,
    patterns: RegexPatterns,
    analysis_window: YearWindow,
}

impl DateConfig {
    /// Build a configuration from typed parts
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyField`] if a map or pattern is empty
    pub fn new(
        century_map: BTreeMap<String, i32>,
        part_map: BTreeMap<String, PartOffsets>,
        patterns: RegexPatterns,
    ) -> Result<Self, ConfigError> {
        if century_map.is_empty() {
            return Err(ConfigError::EmptyField("century_map".to_string()));
        }
        if part_map.is_empty() {
            return Err(ConfigError::EmptyField("part_map".to_string()));
        }
        if patterns.year.trim().is_empty() {
            return Err(ConfigError::EmptyField("regex_patterns.year".to_string()));
        }
        if patterns.textual_phrase.trim().is_empty() {
            return Err(ConfigError::EmptyField(
                "regex_patterns.textual_phrase".to_string(),
            ));
        }

        Ok(Self {
            century_map,
            part_map,
            patterns,
            analysis_window: YearWindow::default(),
        })
    }

    /// Replace the default analysis window
    pub fn with_analysis_window(mut self, window: YearWindow) -> Self {
        self.analysis_window = window;
        self
    }

    /// Load configuration from a file
    ///
    /// Files with a `.toml` extension are parsed as TOML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_json(&contents)?
        };

        info!(
            "Loaded date configuration from '{}': {} centuries, {} part phrases",
            path.display(),
            config.century_map.len(),
            config.part_map.len()
        );
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let raw: RawDateConfig = serde_json::from_str(json_str)?;
        raw.validate()
    }

    /// Load configuration from an already-parsed JSON mapping
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawDateConfig = serde_json::from_value(value)?;
        raw.validate()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawDateConfig = toml::from_str(toml_str)?;
        raw.validate()
    }

    /// Base year of a normalized century label
    pub fn base_year(&self, century: &str) -> Option<i32> {
        self.century_map.get(century).copied()
    }

    /// Offsets of a normalized part phrase
    pub fn part_offsets(&self, part: &str) -> Option<PartOffsets> {
        self.part_map.get(part).copied()
    }

    /// Recognition patterns
    pub fn patterns(&self) -> &RegexPatterns {
        &self.patterns
    }

    /// Default window for the windowed mean and deviation
    pub fn analysis_window(&self) -> YearWindow {
        self.analysis_window
    }

    /// Number of century labels
    pub fn century_count(&self) -> usize {
        self.century_map.len()
    }

    /// Number of part phrases
    pub fn part_count(&self) -> usize {
        self.part_map.len()
    }
}

/// Configuration as written in the file, before validation
#[derive(Debug, Deserialize)]
struct RawDateConfig {
    century_map: Option<BTreeMap<String, i64>>,
    part_map: Option<BTreeMap<String, RawPartEntry>>,
    regex_patterns: Option<RawPatterns>,
    analysis_window: Option<RawWindow>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPartEntry {
    Offsets(Vec<f64>),
    Malformed(IgnoredAny),
}

impl RawPartEntry {
    /// Offsets rounded half to even, if the entry is a pair of finite numbers
    fn offsets(&self) -> Option<PartOffsets> {
        match self {
            RawPartEntry::Offsets(values) => match values.as_slice() {
                [start, end] if start.is_finite() && end.is_finite() => Some(PartOffsets::new(
                    round_half_even(*start),
                    round_half_even(*end),
                )),
                _ => None,
            },
            RawPartEntry::Malformed(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPatterns {
    year: Option<String>,
    textual_phrase: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWindow {
    start: i32,
    end: i32,
}

impl RawDateConfig {
    fn validate(self) -> Result<DateConfig, ConfigError> {
        let raw_centuries = self
            .century_map
            .ok_or_else(|| ConfigError::MissingField("century_map".to_string()))?;
        let raw_parts = self
            .part_map
            .ok_or_else(|| ConfigError::MissingField("part_map".to_string()))?;
        let raw_patterns = self
            .regex_patterns
            .ok_or_else(|| ConfigError::MissingField("regex_patterns".to_string()))?;

        let mut century_map = BTreeMap::new();
        for (label, base_year) in raw_centuries {
            let base_year = i32::try_from(base_year).map_err(|_| ConfigError::InvalidValue {
                field: format!("century_map.{}", label),
                reason: format!("base year {} is out of range", base_year),
            })?;
            century_map.insert(label, base_year);
        }

        // Malformed part entries are left out so that lookups fall back to
        // the whole century, same as an unknown phrase.
        let mut part_map = BTreeMap::new();
        let raw_part_count = raw_parts.len();
        for (phrase, entry) in raw_parts {
            match entry.offsets() {
                Some(offsets) => {
                    part_map.insert(phrase, offsets);
                }
                None => {
                    warn!(
                        "Ignoring part_map entry '{}': expected a pair of numeric offsets",
                        phrase
                    );
                }
            }
        }
        if raw_part_count > 0 && part_map.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "part_map".to_string(),
                reason: "no entry is a pair of numeric offsets".to_string(),
            });
        }

        let patterns = RegexPatterns {
            year: raw_patterns
                .year
                .ok_or_else(|| ConfigError::MissingField("regex_patterns.year".to_string()))?,
            textual_phrase: raw_patterns.textual_phrase.ok_or_else(|| {
                ConfigError::MissingField("regex_patterns.textual_phrase".to_string())
            })?,
        };

        let config = DateConfig::new(century_map, part_map, patterns)?;

        match self.analysis_window {
            Some(window) => {
                let window = YearWindow::new(window.start, window.end).map_err(|reason| {
                    ConfigError::InvalidValue {
                        field: "analysis_window".to_string(),
                        reason,
                    }
                })?;
                Ok(config.with_analysis_window(window))
            }
            None => Ok(config),
        }
    }
}
