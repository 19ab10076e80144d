//! Recognise numeric years and textual century phrases in raw text
//!
//! Matching is two-pass. A combined pattern `(year)|(textual)` finds the span
//! of each reference and tells which alternative fired; the branch-specific
//! pattern is then re-run on that span to recover its named groups. Named
//! groups are never read from the combined pattern, but the two patterns must
//! not share a group name or the combined pattern fails to compile.

use crate::config::RegexPatterns;
use crate::error::ExtractorError;
use anais_domain::{ExtractionEvent, ExtractionObserver};
use regex::{Captures, Regex, RegexBuilder};
use tracing::debug;

/// A date reference found in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMatch {
    /// A bare year such as `1822`
    Numeric(i32),

    /// A century phrase such as `finais do século XVIII`
    Textual {
        /// Captured century text, not yet normalized
        century: String,
        /// Captured part-of-century phrase, if any
        part: Option<String>,
    },
}

/// Compiled patterns and the dispatch between their two branches
#[derive(Debug, Clone)]
pub struct MatchDispatcher {
    combined: Regex,
    numeric: Regex,
    textual: Regex,
    textual_group: usize,
}

impl MatchDispatcher {
    /// Compile the configured patterns
    ///
    /// # Errors
    /// Returns [`ExtractorError::PatternCompilation`] if a pattern does not
    /// compile, alone or combined, and [`ExtractorError::MissingCaptureGroup`]
    /// if `year` or `century` is not declared.
    pub fn new(patterns: &RegexPatterns) -> Result<Self, ExtractorError> {
        let numeric = compile(&anchored(&patterns.year), "year")?;
        let textual = compile(&anchored(&patterns.textual_phrase), "textual_phrase")?;

        require_group(&numeric, "year", "year")?;
        require_group(&textual, "textual_phrase", "century")?;

        // Each source pattern is closed on a new line so a trailing
        // extended-syntax comment cannot swallow the group delimiter.
        let combined = compile(
            &format!("({}\n)|({}\n)", patterns.year, patterns.textual_phrase),
            "combined",
        )?;

        // Group 1 wraps the numeric branch, followed by the numeric pattern's
        // own groups; the textual branch group comes right after them.
        let textual_group = numeric.captures_len() + 1;

        Ok(Self {
            combined,
            numeric,
            textual,
            textual_group,
        })
    }

    /// Scan text left to right for non-overlapping date references
    ///
    /// Matches whose structured parts cannot be recovered are reported to the
    /// observer and skipped; the scan always runs to the end of the text.
    pub fn scan(&self, text: &str, observer: &dyn ExtractionObserver) -> Vec<DateMatch> {
        let mut matches = Vec::new();

        for caps in self.combined.captures_iter(text) {
            if let Some(date_match) = self.dispatch(&caps, observer) {
                matches.push(date_match);
            }
        }

        debug!("Scanned {} chars, {} date references", text.len(), matches.len());
        matches
    }

    fn dispatch(
        &self,
        caps: &Captures<'_>,
        observer: &dyn ExtractionObserver,
    ) -> Option<DateMatch> {
        if let Some(raw) = non_empty(caps, 1) {
            return self.numeric_match(raw, observer);
        }
        if let Some(raw) = non_empty(caps, self.textual_group) {
            return self.textual_match(raw, observer);
        }
        None
    }

    fn numeric_match(&self, raw: &str, observer: &dyn ExtractionObserver) -> Option<DateMatch> {
        let year = self
            .numeric
            .captures(raw)
            .and_then(|caps| caps.name("year"))
            .and_then(|m| m.as_str().trim().parse::<i32>().ok());

        match year {
            Some(year) => Some(DateMatch::Numeric(year)),
            None => {
                observer.observe(&ExtractionEvent::NumericConversionFailed {
                    raw: raw.to_string(),
                });
                None
            }
        }
    }

    fn textual_match(&self, raw: &str, observer: &dyn ExtractionObserver) -> Option<DateMatch> {
        let parts = self.textual.captures(raw).and_then(|caps| {
            let century = caps.name("century").map(|m| m.as_str())?;
            if century.is_empty() {
                return None;
            }
            let part = caps
                .name("part")
                .map(|m| m.as_str())
                .filter(|p| !p.is_empty())
                .map(str::to_string);
            Some((century.to_string(), part))
        });

        match parts {
            Some((century, part)) => Some(DateMatch::Textual { century, part }),
            None => {
                observer.observe(&ExtractionEvent::TextualRematchFailed {
                    raw: raw.to_string(),
                });
                None
            }
        }
    }
}

fn anchored(pattern: &str) -> String {
    format!("\\A(?:{}\n)", pattern)
}

fn compile(pattern: &str, name: &'static str) -> Result<Regex, ExtractorError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .ignore_whitespace(true)
        .build()
        .map_err(|source| ExtractorError::PatternCompilation {
            pattern: name,
            source,
        })
}

fn require_group(
    regex: &Regex,
    pattern: &'static str,
    group: &'static str,
) -> Result<(), ExtractorError> {
    if regex.capture_names().flatten().any(|name| name == group) {
        Ok(())
    } else {
        Err(ExtractorError::MissingCaptureGroup { pattern, group })
    }
}

fn non_empty<'t>(caps: &Captures<'t>, group: usize) -> Option<&'t str> {
    caps.get(group).map(|m| m.as_str()).filter(|s| !s.is_empty())
}
