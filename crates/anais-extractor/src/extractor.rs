//! Core Extractor implementation

use crate::aggregate::DateAggregate;
use crate::config::DateConfig;
use crate::context::{build_context, windowed_mean_deviation};
use crate::error::ExtractorError;
use crate::matcher::{DateMatch, MatchDispatcher};
use crate::observer::TracingObserver;
use crate::resolver::IntervalResolver;
use crate::types::{DateAnalysisResult, DateInfo, TemporalContext};
use anais_domain::{ExtractionEvent, ExtractionObserver, MeanDeviation, YearWindow};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Extracts and analyzes temporal references in historical text
///
/// The configuration is fixed at construction. Calls share no state, so one
/// extractor can serve any number of threads.
pub struct DateExtractor {
    engine: Option<Engine>,
    observer: Arc<dyn ExtractionObserver>,
}

struct Engine {
    config: DateConfig,
    dispatcher: MatchDispatcher,
}

impl DateExtractor {
    /// Create a new extractor from a validated configuration
    ///
    /// # Errors
    /// Returns an error if the configured patterns do not compile or lack
    /// their required named groups
    pub fn new(config: DateConfig) -> Result<Self, ExtractorError> {
        let dispatcher = MatchDispatcher::new(config.patterns())?;

        Ok(Self {
            engine: Some(Engine { config, dispatcher }),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Create a new extractor from a JSON or TOML configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let config = DateConfig::from_file(path)?;
        Self::new(config)
    }

    /// Create a new extractor from an already-parsed JSON mapping
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ExtractorError> {
        let config = DateConfig::from_json_value(value)?;
        Self::new(config)
    }

    /// An extractor without configuration
    ///
    /// Every entry point returns the empty result.
    pub fn disabled() -> Self {
        Self {
            engine: None,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Load from a file, or fall back to a disabled extractor
    ///
    /// The failure is logged here, once. Batch pipelines use this so that a
    /// broken date configuration never stops other documents from being
    /// processed.
    pub fn from_path_or_disabled<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(extractor) => extractor,
            Err(e) => {
                error!(
                    "Failed to load date configuration from '{}': {}. Date extraction disabled.",
                    path.display(),
                    e
                );
                Self::disabled()
            }
        }
    }

    /// Build from a JSON mapping, or fall back to a disabled extractor
    ///
    /// Same policy as [`DateExtractor::from_path_or_disabled`].
    pub fn from_json_value_or_disabled(value: serde_json::Value) -> Self {
        match Self::from_json_value(value) {
            Ok(extractor) => extractor,
            Err(e) => {
                error!("Invalid date configuration mapping: {}. Date extraction disabled.", e);
                Self::disabled()
            }
        }
    }

    /// Replace the observer receiving extraction events
    pub fn with_observer(mut self, observer: Arc<dyn ExtractionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Whether a valid configuration is loaded
    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    /// The loaded configuration, if any
    pub fn config(&self) -> Option<&DateConfig> {
        self.engine.as_ref().map(|engine| &engine.config)
    }

    /// Date references in order of appearance
    pub fn scan(&self, text: &str) -> Vec<DateMatch> {
        match self.engine(text) {
            Some(engine) => engine.dispatcher.scan(text, self.observer.as_ref()),
            None => Vec::new(),
        }
    }

    /// Resolve every reference of a text into distinct years and intervals
    ///
    /// Unknown centuries are dropped; everything else in the text is still
    /// processed.
    pub fn collect(&self, text: &str) -> DateAggregate {
        match self.engine(text) {
            Some(engine) => self.collect_with(engine, text),
            None => DateAggregate::new(),
        }
    }

    /// Extract all dates and summarize them statistically
    pub fn extract_and_analyze(&self, text: &str) -> DateAnalysisResult {
        match self.engine(text) {
            Some(engine) => self
                .collect_with(engine, text)
                .analyze(self.observer.as_ref()),
            None => DateAnalysisResult::empty(),
        }
    }

    /// Extract all dates as individual references
    pub fn extract_dates(&self, text: &str) -> Vec<DateInfo> {
        self.collect(text).date_infos()
    }

    /// Mean and mean absolute deviation of the years inside a window
    ///
    /// Returns `None` when no year falls inside the window.
    pub fn windowed_mean_deviation(&self, text: &str, window: YearWindow) -> Option<MeanDeviation> {
        windowed_mean_deviation(&self.extract_dates(text), window)
    }

    /// Document-level temporal summary over the configured analysis window
    ///
    /// Never fails: without a valid configuration the empty context is
    /// returned.
    pub fn temporal_context(&self, text: &str) -> TemporalContext {
        let Some(engine) = self.engine.as_ref() else {
            self.observer.observe(&ExtractionEvent::ExtractionDisabled);
            return TemporalContext::empty();
        };

        build_context(&self.extract_dates(text), engine.config.analysis_window())
    }

    fn collect_with(&self, engine: &Engine, text: &str) -> DateAggregate {
        let mut aggregate = DateAggregate::new();

        info!("Searching for dates in {} chars of text", text.len());

        let resolver = IntervalResolver::new(&engine.config);
        let observer = self.observer.as_ref();

        for date_match in engine.dispatcher.scan(text, observer) {
            match date_match {
                DateMatch::Numeric(year) => aggregate.add_year(year),
                DateMatch::Textual { century, part } => {
                    if let Some(interval) = resolver.resolve(&century, part.as_deref(), observer) {
                        aggregate.add_interval(interval);
                    }
                }
            }
        }

        aggregate
    }

    /// The engine, if extraction can run on this text
    fn engine(&self, text: &str) -> Option<&Engine> {
        let Some(engine) = self.engine.as_ref() else {
            self.observer.observe(&ExtractionEvent::ExtractionDisabled);
            return None;
        };

        if text.is_empty() {
            warn!("Empty input text for date analysis");
            return None;
        }

        Some(engine)
    }
}

impl std::fmt::Debug for DateExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateExtractor")
            .field("enabled", &self.is_enabled())
            .field("config", &self.config())
            .finish()
    }
}
