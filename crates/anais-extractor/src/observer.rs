//! Observer implementations for extraction events

use anais_domain::{ExtractionEvent, ExtractionObserver};
use std::sync::Mutex;
use tracing::{debug, error, warn};

/// Forwards extraction events to `tracing`
///
/// This is the default observer of every extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExtractionObserver for TracingObserver {
    fn observe(&self, event: &ExtractionEvent) {
        match event {
            ExtractionEvent::StatisticsFailed { .. } => error!("{}", event),
            // Already reported once when the extractor was built
            ExtractionEvent::ExtractionDisabled => debug!("{}", event),
            _ => warn!("{}", event),
        }
    }
}

/// Collects extraction events in memory
///
/// Useful in tests and for callers that attach warnings to a processed
/// document.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ExtractionEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<ExtractionEvent> {
        self.lock().clone()
    }

    /// Number of recorded events of a given kind
    pub fn count_of(&self, kind: &str) -> usize {
        self.lock().iter().filter(|e| e.kind() == kind).count()
    }

    /// Forget all recorded events
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ExtractionEvent>> {
        // A panic while pushing cannot leave the Vec inconsistent
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ExtractionObserver for RecordingObserver {
    fn observe(&self, event: &ExtractionEvent) {
        self.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_collects_events() {
        let observer = RecordingObserver::new();
        observer.observe(&ExtractionEvent::ExtractionDisabled);
        observer.observe(&ExtractionEvent::NumericConversionFailed {
            raw: "17x9".to_string(),
        });

        assert_eq!(observer.events().len(), 2);
        assert_eq!(observer.count_of("extraction_disabled"), 1);

        observer.clear();
        assert!(observer.events().is_empty());
    }

    #[test]
    fn test_tracing_observer_accepts_every_event() {
        let observer = TracingObserver;
        observer.observe(&ExtractionEvent::StatisticsFailed {
            reason: "non-finite mean".to_string(),
        });
        observer.observe(&ExtractionEvent::ExtractionDisabled);
    }
}
