//! Clipboard capabilities and the change-detecting watcher
//!
//! The host application supplies a [`ClipboardReader`] and a
//! [`ReportPublisher`]. Read failures of any kind mean "no text": the
//! watcher logs them and skips the poll.

use crate::analyzer::ClipboardContentAnalyzer;
use crate::error::Result;
use crate::report::{AnalysisReport, ReportType};
use thiserror::Error;
use tracing::{debug, warn};

/// Why the clipboard could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The platform refused access
    #[error("clipboard permission denied")]
    PermissionDenied,

    /// Transient read failure
    #[error("clipboard I/O error: {0}")]
    Io(String),

    /// Read attempted from a context that may not access the clipboard
    #[error("clipboard unavailable in this security context: {0}")]
    SecurityContext(String),
}

/// Source of clipboard text
pub trait ClipboardReader: Send + Sync {
    /// Current clipboard text, `None` when it holds no text
    fn read_text(&self) -> std::result::Result<Option<String>, ClipboardError>;
}

/// Fire-and-forget sink for new reports
pub trait ReportPublisher: Send + Sync {
    /// Announce a report to other surfaces
    fn publish(&self, report: &AnalysisReport);
}

/// Polls a clipboard and publishes a report whenever its text changes
pub struct ClipboardWatcher<R, P> {
    reader: R,
    publisher: P,
    analyzer: ClipboardContentAnalyzer,
    last_text: Option<String>,
}

impl<R: ClipboardReader, P: ReportPublisher> ClipboardWatcher<R, P> {
    /// Create a watcher
    pub fn new(reader: R, publisher: P, analyzer: ClipboardContentAnalyzer) -> Self {
        Self {
            reader,
            publisher,
            analyzer,
            last_text: None,
        }
    }

    /// Read the clipboard once
    ///
    /// Returns the published report, or `None` when the clipboard could
    /// not be read, holds no text, or has not changed since the last poll.
    pub fn poll(&mut self) -> Option<AnalysisReport> {
        match self.try_poll() {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "clipboard read failed");
                None
            }
        }
    }

    /// Like [`poll`](Self::poll), but reports why the clipboard was unreadable
    pub fn try_poll(&mut self) -> Result<Option<AnalysisReport>> {
        let Some(text) = self.reader.read_text()? else {
            return Ok(None);
        };

        if self.last_text.as_deref() == Some(text.as_str()) {
            debug!("clipboard unchanged");
            return Ok(None);
        }

        let report = self.analyzer.analyze(&text);
        self.last_text = Some(text);
        if report.report_type == ReportType::Empty {
            return Ok(None);
        }

        self.publisher.publish(&report);
        Ok(Some(report))
    }

    /// Forget the last seen text so the next poll always analyzes
    pub fn reset(&mut self) {
        self.last_text = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use clipseg_engine::Segmenter;
    use std::sync::{Arc, Mutex};

    type Read = std::result::Result<Option<String>, ClipboardError>;

    struct FakeClipboard {
        next: Mutex<Vec<Read>>,
    }

    impl FakeClipboard {
        fn queue(mut reads: Vec<Read>) -> Self {
            reads.reverse();
            Self {
                next: Mutex::new(reads),
            }
        }
    }

    impl ClipboardReader for FakeClipboard {
        fn read_text(&self) -> Read {
            self.next.lock().unwrap().pop().unwrap_or(Ok(None))
        }
    }

    #[derive(Default, Clone)]
    struct Collector {
        reports: Arc<Mutex<Vec<AnalysisReport>>>,
    }

    impl ReportPublisher for Collector {
        fn publish(&self, report: &AnalysisReport) {
            self.reports.lock().unwrap().push(report.clone());
        }
    }

    fn watcher(reads: Vec<Read>) -> (ClipboardWatcher<FakeClipboard, Collector>, Collector) {
        let collector = Collector::default();
        let analyzer = ClipboardContentAnalyzer::new(Arc::new(Segmenter::new()));
        let watcher = ClipboardWatcher::new(
            FakeClipboard::queue(reads),
            collector.clone(),
            analyzer,
        );
        (watcher, collector)
    }

    #[test]
    fn test_read_failures_mean_no_text() {
        let (mut watcher, collector) = watcher(vec![
            Err(ClipboardError::PermissionDenied),
            Err(ClipboardError::Io("busy".to_string())),
            Err(ClipboardError::SecurityContext("background".to_string())),
            Ok(None),
        ]);

        for _ in 0..4 {
            assert!(watcher.poll().is_none());
        }
        assert!(collector.reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_try_poll_reports_read_failure() {
        let (mut watcher, collector) = watcher(vec![
            Err(ClipboardError::PermissionDenied),
            Ok(Some("Hello world.".to_string())),
        ]);

        assert!(matches!(
            watcher.try_poll(),
            Err(ApiError::Clipboard(ClipboardError::PermissionDenied))
        ));
        assert!(watcher.try_poll().unwrap().is_some());
        assert_eq!(collector.reports.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_unchanged_text_is_skipped() {
        let (mut watcher, collector) = watcher(vec![
            Ok(Some("Hello world.".to_string())),
            Ok(Some("Hello world.".to_string())),
            Ok(Some("Another line.".to_string())),
        ]);

        assert!(watcher.poll().is_some());
        assert!(watcher.poll().is_none());
        assert!(watcher.poll().is_some());
        assert_eq!(collector.reports.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_text_not_published() {
        let (mut watcher, collector) = watcher(vec![Ok(Some("   ".to_string()))]);
        assert!(watcher.poll().is_none());
        assert!(collector.reports.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reset_reanalyzes() {
        let (mut watcher, _) = watcher(vec![
            Ok(Some("Hello world.".to_string())),
            Ok(Some("Hello world.".to_string())),
        ]);
        assert!(watcher.poll().is_some());
        watcher.reset();
        assert!(watcher.poll().is_some());
    }
}
