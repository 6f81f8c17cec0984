//! Analyze text piped on stdin as if it had been copied to the clipboard
//!
//! ```sh
//! echo "See https://github.com/foo/bar" | RUST_LOG=debug cargo run --example analyze_clipboard
//! ```

use clipseg_api::{
    AnalysisReport, ClipboardContentAnalyzer, ClipboardError, ClipboardReader, ClipboardWatcher,
    ReportPublisher,
};
use clipseg_engine::Segmenter;
use std::io::Read;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

struct StdinClipboard;

impl ClipboardReader for StdinClipboard {
    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ClipboardError::Io(e.to_string()))?;
        Ok(Some(text))
    }
}

struct StdoutPublisher;

impl ReportPublisher for StdoutPublisher {
    fn publish(&self, report: &AnalysisReport) {
        match report.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to render report: {e}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let analyzer = ClipboardContentAnalyzer::new(Arc::new(Segmenter::new()));
    let mut watcher = ClipboardWatcher::new(StdinClipboard, StdoutPublisher, analyzer);

    if watcher.poll().is_none() {
        eprintln!("clipboard holds no text");
    }
}
