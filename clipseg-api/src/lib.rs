//! Clipboard analysis surface for clipseg
//!
//! [`ClipboardContentAnalyzer`] turns one clipboard snapshot into an
//! [`AnalysisReport`]: detector flags, a report type with a fixed
//! confidence, the links found, and the segments produced by a shared
//! [`Segmenter`](clipseg_engine::Segmenter). [`ClipboardWatcher`] drives
//! the analyzer from a [`ClipboardReader`] and hands fresh reports to a
//! [`ReportPublisher`].
//!
//! # Example
//!
//! ```rust
//! use clipseg_api::{ClipboardContentAnalyzer, ReportType};
//! use clipseg_engine::Segmenter;
//! use std::sync::Arc;
//!
//! let analyzer = ClipboardContentAnalyzer::new(Arc::new(Segmenter::new()));
//! let report = analyzer.analyze("See https://github.com/foo/bar for details");
//!
//! assert_eq!(report.report_type, ReportType::Links);
//! assert_eq!(report.links, vec!["https://github.com/foo/bar"]);
//! assert!(report.details.has_links);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod clipboard;
pub mod detectors;
pub mod error;
pub mod report;

pub use analyzer::{ClipboardContentAnalyzer, ANALYZER_OFFLOAD_THRESHOLD};
pub use clipboard::{ClipboardError, ClipboardReader, ClipboardWatcher, ReportPublisher};
pub use error::{ApiError, Result};
pub use report::{AnalysisReport, DetailFlags, ReportType};
