//! Clipboard snapshot analysis

use crate::detectors::{
    code_keyword_count, find_links, has_emails, has_paths, has_phones, looks_like_table,
    CODE_KEYWORD_THRESHOLD,
};
use crate::error::Result;
use crate::report::{AnalysisReport, DetailFlags, ReportType};
use clipseg_core::charset::ScriptCounts;
use clipseg_core::url_kind::classify_url_str;
use clipseg_engine::{SegmentationOptions, Segmenter};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Input length in characters above which analysis segments off-thread
pub const ANALYZER_OFFLOAD_THRESHOLD: usize = 500;

/// Builds [`AnalysisReport`]s for clipboard snapshots
#[derive(Debug, Clone)]
pub struct ClipboardContentAnalyzer {
    segmenter: Arc<Segmenter>,
    options: SegmentationOptions,
}

impl ClipboardContentAnalyzer {
    /// Create an analyzer sharing `segmenter`
    pub fn new(segmenter: Arc<Segmenter>) -> Self {
        let options = SegmentationOptions {
            offload_threshold: ANALYZER_OFFLOAD_THRESHOLD,
            ..SegmentationOptions::default()
        };
        Self::with_options(segmenter, options)
    }

    /// Create an analyzer with explicit segmentation options
    pub fn with_options(segmenter: Arc<Segmenter>, options: SegmentationOptions) -> Self {
        Self { segmenter, options }
    }

    /// Create an analyzer with segmentation options read from a TOML file
    ///
    /// Values missing from the file take the engine defaults, not the
    /// analyzer's 500 character offload threshold.
    pub fn from_options_file(segmenter: Arc<Segmenter>, path: impl AsRef<Path>) -> Result<Self> {
        let options = SegmentationOptions::from_file(path)?;
        Ok(Self::with_options(segmenter, options))
    }

    /// Segmentation options used for every snapshot
    pub fn options(&self) -> &SegmentationOptions {
        &self.options
    }

    /// Analyze one snapshot
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        if text.trim().is_empty() {
            return AnalysisReport::empty();
        }

        let links = find_links(text);
        let code_keywords = code_keyword_count(text);
        let counts = ScriptCounts::of(text);

        let details = DetailFlags {
            has_links: !links.is_empty(),
            has_paths: has_paths(text),
            has_emails: has_emails(text),
            has_phones: has_phones(text),
            has_code: code_keywords >= CODE_KEYWORD_THRESHOLD,
            has_table: looks_like_table(text),
            has_chinese: counts.cjk > 0,
            has_english: counts.latin > 0,
        };

        let report_type = report_type(&details, counts);
        debug!(
            report_type = ?report_type,
            links = links.len(),
            code_keywords,
            "clipboard snapshot analyzed"
        );

        let segments = self.segmenter.segment(text, &self.options);
        let structured_data = structured_data(&links, &segments);

        AnalysisReport {
            report_type,
            confidence: report_type.confidence(),
            details,
            links,
            segments,
            structured_data,
        }
    }
}

/// First matching type in priority order
fn report_type(details: &DetailFlags, counts: ScriptCounts) -> ReportType {
    if details.has_links {
        ReportType::Links
    } else if details.has_code {
        ReportType::Code
    } else if details.has_paths {
        ReportType::Paths
    } else if details.has_table {
        ReportType::Table
    } else if counts.cjk > counts.latin {
        ReportType::ChineseText
    } else if counts.latin > 0 {
        ReportType::EnglishText
    } else {
        ReportType::Unknown
    }
}

fn structured_data(links: &[String], segments: &[String]) -> Map<String, Value> {
    let mut categories: Map<String, Value> = Map::new();
    for link in links {
        let kind = classify_url_str(link).as_str().to_string();
        let entry = categories
            .entry(kind)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(urls) = entry {
            urls.push(Value::String(link.clone()));
        }
    }

    let mut data = Map::new();
    data.insert("linkCategories".to_string(), Value::Object(categories));
    data.insert("segmentCount".to_string(), Value::from(segments.len()));
    data.insert(
        "segments".to_string(),
        Value::Array(segments.iter().cloned().map(Value::String).collect()),
    );
    data
}
