//! Analysis report data transfer objects

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Overall category of a clipboard snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Nothing but whitespace
    Empty,
    /// Contains http(s) links
    Links,
    /// Source code
    Code,
    /// File system paths
    Paths,
    /// Tab or pipe separated rows
    Table,
    /// Mostly Chinese prose
    ChineseText,
    /// Latin prose
    EnglishText,
    /// None of the above
    Unknown,
}

impl ReportType {
    /// Fixed confidence attached to this type
    pub fn confidence(&self) -> f64 {
        match self {
            ReportType::Empty => 1.0,
            ReportType::Links | ReportType::Code => 0.8,
            ReportType::Paths
            | ReportType::Table
            | ReportType::ChineseText
            | ReportType::EnglishText => 0.7,
            ReportType::Unknown => 0.5,
        }
    }
}

/// Detector results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailFlags {
    /// At least one http(s) link
    pub has_links: bool,
    /// At least one file system path
    pub has_paths: bool,
    /// At least one email address
    pub has_emails: bool,
    /// At least one phone number
    pub has_phones: bool,
    /// Three or more distinct code keywords
    pub has_code: bool,
    /// Tabular layout
    pub has_table: bool,
    /// Any CJK ideograph
    pub has_chinese: bool,
    /// Any Latin letter
    pub has_english: bool,
}

/// Result of analyzing one clipboard snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Report category
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Confidence in `report_type`, in `[0, 1]`
    pub confidence: f64,
    /// Detector flags
    pub details: DetailFlags,
    /// Links in order of appearance, without duplicates
    pub links: Vec<String>,
    /// Segments of the snapshot
    pub segments: Vec<String>,
    /// Link categories and segment data for the extension side
    pub structured_data: Map<String, Value>,
}

impl AnalysisReport {
    /// Report for a blank snapshot
    pub fn empty() -> Self {
        Self {
            report_type: ReportType::Empty,
            confidence: ReportType::Empty.confidence(),
            details: DetailFlags::default(),
            links: Vec::new(),
            segments: Vec::new(),
            structured_data: Map::new(),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
