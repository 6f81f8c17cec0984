//! Segmentation strategies
//!
//! Each strategy implements one independent algorithm behind the
//! [`SegmentationStrategy`] trait. Strategies are pure: they see the text
//! and the classified content type, and return raw fragments that the
//! post-processor cleans up afterwards.

pub mod chinese;
pub mod code;
pub mod english;
pub mod list;
pub mod punctuation;
pub mod url;
pub mod words;
pub mod wrapped;

pub use chinese::ChineseStrategy;
pub use code::CodeStrategy;
pub use english::EnglishStrategy;
pub use list::ListStrategy;
pub use punctuation::PunctuationStrategy;
pub use url::UrlStrategy;
pub use words::ChineseWordStrategy;
pub use wrapped::WrappedStrategy;

use crate::classifier::ContentType;
use crate::error::Result;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Per-call information handed to every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyContext {
    /// Content type the classifier assigned to the whole input
    pub content_type: ContentType,
}

impl StrategyContext {
    /// Create a context for the given content type
    pub fn new(content_type: ContentType) -> Self {
        Self { content_type }
    }
}

/// A segmentation algorithm for one content category
pub trait SegmentationStrategy: Send + Sync {
    /// Registry name of this strategy
    fn name(&self) -> &str;

    /// Cut `text` into raw fragments, in document order
    fn segment(&self, text: &str, context: &StrategyContext) -> Result<Vec<String>>;
}

/// Built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Chinese sentences and clauses
    Chinese,
    /// Latin sentences
    English,
    /// Identifier decomposition
    Code,
    /// URL decomposition
    Url,
    /// List item extraction
    List,
    /// Bracketed and quoted content
    Wrapped,
    /// Split on every punctuation mark
    Punctuation,
    /// Chinese maximum forward matching against the word list
    ChineseWords,
}

impl StrategyKind {
    /// Every built-in strategy, in registration order
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::Chinese,
        StrategyKind::English,
        StrategyKind::Code,
        StrategyKind::Url,
        StrategyKind::List,
        StrategyKind::Wrapped,
        StrategyKind::Punctuation,
        StrategyKind::ChineseWords,
    ];

    /// Strategies enabled when the caller does not choose
    pub const DEFAULT_SELECTION: [StrategyKind; 5] = [
        StrategyKind::Chinese,
        StrategyKind::English,
        StrategyKind::Code,
        StrategyKind::Url,
        StrategyKind::List,
    ];

    /// Registry name
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Chinese => "chinese",
            StrategyKind::English => "english",
            StrategyKind::Code => "code",
            StrategyKind::Url => "url",
            StrategyKind::List => "list",
            StrategyKind::Wrapped => "wrapped",
            StrategyKind::Punctuation => "punctuation",
            StrategyKind::ChineseWords => "chinese_words",
        }
    }

    /// Construct the strategy implementation
    pub fn build(&self) -> Arc<dyn SegmentationStrategy> {
        match self {
            StrategyKind::Chinese => Arc::new(ChineseStrategy::new()),
            StrategyKind::English => Arc::new(EnglishStrategy::new()),
            StrategyKind::Code => Arc::new(CodeStrategy::new()),
            StrategyKind::Url => Arc::new(UrlStrategy::new()),
            StrategyKind::List => Arc::new(ListStrategy::new()),
            StrategyKind::Wrapped => Arc::new(WrappedStrategy::new()),
            StrategyKind::Punctuation => Arc::new(PunctuationStrategy::new()),
            StrategyKind::ChineseWords => Arc::new(ChineseWordStrategy::new()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown strategy: {s}"))
    }
}

/// Push `piece` trimmed, skipping it when nothing is left
pub(crate) fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_strategies_report_their_kind() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.build().name(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "chinese_words".parse::<StrategyKind>(),
            Ok(StrategyKind::ChineseWords)
        );
        assert!("klingon".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_default_selection_is_subset() {
        for kind in StrategyKind::DEFAULT_SELECTION {
            assert!(StrategyKind::ALL.contains(&kind));
        }
    }
}
