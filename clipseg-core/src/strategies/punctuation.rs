//! Punctuation splitting

use super::{push_trimmed, SegmentationStrategy, StrategyContext};
use crate::charset::is_any_punctuation;
use crate::error::Result;

/// Splits text on every ASCII or CJK punctuation mark
#[derive(Debug, Clone, Default)]
pub struct PunctuationStrategy;

impl PunctuationStrategy {
    /// Create a new punctuation strategy
    pub fn new() -> Self {
        Self
    }
}

impl SegmentationStrategy for PunctuationStrategy {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        for piece in text.split(is_any_punctuation) {
            push_trimmed(&mut segments, piece);
        }
        Ok(segments)
    }
}
