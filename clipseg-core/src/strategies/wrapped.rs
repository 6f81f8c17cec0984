//! Bracketed and quoted content extraction

use super::{SegmentationStrategy, StrategyContext};
use crate::charset::WRAPPING_PAIRS;
use crate::error::Result;

/// Emits the inner text of every recognized wrapping pair
#[derive(Debug, Clone, Default)]
pub struct WrappedStrategy;

impl WrappedStrategy {
    /// Create a new wrapped-content strategy
    pub fn new() -> Self {
        Self
    }
}

/// Inner spans of every wrapping pair in `text`, ordered by position
fn wrapped_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();

    for &(open, close) in WRAPPING_PAIRS.iter() {
        let mut cursor = 0;
        while let Some(rel) = text[cursor..].find(open) {
            let inner_start = cursor + rel + open.len_utf8();
            let Some(rel_end) = text[inner_start..].find(close) else {
                break;
            };
            let inner_end = inner_start + rel_end;
            spans.push((inner_start, &text[inner_start..inner_end]));
            cursor = inner_end + close.len_utf8();
        }
    }

    spans.sort_by_key(|&(start, _)| start);
    spans
}

impl SegmentationStrategy for WrappedStrategy {
    fn name(&self) -> &str {
        "wrapped"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        Ok(wrapped_spans(text)
            .into_iter()
            .map(|(_, inner)| inner.trim())
            .filter(|inner| !inner.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ContentType;

    fn run(text: &str) -> Vec<String> {
        WrappedStrategy::new()
            .segment(text, &StrategyContext::new(ContentType::Wrapped))
            .unwrap()
    }

    #[test]
    fn test_mixed_pairs_in_document_order() {
        assert_eq!(
            run("他说“你好”，然后读了《三体》(a novel) and [notes]"),
            vec!["你好", "三体", "a novel", "notes"]
        );
    }

    #[test]
    fn test_unclosed_and_empty_pairs() {
        assert_eq!(run("「」 and (open"), Vec::<String>::new());
        assert_eq!(run("<tag> then <"), vec!["tag"]);
    }

    #[test]
    fn test_repeated_pairs() {
        assert_eq!(run("(one) (two)"), vec!["one", "two"]);
    }
}
