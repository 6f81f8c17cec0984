//! Chinese word segmentation by maximum forward matching
//!
//! This is an approximation: the word list is small and fixed, and any
//! character not covered by a listed word is emitted on its own.

use super::{SegmentationStrategy, StrategyContext};
use crate::charset::is_cjk;
use crate::error::Result;
use crate::lexicon::{lexicon, Lexicon};

/// Segment one run of CJK characters against the lexicon word list
pub fn max_forward_match(run: &[char], lexicon: &Lexicon) -> Vec<String> {
    let mut words = Vec::new();
    let mut pos = 0;

    while pos < run.len() {
        let longest = lexicon.max_word_chars().min(run.len() - pos);
        let matched = (2..=longest)
            .rev()
            .map(|len| run[pos..pos + len].iter().collect::<String>())
            .find(|candidate| lexicon.contains_word(candidate));

        match matched {
            Some(word) => {
                pos += word.chars().count();
                words.push(word);
            }
            None => {
                words.push(run[pos].to_string());
                pos += 1;
            }
        }
    }

    words
}

/// Splits Chinese runs into dictionary words
#[derive(Debug, Clone, Default)]
pub struct ChineseWordStrategy;

impl ChineseWordStrategy {
    /// Create a new Chinese word strategy
    pub fn new() -> Self {
        Self
    }
}

impl SegmentationStrategy for ChineseWordStrategy {
    fn name(&self) -> &str {
        "chinese_words"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let lexicon = lexicon();
        let mut segments = Vec::new();
        let mut run = Vec::new();

        for ch in text.chars() {
            if is_cjk(ch) {
                run.push(ch);
            } else if !run.is_empty() {
                segments.extend(max_forward_match(&run, lexicon));
                run.clear();
            }
        }
        if !run.is_empty() {
            segments.extend(max_forward_match(&run, lexicon));
        }

        Ok(segments)
    }
}
