//! Chinese sentence segmentation
//!
//! Runs of CJK text are cut at sentence-ending punctuation. Sentences
//! longer than [`LONG_SENTENCE_CHARS`] are further cut at clause
//! separators, and stand-alone function words are dropped from the
//! resulting clauses.

use super::{SegmentationStrategy, StrategyContext};
use crate::charset::{CJK_CLAUSE_SEPARATORS, CJK_SENTENCE_TERMINATORS};
use crate::error::Result;
use crate::lexicon::lexicon;
use regex::Regex;
use std::sync::OnceLock;

/// Sentences longer than this are split at clause separators
pub const LONG_SENTENCE_CHARS: usize = 50;

static CJK_RUN: OnceLock<Regex> = OnceLock::new();

fn cjk_run() -> &'static Regex {
    CJK_RUN.get_or_init(|| {
        Regex::new(
            r"[\x{4E00}-\x{9FA5}](?:[\x{4E00}-\x{9FA5}，。！？；：、“”‘’（）《》【】「」『』…—]*[\x{4E00}-\x{9FA5}])?",
        )
        .expect("CJK run pattern must compile")
    })
}

/// Splits Chinese text into sentences and long sentences into clauses
#[derive(Debug, Clone, Default)]
pub struct ChineseStrategy;

impl ChineseStrategy {
    /// Create a new Chinese strategy
    pub fn new() -> Self {
        Self
    }

    fn split_long_sentence(sentence: &str) -> Vec<String> {
        let clauses: Vec<&str> = sentence
            .split(CJK_CLAUSE_SEPARATORS)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        let lexicon = lexicon();
        let content: Vec<&str> = clauses
            .iter()
            .copied()
            .filter(|c| !lexicon.is_function_word(c))
            .collect();

        // Keep function words only when nothing else would remain
        let kept = if content.is_empty() { clauses } else { content };
        kept.into_iter().map(str::to_string).collect()
    }
}

impl SegmentationStrategy for ChineseStrategy {
    fn name(&self) -> &str {
        "chinese"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let mut segments = Vec::new();

        for run in cjk_run().find_iter(text) {
            for sentence in run.as_str().split(CJK_SENTENCE_TERMINATORS) {
                let sentence = sentence.trim();
                if sentence.is_empty() {
                    continue;
                }
                if sentence.chars().count() > LONG_SENTENCE_CHARS {
                    segments.extend(Self::split_long_sentence(sentence));
                } else {
                    segments.push(sentence.to_string());
                }
            }
        }

        Ok(segments)
    }
}
