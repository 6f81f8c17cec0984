//! Latin sentence segmentation

use super::{SegmentationStrategy, StrategyContext};
use crate::charset::{split_after_terminators, LATIN_SENTENCE_TERMINATORS};
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

/// Sentences longer than this are split at `", "` boundaries
pub const LONG_SENTENCE_CHARS: usize = 100;

static LATIN_RUN: OnceLock<Regex> = OnceLock::new();

fn latin_run() -> &'static Regex {
    LATIN_RUN.get_or_init(|| {
        Regex::new(r#"[A-Za-z0-9 ,.!?;:()"'<>\[\]{}]+"#).expect("Latin run pattern must compile")
    })
}

/// Splits Latin text into sentences, keeping the terminator
#[derive(Debug, Clone, Default)]
pub struct EnglishStrategy;

impl EnglishStrategy {
    /// Create a new English strategy
    pub fn new() -> Self {
        Self
    }
}

fn has_word_char(piece: &str) -> bool {
    piece.chars().any(|c| c.is_ascii_alphanumeric())
}

impl SegmentationStrategy for EnglishStrategy {
    fn name(&self) -> &str {
        "english"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let mut segments = Vec::new();

        for run in latin_run().find_iter(text) {
            for sentence in split_after_terminators(run.as_str(), &LATIN_SENTENCE_TERMINATORS) {
                let sentence = sentence.trim();
                // Runs of bare punctuation between CJK characters carry nothing
                if !has_word_char(sentence) {
                    continue;
                }
                if sentence.chars().count() > LONG_SENTENCE_CHARS {
                    segments.extend(
                        sentence
                            .split(", ")
                            .map(str::trim)
                            .filter(|clause| has_word_char(clause))
                            .map(str::to_string),
                    );
                } else {
                    segments.push(sentence.to_string());
                }
            }
        }

        Ok(segments)
    }
}
