//! Result post-processing
//!
//! Raw strategy output is cleaned in four passes:
//!
//! 1. trim every fragment and drop repeats, keeping the first occurrence
//! 2. drop empty fragments
//! 3. glue short function words and single letters onto the next fragment
//! 4. keep only fragments of 1 to [`MAX_SEGMENT_CHARS`] characters

use crate::lexicon::{lexicon, Lexicon};
use std::collections::HashSet;

/// Longest segment ever returned
pub const MAX_SEGMENT_CHARS: usize = 200;

/// Fragments at most this long are merge candidates
const MERGE_MAX_CHARS: usize = 2;

/// Cleans raw strategy output into the final segment list
#[derive(Debug, Clone)]
pub struct PostProcessor {
    lexicon: &'static Lexicon,
}

impl Default for PostProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PostProcessor {
    /// Create a post-processor backed by the embedded lexicon
    pub fn new() -> Self {
        Self { lexicon: lexicon() }
    }

    /// Run every pass over `raw`
    pub fn process<I, S>(&self, raw: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique = dedupe_trimmed(raw);
        let merged = self.merge_orphans(unique);
        merged
            .into_iter()
            .filter(|s| {
                let len = s.chars().count();
                (1..=MAX_SEGMENT_CHARS).contains(&len)
            })
            .collect()
    }

    fn is_orphan(&self, fragment: &str) -> bool {
        let mut chars = fragment.chars();
        let single_letter =
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic());
        fragment.chars().count() <= MERGE_MAX_CHARS
            && (single_letter || self.lexicon.is_merge_candidate(fragment))
    }

    fn merge_orphans(&self, fragments: Vec<String>) -> Vec<String> {
        let mut merged = Vec::with_capacity(fragments.len());
        let mut iter = fragments.into_iter();

        while let Some(current) = iter.next() {
            if self.is_orphan(&current) {
                if let Some(next) = iter.next() {
                    merged.push(format!("{current}{next}"));
                    continue;
                }
            }
            merged.push(current);
        }

        merged
    }
}

/// Trim, drop empties and remove repeats preserving first occurrence
fn dedupe_trimmed<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(raw: &[&str]) -> Vec<String> {
        PostProcessor::new().process(raw)
    }

    #[test]
    fn test_trim_and_dedupe_keep_first_occurrence() {
        assert_eq!(
            process(&["  beta ", "alpha", "beta", " alpha", "gamma"]),
            vec!["beta", "alpha", "gamma"]
        );
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert_eq!(process(&["", "   ", "\t\n", "kept"]), vec!["kept"]);
        assert!(process(&[]).is_empty());
    }

    #[test]
    fn test_function_word_merged_into_next() {
        assert_eq!(process(&["的", "世界", "你好"]), vec!["的世界", "你好"]);
        assert_eq!(process(&["因为", "下雨"]), vec!["因为下雨"]);
    }

    #[test]
    fn test_single_letter_concatenated_with_next() {
        assert_eq!(process(&["a", "Dog", "runs"]), vec!["aDog", "runs"]);
        assert_eq!(process(&["x", "1"]), vec!["x1"]);
    }

    #[test]
    fn test_merge_is_single_pass() {
        // the merged pair is not reconsidered, the third item stands alone
        assert_eq!(process(&["x", "y", "z"]), vec!["xy", "z"]);
    }

    #[test]
    fn test_trailing_orphan_kept() {
        assert_eq!(process(&["hello", "的"]), vec!["hello", "的"]);
    }

    #[test]
    fn test_non_candidates_untouched() {
        assert_eq!(process(&["ok", "1.", "我"]), vec!["ok", "1.", "我"]);
    }

    #[test]
    fn test_length_window() {
        let long = "x".repeat(MAX_SEGMENT_CHARS + 1);
        let edge = "字".repeat(MAX_SEGMENT_CHARS);
        let result = process(&[long.as_str(), edge.as_str(), "y"]);
        assert_eq!(result, vec![edge.clone(), "y".to_string()]);
    }
}
