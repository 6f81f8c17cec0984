//! Identifier decomposition
//!
//! Tokens are split on whitespace and each token is decomposed by the first
//! rule that applies:
//!
//! 1. case boundaries (`getUserName`, `HTTPRequest`, `strName`)
//! 2. `snake_case`
//! 3. `kebab-case`
//! 4. call syntax `name(arg, arg)`
//! 5. namespace separators `::` and `.`
//!
//! Tokens matching no rule are emitted unchanged.

use super::{push_trimmed, SegmentationStrategy, StrategyContext};
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

static CALL_SYNTAX: OnceLock<Regex> = OnceLock::new();

fn call_syntax() -> &'static Regex {
    CALL_SYNTAX.get_or_init(|| {
        Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\((.*)\)$").expect("call pattern must compile")
    })
}

fn is_lower_like(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

/// Byte offsets where a case-boundary split starts a new part
///
/// A boundary sits before an uppercase letter that follows a lowercase
/// letter or digit, and before the last letter of an uppercase run when a
/// lowercase letter comes next, so `HTTPRequest` splits as `HTTP|Request`
/// and `IOStream` as `IO|Stream`.
fn case_boundaries(token: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = token.char_indices().collect();
    let mut boundaries = Vec::new();

    for i in 1..chars.len() {
        let (offset, cur) = chars[i];
        let prev = chars[i - 1].1;
        if !cur.is_ascii_uppercase() {
            continue;
        }
        let after_lower = is_lower_like(prev);
        let ends_acronym = prev.is_ascii_uppercase()
            && chars
                .get(i + 1)
                .is_some_and(|&(_, next)| next.is_ascii_lowercase());
        if after_lower || ends_acronym {
            boundaries.push(offset);
        }
    }

    boundaries
}

/// Split an identifier at its case boundaries
pub fn split_case(token: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for boundary in case_boundaries(token) {
        parts.push(&token[start..boundary]);
        start = boundary;
    }
    parts.push(&token[start..]);
    parts
}

/// Decomposes programming identifiers into their words
#[derive(Debug, Clone, Default)]
pub struct CodeStrategy;

impl CodeStrategy {
    /// Create a new code strategy
    pub fn new() -> Self {
        Self
    }

    fn decompose(token: &str, out: &mut Vec<String>) {
        if !case_boundaries(token).is_empty() {
            for part in split_case(token) {
                push_trimmed(out, part);
            }
        } else if token.contains('_') {
            token.split('_').for_each(|part| push_trimmed(out, part));
        } else if token.contains('-') {
            token.split('-').for_each(|part| push_trimmed(out, part));
        } else if let Some(caps) = call_syntax().captures(token) {
            push_trimmed(out, &caps[1]);
            caps[2].split(',').for_each(|arg| push_trimmed(out, arg));
        } else if token.contains("::") {
            token.split("::").for_each(|part| push_trimmed(out, part));
        } else if token.contains('.') {
            token.split('.').for_each(|part| push_trimmed(out, part));
        } else {
            push_trimmed(out, token);
        }
    }
}

impl SegmentationStrategy for CodeStrategy {
    fn name(&self) -> &str {
        "code"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        for token in text.split_whitespace() {
            Self::decompose(token, &mut segments);
        }
        Ok(segments)
    }
}
