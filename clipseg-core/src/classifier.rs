//! Heuristic content-type classification
//!
//! Rules are checked in priority order and the first match wins:
//! url, list, code, wrapped, then a script count decides between mixed,
//! chinese, english and unknown.

use crate::charset::{ScriptCounts, WRAPPING_PAIRS};
use crate::strategies::list::list_item_body;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static IDENTIFIER_SHAPES: OnceLock<RegexSet> = OnceLock::new();

fn identifier_shapes() -> &'static RegexSet {
    IDENTIFIER_SHAPES.get_or_init(|| {
        RegexSet::new([
            // camelCase
            r"^[a-z][a-z0-9]*(?:[A-Z][a-z0-9]*)+$",
            // PascalCase with at least two humps
            r"^[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]*)+$",
            // acronym followed by a capitalized word, e.g. IOStream
            r"^[A-Z]+[A-Z][a-z0-9]{2,}[A-Za-z0-9]*$",
            // snake_case
            r"^[A-Za-z][A-Za-z0-9]*(?:_[A-Za-z0-9]+)+$",
            // kebab-case
            r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)+$",
        ])
        .expect("identifier patterns must compile")
    })
}

/// Category assigned to a text before strategies are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Text starting with an http(s) URL
    Url,
    /// Lines with list markers
    List,
    /// Programming identifiers
    Code,
    /// Bracketed or quoted content
    Wrapped,
    /// Both Chinese and Latin letters
    Mixed,
    /// Chinese-dominant text
    Chinese,
    /// Latin text
    English,
    /// Nothing recognizable
    Unknown,
}

impl ContentType {
    /// All content types in classification priority order
    pub const ALL: [ContentType; 8] = [
        ContentType::Url,
        ContentType::List,
        ContentType::Code,
        ContentType::Wrapped,
        ContentType::Mixed,
        ContentType::Chinese,
        ContentType::English,
        ContentType::Unknown,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Url => "url",
            ContentType::List => "list",
            ContentType::Code => "code",
            ContentType::Wrapped => "wrapped",
            ContentType::Mixed => "mixed",
            ContentType::Chinese => "chinese",
            ContentType::English => "english",
            ContentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown content type: {s}"))
    }
}

/// Classify `text` into exactly one content type
///
/// Pure and total: the same input always yields the same tag and the empty
/// string is `Unknown`.
pub fn classify(text: &str) -> ContentType {
    if starts_with_url(text) {
        return ContentType::Url;
    }
    if text.lines().any(|line| list_item_body(line).is_some()) {
        return ContentType::List;
    }
    if contains_identifier(text) {
        return ContentType::Code;
    }
    if contains_wrapping(text) {
        return ContentType::Wrapped;
    }

    let counts = ScriptCounts::of(text);
    if counts.cjk > 0 && counts.latin > 0 {
        ContentType::Mixed
    } else if counts.cjk > counts.latin {
        ContentType::Chinese
    } else if counts.latin > 0 {
        ContentType::English
    } else {
        ContentType::Unknown
    }
}

/// Only a leading URL makes the whole text `Url`. A URL inside prose keeps
/// the prose classification, so the URL strategy does not run on it with
/// the default recommendations.
fn starts_with_url(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with("http://") || trimmed.starts_with("https://")
}

/// Check if any ASCII word in `text` has an identifier shape
pub fn contains_identifier(text: &str) -> bool {
    let shapes = identifier_shapes();
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .filter(|token| token.len() > 2)
        .any(|token| shapes.is_match(token))
}

/// Check if `text` holds an opening wrapper followed later by its closer
pub fn contains_wrapping(text: &str) -> bool {
    WRAPPING_PAIRS.iter().any(|&(open, close)| {
        text.find(open)
            .is_some_and(|start| text[start + open.len_utf8()..].contains(close))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(classify(""), ContentType::Unknown);
        assert_eq!(classify("   \n\t"), ContentType::Unknown);
        assert_eq!(classify("123 456"), ContentType::Unknown);
    }

    #[test]
    fn test_url() {
        assert_eq!(classify("https://github.com/foo/bar?x=1"), ContentType::Url);
        assert_eq!(classify("  http://example.com"), ContentType::Url);
    }

    #[test]
    fn test_embedded_url_keeps_prose_type() {
        assert_eq!(
            classify("See https://github.com/foo/bar"),
            ContentType::English
        );
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(classify("1. First item\n2. Second item"), ContentType::List);
        assert_eq!(classify("intro\n- bullet"), ContentType::List);
        assert_eq!(classify("一、总则"), ContentType::List);
        assert_eq!(classify("①第一"), ContentType::List);
        assert_eq!(classify("a. alpha"), ContentType::List);
        assert_eq!(classify("• dot"), ContentType::List);
    }

    #[test]
    fn test_code_shapes() {
        assert_eq!(classify("call getUserName now"), ContentType::Code);
        assert_eq!(classify("HttpClient"), ContentType::Code);
        assert_eq!(classify("HTTPRequest"), ContentType::Code);
        assert_eq!(classify("max_cache_entries"), ContentType::Code);
        assert_eq!(classify("side-panel"), ContentType::Code);
    }

    #[test]
    fn test_plain_capitalized_words_are_not_code() {
        assert_eq!(
            classify("Hello world. This is a test!"),
            ContentType::English
        );
        assert_eq!(classify("NASA and URLs"), ContentType::English);
    }

    #[test]
    fn test_wrapped() {
        assert_eq!(classify("他说“你好”"), ContentType::Wrapped);
        assert_eq!(classify("see (below)"), ContentType::Wrapped);
        assert_eq!(classify("《三体》"), ContentType::Wrapped);
        // unmatched opener is not wrapping
        assert_eq!(classify("see (below"), ContentType::English);
    }

    #[test]
    fn test_script_rules() {
        assert_eq!(classify("今天天气很好。"), ContentType::Chinese);
        assert_eq!(classify("Hello 世界"), ContentType::Mixed);
        assert_eq!(classify("plain words"), ContentType::English);
    }

    #[test]
    fn test_priority_list_over_code() {
        assert_eq!(classify("1. call getUserName"), ContentType::List);
    }

    #[test]
    fn test_content_type_round_trip_names() {
        for content_type in ContentType::ALL {
            assert_eq!(
                content_type.as_str().parse::<ContentType>(),
                Ok(content_type)
            );
        }
        assert!("nope".parse::<ContentType>().is_err());
    }
}
