//! Independent clipboard content detectors

use clipseg_core::strategies::url::find_urls;
use regex::{Regex, RegexSet};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Distinct code keywords needed before text counts as code
pub const CODE_KEYWORD_THRESHOLD: usize = 3;

/// Lines needed before a pipe-separated text counts as a table
pub const TABLE_MIN_LINES: usize = 3;

static PATH_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();
static CODE_KEYWORDS: OnceLock<RegexSet> = OnceLock::new();

fn path_pattern() -> &'static Regex {
    PATH_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?x)
            \b[A-Za-z]:\\[^\s\\]+(?:\\[^\s\\]+)*     # C:\dir\file
            | (?:^|\s)(?:~|\.{1,2})?/[\w.-]+/[\w./-]*  # /usr/bin, ~/docs/x, ./src/lib
            ",
        )
        .expect("path pattern must compile")
    })
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
            .expect("email pattern must compile")
    })
}

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?x)
            \b1[3-9]\d{9}\b                                   # mainland mobile
            | (?:\+\d{1,3}[\s-]?)?\(?\d{3}\)?[\s-]\d{3}[\s-]\d{4}\b  # 555-123-4567
            ",
        )
        .expect("phone pattern must compile")
    })
}

fn code_keywords() -> &'static RegexSet {
    CODE_KEYWORDS.get_or_init(|| {
        RegexSet::new([
            r"\bfunction\b",
            r"\bconst\b",
            r"\blet\b",
            r"\bvar\b",
            r"\bclass\b",
            r"\bimport\b",
            r"\bexport\b",
            r"\breturn\b",
            r"\bdef\b",
            r"\bpublic\b",
            r"\bprivate\b",
            r"\bstatic\b",
            r"\bvoid\b",
            r"\basync\b",
            r"\bawait\b",
            r"\bfn\b",
            r"\bimpl\b",
            r"\bstruct\b",
            r"=>",
            r"#include",
            r"console\.log",
        ])
        .expect("code keyword patterns must compile")
    })
}

/// http(s) links in order of appearance, duplicates removed
pub fn find_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    find_urls(text)
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

/// Whether `text` contains a Windows or Unix style path
pub fn has_paths(text: &str) -> bool {
    path_pattern().is_match(text)
}

/// Whether `text` contains an email address
pub fn has_emails(text: &str) -> bool {
    email_pattern().is_match(text)
}

/// Whether `text` contains a phone number
pub fn has_phones(text: &str) -> bool {
    phone_pattern().is_match(text)
}

/// Number of distinct code keywords in `text`
pub fn code_keyword_count(text: &str) -> usize {
    code_keywords().matches(text).iter().count()
}

/// Tab separated, or pipe separated over several lines
pub fn looks_like_table(text: &str) -> bool {
    text.contains('\t') || (text.contains('|') && text.lines().count() >= TABLE_MIN_LINES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_links_dedupes_in_order() {
        let text = "a https://x.com/1, then https://github.com/r and https://x.com/1.";
        assert_eq!(
            find_links(text),
            vec!["https://x.com/1", "https://github.com/r"]
        );
    }

    #[test]
    fn test_paths() {
        assert!(has_paths(r"open C:\Users\me\notes.txt please"));
        assert!(has_paths("/usr/local/bin"));
        assert!(has_paths("see ~/projects/clipseg for more"));
        assert!(!has_paths("https://example.com/a/b"));
        assert!(!has_paths("either/or"));
    }

    #[test]
    fn test_emails() {
        assert!(has_emails("mail dev.team+ci@example.co.uk today"));
        assert!(!has_emails("user at example dot com"));
    }

    #[test]
    fn test_phones() {
        assert!(has_phones("call 13812345678"));
        assert!(has_phones("call +1 555-123-4567 now"));
        assert!(!has_phones("order 12345"));
    }

    #[test]
    fn test_code_keywords() {
        assert_eq!(code_keyword_count("const x = () => { return 1 }"), 3);
        assert_eq!(code_keyword_count("plain sentence about nothing"), 0);
        // Repeats count once
        assert_eq!(code_keyword_count("let let let"), 1);
    }

    #[test]
    fn test_tables() {
        assert!(looks_like_table("a\tb\n1\t2"));
        assert!(looks_like_table("| a | b |\n|---|---|\n| 1 | 2 |"));
        assert!(!looks_like_table("a | b"));
    }
}
