//! URL type classification
//!
//! A URL is tagged by walking the lexicon's rule table in order and
//! taking the first rule whose hostname or path condition matches.

use crate::lexicon::lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic category of a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlKind {
    /// Source hosting on GitHub
    Github,
    /// Stack Overflow and sibling Q&A sites
    Stackoverflow,
    /// Search engine result pages
    SearchEngine,
    /// Video platforms
    Video,
    /// Social networks
    Social,
    /// Documentation sites
    Documentation,
    /// API endpoints
    Api,
    /// PDF documents
    Pdf,
    /// Word documents
    Word,
    /// Spreadsheets
    Excel,
    /// Slide decks
    Powerpoint,
    /// Images
    Image,
    /// Audio and video files
    Media,
    /// Loopback and private network hosts
    Local,
    /// Anything else
    General,
}

impl UrlKind {
    /// Tag emitted as a segment and used as a report key
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlKind::Github => "github",
            UrlKind::Stackoverflow => "stackoverflow",
            UrlKind::SearchEngine => "search_engine",
            UrlKind::Video => "video",
            UrlKind::Social => "social",
            UrlKind::Documentation => "documentation",
            UrlKind::Api => "api",
            UrlKind::Pdf => "pdf",
            UrlKind::Word => "word",
            UrlKind::Excel => "excel",
            UrlKind::Powerpoint => "powerpoint",
            UrlKind::Image => "image",
            UrlKind::Media => "media",
            UrlKind::Local => "local",
            UrlKind::General => "general",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the URL rule table
#[derive(Debug, Clone, Deserialize)]
pub struct UrlRule {
    /// Kind assigned when the rule matches
    pub kind: UrlKind,
    /// Exact hosts, also matching any subdomain
    #[serde(default)]
    pub domains: Vec<String>,
    /// Host prefixes such as `docs.`
    #[serde(default)]
    pub host_prefixes: Vec<String>,
    /// Substrings searched for in the host
    #[serde(default)]
    pub host_keywords: Vec<String>,
    /// Substrings searched for in the path
    #[serde(default)]
    pub path_contains: Vec<String>,
    /// Path suffixes such as `.pdf`
    #[serde(default)]
    pub path_suffixes: Vec<String>,
}

impl UrlRule {
    /// Check the rule against a lowercase host and path
    pub fn matches(&self, host: &str, path: &str) -> bool {
        self.domains.iter().any(|d| is_same_or_subdomain(host, d))
            || self.host_prefixes.iter().any(|p| host.starts_with(p))
            || self.host_keywords.iter().any(|k| host.contains(k))
            || self.path_contains.iter().any(|p| path.contains(p))
            || self.path_suffixes.iter().any(|s| path.ends_with(s))
    }
}

fn is_same_or_subdomain(host: &str, domain: &str) -> bool {
    host == domain || host.strip_suffix(domain).is_some_and(|p| p.ends_with('.'))
}

/// Classify a URL from its hostname and path
pub fn classify_url(host: &str, path: &str) -> UrlKind {
    let host = host.to_ascii_lowercase();
    let path = path.to_ascii_lowercase();

    lexicon()
        .url_rules()
        .iter()
        .find(|rule| rule.matches(&host, &path))
        .map(|rule| rule.kind)
        .unwrap_or(UrlKind::General)
}

/// Classify a URL string; unparseable input is `General`
pub fn classify_url_str(raw: &str) -> UrlKind {
    match url::Url::parse(raw) {
        Ok(parsed) => classify_url(parsed.host_str().unwrap_or_default(), parsed.path()),
        Err(_) => UrlKind::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_rules() {
        assert_eq!(classify_url("github.com", "/foo/bar"), UrlKind::Github);
        assert_eq!(classify_url("gist.github.com", "/x"), UrlKind::Github);
        assert_eq!(
            classify_url("stackoverflow.com", "/questions/1"),
            UrlKind::Stackoverflow
        );
        assert_eq!(
            classify_url("www.google.com", "/search"),
            UrlKind::SearchEngine
        );
        assert_eq!(classify_url("www.youtube.com", "/watch"), UrlKind::Video);
        assert_eq!(classify_url("x.com", "/someone"), UrlKind::Social);
        assert_eq!(
            classify_url("docs.python.org", "/3/"),
            UrlKind::Documentation
        );
        assert_eq!(classify_url("api.example.com", "/v1/users"), UrlKind::Api);
        assert_eq!(classify_url("localhost", "/"), UrlKind::Local);
    }

    #[test]
    fn test_domain_match_requires_label_boundary() {
        // "dropbox.com" ends with "x.com" but is not a subdomain of it
        assert_eq!(classify_url("dropbox.com", "/home"), UrlKind::General);
    }

    #[test]
    fn test_path_suffix_rules() {
        assert_eq!(classify_url("example.com", "/paper.PDF"), UrlKind::Pdf);
        assert_eq!(classify_url("example.com", "/report.docx"), UrlKind::Word);
        assert_eq!(classify_url("example.com", "/sheet.xlsx"), UrlKind::Excel);
        assert_eq!(
            classify_url("example.com", "/deck.pptx"),
            UrlKind::Powerpoint
        );
        assert_eq!(classify_url("example.com", "/logo.png"), UrlKind::Image);
        assert_eq!(classify_url("example.com", "/song.mp3"), UrlKind::Media);
        assert_eq!(classify_url("example.com", "/index.html"), UrlKind::General);
    }

    #[test]
    fn test_priority_order() {
        // host rules for github win over the pdf suffix
        assert_eq!(classify_url("github.com", "/a/b.pdf"), UrlKind::Github);
        // documentation path wins over api path
        assert_eq!(
            classify_url("example.com", "/docs/api/"),
            UrlKind::Documentation
        );
    }

    #[test]
    fn test_classify_url_str() {
        assert_eq!(classify_url_str("https://github.com/foo"), UrlKind::Github);
        assert_eq!(classify_url_str("not a url"), UrlKind::General);
    }
}
