//! URL decomposition
//!
//! Every `http(s)://` URL in the text yields, in order: the hostname, each
//! non-empty path segment, each query key and non-empty value, the file
//! extension when it is short and alphanumeric, and the URL type tag.

use super::{SegmentationStrategy, StrategyContext};
use crate::error::Result;
use crate::url_kind::classify_url;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;
use url::Url;

/// Longest file extension emitted as a segment
pub const MAX_EXTENSION_CHARS: usize = 6;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Pattern matching `http(s)://` URLs inside free text
pub fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(r#"https?://[^\s<>"'“”‘’（）【】《》「」，。！？；]+"#)
            .expect("URL pattern must compile")
    })
}

const TRAILING_PUNCTUATION: [char; 8] = ['.', ',', ';', ':', '!', '?', ')', ']'];

/// Find URLs in `text`, with trailing sentence punctuation removed
pub fn find_urls(text: &str) -> impl Iterator<Item = &str> {
    url_pattern()
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
}

/// Extension of the last path segment, if short and alphanumeric
pub fn file_extension(last_segment: &str) -> Option<&str> {
    let (stem, ext) = last_segment.rsplit_once('.')?;
    let valid = !stem.is_empty()
        && !ext.is_empty()
        && ext.chars().count() <= MAX_EXTENSION_CHARS
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}

/// Breaks URLs into host, path, query and type segments
#[derive(Debug, Clone, Default)]
pub struct UrlStrategy;

impl UrlStrategy {
    /// Create a new URL strategy
    pub fn new() -> Self {
        Self
    }

    fn decompose(raw: &str, out: &mut Vec<String>) {
        let parsed = match Url::parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(url = raw, error = %e, "keeping malformed URL verbatim");
                out.push(raw.to_string());
                return;
            }
        };
        let Some(host) = parsed.host_str() else {
            out.push(raw.to_string());
            return;
        };

        out.push(host.to_string());

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        out.extend(segments.iter().map(|s| s.to_string()));

        for (key, value) in parsed.query_pairs() {
            if !key.is_empty() {
                out.push(key.into_owned());
            }
            if !value.is_empty() {
                out.push(value.into_owned());
            }
        }

        if let Some(ext) = segments.last().and_then(|last| file_extension(last)) {
            out.push(ext.to_ascii_lowercase());
        }

        out.push(classify_url(host, parsed.path()).as_str().to_string());
    }
}

impl SegmentationStrategy for UrlStrategy {
    fn name(&self) -> &str {
        "url"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        for raw in find_urls(text) {
            Self::decompose(raw, &mut segments);
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ContentType;

    fn run(text: &str) -> Vec<String> {
        UrlStrategy::new()
            .segment(text, &StrategyContext::new(ContentType::Url))
            .unwrap()
    }

    #[test]
    fn test_github_url() {
        assert_eq!(
            run("https://github.com/foo/bar?x=1"),
            vec!["github.com", "foo", "bar", "x", "1", "github"]
        );
    }

    #[test]
    fn test_extension_and_type() {
        assert_eq!(
            run("http://example.com/files/report.PDF"),
            vec!["example.com", "files", "report.PDF", "pdf", "pdf"]
        );
    }

    #[test]
    fn test_query_key_without_value() {
        assert_eq!(
            run("https://www.google.com/search?q=rust&flag"),
            vec!["www.google.com", "search", "q", "rust", "flag", "search_engine"]
        );
    }

    #[test]
    fn test_urls_inside_text() {
        let segments = run("See https://localhost:8080/v1/items. Then 看看https://x.com/a，好吗");
        assert_eq!(
            segments,
            vec!["localhost", "v1", "items", "local", "x.com", "a", "social"]
        );
    }

    #[test]
    fn test_malformed_url_kept_verbatim() {
        assert_eq!(run("https://:80/x"), vec!["https://:80/x"]);
        assert_eq!(run("https://[::1"), vec!["https://[::1"]);
    }

    #[test]
    fn test_file_extension_limits() {
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("page.verylongext"), None);
        assert_eq!(file_extension("v1"), None);
        assert_eq!(file_extension(".hidden"), None);
    }
}
