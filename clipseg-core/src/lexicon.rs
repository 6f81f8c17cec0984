//! Embedded lexicon tables
//!
//! Function words, post-processing merge candidates, the Chinese word list
//! and the URL type rules ship as one TOML file compiled into the crate.
//! The file is parsed once on first use.

use crate::error::{CoreError, Result};
use crate::url_kind::UrlRule;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

const EMBEDDED_LEXICON: &str = include_str!("../configs/lexicon.toml");

#[derive(Debug, Deserialize)]
struct LexiconConfig {
    metadata: Metadata,
    function_words: FunctionWords,
    words: Words,
    #[serde(default)]
    url_rules: Vec<UrlRule>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: String,
    #[allow(dead_code)]
    version: u32,
}

#[derive(Debug, Deserialize)]
struct FunctionWords {
    single: Vec<String>,
    merge_candidates: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Words {
    entries: Vec<String>,
}

/// Parsed lexicon tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    function_words: HashSet<String>,
    merge_candidates: HashSet<String>,
    words: HashSet<String>,
    max_word_chars: usize,
    url_rules: Vec<UrlRule>,
}

impl Lexicon {
    /// Parse and validate a lexicon from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(content)
            .map_err(|e| CoreError::Lexicon(format!("failed to parse lexicon: {e}")))?;

        if let Some(word) = config
            .function_words
            .single
            .iter()
            .find(|w| w.chars().count() != 1)
        {
            return Err(CoreError::Lexicon(format!(
                "function word '{word}' must be a single character"
            )));
        }

        if config.words.entries.iter().any(|w| w.chars().count() < 2) {
            return Err(CoreError::Lexicon(
                "word entries must have at least two characters".to_string(),
            ));
        }

        let max_word_chars = config
            .words
            .entries
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0);

        Ok(Self {
            name: config.metadata.name,
            function_words: config.function_words.single.into_iter().collect(),
            merge_candidates: config.function_words.merge_candidates.into_iter().collect(),
            words: config.words.entries.into_iter().collect(),
            max_word_chars,
            url_rules: config.url_rules,
        })
    }

    /// Lexicon name from its metadata table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if `fragment` is a single-character function word
    pub fn is_function_word(&self, fragment: &str) -> bool {
        self.function_words.contains(fragment)
    }

    /// Check if `fragment` should be merged into its successor
    pub fn is_merge_candidate(&self, fragment: &str) -> bool {
        self.merge_candidates.contains(fragment)
    }

    /// Check if `word` is in the Chinese word list
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Length in characters of the longest word in the list
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// URL type rules in priority order
    pub fn url_rules(&self) -> &[UrlRule] {
        &self.url_rules
    }
}

/// The embedded lexicon
pub fn lexicon() -> &'static Lexicon {
    LEXICON.get_or_init(|| {
        Lexicon::from_toml_str(EMBEDDED_LEXICON).expect("embedded lexicon must be valid")
    })
}
