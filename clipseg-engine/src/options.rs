//! Per-call segmentation options

use crate::error::{EngineError, Result};
use clipseg_core::StrategyKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default cache capacity
pub const DEFAULT_MAX_CACHE_ENTRIES: usize = 1000;

/// Default input length (in characters) above which work is offloaded
pub const DEFAULT_OFFLOAD_THRESHOLD: usize = 1000;

/// Options controlling one segmentation call
///
/// Options participate in the cache key, so two calls with different
/// options never share a cached result. Missing fields in TOML input take
/// their default values.
///
/// ```toml
/// selected_plugins = ["chinese", "english"]
/// cache_enabled = false
/// offload_threshold = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationOptions {
    /// Names of strategies allowed to run, in no particular order
    pub selected_plugins: Vec<String>,
    /// Whether results are read from and written to the cache
    pub cache_enabled: bool,
    /// Cache capacity before the oldest entries are evicted
    pub max_cache_entries: usize,
    /// Input length in characters above which work may be offloaded
    pub offload_threshold: usize,
    /// Whether large inputs may run on the background worker
    pub offload_enabled: bool,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            selected_plugins: StrategyKind::DEFAULT_SELECTION
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            cache_enabled: true,
            max_cache_entries: DEFAULT_MAX_CACHE_ENTRIES,
            offload_threshold: DEFAULT_OFFLOAD_THRESHOLD,
            offload_enabled: true,
        }
    }
}

impl SegmentationOptions {
    /// Create an options builder starting from the defaults
    pub fn builder() -> SegmentationOptionsBuilder {
        SegmentationOptionsBuilder::new()
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.max_cache_entries == 0 {
            return Err(EngineError::ConfigError(
                "max_cache_entries must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.selected_plugins {
            if name.trim().is_empty() {
                return Err(EngineError::ConfigError(
                    "selected_plugins must not contain empty names".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(EngineError::ConfigError(format!(
                    "selected_plugins lists '{name}' more than once"
                )));
            }
        }
        Ok(())
    }

    /// Whether the named strategy may run
    pub fn allows(&self, name: &str) -> bool {
        self.selected_plugins.iter().any(|selected| selected == name)
    }

    /// Deterministic serialization used as the options part of cache keys
    pub fn fingerprint(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for [`SegmentationOptions`]
#[derive(Debug, Default)]
pub struct SegmentationOptionsBuilder {
    options: SegmentationOptions,
}

impl SegmentationOptionsBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allowed strategy names
    pub fn selected_plugins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.selected_plugins = names.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable caching
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.options.cache_enabled = enabled;
        self
    }

    /// Set the cache capacity
    pub fn max_cache_entries(mut self, entries: usize) -> Self {
        self.options.max_cache_entries = entries;
        self
    }

    /// Set the offload threshold in characters
    pub fn offload_threshold(mut self, threshold: usize) -> Self {
        self.options.offload_threshold = threshold;
        self
    }

    /// Enable or disable offloading
    pub fn offload_enabled(mut self, enabled: bool) -> Self {
        self.options.offload_enabled = enabled;
        self
    }

    /// Build and validate the options
    pub fn build(self) -> Result<SegmentationOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SegmentationOptions::default();
        assert_eq!(
            options.selected_plugins,
            vec!["chinese", "english", "code", "url", "list"]
        );
        assert!(options.cache_enabled);
        assert_eq!(options.max_cache_entries, 1000);
        assert_eq!(options.offload_threshold, 1000);
        assert!(options.offload_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options = SegmentationOptions::from_toml_str(
            r#"
            selected_plugins = ["english"]
            cache_enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(options.selected_plugins, vec!["english"]);
        assert!(!options.cache_enabled);
        assert_eq!(options.max_cache_entries, DEFAULT_MAX_CACHE_ENTRIES);
        assert!(options.offload_enabled);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SegmentationOptions::from_toml_str("cache_enabled = \"yes\""),
            Err(EngineError::OptionsParse(_))
        ));
        assert!(matches!(
            SegmentationOptions::from_toml_str("max_cache_entries = 0"),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_names() {
        assert!(SegmentationOptions::builder()
            .selected_plugins(["english", ""])
            .build()
            .is_err());
        assert!(SegmentationOptions::builder()
            .selected_plugins(["english", "english"])
            .build()
            .is_err());
    }

    #[test]
    fn test_fingerprint_distinguishes_options() {
        let a = SegmentationOptions::default();
        let b = SegmentationOptions::builder()
            .offload_enabled(false)
            .build()
            .unwrap();
        assert_eq!(a.fingerprint().unwrap(), a.clone().fingerprint().unwrap());
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn test_allows() {
        let options = SegmentationOptions::default();
        assert!(options.allows("url"));
        assert!(!options.allows("wrapped"));
    }
}
