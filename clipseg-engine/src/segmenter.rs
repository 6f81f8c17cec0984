//! Segmentation entry point
//!
//! [`Segmenter`] ties the pieces together: classification, strategy
//! selection, execution placement, post-processing and caching. One
//! instance can be shared across threads behind an `Arc`.

use crate::{
    cache::{CacheStats, SegmentationCache},
    config::EngineConfig,
    error::Result,
    executor::{ExecutionMode, StrategyJob},
    offload::OffloadScheduler,
    options::SegmentationOptions,
    registry::StrategyRegistry,
};
use clipseg_core::{classify, ContentType, PostProcessor, SegmentationStrategy};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// Segments plus details about how they were produced
#[derive(Debug, Clone)]
pub struct Output {
    /// Final segments
    pub segments: Vec<String>,
    /// How the call was handled
    pub metadata: SegmentationMetadata,
}

/// Details of one segmentation call
#[derive(Debug, Clone, Default)]
pub struct SegmentationMetadata {
    /// Classification, absent for blank input and cache hits
    pub content_type: Option<ContentType>,
    /// Strategies that ran, in order
    pub strategies: Vec<String>,
    /// Where strategies ran, absent when none ran
    pub execution_mode: Option<ExecutionMode>,
    /// Whether the result came from the cache
    pub cache_hit: bool,
    /// Wall-clock time for the call
    pub processing_time: Duration,
}

/// Thread-safe segmentation façade
pub struct Segmenter {
    registry: RwLock<StrategyRegistry>,
    cache: Mutex<SegmentationCache>,
    scheduler: OffloadScheduler,
    post_processor: PostProcessor,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("strategies", &self.strategy_names())
            .field("cache", &self.cache_stats())
            .field("scheduler", &self.scheduler)
            .finish()
    }
}

impl Segmenter {
    /// Create a segmenter with every built-in strategy and default settings
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a segmenter with every built-in strategy
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_registry(config, StrategyRegistry::with_builtins())
    }

    /// Create a segmenter around an existing registry
    pub fn with_registry(config: EngineConfig, registry: StrategyRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
            cache: Mutex::new(SegmentationCache::new()),
            scheduler: OffloadScheduler::new(&config),
            post_processor: PostProcessor::new(),
        }
    }

    /// Segment `text`
    ///
    /// Never fails: strategy errors and worker problems only reduce the
    /// number of segments.
    pub fn segment(&self, text: &str, options: &SegmentationOptions) -> Vec<String> {
        self.segment_with_metadata(text, options).segments
    }

    /// Segment text that may be missing; `None` behaves like empty text
    pub fn segment_opt(&self, text: Option<&str>, options: &SegmentationOptions) -> Vec<String> {
        text.map(|text| self.segment(text, options))
            .unwrap_or_default()
    }

    /// Segment `text` and report how the call was handled
    pub fn segment_with_metadata(&self, text: &str, options: &SegmentationOptions) -> Output {
        let start = Instant::now();
        let mut metadata = SegmentationMetadata::default();

        if text.trim().is_empty() {
            metadata.processing_time = start.elapsed();
            return Output {
                segments: Vec::new(),
                metadata,
            };
        }

        if options.cache_enabled {
            if let Some(segments) = self.lock_cache().get(text, options) {
                debug!(segments = segments.len(), "cache hit");
                metadata.cache_hit = true;
                metadata.processing_time = start.elapsed();
                return Output { segments, metadata };
            }
            debug!("cache miss");
        }

        let content_type = classify(text);
        let selected = self
            .read_registry()
            .select(content_type, &options.selected_plugins);
        metadata.content_type = Some(content_type);
        metadata.strategies = selected.iter().map(|s| s.name.clone()).collect();
        debug!(
            content_type = %content_type,
            strategies = ?metadata.strategies,
            "strategies selected"
        );

        let job = StrategyJob::new(text, content_type, selected);
        let (raw, mode) = self
            .scheduler
            .run(text.chars().count(), options, move || job.run());
        metadata.execution_mode = Some(mode);

        let segments = self.post_processor.process(raw);

        if options.cache_enabled {
            self.lock_cache().put(text, options, segments.clone());
        }

        metadata.processing_time = start.elapsed();
        Output { segments, metadata }
    }

    /// Classify `text` without segmenting it
    pub fn classify(&self, text: &str) -> ContentType {
        classify(text)
    }

    /// Register a strategy under `name`, replacing any previous one
    ///
    /// Cached results are not invalidated; call
    /// [`clear_cache`](Self::clear_cache) if earlier output must not be
    /// served again.
    pub fn register_strategy(
        &self,
        name: impl Into<String>,
        strategy: Arc<dyn SegmentationStrategy>,
    ) -> Result<()> {
        self.write_registry().register(name, strategy)
    }

    /// Remove the strategy registered under `name`
    pub fn remove_strategy(&self, name: &str) -> bool {
        self.write_registry().remove(name).is_some()
    }

    /// Registered strategy names
    pub fn strategy_names(&self) -> Vec<String> {
        self.read_registry().names()
    }

    /// Drop every cached result
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Current cache counters
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    /// Whether large inputs can still be offloaded
    pub fn offload_available(&self) -> bool {
        self.scheduler.is_available()
    }

    fn lock_cache(&self) -> MutexGuard<'_, SegmentationCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, StrategyRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, StrategyRegistry> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipseg_core::StrategyContext;

    struct Upper;

    impl SegmentationStrategy for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn segment(
            &self,
            text: &str,
            _context: &StrategyContext,
        ) -> clipseg_core::Result<Vec<String>> {
            Ok(vec![text.to_uppercase()])
        }
    }

    #[test]
    fn test_blank_input_skips_cache() {
        let segmenter = Segmenter::new();
        let options = SegmentationOptions::default();

        assert!(segmenter.segment("", &options).is_empty());
        assert!(segmenter.segment(" \n\t ", &options).is_empty());
        assert!(segmenter.segment_opt(None, &options).is_empty());

        let stats = segmenter.cache_stats();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_second_call_hits_cache() {
        let segmenter = Segmenter::new();
        let options = SegmentationOptions::default();

        let first = segmenter.segment_with_metadata("Hello world.", &options);
        assert!(!first.metadata.cache_hit);
        assert_eq!(first.metadata.content_type, Some(ContentType::English));
        assert_eq!(first.metadata.strategies, vec!["english"]);
        assert_eq!(
            first.metadata.execution_mode,
            Some(ExecutionMode::Synchronous)
        );

        let second = segmenter.segment_with_metadata("Hello world.", &options);
        assert!(second.metadata.cache_hit);
        assert_eq!(second.segments, first.segments);
    }

    #[test]
    fn test_cache_disabled() {
        let segmenter = Segmenter::new();
        let options = SegmentationOptions::builder()
            .cache_enabled(false)
            .build()
            .unwrap();

        segmenter.segment("Hello world.", &options);
        let output = segmenter.segment_with_metadata("Hello world.", &options);
        assert!(!output.metadata.cache_hit);
        assert_eq!(segmenter.cache_stats().entries, 0);
    }

    #[test]
    fn test_custom_strategy_replaces_builtin() {
        let segmenter = Segmenter::new();
        let options = SegmentationOptions::builder()
            .cache_enabled(false)
            .build()
            .unwrap();

        segmenter.register_strategy("english", Arc::new(Upper)).unwrap();
        assert_eq!(
            segmenter.segment("Hello world.", &options),
            vec!["HELLO WORLD."]
        );

        assert!(segmenter.remove_strategy("english"));
        assert!(segmenter.segment("Hello world.", &options).is_empty());
        assert!(!segmenter.remove_strategy("english"));
    }

    #[test]
    fn test_clear_cache() {
        let segmenter = Segmenter::new();
        let options = SegmentationOptions::default();
        segmenter.segment("Hello world.", &options);
        assert_eq!(segmenter.cache_stats().entries, 1);

        segmenter.clear_cache();
        assert_eq!(segmenter.cache_stats().entries, 0);
    }

    #[test]
    fn test_offloaded_call_reports_mode() {
        let segmenter = Segmenter::new();
        let options = SegmentationOptions::builder()
            .offload_threshold(5)
            .cache_enabled(false)
            .build()
            .unwrap();

        let output = segmenter.segment_with_metadata("Hello world. Again here.", &options);
        assert_eq!(
            output.metadata.execution_mode,
            Some(ExecutionMode::Offloaded)
        );
        assert_eq!(output.segments, vec!["Hello world.", "Again here."]);
    }
}
