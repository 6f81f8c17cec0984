//! Runtime strategy registry and content-type recommendations

use crate::error::{EngineError, Result};
use crate::executor::SelectedStrategy;
use clipseg_core::{ContentType, SegmentationStrategy, StrategyKind};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Recommended strategies for a content type, in execution order
pub fn recommended_strategies(content_type: ContentType) -> &'static [StrategyKind] {
    use StrategyKind::*;

    match content_type {
        ContentType::Url => &[Url, English],
        ContentType::Code => &[Code, English],
        ContentType::List => &[List, Chinese, English],
        ContentType::Wrapped => &[Wrapped, Chinese, English],
        ContentType::Chinese => &[Chinese, English, ChineseWords],
        ContentType::English => &[English],
        ContentType::Mixed => &[Chinese, English],
        ContentType::Unknown => &[Chinese, English, Punctuation],
    }
}

/// Name-keyed strategy table
///
/// Strategies are looked up by the name they were registered under.
/// Registering an existing name replaces the previous strategy in place.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: IndexMap<String, Arc<dyn SegmentationStrategy>>,
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StrategyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in strategy
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in StrategyKind::ALL {
            registry
                .strategies
                .insert(kind.as_str().to_string(), kind.build());
        }
        registry
    }

    /// Register `strategy` under `name`
    ///
    /// Blank names are rejected and logged; the registry is left unchanged.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        strategy: Arc<dyn SegmentationStrategy>,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            error!(name = %name, "rejected strategy registration");
            return Err(EngineError::InvalidStrategyName(name));
        }

        debug!(name = %name, strategy = strategy.name(), "registered strategy");
        self.strategies.insert(name, strategy);
        Ok(())
    }

    /// Remove the strategy registered under `name`
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn SegmentationStrategy>> {
        self.strategies.shift_remove(name)
    }

    /// Look up a strategy by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SegmentationStrategy>> {
        self.strategies.get(name).cloned()
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.strategies.keys().cloned().collect()
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no strategies are registered
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategies to run for `content_type`
    ///
    /// The recommended list is filtered by `allowed` and by what is
    /// currently registered, keeping the recommended order.
    pub fn select(&self, content_type: ContentType, allowed: &[String]) -> Vec<SelectedStrategy> {
        recommended_strategies(content_type)
            .iter()
            .map(|kind| kind.as_str())
            .filter(|name| allowed.iter().any(|allowed| allowed == *name))
            .filter_map(|name| {
                self.strategies
                    .get(name)
                    .map(|strategy| SelectedStrategy::new(name, Arc::clone(strategy)))
            })
            .collect()
    }
}
