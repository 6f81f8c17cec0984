//! Strategy execution with failure isolation

use clipseg_core::{ContentType, SegmentationStrategy, StrategyContext};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::warn;

/// Where a segmentation call ran its strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// On the calling thread
    Synchronous,
    /// On the background worker
    Offloaded,
}

/// A strategy chosen for one call, with the name it was registered under
#[derive(Clone)]
pub struct SelectedStrategy {
    /// Registry name
    pub name: String,
    /// The strategy itself
    pub strategy: Arc<dyn SegmentationStrategy>,
}

impl SelectedStrategy {
    /// Pair a registry name with its strategy
    pub fn new(name: impl Into<String>, strategy: Arc<dyn SegmentationStrategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl std::fmt::Debug for SelectedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedStrategy")
            .field("name", &self.name)
            .finish()
    }
}

/// Owned unit of work: one text and the strategies to run over it
///
/// The job owns everything it touches so it can move to a worker thread.
/// Running it on any thread produces the same output.
#[derive(Debug, Clone)]
pub struct StrategyJob {
    text: Arc<str>,
    context: StrategyContext,
    strategies: Vec<SelectedStrategy>,
}

impl StrategyJob {
    /// Create a job
    pub fn new(text: &str, content_type: ContentType, strategies: Vec<SelectedStrategy>) -> Self {
        Self {
            text: Arc::from(text),
            context: StrategyContext::new(content_type),
            strategies,
        }
    }

    /// Run every strategy in order and concatenate their raw output
    pub fn run(&self) -> Vec<String> {
        let mut raw = Vec::new();
        for selected in &self.strategies {
            raw.extend(run_isolated(selected, &self.text, &self.context));
        }
        raw
    }
}

/// Run one strategy, converting an error or panic into zero segments
fn run_isolated(
    selected: &SelectedStrategy,
    text: &str,
    context: &StrategyContext,
) -> Vec<String> {
    let outcome =
        panic::catch_unwind(AssertUnwindSafe(|| selected.strategy.segment(text, context)));

    match outcome {
        Ok(Ok(segments)) => segments,
        Ok(Err(e)) => {
            warn!(strategy = %selected.name, error = %e, "strategy failed");
            Vec::new()
        }
        Err(payload) => {
            warn!(
                strategy = %selected.name,
                reason = panic_message(payload.as_ref()),
                "strategy panicked"
            );
            Vec::new()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
