//! Segmentation orchestration for clipboard text
//!
//! This crate wires the pure algorithms of `clipseg-core` into a shareable
//! [`Segmenter`]: a runtime-extensible strategy registry, an
//! insertion-ordered result cache and an offload scheduler that moves large
//! inputs onto a background worker without changing results.
//!
//! # Example
//!
//! ```rust
//! use clipseg_engine::{SegmentationOptions, Segmenter};
//!
//! let segmenter = Segmenter::new();
//! let options = SegmentationOptions::default();
//!
//! let segments = segmenter.segment("Hello world. This is a test!", &options);
//! assert_eq!(segments, vec!["Hello world.", "This is a test!"]);
//!
//! // Whitespace never reaches the cache or any strategy
//! assert!(segmenter.segment("   ", &options).is_empty());
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod executor;
pub mod offload;
pub mod options;
pub mod registry;
pub mod segmenter;

// Re-export key types
pub use cache::{cache_key, rolling_hash, CacheStats, SegmentationCache};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, SelectedStrategy, StrategyJob};
pub use offload::OffloadScheduler;
pub use options::{SegmentationOptions, SegmentationOptionsBuilder};
pub use registry::{recommended_strategies, StrategyRegistry};
pub use segmenter::{Output, SegmentationMetadata, Segmenter};

// Re-export from core for convenience
pub use clipseg_core::{ContentType, SegmentationStrategy, StrategyContext, StrategyKind};
