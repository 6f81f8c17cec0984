//! Content classification and segmentation strategies for clipboard text
//!
//! This crate holds the deterministic half of clipseg: it decides what kind
//! of text a clipboard snapshot contains and knows how to cut each kind of
//! text into segments. Nothing here spawns threads or keeps mutable state;
//! orchestration, caching and offloading live in `clipseg-engine`.
//!
//! # Example
//!
//! ```rust
//! use clipseg_core::{classify, ContentType, PostProcessor, SegmentationStrategy, StrategyContext};
//! use clipseg_core::strategies::EnglishStrategy;
//!
//! let text = "Hello world. This is a test!";
//! assert_eq!(classify(text), ContentType::English);
//!
//! let context = StrategyContext::new(ContentType::English);
//! let raw = EnglishStrategy::new().segment(text, &context).unwrap();
//! let segments = PostProcessor::new().process(raw);
//! assert_eq!(segments, vec!["Hello world.", "This is a test!"]);
//! ```

#![warn(missing_docs)]

pub mod charset;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod postprocess;
pub mod strategies;
pub mod url_kind;

pub use classifier::{classify, ContentType};
pub use error::{CoreError, Result};
pub use lexicon::{lexicon, Lexicon};
pub use postprocess::{PostProcessor, MAX_SEGMENT_CHARS};
pub use strategies::{SegmentationStrategy, StrategyContext, StrategyKind};
pub use url_kind::{classify_url, UrlKind};
