//! API error types

use crate::clipboard::ClipboardError;
use clipseg_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by the analysis API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine configuration error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Clipboard could not be read
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Report could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
