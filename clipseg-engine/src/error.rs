//! Engine error types

use std::time::Duration;
use thiserror::Error;

/// Errors raised while configuring or orchestrating segmentation
///
/// None of these reach callers of [`Segmenter::segment`](crate::Segmenter::segment);
/// segmentation degrades to fewer segments instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A strategy was registered under an unusable name
    #[error("invalid strategy name: '{0}'")]
    InvalidStrategyName(String),

    /// Configuration values failed validation
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Options file could not be parsed
    #[error("failed to parse options: {0}")]
    OptionsParse(#[from] toml::de::Error),

    /// Options could not be serialized for the cache key
    #[error("failed to serialize options: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// The background worker could not be constructed
    #[error("offload worker unavailable: {0}")]
    OffloadUnavailable(String),

    /// The background worker did not answer in time
    #[error("offload worker timed out after {0:?}")]
    OffloadTimeout(Duration),

    /// Every background worker is still running an earlier job
    #[error("all offload workers are busy")]
    WorkersBusy,

    /// The background worker dropped the job without answering
    #[error("offload worker disconnected before replying")]
    WorkerDisconnected,
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::InvalidStrategyName(" ".to_string()).to_string(),
            "invalid strategy name: ' '"
        );
        assert_eq!(
            EngineError::OffloadTimeout(Duration::from_secs(10)).to_string(),
            "offload worker timed out after 10s"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError(msg) if msg.contains("missing.toml")));
    }
}
