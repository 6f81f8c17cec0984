//! Core error types

use thiserror::Error;

/// Errors raised by lexicon loading and segmentation strategies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Lexicon data could not be parsed or failed validation
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// A strategy could not segment its input
    #[error("strategy '{name}' failed: {reason}")]
    StrategyFailed {
        /// Registry name of the failing strategy
        name: String,
        /// Why the strategy gave up
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_failure_display() {
        let error = CoreError::StrategyFailed {
            name: "url".to_string(),
            reason: "bad input".to_string(),
        };
        assert_eq!(error.to_string(), "strategy 'url' failed: bad input");
    }

    #[test]
    fn test_lexicon_error_display() {
        let error = CoreError::Lexicon("missing words".to_string());
        assert_eq!(error.to_string(), "lexicon error: missing words");
    }
}
