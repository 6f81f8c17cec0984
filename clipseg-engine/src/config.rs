//! Process-level engine configuration

use crate::error::{EngineError, Result};
use std::time::Duration;

/// Default time an offloaded job may take before the caller falls back
pub const DEFAULT_WORKER_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of background worker threads
pub const DEFAULT_WORKER_THREADS: usize = 1;

/// Engine configuration
///
/// Unlike [`SegmentationOptions`](crate::SegmentationOptions) these values
/// are fixed for the lifetime of a [`Segmenter`](crate::Segmenter) and are
/// not part of the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long the caller waits for an offloaded job
    pub worker_timeout: Duration,
    /// Threads in the background worker pool
    pub worker_threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_timeout: DEFAULT_WORKER_TIMEOUT,
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }
}

impl EngineConfig {
    /// Create a configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.worker_timeout.is_zero() {
            return Err(EngineError::ConfigError(
                "worker_timeout must be greater than 0".to_string(),
            ));
        }
        if self.worker_threads == 0 {
            return Err(EngineError::ConfigError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offload timeout
    pub fn worker_timeout(mut self, timeout: Duration) -> Self {
        self.config.worker_timeout = timeout;
        self
    }

    /// Set the number of worker threads
    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.config.worker_threads = threads;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.worker_timeout, Duration::from_secs(10));
        assert_eq!(config.worker_threads, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_validates() {
        let config = EngineConfig::builder()
            .worker_timeout(Duration::from_millis(50))
            .worker_threads(2)
            .build()
            .unwrap();
        assert_eq!(config.worker_threads, 2);

        assert!(EngineConfig::builder().worker_threads(0).build().is_err());
        assert!(EngineConfig::builder()
            .worker_timeout(Duration::ZERO)
            .build()
            .is_err());
    }
}
