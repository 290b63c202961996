//! Configuration Error Types

use thiserror::Error;

/// Errors in learner configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown pruning metric name
    #[error("Invalid pruning metric: {0}")]
    InvalidPruningMetric(String),

    /// Grow/prune split ratio outside (0, 1)
    #[error("Split ratio {0} must lie strictly between 0 and 1")]
    InvalidSplitRatio(f64),

    #[error("Thread count must be at least 1")]
    InvalidThreads,

    #[error("Optimisation rounds (k) must be at least 1")]
    InvalidK,

    /// Config file could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
