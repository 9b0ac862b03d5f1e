//! Error types for bounded-pq.
//!
//! Queue operations other than popping never fail; eviction on overflow is
//! normal behaviour, not an error.

use thiserror::Error;

/// Errors returned by queue operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Pop from empty queue")]
    Empty,
}

/// Errors that can occur while loading a [`QueueConfig`](crate::config::QueueConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid queue order: {0:?} (expected \"min\" or \"max\")")]
    InvalidOrder(String),

    #[error("Config parse error: {0}")]
    Parse(String),
}
