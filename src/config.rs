//! Queue configuration loading from environment variables or TOML.
//!
//! Environment values fall back to defaults when missing or invalid, without
//! failing. TOML documents are parsed strictly and report errors.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `BOUNDED_PQ_CAPACITY` | 0 | Max retained entries (0 = unbounded) |
//! | `BOUNDED_PQ_ORDER` | max | Pop order: `min` or `max` |

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::queue::Order;

pub const ENV_CAPACITY: &str = "BOUNDED_PQ_CAPACITY";
pub const ENV_ORDER: &str = "BOUNDED_PQ_ORDER";

/// Construction parameters for a [`BoundedPriorityQueue`](crate::BoundedPriorityQueue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    /// Max retained entries. 0 means unbounded.
    pub capacity: usize,
    pub order: Order,
}

impl QueueConfig {
    pub fn new(capacity: usize, order: Order) -> Self {
        Self { capacity, order }
    }

    /// Parse a TOML document such as:
    ///
    /// ```toml
    /// capacity = 10
    /// order = "min"
    /// ```
    ///
    /// Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Parse a `usize` env var, returning `default` on missing or invalid.
fn parse_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<usize>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Parse an [`Order`] env var, returning `default` on missing or invalid.
fn parse_order(key: &str, default: Order) -> Order {
    match std::env::var(key) {
        Ok(val) => val.parse::<Order>().unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "ignoring invalid queue order");
            default
        }),
        Err(_) => default,
    }
}

/// Load queue configuration from environment variables.
pub fn load() -> QueueConfig {
    let defaults = QueueConfig::default();
    QueueConfig {
        capacity: parse_usize(ENV_CAPACITY, defaults.capacity),
        order: parse_order(ENV_ORDER, defaults.order),
    }
}
