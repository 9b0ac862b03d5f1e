//! Queue ordering modes and the priority/weight transform.
//!
//! Every queue keeps a single max-ordering on weight. A `Max` queue stores the
//! caller's priority as-is; a `Min` queue stores it negated. The transform is
//! applied only where priorities cross the API boundary.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which end of the priority range a queue pops first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Pop the lowest priority first; evict the highest.
    Min,
    /// Pop the highest priority first; evict the lowest.
    #[default]
    Max,
}

impl Order {
    /// Convert a caller priority into the internal heap weight.
    #[inline]
    pub fn weight(self, priority: f64) -> f64 {
        match self {
            Self::Min => -priority,
            Self::Max => priority,
        }
    }

    /// Convert an internal heap weight back into the caller priority.
    #[inline]
    pub fn priority(self, weight: f64) -> f64 {
        // The transform is its own inverse.
        self.weight(weight)
    }

    /// Returns true if `candidate` would be popped before `incumbent`.
    ///
    /// NaN never outranks anything.
    pub fn outranks(self, candidate: f64, incumbent: f64) -> bool {
        cmp_weight(self.weight(candidate), self.weight(incumbent)) == Ordering::Greater
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

impl FromStr for Order {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(ConfigError::InvalidOrder(s.to_string())),
        }
    }
}

/// Total order over heap weights.
///
/// NaN sorts below every other weight, negative infinity included, so a NaN
/// entry is always the first evicted and the last popped.
pub(crate) fn cmp_weight(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
