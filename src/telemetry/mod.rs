//! Telemetry for bounded-pq.
//!
//! Structured logging via `tracing`. No metrics or network exporters.

mod logging;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
