//! bounded-pq
//!
//! A priority queue that holds at most `capacity` weighted items, always pops
//! the extreme-priority item first, and silently evicts the worst item when a
//! push would exceed capacity.
//!
//! ```
//! use bounded_pq::{BoundedPriorityQueue, Order};
//!
//! let mut queue = BoundedPriorityQueue::new(3, Order::Max);
//! for p in 1..=5 {
//!     queue.push(p, f64::from(p));
//! }
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.priority(), 5.0);
//! assert_eq!(queue.drain().collect::<Vec<_>>(), vec![5, 4, 3]);
//! assert!(queue.is_empty());
//! ```
//!
//! # Semantics
//!
//! - Capacity 0 means unbounded.
//! - [`Order::Max`] pops highest first and evicts lowest; [`Order::Min`] is
//!   the mirror image.
//! - Popping an empty queue returns [`QueueError::Empty`].
//! - NaN priorities rank below everything under both orders.
//! - No internal synchronization; share behind a mutex.

pub mod config;
pub mod error;
pub mod queue;
pub mod telemetry;

pub use config::QueueConfig;
pub use error::{ConfigError, QueueError};
pub use queue::{BoundedPriorityQueue, Order};
