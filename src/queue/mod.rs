//! Bounded priority queue and its heap engine.
//!
//! [`BoundedPriorityQueue`] keeps one max-heap on weight for popping and a
//! second, min-ordered heap over the same entries for eviction. Both heaps
//! share one entry arena; every entry tracks its slot in each heap.

mod bounded;
mod bounded_tests;
mod heap;
mod order;

pub use bounded::{BoundedPriorityQueue, Drain};
pub use order::Order;
