//! Bounded priority queue.

use std::fmt;

use super::heap::{Backbone, Entry, Side};
use super::order::Order;
use crate::config::QueueConfig;
use crate::error::QueueError;

/// Storage is reserved for at least this many entries up front.
const MIN_PREALLOCATION: usize = 100;
/// Upper limit on up-front reservation; larger queues grow on demand.
const MAX_PREALLOCATION: usize = 1 << 20;

/// A priority queue that retains at most `capacity` entries.
///
/// Entries pop in priority order: highest first for [`Order::Max`], lowest
/// first for [`Order::Min`]. When a push takes the queue over capacity, the
/// entry ranked last under the configured order is evicted and dropped
/// silently, which may be the entry just pushed. The queue therefore always
/// holds the best `capacity` entries pushed since it was last drained. Use
/// [`offer`](Self::offer) to get the evicted entry back instead.
///
/// A capacity of zero means unbounded.
///
/// Ties between equal priorities resolve in an unspecified order. NaN
/// priorities rank below every other value under both orders: they pop last
/// and are evicted first.
///
/// The queue does no internal locking. Wrap it in a mutex to share it.
pub struct BoundedPriorityQueue<T> {
    entries: Vec<Entry<T>>,
    pop_side: Backbone,
    evict_side: Backbone,
    capacity: usize,
    order: Order,
}

impl<T> BoundedPriorityQueue<T> {
    /// Create an empty queue. `capacity == 0` means unbounded.
    pub fn new(capacity: usize, order: Order) -> Self {
        let reserve = capacity
            .saturating_add(1)
            .max(MIN_PREALLOCATION)
            .min(MAX_PREALLOCATION);
        tracing::debug!(capacity, %order, reserve, "creating bounded priority queue");
        Self {
            entries: Vec::with_capacity(reserve),
            pop_side: Backbone::with_capacity(Side::Pop, reserve),
            evict_side: Backbone::with_capacity(Side::Evict, reserve),
            capacity,
            order,
        }
    }

    pub fn from_config(config: &QueueConfig) -> Self {
        Self::new(config.capacity, config.order)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when bounded and holding `capacity` entries. Never true when
    /// unbounded.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Priority of the entry the next [`pop`](Self::pop) returns.
    ///
    /// Returns `f64::INFINITY` when empty.
    pub fn priority(&self) -> f64 {
        match self.pop_side.root() {
            Some(id) => self.order.priority(self.entries[id].weight),
            None => f64::INFINITY,
        }
    }

    /// Priority of the entry the next overflow would evict.
    ///
    /// When empty this is the value every real priority outranks:
    /// `f64::NEG_INFINITY` for max queues, `f64::INFINITY` for min queues.
    pub fn worst_priority(&self) -> f64 {
        match self.evict_side.root() {
            Some(id) => self.order.priority(self.entries[id].weight),
            None => match self.order {
                Order::Max => f64::NEG_INFINITY,
                Order::Min => f64::INFINITY,
            },
        }
    }

    /// Returns true if pushing `priority` now would leave it in the queue.
    pub fn would_retain(&self, priority: f64) -> bool {
        !self.is_full() || self.order.outranks(priority, self.worst_priority())
    }

    /// Payload of the entry the next [`pop`](Self::pop) returns.
    pub fn peek(&self) -> Option<&T> {
        self.pop_side.root().map(|id| &self.entries[id].payload)
    }

    /// Insert `payload`, evicting the worst entry if the queue overflows.
    ///
    /// The evicted payload is dropped without notice.
    pub fn push(&mut self, payload: T, priority: f64) {
        drop(self.offer(payload, priority));
    }

    /// Like [`push`](Self::push), but returns the evicted entry and its
    /// priority, if any.
    pub fn offer(&mut self, payload: T, priority: f64) -> Option<(T, f64)> {
        let id = self.entries.len();
        self.entries.push(Entry::new(payload, self.order.weight(priority)));
        self.pop_side.push(id, &mut self.entries);
        self.evict_side.push(id, &mut self.entries);

        let mut evicted = None;
        while !self.is_empty() && self.capacity > 0 && self.len() > self.capacity {
            let Some(worst) = self.evict_side.root() else {
                break;
            };
            let entry = self.remove(worst);
            let priority = self.order.priority(entry.weight);
            tracing::trace!(capacity = self.capacity, priority, "evicted entry on overflow");
            evicted = Some((entry.payload, priority));
        }
        evicted
    }

    /// Remove and return the payload ranked first under the configured order.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.pop_with_priority().map(|(payload, _)| payload)
    }

    /// Like [`pop`](Self::pop), also returning the entry's priority.
    pub fn pop_with_priority(&mut self) -> Result<(T, f64), QueueError> {
        let id = self.pop_side.root().ok_or(QueueError::Empty)?;
        let entry = self.remove(id);
        Ok((entry.payload, self.order.priority(entry.weight)))
    }

    /// [`pop`](Self::pop) for callers that treat empty as a normal outcome.
    pub fn try_pop(&mut self) -> Option<T> {
        self.pop().ok()
    }

    pub fn clear(&mut self) {
        self.pop_side.clear();
        self.evict_side.clear();
        self.entries.clear();
    }

    /// Pop every entry, in pop order.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }

    /// Consume the queue, returning `(payload, priority)` pairs in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<(T, f64)> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop_with_priority() {
            out.push(item);
        }
        out
    }

    /// Live entries and their priorities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        let order = self.order;
        self.entries.iter().map(move |e| (&e.payload, order.priority(e.weight)))
    }

    /// Unlink arena entry `id` from both backbones and compact the arena.
    fn remove(&mut self, id: usize) -> Entry<T> {
        let [pop_slot, evict_slot] = self.entries[id].slots;
        self.pop_side.remove_at(pop_slot, &mut self.entries);
        self.evict_side.remove_at(evict_slot, &mut self.entries);

        let entry = self.entries.swap_remove(id);
        if let Some(moved) = self.entries.get(id) {
            // The former last entry now lives at `id`.
            let [pop_slot, evict_slot] = moved.slots;
            self.pop_side.relabel(pop_slot, id);
            self.evict_side.relabel(evict_slot, id);
        }
        entry
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        use super::order::cmp_weight;
        use std::cmp::Ordering;

        assert_eq!(self.pop_side.len(), self.len());
        assert_eq!(self.evict_side.len(), self.len());
        if self.capacity > 0 {
            assert!(self.len() <= self.capacity, "over capacity");
        }
        for (side, backbone) in [(Side::Pop, &self.pop_side), (Side::Evict, &self.evict_side)] {
            for (pos, &id) in backbone.ids().iter().enumerate() {
                assert_eq!(self.entries[id].slots[side as usize], pos);
                if pos == 0 {
                    continue;
                }
                let parent = backbone.ids()[(pos - 1) / 2];
                let ord = cmp_weight(self.entries[parent].weight, self.entries[id].weight);
                match side {
                    Side::Pop => assert_ne!(ord, Ordering::Less, "max-heap violated at {pos}"),
                    Side::Evict => assert_ne!(ord, Ordering::Greater, "min-heap violated at {pos}"),
                }
            }
        }
    }
}

impl<T> Default for BoundedPriorityQueue<T> {
    fn default() -> Self {
        Self::new(0, Order::Max)
    }
}

impl<T> Extend<(T, f64)> for BoundedPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        for (payload, priority) in iter {
            self.push(payload, priority);
        }
    }
}

impl<T> fmt::Debug for BoundedPriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedPriorityQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("order", &self.order)
            .finish()
    }
}

/// Iterator returned by [`BoundedPriorityQueue::drain`].
///
/// Entries not yet yielded stay in the queue if the iterator is dropped early.
pub struct Drain<'a, T> {
    queue: &'a mut BoundedPriorityQueue<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.try_pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
