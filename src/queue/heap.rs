//! Array-backed binary heap engine with per-entry slot bookkeeping.
//!
//! Entries live in a dense arena (`Vec<Entry<T>>`). A [`Backbone`] is a
//! compact `Vec<usize>` of arena ids arranged as a binary heap. Each entry
//! records its current slot in every backbone it belongs to, so an entry can
//! be located and removed from the middle of a heap in O(log n), not only from
//! the root.
//!
//! # Invariants
//!
//! - For every slot `i` of a backbone on side `s`:
//!   `entries[ids[i]].slots[s] == i`
//! - For every non-root slot `i` with parent `p = (i - 1) / 2`:
//!   `ids[p]` ranks at least as high as `ids[i]` for that side.

use std::cmp::Ordering;

use super::order::cmp_weight;

/// Which end of the weight range a backbone keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// Max-ordered on weight: the root is the next entry to pop.
    Pop = 0,
    /// Min-ordered on weight: the root is the next entry to evict.
    Evict = 1,
}

/// A stored payload with its fixed weight and its slot in each backbone.
#[derive(Debug)]
pub(crate) struct Entry<T> {
    pub payload: T,
    pub weight: f64,
    pub slots: [usize; 2],
}

impl<T> Entry<T> {
    pub fn new(payload: T, weight: f64) -> Self {
        Self { payload, weight, slots: [usize::MAX; 2] }
    }
}

#[derive(Debug)]
pub(crate) struct Backbone {
    ids: Vec<usize>,
    side: Side,
}

impl Backbone {
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self { ids: Vec::with_capacity(capacity), side }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Arena id at the root.
    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.ids.first().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Insert arena id `id` and restore the heap property.
    pub fn push<T>(&mut self, id: usize, entries: &mut [Entry<T>]) {
        let pos = self.ids.len();
        entries[id].slots[self.side as usize] = pos;
        self.ids.push(id);
        self.sift_up(pos, entries);
    }

    /// Remove whatever sits at `pos`, moving the last slot into its place.
    pub fn remove_at<T>(&mut self, pos: usize, entries: &mut [Entry<T>]) {
        let last = self.ids.len() - 1;
        if pos == last {
            self.ids.pop();
            return;
        }

        self.ids.swap(pos, last);
        self.ids.pop();
        entries[self.ids[pos]].slots[self.side as usize] = pos;

        // The moved entry may belong above or below its new slot.
        if self.sift_up(pos, entries) == pos {
            self.sift_down(pos, entries);
        }
    }

    /// Point `pos` at a new arena id after the arena compacted.
    #[inline]
    pub fn relabel(&mut self, pos: usize, id: usize) {
        self.ids[pos] = id;
    }

    /// Arena ids in slot order.
    #[cfg(test)]
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    fn sift_up<T>(&mut self, mut pos: usize, entries: &mut [Entry<T>]) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.outranks(pos, parent, entries) {
                break;
            }
            self.swap_slots(pos, parent, entries);
            pos = parent;
        }
        pos
    }

    fn sift_down<T>(&mut self, mut pos: usize, entries: &mut [Entry<T>]) {
        let len = self.ids.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;

            if left < len && self.outranks(left, best, entries) {
                best = left;
            }
            if right < len && self.outranks(right, best, entries) {
                best = right;
            }
            if best == pos {
                break;
            }

            self.swap_slots(pos, best, entries);
            pos = best;
        }
    }

    /// True if slot `a` belongs strictly closer to the root than slot `b`.
    fn outranks<T>(&self, a: usize, b: usize, entries: &[Entry<T>]) -> bool {
        let wa = entries[self.ids[a]].weight;
        let wb = entries[self.ids[b]].weight;
        let ord = cmp_weight(wa, wb);
        match self.side {
            Side::Pop => ord == Ordering::Greater,
            Side::Evict => ord == Ordering::Less,
        }
    }

    fn swap_slots<T>(&mut self, a: usize, b: usize, entries: &mut [Entry<T>]) {
        self.ids.swap(a, b);
        let side = self.side as usize;
        entries[self.ids[a]].slots[side] = a;
        entries[self.ids[b]].slots[side] = b;
    }
}
