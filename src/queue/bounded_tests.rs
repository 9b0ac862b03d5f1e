//! Tests for the bounded queue: ordering, retention, and slot bookkeeping.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::error::QueueError;
    use crate::queue::{BoundedPriorityQueue, Order};

    fn drain_ids(queue: &mut BoundedPriorityQueue<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.pop().unwrap());
            queue.assert_invariants();
        }
        out
    }

    #[test]
    fn fresh_queue_is_empty_with_infinite_priority() {
        let queue: BoundedPriorityQueue<()> = BoundedPriorityQueue::new(4, Order::Max);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.priority(), f64::INFINITY);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn pop_on_empty_is_an_error() {
        let mut queue: BoundedPriorityQueue<u8> = BoundedPriorityQueue::new(0, Order::Min);
        assert_eq!(queue.pop(), Err(QueueError::Empty));
        assert_eq!(queue.try_pop(), None);
        assert!(queue.pop_with_priority().is_err());
    }

    #[test]
    fn min_priority_tracks_smallest() {
        let mut queue = BoundedPriorityQueue::new(0, Order::Min);
        queue.push("b", 2.0);
        queue.push("a", -1.0);
        queue.push("c", 7.5);
        assert_eq!(queue.priority(), -1.0);
        assert_eq!(queue.worst_priority(), 7.5);
        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(queue.pop_with_priority(), Ok(("a", -1.0)));
        assert_eq!(queue.priority(), 2.0);
    }

    #[test]
    fn full_only_when_bounded() {
        let mut bounded = BoundedPriorityQueue::new(2, Order::Max);
        let mut unbounded = BoundedPriorityQueue::new(0, Order::Max);
        for i in 0..3 {
            bounded.push(i, f64::from(i));
            unbounded.push(i, f64::from(i));
        }
        assert!(bounded.is_full());
        assert_eq!(bounded.len(), 2);
        assert!(!unbounded.is_full());
        assert_eq!(unbounded.len(), 3);
    }

    #[test]
    fn offer_returns_what_push_would_drop() {
        let mut queue = BoundedPriorityQueue::new(2, Order::Max);
        assert_eq!(queue.offer(10, 1.0), None);
        assert_eq!(queue.offer(20, 2.0), None);
        assert_eq!(queue.offer(30, 3.0), Some((10, 1.0)));
        // The pushed entry itself is evicted when it ranks last.
        assert_eq!(queue.offer(0, 0.5), Some((0, 0.5)));
        queue.assert_invariants();
        assert_eq!(drain_ids(&mut queue), vec![30, 20]);
    }

    #[test]
    fn min_queue_evicts_largest() {
        let mut queue = BoundedPriorityQueue::new(3, Order::Min);
        for p in [5, 1, 4, 2, 3] {
            queue.push(p, f64::from(p));
            queue.assert_invariants();
        }
        assert_eq!(queue.worst_priority(), 3.0);
        assert_eq!(drain_ids(&mut queue), vec![1, 2, 3]);
    }

    #[test]
    fn nan_is_evicted_first_and_popped_last() {
        let mut queue = BoundedPriorityQueue::new(0, Order::Max);
        queue.push(1, f64::NAN);
        queue.push(2, f64::NEG_INFINITY);
        queue.push(3, 0.0);
        assert_eq!(queue.priority(), 0.0);
        assert!(queue.worst_priority().is_nan());
        assert_eq!(drain_ids(&mut queue), vec![3, 2, 1]);

        let mut bounded = BoundedPriorityQueue::new(2, Order::Min);
        bounded.push(1, f64::INFINITY);
        bounded.push(2, f64::NAN);
        bounded.push(3, 4.0);
        assert_eq!(drain_ids(&mut bounded), vec![3, 1]);
    }

    #[test]
    fn priority_is_nan_only_when_all_entries_are_nan() {
        let mut queue = BoundedPriorityQueue::new(0, Order::Min);
        queue.push((), f64::NAN);
        assert!(queue.priority().is_nan());
        queue.push((), 1.0);
        assert_eq!(queue.priority(), 1.0);
    }

    #[test]
    fn would_retain_matches_push_outcome() {
        let mut queue = BoundedPriorityQueue::new(2, Order::Max);
        assert_eq!(queue.worst_priority(), f64::NEG_INFINITY);
        assert!(queue.would_retain(f64::NEG_INFINITY));
        queue.push('a', 3.0);
        queue.push('b', 5.0);
        assert!(!queue.would_retain(3.0));
        assert!(!queue.would_retain(f64::NAN));
        assert!(queue.would_retain(4.0));

        let mut min = BoundedPriorityQueue::new(1, Order::Min);
        assert_eq!(min.worst_priority(), f64::INFINITY);
        min.push('x', 2.0);
        assert!(min.would_retain(1.0));
        assert!(!min.would_retain(2.5));
    }

    #[test]
    fn clear_and_reuse() {
        let mut queue = BoundedPriorityQueue::new(3, Order::Max);
        queue.extend([(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)]);
        assert!(queue.is_full());
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.priority(), f64::INFINITY);
        queue.push(9, 9.0);
        queue.assert_invariants();
        assert_eq!(queue.pop(), Ok(9));
    }

    #[test]
    fn into_sorted_vec_yields_pop_order_with_priorities() {
        let mut queue = BoundedPriorityQueue::new(0, Order::Min);
        queue.extend([("x", 3.0), ("y", -2.0), ("z", 0.0)]);
        assert_eq!(queue.into_sorted_vec(), vec![("y", -2.0), ("z", 0.0), ("x", 3.0)]);
    }

    #[test]
    fn drain_reports_exact_size() {
        let mut queue = BoundedPriorityQueue::new(0, Order::Max);
        queue.extend((0..10).map(|i| (i, f64::from(i))));
        let mut drain = queue.drain();
        assert_eq!(drain.len(), 10);
        assert_eq!(drain.next(), Some(9));
        assert_eq!(drain.len(), 9);
        drop(drain);
        assert_eq!(queue.len(), 9);
    }

    #[test]
    fn iter_reports_caller_priorities() {
        let mut queue = BoundedPriorityQueue::new(0, Order::Min);
        queue.push("a", 1.5);
        queue.push("b", -4.0);
        let mut seen: Vec<_> = queue.iter().map(|(p, w)| (*p, w)).collect();
        seen.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(seen, vec![("a", 1.5), ("b", -4.0)]);
    }

    #[test]
    fn debug_omits_payloads() {
        struct Opaque;
        let mut queue = BoundedPriorityQueue::new(5, Order::Min);
        queue.push(Opaque, 1.0);
        let text = format!("{queue:?}");
        assert!(text.contains("len: 1"));
        assert!(text.contains("capacity: 5"));
        assert!(text.contains("Min"));
    }

    #[test]
    fn randomized_operations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for &(capacity, order) in &[(0, Order::Max), (1, Order::Min), (7, Order::Max), (16, Order::Min)] {
            let mut queue = BoundedPriorityQueue::new(capacity, order);
            let mut model: Vec<f64> = Vec::new();

            for step in 0..2_000u32 {
                if rng.gen_bool(0.65) {
                    let p = f64::from(rng.gen_range(-50i32..50));
                    queue.push(step, p);
                    model.push(p);
                    model.sort_by(|a, b| b.partial_cmp(a).unwrap());
                    if order == Order::Min {
                        model.reverse();
                    }
                    if capacity > 0 && model.len() > capacity {
                        model.truncate(capacity);
                    }
                } else {
                    let expected = (!model.is_empty()).then(|| model.remove(0));
                    let got = queue.pop_with_priority().ok().map(|(_, p)| p);
                    assert_eq!(got, expected, "step {step}");
                }
                queue.assert_invariants();
                assert_eq!(queue.len(), model.len());
                let head = model.first().copied().unwrap_or(f64::INFINITY);
                assert_eq!(queue.priority(), head);
            }
        }
    }
}
