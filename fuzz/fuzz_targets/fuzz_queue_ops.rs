//! Fuzz target for queue operation sequences.
//!
//! Drives arbitrary push/pop/offer sequences against a sorted-vector model
//! and checks length, capacity, and pop priorities after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use bounded_pq::{BoundedPriorityQueue, Order};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(i16),
    PushNan,
    Offer(i16),
    Pop,
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    min: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let order = if input.min { Order::Min } else { Order::Max };
    let capacity = usize::from(input.capacity % 32);
    let mut queue = BoundedPriorityQueue::new(capacity, order);
    // Best first; NaN last.
    let mut model: Vec<f64> = Vec::new();

    let insert = |model: &mut Vec<f64>, p: f64| {
        let pos = model.iter().position(|&q| order.outranks(p, q)).unwrap_or(model.len());
        model.insert(pos, p);
        if capacity > 0 && model.len() > capacity {
            model.pop();
        }
    };

    for op in input.ops {
        match op {
            Op::Push(p) => {
                queue.push((), f64::from(p));
                insert(&mut model, f64::from(p));
            }
            Op::PushNan => {
                queue.push((), f64::NAN);
                insert(&mut model, f64::NAN);
            }
            Op::Offer(p) => {
                let evicted = queue.offer((), f64::from(p));
                assert_eq!(evicted.is_some(), capacity > 0 && model.len() == capacity);
                insert(&mut model, f64::from(p));
            }
            Op::Pop => {
                let got = queue.pop_with_priority().ok().map(|(_, p)| p);
                let want = (!model.is_empty()).then(|| model.remove(0));
                match (got, want) {
                    (Some(g), Some(w)) => assert!(g == w || (g.is_nan() && w.is_nan())),
                    (None, None) => {}
                    other => panic!("pop mismatch: {other:?}"),
                }
            }
            Op::Clear => {
                queue.clear();
                model.clear();
            }
        }
        assert_eq!(queue.len(), model.len());
        if capacity > 0 {
            assert!(queue.len() <= capacity);
        }
    }
});
