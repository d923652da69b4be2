//! Property-based tests for queues using proptest
//!
//! These tests verify that both queues maintain their size and content invariants under
//! arbitrary interleavings of insertions and removals.

use crate::queue::{Queue, RandomizedQueue};
use crate::Error;
use proptest::prelude::*;
use std::collections::VecDeque;
use std::vec::Vec;

/// Property: FIFO ordering and size are preserved for the linked queue
mod linked_queue_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_fifo_ordering(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut queue = Queue::new();
            for &value in &values {
                queue.enqueue(value);
            }
            prop_assert_eq!(queue.len(), values.len());

            for &expected in &values {
                prop_assert_eq!(queue.dequeue(), Ok(expected));
            }
            prop_assert!(queue.is_empty());
            prop_assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
        }

        #[test]
        fn test_len_invariant(
            operations in prop::collection::vec(
                prop::bool::weighted(0.6), // 60% enqueue, 40% dequeue
                1..300
            )
        ) {
            let mut queue = Queue::new();
            let mut model = VecDeque::new();

            for (counter, &should_enqueue) in operations.iter().enumerate() {
                if should_enqueue {
                    queue.enqueue(counter);
                    model.push_back(counter);
                } else {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }

                prop_assert_eq!(queue.len(), model.len());
                prop_assert_eq!(queue.peek().ok(), model.front());
            }
        }
    }
}

/// Property: the randomized queue is a multiset that resizes within its bounds
mod randomized_queue_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_contents_and_capacity_invariant(
            seed in any::<u64>(),
            operations in prop::collection::vec(
                prop::bool::weighted(0.6),
                1..400
            )
        ) {
            let mut queue = RandomizedQueue::with_seed(seed);
            let mut model: Vec<usize> = Vec::new();

            for (counter, &should_enqueue) in operations.iter().enumerate() {
                if should_enqueue {
                    queue.enqueue(counter);
                    model.push(counter);
                } else {
                    match queue.dequeue() {
                        Ok(value) => {
                            let position = model.iter().position(|&v| v == value);
                            prop_assert!(position.is_some(), "dequeued unknown value {}", value);
                            if let Some(position) = position {
                                model.swap_remove(position);
                            }
                        }
                        Err(error) => {
                            prop_assert_eq!(error, Error::EmptyContainer);
                            prop_assert!(model.is_empty());
                        }
                    }
                }

                // Size invariant and capacity bounds after every step
                prop_assert_eq!(queue.len(), model.len());
                prop_assert!(queue.capacity() >= queue.len());
                prop_assert!(queue.capacity() >= 2);
                prop_assert!(queue.capacity().is_power_of_two());
                if queue.len() > 0 {
                    prop_assert!(queue.len() > queue.capacity() / 4);
                }
            }

            let mut contents: Vec<_> = queue.iter().copied().collect();
            contents.sort_unstable();
            model.sort_unstable();
            prop_assert_eq!(contents, model);
        }

        #[test]
        fn test_sample_draws_from_contents(
            seed in any::<u64>(),
            values in prop::collection::vec(any::<i16>(), 1..50)
        ) {
            let mut queue = RandomizedQueue::with_seed(seed);
            queue.extend(values.iter().copied());

            for _ in 0..20 {
                let sampled = queue.sample();
                prop_assert!(sampled.is_ok());
                if let Ok(sampled) = sampled {
                    prop_assert!(values.contains(sampled));
                }
            }
            prop_assert_eq!(queue.len(), values.len());
        }
    }
}
