//! Property-based tests for the deque using proptest
//!
//! Every operation sequence is mirrored on `std::collections::VecDeque`, which serves as
//! the reference model for ordering and length.

use super::Deque;
use crate::Error;
use proptest::prelude::*;
use std::collections::VecDeque;
use std::vec::Vec;

#[derive(Debug, Clone)]
enum Op {
    AddFirst(i32),
    AddLast(i32),
    RemoveFirst,
    RemoveLast,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::AddFirst),
        any::<i32>().prop_map(Op::AddLast),
        Just(Op::RemoveFirst),
        Just(Op::RemoveLast),
    ]
}

proptest! {
    #[test]
    fn test_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut deque = Deque::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::AddFirst(value) => {
                    deque.add_first(value);
                    model.push_front(value);
                }
                Op::AddLast(value) => {
                    deque.add_last(value);
                    model.push_back(value);
                }
                Op::RemoveFirst => {
                    prop_assert_eq!(
                        deque.remove_first(),
                        model.pop_front().ok_or(Error::EmptyContainer)
                    );
                }
                Op::RemoveLast => {
                    prop_assert_eq!(
                        deque.remove_last(),
                        model.pop_back().ok_or(Error::EmptyContainer)
                    );
                }
            }

            // Size invariant holds after every step
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.is_empty(), model.is_empty());
            prop_assert_eq!(deque.peek_first(), model.front());
            prop_assert_eq!(deque.peek_last(), model.back());
        }

        let forward: Vec<_> = deque.iter().copied().collect();
        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(forward, expected);
    }

    #[test]
    fn test_iter_len_matches_walk(values in prop::collection::vec(any::<u8>(), 0..100)) {
        let deque: Deque<u8> = values.iter().copied().collect();
        let iter = deque.iter();
        prop_assert_eq!(iter.len(), values.len());
        prop_assert_eq!(iter.count(), values.len());
        prop_assert!(deque.iter().rev().eq(values.iter().rev()));
    }
}
