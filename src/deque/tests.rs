//! Unit tests for deque implementations

use super::*;
use crate::metrics::MetricsCollector;
use crate::{CheckedIterator, Error};
use std::vec::Vec;

#[test]
fn test_new_deque_is_empty() {
    let deque: Deque<i32> = Deque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.peek_first(), None);
    assert_eq!(deque.peek_last(), None);
    assert_eq!(deque.iter().next(), None);
}

#[test]
fn test_mixed_end_ordering() {
    let mut deque = Deque::new();
    deque.add_first(1);
    deque.add_first(2);
    deque.add_last(3);

    let order: Vec<_> = deque.iter().copied().collect();
    assert_eq!(order, [2, 1, 3]);
    assert_eq!(deque.len(), 3);
}

#[test]
fn test_remove_from_both_ends() {
    let mut deque: Deque<_> = (1..=5).collect();

    assert_eq!(deque.remove_first(), Ok(1));
    assert_eq!(deque.remove_last(), Ok(5));
    assert_eq!(deque.remove_first(), Ok(2));
    assert_eq!(deque.remove_last(), Ok(4));
    assert_eq!(deque.remove_last(), Ok(3));
    assert!(deque.is_empty());
}

#[test]
fn test_empty_container_errors() {
    let mut deque: Deque<i32> = Deque::new();
    assert_eq!(deque.remove_first(), Err(Error::EmptyContainer));
    assert_eq!(deque.remove_last(), Err(Error::EmptyContainer));

    // Drained deques behave like fresh ones
    deque.add_last(7);
    assert_eq!(deque.remove_first(), Ok(7));
    assert_eq!(deque.remove_first(), Err(Error::EmptyContainer));
    assert_eq!(deque.remove_last(), Err(Error::EmptyContainer));
}

#[test]
fn test_null_rejection_leaves_deque_unchanged() {
    let mut deque = Deque::new();
    deque.add_last("kept");

    assert_eq!(deque.try_add_first(None), Err(Error::NullItem));
    assert_eq!(deque.try_add_last(None), Err(Error::NullItem));
    assert_eq!(deque.len(), 1);

    assert_eq!(deque.try_add_first(Some("front")), Ok(()));
    assert_eq!(deque.try_add_last(Some("back")), Ok(()));
    let order: Vec<_> = deque.iter().copied().collect();
    assert_eq!(order, ["front", "kept", "back"]);
}

#[test]
fn test_round_trip_with_mixed_operations() {
    let mut deque = Deque::new();
    let n = 1000;

    for i in 0..n {
        if i % 2 == 0 {
            deque.add_first(i);
        } else {
            deque.add_last(i);
        }
    }
    assert_eq!(deque.len(), n);

    for i in 0..n {
        let removed = if i % 3 == 0 {
            deque.remove_first()
        } else {
            deque.remove_last()
        };
        assert!(removed.is_ok());
        assert_eq!(deque.len(), n - i - 1);
    }

    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
}

#[test]
fn test_links_survive_interleaved_removals() {
    // Removing from one end relocates arena slots; order must stay intact
    let mut deque = Deque::new();
    let mut model = std::collections::VecDeque::new();

    for round in 0..50 {
        for i in 0..7 {
            let value = round * 10 + i;
            if (round + i) % 2 == 0 {
                deque.add_first(value);
                model.push_front(value);
            } else {
                deque.add_last(value);
                model.push_back(value);
            }
        }
        for i in 0..5 {
            if (round + i) % 3 == 0 {
                assert_eq!(deque.remove_last().ok(), model.pop_back());
            } else {
                assert_eq!(deque.remove_first().ok(), model.pop_front());
            }
        }
        assert!(deque.iter().eq(model.iter()));
        assert!(deque.iter().rev().eq(model.iter().rev()));
    }
}

#[test]
fn test_iterator_contract() {
    let deque: Deque<_> = ["a", "b", "c"].into_iter().collect();

    let mut iter = deque.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.try_next(), Ok(&"a"));
    assert_eq!(iter.next_back(), Some(&"c"));
    assert_eq!(iter.try_next(), Ok(&"b"));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.try_next(), Err(Error::NoMoreElements));
}

#[test]
fn test_concurrent_iterators_are_independent() {
    let deque: Deque<_> = (0..4).collect();

    let mut first = deque.iter();
    let mut second = deque.iter();
    assert_eq!(first.next(), Some(&0));
    assert_eq!(first.next(), Some(&1));
    assert_eq!(second.next(), Some(&0));
    assert_eq!(first.clone().count(), 2);
}

#[test]
fn test_into_iter_drains_in_order() {
    let mut deque = Deque::new();
    deque.add_last(2);
    deque.add_first(1);
    deque.add_last(3);

    let forward: Vec<_> = deque.into_iter().collect();
    assert_eq!(forward, [1, 2, 3]);

    let deque: Deque<_> = (1..=3).collect();
    let backward: Vec<_> = deque.into_iter().rev().collect();
    assert_eq!(backward, [3, 2, 1]);
}

#[test]
fn test_clear_resets_to_sentinels_only() {
    let mut deque: Deque<_> = (0..10).collect();
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.remove_first(), Err(Error::EmptyContainer));

    deque.add_last(1);
    deque.add_first(0);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1]);
}

#[test]
fn test_debug_lists_elements() {
    let deque: Deque<_> = (1..=3).collect();
    assert_eq!(std::format!("{:?}", deque), "[1, 2, 3]");
}

#[test]
fn test_metrics_track_operations() {
    let mut deque = Deque::new();
    for i in 0..16 {
        deque.add_last(i);
    }
    while deque.remove_first().is_ok() {}

    let metrics = deque.metrics();
    assert_eq!(metrics.successful_operations, 32);
    assert_eq!(metrics.failed_operations, 1);
    assert_eq!(metrics.peak_len, 16);
    assert!(metrics.grow_events > 0);
    assert!(metrics.shrink_events > 0);

    deque.reset_metrics();
    assert_eq!(deque.metrics().total_operations, 0);
}

#[test]
fn test_first_allocation_is_not_a_grow_event() {
    let mut deque = Deque::new();
    deque.add_last(1);
    assert_eq!(deque.metrics().grow_events, 0);

    // A cleared deque starts again from no allocation
    deque.clear();
    deque.add_first(2);
    assert_eq!(deque.metrics().grow_events, 0);
}

#[test]
fn test_arena_shrink_keeps_order() {
    let mut deque: Deque<_> = (0..64).collect();
    for expected in 0..60 {
        assert_eq!(deque.remove_first(), Ok(expected));
    }

    assert!(deque.metrics().shrink_events > 0);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [60, 61, 62, 63]);
    assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), [63, 62, 61, 60]);
}

#[test]
fn test_deque_drop_safety() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

    struct DropCounter;

    impl Drop for DropCounter {
        fn drop(&mut self) {
            DROP_COUNT.fetch_add(1, Ordering::Relaxed);
        }
    }

    let mut deque = Deque::new();
    for i in 0..50 {
        if i % 2 == 0 {
            deque.add_first(DropCounter);
        } else {
            deque.add_last(DropCounter);
        }
    }

    // Drop some items
    for _ in 0..20 {
        drop(deque.remove_last());
    }
    assert_eq!(DROP_COUNT.load(Ordering::Relaxed), 20);

    // Drop the deque
    drop(deque);

    // All remaining items should be dropped
    assert_eq!(DROP_COUNT.load(Ordering::Relaxed), 50);
}
