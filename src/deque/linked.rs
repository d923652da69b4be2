//! Sentinel-Linked Deque Implementation
//!
//! A doubly-linked list bounded by two permanent sentinel nodes. Inserting or removing at
//! either end is a splice next to one of the sentinels, so no operation ever has to test
//! for a missing neighbour.
//!
//! ## Design
//!
//! Links are indices rather than pointers:
//! - Index `0` is the head sentinel and index `1` the tail sentinel; both live in a fixed
//!   array on the deque and never hold a value
//! - Interior nodes live in a dense arena; node `i` is stored at `nodes[i - 2]`
//! - Each link pair is `[prev, next]`
//!
//! Removing a node `swap_remove`s it out of the arena and re-points the two neighbours of
//! the node that moved into its slot. The arena therefore always holds exactly `len`
//! nodes, and spare capacity is returned once the arena falls to a quarter of its
//! allocation.
//!
//! ## Performance Characteristics
//!
//! - **add_first / add_last**: O(1) amortized (arena growth)
//! - **remove_first / remove_last**: O(1) amortized; a removal that halves the arena
//!   copies the remaining nodes
//! - **iteration**: O(1) per step, O(1) extra space
//!
//! ## Example
//!
//! ```rust
//! use randq::deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.add_first(1);
//! deque.add_first(2);
//! deque.add_last(3);
//!
//! let order: Vec<_> = deque.iter().copied().collect();
//! assert_eq!(order, [2, 1, 3]);
//!
//! assert_eq!(deque.remove_last()?, 3);
//! assert_eq!(deque.remove_first()?, 2);
//! # Ok::<(), randq::Error>(())
//! ```

use crate::metrics::{ContainerMetrics, MetricsCollector, OpMetrics};
use crate::{Collection, Error, Result};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

const HEAD: usize = 0;
const TAIL: usize = 1;
const FIRST_NODE: usize = 2;

const PREV: usize = 0;
const NEXT: usize = 1;

// Smallest arena allocation worth shrinking back to
const MIN_ARENA_CAPACITY: usize = 4;

#[derive(Debug)]
struct Node<T> {
    value: T,
    links: [usize; 2],
}

/// A double-ended queue backed by a sentinel-bounded doubly-linked list
///
/// Every splice is constant time, but the arena that holds the nodes grows by doubling
/// and halves once it is a quarter full. An insert or removal that triggers one of
/// those reallocations is O(n); the bounds for `add_*` and `remove_*` are amortized,
/// not worst case. Space stays proportional to `len`.
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque
///
/// # Examples
///
/// ```rust
/// use randq::deque::Deque;
///
/// let mut deque: Deque<&str> = Deque::new();
/// deque.add_last("back");
/// deque.add_first("front");
///
/// assert_eq!(deque.len(), 2);
/// assert_eq!(deque.peek_first(), Some(&"front"));
/// assert_eq!(deque.peek_last(), Some(&"back"));
/// ```
pub struct Deque<T> {
    // Head and tail sentinel links
    sentinels: [[usize; 2]; 2],

    // Interior nodes, densely packed
    nodes: Vec<Node<T>>,

    metrics: OpMetrics,
}

impl<T> Deque<T> {
    /// Create an empty deque
    ///
    /// Only the two sentinels exist; no allocation happens until the first insert.
    pub fn new() -> Self {
        Self {
            sentinels: [[HEAD, TAIL], [HEAD, TAIL]],
            nodes: Vec::new(),
            metrics: OpMetrics::default(),
        }
    }

    /// Number of elements in the deque
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the deque is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert an element at the front
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::deque::Deque;
    ///
    /// let mut deque = Deque::new();
    /// deque.add_first(1);
    /// deque.add_first(2);
    /// assert_eq!(deque.peek_first(), Some(&2));
    /// ```
    pub fn add_first(&mut self, value: T) {
        let timer = self.metrics.start();
        let first = self.links(HEAD)[NEXT];
        self.splice_between(HEAD, first, value);
        self.metrics.record_success(timer);
    }

    /// Insert an element at the back
    pub fn add_last(&mut self, value: T) {
        let timer = self.metrics.start();
        let last = self.links(TAIL)[PREV];
        self.splice_between(last, TAIL, value);
        self.metrics.record_success(timer);
    }

    /// Insert a possibly absent element at the front
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the element was inserted
    /// * `Err(Error::NullItem)` if `value` is `None`; the deque is unchanged
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::{deque::Deque, Error};
    ///
    /// let mut deque: Deque<i32> = Deque::new();
    /// assert_eq!(deque.try_add_first(None), Err(Error::NullItem));
    /// assert!(deque.is_empty());
    /// ```
    pub fn try_add_first(&mut self, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => {
                self.add_first(value);
                Ok(())
            }
            None => {
                self.metrics.record_failure();
                Err(Error::NullItem)
            }
        }
    }

    /// Insert a possibly absent element at the back
    ///
    /// Fails with `Error::NullItem` and leaves the deque unchanged if `value` is `None`.
    pub fn try_add_last(&mut self, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => {
                self.add_last(value);
                Ok(())
            }
            None => {
                self.metrics.record_failure();
                Err(Error::NullItem)
            }
        }
    }

    /// Remove and return the element at the front
    ///
    /// # Returns
    ///
    /// * `Ok(value)` with the former first element
    /// * `Err(Error::EmptyContainer)` if the deque is empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::{deque::Deque, Error};
    ///
    /// let mut deque = Deque::new();
    /// deque.add_last(42);
    /// assert_eq!(deque.remove_first(), Ok(42));
    /// assert_eq!(deque.remove_first(), Err(Error::EmptyContainer));
    /// ```
    pub fn remove_first(&mut self) -> Result<T> {
        if self.is_empty() {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        }
        let timer = self.metrics.start();
        let first = self.links(HEAD)[NEXT];
        let value = self.unlink(first);
        self.metrics.record_success(timer);
        Ok(value)
    }

    /// Remove and return the element at the back
    ///
    /// Fails with `Error::EmptyContainer` if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        }
        let timer = self.metrics.start();
        let last = self.links(TAIL)[PREV];
        let value = self.unlink(last);
        self.metrics.record_success(timer);
        Ok(value)
    }

    /// Reference to the front element, if any
    pub fn peek_first(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.value(self.links(HEAD)[NEXT]))
        }
    }

    /// Reference to the back element, if any
    pub fn peek_last(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.value(self.links(TAIL)[PREV]))
        }
    }

    /// Drop every element and release the arena
    pub fn clear(&mut self) {
        self.nodes = Vec::new();
        self.sentinels = [[HEAD, TAIL], [HEAD, TAIL]];
    }

    /// Iterate from front to back
    ///
    /// The iterator is a live view: it walks the links in place and allocates nothing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: self.links(HEAD)[NEXT],
            back: self.links(TAIL)[PREV],
            remaining: self.len(),
        }
    }

    #[inline]
    fn links(&self, at: usize) -> [usize; 2] {
        if at < FIRST_NODE {
            self.sentinels[at]
        } else {
            self.nodes[at - FIRST_NODE].links
        }
    }

    #[inline]
    fn links_mut(&mut self, at: usize) -> &mut [usize; 2] {
        if at < FIRST_NODE {
            &mut self.sentinels[at]
        } else {
            &mut self.nodes[at - FIRST_NODE].links
        }
    }

    #[inline]
    fn value(&self, at: usize) -> &T {
        &self.nodes[at - FIRST_NODE].value
    }

    /// Link a new node between two adjacent nodes
    fn splice_between(&mut self, prev: usize, next: usize, value: T) {
        debug_assert_eq!(self.links(prev)[NEXT], next);

        // The first allocation is not a doubling
        if self.nodes.capacity() > 0 && self.nodes.len() == self.nodes.capacity() {
            self.metrics.record_grow();
        }

        let at = self.nodes.len() + FIRST_NODE;
        self.nodes.push(Node {
            value,
            links: [prev, next],
        });
        self.links_mut(prev)[NEXT] = at;
        self.links_mut(next)[PREV] = at;

        self.metrics.observe_len(self.len());
    }

    /// Unlink an interior node and return its value
    fn unlink(&mut self, at: usize) -> T {
        debug_assert!(at >= FIRST_NODE, "sentinels are never unlinked");

        let [prev, next] = self.links(at);
        self.links_mut(prev)[NEXT] = next;
        self.links_mut(next)[PREV] = prev;

        let removed = self.nodes.swap_remove(at - FIRST_NODE);

        // The former last node now occupies `at`; its neighbours still point at its old index
        if at - FIRST_NODE < self.nodes.len() {
            let [moved_prev, moved_next] = self.links(at);
            self.links_mut(moved_prev)[NEXT] = at;
            self.links_mut(moved_next)[PREV] = at;
        }

        let capacity = self.nodes.capacity();
        if capacity > MIN_ARENA_CAPACITY && self.nodes.len() <= capacity / 4 {
            self.nodes.shrink_to(capacity / 2);
            self.metrics.record_shrink();
        }

        removed.value
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for Deque<T> {
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> MetricsCollector for Deque<T> {
    fn metrics(&self) -> ContainerMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset(self.len());
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

/// Front-to-back iterator over a [`Deque`]
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let deque = self.deque;
        let value = deque.value(self.front);
        self.front = deque.links(self.front)[NEXT];
        self.remaining -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let deque = self.deque;
        let value = deque.value(self.back);
        self.back = deque.links(self.back)[PREV];
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Consuming front-to-back iterator over a [`Deque`]
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.remove_first().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}
