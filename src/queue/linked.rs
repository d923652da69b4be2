//! Linked FIFO Queue
//!
//! A singly-linked list with an owning `first` pointer and a non-owning `last` pointer.
//! Enqueue appends after `last`, dequeue advances `first`; both are O(1) in the worst case.
//!
//! Nodes are heap allocations managed through raw pointers: each node is leaked from a
//! `Box` on enqueue and reclaimed with `Box::from_raw` exactly once, on dequeue or drop.
//! Invariants:
//! - `first.is_none()` iff `len == 0`, and `last.is_none()` whenever the queue is empty
//! - `last`, when present, is the only node whose `next` is `None`

use crate::metrics::{ContainerMetrics, MetricsCollector, OpMetrics};
use crate::{Collection, Error, Result};
use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// A first-in-first-out queue backed by a singly-linked list
///
/// # Examples
///
/// ```rust
/// use randq::queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.peek(), Ok(&"a"));
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert!(queue.is_empty());
/// ```
pub struct Queue<T> {
    first: Option<NonNull<Node<T>>>,
    last: Option<NonNull<Node<T>>>,
    len: usize,
    metrics: OpMetrics,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the queue uniquely owns every node reachable from `first`
unsafe impl<T: Send> Send for Queue<T> {}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
            metrics: OpMetrics::default(),
            _owns: PhantomData,
        }
    }

    /// Number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Add an element to the back of the queue
    pub fn enqueue(&mut self, value: T) {
        let timer = self.metrics.start();

        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));
        match self.last {
            // SAFETY: `last` points at a live node owned by this queue and no other
            // reference to it exists while `&mut self` is held
            Some(mut last) => unsafe { last.as_mut().next = Some(node) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.len += 1;

        self.metrics.observe_len(self.len);
        self.metrics.record_success(timer);
    }

    /// Remove and return the least recently added element
    ///
    /// # Returns
    ///
    /// * `Ok(value)` with the element at the front
    /// * `Err(Error::EmptyContainer)` if the queue is empty
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        }

        let timer = self.metrics.start();
        let value = self.pop_node().ok_or(Error::EmptyContainer)?;
        self.metrics.record_success(timer);
        Ok(value)
    }

    /// Reference to the least recently added element
    ///
    /// Fails with `Error::EmptyContainer` if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        match self.first {
            // SAFETY: `first` is live for as long as `&self` borrows the queue
            Some(first) => Ok(unsafe { &(*first.as_ptr()).value }),
            None => {
                self.metrics.record_failure();
                Err(Error::EmptyContainer)
            }
        }
    }

    /// Drop every element
    pub fn clear(&mut self) {
        while self.pop_node().is_some() {}
    }

    /// Iterate in FIFO order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    fn pop_node(&mut self) -> Option<T> {
        let first = self.first?;
        // SAFETY: every node was leaked from a `Box` in `enqueue` and is reclaimed only here
        let node = unsafe { Box::from_raw(first.as_ptr()) };
        self.first = node.next;
        if self.first.is_none() {
            // Do not keep a dangling pointer to the node just freed
            self.last = None;
        }
        self.len -= 1;
        Some(node.value)
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        // Iterative so long queues cannot overflow the stack
        self.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for Queue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> MetricsCollector for Queue<T> {
    fn metrics(&self) -> ContainerMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset(self.len);
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}

/// Items in FIFO order, each followed by a single space
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// FIFO iterator over a [`Queue`]
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // SAFETY: the queue is borrowed for `'a`, so its nodes cannot be freed or mutated
        let node: &'a Node<T> = unsafe { &*current.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
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

/// Consuming FIFO iterator over a [`Queue`]
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.pop_node()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}
