//! Randomized Queue Implementation
//!
//! A randomized queue removes an element chosen uniformly at random instead of the oldest
//! or newest one. This implementation keeps the elements in a resizing circular buffer and
//! removes in amortized O(1) without ever compacting the buffer.
//!
//! ## Design
//!
//! The buffer holds `capacity` slots with two indices:
//! - `head`: physical index of the oldest logical element
//! - `tail`: physical index of the next free slot
//!
//! Occupied slots always form one contiguous circular run of `len` slots starting at `head`.
//!
//! `dequeue` draws a logical offset `r` in `[0, len)`, swaps slot `(head + r) % capacity`
//! with slot `head`, and takes the value now sitting at `head`. The removed position is
//! therefore always the front of the run, so the run stays contiguous after `head`
//! advances and no element ever has to shift.
//!
//! ## Resizing
//!
//! - **grow**: capacity doubles when `enqueue` finds `len == capacity`
//! - **shrink**: capacity halves when a `dequeue` leaves `len > 0 && len == capacity / 4`
//!
//! Both repack the logical run into a fresh 0-indexed buffer (`head = 0`, `tail = len`).
//! The initial capacity is 2, and since `2 / 4 == 0` the shrink trigger can never fire at
//! capacity 2 while elements remain, so capacity never drops below 2.
//!
//! ## Performance Characteristics
//!
//! - **enqueue / dequeue**: O(1) amortized
//! - **sample**: O(1)
//! - **iter**: O(len) construction, O(1) per step, O(len) extra space per iterator
//!
//! ## Example
//!
//! ```rust
//! use randq::queue::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::with_seed(42);
//! for word in ["to", "be", "or", "not"] {
//!     queue.enqueue(word);
//! }
//!
//! // Every iterator owns its own random permutation
//! let mut seen: Vec<_> = queue.iter().copied().collect();
//! seen.sort_unstable();
//! assert_eq!(seen, ["be", "not", "or", "to"]);
//!
//! let removed = queue.dequeue()?;
//! assert!(["to", "be", "or", "not"].contains(&removed));
//! assert_eq!(queue.len(), 3);
//! # Ok::<(), randq::Error>(())
//! ```

use crate::metrics::{ContainerMetrics, MetricsCollector, OpMetrics};
use crate::{Collection, Error, Result};
use alloc::boxed::Box;
use alloc::vec::{self, Vec};
use core::cell::RefCell;
use core::fmt;
use core::iter::FusedIterator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Capacity of a freshly created queue, and the floor for shrinking
pub const MIN_CAPACITY: usize = 2;

/// Shrink once the queue is down to `1 / REDUCTION_THRESHOLD` of its capacity
const REDUCTION_THRESHOLD: usize = 4;

/// A queue that removes a uniformly random element
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the queue
/// * `R` - The random source; `StdRng` unless supplied through [`RandomizedQueue::with_rng`]
///
/// # Examples
///
/// ```rust
/// use randq::queue::RandomizedQueue;
/// use randq::Error;
///
/// let mut queue: RandomizedQueue<i32> = RandomizedQueue::with_seed(3);
/// assert_eq!(queue.sample(), Err(Error::EmptyContainer));
///
/// queue.enqueue(10);
/// assert_eq!(queue.sample(), Ok(&10));
/// assert_eq!(queue.dequeue(), Ok(10));
/// ```
pub struct RandomizedQueue<T, R = StdRng> {
    // Circular storage; `None` outside the occupied run
    buffer: Box<[Option<T>]>,

    // Physical index of the oldest element
    head: usize,

    // Physical index of the next free slot
    tail: usize,

    len: usize,

    // Shared by `sample` and `iter`, which only borrow the queue
    rng: RefCell<R>,

    metrics: OpMetrics,
}

impl<T> RandomizedQueue<T, StdRng> {
    /// Create an empty queue seeded from operating-system entropy
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::queue::RandomizedQueue;
    ///
    /// let queue: RandomizedQueue<u32> = RandomizedQueue::new();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 2);
    /// ```
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty queue with a reproducible random sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Create an empty queue drawing from the supplied random source
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source used by `dequeue`, `sample` and every iterator
    pub fn with_rng(rng: R) -> Self {
        Self {
            buffer: allocate(MIN_CAPACITY),
            head: 0,
            tail: 0,
            len: 0,
            rng: RefCell::new(rng),
            metrics: OpMetrics::default(),
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
        self.len == 0
    }

    /// Number of slots in the backing buffer
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Add an element
    ///
    /// Doubles the capacity first if the buffer is full.
    pub fn enqueue(&mut self, value: T) {
        let timer = self.metrics.start();

        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
            self.metrics.record_grow();
        }

        self.buffer[self.tail] = Some(value);
        self.tail += 1;
        if self.tail == self.capacity() {
            self.tail = 0;
        }
        self.len += 1;

        self.metrics.observe_len(self.len);
        self.metrics.record_success(timer);
    }

    /// Add a possibly absent element
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the element was added
    /// * `Err(Error::NullItem)` if `value` is `None`; the queue is unchanged
    pub fn try_enqueue(&mut self, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => {
                self.enqueue(value);
                Ok(())
            }
            None => {
                self.metrics.record_failure();
                Err(Error::NullItem)
            }
        }
    }

    /// Remove and return a uniformly random element
    ///
    /// # Returns
    ///
    /// * `Ok(value)` with the removed element
    /// * `Err(Error::EmptyContainer)` if the queue is empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::queue::RandomizedQueue;
    ///
    /// let mut queue = RandomizedQueue::with_seed(11);
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// let mut drained = vec![queue.dequeue()?, queue.dequeue()?];
    /// drained.sort_unstable();
    /// assert_eq!(drained, [1, 2]);
    /// assert!(queue.dequeue().is_err());
    /// # Ok::<(), randq::Error>(())
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        }
        let timer = self.metrics.start();

        let offset = self.rng.get_mut().gen_range(0..self.len);
        let chosen = self.physical(offset);
        self.buffer.swap(self.head, chosen);

        let value = self.buffer[self.head].take();
        self.head += 1;
        if self.head == self.capacity() {
            self.head = 0;
        }
        self.len -= 1;

        // Exact equality: shrinking is only considered at the quarter mark
        if self.len > 0 && self.len == self.capacity() / REDUCTION_THRESHOLD {
            self.resize(self.capacity() / 2);
            self.metrics.record_shrink();
        }

        self.metrics.record_success(timer);
        value.ok_or(Error::EmptyContainer)
    }

    /// Reference to a uniformly random element, without removing it
    ///
    /// Every call is an independent draw.
    ///
    /// Fails with `Error::EmptyContainer` if the queue is empty.
    pub fn sample(&self) -> Result<&T> {
        if self.len == 0 {
            self.metrics.record_failure();
            return Err(Error::EmptyContainer);
        }
        let timer = self.metrics.start();

        let offset = self.rng.borrow_mut().gen_range(0..self.len);
        let value = self.buffer[self.physical(offset)].as_ref();

        self.metrics.record_success(timer);
        value.ok_or(Error::EmptyContainer)
    }

    /// Iterate over the elements in a fresh uniformly random order
    ///
    /// Construction copies references to the current elements and shuffles them, so every
    /// iterator walks its own permutation independent of any other iterator. The queue
    /// cannot be mutated while the iterator borrows it.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut shuffled: Vec<&T> = self.logical().collect();
        shuffled.shuffle(&mut *self.rng.borrow_mut());
        Iter {
            items: shuffled.into_iter(),
        }
    }

    /// Drop every element and return to the initial capacity
    pub fn clear(&mut self) {
        self.buffer = allocate(MIN_CAPACITY);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    #[inline]
    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    /// Occupied slots in logical order, oldest first
    fn logical(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.buffer[self.physical(offset)].as_ref())
    }

    /// Repack the occupied run into a 0-indexed buffer of `capacity` slots
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len && capacity >= MIN_CAPACITY);

        let mut resized = allocate(capacity);
        for (offset, slot) in resized.iter_mut().take(self.len).enumerate() {
            let from = self.physical(offset);
            *slot = self.buffer[from].take();
        }

        self.buffer = resized;
        self.head = 0;
        self.tail = self.len;
    }
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

#[cfg(feature = "std")]
impl<T> Default for RandomizedQueue<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> Collection for RandomizedQueue<T, R> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, R> MetricsCollector for RandomizedQueue<T, R> {
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

impl<T, R> fmt::Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("len", &self.len)
            .field("capacity", &self.buffer.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

#[cfg(feature = "std")]
impl<T> FromIterator<T> for RandomizedQueue<T, StdRng> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T, R: Rng> IntoIterator for &'a RandomizedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consume the queue, yielding its elements in a uniformly random order
    fn into_iter(mut self) -> Self::IntoIter {
        let head = self.head;
        let capacity = self.capacity();
        let mut items: Vec<T> = (0..self.len)
            .filter_map(|offset| self.buffer[(head + offset) % capacity].take())
            .collect();
        items.shuffle(self.rng.get_mut());
        IntoIter {
            items: items.into_iter(),
        }
    }
}

/// Iterator over a private random permutation of a [`RandomizedQueue`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    items: vec::IntoIter<&'a T>,
}

// Cloning replays the same permutation from the current position
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator over a [`RandomizedQueue`] in random order
#[derive(Debug)]
pub struct IntoIter<T> {
    items: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
