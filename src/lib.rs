//! # randq
//!
//! Elementary generic containers with strict time bounds and space proportional
//! to the number of stored elements.
//!
//! ## Features
//!
//! - **Deque**: doubly-linked list with sentinel nodes, O(1) worst-case splices at both ends
//! - **Queue**: singly-linked FIFO queue, O(1) enqueue/dequeue/peek
//! - **RandomizedQueue**: resizing circular buffer that removes a uniformly random element
//!   in amortized O(1), with independent shuffled iterators
//!
//! ## Quick Start
//!
//! ```rust
//! use randq::queue::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::with_seed(7);
//! queue.enqueue("a");
//! queue.enqueue("b");
//! queue.enqueue("c");
//!
//! let picked = queue.dequeue()?;
//! assert!(["a", "b", "c"].contains(&picked));
//! assert_eq!(queue.len(), 2);
//! # Ok::<(), randq::Error>(())
//! ```
//!
//! ## Thread Safety
//!
//! The containers assume a single owner. None of them synchronise internally, and the
//! randomized queue keeps its random source in a `RefCell`, so sharing one across threads
//! is rejected at compile time.
//!
//! ## Iteration
//!
//! Iterators never expose a removal capability. Exhaustion is reported as `None` by
//! [`Iterator::next`], or as [`Error::NoMoreElements`] through
//! [`CheckedIterator::try_next`].

#![no_std]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod deque;
pub mod metrics;
pub mod queue;

pub use crate::deque::Deque;
pub use crate::metrics::{ContainerMetrics, MetricsCollector};
pub use crate::queue::{Queue, RandomizedQueue};

/// Shape shared by every container in this crate.
///
/// Iteration is provided through `iter()` on each container and through
/// `IntoIterator` for both the owned container and a shared reference to it.
pub trait Collection {
    /// Number of elements currently stored
    fn len(&self) -> usize;

    /// Whether the container holds no elements
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result-bearing iteration for callers that treat exhaustion as a contract violation.
pub trait CheckedIterator: Iterator {
    /// Advance the iterator, failing with [`Error::NoMoreElements`] once it is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randq::{CheckedIterator, Deque, Error};
    ///
    /// let mut deque = Deque::new();
    /// deque.add_last(1);
    ///
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.try_next(), Ok(&1));
    /// assert_eq!(iter.try_next(), Err(Error::NoMoreElements));
    /// ```
    #[inline]
    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(Error::NoMoreElements)
    }
}

impl<I: Iterator> CheckedIterator for I {}

/// Error types for randq operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An absent value was offered for insertion; the container was left untouched
    NullItem,
    /// Removal, peek or sample on a container with no elements
    EmptyContainer,
    /// An iterator was advanced past its last element
    NoMoreElements,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NullItem => write!(f, "Cannot insert an absent item"),
            Error::EmptyContainer => write!(f, "Container is empty"),
            Error::NoMoreElements => write!(f, "Iterator has no more elements"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for randq operations
pub type Result<T> = core::result::Result<T, Error>;
