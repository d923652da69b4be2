//! Queue implementations
//!
//! This module provides the two single-ended queues of the crate.
//!
//! ## Available Queues
//!
//! - [`Queue`]: singly-linked first-in-first-out queue
//! - [`RandomizedQueue`]: resizing circular buffer that removes a uniformly random element
//!
//! Iterator types are re-exported under container-specific names: [`QueueIter`] and
//! [`QueueIntoIter`] walk in FIFO order, [`RandomizedIter`] and [`RandomizedIntoIter`]
//! in a fresh random order.
//!
//! ## Performance Characteristics
//!
//! | Queue Type | Enqueue | Dequeue | Peek / Sample | Iterator construction | Memory |
//! |------------|---------|---------|---------------|-----------------------|--------|
//! | Queue | O(1) | O(1) | O(1) | O(1) | One node per element |
//! | RandomizedQueue | O(1) amortized | O(1) amortized | O(1) | O(n) | Between n and 4n slots |
//!
//! ## Examples
//!
//! ```rust
//! use randq::queue::{Queue, RandomizedQueue};
//!
//! // FIFO order
//! let mut fifo = Queue::new();
//! fifo.enqueue(1);
//! fifo.enqueue(2);
//! assert_eq!(fifo.dequeue()?, 1);
//!
//! // Uniformly random order
//! let mut random = RandomizedQueue::with_seed(5);
//! random.enqueue("hello");
//! assert_eq!(random.sample()?, &"hello");
//!
//! # Ok::<(), randq::Error>(())
//! ```
pub mod linked;
pub mod randomized;

// Re-export main types for convenience
pub use linked::{IntoIter as QueueIntoIter, Iter as QueueIter, Queue};
pub use randomized::{
    IntoIter as RandomizedIntoIter, Iter as RandomizedIter, RandomizedQueue,
};


#[cfg(test)]
mod proptests;
