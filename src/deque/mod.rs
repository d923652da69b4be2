//! Deque (double-ended queue) implementations
//!
//! ## Available Deques
//!
//! - [`Deque`]: sentinel-bounded doubly-linked list with O(1) splices at both ends
//!
//! ## Choosing a Deque
//!
//! - Use `Deque` when elements enter and leave at both ends and iteration must be a
//!   zero-allocation, front-to-back walk
//! - The iterator walks in both directions and never removes elements

pub mod linked;

pub use self::linked::{Deque, IntoIter, Iter};

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
