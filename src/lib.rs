//! Fixed-Capacity Priority Queue for Rust
//!
//! This crate provides an array-backed binary min-heap whose capacity is fixed
//! when it is created. It always yields the smallest element it holds, and
//! reports a full or empty queue as an error instead of growing or panicking.
//!
//! # Features
//!
//! - **PriorityQueue**: O(log n) push and delete-min, O(1) peek; one contiguous buffer
//!   allocated once at construction
//! - **GrowableQueue** (feature `growable`, on by default): the same queue,
//!   reallocated and copied into a larger buffer when a push would overflow
//! - **heap_sort**: sorts a slice by pushing it through a queue sized for it
//!
//! # Example
//!
//! ```rust
//! use fixed_priority_queue::{BoundedHeap, PriorityQueue, QueueError};
//!
//! let mut queue: PriorityQueue = PriorityQueue::with_capacity(3).unwrap();
//! queue.push(2.5).unwrap();
//! queue.push(-1.0).unwrap();
//! queue.push(7.0).unwrap();
//! assert_eq!(queue.push(0.0), Err(QueueError::CapacityExceeded { capacity: 3 }));
//!
//! assert_eq!(queue.peek(), Ok(&-1.0));
//! assert_eq!(queue.pop(), Ok(-1.0));
//! assert_eq!(queue.len(), 2);
//! queue.release();
//! ```

#[cfg(feature = "growable")]
pub mod growable;
mod index;
pub mod priority_queue;
pub mod sort;
pub mod traits;

// Re-export the main types for convenience
pub use priority_queue::PriorityQueue;
pub use traits::{BoundedHeap, QueueError, Result};
