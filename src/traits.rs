//! Common trait and error type for the bounded queues in this crate
//!
//! - [`BoundedHeap`]: the operation surface shared by every queue variant
//! - [`QueueError`]: the failure conditions those operations report
//!
//! The trait mirrors the shape of `std::collections::BinaryHeap` (`push`,
//! `peek`, `pop`) but is a min-heap and reports failures explicitly instead of
//! returning `Option`, because a bounded queue can fail on insert as well.

use thiserror::Error;

/// Error type for queue operations
///
/// Every mutating operation is all-or-nothing: when one of these is returned
/// the queue is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Backing storage for the requested capacity could not be allocated
    #[error("could not allocate storage for {capacity} elements")]
    AllocationFailure {
        /// The capacity that was requested
        capacity: usize,
    },
    /// The queue already holds `capacity` elements
    #[error("queue is full (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity of the queue
        capacity: usize,
    },
    /// The operation needs at least one element
    #[error("queue is empty")]
    EmptyQueue,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QueueError>;

/// Base trait for bounded min-heap priority queues
///
/// Values are copied in and out; the queue never holds references to caller
/// data. Ordering is the element type's native `PartialOrd`, so for floats a
/// NaN compares neither less nor greater than anything and stays wherever it
/// is placed.
///
/// # Example
///
/// ```rust
/// use fixed_priority_queue::{BoundedHeap, PriorityQueue, QueueError};
///
/// let mut queue: PriorityQueue<f64> = BoundedHeap::with_capacity(2).unwrap();
/// queue.push(3.0).unwrap();
/// queue.push(1.0).unwrap();
/// assert_eq!(queue.push(2.0), Err(QueueError::CapacityExceeded { capacity: 2 }));
///
/// assert_eq!(queue.peek(), Ok(&1.0));
/// assert_eq!(queue.pop(), Ok(1.0));
/// ```
pub trait BoundedHeap<T: Copy + PartialOrd>: Sized {
    /// Creates an empty queue able to hold `capacity` elements
    ///
    /// # Errors
    /// Returns `QueueError::AllocationFailure` if the storage cannot be
    /// allocated. Nothing is left allocated in that case.
    fn with_capacity(capacity: usize) -> Result<Self>;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the queue can currently hold
    fn capacity(&self) -> usize;

    /// Inserts a value
    ///
    /// # Errors
    /// Returns `QueueError::CapacityExceeded` if the queue cannot take another
    /// element. The queue is not modified.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, value: T) -> Result<()>;

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns `QueueError::EmptyQueue` if there is nothing to look at.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T>;

    /// Removes the minimum value
    ///
    /// # Errors
    /// Returns `QueueError::EmptyQueue` if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn delete_min(&mut self) -> Result<()>;

    /// Removes and returns the minimum value
    ///
    /// Emptiness is checked before anything is read.
    ///
    /// # Errors
    /// Returns `QueueError::EmptyQueue` if the queue is empty.
    fn pop(&mut self) -> Result<T> {
        let min = *self.peek()?;
        self.delete_min()?;
        Ok(min)
    }
}
