//! Growable queue layered over the fixed-capacity core
//!
//! [`GrowableQueue`] wraps a [`PriorityQueue`] and, when a push is refused
//! for lack of room, allocates a larger core queue, copies the elements
//! across and retries. The core queue itself never grows; growth is a
//! reallocate-and-copy done here.
//!
//! Requires the `growable` feature (enabled by default).
//!
//! # Example
//!
//! ```rust
//! use fixed_priority_queue::growable::{GrowableQueue, GrowthPolicy};
//! use fixed_priority_queue::BoundedHeap;
//!
//! let policy = GrowthPolicy { initial_capacity: 1, growth_factor: 2 };
//! let mut queue: GrowableQueue<i64> = GrowableQueue::with_policy(policy).unwrap();
//! for value in [9, 4, 7, 1] {
//!     queue.push(value).unwrap();
//! }
//! assert_eq!(queue.capacity(), 4);
//! assert_eq!(queue.pop(), Ok(1));
//! ```

use log::debug;

use crate::priority_queue::PriorityQueue;
use crate::traits::{BoundedHeap, QueueError, Result};

/// How a [`GrowableQueue`] sizes its storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity of the first allocation
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity on each growth; values below 2 are
    /// treated as 2
    pub growth_factor: usize,
}

impl GrowthPolicy {
    /// Capacity to grow to from `current`
    fn next_capacity(&self, current: usize) -> usize {
        current.saturating_mul(self.growth_factor.max(2)).max(1)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            growth_factor: 2,
        }
    }
}

/// A min-heap priority queue that grows when full
#[derive(Debug)]
pub struct GrowableQueue<T = f64> {
    inner: PriorityQueue<T>,
    policy: GrowthPolicy,
}

impl<T: Copy + PartialOrd> GrowableQueue<T> {
    /// Creates an empty queue sized by `policy`
    ///
    /// # Errors
    /// Returns `QueueError::AllocationFailure` if the initial storage cannot
    /// be allocated.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        Ok(Self {
            inner: PriorityQueue::with_capacity(policy.initial_capacity)?,
            policy,
        })
    }

    /// The policy this queue grows by
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The occupied elements in heap order
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Consumes the wrapper, returning the current fixed-capacity queue
    pub fn into_inner(self) -> PriorityQueue<T> {
        self.inner
    }

    fn grow(&mut self) -> Result<()> {
        let current = self.inner.capacity();
        let next = self.policy.next_capacity(current);
        if next == current {
            return Err(QueueError::CapacityExceeded { capacity: current });
        }
        debug!("growing priority queue from {} to {}", current, next);
        self.inner = self.inner.copy_with_capacity(next)?;
        Ok(())
    }
}

impl<T: Copy + PartialOrd> BoundedHeap<T> for GrowableQueue<T> {
    fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_policy(GrowthPolicy {
            initial_capacity: capacity,
            ..GrowthPolicy::default()
        })
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn push(&mut self, value: T) -> Result<()> {
        match self.inner.push(value) {
            Err(QueueError::CapacityExceeded { .. }) => {
                self.grow()?;
                self.inner.push(value)
            }
            other => other,
        }
    }

    fn peek(&self) -> Result<&T> {
        self.inner.peek()
    }

    fn delete_min(&mut self) -> Result<()> {
        self.inner.delete_min()
    }
}

impl<T: Copy + PartialOrd> From<PriorityQueue<T>> for GrowableQueue<T> {
    fn from(inner: PriorityQueue<T>) -> Self {
        let policy = GrowthPolicy {
            initial_capacity: inner.capacity(),
            ..GrowthPolicy::default()
        };
        Self { inner, policy }
    }
}
