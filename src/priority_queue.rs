//! Fixed-capacity binary min-heap
//!
//! [`PriorityQueue`] keeps its elements in a single contiguous buffer whose
//! size is decided once, at construction. The occupied prefix of that buffer
//! is heap-ordered: every element is `<=` both of its children, so the
//! minimum always sits at index 0.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `push`       | O(log n)   |
//! | `peek`       | O(1)       |
//! | `delete_min` | O(log n)   |
//! | `pop`        | O(log n)   |
//!
//! Both sift routines move a hole rather than swapping pairs: the element
//! being placed is held aside while the elements it passes are shifted one
//! level, and it is written exactly once at the end.
//!
//! # Example
//!
//! ```rust
//! use fixed_priority_queue::{BoundedHeap, PriorityQueue, QueueError};
//!
//! let mut queue: PriorityQueue = PriorityQueue::with_capacity(5).unwrap();
//! for value in [5.0, 3.0, 8.0, 1.0, 9.0] {
//!     queue.push(value).unwrap();
//! }
//!
//! assert_eq!(queue.peek(), Ok(&1.0));
//! let drained: Vec<f64> = queue.drain_sorted().collect();
//! assert_eq!(drained, vec![1.0, 3.0, 5.0, 8.0, 9.0]);
//! assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
//! ```

use log::{debug, trace};

use crate::index::HeapIndex;
use crate::traits::{BoundedHeap, QueueError, Result};

/// A bounded binary min-heap of copyable scalar values
///
/// The element type defaults to `f64`. Any `Copy + PartialOrd` type works;
/// comparisons use the type's own `PartialOrd`, including its treatment of
/// NaN and infinities.
///
/// The queue owns its buffer outright. Capacity never changes after
/// construction and the buffer is never reallocated.
///
/// Releasing consumes the queue, so using it afterwards (or releasing it
/// twice) does not compile:
///
/// ```compile_fail
/// use fixed_priority_queue::{BoundedHeap, PriorityQueue};
///
/// let queue: PriorityQueue = PriorityQueue::with_capacity(4).unwrap();
/// queue.release();
/// queue.release();
/// ```
#[derive(Debug)]
pub struct PriorityQueue<T = f64> {
    /// Occupied prefix in heap order; `data.len()` is the queue size
    data: Vec<T>,
    /// Fixed element limit, at most `data.capacity()`
    capacity: usize,
}

impl<T: Copy + PartialOrd> BoundedHeap<T> for PriorityQueue<T> {
    fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| QueueError::AllocationFailure { capacity })?;
        debug!("created priority queue with capacity {}", capacity);
        Ok(Self { data, capacity })
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            trace!("push rejected: queue full at capacity {}", self.capacity);
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let hole = HeapIndex::new(self.data.len());
        // Claims the next slot; the space was reserved at construction.
        self.data.push(value);
        self.sift_up(hole, value);
        Ok(())
    }

    fn peek(&self) -> Result<&T> {
        self.data.first().ok_or_else(|| {
            trace!("peek rejected: queue empty");
            QueueError::EmptyQueue
        })
    }

    fn delete_min(&mut self) -> Result<()> {
        let moved = match self.data.pop() {
            Some(last) => last,
            None => {
                trace!("delete_min rejected: queue empty");
                return Err(QueueError::EmptyQueue);
            }
        };

        if !self.data.is_empty() {
            self.sift_down(HeapIndex::ROOT, moved);
        }
        Ok(())
    }
}

impl<T: Copy + PartialOrd> PriorityQueue<T> {
    /// Returns true if another push would be rejected
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// The occupied elements in heap order (not sorted order)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Removes every element, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pushes values from `values` until it runs out
    ///
    /// Returns how many values were pushed.
    ///
    /// # Errors
    /// Returns `QueueError::CapacityExceeded` as soon as a value does not fit.
    /// Values pushed before that point stay in the queue; the value that did
    /// not fit, and the rest of the iterator, are not consumed further.
    pub fn try_extend<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let mut pushed = 0;
        for value in values {
            self.push(value)?;
            pushed += 1;
        }
        Ok(pushed)
    }

    /// Returns an iterator that pops elements in non-decreasing order until
    /// the queue is empty
    ///
    /// Elements not yet yielded when the iterator is dropped stay queued.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { queue: self }
    }

    /// Frees the queue and its storage
    ///
    /// Takes the queue by value, so the handle cannot be used again.
    pub fn release(self) {
        debug!(
            "releasing priority queue (capacity {}, {} elements left)",
            self.capacity,
            self.data.len()
        );
        drop(self);
    }

    /// Releases a queue held in an optional slot; an absent queue is a no-op
    ///
    /// ```rust
    /// use fixed_priority_queue::{BoundedHeap, PriorityQueue};
    ///
    /// let mut slot: Option<PriorityQueue> = Some(PriorityQueue::with_capacity(2).unwrap());
    /// PriorityQueue::release_handle(slot.take());
    /// PriorityQueue::release_handle(slot.take());
    /// assert!(slot.is_none());
    /// ```
    pub fn release_handle(queue: Option<Self>) {
        if let Some(queue) = queue {
            queue.release();
        }
    }

    /// Copies the occupied prefix into a new queue with room for `capacity`
    /// elements
    ///
    /// A heap-ordered prefix stays heap-ordered in a larger buffer, so no
    /// sifting is needed. `self` is untouched whether or not this succeeds.
    #[cfg(feature = "growable")]
    pub(crate) fn copy_with_capacity(&self, capacity: usize) -> Result<Self> {
        debug_assert!(capacity >= self.data.len());
        let mut grown = <Self as BoundedHeap<T>>::with_capacity(capacity)?;
        grown.data.extend_from_slice(&self.data);
        Ok(grown)
    }

    /// Moves the hole at `hole` toward the root while its parent is strictly
    /// greater than `value`, then writes `value` into it
    fn sift_up(&mut self, mut hole: HeapIndex, value: T) {
        while let Some(parent) = hole.parent() {
            let parent_value = self.data[parent.get()];
            if parent_value > value {
                self.data[hole.get()] = parent_value;
                hole = parent;
            } else {
                break;
            }
        }
        self.data[hole.get()] = value;
    }

    /// Moves the hole at `hole` toward the leaves while its smaller child is
    /// strictly less than `moved`, then writes `moved` into it
    fn sift_down(&mut self, mut hole: HeapIndex, moved: T) {
        let len = self.data.len();
        while let Some(left) = hole.left_child(len) {
            let candidate = match hole.right_child(len) {
                Some(right) if self.data[right.get()] < self.data[left.get()] => right,
                _ => left,
            };

            let candidate_value = self.data[candidate.get()];
            if moved <= candidate_value {
                break;
            }
            self.data[hole.get()] = candidate_value;
            hole = candidate;
        }
        self.data[hole.get()] = moved;
    }
}

/// Iterator returned by [`PriorityQueue::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T> {
    queue: &'a mut PriorityQueue<T>,
}

impl<T: Copy + PartialOrd> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T: Copy + PartialOrd> ExactSizeIterator for DrainSorted<'_, T> {}
