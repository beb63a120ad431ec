//! Sorting through a fixed-capacity queue
//!
//! Pushes every element into a [`PriorityQueue`] sized exactly for the input,
//! then pops them back out in non-decreasing order.

use crate::priority_queue::PriorityQueue;
use crate::traits::{BoundedHeap, Result};

/// Sorts `values` in place, smallest first
///
/// Not stable. Values that do not compare (NaN) end up wherever the heap
/// leaves them.
///
/// # Errors
/// Returns `QueueError::AllocationFailure` if the scratch queue cannot be
/// allocated; `values` is untouched in that case.
///
/// # Example
///
/// ```rust
/// use fixed_priority_queue::sort::heap_sort;
///
/// let mut values = [7.0, 3.0, 8.0, 5.0, 4.0, 9.0, 12.0, 4.0, 1.0];
/// heap_sort(&mut values).unwrap();
/// assert_eq!(values, [1.0, 3.0, 4.0, 4.0, 5.0, 7.0, 8.0, 9.0, 12.0]);
/// ```
pub fn heap_sort<T: Copy + PartialOrd>(values: &mut [T]) -> Result<()> {
    let mut queue: PriorityQueue<T> = PriorityQueue::with_capacity(values.len())?;
    queue.try_extend(values.iter().copied())?;
    for slot in values.iter_mut() {
        *slot = queue.pop()?;
    }
    Ok(())
}

/// Collects `values` into a vector sorted smallest first
///
/// # Errors
/// Returns `QueueError::AllocationFailure` if the scratch storage cannot be
/// allocated.
pub fn sorted_vec<T, I>(values: I) -> Result<Vec<T>>
where
    T: Copy + PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut values: Vec<T> = values.into_iter().collect();
    heap_sort(&mut values)?;
    Ok(values)
}
