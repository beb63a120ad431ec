//! Checked index arithmetic for array-backed binary heaps
//!
//! Positions in a 0-based heap array relate as:
//!
//! | Relation    | Index          |
//! |-------------|----------------|
//! | parent(i)   | `(i - 1) / 2`  |
//! | left(i)     | `2 * i + 1`    |
//! | right(i)    | `2 * i + 2`    |
//!
//! [`HeapIndex`] keeps that arithmetic in one place and returns `None`
//! wherever the relative does not exist (the root has no parent, a child past
//! the occupied length is absent), so the sift loops never index out of range.

/// A position in the occupied prefix of a heap array
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    /// The root position
    pub(crate) const ROOT: HeapIndex = HeapIndex(0);

    /// Wraps a raw position
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        HeapIndex(index)
    }

    /// The raw position, for indexing the backing buffer
    #[inline]
    pub(crate) fn get(self) -> usize {
        self.0
    }

    /// Parent position, or `None` at the root
    #[inline]
    pub(crate) fn parent(self) -> Option<HeapIndex> {
        match self.0 {
            0 => None,
            i => Some(HeapIndex((i - 1) / 2)),
        }
    }

    /// Left child position if it lies inside `len` occupied slots
    #[inline]
    pub(crate) fn left_child(self, len: usize) -> Option<HeapIndex> {
        let left = self.0.checked_mul(2)?.checked_add(1)?;
        (left < len).then_some(HeapIndex(left))
    }

    /// Right child position if it lies inside `len` occupied slots
    #[inline]
    pub(crate) fn right_child(self, len: usize) -> Option<HeapIndex> {
        let right = self.0.checked_mul(2)?.checked_add(2)?;
        (right < len).then_some(HeapIndex(right))
    }
}
