//! Common contract for indirect priority queues
//!
//! An indirect queue never stores values. It stores `usize` indices into a
//! caller-owned slice of keys and orders those indices by the value each one
//! *currently* points to. The key slice is threaded into every operation
//! that needs an ordering decision, so the caller keeps full ownership and
//! may mutate keys freely between calls, as long as it then tells the
//! queue what changed through the `changed` family.
//!
//! Two implementations share this trait:
//!
//! - [`ArrayQueue`](crate::array::ArrayQueue): unordered backing sequence,
//!   O(n) queries, duplicate indices permitted, supports tied-leader
//!   enumeration (`front`).
//! - [`HeapQueue`](crate::heap::HeapQueue): binary min-heap plus inversion
//!   table, O(log n) queries, duplicate indices rejected, O(1) `contains`.

use std::fmt;

use crate::ordering::Comparator;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The operation requires at least one enqueued index
    Empty,
    /// The index is outside the key slice, or (heap variant change
    /// notification) not currently enqueued
    InvalidIndex {
        /// The offending index
        index: usize,
        /// The exclusive bound it was checked against
        bound: usize,
    },
    /// The index is already enqueued (heap variant only)
    DuplicateIndex(usize),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "queue is empty"),
            QueueError::InvalidIndex { index, bound } => {
                write!(f, "index {index} is not valid (bound {bound})")
            }
            QueueError::DuplicateIndex(index) => {
                write!(f, "index {index} is already enqueued")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A priority queue over indices into a caller-owned key slice.
///
/// Every value-consulting operation takes `keys: &[T]`; the queue reads it
/// only to compare the current values behind two indices and never writes
/// or copies it. The caller is responsible for passing the same logical
/// array across calls and for notifying the queue after mutating it.
///
/// # Example
///
/// ```rust
/// use indirect_pq::{HeapQueue, IndirectQueue};
///
/// let mut keys = [5, 3, 8, 1];
/// let mut queue: HeapQueue = HeapQueue::new();
/// for i in 0..keys.len() {
///     queue.enqueue(&keys, i).unwrap();
/// }
///
/// assert_eq!(queue.first(&keys), Ok(3)); // keys[3] == 1
/// assert_eq!(queue.dequeue(&keys), Ok(3));
/// assert_eq!(queue.first(&keys), Ok(1)); // keys[1] == 3
///
/// // Mutate a key, then notify the queue.
/// keys[2] = 0;
/// queue.changed_at(&keys, 2).unwrap();
/// assert_eq!(queue.first(&keys), Ok(2));
/// ```
pub trait IndirectQueue<T> {
    /// The active ordering policy.
    type Cmp: Comparator<T>;

    /// Enqueues `index`.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` if `index >= keys.len()`. The heap variant
    /// additionally returns `DuplicateIndex` if `index` is already
    /// enqueued; the array variant accepts duplicates without checking.
    fn enqueue(&mut self, keys: &[T], index: usize) -> Result<(), QueueError>;

    /// Removes and returns the index with the minimum current value.
    ///
    /// # Errors
    ///
    /// `Empty` if nothing is enqueued.
    fn dequeue(&mut self, keys: &[T]) -> Result<usize, QueueError>;

    /// Returns, without removing, the index with the minimum current value.
    ///
    /// Takes `&mut self` so the array variant can memoize its scan; the
    /// heap variant answers in O(1) regardless.
    ///
    /// # Errors
    ///
    /// `Empty` if nothing is enqueued.
    fn first(&mut self, keys: &[T]) -> Result<usize, QueueError>;

    /// Returns, without removing, the index with the maximum current value.
    ///
    /// O(n) for both variants.
    ///
    /// # Errors
    ///
    /// `Empty` if nothing is enqueued.
    fn last(&self, keys: &[T]) -> Result<usize, QueueError>;

    /// Notifies the queue that some value, possibly the current minimum's,
    /// changed. The array variant drops its cached minimum; the heap
    /// variant restores order below the root (the caller asserts only the
    /// root's value changed).
    fn changed(&mut self, keys: &[T]);

    /// Notifies the queue that the value behind `index` changed.
    ///
    /// # Errors
    ///
    /// Heap variant: `InvalidIndex` if `index` is not currently enqueued.
    /// Array variant: never fails; membership is deliberately not
    /// validated.
    fn changed_at(&mut self, keys: &[T], index: usize) -> Result<(), QueueError>;

    /// Notifies the queue that many values changed at once. The heap
    /// variant re-heapifies bottom-up in O(n), cheaper than per-index
    /// notifications when most values moved.
    fn all_changed(&mut self, keys: &[T]);

    /// Removes one occurrence of `index`, returning whether it was found.
    fn remove(&mut self, keys: &[T], index: usize) -> bool;

    /// Returns the number of enqueued indices.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is enqueued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all enqueued indices. Keeps capacity.
    fn clear(&mut self);

    /// Shrinks internal capacity to the current size.
    fn trim(&mut self);

    /// Returns the active comparator. [`NaturalOrder`] reports
    /// `is_natural() == true`, the sentinel for "no injected comparator".
    ///
    /// [`NaturalOrder`]: crate::ordering::NaturalOrder
    fn comparator(&self) -> &Self::Cmp;
}
