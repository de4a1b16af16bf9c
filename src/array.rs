//! Array-backed (semi-indirect) priority queue
//!
//! The brute-force variant: enqueued indices sit in an unordered growable
//! sequence and every query scans it. What it gives up in asymptotics it
//! buys back in flexibility: the same index may be enqueued more than once,
//! and the tied leaders of the current minimum can be enumerated with
//! [`front`](ArrayQueue::front), which the heap variant does not offer.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity                  |
//! |--------------|-----------------------------|
//! | `enqueue`    | O(1) amortized              |
//! | `dequeue`    | O(n)                        |
//! | `first`      | O(n), memoized              |
//! | `last`       | O(n)                        |
//! | `changed_at` | O(1)                        |
//! | `remove`     | O(n)                        |
//! | `front`      | O(n)                        |
//!
//! # Example
//!
//! ```rust
//! use indirect_pq::{ArrayQueue, IndirectQueue};
//!
//! let keys = [2, 2, 5, 9];
//! let mut queue: ArrayQueue = ArrayQueue::new();
//! for i in 0..keys.len() {
//!     queue.enqueue(&keys, i).unwrap();
//! }
//!
//! let mut leaders = Vec::new();
//! queue.front(&keys, &mut leaders);
//! leaders.sort_unstable();
//! assert_eq!(leaders, [0, 1]); // both hold the tied minimum 2
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::ordering::{Comparator, NaturalOrder};
use crate::traits::{IndirectQueue, QueueError};

/// A semi-indirect priority queue over a caller-owned key slice.
///
/// Indices are kept in insertion order; the minimum is found by scanning
/// and memoized until the next mutation or change notification. The
/// memoized slot is dropped eagerly by anything that could move or alter
/// the minimum, and recomputed lazily on the next query.
///
/// # Duplicate indices
///
/// `enqueue` deliberately does *not* check whether the index is already
/// present. A duplicate is accepted and the queue remains consistent as a
/// multiset, but which of the two occurrences a later `dequeue` or
/// `remove` picks is unspecified. This is an intentional trade-off: the
/// check would turn O(1) enqueue into O(n). Use
/// [`HeapQueue`](crate::heap::HeapQueue) when duplicates must be rejected.
pub struct ArrayQueue<C = NaturalOrder> {
    /// Enqueued indices, unordered; duplicates permitted.
    backing: Vec<usize>,
    /// Memoized slot of the minimum, `None` when the memo is invalid.
    cached_first: Option<usize>,
    cmp: C,
}

impl ArrayQueue {
    /// Creates an empty queue ordered naturally.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty queue with pre-allocated capacity, ordered
    /// naturally.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl Default for ArrayQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ArrayQueue<C> {
    /// Creates an empty queue with an injected comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            backing: Vec::new(),
            cached_first: None,
            cmp,
        }
    }

    /// Creates an empty queue with pre-allocated capacity and an injected
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            backing: Vec::with_capacity(capacity),
            cached_first: None,
            cmp,
        }
    }

    /// Wraps an existing index sequence, taking ownership of it.
    ///
    /// Every element is bound-checked against `keys`; duplicates are
    /// allowed, matching the enqueue policy.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` naming the first out-of-bounds element.
    pub fn from_indices<T>(
        keys: &[T],
        indices: Vec<usize>,
        cmp: C,
    ) -> Result<Self, QueueError>
    where
        C: Comparator<T>,
    {
        if let Some(&bad) = indices.iter().find(|&&i| i >= keys.len()) {
            return Err(QueueError::InvalidIndex {
                index: bad,
                bound: keys.len(),
            });
        }
        Ok(Self {
            backing: indices,
            cached_first: None,
            cmp,
        })
    }

    /// Returns the capacity of the backing sequence.
    pub fn capacity(&self) -> usize {
        self.backing.capacity()
    }

    /// Returns the number of enqueued indices, counting duplicates.
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if nothing is enqueued.
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Removes all enqueued indices. Keeps capacity.
    pub fn clear(&mut self) {
        self.backing.clear();
        self.cached_first = None;
    }

    /// Shrinks the backing sequence's capacity to its size.
    pub fn trim(&mut self) {
        self.backing.shrink_to_fit();
    }

    /// Returns the active comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Collects into `out` every enqueued index whose current value ties
    /// with the minimum under the active comparator. `out` is cleared
    /// first; an empty queue leaves it empty. O(n).
    pub fn front<T>(&self, keys: &[T], out: &mut Vec<usize>)
    where
        C: Comparator<T>,
    {
        out.clear();
        let min_slot = match self.cached_first {
            Some(slot) => slot,
            None => match self.scan_min(keys) {
                Some(slot) => slot,
                None => return,
            },
        };
        let min = &keys[self.backing[min_slot]];
        for &idx in &self.backing {
            if self.cmp.compare(&keys[idx], min) == Ordering::Equal {
                out.push(idx);
            }
        }
    }

    /// Renders the current contents as `index=value` pairs in queue order.
    /// Diagnostic only; not a stable format.
    pub fn render<T>(&self, keys: &[T]) -> String
    where
        T: fmt::Debug,
    {
        let mut s = String::from("[");
        for (i, &idx) in self.backing.iter().enumerate() {
            if i > 0 {
                s.push_str(", ");
            }
            s.push_str(&format!("{}={:?}", idx, keys[idx]));
        }
        s.push(']');
        s
    }

    /// Slot of the minimum by full scan, `None` when empty.
    fn scan_min<T>(&self, keys: &[T]) -> Option<usize>
    where
        C: Comparator<T>,
    {
        let mut slots = self.backing.iter().enumerate();
        let (mut best, &first) = slots.next()?;
        let mut best_idx = first;
        for (slot, &idx) in slots {
            if self.cmp.compare(&keys[idx], &keys[best_idx]) == Ordering::Less {
                best = slot;
                best_idx = idx;
            }
        }
        Some(best)
    }
}

impl<T, C> IndirectQueue<T> for ArrayQueue<C>
where
    C: Comparator<T>,
{
    type Cmp = C;

    fn enqueue(&mut self, keys: &[T], index: usize) -> Result<(), QueueError> {
        if index >= keys.len() {
            return Err(QueueError::InvalidIndex {
                index,
                bound: keys.len(),
            });
        }
        self.backing.push(index);
        // Appending never displaces an existing minimum, so a valid memo
        // stays valid; it only moves if the newcomer is strictly smaller.
        if let Some(slot) = self.cached_first {
            let min_idx = self.backing[slot];
            if self.cmp.compare(&keys[index], &keys[min_idx]) == Ordering::Less {
                self.cached_first = Some(self.backing.len() - 1);
            }
        }
        Ok(())
    }

    fn dequeue(&mut self, keys: &[T]) -> Result<usize, QueueError> {
        let slot = match self.cached_first {
            Some(slot) => slot,
            None => self.scan_min(keys).ok_or(QueueError::Empty)?,
        };
        self.cached_first = None;
        Ok(self.backing.remove(slot))
    }

    fn first(&mut self, keys: &[T]) -> Result<usize, QueueError> {
        if self.cached_first.is_none() {
            self.cached_first = Some(self.scan_min(keys).ok_or(QueueError::Empty)?);
        }
        Ok(self.backing[self.cached_first.unwrap()])
    }

    fn last(&self, keys: &[T]) -> Result<usize, QueueError> {
        let mut slots = self.backing.iter();
        let mut best_idx = *slots.next().ok_or(QueueError::Empty)?;
        for &idx in slots {
            if self.cmp.compare(&keys[idx], &keys[best_idx]) == Ordering::Greater {
                best_idx = idx;
            }
        }
        Ok(best_idx)
    }

    fn changed(&mut self, _keys: &[T]) {
        self.cached_first = None;
    }

    fn changed_at(&mut self, _keys: &[T], index: usize) -> Result<(), QueueError> {
        // Best effort: only a change behind the memoized minimum can make
        // the memo stale. Membership is deliberately not validated.
        if let Some(slot) = self.cached_first {
            if self.backing[slot] == index {
                self.cached_first = None;
            }
        }
        Ok(())
    }

    fn all_changed(&mut self, _keys: &[T]) {
        self.cached_first = None;
    }

    fn remove(&mut self, _keys: &[T], index: usize) -> bool {
        let pos = match self.backing.iter().position(|&i| i == index) {
            Some(pos) => pos,
            None => return false,
        };
        self.backing.remove(pos);
        if let Some(slot) = self.cached_first {
            if pos == slot {
                self.cached_first = None;
            } else if pos < slot {
                // Everything after the hole shifted left by one.
                self.cached_first = Some(slot - 1);
            }
        }
        true
    }

    fn len(&self) -> usize {
        ArrayQueue::len(self)
    }

    fn clear(&mut self) {
        ArrayQueue::clear(self)
    }

    fn trim(&mut self) {
        ArrayQueue::trim(self)
    }

    fn comparator(&self) -> &C {
        ArrayQueue::comparator(self)
    }
}

impl<C: fmt::Debug> fmt::Debug for ArrayQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("backing", &self.backing)
            .field("cached_first", &self.cached_first)
            .field("cmp", &self.cmp)
            .finish()
    }
}
