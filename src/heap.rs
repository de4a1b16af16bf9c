//! Heap-backed (indirect) priority queue
//!
//! A binary min-heap of indices plus an inversion table mapping each index
//! to its current heap slot. The inversion table is what makes by-index
//! operations cheap: membership is O(1), and change notification or
//! removal of an arbitrary index is O(log n) with no linear search.
//!
//! The heap orders indices by the value each one currently refers to in
//! the caller-owned key slice. It is *not* kept consistent automatically
//! when a key is edited; the caller must follow every edit with one of the
//! `changed` notifications before relying on query results again.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `enqueue`     | O(log n)   |
//! | `dequeue`     | O(log n)   |
//! | `first`       | O(1)       |
//! | `last`        | O(n)       |
//! | `changed_at`  | O(log n)   |
//! | `all_changed` | O(n)       |
//! | `remove`      | O(log n)   |
//! | `contains`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indirect_pq::{HeapQueue, IndirectQueue};
//!
//! let mut keys = [5, 3, 8, 1];
//! let mut queue: HeapQueue = HeapQueue::new();
//! for i in 0..keys.len() {
//!     queue.enqueue(&keys, i).unwrap();
//! }
//!
//! assert_eq!(queue.dequeue(&keys), Ok(3)); // keys[3] == 1
//!
//! keys[2] = 0;
//! queue.changed_at(&keys, 2).unwrap();
//! assert_eq!(queue.dequeue(&keys), Ok(2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::ordering::{Comparator, NaturalOrder};
use crate::traits::{IndirectQueue, QueueError};

/// Inversion-table sentinel for "not enqueued".
const ABSENT: usize = usize::MAX;

/// An indirect priority queue over a caller-owned key slice, backed by a
/// binary min-heap and an inversion table.
///
/// Invariants, restored by every successful mutating operation:
///
/// - min-heap order over current values: for every non-root slot `i`,
///   `keys[heap[parent(i)]] <= keys[heap[i]]` under the active comparator;
/// - inversion consistency: `slots[heap[i]] == i` for every live slot `i`,
///   and `slots[x]` is the absent sentinel for every other index `x`.
///
/// Failed operations validate before mutating, so an `Err` leaves the
/// queue exactly as it was.
///
/// Unlike [`ArrayQueue`](crate::array::ArrayQueue), duplicate indices are
/// rejected (`DuplicateIndex`), and tied-leader enumeration (`front`) is
/// not offered: tied elements are scattered across the heap and finding
/// them would cost the full scan the heap exists to avoid.
pub struct HeapQueue<C = NaturalOrder> {
    /// Heap-ordered indices.
    heap: Vec<usize>,
    /// Inversion table: `slots[index]` is the heap slot holding `index`,
    /// or `ABSENT`. Grows on demand to cover the largest index seen.
    slots: Vec<usize>,
    cmp: C,
}

impl HeapQueue {
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

impl Default for HeapQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> HeapQueue<C> {
    /// Creates an empty queue with an injected comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: Vec::new(),
            slots: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty queue with pre-allocated capacity and an injected
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: vec![ABSENT; capacity],
            cmp,
        }
    }

    /// Wraps an existing index sequence, taking ownership of it and
    /// re-ordering it in place with one bottom-up heapify, O(n) rather
    /// than n sequential enqueues.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` for the first out-of-bounds element,
    /// `DuplicateIndex` for the first repeated one.
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
        let mut slots = vec![ABSENT; keys.len()];
        for (slot, &idx) in indices.iter().enumerate() {
            if slots[idx] != ABSENT {
                return Err(QueueError::DuplicateIndex(idx));
            }
            slots[idx] = slot;
        }
        let mut queue = Self {
            heap: indices,
            slots,
            cmp,
        };
        queue.heapify(keys);
        Ok(queue)
    }

    /// Returns `true` if `index` is currently enqueued. O(1).
    pub fn contains(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|&slot| slot != ABSENT)
    }

    /// Returns the capacity of the backing sequence.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the number of enqueued indices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is enqueued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all enqueued indices, marking each absent. O(size).
    pub fn clear(&mut self) {
        for &idx in &self.heap {
            self.slots[idx] = ABSENT;
        }
        self.heap.clear();
    }

    /// Shrinks the backing sequence and the inversion table. Trailing
    /// absent inversion entries are dropped before shrinking.
    pub fn trim(&mut self) {
        self.heap.shrink_to_fit();
        while self.slots.last() == Some(&ABSENT) {
            self.slots.pop();
        }
        self.slots.shrink_to_fit();
    }

    /// Returns the active comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Renders the current contents as `index=value` pairs in heap order.
    /// Diagnostic only; not a stable format.
    pub fn render<T>(&self, keys: &[T]) -> String
    where
        T: fmt::Debug,
    {
        let mut s = String::from("[");
        for (i, &idx) in self.heap.iter().enumerate() {
            if i > 0 {
                s.push_str(", ");
            }
            s.push_str(&format!("{}={:?}", idx, keys[idx]));
        }
        s.push(']');
        s
    }

    /// Grows the inversion table to cover `index`.
    fn ensure_slot(&mut self, index: usize) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, ABSENT);
        }
    }

    /// Swaps two heap slots and fixes both inversion entries.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]] = a;
        self.slots[self.heap[b]] = b;
    }

    /// Moves the element at `slot` toward the root until its parent is no
    /// larger.
    fn sift_up<T>(&mut self, keys: &[T], mut slot: usize)
    where
        C: Comparator<T>,
    {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let child_key = &keys[self.heap[slot]];
            let parent_key = &keys[self.heap[parent]];
            if self.cmp.compare(child_key, parent_key) == Ordering::Less {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `slot` toward the leaves, always following the
    /// smaller child, until neither child is smaller.
    fn sift_down<T>(&mut self, keys: &[T], mut slot: usize)
    where
        C: Comparator<T>,
    {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len {
                let lk = &keys[self.heap[left]];
                if self.cmp.compare(lk, &keys[self.heap[smallest]]) == Ordering::Less {
                    smallest = left;
                }
            }
            if right < len {
                let rk = &keys[self.heap[right]];
                if self.cmp.compare(rk, &keys[self.heap[smallest]]) == Ordering::Less {
                    smallest = right;
                }
            }

            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    /// Bottom-up heapify of the whole backing sequence, O(n).
    fn heapify<T>(&mut self, keys: &[T])
    where
        C: Comparator<T>,
    {
        for slot in (0..self.heap.len() / 2).rev() {
            self.sift_down(keys, slot);
        }
    }
}

impl<T, C> IndirectQueue<T> for HeapQueue<C>
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
        if self.contains(index) {
            return Err(QueueError::DuplicateIndex(index));
        }
        self.ensure_slot(index);
        let slot = self.heap.len();
        self.heap.push(index);
        self.slots[index] = slot;
        self.sift_up(keys, slot);
        Ok(())
    }

    fn dequeue(&mut self, keys: &[T]) -> Result<usize, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        let index = self.heap[0];
        self.slots[index] = ABSENT;
        let last = self.heap.pop().unwrap();
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.slots[last] = 0;
            self.sift_down(keys, 0);
        }
        Ok(index)
    }

    fn first(&mut self, _keys: &[T]) -> Result<usize, QueueError> {
        self.heap.first().copied().ok_or(QueueError::Empty)
    }

    fn last(&self, keys: &[T]) -> Result<usize, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        // The maximum of a min-heap lives in a childless slot, so only the
        // back half needs scanning.
        let mut best = self.heap[self.heap.len() / 2];
        for &idx in &self.heap[self.heap.len() / 2 + 1..] {
            if self.cmp.compare(&keys[idx], &keys[best]) == Ordering::Greater {
                best = idx;
            }
        }
        Ok(best)
    }

    fn changed(&mut self, keys: &[T]) {
        // Only a root that got worse can violate the invariant; a root
        // that got better trivially still satisfies it.
        if !self.heap.is_empty() {
            self.sift_down(keys, 0);
        }
    }

    fn changed_at(&mut self, keys: &[T], index: usize) -> Result<(), QueueError> {
        if !self.contains(index) {
            return Err(QueueError::InvalidIndex {
                index,
                bound: keys.len(),
            });
        }
        // At most one of the two actually moves the element, covering both
        // the improved and the worsened case.
        self.sift_up(keys, self.slots[index]);
        self.sift_down(keys, self.slots[index]);
        Ok(())
    }

    fn all_changed(&mut self, keys: &[T]) {
        self.heapify(keys);
    }

    fn remove(&mut self, keys: &[T], index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        let slot = self.slots[index];
        self.slots[index] = ABSENT;
        let last = self.heap.pop().unwrap();
        if slot < self.heap.len() {
            self.heap[slot] = last;
            self.slots[last] = slot;
            self.sift_up(keys, slot);
            self.sift_down(keys, self.slots[last]);
        }
        true
    }

    fn len(&self) -> usize {
        HeapQueue::len(self)
    }

    fn clear(&mut self) {
        HeapQueue::clear(self)
    }

    fn trim(&mut self) {
        HeapQueue::trim(self)
    }

    fn comparator(&self) -> &C {
        HeapQueue::comparator(self)
    }
}

impl<C: fmt::Debug> fmt::Debug for HeapQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapQueue")
            .field("heap", &self.heap)
            .field("cmp", &self.cmp)
            .finish()
    }
}
