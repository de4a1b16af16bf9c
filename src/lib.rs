//! Indirect Priority Queues
//!
//! This crate provides priority queues that operate *indirectly*: elements
//! are `usize` indices into a caller-owned slice of keys, and the queue
//! orders those indices by the value each one currently refers to. Values
//! are re-read at every comparison rather than snapshot at insertion time,
//! so the caller may mutate the key slice freely and then tell the queue
//! what changed through the `changed` notification family.
//!
//! # Variants
//!
//! - [`ArrayQueue`]: semi-indirect, an unordered backing sequence scanned
//!   on demand. O(n) queries, but O(1) enqueue, duplicate indices
//!   permitted, and tied-leader enumeration via
//!   [`front`](array::ArrayQueue::front).
//! - [`HeapQueue`]: fully indirect, a binary min-heap plus an inversion
//!   table. O(log n) queries, O(1) membership, duplicate indices rejected.
//!
//! Both implement the [`IndirectQueue`] trait and accept an injected
//! [`Comparator`]; [`NaturalOrder`] (the default) uses `T: Ord`.
//!
//! # Example
//!
//! ```rust
//! use indirect_pq::{HeapQueue, IndirectQueue};
//!
//! let mut weights = [5, 3, 8, 1];
//! let mut queue: HeapQueue = HeapQueue::new();
//! for i in 0..weights.len() {
//!     queue.enqueue(&weights, i).unwrap();
//! }
//!
//! // The lightest index first.
//! assert_eq!(queue.dequeue(&weights), Ok(3));
//!
//! // Edit a key, then notify the queue.
//! weights[2] = 0;
//! queue.changed_at(&weights, 2).unwrap();
//! assert_eq!(queue.dequeue(&weights), Ok(2));
//! ```
//!
//! # Synchronization
//!
//! Neither queue is internally synchronized. Sharing a queue or its key
//! slice across threads requires external serialization.

pub mod array;
pub mod heap;
pub mod ordering;
pub mod traits;

pub use array::ArrayQueue;
pub use heap::HeapQueue;
pub use ordering::{Comparator, NaturalOrder};
pub use traits::{IndirectQueue, QueueError};
