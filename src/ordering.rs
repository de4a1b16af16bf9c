//! Ordering policies for indirect queues
//!
//! Both queue variants order *indices* by the value each index currently
//! refers to. The value comparison itself is pluggable through the
//! [`Comparator`] trait: either the type's natural `Ord` (via
//! [`NaturalOrder`], the default) or any closure returning a three-way
//! [`Ordering`].
//!
//! Comparators are monomorphized into the queue type, so a custom closure
//! comparator costs no boxing or dynamic dispatch.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use indirect_pq::{Comparator, NaturalOrder};
//!
//! let natural = NaturalOrder;
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//! assert!(Comparator::<i32>::is_natural(&natural));
//!
//! // Any Fn(&T, &T) -> Ordering is a comparator; this one reverses.
//! let reverse = |a: &i32, b: &i32| b.cmp(a);
//! assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
//! assert!(!reverse.is_natural());
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Queues compare the *current* values behind two enqueued indices through
/// this trait every time they need an ordering decision; nothing is cached
/// beyond what the change-notification contract permits.
pub trait Comparator<T> {
    /// Three-way comparison of two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` when this comparator is the type's natural order.
    ///
    /// This is the sentinel for "no injected comparator": only
    /// [`NaturalOrder`] reports `true`.
    fn is_natural(&self) -> bool {
        false
    }
}

/// The natural order of `T: Ord`. Zero-sized; the default comparator for
/// both queue variants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn is_natural(&self) -> bool {
        true
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
