//! Growable sequence used for every list in the AST.
//!
//! `Seq<T>` is a thin wrapper over `Vec<T>` that owns its growth policy:
//! capacity doubles while small, then grows by shrinking fractions so that
//! very large sequences do not over-allocate.
//!
//! | Capacity      | Next capacity |
//! |---------------|---------------|
//! | 0             | 1             |
//! | < 2^16        | 2x            |
//! | < 2^20        | 1.5x          |
//! | < 2^24        | 1.25x         |
//! | < 2^28        | 1.125x        |
//! | otherwise     | 1.0625x       |
//!
//! Borrowed views are plain slices (`&[T]`, via `Deref`); a `Seq` always
//! owns its elements.

use std::fmt;
use std::ops::Deref;

const FIRST_THRESHOLD: usize = 1 << 16;
const SECOND_THRESHOLD: usize = 1 << 20;
const THIRD_THRESHOLD: usize = 1 << 24;
const FOURTH_THRESHOLD: usize = 1 << 28;

/// Capacity to grow to when a sequence of capacity `cap` is full.
///
/// Never returns less than `cap + 1` and never more than `max`.
pub(crate) const fn next_capacity(cap: usize, max: usize) -> usize {
    let grown = if cap == 0 {
        1
    } else if cap < FIRST_THRESHOLD {
        cap.saturating_mul(2)
    } else if cap < SECOND_THRESHOLD {
        cap.saturating_add(cap >> 1)
    } else if cap < THIRD_THRESHOLD {
        cap.saturating_add(cap >> 2)
    } else if cap < FOURTH_THRESHOLD {
        cap.saturating_add(cap >> 3)
    } else {
        cap.saturating_add(cap >> 4)
    };
    if grown > max {
        max
    } else {
        grown
    }
}

/// Owned, append-only sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T> Seq<T> {
    const MAX_CAPACITY: usize = {
        let size = std::mem::size_of::<T>();
        if size == 0 {
            usize::MAX
        } else {
            isize::MAX.unsigned_abs() / size
        }
    };

    #[inline]
    pub const fn new_empty() -> Self {
        Seq { items: Vec::new() }
    }

    /// Push `item`, growing by the policy in the module docs when full.
    pub fn append(&mut self, item: T) {
        let len = self.items.len();
        if len == self.items.capacity() {
            let target = next_capacity(self.items.capacity(), Self::MAX_CAPACITY);
            self.items.reserve_exact(target.saturating_sub(len).max(1));
        }
        self.items.push(item);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq::new_empty()
    }
}

impl<T> Deref for Seq<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq { items }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Seq::new_empty();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
