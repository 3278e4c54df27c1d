// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedList` type and its inherent API.
//!
//! `BoundedList<S>` is a fixed-capacity ordered list over a [`Storage`]. It
//! tracks a logical length inside a run of `capacity` slots and keeps every
//! unused slot at the zero value (`T::default()`).
//!
//! No heap allocations are performed.

mod array;
mod insert;
mod remove;
mod search;
mod slice;

// Crate imports
use crate::{error::Error, storage::Storage};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity ordered list backed by a [`Storage`].
///
/// `BoundedList<S>` maintains:
///
/// - a backing storage `S` exposing at least `capacity` slots;
/// - a capacity `cap` with `1 <= cap`, fixed at construction;
/// - a logical length `len` with `0 <= len <= cap`.
///
/// Only the prefix `slots[..len]` is part of the list and visible through
/// [`as_slice`](Self::as_slice), indexing, and iteration. The tail
/// `slots[len..cap]` always holds the zero value; it can be inspected with
/// [`slots`](Self::slots).
///
/// Most code names one of the two concrete variants:
///
/// - [`ArrayList<T, N>`]: inline `[T; N]` storage, `Copy` when `T` is;
/// - [`SliceList<'a, T>`]: a caller-supplied `&'a mut [T]` with an explicit
///   capacity.
///
/// # Positions
///
/// Every position is a 0-based index. Ordinal (1-based) positions map as
/// `ordinal p <=> index p - 1`.
///
/// # Complexity
///
/// - [`insert`](Self::insert) and [`remove`](Self::remove) are `O(len)`
///   (elements after the position shift by one slot).
/// - [`get`](Self::get) is `O(1)`; [`locate`](Self::locate) is `O(len)`.
/// - [`clear`](Self::clear) is `O(capacity)`.
///
/// # Examples
///
/// ```rust
/// use bounded_list::ArrayList;
///
/// let mut list: ArrayList<i32, 4> = ArrayList::new();
/// list.insert(0, 10).unwrap();
/// list.insert(0, 5).unwrap();
/// assert_eq!(list.as_slice(), &[5, 10]);
/// assert_eq!(list.locate(&10), Some(1));
/// assert_eq!(list.remove(0), Ok(5));
/// assert_eq!(list.slots(), &[10, 0, 0, 0]);
/// ```
#[derive(Clone, Copy)]
pub struct BoundedList<S: Storage> {
    pub(crate) buf: S,
    pub(crate) cap: usize,
    pub(crate) len: usize,
}

/// A [`BoundedList`] with inline storage of `N` slots.
pub type ArrayList<T, const N: usize> = BoundedList<[T; N]>;

/// A [`BoundedList`] over a caller-supplied buffer.
pub type SliceList<'a, T> = BoundedList<&'a mut [T]>;

impl<S: Storage> BoundedList<S> {
    /// Returns the fixed capacity chosen at construction.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == capacity`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.cap
    }

    /// Returns `capacity - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// Returns the element at `index`, or `None` if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&S::Item> {
        self.as_slice().get(index)
    }

    /// Copying variant of [`get`](Self::get).
    ///
    /// Returns [`Error::OutOfBounds`] when the list is empty or `index >= len`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<S::Item, Error> {
        self.get(index).copied().ok_or(Error::OutOfBounds)
    }

    /// Returns the element at `index` mutably, or `None` if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut S::Item> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&S::Item> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&S::Item> {
        self.as_slice().last()
    }

    /// Returns the occupied prefix `slots[..len]`.
    #[inline]
    pub fn as_slice(&self) -> &[S::Item] {
        &self.buf.slots()[..self.len]
    }

    /// Returns the occupied prefix `slots[..len]` mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S::Item] {
        let len = self.len;
        &mut self.buf.slots_mut()[..len]
    }

    /// Returns all `capacity` slots, including the zeroed tail past `len`.
    ///
    /// The tail is not part of the list; this view exists for inspection.
    #[inline]
    pub fn slots(&self) -> &[S::Item] {
        &self.buf.slots()[..self.cap]
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, S::Item> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, S::Item> {
        self.as_mut_slice().iter_mut()
    }
}

impl<S: Storage> BoundedList<S>
where
    S::Item: Default,
{
    /// Zero-fills the first `cap` slots of `buf` and wraps them as an empty list.
    ///
    /// Callers guarantee `0 < cap <= buf.slots().len()`.
    pub(crate) fn zeroed(mut buf: S, cap: usize) -> Self {
        buf.slots_mut()[..cap].fill(S::Item::default());
        Self { buf, cap, len: 0 }
    }

    /// Resets every slot to the zero value and sets `len = 0`.
    ///
    /// The storage itself is kept; the list stays usable.
    #[inline]
    pub fn clear(&mut self) {
        let cap = self.cap;
        self.buf.slots_mut()[..cap].fill(S::Item::default());
        self.len = 0;
    }
}

impl<S: Storage> fmt::Debug for BoundedList<S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("capacity", &self.cap)
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Comparisons only look at the occupied prefix, so lists over different
// storages compare equal when they hold the same elements.
impl<S, R> PartialEq<BoundedList<R>> for BoundedList<S>
where
    S: Storage,
    R: Storage<Item = S::Item>,
    S::Item: PartialEq,
{
    fn eq(&self, other: &BoundedList<R>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<S: Storage> Eq for BoundedList<S> where S::Item: Eq {}
impl<S: Storage> PartialOrd for BoundedList<S>
where
    S::Item: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<S: Storage> Ord for BoundedList<S>
where
    S::Item: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<S: Storage> Hash for BoundedList<S>
where
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<S: Storage> Deref for BoundedList<S> {
    type Target = [S::Item];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<S: Storage> DerefMut for BoundedList<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<S: Storage> AsRef<[S::Item]> for BoundedList<S> {
    fn as_ref(&self) -> &[S::Item] {
        self.as_slice()
    }
}
impl<S: Storage> AsMut<[S::Item]> for BoundedList<S> {
    fn as_mut(&mut self) -> &mut [S::Item] {
        self.as_mut_slice()
    }
}

impl<S: Storage> Borrow<[S::Item]> for BoundedList<S> {
    fn borrow(&self) -> &[S::Item] {
        self.as_slice()
    }
}
impl<S: Storage> BorrowMut<[S::Item]> for BoundedList<S> {
    fn borrow_mut(&mut self) -> &mut [S::Item] {
        self.as_mut_slice()
    }
}
