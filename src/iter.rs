// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedList`](crate::BoundedList).
//!
//! - `IntoIter<S>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&BoundedList` and `&mut BoundedList` iterate as slices.

// Crate imports
use crate::{list::BoundedList, storage::Storage};

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `BoundedList::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<S: Storage> {
    pub(crate) list: BoundedList<S>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<S: Storage> Iterator for IntoIter<S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(self.list.as_slice()[i])
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<S: Storage> DoubleEndedIterator for IntoIter<S> {
    fn next_back(&mut self) -> Option<S::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.list.as_slice()[self.back])
        } else {
            None
        }
    }
}
impl<S: Storage> FusedIterator for IntoIter<S> {}
impl<S: Storage> ExactSizeIterator for IntoIter<S> {}

impl<'a, S: Storage> IntoIterator for &'a BoundedList<S>
where
    S::Item: 'a,
{
    type Item = &'a S::Item;
    type IntoIter = core::slice::Iter<'a, S::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, S: Storage> IntoIterator for &'a mut BoundedList<S>
where
    S::Item: 'a,
{
    type Item = &'a mut S::Item;
    type IntoIter = core::slice::IterMut<'a, S::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<S: Storage> IntoIterator for BoundedList<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            list: self,
        }
    }
}
