// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`BoundedList`](crate::BoundedList).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and mirror slice behavior:
//! - panics on out-of-bounds;
//! - views are restricted to the occupied prefix `[0..len)`.
//!
//! Use [`BoundedList::get`](crate::BoundedList::get) for a non-panicking lookup.

// Crate imports
use crate::{list::BoundedList, storage::Storage};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<S, I> Index<I> for BoundedList<S>
where
    S: Storage,
    I: SliceIndex<[S::Item]>,
{
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<S, I> IndexMut<I> for BoundedList<S>
where
    S: Storage,
    I: SliceIndex<[S::Item]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
