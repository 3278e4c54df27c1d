// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backing storage for [`BoundedList`](crate::BoundedList).
//!
//! A [`Storage`] is anything that exclusively owns (or exclusively borrows) a
//! contiguous run of slots. Two implementations are provided:
//!
//! - `[T; N]`: inline storage, capacity fixed at compile time;
//! - `&mut [T]`: a caller-supplied buffer, borrowed for the list's lifetime.

/// Contiguous slots a [`BoundedList`](crate::BoundedList) can live in.
///
/// The list only ever touches `slots()[..capacity]`; any slots past the
/// chosen capacity are left alone.
pub trait Storage {
    /// Element type held in each slot.
    type Item: Copy;

    /// All slots, in order.
    fn slots(&self) -> &[Self::Item];

    /// All slots, in order, mutably.
    fn slots_mut(&mut self) -> &mut [Self::Item];
}

impl<T: Copy, const N: usize> Storage for [T; N] {
    type Item = T;

    #[inline]
    fn slots(&self) -> &[T] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Copy> Storage for &mut [T] {
    type Item = T;

    #[inline]
    fn slots(&self) -> &[T] {
        &**self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [T] {
        &mut **self
    }
}
