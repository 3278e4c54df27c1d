// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{list::BoundedList, storage::Storage};

impl<S: Storage> BoundedList<S>
where
    S::Item: PartialEq,
{
    /// Returns the index of the first element equal to `value`, scanning from the front.
    ///
    /// `None` means no element matches. Only the occupied prefix is searched,
    /// so zeroed slots past `len` never match.
    #[inline]
    pub fn locate(&self, value: &S::Item) -> Option<usize> {
        self.as_slice().iter().position(|x| x == value)
    }

    /// Returns `true` if the list contains `value` (linear search on the occupied prefix).
    #[inline]
    pub fn contains(&self, value: &S::Item) -> bool {
        self.as_slice().contains(value)
    }
}
