// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, storage::Storage};

impl<S: Storage> BoundedList<S>
where
    S::Item: Default,
{
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; `index == len` is
    /// rejected too. The slot vacated at the end of the list is reset to
    /// `T::default()`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<S::Item, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds);
        }
        let len = self.len;

        let slots = self.buf.slots_mut();
        let out = slots[index];

        // Shift left: [index+1..len) -> [index..len-1)
        slots.copy_within(index + 1..len, index);
        slots[len - 1] = S::Item::default();

        self.len = len - 1;
        Ok(out)
    }

    /// Removes the last element, if any, resetting its slot to `T::default()`.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<S::Item> {
        let last = self.len.checked_sub(1)?;
        self.remove(last).ok()
    }
}
