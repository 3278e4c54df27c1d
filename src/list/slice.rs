// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

impl<'a, T: Copy + Default> BoundedList<&'a mut [T]> {
    /// Builds an empty list over the first `capacity` slots of `buf`.
    ///
    /// Those slots are reset to `T::default()`; any slots past `capacity` are
    /// left untouched. Returns [`Error::InvalidCapacity`] if `capacity` is
    /// zero or larger than `buf.len()`.
    ///
    /// ```rust
    /// use bounded_list::SliceList;
    ///
    /// let mut buf = [0u32; 8];
    /// let mut list = SliceList::with_capacity(&mut buf, 2).unwrap();
    /// list.push(1).unwrap();
    /// list.push(2).unwrap();
    /// assert!(list.push(3).is_err());
    /// ```
    pub fn with_capacity(buf: &'a mut [T], capacity: usize) -> Result<Self, Error> {
        if capacity == 0 || capacity > buf.len() {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self::zeroed(buf, capacity))
    }

    /// Builds an empty list using the whole of `buf` as its capacity.
    #[inline]
    pub fn from_buffer(buf: &'a mut [T]) -> Result<Self, Error> {
        let capacity = buf.len();
        Self::with_capacity(buf, capacity)
    }
}

impl<'a, T: Copy> BoundedList<&'a mut [T]> {
    /// Ends the list and hands the buffer back to the caller.
    #[inline]
    pub fn into_storage(self) -> &'a mut [T] {
        self.buf
    }
}
