// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList, storage::Storage};

impl<S: Storage> BoundedList<S> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// - Returns [`Error::Full`] if `len == capacity`.
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    ///
    /// `index == len` appends. On error the list is unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: S::Item) -> Result<(), Error> {
        if self.len == self.cap {
            return Err(Error::Full);
        }
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        let len = self.len;

        // len < cap, so the shifted run ends at most at slot cap - 1.
        let slots = &mut self.buf.slots_mut()[..self.cap];
        slots.copy_within(index..len, index + 1);
        slots[index] = value;

        self.len = len + 1;
        Ok(())
    }

    /// Appends `value`; returns [`Error::Full`] if at capacity.
    #[inline]
    pub fn push(&mut self, value: S::Item) -> Result<(), Error> {
        self.insert(self.len, value)
    }

    /// Appends all of `src` if it fits; otherwise no-op and returns [`Error::Full`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[S::Item]) -> Result<(), Error> {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        let len = self.len;
        self.buf.slots_mut()[len..len + src.len()].copy_from_slice(src);
        self.len = len + src.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ArrayList, Error, SliceList};

    #[test]
    fn test_insert_at_front_middle_and_end() {
        let mut list: ArrayList<i32, 6> = ArrayList::new();
        list.insert(0, 2).unwrap(); // [2]
        list.insert(0, 0).unwrap(); // [0, 2]
        list.insert(1, 1).unwrap(); // [0, 1, 2]
        list.insert(3, 3).unwrap(); // append
        assert_eq!(list.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(list.slots(), &[0, 1, 2, 3, 0, 0]);
    }

    #[test]
    fn test_insert_then_get_returns_value() {
        let mut list: ArrayList<i32, 5> = ArrayList::try_from(&[1, 2, 3][..]).unwrap();
        list.insert(1, 42).unwrap();
        assert_eq!(list.get(1), Some(&42));
        assert_eq!(list.as_slice(), &[1, 42, 2, 3]);
    }

    #[test]
    fn test_insert_past_len_is_out_of_bounds_and_noop() {
        let mut list: ArrayList<i32, 4> = ArrayList::try_from(&[1, 2][..]).unwrap();
        let before = list;
        assert_eq!(list.insert(3, 9), Err(Error::OutOfBounds));
        assert_eq!(list, before);
        assert_eq!(list.slots(), &[1, 2, 0, 0]);
    }

    #[test]
    fn test_insert_when_full_is_noop() {
        let mut list: ArrayList<i32, 3> = ArrayList::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(list.insert(1, 9), Err(Error::Full));
        assert_eq!(list.push(9), Err(Error::Full));
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_full_is_reported_before_bad_position() {
        let mut list: ArrayList<i32, 1> = ArrayList::from([1]);
        assert_eq!(list.insert(5, 9), Err(Error::Full));
    }

    #[test]
    fn test_insert_into_last_free_slot_shifts_within_capacity() {
        // The shifted run must end at cap - 1 and never touch slots beyond it.
        let mut buf = [7i32; 5];
        let mut list = SliceList::with_capacity(&mut buf, 3).unwrap();
        list.push(1).unwrap();
        list.push(2).unwrap();
        list.insert(0, 0).unwrap();
        assert!(list.is_full());
        assert_eq!(list.as_slice(), &[0, 1, 2]);
        assert_eq!(buf, [0, 1, 2, 7, 7]);
    }

    #[test]
    fn test_extend_from_slice_all_or_nothing() {
        let mut list: ArrayList<u8, 4> = ArrayList::new();
        list.extend_from_slice(&[1, 2]).unwrap();
        assert_eq!(list.extend_from_slice(&[3, 4, 5]), Err(Error::Full));
        assert_eq!(list.as_slice(), &[1, 2]);
        list.extend_from_slice(&[3, 4]).unwrap();
        assert!(list.is_full());
        list.extend_from_slice(&[]).unwrap();
    }
}
