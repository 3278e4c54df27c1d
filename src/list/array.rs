// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::BoundedList};

const fn assert_valid_capacity<const N: usize>() {
    assert!(N > 0, "ArrayList capacity must be non-zero");
}

impl<T: Copy, const N: usize> BoundedList<[T; N]> {
    /// The fixed capacity of an inline list.
    pub const CAPACITY: usize = N;

    // Evaluated at monomorphization time, so `ArrayList<T, 0>` fails to build.
    const CAPACITY_CHECK: () = assert_valid_capacity::<N>();
}

impl<T: Copy + Default, const N: usize> BoundedList<[T; N]> {
    /// Constructs an empty list with all `N` slots set to `T::default()`.
    ///
    /// A capacity of zero is rejected at compile time.
    #[inline]
    pub fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self::zeroed([T::default(); N], N)
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedList<[T; N]> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for BoundedList<[T; N]> {
    /// Wraps a full array; every element becomes part of the list.
    fn from(buf: [T; N]) -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf,
            cap: N,
            len: N,
        }
    }
}

impl<T: Copy + Default, const N: usize> TryFrom<&[T]> for BoundedList<[T; N]> {
    type Error = Error;

    /// Copies `src` into a new list, or returns [`Error::Full`] if `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        list.extend_from_slice(src)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ArrayList, Error};

    #[test]
    fn test_capacity_const_matches_instance() {
        let list: ArrayList<u8, 5> = ArrayList::default();
        assert_eq!(ArrayList::<u8, 5>::CAPACITY, 5);
        assert_eq!(list.capacity(), 5);
    }

    #[test]
    fn test_from_array_is_full() {
        let mut list: ArrayList<i32, 3> = ArrayList::from([4, 5, 6]);
        assert!(list.is_full());
        assert_eq!(list.as_slice(), &[4, 5, 6]);
        assert_eq!(list.push(7), Err(Error::Full));
    }

    #[test]
    fn test_try_from_slice_over_capacity_errors() {
        let res = ArrayList::<i32, 2>::try_from(&[1, 2, 3][..]);
        assert_eq!(res, Err(Error::Full));
    }

    #[test]
    fn test_try_from_slice_zero_fills_tail() {
        let list: ArrayList<i32, 4> = ArrayList::try_from(&[1, 2][..]).unwrap();
        assert_eq!(list.slots(), &[1, 2, 0, 0]);
    }
}
