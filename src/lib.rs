// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-list`
//!
//! A `no_std`, fixed-capacity ordered list for `Copy` elements,
//! **with no `unsafe`**.
//!
//! The core type, [`BoundedList<S>`], keeps its elements in a run of
//! `capacity` slots taken from a [`Storage`] and tracks a logical length
//! `len ∈ 0..=capacity`. Two storages are provided:
//!
//! - [`ArrayList<T, N>`]: an inline `[T; N]` buffer, capacity fixed at
//!   compile time;
//! - [`SliceList<'a, T>`]: a caller-supplied `&'a mut [T]` with an explicit
//!   capacity no larger than the buffer.
//!
//! Both share every operation: insert and remove at a position, lookup by
//! position, linear search by value, clear, and the usual length queries.
//!
//! ## Semantics
//!
//! - Capacity never changes after construction; nothing is allocated.
//! - The list is the prefix `slots[..len]`. Every slot in `slots[len..capacity]`
//!   holds the zero value `T::default()`: construction zero-fills the storage
//!   and [`remove`](BoundedList::remove), [`pop`](BoundedList::pop), and
//!   [`clear`](BoundedList::clear) reset the slots they vacate.
//! - Fallible operations return [`Error`] and leave the list unchanged:
//!   - [`Error::Full`]: inserting into a full list;
//!   - [`Error::OutOfBounds`]: a position outside the valid range;
//!   - [`Error::InvalidCapacity`]: a zero capacity, or one larger than the
//!     supplied buffer.
//! - [`locate`](BoundedList::locate) reports "not found" as `None`.
//! - Only slice-style indexing (`list[i]`, `list[a..b]`) panics.
//!
//! ## Positions
//!
//! All positions are **0-based**:
//!
//! | operation | valid positions |
//! |-----------|-----------------|
//! | [`get`](BoundedList::get), [`remove`](BoundedList::remove) | `0..len` |
//! | [`insert`](BoundedList::insert) | `0..=len` (`len` appends) |
//!
//! An ordinal (1-based) position `p` corresponds to index `p - 1`.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` for every `BoundedList<S>` (the occupied prefix, as
//!     a sequence).
//!   - Enables `Deserialize` for `ArrayList<T, N>` with
//!     `T: Deserialize<'de> + Copy + Default`.
//!
//! ## Example
//!
//! ```rust
//! use bounded_list::{ArrayList, Error, SliceList};
//!
//! let mut list: ArrayList<i32, 100> = ArrayList::new();
//! for (i, v) in [0, 111, 222, 333].into_iter().enumerate() {
//!     list.insert(i, v).unwrap();
//! }
//! list.insert(3, 999).unwrap();
//! assert_eq!(list.as_slice(), &[0, 111, 222, 999, 333]);
//! assert_eq!(list.remove(0), Ok(0));
//! assert_eq!(list.as_slice(), &[111, 222, 999, 333]);
//!
//! let mut buf = [0i32; 2];
//! let mut small = SliceList::from_buffer(&mut buf).unwrap();
//! small.push(1).unwrap();
//! small.push(2).unwrap();
//! assert_eq!(small.push(3), Err(Error::Full));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serde;
mod storage;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use list::{ArrayList, BoundedList, SliceList};
pub use storage::Storage;
