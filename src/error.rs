// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedList`.
//!
//! These errors represent capacity and position conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`BoundedList`](crate::BoundedList).
///
/// A failed operation never modifies the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The list already holds `capacity` elements.
    Full,
    /// A position was outside the valid range for the operation.
    ///
    /// `get`/`remove` accept `0..len`, `insert` accepts `0..=len`.
    OutOfBounds,
    /// A requested capacity was zero or larger than the supplied buffer.
    InvalidCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("position out of bounds"),
            Self::InvalidCapacity => f.write_str("invalid capacity"),
        }
    }
}

impl CoreError for Error {}
