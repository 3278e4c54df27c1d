// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedList`](crate::BoundedList).
//!
//! - **Serialize** (any storage): as a sequence of the `len` occupied elements.
//!   The zeroed tail is never written.
//! - **Deserialize** ([`ArrayList`](crate::ArrayList) only): from any sequence
//!   of at most `N` elements. A [`SliceList`](crate::SliceList) borrows its
//!   buffer from the caller and so cannot be produced by a deserializer.
//!
//! `T: Default` is required for deserialization because the list zero-fills
//! its backing array before elements are pushed.

// Crate imports
use crate::{
    list::{ArrayList, BoundedList},
    storage::Storage,
};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<S> Serialize for BoundedList<S>
where
    S: Storage,
    S::Item: Serialize,
{
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for ListVisitor<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    type Value = ArrayList<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = ArrayList::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for BoundedList<[T; N]>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T, N>(PhantomData))
    }
}
