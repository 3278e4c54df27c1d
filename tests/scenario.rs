// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

use bounded_list::{ArrayList, BoundedList, Error, SliceList, Storage};

// Runs the reference walkthrough against any storage with at least 100 slots.
fn walkthrough<S: Storage<Item = i32>>(list: &mut BoundedList<S>) {
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.slots()[5], 0);
    assert_eq!(list.slots()[9], 0);

    list.insert(0, 0).unwrap();
    list.insert(1, 111).unwrap();
    list.insert(2, 222).unwrap();
    list.insert(3, 333).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.try_get(0), Ok(0));
    assert_eq!(list.try_get(3), Ok(333));
    assert_eq!(&list.slots()[..6], &[0, 111, 222, 333, 0, 0]);

    list.insert(3, 999).unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(&list.slots()[..6], &[0, 111, 222, 999, 333, 0]);

    assert_eq!(list.remove(0), Ok(0));
    assert_eq!(list.len(), 4);
    assert_eq!(&list.slots()[..6], &[111, 222, 999, 333, 0, 0]);
    assert_eq!(list.locate(&999), Some(2));
    assert_eq!(list.locate(&0), None);

    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.slots().iter().all(|&x| x == 0));
}

#[test]
fn walkthrough_inline_storage() {
    let mut list: ArrayList<i32, 100> = ArrayList::new();
    walkthrough(&mut list);
    assert_eq!(list.capacity(), 100);
}

#[test]
fn walkthrough_caller_supplied_buffer() {
    // Garbage in the buffer must not leak into the list.
    let mut buf = vec![-1i32; 100];
    let mut list = SliceList::from_buffer(&mut buf).unwrap();
    walkthrough(&mut list);
    assert!(buf.iter().all(|&x| x == 0));
}

#[test]
fn failed_operations_leave_state_unchanged() {
    let mut list: ArrayList<i32, 3> = ArrayList::new();
    list.push(1).unwrap();
    list.push(2).unwrap();
    list.push(3).unwrap();
    let before = list;

    assert_eq!(list.insert(0, 9), Err(Error::Full));
    assert_eq!(list.insert(3, 9), Err(Error::Full));
    assert_eq!(list.remove(3), Err(Error::OutOfBounds));
    assert_eq!(list.try_get(3), Err(Error::OutOfBounds));
    assert_eq!(list, before);
    assert_eq!(list.slots(), before.slots());
}

#[test]
fn list_is_reusable_after_clear() {
    let mut buf = [0u16; 4];
    let mut list = SliceList::with_capacity(&mut buf, 2).unwrap();
    list.push(1).unwrap();
    list.push(2).unwrap();
    list.clear();
    list.push(3).unwrap();
    assert_eq!(list.as_slice(), &[3]);
    assert_eq!(list.capacity(), 2);
}

#[test]
fn errors_convert_into_boxed_std_errors() {
    fn fallible() -> Result<(), Box<dyn std::error::Error>> {
        let mut list: ArrayList<u8, 1> = ArrayList::new();
        list.push(1)?;
        list.push(2)?;
        Ok(())
    }
    let err = fallible().unwrap_err();
    assert_eq!(err.to_string(), "capacity exceeded");
}
