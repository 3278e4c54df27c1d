// This file is part of bounded-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walks a list through create, insert, insert-in-the-middle, remove, and
//! clear, printing the raw slots (including the zeroed tail) after each step.

use anyhow::{Context, Result, ensure};
use bounded_list::{ArrayList, BoundedList, SliceList, Storage};
use clap::{Parser, ValueEnum};

const INLINE_CAPACITY: usize = 100;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StorageKind {
    /// Inline `[i32; 100]` storage
    Inline,
    /// Caller-supplied buffer sized by `--capacity`
    Buffer,
}

#[derive(Parser)]
#[command(name = "walkthrough")]
#[command(about = "Step a bounded list through its operations and dump its slots")]
struct Cli {
    /// Which backing storage to use
    #[arg(short, long, value_enum, default_value = "inline")]
    storage: StorageKind,

    /// Capacity of the caller-supplied buffer (ignored for inline storage)
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Number of leading slots to print after each step
    #[arg(long, default_value = "10")]
    show: usize,
}

fn dump<S: Storage<Item = i32>>(label: &str, list: &BoundedList<S>, show: usize) {
    let slots = list.slots();
    let shown = &slots[..show.min(slots.len())];
    println!("{label}: len={} slots={shown:?}", list.len());
}

fn run<S: Storage<Item = i32>>(list: &mut BoundedList<S>, show: usize) -> Result<()> {
    dump("created", list, show);

    for (index, value) in [0, 111, 222, 333].into_iter().enumerate() {
        list.insert(index, value)
            .with_context(|| format!("inserting {value} at {index}"))?;
    }
    dump("filled", list, show);

    list.insert(3, 999).context("inserting 999 at 3")?;
    dump("inserted", list, show);

    let removed = list.remove(0).context("removing index 0")?;
    println!("removed {removed}");
    dump("removed", list, show);

    if let Some(index) = list.locate(&999) {
        println!("999 found at index {index}");
    }

    list.clear();
    dump("cleared", list, show);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.storage {
        StorageKind::Inline => {
            let mut list: ArrayList<i32, INLINE_CAPACITY> = ArrayList::new();
            run(&mut list, cli.show)
        }
        StorageKind::Buffer => {
            // The walkthrough needs room for five elements.
            ensure!(cli.capacity >= 5, "capacity must be at least 5");
            let mut buf = vec![0i32; cli.capacity];
            let mut list = SliceList::from_buffer(&mut buf)?;
            run(&mut list, cli.show)
        }
    }
}
