//! Top-down merge sort.
//!
//! Recursive split at `(left + right) / 2`; the merge copies both runs
//! out, compares with `<=` favoring the left run (stable), places merged
//! elements back through counted writes, and flushes leftover runs with
//! uncounted copy-back writes.

use crate::channel::TraceChannel;
use crate::errors::EngineError;

pub(super) fn merge_sort(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    if n > 1 {
        sort_range(ch, 0, n - 1)?;
    }
    Ok(())
}

fn sort_range(ch: &mut TraceChannel, left: usize, right: usize) -> Result<(), EngineError> {
    if left >= right {
        return Ok(());
    }
    let mid = (left + right) / 2;
    sort_range(ch, left, mid)?;
    sort_range(ch, mid + 1, right)?;
    merge(ch, left, mid, right)
}

fn merge(ch: &mut TraceChannel, left: usize, mid: usize, right: usize) -> Result<(), EngineError> {
    let values = ch.snapshot();
    let lower = values[left..=mid].to_vec();
    let upper = values[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < lower.len() && j < upper.len() {
        ch.note_compare();
        if lower[i] <= upper[j] {
            ch.place(k, lower[i])?;
            i += 1;
        } else {
            ch.place(k, upper[j])?;
            j += 1;
        }
        k += 1;
    }

    while i < lower.len() {
        ch.write(k, lower[i])?;
        i += 1;
        k += 1;
    }

    while j < upper.len() {
        ch.write(k, upper[j])?;
        j += 1;
        k += 1;
    }

    Ok(())
}
