//! Heap sort over an implicit max-heap.
//!
//! Builds the heap bottom-up from `n/2 - 1`, then repeatedly swaps the
//! root with the last unsorted element, shrinks the heap, and re-heapifies
//! the root. Sift-down recursion depth is O(log n).

use crate::channel::TraceChannel;
use crate::errors::EngineError;

pub(super) fn heap_sort(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    if n <= 1 {
        return Ok(());
    }

    for i in (0..n / 2).rev() {
        heapify(ch, n, i)?;
    }

    for end in (1..n).rev() {
        ch.swap(0, end)?;
        heapify(ch, end, 0)?;
    }
    Ok(())
}

/// Sift the element at `i` down within the heap of size `n`.
fn heapify(ch: &mut TraceChannel, n: usize, i: usize) -> Result<(), EngineError> {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && ch.compare(left, largest)? {
        largest = left;
    }
    if right < n && ch.compare(right, largest)? {
        largest = right;
    }

    if largest != i {
        ch.swap(i, largest)?;
        heapify(ch, n, largest)?;
    }
    Ok(())
}
