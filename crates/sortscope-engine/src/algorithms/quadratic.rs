//! Exchange-based sorts: bubble, selection, insertion, shell.

use crate::channel::TraceChannel;
use crate::errors::EngineError;

/// Adjacent compare-and-swap, n-1 passes. Performs the full O(n²)
/// comparison schedule regardless of input order.
pub(super) fn bubble(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if ch.compare(j, j + 1)? {
                ch.swap(j, j + 1)?;
            }
        }
    }
    Ok(())
}

/// Linear scan for the minimum per pass; swaps only when the minimum
/// moved. Exactly n(n-1)/2 comparisons on every input.
pub(super) fn selection(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if ch.compare(min_idx, j)? {
                min_idx = j;
            }
        }
        if min_idx != i {
            ch.swap(i, min_idx)?;
        }
    }
    Ok(())
}

/// Stable insertion: the key rides at `j` and sinks by adjacent swaps
/// while its predecessor is strictly greater. Comparison and shift counts
/// match the shift-and-write formulation exactly.
pub(super) fn insertion(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && ch.compare(j - 1, j)? {
            ch.swap(j - 1, j)?;
            j -= 1;
        }
    }
    Ok(())
}

/// Gapped insertion with the halving gap sequence n/2, n/4, …, 1.
pub(super) fn shell(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && ch.compare(j - gap, j)? {
                ch.swap(j - gap, j)?;
                j -= gap;
            }
        }
        gap /= 2;
    }
    Ok(())
}
