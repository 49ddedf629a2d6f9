//! Quick sort with Lomuto partitioning.
//!
//! The last element of each range is the pivot and is marked with a
//! `Pivot` highlight while the partition runs. Recursion depth is bounded
//! by the range length, which the session caps via its size limit.

use crate::channel::TraceChannel;
use crate::errors::EngineError;
use crate::trace::HighlightKind;

pub(super) fn quick_sort(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let n = ch.len();
    if n > 1 {
        sort_range(ch, 0, n - 1)?;
    }
    Ok(())
}

fn sort_range(ch: &mut TraceChannel, low: usize, high: usize) -> Result<(), EngineError> {
    if low >= high {
        return Ok(());
    }
    let pi = partition(ch, low, high)?;
    if pi > low {
        sort_range(ch, low, pi - 1)?;
    }
    sort_range(ch, pi + 1, high)?;
    Ok(())
}

/// Lomuto partition over `[low, high]` with the pivot at `high`.
///
/// Returns the pivot's final index. `compare(high, j)` asks whether
/// `sequence[j] < pivot`; the pivot position is untouched until the final
/// swap, so comparing against `high` is comparing against the pivot value.
fn partition(ch: &mut TraceChannel, low: usize, high: usize) -> Result<usize, EngineError> {
    ch.highlight(high, HighlightKind::Pivot)?;

    let mut slot = low;
    for j in low..high {
        if ch.compare(high, j)? {
            if slot != j {
                ch.swap(slot, j)?;
            }
            slot += 1;
        }
    }

    if slot != high {
        ch.swap(slot, high)?;
    }
    Ok(slot)
}
