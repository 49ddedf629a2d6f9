#![forbid(unsafe_code)]

//! Trace events, live counters, and run status.
//!
//! A [`TraceEvent`] is one observable primitive operation of a run. The
//! emission order across one run is the animation timeline: consumers must
//! never reorder events, and the engine never batches in a way that would
//! change relative order.

use std::sync::atomic::{AtomicU64, Ordering};

/// Why an index is being highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// Index is being inspected by a comparison or scan.
    Comparing,
    /// Index is being moved or staged for placement.
    Swapping,
    /// Index holds the active partition pivot.
    Pivot,
    /// Index is in its final position (terminal sweep).
    Sorted,
}

/// One observable step of a run, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Elements at `i` and `j` were compared; `descending` is the result
    /// of `sequence[i] > sequence[j]` at the time of the comparison.
    Compare {
        i: usize,
        j: usize,
        descending: bool,
    },
    /// Elements at `i` and `j` were exchanged.
    Swap { i: usize, j: usize },
    /// `value` was written at `index`.
    Write { index: usize, value: u32 },
    /// Marker for the renderer; carries no mutation.
    Highlight { index: usize, kind: HighlightKind },
}

/// Live comparison/swap counters for one run.
///
/// Monotonically non-decreasing within a run; updated before the matching
/// event is emitted so a status display polling the counters never lags
/// the event stream.
#[derive(Debug, Default)]
pub struct RunCounters {
    comparisons: AtomicU64,
    swaps: AtomicU64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparisons so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Swaps (including counted placements) so far.
    pub fn swaps(&self) -> u64 {
        self.swaps.load(Ordering::Relaxed)
    }

    pub(crate) fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_swap(&self) {
        self.swaps.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero both counters (next run start).
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
        self.swaps.store(0, Ordering::Relaxed);
    }
}

/// Life cycle of a run: Idle → Running → {Completed, Cancelled} → Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// No run active; the sequence is whatever the last run left behind.
    #[default]
    Idle,
    /// An algorithm is mutating the sequence.
    Running,
    /// The run was stopped via the cancellation token.
    Cancelled,
    /// The run sorted the sequence and finished its terminal sweep.
    Completed,
}
