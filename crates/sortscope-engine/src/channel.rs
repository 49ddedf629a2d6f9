#![forbid(unsafe_code)]

//! The uniform instrumentation surface every algorithm runs against.
//!
//! [`TraceChannel`] bundles the sequence store, the event sender, the live
//! counters, the cancellation token, and the pacing delay. Every primitive
//! operation of every algorithm goes through one of its entry points; this
//! is what gives ten otherwise-independent algorithms a comparable
//! instrumentation signature.
//!
//! # Suspension protocol
//!
//! Each suspending entry point checks the token, updates counters, emits
//! exactly one event, then paces. The pacing wait returns early when the
//! token trips, and the entry point aborts with [`EngineError::Cancelled`].
//! Once cancellation has been observed, no further event is emitted: the
//! entry-of-call check guarantees it.
//!
//! # Entry points
//!
//! | Entry | Counter | Event | Used by |
//! |-------|---------|-------|---------|
//! | `compare(i, j)` | comparisons | `Compare` | all in-place comparisons |
//! | `note_compare()` | comparisons | none | merge's aux-value compares |
//! | `swap(i, j)` | swaps | `Swap` | exchange-based moves |
//! | `place(i, v)` | swaps | `Write` | counted placements (merge, bucket) |
//! | `write(i, v)` | none | `Write` | copy-back phases |
//! | `observe(i)` | comparisons | `Highlight` | tally/distribution scans |
//! | `stage(i)` | swaps | `Highlight` | aux output builds (counting, radix) |
//! | `highlight(i, kind)` | none | `Highlight` | pivot marker, sorted sweep |

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::errors::EngineError;
use crate::sequence::SequenceStore;
use crate::trace::{HighlightKind, RunCounters, TraceEvent};

/// Shared, live-adjustable pacing delay.
///
/// The controller keeps one handle and the running channel another; the
/// delay is re-read at every suspension point, so a speed change lands at
/// the very next step of an active run instead of waiting for the next
/// start.
#[derive(Debug, Clone, Default)]
pub struct PacingCell {
    millis: Arc<AtomicU64>,
}

impl PacingCell {
    pub fn new(delay: Duration) -> Self {
        let cell = Self::default();
        cell.set(delay);
        cell
    }

    /// Replace the delay; visible to every handle immediately.
    pub fn set(&self, delay: Duration) {
        self.millis.store(delay.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn get(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::Relaxed))
    }
}

/// Instrumented access to the sequence for one run.
pub struct TraceChannel {
    store: SequenceStore,
    events: mpsc::Sender<TraceEvent>,
    counters: Arc<RunCounters>,
    cancel: CancelToken,
    pacing: PacingCell,
}

impl TraceChannel {
    pub fn new(
        store: SequenceStore,
        events: mpsc::Sender<TraceEvent>,
        counters: Arc<RunCounters>,
        cancel: CancelToken,
        pacing: PacingCell,
    ) -> Self {
        Self {
            store,
            events,
            counters,
            cancel,
            pacing,
        }
    }

    /// Switch to a fixed delay, detaching from the shared cell (the
    /// terminal sweep paces at its own constant rate).
    pub fn set_pacing(&mut self, pacing: Duration) {
        self.pacing = PacingCell::new(pacing);
    }

    // -----------------------------------------------------------------
    // Non-suspending reads
    // -----------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, i: usize) -> Result<u32, EngineError> {
        self.store.get(i)
    }

    /// Copy of the current values, for aux-array phases.
    pub fn snapshot(&self) -> Vec<u32> {
        self.store.snapshot()
    }

    // -----------------------------------------------------------------
    // Suspending entry points
    // -----------------------------------------------------------------

    /// Compare the elements at `i` and `j`.
    ///
    /// Returns `sequence[i] > sequence[j]`, the ordering decision the
    /// caller branches on.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<bool, EngineError> {
        self.checkpoint()?;
        let descending = self.store.get(i)? > self.store.get(j)?;
        self.counters.record_comparison();
        self.emit(TraceEvent::Compare { i, j, descending });
        self.pace()?;
        Ok(descending)
    }

    /// Count a comparison made against copied-out values (merge). No event
    /// and no pacing of its own; the placement that follows provides both.
    pub fn note_compare(&self) {
        self.counters.record_comparison();
    }

    /// Exchange the elements at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), EngineError> {
        self.checkpoint()?;
        self.counters.record_swap();
        self.store.swap(i, j)?;
        self.emit(TraceEvent::Swap { i, j });
        self.pace()
    }

    /// Counted placement: write `value` at `index` and count it as a swap.
    pub fn place(&mut self, index: usize, value: u32) -> Result<(), EngineError> {
        self.checkpoint()?;
        self.counters.record_swap();
        self.store.set(index, value)?;
        self.emit(TraceEvent::Write { index, value });
        self.pace()
    }

    /// Uncounted copy-back write. Still paces so the animation stays
    /// continuous through copy phases.
    pub fn write(&mut self, index: usize, value: u32) -> Result<(), EngineError> {
        self.checkpoint()?;
        self.store.set(index, value)?;
        self.emit(TraceEvent::Write { index, value });
        self.pace()
    }

    /// Scan step over `i`: counts a comparison without an index pair
    /// (tally and distribution phases).
    pub fn observe(&mut self, i: usize) -> Result<(), EngineError> {
        self.checkpoint()?;
        self.counters.record_comparison();
        self.emit(TraceEvent::Highlight {
            index: i,
            kind: HighlightKind::Comparing,
        });
        self.pace()
    }

    /// Staging step over `i`: counts a swap while an element is placed
    /// into an auxiliary output array (not yet visible in the sequence).
    pub fn stage(&mut self, i: usize) -> Result<(), EngineError> {
        self.checkpoint()?;
        self.counters.record_swap();
        self.emit(TraceEvent::Highlight {
            index: i,
            kind: HighlightKind::Swapping,
        });
        self.pace()
    }

    /// Uncounted marker for the renderer.
    pub fn highlight(&mut self, index: usize, kind: HighlightKind) -> Result<(), EngineError> {
        self.checkpoint()?;
        self.emit(TraceEvent::Highlight { index, kind });
        self.pace()
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn checkpoint(&self) -> Result<(), EngineError> {
        if self.cancel.is_cancelled() {
            Err(EngineError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn emit(&self, event: TraceEvent) {
        // A disconnected consumer is not an error: the run continues
        // headless, counters and the sequence still advance.
        if self.events.send(event).is_err() {
            tracing::trace!(?event, "trace consumer disconnected");
        }
    }

    fn pace(&self) -> Result<(), EngineError> {
        if self.cancel.pace(self.pacing.get()) {
            Err(EngineError::Cancelled)
        } else {
            Ok(())
        }
    }
}
