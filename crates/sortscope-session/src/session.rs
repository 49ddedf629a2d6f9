#![forbid(unsafe_code)]

//! One visualizer session: sequence ownership and the run state machine.
//!
//! # Life cycle
//!
//! ```text
//! Idle ──start──▶ Running ──completes──▶ Completed ─┐
//!   ▲                │                              │
//!   │                └──stop──▶ Cancelled ──────────┤
//!   └────────────── regenerate / next start ◀───────┘
//! ```
//!
//! At most one run is active per session. `start` and regeneration are
//! rejected with `AlreadyRunning` while a run is active, and undelivered
//! trace from a finished run is discarded before new state is produced,
//! so trace events of different runs never interleave. Speed changes land
//! on the active run at its next step; a size change made while running
//! is recorded and applies at the next regeneration. The algorithm runs
//! on a worker thread; the session thread stays free to serve control
//! calls, counter reads, and snapshots.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use sortscope_engine::cancel::CancelToken;
use sortscope_engine::config::{MAX_SPEED, MIN_SPEED};
use sortscope_engine::trace::HighlightKind;
use sortscope_engine::{
    AlgorithmId, EngineConfig, EngineError, PacingCell, Rng, RunCounters, RunStatus,
    SequenceStore, TraceChannel, TraceEvent,
};
use tracing::{debug, warn};

/// An independent sorting-visualizer engine instance.
pub struct EngineSession {
    config: EngineConfig,
    store: SequenceStore,
    rng: Rng,
    counters: Arc<RunCounters>,
    status: Arc<Mutex<RunStatus>>,
    cancel: Option<CancelToken>,
    worker: Option<JoinHandle<Result<(), EngineError>>>,
    last_outcome: Option<Result<(), EngineError>>,
    events_tx: mpsc::Sender<TraceEvent>,
    events_rx: mpsc::Receiver<TraceEvent>,
    algorithm: AlgorithmId,
    array_size: usize,
    speed: u32,
    pacing: PacingCell,
}

impl EngineSession {
    /// Create a session with a clock-seeded generator and an initial
    /// sequence of the configured default size.
    pub fn new(config: EngineConfig) -> Self {
        Self::build(config, Rng::new())
    }

    /// Create a session with a deterministic generator (reproducible
    /// sequences for tests).
    pub fn with_seed(config: EngineConfig, seed: u32) -> Self {
        Self::build(config, Rng::with_seed(seed))
    }

    fn build(config: EngineConfig, mut rng: Rng) -> Self {
        let array_size = config.default_array_size.min(config.max_array_size);
        let values = generate(&mut rng, &config, array_size);
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            store: SequenceStore::new(values),
            rng,
            counters: Arc::new(RunCounters::new()),
            status: Arc::new(Mutex::new(RunStatus::Idle)),
            cancel: None,
            worker: None,
            last_outcome: None,
            events_tx,
            events_rx,
            algorithm: AlgorithmId::Bubble,
            array_size,
            speed: 50,
            pacing: PacingCell::new(config.pacing_for_speed(50)),
            config,
        }
    }

    // -----------------------------------------------------------------
    // Renderer boundary
    // -----------------------------------------------------------------

    /// The trace-event subscription. One consumer per session; events
    /// arrive in exact emission order.
    pub fn events(&self) -> &mpsc::Receiver<TraceEvent> {
        &self.events_rx
    }

    /// Copy of the current sequence (initial render, post-regenerate).
    pub fn snapshot(&self) -> Vec<u32> {
        self.store.snapshot()
    }

    /// Comparisons so far in the current (or last) run.
    pub fn comparisons(&self) -> u64 {
        self.counters.comparisons()
    }

    /// Swaps so far in the current (or last) run.
    pub fn swaps(&self) -> u64 {
        self.counters.swaps()
    }

    /// Current run status.
    pub fn status(&self) -> RunStatus {
        *self.status.lock().unwrap()
    }

    // -----------------------------------------------------------------
    // Controls boundary
    // -----------------------------------------------------------------

    /// Selected algorithm; takes effect at the next `start`.
    pub fn select_algorithm(&mut self, id: AlgorithmId) {
        self.algorithm = id;
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Playback speed level in 1..=100 (clamped); higher is faster. The
    /// pacing delay is `(101 - level)` milliseconds. An active run picks
    /// the new delay up at its next step.
    pub fn set_speed(&mut self, level: u32) {
        self.speed = level.clamp(MIN_SPEED, MAX_SPEED);
        self.pacing.set(self.config.pacing_for_speed(self.speed));
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Resize and regenerate the sequence. Sizes above the configured cap
    /// are clamped (slider semantics). While a run is active the new size
    /// is still recorded — it applies at the next regeneration — but the
    /// regeneration itself is rejected with `AlreadyRunning`.
    pub fn set_array_size(&mut self, size: usize) -> Result<(), EngineError> {
        self.array_size = size.min(self.config.max_array_size);
        self.reap();
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        self.regenerate()
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    /// Replace the sequence with fresh random values of the current size
    /// and reset counters and status to Idle.
    pub fn regenerate(&mut self) -> Result<(), EngineError> {
        self.reap();
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        self.drain_stale_events();
        let values = generate(&mut self.rng, &self.config, self.array_size);
        self.store.replace(values);
        self.counters.reset();
        *self.status.lock().unwrap() = RunStatus::Idle;
        self.last_outcome = None;
        debug!(size = self.array_size, "sequence regenerated");
        Ok(())
    }

    /// Start a run of the selected algorithm.
    ///
    /// Rejected with `AlreadyRunning` while a run is active. Rejected with
    /// `InvalidInput`, synchronously and without touching any state, when
    /// a range-dependent algorithm faces an empty sequence.
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.reap();
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        if self.algorithm.requires_value_range() && self.store.is_empty() {
            return Err(EngineError::InvalidInput(
                "cannot derive a value range from an empty sequence",
            ));
        }

        self.drain_stale_events();
        self.counters.reset();
        let token = CancelToken::new();
        self.cancel = Some(token.clone());
        *self.status.lock().unwrap() = RunStatus::Running;
        self.last_outcome = None;

        let sweep_delay = self.config.sweep_delay;
        let algorithm = self.algorithm;
        let status = Arc::clone(&self.status);
        let mut channel = TraceChannel::new(
            self.store.clone(),
            self.events_tx.clone(),
            Arc::clone(&self.counters),
            token,
            self.pacing.clone(),
        );

        debug!(
            algorithm = %algorithm,
            n = self.store.len(),
            pacing = ?self.pacing.get(),
            "run started"
        );

        self.worker = Some(thread::spawn(move || {
            let outcome = algorithm
                .run(&mut channel)
                .and_then(|()| sorted_sweep(&mut channel, sweep_delay));

            let terminal = match &outcome {
                Ok(()) => RunStatus::Completed,
                Err(EngineError::Cancelled) => RunStatus::Cancelled,
                Err(_) => RunStatus::Idle,
            };
            *status.lock().unwrap() = terminal;

            match &outcome {
                Ok(()) => debug!(algorithm = %algorithm, "run completed"),
                Err(EngineError::Cancelled) => debug!(algorithm = %algorithm, "run cancelled"),
                Err(e) => warn!(algorithm = %algorithm, error = %e, "run failed"),
            }
            outcome
        }));
        Ok(())
    }

    /// Request cancellation of the active run. No effect when idle.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(token) = &self.cancel {
            debug!(algorithm = %self.algorithm, "stop requested");
            token.cancel();
        }
    }

    /// Block until the active run (if any) reaches its terminal state.
    ///
    /// Cancellation is a normal terminal state, not an error; the status
    /// distinguishes `Completed` from `Cancelled`. Any other run failure
    /// is returned.
    pub fn wait(&mut self) -> Result<(), EngineError> {
        if let Some(handle) = self.worker.take() {
            let outcome = handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            self.last_outcome = Some(outcome);
        }
        match &self.last_outcome {
            Some(Err(EngineError::Cancelled)) | Some(Ok(())) | None => Ok(()),
            Some(Err(e)) => Err(e.clone()),
        }
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn is_running(&self) -> bool {
        self.status() == RunStatus::Running
    }

    /// Discard undelivered trace from a finished run so it cannot leak
    /// into the next one's event stream.
    fn drain_stale_events(&self) {
        let stale = self.events_rx.try_iter().count();
        if stale > 0 {
            debug!(stale, "discarded undelivered trace events");
        }
    }

    /// Join a worker whose run has already reached a terminal state, so a
    /// finished-but-unjoined thread never blocks the next control call.
    fn reap(&mut self) {
        if self.worker.as_ref().is_some_and(|h| h.is_finished())
            && let Some(handle) = self.worker.take()
        {
            let outcome = handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            self.last_outcome = Some(outcome);
        }
    }
}

impl Drop for EngineSession {
    fn drop(&mut self) {
        // Let a still-running worker wind down promptly; do not join here.
        if let Some(token) = &self.cancel {
            token.cancel();
        }
    }
}

fn generate(rng: &mut Rng, config: &EngineConfig, size: usize) -> Vec<u32> {
    (0..size)
        .map(|_| rng.gen_range(config.min_value, config.max_value))
        .collect()
}

/// Terminal pass marking every index sorted, at the sweep delay. Itself a
/// chain of suspension points, so a late `stop` still lands.
fn sorted_sweep(channel: &mut TraceChannel, delay: Duration) -> Result<(), EngineError> {
    channel.set_pacing(delay);
    for i in 0..channel.len() {
        channel.highlight(i, HighlightKind::Sorted)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> EngineConfig {
        // Sub-millisecond pacing is not reachable through the speed dial;
        // tests shrink the sweep instead and keep arrays small.
        EngineConfig::default()
            .with_size_limits(8, 150)
            .with_sweep_delay(Duration::ZERO)
    }

    #[test]
    fn new_session_is_idle_with_a_generated_sequence() {
        let session = EngineSession::with_seed(fast_config(), 1);
        assert_eq!(session.status(), RunStatus::Idle);
        assert_eq!(session.snapshot().len(), 8);
        assert_eq!(session.comparisons(), 0);
        assert_eq!(session.swaps(), 0);
    }

    #[test]
    fn seeded_sessions_reproduce_sequences() {
        let a = EngineSession::with_seed(fast_config(), 9);
        let b = EngineSession::with_seed(fast_config(), 9);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn generated_values_respect_the_configured_range() {
        let session = EngineSession::with_seed(fast_config(), 3);
        assert!(session.snapshot().iter().all(|v| (10..=309).contains(v)));
    }

    #[test]
    fn set_array_size_clamps_to_the_cap() {
        let mut session = EngineSession::with_seed(fast_config(), 2);
        session.set_array_size(10_000).unwrap();
        assert_eq!(session.array_size(), 150);
        assert_eq!(session.snapshot().len(), 150);
    }

    #[test]
    fn speed_is_clamped_into_range() {
        let mut session = EngineSession::with_seed(fast_config(), 2);
        session.set_speed(0);
        assert_eq!(session.speed(), 1);
        session.set_speed(7_000);
        assert_eq!(session.speed(), 100);
    }

    #[test]
    fn stop_when_idle_is_a_no_op() {
        let mut session = EngineSession::with_seed(fast_config(), 2);
        session.stop();
        assert_eq!(session.status(), RunStatus::Idle);
    }
}
