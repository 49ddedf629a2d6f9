#![forbid(unsafe_code)]

//! Sortscope Session
//!
//! The run controller around `sortscope-engine`. An [`EngineSession`] is
//! an owned value (no process-wide singleton; sessions are independent,
//! which keeps them testable) that holds the sequence, drives one run at a
//! time on a worker thread, and exposes the three external boundaries:
//!
//! - **Controls**: `set_array_size`, `set_speed`, `select_algorithm`,
//!   `regenerate`, `start`, `stop`
//! - **Renderer**: the [`TraceEvent`] receiver, live counters, and
//!   sequence snapshots
//! - **Documentation**: [`describe`] re-exported from the engine
//!
//! [`TraceEvent`]: sortscope_engine::TraceEvent
//! [`describe`]: sortscope_engine::describe

pub mod session;

pub use session::EngineSession;

pub use sortscope_engine::{
    AlgorithmId, AlgorithmInfo, EngineConfig, EngineError, HighlightKind, RunStatus, TraceEvent,
    describe,
};
