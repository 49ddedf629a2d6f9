#![forbid(unsafe_code)]

//! Sortscope Engine
//!
//! Instrumented sorting algorithms for step-by-step visualization. Ten
//! textbook algorithms run over a shared sequence store and report every
//! primitive operation (comparison, swap, write, highlight) as an ordered
//! stream of trace events, with cooperative cancellation at every pacing
//! step.
//!
//! # Key Components
//!
//! - [`SequenceStore`] - Shared mutable array of values under sort
//! - [`TraceChannel`] - Uniform instrumentation surface every algorithm
//!   routes its primitive operations through
//! - [`TraceEvent`] - One observable step of a run, in emission order
//! - [`CancelToken`] - Cooperative stop flag checked at each pacing step
//! - [`AlgorithmId`] - The ten algorithm identifiers and their dispatch
//! - [`describe`] - Display metadata (name, complexities) per algorithm
//!
//! # How it fits in the system
//!
//! This crate is the core: it knows nothing about rendering or controls.
//! `sortscope-session` owns the run lifecycle and hands each run a
//! [`TraceChannel`]; an external renderer consumes the event stream to
//! animate bar heights.

pub mod algorithms;
pub mod cancel;
pub mod catalog;
pub mod channel;
pub mod config;
pub mod errors;
pub mod rng;
pub mod sequence;
pub mod trace;

pub use algorithms::AlgorithmId;
pub use cancel::CancelToken;
pub use catalog::{AlgorithmInfo, describe};
pub use channel::{PacingCell, TraceChannel};
pub use config::EngineConfig;
pub use errors::EngineError;
pub use rng::Rng;
pub use sequence::SequenceStore;
pub use trace::{HighlightKind, RunCounters, RunStatus, TraceEvent};
