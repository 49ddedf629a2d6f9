#![forbid(unsafe_code)]

//! Error taxonomy for the sorting engine.
//!
//! # Failure Modes
//!
//! | Variant | Cause | Behavior |
//! |---------|-------|----------|
//! | `Cancelled` | Stop requested during a run | Terminal state, not a user-facing error |
//! | `InvalidInput` | Range-dependent sort over an empty sequence | Run rejected, no partial sort |
//! | `IndexOutOfBounds` | Out-of-range store access | Programming error, fatal to the run |
//! | `AlreadyRunning` | Start/regenerate while a run is active | Rejected synchronously, no state mutated |

use std::fmt;

/// Errors that can occur while driving a sorting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The run was aborted via the cancellation token.
    ///
    /// Surfaced as the `Cancelled` terminal status at the controller
    /// boundary, never as an unhandled failure.
    Cancelled,
    /// The input sequence cannot be sorted by the selected algorithm.
    InvalidInput(&'static str),
    /// Out-of-range access to the sequence store.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of access.
        len: usize,
    },
    /// A run is already active; start and regenerate are rejected.
    AlreadyRunning,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Cancelled => write!(f, "run cancelled"),
            EngineError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            EngineError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
            EngineError::AlreadyRunning => write!(f, "a run is already active"),
        }
    }
}

impl std::error::Error for EngineError {}
