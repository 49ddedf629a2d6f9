#![forbid(unsafe_code)]

//! Cooperative cancellation for a run.
//!
//! [`CancelToken`] is a condvar-backed flag whose [`pace`](CancelToken::pace)
//! call doubles as the pacing sleep at every suspension point: the wait
//! returns early the moment [`cancel`](CancelToken::cancel) fires, so a
//! stopped run never sits out the rest of its delay. Cancellation is
//! idempotent and irreversible within a run; the controller arms a fresh
//! token per run.

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Cloneable cooperative stop flag for one run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Request cancellation. Idempotent; wakes every paced waiter.
    pub fn cancel(&self) {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = lock.lock().unwrap();
        *cancelled = true;
        cvar.notify_all();
    }

    /// Sleep for `delay` or until cancelled, whichever comes first.
    ///
    /// Returns `true` if cancellation was observed. Loops on the condvar to
    /// absorb spurious wakeups. A zero delay degenerates to a plain flag
    /// check, which keeps headless test runs fast.
    pub fn pace(&self, delay: Duration) -> bool {
        if delay.is_zero() {
            return self.is_cancelled();
        }

        let (lock, cvar) = &*self.inner;
        let mut cancelled = lock.lock().unwrap();
        if *cancelled {
            return true;
        }

        let start = Instant::now();
        let mut remaining = delay;
        loop {
            let (guard, result) = cvar.wait_timeout(cancelled, remaining).unwrap();
            cancelled = guard;
            if *cancelled {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            let elapsed = start.elapsed();
            if elapsed >= delay {
                return false;
            }
            remaining = delay - elapsed;
        }
    }
}
