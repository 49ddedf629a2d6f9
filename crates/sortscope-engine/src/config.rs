#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! Plain value struct with defaults matching the classic visualizer:
//! values in `[10, 309]`, fifty bars, speed 1..=100 mapped to a pacing
//! delay of `(101 - speed)` milliseconds, and a 50 ms terminal sweep.

use std::time::Duration;

/// Inclusive speed range accepted by [`EngineConfig::pacing_for_speed`].
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;

/// Tunables for a session. Pacing is best-effort, not a scheduling
/// contract.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Smallest generated value.
    pub min_value: u32,
    /// Largest generated value.
    pub max_value: u32,
    /// Sequence length used until the caller sets one.
    pub default_array_size: usize,
    /// Hard cap on sequence length; `set_array_size` clamps to it.
    pub max_array_size: usize,
    /// Delay between steps of the terminal sorted sweep.
    pub sweep_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_value: 10,
            max_value: 309,
            default_array_size: 50,
            max_array_size: 150,
            sweep_delay: Duration::from_millis(50),
        }
    }
}

impl EngineConfig {
    /// Override the generated value range.
    #[must_use]
    pub fn with_value_range(mut self, min: u32, max: u32) -> Self {
        self.min_value = min;
        self.max_value = max.max(min);
        self
    }

    /// Override the default and maximum sequence lengths.
    #[must_use]
    pub fn with_size_limits(mut self, default_size: usize, max_size: usize) -> Self {
        self.max_array_size = max_size.max(1);
        self.default_array_size = default_size.min(self.max_array_size);
        self
    }

    /// Override the terminal sweep delay.
    #[must_use]
    pub fn with_sweep_delay(mut self, delay: Duration) -> Self {
        self.sweep_delay = delay;
        self
    }

    /// Pacing delay for a speed level: level 1 is slowest (100 ms), level
    /// 100 is fastest (1 ms). Out-of-range levels are clamped.
    pub fn pacing_for_speed(&self, speed: u32) -> Duration {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        Duration::from_millis(u64::from(MAX_SPEED + 1 - speed))
    }
}
