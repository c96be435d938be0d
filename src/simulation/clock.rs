//! Monotonic elapsed-seconds source
//!
//! The simulation consumes time as plain `f64` seconds so hosts can drive
//! it from wall-clock or virtual time alike. `MonotonicClock` is the
//! wall-clock implementation used by the interactive viewer; the fixed-tick
//! runner and the tests synthesize their own timestamps instead.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start counting from now.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds elapsed since `start`, never decreasing.
    pub fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
