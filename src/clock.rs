//! Wall-clock abstraction
//!
//! Timestamps are fractional seconds since the Unix epoch.

use std::sync::Mutex;

use chrono::Utc;

/// Seconds since the Unix epoch, with sub-second precision.
pub type Timestamp = f64;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// Manually driven clock for simulating elapsed time
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `now`
    pub fn new(now: Timestamp) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Move the clock forward by `seconds`
    pub fn advance(&self, seconds: f64) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += seconds;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
