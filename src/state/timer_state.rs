//! Persisted timer state

use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;

/// The single global timer: when it was started, if at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub start: Option<Timestamp>,
}

impl TimerState {
    /// A stopped timer
    pub fn new() -> Self {
        Self { start: None }
    }

    /// A timer started at `start`
    pub fn started_at(start: Timestamp) -> Self {
        Self { start: Some(start) }
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }
}
