//! In-memory timer store

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LoadError, StoreError, TimerStore};
use crate::state::TimerState;

/// Keeps the timer state in memory; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<TimerState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `state`
    pub fn with_state(state: TimerState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

#[async_trait]
impl TimerStore for MemoryStore {
    async fn load(&self) -> Result<TimerState, LoadError> {
        let state = self.state.lock().map_err(|e| {
            LoadError::Io(std::io::Error::other(format!("Failed to lock timer state: {}", e)))
        })?;
        (*state).ok_or(LoadError::Missing)
    }

    async fn save(&self, state: &TimerState) -> Result<(), StoreError> {
        let mut stored = self.state.lock().map_err(|e| {
            StoreError::Io(std::io::Error::other(format!("Failed to lock timer state: {}", e)))
        })?;
        *stored = Some(*state);
        Ok(())
    }
}
