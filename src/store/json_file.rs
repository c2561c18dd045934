//! JSON file backed timer store

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{LoadError, StoreError, TimerStore};
use crate::state::TimerState;

/// Stores the timer as a single JSON object, e.g. `{"start": 1700000000.5}`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TimerStore for JsonFileStore {
    async fn load(&self) -> Result<TimerState, LoadError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::Missing),
            Err(e) => return Err(LoadError::Io(e)),
        };

        serde_json::from_slice(&contents).map_err(LoadError::Corrupt)
    }

    async fn save(&self, state: &TimerState) -> Result<(), StoreError> {
        let json = serde_json::to_vec(state)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Wrote timer state to {}", self.path.display());
        Ok(())
    }
}
