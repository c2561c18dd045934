//! Timer state persistence
//!
//! The timer is persisted through a [`TimerStore`], injected into the
//! application state so handlers never touch the filesystem directly.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::state::TimerState;

/// Reasons a stored timer state could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing has been stored yet
    #[error("no timer state stored yet")]
    Missing,
    #[error("failed to read timer state: {0}")]
    Io(#[source] std::io::Error),
    /// Stored data is not a valid timer state document
    #[error("stored timer state is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Reasons a timer state could not be saved
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write timer state: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize timer state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage backend for the single timer state
#[async_trait]
pub trait TimerStore: Send + Sync + std::fmt::Debug {
    async fn load(&self) -> Result<TimerState, LoadError>;

    /// Overwrite the stored state in full. Concurrent saves are not
    /// coordinated; the last write wins.
    async fn save(&self, state: &TimerState) -> Result<(), StoreError>;
}
