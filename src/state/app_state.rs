//! Main application state management

use std::{sync::Arc, time::Instant};
use tracing::{debug, info, warn};

use super::TimerState;
use crate::{
    clock::{Clock, Timestamp},
    padlock::{Padlock, CHANNELS},
    store::{LoadError, StoreError, TimerStore},
};

/// Application state shared by all handlers
///
/// Owns the injected timer store and clock. The timer itself is never
/// cached: every read goes through the store.
#[derive(Debug)]
pub struct AppState {
    store: Arc<dyn TimerStore>,
    clock: Arc<dyn Clock>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn TimerStore>,
        clock: Arc<dyn Clock>,
        port: u16,
        host: String,
    ) -> Self {
        Self {
            store,
            clock,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Current wall-clock time according to the injected clock
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Load the stored timer, falling back to a stopped timer when nothing
    /// usable is stored. Never fails.
    pub async fn load_timer(&self) -> TimerState {
        match self.store.load().await {
            Ok(state) => {
                debug!("Loaded timer state: running={}", state.is_running());
                state
            }
            Err(LoadError::Missing) => {
                debug!("No timer state stored yet, treating timer as stopped");
                TimerState::new()
            }
            Err(e) => {
                warn!("{}, treating timer as stopped", e);
                TimerState::new()
            }
        }
    }

    /// Start (or restart) the timer from now
    pub async fn start_timer(&self) -> Result<TimerState, StoreError> {
        let now = self.now();
        let state = TimerState::started_at(now);
        self.store.save(&state).await?;
        info!("Timer started at {:.3} (running={})", now, state.is_running());
        Ok(state)
    }

    /// Stop the timer
    pub async fn reset_timer(&self) -> Result<TimerState, StoreError> {
        let state = TimerState::new();
        self.store.save(&state).await?;
        info!("Timer reset (running={})", state.is_running());
        Ok(state)
    }

    /// Evaluate every channel against the stored timer at a single instant.
    /// Results are in [`CHANNELS`] order.
    pub async fn padlocks(&self) -> [Padlock; 3] {
        let start = self.load_timer().await.start;
        let now = self.now();
        let padlocks = CHANNELS.map(|channel| channel.evaluate(start, now));
        debug!(
            "Evaluated padlocks: {} of {} unlocked",
            padlocks.iter().filter(|p| p.is_unlocked()).count(),
            padlocks.len()
        );
        padlocks
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
