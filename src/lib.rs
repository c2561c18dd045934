//! Padlock - a tiny HTTP server that reveals secrets once timers run out
//!
//! A single global timer is started and reset over HTTP. Three named
//! channels (pink, blue, magenta) each reveal a secret number once their
//! delay has elapsed since the timer was started.

pub mod api;
pub mod clock;
pub mod config;
pub mod padlock;
pub mod state;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use state::{AppState, TimerState};
pub use store::{JsonFileStore, MemoryStore, TimerStore};
pub use utils::signals::shutdown_signal;
