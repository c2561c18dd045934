//! State management module
//!
//! This module contains the persisted timer state and the shared application
//! state handed to every handler.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use timer_state::TimerState;
