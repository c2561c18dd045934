//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::padlock::Padlock;

/// Status response: one `[label, value]` pair per channel
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub pink: Padlock,
    pub blue: Padlock,
    pub magenta: Padlock,
}

impl StatusResponse {
    /// Build from padlocks in channel order (pink, blue, magenta)
    pub fn from_padlocks([pink, blue, magenta]: [Padlock; 3]) -> Self {
        Self {
            pink,
            blue,
            magenta,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

impl HealthResponse {
    pub fn ok(uptime: String, port: u16, host: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
            port,
            host,
        }
    }
}
