//! Padlock evaluation
//!
//! A padlock turns the time elapsed since the timer was started into one of
//! three states: stopped, counting down, or unlocked with its secret revealed.

pub mod channel;

pub use channel::{Channel, BLUE, CHANNELS, MAGENTA, PINK};

use serde::{ser::SerializeTuple, Serialize, Serializer};

use crate::clock::Timestamp;

/// Label reported alongside each padlock value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Stopped,
    Started,
    Secret,
}

/// State of a single padlock at a given instant
///
/// Serializes as a two-element array `[label, value]`, e.g. `["started", 8.2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padlock {
    /// No timer running; carries the full delay in seconds
    Stopped { delay: u64 },
    /// Timer running; carries the seconds left before the secret is revealed
    Started { remaining: f64 },
    /// Delay elapsed; carries the revealed secret
    Secret { secret: u64 },
}

impl Padlock {
    pub fn label(&self) -> Label {
        match self {
            Padlock::Stopped { .. } => Label::Stopped,
            Padlock::Started { .. } => Label::Started,
            Padlock::Secret { .. } => Label::Secret,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, Padlock::Secret { .. })
    }
}

impl Serialize for Padlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.label())?;
        match self {
            Padlock::Stopped { delay } => tuple.serialize_element(delay)?,
            Padlock::Started { remaining } => tuple.serialize_element(remaining)?,
            Padlock::Secret { secret } => tuple.serialize_element(secret)?,
        }
        tuple.end()
    }
}

/// Evaluate a padlock with the given `delay` (seconds) and `secret` at time `now`.
///
/// Elapsed and remaining times are raw floating-point seconds, neither
/// clamped nor rounded.
pub fn evaluate(start: Option<Timestamp>, now: Timestamp, delay: u64, secret: u64) -> Padlock {
    let Some(start) = start else {
        return Padlock::Stopped { delay };
    };

    let elapsed = now - start;
    let delay_secs = delay as f64;
    if elapsed >= delay_secs {
        Padlock::Secret { secret }
    } else {
        Padlock::Started {
            remaining: delay_secs - elapsed,
        }
    }
}
