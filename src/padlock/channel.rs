//! Named padlock channels

use super::{evaluate, Padlock};
use crate::clock::Timestamp;

/// A named padlock with a fixed delay and secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub name: &'static str,
    /// Seconds after start before the secret is revealed
    pub delay: u64,
    pub secret: u64,
}

impl Channel {
    pub const fn new(name: &'static str, delay: u64, secret: u64) -> Self {
        Self { name, delay, secret }
    }

    pub fn evaluate(&self, start: Option<Timestamp>, now: Timestamp) -> Padlock {
        evaluate(start, now, self.delay, self.secret)
    }
}

pub const PINK: Channel = Channel::new("pink", 5, 135);
pub const BLUE: Channel = Channel::new("blue", 15, 117);
pub const MAGENTA: Channel = Channel::new("magenta", 30, 143);

/// All channels, shortest delay first
pub const CHANNELS: [Channel; 3] = [PINK, BLUE, MAGENTA];
