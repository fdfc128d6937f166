//! Participant entity - a player or spectator attached to a table
//!
//! Carries the chat typing indicator. The fields are guarded by the owning
//! table's lock and are only meaningful while the participant is seated.

use std::time::Duration;
use tokio::time::Instant;

use crate::value_objects::UserId;

/// A player or spectator seated at a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: UserId,
    /// Display name used in typing notifications
    pub name: String,
    /// Whether the participant has a live connection to the table
    pub present: bool,
    /// Whether others currently see this participant as typing
    pub typing: bool,
    /// Instant of the most recent keystroke
    pub last_typed: Option<Instant>,
}

impl Participant {
    /// Create a new participant (present, not typing)
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            present: true,
            typing: false,
            last_typed: None,
        }
    }

    /// Record a keystroke at `now`
    ///
    /// Returns `true` if the participant was idle and is now typing.
    pub fn record_keystroke(&mut self, now: Instant) -> bool {
        self.last_typed = Some(now);
        if self.typing {
            return false;
        }
        self.typing = true;
        true
    }

    /// Time elapsed between the last keystroke and `now`
    ///
    /// A participant that never typed is treated as quiet for `Duration::MAX`.
    pub fn quiet_for(&self, now: Instant) -> Duration {
        self.last_typed
            .map_or(Duration::MAX, |last| now.saturating_duration_since(last))
    }

    /// Clear the typing flag if no keystroke arrived during the last `delay`
    ///
    /// Returns `true` if the flag went from typing to idle.
    pub fn stop_typing_if_quiet(&mut self, now: Instant, delay: Duration) -> bool {
        if !self.typing || self.quiet_for(now) < delay {
            return false;
        }
        self.typing = false;
        true
    }
}
