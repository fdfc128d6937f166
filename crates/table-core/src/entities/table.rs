//! Table entity - a single multiplayer session instance
//!
//! A table owns its roster (players and spectators) behind a single lock.
//! Every read or write of a participant's typing fields goes through that
//! lock. The numeric `TableId` may be reused by a later table, so each table
//! also carries an `instance` uuid that identifies this particular instance.

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use uuid::Uuid;

use super::Participant;
use crate::error::DomainError;
use crate::value_objects::{TableId, UserId};

/// Where a user sits at a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Neither a player nor a spectator
    None,
    /// Index into `TableState::players`
    Player(usize),
    /// Index into `TableState::spectators`
    Spectator(usize),
}

impl Seat {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Mutable roster of a table, guarded by the table lock
#[derive(Debug, Default)]
pub struct TableState {
    pub players: Vec<Participant>,
    pub spectators: Vec<Participant>,
}

impl TableState {
    /// Index of the user in the player list
    pub fn player_index(&self, user_id: UserId) -> Option<usize> {
        self.players.iter().position(|p| p.user_id == user_id)
    }

    /// Index of the user in the spectator list
    pub fn spectator_index(&self, user_id: UserId) -> Option<usize> {
        self.spectators.iter().position(|sp| sp.user_id == user_id)
    }

    /// Classify a user at this table
    ///
    /// A user can hold a player seat from the original game and a spectator
    /// seat in its shared replay at the same time; the spectator seat wins.
    pub fn classify(&self, user_id: UserId) -> Seat {
        if let Some(index) = self.spectator_index(user_id) {
            Seat::Spectator(index)
        } else if let Some(index) = self.player_index(user_id) {
            Seat::Player(index)
        } else {
            Seat::None
        }
    }

    pub fn is_player_or_spectating(&self, user_id: UserId) -> bool {
        !self.classify(user_id).is_none()
    }

    /// Whether the user is currently viewing the table as a spectator
    pub fn is_actively_spectating(&self, user_id: UserId) -> bool {
        self.spectator_index(user_id).is_some()
    }

    /// Get the participant in a seat
    pub fn participant(&self, seat: Seat) -> Option<&Participant> {
        match seat {
            Seat::None => None,
            Seat::Player(i) => self.players.get(i),
            Seat::Spectator(i) => self.spectators.get(i),
        }
    }

    /// Get the participant in a seat mutably
    pub fn participant_mut(&mut self, seat: Seat) -> Option<&mut Participant> {
        match seat {
            Seat::None => None,
            Seat::Player(i) => self.players.get_mut(i),
            Seat::Spectator(i) => self.spectators.get_mut(i),
        }
    }

    /// Seat a player, returning the new seat
    pub fn add_player(&mut self, participant: Participant) -> Seat {
        self.players.push(participant);
        Seat::Player(self.players.len() - 1)
    }

    /// Seat a spectator, returning the new seat
    pub fn add_spectator(&mut self, participant: Participant) -> Seat {
        self.spectators.push(participant);
        Seat::Spectator(self.spectators.len() - 1)
    }

    /// Remove a player from the table
    pub fn remove_player(&mut self, user_id: UserId) -> Option<Participant> {
        let index = self.player_index(user_id)?;
        Some(self.players.remove(index))
    }

    /// Remove a spectator from the table
    pub fn remove_spectator(&mut self, user_id: UserId) -> Option<Participant> {
        let index = self.spectator_index(user_id)?;
        Some(self.spectators.remove(index))
    }

    /// Names of everyone currently shown as typing
    pub fn typing_names(&self) -> Vec<&str> {
        self.players
            .iter()
            .chain(self.spectators.iter())
            .filter(|p| p.typing)
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// A multiplayer table
#[derive(Debug)]
pub struct Table {
    id: TableId,
    instance: Uuid,
    name: String,
    replay: bool,
    state: Mutex<TableState>,
}

impl Table {
    /// Create a new table with an empty roster
    pub fn new(id: TableId, name: impl Into<String>, replay: bool) -> Arc<Self> {
        Arc::new(Self {
            id,
            instance: Uuid::new_v4(),
            name: name.into(),
            replay,
            state: Mutex::new(TableState::default()),
        })
    }

    #[inline]
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Identity of this table instance
    #[inline]
    pub fn instance(&self) -> Uuid {
        self.instance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this table is a (shared) replay
    #[inline]
    pub fn is_replay(&self) -> bool {
        self.replay
    }

    /// Whether `other` is this exact table instance, not merely one with the same id
    pub fn is_same_instance(&self, other: &Table) -> bool {
        self.instance == other.instance
    }

    /// Acquire the table lock
    pub fn lock(&self) -> MutexGuard<'_, TableState> {
        self.state.lock()
    }

    /// Check that a user may take part in this table's chat
    ///
    /// The user must be a player or a spectator; at a replay they must also
    /// be actively spectating. Returns the user's seat on success.
    pub fn check_chat_eligibility(
        &self,
        state: &TableState,
        user_id: UserId,
    ) -> Result<Seat, DomainError> {
        let seat = state.classify(user_id);
        if seat.is_none() {
            return Err(DomainError::NotAtTable { table_id: self.id });
        }
        if self.replay && !state.is_actively_spectating(user_id) {
            return Err(DomainError::NotSpectatingReplay { table_id: self.id });
        }
        Ok(seat)
    }
}
