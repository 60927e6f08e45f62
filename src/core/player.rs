//! Player identification and per-player round data.
//!
//! ## PlayerId
//!
//! Opaque identifier handed out by the session when a player joins.
//! Ids are never reused within a session, so removing and re-adding a
//! player with the same name yields a different id.
//!
//! ## Player
//!
//! Roster entry plus the per-round flags (role, votes, drawing progress)
//! that are cleared between rounds.

use serde::{Deserialize, Serialize};

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player in the roster.
///
/// `is_impostor` is `None` between rounds and `Some(_)` while a round is
/// active. `votes`, `has_voted` and `has_drawn` only carry meaning during a
/// round and are reset whenever a new round starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar_color: String,
    pub drawing_color: String,
    pub is_impostor: Option<bool>,
    /// Votes received this round.
    pub votes: u32,
    pub has_voted: bool,
    /// Drawing variant: line finished for the current drawing round.
    pub has_drawn: bool,
}

impl Player {
    /// Create a player with no round data.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        avatar_color: impl Into<String>,
        drawing_color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_color: avatar_color.into(),
            drawing_color: drawing_color.into(),
            is_impostor: None,
            votes: 0,
            has_voted: false,
            has_drawn: false,
        }
    }

    /// Whether this player is an impostor in the active round.
    #[must_use]
    pub fn is_impostor(&self) -> bool {
        self.is_impostor == Some(true)
    }

    /// Set the role for a new round and reset per-round counters.
    pub fn begin_round(&mut self, impostor: bool) {
        self.is_impostor = Some(impostor);
        self.votes = 0;
        self.has_voted = false;
        self.has_drawn = false;
    }

    /// Drop every per-round field.
    pub fn clear_round(&mut self) {
        self.is_impostor = None;
        self.votes = 0;
        self.has_voted = false;
        self.has_drawn = false;
    }
}
