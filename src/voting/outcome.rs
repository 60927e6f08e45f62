use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::score::Team;

/// The player the group voted out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub player: PlayerId,
    pub name: String,
    /// Votes the accused received.
    pub votes: u32,
    /// Another player had the same number of votes.
    pub tied: bool,
}

/// An impostor unmasked on the results screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedImpostor {
    pub id: PlayerId,
    pub name: String,
}

/// Summary shown when a round ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// `None` when the round ended without a vote.
    pub accused: Option<Accusation>,
    pub impostor_caught: bool,
    /// `None` until a winner is known (simple round end before a declaration).
    pub winner: Option<Team>,
    pub impostors: Vec<RevealedImpostor>,
    pub category: String,
    pub secret: String,
}

impl RoundOutcome {
    /// No accusation, no winner, nothing unmasked.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            accused: None,
            impostor_caught: false,
            winner: None,
            impostors: Vec::new(),
            category: String::new(),
            secret: String::new(),
        }
    }
}
