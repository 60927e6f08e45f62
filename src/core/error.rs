//! Error type for session operations.
//!
//! Every variant is an expected, caller-recoverable condition produced by
//! UI sequencing. A failed operation leaves the session untouched.

use super::phase::Phase;
use super::player::PlayerId;

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The roster already holds the variant's maximum number of players.
    #[error("roster is full ({max} players)")]
    RosterFull { max: usize },

    /// Not enough players to start a round.
    #[error("need at least {min} players, have {actual}")]
    RosterTooSmall { min: usize, actual: usize },

    /// Player name is empty after trimming.
    #[error("player name is empty")]
    EmptyName,

    /// No player with this id is in the roster.
    #[error("{0} is not in the roster")]
    UnknownPlayer(PlayerId),

    /// The operation is not allowed in the current phase.
    #[error("cannot {operation} during {phase}")]
    InvalidPhaseTransition {
        phase: Phase,
        operation: &'static str,
    },

    /// The voter already cast a vote this round.
    #[error("{0} has already voted")]
    DuplicateVote(PlayerId),

    /// Self-votes are disabled by the voting rules.
    #[error("{0} cannot vote for themselves")]
    SelfVote(PlayerId),

    /// The settings would leave no category selected.
    #[error("at least one category must stay selected")]
    EmptyCategorySelection,

    /// The category is not in the content table.
    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    /// None of the selected categories has any entries.
    #[error("selected categories have no entries")]
    NoContent,

    /// The variant policy cannot produce a playable round.
    #[error("invalid variant policy: {0}")]
    InvalidPolicy(&'static str),

    /// A winner was already recorded for this round.
    #[error("round {0} already has a winner")]
    RoundAlreadyDecided(u32),

    /// The current drawer already committed a line this drawing round.
    #[error("{0} already drew a line this round")]
    LineAlreadyDrawn(PlayerId),
}

/// Result alias for session operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::RosterFull { max: 10 }.to_string(),
            "roster is full (10 players)"
        );
        assert_eq!(
            EngineError::RosterTooSmall { min: 3, actual: 2 }.to_string(),
            "need at least 3 players, have 2"
        );
        assert_eq!(
            EngineError::InvalidPhaseTransition {
                phase: Phase::Lobby,
                operation: "cast a vote",
            }
            .to_string(),
            "cannot cast a vote during Lobby"
        );
        assert_eq!(
            EngineError::DuplicateVote(PlayerId::new(2)).to_string(),
            "Player 2 has already voted"
        );
    }
}
