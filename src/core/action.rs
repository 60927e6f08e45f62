//! Action representation: every session operation as data.
//!
//! Actions let a UI (or a test) drive a session through one entry point,
//! [`Session::apply`](crate::session::Session::apply), and let the session
//! keep a replayable history of what happened.

use serde::{Deserialize, Serialize};

use super::config::GameSettings;
use super::phase::Phase;
use super::player::PlayerId;
use crate::drawing::StrokeInput;
use crate::score::Team;

/// A session operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddPlayer { name: String },
    RemovePlayer { player: PlayerId },
    UpdateSettings { settings: GameSettings },
    ToggleCategory { category: String },
    SetImpostorCount { count: usize },
    StartGame,
    SetPhase { phase: Phase },
    NextPlayer,
    AddLine { stroke: StrokeInput },
    FinishDrawingTurn,
    StartDiscussion,
    StartVoting,
    CastVote { voter: PlayerId, target: PlayerId },
    Resolve,
    EndRoundWithoutVote,
    DeclareWinner { team: Team },
    NextRound,
    BackToLobby,
    ResetGame,
}

impl Action {
    /// Short name used in logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer { .. } => "add a player",
            Self::RemovePlayer { .. } => "remove a player",
            Self::UpdateSettings { .. } => "update settings",
            Self::ToggleCategory { .. } => "toggle a category",
            Self::SetImpostorCount { .. } => "set the impostor count",
            Self::StartGame => "start the game",
            Self::SetPhase { .. } => "set the phase",
            Self::NextPlayer => "advance to the next player",
            Self::AddLine { .. } => "add a line",
            Self::FinishDrawingTurn => "finish the drawing turn",
            Self::StartDiscussion => "start the discussion",
            Self::StartVoting => "start voting",
            Self::CastVote { .. } => "cast a vote",
            Self::Resolve => "resolve the vote",
            Self::EndRoundWithoutVote => "end the round without a vote",
            Self::DeclareWinner { .. } => "declare a winner",
            Self::NextRound => "start the next round",
            Self::BackToLobby => "return to the lobby",
            Self::ResetGame => "reset the game",
        }
    }
}

/// A recorded action with its position in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action: Action,

    /// Round number when the action was applied (0 before the first round).
    pub round: u32,

    /// Sequence number within the session (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: u32, sequence: u32) -> Self {
        Self {
            action,
            round,
            sequence,
        }
    }
}
