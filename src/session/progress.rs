use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::voting::RoundOutcome;

/// Where the device goes after a turn ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnProgress {
    /// The reveal is covered before the device is handed on.
    LockScreen,
    /// Hand the device to this player.
    NextPlayer(PlayerId),
    /// Every player drew; a new drawing round starts with the first player.
    NextDrawingRound(u32),
    /// The drawing loop starts with the first player.
    DrawingStarted,
    Discussion,
    Gallery,
    /// The turn had already ended.
    Unchanged,
}

/// What a successfully applied [`Action`](crate::core::Action) produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Applied {
    Done,
    PlayerAdded(PlayerId),
    Turn(TurnProgress),
    VoteCast { complete: bool },
    Resolved(RoundOutcome),
}
