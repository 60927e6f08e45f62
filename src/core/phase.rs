//! Session phases.
//!
//! The phase set is closed and shared by both variants. A variant only
//! visits the subset its [`VariantPolicy`](super::VariantPolicy) enables:
//!
//! ```text
//! word:    Lobby → Pass → Reveal → LockScreen → … → Discussion → Voting → Results
//! drawing: Lobby → Pass → Reveal → … → DrawingPass → Drawing → … → Gallery
//!                → Discussion → Voting → Results
//! ```
//!
//! `Results` and `SimpleRoundEnd` loop back to `Pass` (next round) or to
//! `Lobby`.

use serde::{Deserialize, Serialize};

/// The current phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Roster and settings are editable.
    Lobby,
    /// "Hand the device to X" screen before a reveal.
    Pass,
    /// The current player sees their role card.
    Reveal,
    /// Word variant: look-away buffer between one reveal and the next pass.
    LockScreen,
    /// Drawing variant: "hand the device to X" before a drawing turn.
    DrawingPass,
    /// Drawing variant: the current player is drawing.
    Drawing,
    /// Drawing variant: all lines are shown together.
    Gallery,
    Discussion,
    Voting,
    Results,
    /// Round ended without a formal vote.
    SimpleRoundEnd,
}

impl Phase {
    /// Returns `true` while a round is in progress (roles assigned).
    #[must_use]
    pub fn is_round_active(self) -> bool {
        !matches!(self, Self::Lobby)
    }

    /// Returns `true` for the phases that end a round.
    #[must_use]
    pub fn is_round_over(self) -> bool {
        matches!(self, Self::Results | Self::SimpleRoundEnd)
    }

    /// Transitions that carry no side effects beyond the phase change.
    ///
    /// Everything else (starting a round, rotating players, resolving the
    /// vote) goes through a dedicated session operation.
    #[must_use]
    pub fn can_set_directly(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pass, Self::Reveal)
                | (Self::DrawingPass, Self::Drawing)
                | (Self::Gallery, Self::Discussion)
                | (Self::Discussion, Self::Voting)
                | (Self::Discussion, Self::SimpleRoundEnd)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lobby => "Lobby",
            Self::Pass => "Pass",
            Self::Reveal => "Reveal",
            Self::LockScreen => "LockScreen",
            Self::DrawingPass => "DrawingPass",
            Self::Drawing => "Drawing",
            Self::Gallery => "Gallery",
            Self::Discussion => "Discussion",
            Self::Voting => "Voting",
            Self::Results => "Results",
            Self::SimpleRoundEnd => "SimpleRoundEnd",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_active() {
        assert!(!Phase::Lobby.is_round_active());
        assert!(Phase::Pass.is_round_active());
        assert!(Phase::Results.is_round_active());
    }

    #[test]
    fn test_round_over() {
        assert!(Phase::Results.is_round_over());
        assert!(Phase::SimpleRoundEnd.is_round_over());
        assert!(!Phase::Voting.is_round_over());
    }

    #[test]
    fn test_direct_transitions() {
        assert!(Phase::Pass.can_set_directly(Phase::Reveal));
        assert!(Phase::Discussion.can_set_directly(Phase::Voting));
        assert!(Phase::Gallery.can_set_directly(Phase::Discussion));

        assert!(!Phase::Lobby.can_set_directly(Phase::Pass));
        assert!(!Phase::Voting.can_set_directly(Phase::Results));
        assert!(!Phase::Reveal.can_set_directly(Phase::Pass));
        assert!(!Phase::Results.can_set_directly(Phase::Lobby));
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::LockScreen.to_string(), "LockScreen");
        assert_eq!(Phase::SimpleRoundEnd.to_string(), "SimpleRoundEnd");
    }
}
