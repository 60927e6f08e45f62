use serde::{Deserialize, Serialize};

/// Result of moving the cursor one player forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// The next player's index.
    Next(usize),
    /// Every player has had their turn.
    Exhausted,
}

/// Result of moving the cursor inside a multi-round loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundAdvance {
    /// Same round, next player.
    NextTurn(usize),
    /// Roster exhausted, a new round starts at index 0.
    NextRound(u32),
    /// Last player of the last round finished.
    Complete,
}

/// Advance a cursor over a roster of `len` players.
///
/// ```
/// use pass_and_play::turns::{advance, Advance};
///
/// assert_eq!(advance(0, 3), Advance::Next(1));
/// assert_eq!(advance(2, 3), Advance::Exhausted);
/// ```
#[must_use]
pub fn advance(current: usize, len: usize) -> Advance {
    let next = current + 1;
    if next < len {
        Advance::Next(next)
    } else {
        Advance::Exhausted
    }
}

/// Advance a cursor through `max_rounds` passes over the roster.
///
/// `round` is 1-based.
#[must_use]
pub fn advance_round(current: usize, round: u32, max_rounds: u32, len: usize) -> RoundAdvance {
    match advance(current, len) {
        Advance::Next(next) => RoundAdvance::NextTurn(next),
        Advance::Exhausted if round < max_rounds => RoundAdvance::NextRound(round + 1),
        Advance::Exhausted => RoundAdvance::Complete,
    }
}
