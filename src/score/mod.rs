//! Round counter and cumulative win totals.
//!
//! The scoreboard outlives individual rounds: `next_round` and
//! `back_to_lobby` keep it, only a full session reset clears it.

mod board;

pub use board::{Scoreboard, Team};
