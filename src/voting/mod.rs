//! Vote collection and resolution.
//!
//! Votes are first-vote-wins: once a voter's choice is recorded it is
//! never revised. Resolution picks the most-voted player with a stable
//! ordering so the same votes always accuse the same player under
//! [`TieBreak::RosterOrder`](crate::core::TieBreak).

mod outcome;
mod tally;

pub use outcome::{Accusation, RevealedImpostor, RoundOutcome};
pub use tally::{check_vote, is_complete, most_voted, received_counts};
