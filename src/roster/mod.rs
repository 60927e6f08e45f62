//! Roster editing.
//!
//! Players join and leave only in the lobby; the session checks the phase
//! before calling in here. Colors follow roster position, so removing a
//! player recolors everyone behind them.

mod manager;

pub use manager::{add_player, recolor, remove_player};
