//! Turn rotation shared by the reveal pass-around and the drawing loop.
//!
//! Rotation never wraps: running off the end of the roster is reported to
//! the caller, which decides the next phase.

mod rotation;

pub use rotation::{advance, advance_round, Advance, RoundAdvance};
