//! # pass-and-play
//!
//! Session engine for pass-and-play social-deduction games: one device is
//! handed around the table, every player privately sees a secret (or learns
//! they are an impostor), then the group discusses and votes.
//!
//! ## Design Principles
//!
//! 1. **One Machine, Two Variants**: the word and drawing games share a
//!    single phase machine. A `VariantPolicy` value carries the differences
//!    (player bounds, impostor table, lock screen, drawing loop).
//!
//! 2. **Explicit Ownership**: a `Session` owns its state. There are no
//!    globals, so several sessions can coexist in one process.
//!
//! 3. **Typed Rejection**: every operation returns a `Result`; a rejected
//!    call leaves the session exactly as it was.
//!
//! 4. **Deterministic Under Seed**: all randomness flows through `GameRng`,
//!    so a seeded session replays identically.
//!
//! ## Modules
//!
//! - `core`: Player IDs, phases, state, actions, RNG, settings, errors
//! - `content`: Category and secret tables
//! - `roster`: Adding and removing players in the lobby
//! - `assignment`: Secret draw, impostor selection, reveal cards
//! - `turns`: Pass-around and drawing-round rotation
//! - `voting`: Vote validation, tally, resolution
//! - `drawing`: Strokes and drawing-round state
//! - `score`: Round counter and win totals
//! - `session`: The session and its operations
//! - `variants`: Builders for word and drawing sessions

pub mod assignment;
pub mod content;
pub mod core;
pub mod drawing;
pub mod roster;
pub mod score;
pub mod session;
pub mod turns;
pub mod variants;
pub mod voting;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineError, EngineResult, GameRng, GameSettings, Phase, Player,
    PlayerId, SessionState, TieBreak, Variant, VariantPolicy, VotingRules,
};

pub use crate::content::{Category, ContentTable, SecretEntry};

pub use crate::assignment::RevealCard;

pub use crate::drawing::{Point, Stroke, StrokeInput};

pub use crate::voting::{Accusation, RoundOutcome};

pub use crate::score::{Scoreboard, Team};

pub use crate::session::{reduce, Applied, Session, TurnProgress};

pub use crate::variants::{DrawingGameBuilder, WordGameBuilder};
