//! Core engine types: players, phases, state, actions, RNG, configuration,
//! errors.
//!
//! These are shared by both game variants. Variant differences live in
//! `VariantPolicy` values rather than in separate code paths.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{
    GameSettings, ImpostorLimit, TieBreak, Variant, VariantPolicy, VotingRules, AVATAR_PALETTE,
    DRAWING_PALETTE,
};
pub use error::{EngineError, EngineResult};
pub use phase::Phase;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::SessionState;
