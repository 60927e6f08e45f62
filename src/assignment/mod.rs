//! Secret assignment: category and secret draw, impostor selection, role
//! application, and the reveal cards players see.
//!
//! All randomness comes from the session's [`GameRng`](crate::core::GameRng)
//! so a seeded session deals the same roles every time.

mod reveal;
mod secret;

pub use reveal::RevealCard;
pub use secret::{apply_roles, assign, draw_secret, pick_impostors, Assignment, SecretDraw};
