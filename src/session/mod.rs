//! The game session: roster, round lifecycle and scoring behind one owned
//! value.
//!
//! Both variants run through the same [`Session`]; a
//! [`VariantPolicy`](crate::core::VariantPolicy) decides whether the
//! pass-around uses a lock screen and whether a drawing loop follows it.
//!
//! Operations can be called directly or as [`Action`](crate::core::Action)
//! values through [`Session::apply`] and [`reduce`].

mod engine;
mod progress;
mod reducer;

pub use engine::Session;
pub use progress::{Applied, TurnProgress};
pub use reducer::reduce;
