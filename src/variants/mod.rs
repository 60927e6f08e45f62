//! Ready-made sessions for the two game variants.
//!
//! - **Word**: 3-10 players, a secret word, a lock screen between reveals.
//! - **Drawing**: 4-8 players, a secret prompt, one line per player per
//!   drawing round before the gallery.

mod drawing;
mod word;

pub use drawing::DrawingGameBuilder;
pub use word::WordGameBuilder;

use crate::core::{EngineResult, GameRng};
use crate::session::Session;

/// Add each name in order, then hand the session back.
fn seat<I, S>(mut session: Session, names: I) -> EngineResult<Session>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in names {
        session.add_player(name.as_ref())?;
    }
    Ok(session)
}

fn rng_for(seed: Option<u64>) -> GameRng {
    seed.map_or_else(GameRng::from_entropy_seed, GameRng::new)
}
