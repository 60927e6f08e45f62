use im::{OrdSet, Vector};
use smallvec::SmallVec;

use crate::content::{ContentTable, SecretEntry};
use crate::core::{EngineError, EngineResult, GameRng, GameSettings, Player, PlayerId, VariantPolicy};

/// A drawn secret and the category it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretDraw {
    pub category: String,
    pub entry: SecretEntry,
}

/// Everything dealt at the start of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub secret: SecretDraw,
    pub impostors: SmallVec<[PlayerId; 4]>,
    /// Who opens the clue/discussion phase.
    pub first_speaker: PlayerId,
}

/// Draw a category uniformly among the enabled ones, then a secret
/// uniformly within it.
///
/// Entries listed in `used` (as `(category, text)`) are skipped while the
/// category still has unused entries. Once every entry of the drawn
/// category has been used, the whole category is eligible again.
pub fn draw_secret(
    content: &ContentTable,
    selected: &[String],
    used: &OrdSet<(String, String)>,
    rng: &mut GameRng,
) -> EngineResult<SecretDraw> {
    if selected.is_empty() {
        return Err(EngineError::EmptyCategorySelection);
    }
    let enabled: Vec<_> = content.enabled(selected).collect();
    let category = *rng.choose(&enabled).ok_or(EngineError::NoContent)?;

    let fresh: Vec<&SecretEntry> = category
        .entries
        .iter()
        .filter(|e| !used.contains(&(category.name.clone(), e.text.clone())))
        .collect();
    let pool: Vec<&SecretEntry> = if fresh.is_empty() {
        category.entries.iter().collect()
    } else {
        fresh
    };
    let entry = *rng.choose(&pool).ok_or(EngineError::NoContent)?;

    Ok(SecretDraw {
        category: category.name.clone(),
        entry: entry.clone(),
    })
}

/// Pick `count` distinct impostors.
///
/// Shuffles a copy of `ids` and takes the first `count`, so every subset of
/// that size is equally likely.
pub fn pick_impostors(ids: &[PlayerId], count: usize, rng: &mut GameRng) -> SmallVec<[PlayerId; 4]> {
    let mut order = ids.to_vec();
    rng.shuffle(&mut order);
    order.into_iter().take(count).collect()
}

/// Deal a round for `players`.
///
/// Fails without touching the RNG if the roster is below the variant
/// minimum.
pub fn assign(
    players: &Vector<Player>,
    policy: &VariantPolicy,
    settings: &GameSettings,
    content: &ContentTable,
    used: &OrdSet<(String, String)>,
    rng: &mut GameRng,
) -> EngineResult<Assignment> {
    // A round needs an impostor and at least one crew member.
    let min = policy.min_players.max(2);
    if players.len() < min {
        return Err(EngineError::RosterTooSmall {
            min,
            actual: players.len(),
        });
    }

    let secret = draw_secret(content, &settings.selected_categories, used, rng)?;

    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    let count = policy.impostor_count(settings.impostor_count, ids.len());
    let impostors = pick_impostors(&ids, count, rng);

    // Non-empty: the roster has at least `min_players` entries.
    let first_speaker = ids[rng.gen_range_usize(0..ids.len())];

    Ok(Assignment {
        secret,
        impostors,
        first_speaker,
    })
}

/// Mark roles and reset per-round counters on every player.
pub fn apply_roles(players: &mut Vector<Player>, impostors: &[PlayerId]) {
    for player in players.iter_mut() {
        let impostor = impostors.contains(&player.id);
        player.begin_round(impostor);
    }
}
