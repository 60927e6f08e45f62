use tracing::debug;

use crate::core::{EngineError, EngineResult, Player, PlayerId, SessionState, VariantPolicy};

/// Append a player to the roster.
///
/// The name is trimmed; an empty result is rejected.
pub fn add_player(state: &mut SessionState, policy: &VariantPolicy, name: &str) -> EngineResult<PlayerId> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::EmptyName);
    }
    if state.player_count() >= policy.max_players {
        return Err(EngineError::RosterFull {
            max: policy.max_players,
        });
    }

    let position = state.player_count();
    let id = state.alloc_player_id();
    state.players.push_back(Player::new(
        id,
        name,
        policy.avatar_color(position),
        policy.drawing_color(position),
    ));
    debug!(%id, position, "player added");
    Ok(id)
}

/// Remove a player and recolor the rest by their new positions.
pub fn remove_player(state: &mut SessionState, policy: &VariantPolicy, id: PlayerId) -> EngineResult<Player> {
    let index = state.player_index(id).ok_or(EngineError::UnknownPlayer(id))?;
    let removed = state.players.remove(index);
    recolor(state, policy);
    debug!(%id, "player removed");
    Ok(removed)
}

/// Reassign avatar and drawing colors by roster position.
pub fn recolor(state: &mut SessionState, policy: &VariantPolicy) {
    for (position, player) in state.players.iter_mut().enumerate() {
        player.avatar_color = policy.avatar_color(position).to_string();
        player.drawing_color = policy.drawing_color(position).to_string();
    }
}
