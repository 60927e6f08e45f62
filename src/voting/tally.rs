use im::OrdMap;
use rustc_hash::FxHashMap;

use super::outcome::Accusation;
use crate::core::{EngineError, EngineResult, GameRng, Player, PlayerId, TieBreak, VotingRules};

/// Check that `voter` may vote for `target`.
///
/// Does not check the phase; the session does that first.
pub fn check_vote<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    votes: &OrdMap<PlayerId, PlayerId>,
    voter: PlayerId,
    target: PlayerId,
    rules: &VotingRules,
) -> EngineResult<()> {
    let (mut voter_known, mut target_known) = (false, false);
    for player in players {
        voter_known |= player.id == voter;
        target_known |= player.id == target;
    }
    if !voter_known {
        return Err(EngineError::UnknownPlayer(voter));
    }
    if !target_known {
        return Err(EngineError::UnknownPlayer(target));
    }
    if votes.contains_key(&voter) {
        return Err(EngineError::DuplicateVote(voter));
    }
    if voter == target && !rules.allow_self_vote {
        return Err(EngineError::SelfVote(voter));
    }
    Ok(())
}

/// Votes received per player.
#[must_use]
pub fn received_counts(votes: &OrdMap<PlayerId, PlayerId>) -> FxHashMap<PlayerId, u32> {
    let mut counts = FxHashMap::default();
    for target in votes.values() {
        *counts.entry(*target).or_insert(0) += 1;
    }
    counts
}

/// Every player has voted.
pub fn is_complete<'a>(players: impl IntoIterator<Item = &'a Player>) -> bool {
    players.into_iter().all(|p| p.has_voted)
}

/// Pick the most-voted player.
///
/// Players are stably sorted by received votes, descending, so under
/// `TieBreak::RosterOrder` the earliest tied player is accused. The RNG is
/// only consulted for `TieBreak::Random` with an actual tie. Returns `None`
/// for an empty roster.
pub fn most_voted<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    rules: &VotingRules,
    rng: &mut GameRng,
) -> Option<Accusation> {
    let mut ranked: Vec<&Player> = players.into_iter().collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));

    let top = ranked.first()?.votes;
    let tied: Vec<&Player> = ranked.iter().copied().take_while(|p| p.votes == top).collect();

    let pick = match rules.tie_break {
        TieBreak::Random if tied.len() > 1 => *rng.choose(&tied)?,
        _ => tied[0],
    };

    Some(Accusation {
        player: pick.id,
        name: pick.name.clone(),
        votes: pick.votes,
        tied: tied.len() > 1,
    })
}
