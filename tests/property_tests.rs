//! Property tests over seeds, roster sizes and vote patterns.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use pass_and_play::assignment::pick_impostors;
use pass_and_play::turns::{advance, advance_round, Advance, RoundAdvance};
use pass_and_play::{
    DrawingGameBuilder, GameRng, Phase, PlayerId, Session, VariantPolicy, WordGameBuilder,
};

fn word_lobby(players: usize, requested: usize, seed: u64) -> Session {
    let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
    WordGameBuilder::new()
        .seed(seed)
        .players(names)
        .impostor_count(requested)
        .build()
        .unwrap()
}

/// Start a word round and walk it to voting.
fn to_voting(session: &mut Session) {
    session.start_game().unwrap();
    while session.phase() != Phase::Discussion {
        session.show_reveal().unwrap();
        session.next_player().unwrap();
        session.next_player().unwrap();
    }
    session.start_voting().unwrap();
}

proptest! {
    /// Impostors are distinct roster members, at least one, never everyone,
    /// never above the table limit.
    #[test]
    fn prop_impostor_count_is_clamped(players in 3usize..=10, requested in 0usize..12, seed in any::<u64>()) {
        let mut session = word_lobby(players, requested, seed);
        session.start_game().unwrap();

        let state = session.state();
        let impostors: BTreeSet<PlayerId> = state.impostor_ids.iter().copied().collect();
        let limit = VariantPolicy::word().max_impostors(players);

        prop_assert_eq!(impostors.len(), state.impostor_ids.len());
        prop_assert!(!impostors.is_empty());
        prop_assert!(impostors.len() <= limit);
        prop_assert!(impostors.len() < players);
        prop_assert_eq!(impostors.len(), requested.clamp(1, limit));
        for id in &impostors {
            prop_assert!(state.player(*id).is_some_and(|p| p.is_impostor()));
        }
        prop_assert_eq!(state.impostors().count(), impostors.len());
    }

    /// A voter's first recorded vote is never replaced.
    #[test]
    fn prop_first_vote_wins(seed in any::<u64>(), attempts in prop::collection::vec((0usize..5, 0usize..5), 1..30)) {
        let mut session = word_lobby(5, 1, seed);
        let ids: Vec<PlayerId> = session.players().map(|p| p.id).collect();
        to_voting(&mut session);

        let mut first: HashMap<PlayerId, PlayerId> = HashMap::new();
        for (voter, target) in attempts {
            let (voter, target) = (ids[voter], ids[target]);
            if session.cast_vote(voter, target).is_ok() {
                prop_assert!(first.insert(voter, target).is_none());
            }
        }

        for (voter, target) in &first {
            prop_assert_eq!(session.state().votes.get(voter), Some(target));
        }
        prop_assert_eq!(session.state().votes.len(), first.len());
        let received: u32 = session.players().map(|p| p.votes).sum();
        prop_assert_eq!(received as usize, first.len());
    }

    /// The same votes always accuse the same player.
    #[test]
    fn prop_resolve_is_deterministic(seed in any::<u64>(), targets in prop::collection::vec(0usize..6, 6)) {
        let run = || {
            let mut session = word_lobby(6, 1, seed);
            let ids: Vec<PlayerId> = session.players().map(|p| p.id).collect();
            to_voting(&mut session);
            for (voter, target) in targets.iter().enumerate() {
                let _ = session.cast_vote(ids[voter], ids[*target]);
            }
            let top = session.players().map(|p| p.votes).max().unwrap_or(0);
            (session.resolve().unwrap(), top)
        };

        let (outcome, top) = run();
        prop_assert_eq!(&outcome, &run().0);

        let accused = outcome.accused.unwrap();
        prop_assert_eq!(accused.votes, top);
    }

    /// The pass-around leaves `Pass` exactly once, after the last player.
    #[test]
    fn prop_pass_around_exits_once(len in 1usize..=12) {
        let mut index = 0;
        let mut steps = 1;
        loop {
            match advance(index, len) {
                Advance::Next(next) => {
                    prop_assert_eq!(next, index + 1);
                    index = next;
                    steps += 1;
                }
                Advance::Exhausted => break,
            }
        }
        prop_assert_eq!(steps, len);
        prop_assert_eq!(index, len - 1);
    }

    /// Drawing lasts exactly rounds × players turns.
    #[test]
    fn prop_drawing_turns(len in 1usize..=8, rounds in 1u32..=4) {
        let (mut index, mut round, mut turns) = (0, 1, 1);
        loop {
            match advance_round(index, round, rounds, len) {
                RoundAdvance::NextTurn(next) => index = next,
                RoundAdvance::NextRound(next) => {
                    prop_assert_eq!(next, round + 1);
                    index = 0;
                    round = next;
                }
                RoundAdvance::Complete => break,
            }
            turns += 1;
        }
        prop_assert_eq!(turns, len * rounds as usize);
    }

    /// A whole drawing session reaches the gallery after rounds × players
    /// finished turns.
    #[test]
    fn prop_drawing_session_turns(players in 4usize..=8, rounds in 1u32..=3, seed in any::<u64>()) {
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let mut session = DrawingGameBuilder::new()
            .seed(seed)
            .players(names)
            .drawing_rounds(rounds)
            .build()
            .unwrap();
        session.start_game().unwrap();
        while session.phase() == Phase::Pass {
            session.show_reveal().unwrap();
            session.next_player().unwrap();
        }

        let mut finishes = 0;
        while session.phase() != Phase::Gallery {
            session.begin_drawing_turn().unwrap();
            session.finish_drawing_turn().unwrap();
            finishes += 1;
        }
        prop_assert_eq!(finishes, players * rounds as usize);
    }
}

/// Every single impostor is equally likely across seeds.
#[test]
fn test_single_impostor_is_uniform() {
    let ids: Vec<PlayerId> = (0..4).map(PlayerId::new).collect();
    let mut counts = [0u32; 4];
    for seed in 0..4000 {
        let mut rng = GameRng::new(seed);
        let picked = pick_impostors(&ids, 1, &mut rng);
        counts[picked[0].raw() as usize] += 1;
    }
    for count in counts {
        assert!((850..=1150).contains(&count), "{counts:?}");
    }
}

/// Every two-impostor subset of five players is equally likely.
#[test]
fn test_impostor_pairs_are_uniform() {
    let ids: Vec<PlayerId> = (0..5).map(PlayerId::new).collect();
    let mut counts: HashMap<BTreeSet<PlayerId>, u32> = HashMap::new();
    for seed in 0..5000 {
        let mut rng = GameRng::new(seed);
        let picked: BTreeSet<PlayerId> = pick_impostors(&ids, 2, &mut rng).into_iter().collect();
        *counts.entry(picked).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 10);
    for count in counts.values() {
        assert!((400..=600).contains(count), "{counts:?}");
    }
}
