//! Session state: everything a UI needs to render the current screen.
//!
//! ## Round-scoped fields
//!
//! `category`, `secret_word`, `secret_hint`, `impostor_ids`, `votes`,
//! `first_speaker`, `drawing` and `outcome` are set when a round starts and
//! cleared by [`SessionState::clear_round`].
//!
//! ## Session-scoped fields
//!
//! `players`, `score`, `used_secrets` and `history` survive rounds. Only a
//! full reset clears them.
//!
//! Collections are `im` persistent structures, so cloning a state is O(1)
//! and the session can stage every operation on a copy.

use im::{OrdMap, OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::phase::Phase;
use super::player::{Player, PlayerId};
use crate::drawing::DrawingState;
use crate::score::Scoreboard;
use crate::voting::RoundOutcome;

/// The aggregate owned by a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,

    /// Insertion order is turn order.
    pub players: Vector<Player>,

    /// Cursor into `players` during the pass-around and drawing turns.
    pub current_player_index: usize,

    pub category: Option<String>,
    pub secret_word: Option<String>,
    pub secret_hint: Option<String>,
    pub impostor_ids: SmallVec<[PlayerId; 4]>,

    /// Voter → voted-for. Entries are only ever added.
    pub votes: OrdMap<PlayerId, PlayerId>,

    pub first_speaker: Option<PlayerId>,

    pub score: Scoreboard,

    /// Drawing variant only, present while a round is active.
    pub drawing: Option<DrawingState>,

    /// Set once the round ends.
    pub outcome: Option<RoundOutcome>,

    /// `(category, secret)` pairs already dealt this session.
    pub used_secrets: OrdSet<(String, String)>,

    pub history: Vector<ActionRecord>,

    next_player_id: u32,
    action_sequence: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Empty lobby with zero scores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Lobby,
            players: Vector::new(),
            current_player_index: 0,
            category: None,
            secret_word: None,
            secret_hint: None,
            impostor_ids: SmallVec::new(),
            votes: OrdMap::new(),
            first_speaker: None,
            score: Scoreboard::new(),
            drawing: None,
            outcome: None,
            used_secrets: OrdSet::new(),
            history: Vector::new(),
            next_player_id: 0,
            action_sequence: 0,
        }
    }

    // === Players ===

    /// Number of players in the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Allocate a new player ID.
    pub fn alloc_player_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    /// Roster position of a player.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The player under the cursor.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Impostors of the active round, in roster order.
    pub fn impostors(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_impostor())
    }

    /// Whether `id` is an impostor this round.
    #[must_use]
    pub fn is_impostor(&self, id: PlayerId) -> bool {
        self.impostor_ids.contains(&id)
    }

    // === Round lifecycle ===

    /// Drop all round-scoped data and per-player round flags.
    pub fn clear_round(&mut self) {
        self.current_player_index = 0;
        self.category = None;
        self.secret_word = None;
        self.secret_hint = None;
        self.impostor_ids.clear();
        self.votes = OrdMap::new();
        self.first_speaker = None;
        self.drawing = None;
        self.outcome = None;
        for player in self.players.iter_mut() {
            player.clear_round();
        }
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    fn with_players(n: usize) -> SessionState {
        let mut state = SessionState::new();
        for i in 0..n {
            let id = state.alloc_player_id();
            state.players.push_back(Player::new(id, format!("P{i}"), "", ""));
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = SessionState::new();
        assert_eq!(state.phase, Phase::Lobby);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.score, Scoreboard::default());
        assert!(state.current_player().is_none());
    }

    #[test]
    fn test_alloc_player_id_never_repeats() {
        let mut state = SessionState::new();
        let a = state.alloc_player_id();
        let b = state.alloc_player_id();
        assert_ne!(a, b);
        assert_eq!(b.raw(), a.raw() + 1);
    }

    #[test]
    fn test_player_lookup() {
        let state = with_players(3);
        let id = state.players[2].id;

        assert_eq!(state.player_index(id), Some(2));
        assert_eq!(state.player(id).map(|p| p.name.as_str()), Some("P2"));
        assert_eq!(state.player(PlayerId::new(99)), None);
    }

    #[test]
    fn test_clear_round() {
        let mut state = with_players(3);
        state.phase = Phase::Voting;
        state.current_player_index = 2;
        state.category = Some("Food".to_string());
        state.secret_word = Some("Pizza".to_string());
        state.impostor_ids.push(state.players[0].id);
        state.players[0].begin_round(true);
        state.votes.insert(state.players[1].id, state.players[0].id);
        state.score.start_round();

        state.clear_round();

        assert_eq!(state.current_player_index, 0);
        assert_eq!(state.category, None);
        assert_eq!(state.secret_word, None);
        assert!(state.impostor_ids.is_empty());
        assert!(state.votes.is_empty());
        assert!(state.players.iter().all(|p| p.is_impostor.is_none()));
        // Score and roster survive.
        assert_eq!(state.score.round_number, 1);
        assert_eq!(state.player_count(), 3);
    }

    #[test]
    fn test_history_sequence() {
        let mut state = SessionState::new();
        let seq0 = state.next_sequence();
        state.record_action(ActionRecord::new(Action::StartGame, 1, seq0));
        let seq1 = state.next_sequence();

        assert_eq!(seq0, 0);
        assert_eq!(seq1, 1);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = with_players(3);
        let mut copy = original.clone();
        copy.players.pop_back();

        assert_eq!(original.player_count(), 3);
        assert_eq!(copy.player_count(), 2);
    }

    #[test]
    fn test_state_serialization() {
        let state = with_players(2);
        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
