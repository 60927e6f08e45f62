//! The session: one explicitly owned game, driven by the UI.
//!
//! Every public operation is staged on a copy of the session and only
//! committed when it succeeds, so a rejected call leaves state, settings
//! and RNG exactly as they were.

use std::sync::Arc;

use tracing::{debug, info, trace};

use super::progress::TurnProgress;
use crate::assignment::{apply_roles, assign, RevealCard};
use crate::content::ContentTable;
use crate::core::{
    Action, ActionRecord, EngineError, EngineResult, GameRng, GameSettings, Phase, Player,
    PlayerId, SessionState, Variant, VariantPolicy,
};
use crate::drawing::{DrawingState, Stroke, StrokeInput};
use crate::roster;
use crate::score::{Scoreboard, Team};
use crate::turns::{advance, advance_round, Advance, RoundAdvance};
use crate::voting::{self, RevealedImpostor, RoundOutcome};

/// A pass-and-play game session.
#[derive(Clone, Debug)]
pub struct Session {
    policy: VariantPolicy,
    settings: GameSettings,
    content: Arc<ContentTable>,
    state: SessionState,
    rng: GameRng,
}

impl Session {
    /// Create a session in the lobby.
    ///
    /// An empty category selection selects every category in `content`.
    pub fn new(
        policy: VariantPolicy,
        mut settings: GameSettings,
        content: impl Into<Arc<ContentTable>>,
        rng: GameRng,
    ) -> EngineResult<Self> {
        policy.validate()?;
        let content = content.into();
        if settings.selected_categories.is_empty() {
            settings.selected_categories = content.category_names().map(str::to_string).collect();
        }
        settings.validate(&content)?;

        debug!(variant = %policy.variant, seed = rng.seed(), "session created");
        Ok(Self {
            policy,
            settings,
            content,
            state: SessionState::new(),
            rng,
        })
    }

    // === Accessors ===

    /// Full state snapshot.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn policy(&self) -> &VariantPolicy {
        &self.policy
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.policy.variant
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.state.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    /// The player the device should be handed to.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    #[must_use]
    pub fn score(&self) -> &Scoreboard {
        &self.state.score
    }

    /// Result of the last finished round, while it is on screen.
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.state.outcome.as_ref()
    }

    /// Drawing-round data (drawing variant, during a round).
    #[must_use]
    pub fn drawing(&self) -> Option<&DrawingState> {
        self.state.drawing.as_ref()
    }

    /// Every player has cast a vote.
    #[must_use]
    pub fn voting_complete(&self) -> bool {
        voting::is_complete(&self.state.players)
    }

    /// Applied actions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history.iter()
    }

    /// The card `id` sees on their reveal screen.
    pub fn reveal_card(&self, id: PlayerId) -> EngineResult<RevealCard> {
        let state = &self.state;
        let dealt = state
            .phase
            .is_round_active()
            .then(|| state.category.as_ref().zip(state.secret_word.as_ref()))
            .flatten();
        let Some((category, secret)) = dealt else {
            return Err(EngineError::InvalidPhaseTransition {
                phase: state.phase,
                operation: "show a reveal card",
            });
        };
        let player = state.player(id).ok_or(EngineError::UnknownPlayer(id))?;
        Ok(RevealCard::for_player(
            player,
            self.policy.variant,
            category,
            secret,
            state.secret_hint.as_deref(),
            &self.settings,
        ))
    }

    /// Reveal card of the current player, during `Reveal` only.
    pub fn current_reveal(&self) -> EngineResult<RevealCard> {
        self.require(&[Phase::Reveal], "show a reveal card")?;
        let id = self.current_id()?;
        self.reveal_card(id)
    }

    // === Lobby ===

    /// Add a player to the roster.
    pub fn add_player(&mut self, name: &str) -> EngineResult<PlayerId> {
        let action = Action::AddPlayer {
            name: name.to_string(),
        };
        self.transact(action, |s| {
            s.require(&[Phase::Lobby], "add a player")?;
            roster::add_player(&mut s.state, &s.policy, name)
        })
    }

    /// Remove a player from the roster.
    pub fn remove_player(&mut self, id: PlayerId) -> EngineResult<()> {
        self.transact(Action::RemovePlayer { player: id }, |s| {
            s.require(&[Phase::Lobby], "remove a player")?;
            roster::remove_player(&mut s.state, &s.policy, id).map(|_| ())
        })
    }

    /// Replace the settings. They apply from the next round.
    pub fn update_settings(&mut self, settings: GameSettings) -> EngineResult<()> {
        let action = Action::UpdateSettings {
            settings: settings.clone(),
        };
        self.transact(action, |s| {
            s.require(&[Phase::Lobby], "update settings")?;
            settings.validate(&s.content)?;
            s.settings = settings;
            Ok(())
        })
    }

    /// Select or deselect a category. The last selected category cannot be
    /// deselected.
    pub fn toggle_category(&mut self, category: &str) -> EngineResult<()> {
        let action = Action::ToggleCategory {
            category: category.to_string(),
        };
        self.transact(action, |s| {
            s.require(&[Phase::Lobby], "toggle a category")?;
            if !s.content.contains(category) {
                return Err(EngineError::UnknownCategory(category.to_string()));
            }
            let selected = &mut s.settings.selected_categories;
            match selected.iter().position(|c| c == category) {
                Some(_) if selected.len() == 1 => return Err(EngineError::EmptyCategorySelection),
                Some(i) => {
                    selected.remove(i);
                }
                None => selected.push(category.to_string()),
            }
            Ok(())
        })
    }

    /// Request an impostor count; it is clamped to the roster at round start.
    pub fn set_impostor_count(&mut self, count: usize) -> EngineResult<()> {
        self.transact(Action::SetImpostorCount { count }, |s| {
            s.require(&[Phase::Lobby], "set the impostor count")?;
            s.settings.impostor_count = count;
            Ok(())
        })
    }

    /// Deal roles and secrets and start the pass-around.
    pub fn start_game(&mut self) -> EngineResult<()> {
        self.transact(Action::StartGame, |s| {
            s.require(&[Phase::Lobby], "start the game")?;
            s.begin_round()
        })
    }

    // === Pass-around ===

    /// Apply one of the side-effect-free transitions of [`Phase::can_set_directly`].
    pub fn set_phase(&mut self, target: Phase) -> EngineResult<()> {
        let from = self.state.phase;
        if from == Phase::Voting && target == Phase::Voting {
            return self.start_voting();
        }
        if !from.can_set_directly(target) {
            return self.reject(
                &Action::SetPhase { phase: target },
                EngineError::InvalidPhaseTransition {
                    phase: from,
                    operation: "set the phase",
                },
            );
        }
        match target {
            Phase::Reveal => self.show_reveal(),
            Phase::Drawing => self.begin_drawing_turn(),
            Phase::Discussion => self.start_discussion(),
            Phase::Voting => self.start_voting(),
            _ => self.end_round_without_vote(),
        }
    }

    /// `Pass → Reveal`: the current player looks at their card.
    pub fn show_reveal(&mut self) -> EngineResult<()> {
        self.transact(Action::SetPhase { phase: Phase::Reveal }, |s| {
            s.require(&[Phase::Pass], "show a reveal card")?;
            s.state.phase = Phase::Reveal;
            Ok(())
        })
    }

    /// Leave the current reveal.
    ///
    /// From `Reveal` the word variant goes to `LockScreen`; from
    /// `LockScreen` (or `Reveal` without a lock screen) the device passes to
    /// the next player, or the pass-around ends after the last one.
    pub fn next_player(&mut self) -> EngineResult<TurnProgress> {
        self.transact(Action::NextPlayer, |s| match s.state.phase {
            Phase::Reveal if s.policy.lock_screen => {
                s.state.phase = Phase::LockScreen;
                Ok(TurnProgress::LockScreen)
            }
            Phase::Reveal | Phase::LockScreen => s.rotate_pass_around(),
            phase => Err(EngineError::InvalidPhaseTransition {
                phase,
                operation: "advance to the next player",
            }),
        })
    }

    // === Drawing loop ===

    /// `DrawingPass → Drawing`: the current player takes the pen.
    pub fn begin_drawing_turn(&mut self) -> EngineResult<()> {
        self.transact(Action::SetPhase { phase: Phase::Drawing }, |s| {
            s.require(&[Phase::DrawingPass], "begin a drawing turn")?;
            s.state.phase = Phase::Drawing;
            Ok(())
        })
    }

    /// Commit the current drawer's line.
    pub fn add_line(&mut self, stroke: StrokeInput) -> EngineResult<()> {
        let action = Action::AddLine {
            stroke: stroke.clone(),
        };
        self.transact(action, |s| {
            s.require(&[Phase::Drawing], "add a line")?;
            let author = s.current_id()?;
            let color = s.state.players[s.state.current_player_index].drawing_color.clone();
            let drawing = s.drawing_mut("add a line")?;
            if drawing.has_line(author) {
                return Err(EngineError::LineAlreadyDrawn(author));
            }
            let round = drawing.current_round;
            drawing.lines.push_back(Stroke {
                author,
                color,
                width: stroke.width,
                points: stroke.points,
                round,
            });
            trace!(%author, round, "line added");
            Ok(())
        })
    }

    /// End the current drawing turn, with or without a line.
    ///
    /// Safe to call again after the turn already ended (a UI timer racing
    /// the player's own "done"): outside `Drawing` but inside the drawing
    /// loop it reports [`TurnProgress::Unchanged`].
    pub fn finish_drawing_turn(&mut self) -> EngineResult<TurnProgress> {
        if matches!(self.state.phase, Phase::DrawingPass | Phase::Gallery) {
            return Ok(TurnProgress::Unchanged);
        }
        self.transact(Action::FinishDrawingTurn, |s| {
            s.require(&[Phase::Drawing], "finish the drawing turn")?;
            s.rotate_drawing_turn()
        })
    }

    /// `Gallery → Discussion`.
    pub fn start_discussion(&mut self) -> EngineResult<()> {
        self.transact(Action::StartDiscussion, |s| {
            s.require(&[Phase::Gallery], "start the discussion")?;
            s.state.phase = Phase::Discussion;
            Ok(())
        })
    }

    // === Voting ===

    /// `Discussion → Voting`. Already voting is a no-op.
    pub fn start_voting(&mut self) -> EngineResult<()> {
        if self.state.phase == Phase::Voting {
            return Ok(());
        }
        self.transact(Action::StartVoting, |s| {
            s.require(&[Phase::Discussion], "start voting")?;
            s.state.phase = Phase::Voting;
            Ok(())
        })
    }

    /// Record `voter`'s vote for `target`.
    ///
    /// Returns `true` once every player has voted.
    pub fn cast_vote(&mut self, voter: PlayerId, target: PlayerId) -> EngineResult<bool> {
        self.transact(Action::CastVote { voter, target }, |s| {
            s.require(&[Phase::Voting], "cast a vote")?;
            voting::check_vote(&s.state.players, &s.state.votes, voter, target, &s.settings.voting)?;

            s.state.votes.insert(voter, target);
            let counts = voting::received_counts(&s.state.votes);
            for player in s.state.players.iter_mut() {
                player.votes = counts.get(&player.id).copied().unwrap_or(0);
                if player.id == voter {
                    player.has_voted = true;
                }
            }
            Ok(voting::is_complete(&s.state.players))
        })
    }

    /// Close the vote: accuse the most-voted player, score the round and
    /// move to `Results`.
    pub fn resolve(&mut self) -> EngineResult<RoundOutcome> {
        self.transact(Action::Resolve, |s| {
            s.require(&[Phase::Voting], "resolve the vote")?;
            let accused = voting::most_voted(&s.state.players, &s.settings.voting, &mut s.rng)
                .ok_or(EngineError::RosterTooSmall {
                    min: s.policy.min_players,
                    actual: 0,
                })?;

            let impostor_caught = s.state.is_impostor(accused.player);
            let winner = if impostor_caught {
                Team::Crew
            } else {
                Team::Impostors
            };
            s.state.score.record_win(winner);

            let outcome = RoundOutcome {
                accused: Some(accused),
                impostor_caught,
                winner: Some(winner),
                ..s.unmask()
            };
            s.state.outcome = Some(outcome.clone());
            s.state.phase = Phase::Results;

            info!(
                round = s.state.score.round_number,
                %winner,
                crew_wins = s.state.score.wins(Team::Crew),
                impostor_wins = s.state.score.wins(Team::Impostors),
                "round resolved"
            );
            Ok(outcome)
        })
    }

    /// `Discussion → SimpleRoundEnd`: reveal the impostors without voting.
    pub fn end_round_without_vote(&mut self) -> EngineResult<()> {
        self.transact(Action::EndRoundWithoutVote, |s| {
            s.require(&[Phase::Discussion], "end the round without a vote")?;
            s.state.outcome = Some(s.unmask());
            s.state.phase = Phase::SimpleRoundEnd;
            Ok(())
        })
    }

    /// Record the winner of a round that ended without a vote. Only once per
    /// round.
    pub fn declare_winner(&mut self, team: Team) -> EngineResult<()> {
        self.transact(Action::DeclareWinner { team }, |s| {
            s.require(&[Phase::SimpleRoundEnd], "declare a winner")?;
            let round = s.state.score.round_number;
            let outcome = s.state.outcome.get_or_insert_with(RoundOutcome::empty);
            if outcome.winner.is_some() {
                return Err(EngineError::RoundAlreadyDecided(round));
            }
            outcome.winner = Some(team);
            outcome.impostor_caught = team == Team::Crew;
            s.state.score.record_win(team);
            info!(round, %team, "winner declared");
            Ok(())
        })
    }

    // === Between rounds ===

    /// Deal a new round for the same roster. Scores carry over.
    pub fn next_round(&mut self) -> EngineResult<()> {
        self.transact(Action::NextRound, |s| {
            s.require_round_over("start the next round")?;
            s.begin_round()
        })
    }

    /// Return to the lobby to edit roster or settings. Scores carry over.
    pub fn back_to_lobby(&mut self) -> EngineResult<()> {
        self.transact(Action::BackToLobby, |s| {
            s.require_round_over("return to the lobby")?;
            s.state.clear_round();
            s.state.phase = Phase::Lobby;
            Ok(())
        })
    }

    /// Clear roster, scores and history. Settings are kept.
    pub fn reset_game(&mut self) -> EngineResult<()> {
        self.transact(Action::ResetGame, |s| {
            s.state = SessionState::new();
            info!("session reset");
            Ok(())
        })
    }

    // === Internals ===

    /// Run `op` on a copy and commit it only on success.
    fn transact<T>(
        &mut self,
        action: Action,
        op: impl FnOnce(&mut Self) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut next = self.clone();
        match op(&mut next) {
            Ok(value) => {
                if next.state.phase != self.state.phase {
                    debug!(from = %self.state.phase, to = %next.state.phase, "phase changed");
                }
                let seq = next.state.next_sequence();
                let round = next.state.score.round_number;
                next.state.record_action(ActionRecord::new(action, round, seq));
                *self = next;
                Ok(value)
            }
            Err(err) => self.reject(&action, err),
        }
    }

    fn reject<T>(&self, action: &Action, err: EngineError) -> EngineResult<T> {
        debug!(operation = action.name(), phase = %self.state.phase, error = %err, "action rejected");
        Err(err)
    }

    fn require(&self, allowed: &[Phase], operation: &'static str) -> EngineResult<()> {
        if allowed.contains(&self.state.phase) {
            Ok(())
        } else {
            Err(EngineError::InvalidPhaseTransition {
                phase: self.state.phase,
                operation,
            })
        }
    }

    fn require_round_over(&self, operation: &'static str) -> EngineResult<()> {
        if self.state.phase.is_round_over() {
            Ok(())
        } else {
            Err(EngineError::InvalidPhaseTransition {
                phase: self.state.phase,
                operation,
            })
        }
    }

    fn current_id(&self) -> EngineResult<PlayerId> {
        self.state
            .current_player()
            .map(|p| p.id)
            .ok_or(EngineError::RosterTooSmall {
                min: self.policy.min_players,
                actual: self.state.player_count(),
            })
    }

    fn drawing_mut(&mut self, operation: &'static str) -> EngineResult<&mut DrawingState> {
        let phase = self.state.phase;
        self.state
            .drawing
            .as_mut()
            .ok_or(EngineError::InvalidPhaseTransition { phase, operation })
    }

    /// Deal a fresh round and enter the pass-around.
    fn begin_round(&mut self) -> EngineResult<()> {
        let assignment = assign(
            &self.state.players,
            &self.policy,
            &self.settings,
            &self.content,
            &self.state.used_secrets,
            &mut self.rng,
        )?;
        let secret = assignment.secret;

        self.remember_secret(&secret.category, &secret.entry.text);
        self.state.clear_round();
        apply_roles(&mut self.state.players, &assignment.impostors);

        self.state.category = Some(secret.category);
        self.state.secret_word = Some(secret.entry.text);
        self.state.secret_hint = secret.entry.hint;
        self.state.impostor_ids = assignment.impostors;
        self.state.first_speaker = Some(assignment.first_speaker);
        self.state.drawing = self.policy.drawing_rounds.then(|| {
            DrawingState::new(
                self.settings.drawing_rounds(),
                self.settings.drawing_time_per_player,
            )
        });
        self.state.current_player_index = 0;
        self.state.phase = Phase::Pass;

        let round = self.state.score.start_round();
        info!(
            round,
            variant = %self.policy.variant,
            players = self.state.player_count(),
            impostors = self.state.impostor_ids.len(),
            "round started"
        );
        trace!(
            category = ?self.state.category,
            secret = ?self.state.secret_word,
            impostors = ?self.state.impostor_ids,
            "secret dealt"
        );
        Ok(())
    }

    /// Mark a secret as used, forgetting its category once it is exhausted.
    fn remember_secret(&mut self, category: &str, text: &str) {
        let used = &mut self.state.used_secrets;
        if let Some(entries) = self.content.get(category) {
            let exhausted = entries
                .entries
                .iter()
                .all(|e| used.contains(&(category.to_string(), e.text.clone())));
            if exhausted {
                for e in &entries.entries {
                    used.remove(&(category.to_string(), e.text.clone()));
                }
            }
        }
        used.insert((category.to_string(), text.to_string()));
    }

    fn rotate_pass_around(&mut self) -> EngineResult<TurnProgress> {
        match advance(self.state.current_player_index, self.state.player_count()) {
            Advance::Next(next) => {
                self.state.current_player_index = next;
                self.state.phase = Phase::Pass;
                Ok(TurnProgress::NextPlayer(self.current_id()?))
            }
            Advance::Exhausted if self.policy.drawing_rounds => {
                self.state.current_player_index = 0;
                for player in self.state.players.iter_mut() {
                    player.has_drawn = false;
                }
                self.state.phase = Phase::DrawingPass;
                Ok(TurnProgress::DrawingStarted)
            }
            Advance::Exhausted => {
                self.state.current_player_index = 0;
                self.state.phase = Phase::Discussion;
                Ok(TurnProgress::Discussion)
            }
        }
    }

    fn rotate_drawing_turn(&mut self) -> EngineResult<TurnProgress> {
        let index = self.state.current_player_index;
        let len = self.state.player_count();
        self.state.players[index].has_drawn = true;

        let (round, max_rounds) = {
            let drawing = self.drawing_mut("finish the drawing turn")?;
            (drawing.current_round, drawing.max_drawing_rounds)
        };
        debug!(player = %self.state.players[index].id, round, "drawing turn finished");

        match advance_round(index, round, max_rounds, len) {
            RoundAdvance::NextTurn(next) => {
                self.state.current_player_index = next;
                self.state.phase = Phase::DrawingPass;
                Ok(TurnProgress::NextPlayer(self.current_id()?))
            }
            RoundAdvance::NextRound(next_round) => {
                self.drawing_mut("finish the drawing turn")?.current_round = next_round;
                for player in self.state.players.iter_mut() {
                    player.has_drawn = false;
                }
                self.state.current_player_index = 0;
                self.state.phase = Phase::DrawingPass;
                Ok(TurnProgress::NextDrawingRound(next_round))
            }
            RoundAdvance::Complete => {
                self.state.current_player_index = 0;
                self.state.phase = Phase::Gallery;
                Ok(TurnProgress::Gallery)
            }
        }
    }

    /// Outcome skeleton naming the impostors and the secret.
    fn unmask(&self) -> RoundOutcome {
        RoundOutcome {
            impostors: self
                .state
                .impostors()
                .map(|p| RevealedImpostor {
                    id: p.id,
                    name: p.name.clone(),
                })
                .collect(),
            category: self.state.category.clone().unwrap_or_default(),
            secret: self.state.secret_word.clone().unwrap_or_default(),
            ..RoundOutcome::empty()
        }
    }
}
