use tracing::trace;

use super::engine::Session;
use super::progress::Applied;
use crate::core::{Action, EngineResult};

impl Session {
    /// Apply an action through the matching operation.
    pub fn apply(&mut self, action: Action) -> EngineResult<Applied> {
        trace!(operation = action.name(), "applying action");
        match action {
            Action::AddPlayer { name } => self.add_player(&name).map(Applied::PlayerAdded),
            Action::RemovePlayer { player } => self.remove_player(player).map(|()| Applied::Done),
            Action::UpdateSettings { settings } => {
                self.update_settings(settings).map(|()| Applied::Done)
            }
            Action::ToggleCategory { category } => {
                self.toggle_category(&category).map(|()| Applied::Done)
            }
            Action::SetImpostorCount { count } => {
                self.set_impostor_count(count).map(|()| Applied::Done)
            }
            Action::StartGame => self.start_game().map(|()| Applied::Done),
            Action::SetPhase { phase } => self.set_phase(phase).map(|()| Applied::Done),
            Action::NextPlayer => self.next_player().map(Applied::Turn),
            Action::AddLine { stroke } => self.add_line(stroke).map(|()| Applied::Done),
            Action::FinishDrawingTurn => self.finish_drawing_turn().map(Applied::Turn),
            Action::StartDiscussion => self.start_discussion().map(|()| Applied::Done),
            Action::StartVoting => self.start_voting().map(|()| Applied::Done),
            Action::CastVote { voter, target } => self
                .cast_vote(voter, target)
                .map(|complete| Applied::VoteCast { complete }),
            Action::Resolve => self.resolve().map(Applied::Resolved),
            Action::EndRoundWithoutVote => self.end_round_without_vote().map(|()| Applied::Done),
            Action::DeclareWinner { team } => self.declare_winner(team).map(|()| Applied::Done),
            Action::NextRound => self.next_round().map(|()| Applied::Done),
            Action::BackToLobby => self.back_to_lobby().map(|()| Applied::Done),
            Action::ResetGame => self.reset_game().map(|()| Applied::Done),
        }
    }

    /// Apply every action in order, stopping at the first failure.
    ///
    /// Actions before the failing one stay applied.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> EngineResult<Vec<Applied>> {
        actions.into_iter().map(|a| self.apply(a)).collect()
    }
}

/// Pure transition: the session after `action`, leaving `session` as is.
pub fn reduce(session: &Session, action: Action) -> EngineResult<(Session, Applied)> {
    let mut next = session.clone();
    let applied = next.apply(action)?;
    Ok((next, applied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentTable;
    use crate::core::{GameRng, GameSettings, Phase, PlayerId, VariantPolicy};
    use crate::session::TurnProgress;

    fn lobby() -> Session {
        let content = ContentTable::builtin_words();
        let settings = GameSettings::for_content(&content);
        Session::new(VariantPolicy::word(), settings, content, GameRng::new(11)).unwrap()
    }

    fn add(name: &str) -> Action {
        Action::AddPlayer {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let mut session = lobby();
        let applied = session.apply(add("Ada")).unwrap();
        assert_eq!(applied, Applied::PlayerAdded(PlayerId::new(0)));

        session.apply_all([add("Bo"), add("Cy"), Action::StartGame]).unwrap();
        assert_eq!(session.phase(), Phase::Pass);

        session.apply(Action::SetPhase { phase: Phase::Reveal }).unwrap();
        let applied = session.apply(Action::NextPlayer).unwrap();
        assert_eq!(applied, Applied::Turn(TurnProgress::LockScreen));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let session = lobby();
        let (next, applied) = reduce(&session, add("Ada")).unwrap();

        assert_eq!(applied, Applied::PlayerAdded(PlayerId::new(0)));
        assert_eq!(next.players().count(), 1);
        assert_eq!(session.players().count(), 0);
    }

    #[test]
    fn test_reduce_error() {
        let session = lobby();
        let err = reduce(&session, Action::StartGame).unwrap_err();
        assert!(matches!(err, crate::core::EngineError::RosterTooSmall { .. }));
    }

    #[test]
    fn test_apply_all_stops_at_failure() {
        let mut session = lobby();
        let result = session.apply_all([add("Ada"), add("  "), add("Bo")]);

        assert!(result.is_err());
        assert_eq!(session.players().count(), 1);
    }

    #[test]
    fn test_history_replays() {
        let mut session = lobby();
        session
            .apply_all([add("Ada"), add("Bo"), add("Cy"), Action::StartGame])
            .unwrap();
        let actions: Vec<Action> = session.history().map(|r| r.action.clone()).collect();

        let mut replay = lobby();
        replay.apply_all(actions).unwrap();

        assert_eq!(replay.state(), session.state());
    }
}
