use serde::{Deserialize, Serialize};

/// The two sides of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Crew,
    Impostors,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crew => write!(f, "crew"),
            Self::Impostors => write!(f, "impostors"),
        }
    }
}

/// Session-wide bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds started in this session. Zero before the first round.
    pub round_number: u32,
    pub crew_wins: u32,
    pub impostor_wins: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a new round and return its number.
    pub fn start_round(&mut self) -> u32 {
        self.round_number += 1;
        self.round_number
    }

    /// Credit one win to `team`.
    pub fn record_win(&mut self, team: Team) {
        match team {
            Team::Crew => self.crew_wins += 1,
            Team::Impostors => self.impostor_wins += 1,
        }
    }

    /// Wins recorded for `team`.
    #[must_use]
    pub fn wins(&self, team: Team) -> u32 {
        match team {
            Team::Crew => self.crew_wins,
            Team::Impostors => self.impostor_wins,
        }
    }

    /// Rounds that produced a winner.
    #[must_use]
    pub fn decided_rounds(&self) -> u32 {
        self.crew_wins + self.impostor_wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_round_counts_up() {
        let mut board = Scoreboard::new();
        assert_eq!(board.start_round(), 1);
        assert_eq!(board.start_round(), 2);
        assert_eq!(board.round_number, 2);
    }

    #[test]
    fn test_record_win() {
        let mut board = Scoreboard::new();
        board.record_win(Team::Crew);
        board.record_win(Team::Crew);
        board.record_win(Team::Impostors);

        assert_eq!(board.wins(Team::Crew), 2);
        assert_eq!(board.wins(Team::Impostors), 1);
        assert_eq!(board.decided_rounds(), 3);
    }

    #[test]
    fn test_team_display() {
        assert_eq!(Team::Crew.to_string(), "crew");
        assert_eq!(Team::Impostors.to_string(), "impostors");
    }
}
