//! Session configuration types.
//!
//! - `GameSettings`: caller-owned options read at round start
//! - `VotingRules`: tie-break and self-vote rules
//! - `VariantPolicy`: what distinguishes the word and drawing variants
//!
//! The session machine is shared by both variants; everything variant
//! specific is a value in `VariantPolicy` rather than separate code.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::content::ContentTable;

/// Avatar colors, assigned by roster position.
pub const AVATAR_PALETTE: [&str; 10] = [
    "#e74c3c", "#3498db", "#2ecc71", "#f1c40f", "#9b59b6",
    "#e67e22", "#1abc9c", "#ec407a", "#795548", "#607d8b",
];

/// Stroke colors for the drawing variant, assigned by roster position.
pub const DRAWING_PALETTE: [&str; 8] = [
    "#d32f2f", "#1976d2", "#388e3c", "#fbc02d",
    "#7b1fa2", "#f57c00", "#0097a7", "#5d4037",
];

// === Voting rules ===

/// How a tie for most votes is broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Earliest roster position wins the tie.
    #[default]
    RosterOrder,
    /// Uniformly random among the tied players.
    Random,
}

/// Rules applied while collecting and resolving votes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingRules {
    pub tie_break: TieBreak,
    pub allow_self_vote: bool,
}

impl Default for VotingRules {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::RosterOrder,
            allow_self_vote: false,
        }
    }
}

// === GameSettings ===

/// Caller-owned game options.
///
/// The session copies what it needs at round start; edits made later only
/// affect the next round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Requested impostors, clamped to the roster's limit at round start.
    pub impostor_count: usize,

    /// Categories the secret is drawn from. Never empty once validated.
    pub selected_categories: Vec<String>,

    /// Impostors see the category on their reveal card.
    pub show_category_to_impostor: bool,

    /// Impostors see the secret's hint word (word variant).
    pub show_hint_to_impostor: bool,

    /// Discussion countdown, owned by the caller's timer.
    pub discussion_time_seconds: u32,

    /// Voting countdown, owned by the caller's timer.
    pub voting_time_seconds: u32,

    /// Drawing variant: seconds per drawing turn.
    pub drawing_time_per_player: u32,

    /// Drawing variant: passes through the roster before the gallery.
    pub max_drawing_rounds: u32,

    pub voting: VotingRules,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            impostor_count: 1,
            selected_categories: Vec::new(),
            show_category_to_impostor: true,
            show_hint_to_impostor: false,
            discussion_time_seconds: 180,
            voting_time_seconds: 60,
            drawing_time_per_player: 20,
            max_drawing_rounds: 2,
            voting: VotingRules::default(),
        }
    }
}

impl GameSettings {
    /// Default settings with every category of `content` selected.
    #[must_use]
    pub fn for_content(content: &ContentTable) -> Self {
        Self {
            selected_categories: content.category_names().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Set the requested impostor count.
    #[must_use]
    pub fn with_impostor_count(mut self, count: usize) -> Self {
        self.impostor_count = count;
        self
    }

    /// Replace the category selection.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of drawing rounds.
    #[must_use]
    pub fn with_drawing_rounds(mut self, rounds: u32) -> Self {
        self.max_drawing_rounds = rounds;
        self
    }

    /// Show or hide the hint word on impostor cards.
    #[must_use]
    pub fn with_hint_for_impostor(mut self, show: bool) -> Self {
        self.show_hint_to_impostor = show;
        self
    }

    /// Show or hide the category on impostor cards.
    #[must_use]
    pub fn with_category_for_impostor(mut self, show: bool) -> Self {
        self.show_category_to_impostor = show;
        self
    }

    /// Set the voting rules.
    #[must_use]
    pub fn with_voting(mut self, voting: VotingRules) -> Self {
        self.voting = voting;
        self
    }

    /// Drawing rounds, never below one.
    #[must_use]
    pub fn drawing_rounds(&self) -> u32 {
        self.max_drawing_rounds.max(1)
    }

    /// Check the selection against a content table.
    pub fn validate(&self, content: &ContentTable) -> EngineResult<()> {
        if self.selected_categories.is_empty() {
            return Err(EngineError::EmptyCategorySelection);
        }
        if let Some(unknown) = self
            .selected_categories
            .iter()
            .find(|name| !content.contains(name))
        {
            return Err(EngineError::UnknownCategory(unknown.clone()));
        }
        Ok(())
    }
}

// === VariantPolicy ===

/// Which game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Players speak a clue about a secret word.
    Word,
    /// Players each add a line to a shared drawing of a secret prompt.
    Drawing,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::Drawing => write!(f, "drawing"),
        }
    }
}

/// One row of the impostor threshold table.
///
/// Rosters of at least `min_players` allow up to `max_impostors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpostorLimit {
    pub min_players: usize,
    pub max_impostors: usize,
}

impl ImpostorLimit {
    #[must_use]
    pub const fn new(min_players: usize, max_impostors: usize) -> Self {
        Self {
            min_players,
            max_impostors,
        }
    }
}

/// Variant-specific parameters of the shared session machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPolicy {
    pub variant: Variant,

    /// Smallest roster that can start a round.
    pub min_players: usize,

    /// Roster cap.
    pub max_players: usize,

    /// Insert `LockScreen` between reveals.
    pub lock_screen: bool,

    /// Run the multi-round drawing loop after the reveal pass-around.
    pub drawing_rounds: bool,

    /// Impostor threshold table, ascending by `min_players`.
    pub impostor_limits: Vec<ImpostorLimit>,

    pub avatar_palette: Vec<String>,
    pub drawing_palette: Vec<String>,
}

impl VariantPolicy {
    /// Word-deduction: 3-10 players, lock screen between reveals.
    #[must_use]
    pub fn word() -> Self {
        Self {
            variant: Variant::Word,
            min_players: 3,
            max_players: 10,
            lock_screen: true,
            drawing_rounds: false,
            impostor_limits: vec![
                ImpostorLimit::new(3, 1),
                ImpostorLimit::new(5, 2),
                ImpostorLimit::new(8, 3),
            ],
            avatar_palette: AVATAR_PALETTE.iter().map(|c| c.to_string()).collect(),
            drawing_palette: DRAWING_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Drawing-deduction: 4-8 players, drawing rounds before discussion.
    #[must_use]
    pub fn drawing() -> Self {
        Self {
            variant: Variant::Drawing,
            min_players: 4,
            max_players: 8,
            lock_screen: false,
            drawing_rounds: true,
            impostor_limits: vec![ImpostorLimit::new(4, 1), ImpostorLimit::new(6, 2)],
            avatar_palette: AVATAR_PALETTE.iter().map(|c| c.to_string()).collect(),
            drawing_palette: DRAWING_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Override the player bounds.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 2, "Need at least 2 players for a crew and an impostor");
        assert!(min <= max, "Minimum players exceeds maximum");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Replace the impostor threshold table.
    #[must_use]
    pub fn with_impostor_limits(mut self, mut limits: Vec<ImpostorLimit>) -> Self {
        limits.sort_by_key(|l| l.min_players);
        self.impostor_limits = limits;
        self
    }

    /// Reject policies the session cannot run: fewer than two players
    /// (no crew left beside an impostor), inverted bounds, or an empty
    /// palette.
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_players < 2 {
            return Err(EngineError::InvalidPolicy("at least 2 players are required"));
        }
        if self.min_players > self.max_players {
            return Err(EngineError::InvalidPolicy("minimum players exceeds maximum"));
        }
        if self.avatar_palette.is_empty() || self.drawing_palette.is_empty() {
            return Err(EngineError::InvalidPolicy("color palettes must not be empty"));
        }
        Ok(())
    }

    /// Most impostors allowed for a roster of `roster_size`.
    ///
    /// Always at least 1 and always leaves at least one crew member.
    #[must_use]
    pub fn max_impostors(&self, roster_size: usize) -> usize {
        let from_table = self
            .impostor_limits
            .iter()
            .filter(|l| l.min_players <= roster_size)
            .map(|l| l.max_impostors)
            .last()
            .unwrap_or(1);
        from_table.min(roster_size.saturating_sub(1)).max(1)
    }

    /// `requested` clamped to `1..=max_impostors(roster_size)`.
    #[must_use]
    pub fn impostor_count(&self, requested: usize, roster_size: usize) -> usize {
        requested.clamp(1, self.max_impostors(roster_size))
    }

    /// Avatar color for a roster position, cycling through the palette.
    #[must_use]
    pub fn avatar_color(&self, position: usize) -> &str {
        cycle(&self.avatar_palette, position)
    }

    /// Stroke color for a roster position, cycling through the palette.
    #[must_use]
    pub fn drawing_color(&self, position: usize) -> &str {
        cycle(&self.drawing_palette, position)
    }
}

fn cycle(palette: &[String], position: usize) -> &str {
    if palette.is_empty() {
        return "";
    }
    &palette[position % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, ContentTable};

    fn table() -> ContentTable {
        let mut content = ContentTable::new();
        content.register(Category::new("Animals").with_word("Cat"));
        content.register(Category::new("Food").with_word("Pizza"));
        content
    }

    #[test]
    fn test_policy_validate() {
        assert!(VariantPolicy::word().validate().is_ok());
        assert!(VariantPolicy::drawing().validate().is_ok());

        for min in [0, 1] {
            let policy = VariantPolicy {
                min_players: min,
                ..VariantPolicy::word()
            };
            assert!(matches!(policy.validate(), Err(EngineError::InvalidPolicy(_))));
        }

        let inverted = VariantPolicy {
            min_players: 6,
            max_players: 4,
            ..VariantPolicy::drawing()
        };
        assert!(matches!(inverted.validate(), Err(EngineError::InvalidPolicy(_))));

        let no_colors = VariantPolicy {
            avatar_palette: Vec::new(),
            ..VariantPolicy::word()
        };
        assert!(matches!(no_colors.validate(), Err(EngineError::InvalidPolicy(_))));
    }

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.impostor_count, 1);
        assert!(settings.selected_categories.is_empty());
        assert!(settings.show_category_to_impostor);
        assert!(!settings.show_hint_to_impostor);
        assert_eq!(settings.max_drawing_rounds, 2);
        assert_eq!(settings.voting, VotingRules::default());
    }

    #[test]
    fn test_builder_pattern() {
        let settings = GameSettings::default()
            .with_impostor_count(2)
            .with_categories(["Food"])
            .with_drawing_rounds(3)
            .with_hint_for_impostor(true);

        assert_eq!(settings.impostor_count, 2);
        assert_eq!(settings.selected_categories, vec!["Food".to_string()]);
        assert_eq!(settings.max_drawing_rounds, 3);
        assert!(settings.show_hint_to_impostor);
    }

    #[test]
    fn test_for_content_selects_everything() {
        let settings = GameSettings::for_content(&table());
        assert_eq!(settings.selected_categories.len(), 2);
        assert!(settings.validate(&table()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_unknown() {
        let content = table();

        let empty = GameSettings::default();
        assert_eq!(empty.validate(&content), Err(EngineError::EmptyCategorySelection));

        let unknown = GameSettings::default().with_categories(["Animals", "Space"]);
        assert_eq!(
            unknown.validate(&content),
            Err(EngineError::UnknownCategory("Space".to_string()))
        );
    }

    #[test]
    fn test_drawing_rounds_floor() {
        let settings = GameSettings::default().with_drawing_rounds(0);
        assert_eq!(settings.drawing_rounds(), 1);
    }

    #[test]
    fn test_word_policy_bounds() {
        let policy = VariantPolicy::word();
        assert_eq!(policy.min_players, 3);
        assert_eq!(policy.max_players, 10);
        assert!(policy.lock_screen);
        assert!(!policy.drawing_rounds);
    }

    #[test]
    fn test_drawing_policy_bounds() {
        let policy = VariantPolicy::drawing();
        assert_eq!(policy.min_players, 4);
        assert_eq!(policy.max_players, 8);
        assert!(!policy.lock_screen);
        assert!(policy.drawing_rounds);
    }

    #[test]
    fn test_max_impostors_table() {
        let policy = VariantPolicy::word();
        assert_eq!(policy.max_impostors(3), 1);
        assert_eq!(policy.max_impostors(4), 1);
        assert_eq!(policy.max_impostors(5), 2);
        assert_eq!(policy.max_impostors(7), 2);
        assert_eq!(policy.max_impostors(8), 3);
        assert_eq!(policy.max_impostors(10), 3);
    }

    #[test]
    fn test_max_impostors_leaves_a_crew() {
        let policy = VariantPolicy::word()
            .with_impostor_limits(vec![ImpostorLimit::new(2, 5)]);
        assert_eq!(policy.max_impostors(3), 2);
        assert_eq!(policy.max_impostors(2), 1);
    }

    #[test]
    fn test_impostor_count_clamp() {
        let policy = VariantPolicy::word();
        assert_eq!(policy.impostor_count(0, 6), 1);
        assert_eq!(policy.impostor_count(2, 6), 2);
        assert_eq!(policy.impostor_count(9, 6), 2);
    }

    #[test]
    fn test_palette_cycles() {
        let policy = VariantPolicy::drawing();
        assert_eq!(policy.drawing_color(0), DRAWING_PALETTE[0]);
        assert_eq!(policy.drawing_color(8), DRAWING_PALETTE[0]);
        assert_eq!(policy.avatar_color(11), AVATAR_PALETTE[1]);
    }

    #[test]
    #[should_panic(expected = "Minimum players exceeds maximum")]
    fn test_invalid_player_bounds() {
        let _ = VariantPolicy::word().with_player_bounds(6, 4);
    }

    #[test]
    fn test_serialization() {
        let settings = GameSettings::default().with_categories(["Animals"]);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
