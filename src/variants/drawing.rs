use crate::content::ContentTable;
use crate::core::{EngineResult, GameSettings, VariantPolicy, VotingRules};
use crate::session::Session;

/// Builder for a drawing-variant session.
///
/// Defaults to the built-in prompt table, two drawing rounds and
/// twenty seconds per drawing turn.
pub struct DrawingGameBuilder {
    content: ContentTable,
    settings: Option<GameSettings>,
    impostor_count: Option<usize>,
    drawing_rounds: Option<u32>,
    turn_seconds: Option<u32>,
    voting: Option<VotingRules>,
    seed: Option<u64>,
    players: Vec<String>,
}

impl Default for DrawingGameBuilder {
    fn default() -> Self {
        Self {
            content: ContentTable::builtin_prompts(),
            settings: None,
            impostor_count: None,
            drawing_rounds: None,
            turn_seconds: None,
            voting: None,
            seed: None,
            players: Vec::new(),
        }
    }
}

impl DrawingGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prompt table.
    pub fn content(mut self, content: ContentTable) -> Self {
        self.content = content;
        self
    }

    /// Start from explicit settings instead of the defaults.
    pub fn settings(mut self, settings: GameSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn impostor_count(mut self, count: usize) -> Self {
        self.impostor_count = Some(count);
        self
    }

    /// Passes through the roster before the gallery. Zero counts as one.
    pub fn drawing_rounds(mut self, rounds: u32) -> Self {
        self.drawing_rounds = Some(rounds);
        self
    }

    pub fn turn_seconds(mut self, seconds: u32) -> Self {
        self.turn_seconds = Some(seconds);
        self
    }

    pub fn voting(mut self, rules: VotingRules) -> Self {
        self.voting = Some(rules);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seat these players, in turn order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    /// Build a lobby session with the players seated.
    pub fn build(self) -> EngineResult<Session> {
        let mut settings = self
            .settings
            .unwrap_or_else(|| GameSettings::for_content(&self.content));
        if let Some(count) = self.impostor_count {
            settings.impostor_count = count;
        }
        if let Some(rounds) = self.drawing_rounds {
            settings = settings.with_drawing_rounds(rounds);
        }
        if let Some(seconds) = self.turn_seconds {
            settings.drawing_time_per_player = seconds;
        }
        if let Some(rules) = self.voting {
            settings.voting = rules;
        }

        let session = Session::new(
            VariantPolicy::drawing(),
            settings,
            self.content,
            super::rng_for(self.seed),
        )?;
        super::seat(session, self.players)
    }
}
