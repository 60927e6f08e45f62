use crate::content::ContentTable;
use crate::core::{EngineResult, GameSettings, VariantPolicy, VotingRules};
use crate::session::Session;

/// Builder for a word-variant session.
///
/// Defaults to the built-in word table with every category selected and a
/// seed drawn from the OS.
pub struct WordGameBuilder {
    content: ContentTable,
    settings: Option<GameSettings>,
    impostor_count: Option<usize>,
    show_hint: Option<bool>,
    voting: Option<VotingRules>,
    seed: Option<u64>,
    players: Vec<String>,
}

impl Default for WordGameBuilder {
    fn default() -> Self {
        Self {
            content: ContentTable::builtin_words(),
            settings: None,
            impostor_count: None,
            show_hint: None,
            voting: None,
            seed: None,
            players: Vec::new(),
        }
    }
}

impl WordGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the word table.
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

    /// Show impostors the secret's hint word.
    pub fn hint_for_impostor(mut self, show: bool) -> Self {
        self.show_hint = Some(show);
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
        if let Some(show) = self.show_hint {
            settings.show_hint_to_impostor = show;
        }
        if let Some(rules) = self.voting {
            settings.voting = rules;
        }

        let session = Session::new(
            VariantPolicy::word(),
            settings,
            self.content,
            super::rng_for(self.seed),
        )?;
        super::seat(session, self.players)
    }
}
