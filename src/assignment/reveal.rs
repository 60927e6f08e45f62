use serde::{Deserialize, Serialize};

use crate::core::{GameSettings, Player, PlayerId, Variant};

/// What a player sees on their reveal screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RevealCard {
    /// Crew know the secret word (word variant) or prompt (drawing variant).
    Crew {
        player: PlayerId,
        category: String,
        secret: String,
        variant: Variant,
    },
    /// Impostors only get what the helper toggles allow.
    Impostor {
        player: PlayerId,
        category: Option<String>,
        hint: Option<String>,
        variant: Variant,
    },
}

impl RevealCard {
    /// Build the card for `player`.
    ///
    /// Hints are a word-variant helper and never appear on drawing cards.
    #[must_use]
    pub fn for_player(
        player: &Player,
        variant: Variant,
        category: &str,
        secret: &str,
        hint: Option<&str>,
        settings: &GameSettings,
    ) -> Self {
        if player.is_impostor() {
            let category = settings
                .show_category_to_impostor
                .then(|| category.to_string());
            let hint = match variant {
                Variant::Word if settings.show_hint_to_impostor => hint.map(str::to_string),
                _ => None,
            };
            Self::Impostor {
                player: player.id,
                category,
                hint,
                variant,
            }
        } else {
            Self::Crew {
                player: player.id,
                category: category.to_string(),
                secret: secret.to_string(),
                variant,
            }
        }
    }

    /// The player this card belongs to.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Self::Crew { player, .. } | Self::Impostor { player, .. } => *player,
        }
    }

    #[must_use]
    pub fn is_impostor(&self) -> bool {
        matches!(self, Self::Impostor { .. })
    }
}
