//! Shareable character card projection.
//!
//! # Responsibility
//! - Define the portable, state-free projection of a character used for
//!   exporting and sharing.
//! - Give import routines a discriminant and version to check before
//!   interpreting foreign JSON.
//!
//! # Invariants
//! - A card never carries the source profile's `id`, `memories`,
//!   `refinedMemories`, `activeMemoryMonths` or `impression`.
//! - `card_type` always serializes as the fixed literal
//!   [`CHARACTER_CARD_TYPE`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::character::{CharacterProfile, SpriteConfig};
use crate::model::theme::ChatTheme;

/// Fixed discriminant literal marking a JSON payload as a character card.
pub const CHARACTER_CARD_TYPE: &str = "sully_character_card";

/// Current structural version of [`CharacterCard`].
pub const CHARACTER_CARD_VERSION: u32 = 1;

/// Portable projection of a character for sharing.
///
/// Identity and runtime state are stripped: the importing side mints a new
/// character id and starts with empty memory and impression state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCard {
    pub version: u32,
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub system_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worldview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprites: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_config: Option<SpriteConfig>,
    /// Custom theme bundled with the card when the character uses one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_theme: Option<ChatTheme>,
}

impl CharacterCard {
    /// Projects a profile into a shareable card.
    ///
    /// # Contract
    /// - Strips `id`, `memories`, `refinedMemories`, `activeMemoryMonths`
    ///   and `impression`.
    /// - Stamps the current card version and the fixed discriminant.
    pub fn from_profile(profile: &CharacterProfile, embedded_theme: Option<ChatTheme>) -> Self {
        Self {
            version: CHARACTER_CARD_VERSION,
            card_type: CHARACTER_CARD_TYPE.to_string(),
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
            description: profile.description.clone(),
            system_prompt: profile.system_prompt.clone(),
            worldview: profile.worldview.clone(),
            bubble_style: profile.bubble_style.clone(),
            chat_background: profile.chat_background.clone(),
            context_limit: profile.context_limit,
            date_background: profile.date_background.clone(),
            sprites: profile.sprites.clone(),
            sprite_config: profile.sprite_config,
            embedded_theme,
        }
    }

    /// Returns whether a decoded JSON value claims to be a character card.
    ///
    /// Import routines call this before deserializing, to tell cards apart
    /// from other JSON the user may hand them.
    pub fn is_character_card(value: &serde_json::Value) -> bool {
        value.get("type").and_then(serde_json::Value::as_str) == Some(CHARACTER_CARD_TYPE)
    }

    /// Checks discriminant and version on a decoded card.
    ///
    /// # Errors
    /// - [`CardError::WrongDiscriminant`] when `type` is not the card literal.
    /// - [`CardError::UnsupportedVersion`] when the card is newer than this
    ///   build understands.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.card_type != CHARACTER_CARD_TYPE {
            return Err(CardError::WrongDiscriminant(self.card_type.clone()));
        }
        if self.version > CHARACTER_CARD_VERSION {
            return Err(CardError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

/// Import-side rejection of a character card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    WrongDiscriminant(String),
    UnsupportedVersion(u32),
}

impl Display for CardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongDiscriminant(found) => write!(
                f,
                "payload type `{found}` is not `{CHARACTER_CARD_TYPE}`"
            ),
            Self::UnsupportedVersion(version) => write!(
                f,
                "card version {version} is newer than supported {CHARACTER_CARD_VERSION}"
            ),
        }
    }
}

impl Error for CardError {}
