//! Character profile aggregate and its owned state.
//!
//! # Responsibility
//! - Define the aggregate root for one companion character: identity,
//!   prompts, memory history and per-app styling overrides.
//! - Keep the impression structure versioned so its shape can evolve.
//!
//! # Invariants
//! - `id` is stable for the character's lifetime and is the foreign key used
//!   by messages, gallery images, diary entries, anniversaries and tasks.
//! - `memories` is append-only history; fragments are never rewritten.
//! - `SpriteConfig.x`/`y` are percentages in `[-100, 100]`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::new_id;
use crate::model::timefmt::{is_calendar_date, is_month_key};

/// Stable identifier for a companion character.
///
/// Kept as a type alias to make semantic intent explicit in signatures; ids
/// are plain strings on the wire.
pub type CharacterId = String;

/// Current structural version of [`UserImpression`].
pub const USER_IMPRESSION_VERSION: u32 = 2;

/// A dated summary snippet in a character's memory history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryFragment {
    pub id: String,
    /// Calendar date the fragment refers to, `YYYY-MM-DD`.
    pub date: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl MemoryFragment {
    /// Creates a fragment with a fresh id and no mood tag.
    pub fn new(date: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            date: date.into(),
            summary: summary.into(),
            mood: None,
        }
    }
}

/// Placement transform for a character sprite on the date-app stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub scale: f64,
    /// Horizontal offset in percent, `[-100, 100]`.
    pub x: f64,
    /// Vertical offset in percent, `[-100, 100]`.
    pub y: f64,
}

/// What the user likes, dislikes and holds as core values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueMap {
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub core_values: String,
}

/// Observed communication habits of the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BehaviorProfile {
    pub tone_style: String,
    pub emotion_summary: String,
    pub response_patterns: String,
}

/// Topics that move the user's mood in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmotionTriggers {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Emotional landscape the character has mapped for the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmotionSchema {
    pub triggers: EmotionTriggers,
    pub comfort_zone: String,
    pub stress_signals: Vec<String>,
}

/// Stable personality observations about the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalityCore {
    pub observed_traits: Vec<String>,
    pub interaction_style: String,
    pub summary: String,
}

/// A character's evolving structured model of the user (shape version 2).
///
/// Mutated incrementally by the external reasoning routine. Nested field
/// names are snake_case on the wire; `lastUpdated` is the one camelCase
/// holdover from the version 1 shape.
///
/// Consumers must check [`UserImpression::is_current`] before interpreting
/// the nested structure, since the shape may evolve with `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImpression {
    pub version: u32,
    #[serde(
        rename = "lastUpdated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<i64>,
    pub value_map: ValueMap,
    pub behavior_profile: BehaviorProfile,
    pub emotion_schema: EmotionSchema,
    pub personality_core: PersonalityCore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_changes: Option<Vec<String>>,
}

impl UserImpression {
    /// Creates an empty impression at the current structural version.
    pub fn new() -> Self {
        Self {
            version: USER_IMPRESSION_VERSION,
            last_updated: None,
            value_map: ValueMap::default(),
            behavior_profile: BehaviorProfile::default(),
            emotion_schema: EmotionSchema::default(),
            personality_core: PersonalityCore::default(),
            observed_changes: None,
        }
    }

    /// Returns whether this impression uses the current structural version.
    pub fn is_current(&self) -> bool {
        self.version == USER_IMPRESSION_VERSION
    }
}

impl Default for UserImpression {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate root for one companion character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    /// Stable foreign key referenced by all `charId`-bearing records.
    pub id: CharacterId,
    pub name: String,
    /// Avatar reference (asset id or URL).
    pub avatar: String,
    pub description: String,
    pub system_prompt: String,
    /// Global worldview/lore shared across chats with this character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worldview: Option<String>,
    /// Append-only memory history.
    #[serde(default)]
    pub memories: Vec<MemoryFragment>,
    /// Condensed long-term memory, keyed by `YYYY-MM` month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined_memories: Option<BTreeMap<String, String>>,
    /// Month keys currently loaded into the prompt context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_memory_months: Option<Vec<String>>,
    /// The character's internal impression of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impression: Option<UserImpression>,
    /// Chat theme id override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_background: Option<String>,
    /// Prompt context window limit in messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_background: Option<String>,
    /// Sprite references keyed by expression name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprites: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_config: Option<SpriteConfig>,
}

impl CharacterProfile {
    /// Creates a profile with a fresh stable id and empty optional state.
    pub fn new(
        name: impl Into<String>,
        avatar: impl Into<String>,
        description: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            avatar: avatar.into(),
            description: description.into(),
            system_prompt: system_prompt.into(),
            worldview: None,
            memories: Vec::new(),
            refined_memories: None,
            active_memory_months: None,
            impression: None,
            bubble_style: None,
            chat_background: None,
            context_limit: None,
            date_background: None,
            sprites: None,
            sprite_config: None,
        }
    }

    /// Appends a fragment to the memory history.
    ///
    /// History is append-only; existing fragments are never rewritten.
    pub fn append_memory(&mut self, fragment: MemoryFragment) {
        self.memories.push(fragment);
    }

    /// Checks shape-level invariants on this profile.
    ///
    /// # Errors
    /// - Sprite offsets outside `[-100, 100]` or non-positive sprite scale.
    /// - Memory fragment dates that are not `YYYY-MM-DD`.
    /// - Refined-memory keys or active month filters that are not `YYYY-MM`.
    pub fn validate(&self) -> Result<(), CharacterValidationError> {
        if let Some(config) = &self.sprite_config {
            config.validate()?;
        }
        for fragment in &self.memories {
            if !is_calendar_date(&fragment.date) {
                return Err(CharacterValidationError::InvalidMemoryDate(
                    fragment.date.clone(),
                ));
            }
        }
        if let Some(refined) = &self.refined_memories {
            for key in refined.keys() {
                if !is_month_key(key) {
                    return Err(CharacterValidationError::InvalidMonthKey(key.clone()));
                }
            }
        }
        if let Some(months) = &self.active_memory_months {
            for month in months {
                if !is_month_key(month) {
                    return Err(CharacterValidationError::InvalidMonthKey(month.clone()));
                }
            }
        }
        Ok(())
    }
}

impl SpriteConfig {
    /// Checks that offsets are in `[-100, 100]` and scale is positive.
    pub fn validate(&self) -> Result<(), CharacterValidationError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CharacterValidationError::InvalidSpriteScale(self.scale));
        }
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || !(-100.0..=100.0).contains(&value) {
                return Err(CharacterValidationError::SpriteOffsetOutOfRange {
                    axis,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Shape violation inside a character profile.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterValidationError {
    InvalidSpriteScale(f64),
    SpriteOffsetOutOfRange { axis: &'static str, value: f64 },
    InvalidMemoryDate(String),
    InvalidMonthKey(String),
}

impl Display for CharacterValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpriteScale(value) => {
                write!(f, "sprite scale must be a positive number, got {value}")
            }
            Self::SpriteOffsetOutOfRange { axis, value } => {
                write!(f, "sprite {axis} offset {value} is outside [-100, 100]")
            }
            Self::InvalidMemoryDate(date) => {
                write!(f, "memory date `{date}` is not a YYYY-MM-DD calendar date")
            }
            Self::InvalidMonthKey(key) => {
                write!(f, "memory month key `{key}` is not a YYYY-MM month")
            }
        }
    }
}

impl Error for CharacterValidationError {}
