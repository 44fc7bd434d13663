//! Diary entries: one user-authored page per character per day, with an
//! optional character-authored reply page.
//!
//! # Invariants
//! - One entry per character per calendar day, by convention; the key is
//!   (`char_id`, `date`) and storage deduplication is external.
//! - Hiding an entry is a soft archive, never a hard delete.
//! - Sticker coordinates are percentages in `[0, 100]`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::character::CharacterId;
use crate::model::new_id;
use crate::model::timefmt::is_calendar_date;

/// A sticker placed on a diary page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: String,
    /// Emoji literal or image URL.
    pub url: String,
    /// Horizontal position in percent, `[0, 100]`.
    pub x: f64,
    /// Vertical position in percent, `[0, 100]`.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

/// One authored side of a diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryPage {
    pub text: String,
    /// Paper background style id.
    pub paper_style: String,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

/// A diary entry keyed by character and calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    /// Weak reference to `CharacterProfile.id`.
    pub char_id: CharacterId,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub user_page: DiaryPage,
    /// Populated later, once the character has written a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_page: Option<DiaryPage>,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    pub is_archived: bool,
}

impl DiaryEntry {
    /// Creates a visible entry with a fresh id and no character reply yet.
    pub fn new(
        char_id: impl Into<CharacterId>,
        date: impl Into<String>,
        user_page: DiaryPage,
        timestamp: i64,
    ) -> Self {
        Self::with_id(new_id(), char_id, date, user_page, timestamp)
    }

    /// Creates an entry with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: impl Into<String>,
        char_id: impl Into<CharacterId>,
        date: impl Into<String>,
        user_page: DiaryPage,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            char_id: char_id.into(),
            date: date.into(),
            user_page,
            char_page: None,
            timestamp,
            is_archived: false,
        }
    }

    /// Attaches the character's reply page.
    pub fn attach_reply(&mut self, page: DiaryPage) {
        self.char_page = Some(page);
    }

    /// Hides this entry without deleting it.
    pub fn archive(&mut self) {
        self.is_archived = true;
    }

    /// Makes an archived entry visible again.
    pub fn restore(&mut self) {
        self.is_archived = false;
    }

    /// Returns whether the entry should be shown in the journal.
    pub fn is_visible(&self) -> bool {
        !self.is_archived
    }

    /// Checks date format and sticker bounds on both pages.
    pub fn validate(&self) -> Result<(), DiaryValidationError> {
        if !is_calendar_date(&self.date) {
            return Err(DiaryValidationError::InvalidDate(self.date.clone()));
        }
        validate_page(&self.user_page)?;
        if let Some(page) = &self.char_page {
            validate_page(page)?;
        }
        Ok(())
    }
}

fn validate_page(page: &DiaryPage) -> Result<(), DiaryValidationError> {
    for sticker in &page.stickers {
        for (axis, value) in [("x", sticker.x), ("y", sticker.y)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(DiaryValidationError::StickerOutOfBounds {
                    sticker_id: sticker.id.clone(),
                    axis,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Shape violation inside a diary entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DiaryValidationError {
    InvalidDate(String),
    StickerOutOfBounds {
        sticker_id: String,
        axis: &'static str,
        value: f64,
    },
}

impl Display for DiaryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(date) => {
                write!(f, "diary date `{date}` is not a YYYY-MM-DD calendar date")
            }
            Self::StickerOutOfBounds {
                sticker_id,
                axis,
                value,
            } => write!(
                f,
                "sticker `{sticker_id}` {axis} position {value} is outside [0, 100]"
            ),
        }
    }
}

impl Error for DiaryValidationError {}
