//! Gallery image record with asynchronously generated review text.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::character::CharacterId;
use crate::model::new_id;

/// An image owned by the gallery and associated with a character.
///
/// `review` is authored by the character after the image exists, so it and
/// its timestamp arrive later or never.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    /// Weak reference to `CharacterProfile.id`.
    pub char_id: CharacterId,
    pub url: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    /// Must be >= `timestamp` when `review` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_timestamp: Option<i64>,
}

impl GalleryImage {
    /// Creates an image with a fresh id and no review yet.
    pub fn new(
        char_id: impl Into<CharacterId>,
        url: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self::with_id(new_id(), char_id, url, timestamp)
    }

    /// Creates an image with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: impl Into<String>,
        char_id: impl Into<CharacterId>,
        url: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            char_id: char_id.into(),
            url: url.into(),
            timestamp,
            review: None,
            review_timestamp: None,
        }
    }

    /// Attaches the character's generated review.
    ///
    /// # Contract
    /// - Sets `review` and `review_timestamp` together, keeping the
    ///   presence invariant intact.
    pub fn attach_review(&mut self, review: impl Into<String>, now: i64) {
        self.review = Some(review.into());
        self.review_timestamp = Some(now);
    }

    /// Checks the review presence/ordering invariant.
    ///
    /// # Errors
    /// - A review without its timestamp.
    /// - A review timestamp earlier than the image creation time.
    pub fn validate(&self) -> Result<(), GalleryValidationError> {
        if self.review.is_some() {
            match self.review_timestamp {
                None => return Err(GalleryValidationError::ReviewTimestampMissing),
                Some(reviewed) if reviewed < self.timestamp => {
                    return Err(GalleryValidationError::ReviewBeforeCreation {
                        created: self.timestamp,
                        reviewed,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Shape violation on a gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryValidationError {
    ReviewTimestampMissing,
    ReviewBeforeCreation { created: i64, reviewed: i64 },
}

impl Display for GalleryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReviewTimestampMissing => {
                write!(f, "image has a review but no review timestamp")
            }
            Self::ReviewBeforeCreation { created, reviewed } => write!(
                f,
                "review timestamp {reviewed} precedes image creation {created}"
            ),
        }
    }
}

impl Error for GalleryValidationError {}
