//! Full-backup export envelope.
//!
//! # Responsibility
//! - Aggregate every persisted collection into one serializable snapshot.
//! - Give import routines a version gate and a shape-validation sweep.
//!
//! # Invariants
//! - Every collection field is optional so partial/incremental backups stay
//!   representable; absent collections serialize as absent keys.
//! - A backup is a snapshot, not a live view; it carries copies only.
//! - Referential integrity across collections is NOT checked here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::app::OsTheme;
use crate::model::character::{CharacterProfile, CharacterValidationError};
use crate::model::diary::{DiaryEntry, DiaryValidationError};
use crate::model::gallery::{GalleryImage, GalleryValidationError};
use crate::model::message::Message;
use crate::model::schedule::{Anniversary, ScheduleValidationError, Task};
use crate::model::settings::{ApiConfig, ApiPreset, UserProfile};
use crate::model::theme::{ChatTheme, ThemeValidationError};

/// Current structural version of [`FullBackupData`].
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// A saved custom emoji/sticker shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEmoji {
    pub name: String,
    pub url: String,
}

/// An embedded binary asset, base64 data keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBlob {
    pub id: String,
    pub data: String,
}

/// Top-level serialization envelope for export/import of all persisted state.
///
/// Import routines must read `version` before assuming field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBackupData {
    /// When this snapshot was taken. Epoch milliseconds.
    pub timestamp: i64,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<OsTheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_config: Option<ApiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_presets: Option<Vec<ApiPreset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
    /// Custom launcher icons keyed by app id string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icons: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<CharacterProfile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_themes: Option<Vec<ChatTheme>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_emojis: Option<Vec<SavedEmoji>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetBlob>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<GalleryImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diaries: Option<Vec<DiaryEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anniversaries: Option<Vec<Anniversary>>,
}

impl FullBackupData {
    /// Creates an empty envelope at the current schema version.
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            version: BACKUP_SCHEMA_VERSION,
            theme: None,
            api_config: None,
            api_presets: None,
            available_models: None,
            custom_icons: None,
            characters: None,
            messages: None,
            custom_themes: None,
            saved_emojis: None,
            assets: None,
            gallery_images: None,
            user_profile: None,
            diaries: None,
            tasks: None,
            anniversaries: None,
        }
    }

    /// Returns whether this build understands the backup's schema version.
    pub fn is_supported_version(&self) -> bool {
        self.version <= BACKUP_SCHEMA_VERSION
    }

    /// Runs the shape-validation sweep over every contained collection.
    ///
    /// Checks record-local invariants only (ranges, date formats, the task
    /// completion invariant). Cross-collection referential integrity stays
    /// with the importing application.
    ///
    /// # Errors
    /// - Unsupported schema version.
    /// - The first shape violation found in any collection, wrapped per
    ///   domain.
    pub fn validate(&self) -> Result<(), BackupValidationError> {
        if !self.is_supported_version() {
            return Err(BackupValidationError::UnsupportedVersion(self.version));
        }
        for profile in self.characters.iter().flatten() {
            profile.validate()?;
        }
        for theme in self.custom_themes.iter().flatten() {
            theme.validate()?;
        }
        for image in self.gallery_images.iter().flatten() {
            image.validate()?;
        }
        for entry in self.diaries.iter().flatten() {
            entry.validate()?;
        }
        for task in self.tasks.iter().flatten() {
            task.validate()?;
        }
        for anniversary in self.anniversaries.iter().flatten() {
            anniversary.validate()?;
        }
        Ok(())
    }
}

/// Shape violation found while sweeping a backup envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum BackupValidationError {
    UnsupportedVersion(u32),
    Character(CharacterValidationError),
    Theme(ThemeValidationError),
    Gallery(GalleryValidationError),
    Diary(DiaryValidationError),
    Schedule(ScheduleValidationError),
}

impl Display for BackupValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedVersion(version) => write!(
                f,
                "backup schema version {version} is newer than supported {BACKUP_SCHEMA_VERSION}"
            ),
            Self::Character(err) => write!(f, "{err}"),
            Self::Theme(err) => write!(f, "{err}"),
            Self::Gallery(err) => write!(f, "{err}"),
            Self::Diary(err) => write!(f, "{err}"),
            Self::Schedule(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BackupValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedVersion(_) => None,
            Self::Character(err) => Some(err),
            Self::Theme(err) => Some(err),
            Self::Gallery(err) => Some(err),
            Self::Diary(err) => Some(err),
            Self::Schedule(err) => Some(err),
        }
    }
}

impl From<CharacterValidationError> for BackupValidationError {
    fn from(value: CharacterValidationError) -> Self {
        Self::Character(value)
    }
}

impl From<ThemeValidationError> for BackupValidationError {
    fn from(value: ThemeValidationError) -> Self {
        Self::Theme(value)
    }
}

impl From<GalleryValidationError> for BackupValidationError {
    fn from(value: GalleryValidationError) -> Self {
        Self::Gallery(value)
    }
}

impl From<DiaryValidationError> for BackupValidationError {
    fn from(value: DiaryValidationError) -> Self {
        Self::Diary(value)
    }
}

impl From<ScheduleValidationError> for BackupValidationError {
    fn from(value: ScheduleValidationError) -> Self {
        Self::Schedule(value)
    }
}
