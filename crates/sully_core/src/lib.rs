//! Core data schema for the Sully companion application.
//! This crate is the single source of truth for persisted shapes and their
//! wire names; storage, rendering and model-call logic live elsewhere.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::app::{AppConfig, AppId, OsTheme, Toast, ToastKind, VirtualTime};
pub use model::backup::{
    AssetBlob, BackupValidationError, FullBackupData, SavedEmoji, BACKUP_SCHEMA_VERSION,
};
pub use model::card::{CardError, CharacterCard, CHARACTER_CARD_TYPE, CHARACTER_CARD_VERSION};
pub use model::character::{
    CharacterId, CharacterProfile, CharacterValidationError, MemoryFragment, SpriteConfig,
    UserImpression, USER_IMPRESSION_VERSION,
};
pub use model::diary::{DiaryEntry, DiaryPage, DiaryValidationError, Sticker};
pub use model::gallery::{GalleryImage, GalleryValidationError};
pub use model::message::{
    sort_for_display, Message, MessageMetadata, MessageRole, MessageType,
};
pub use model::schedule::{
    Anniversary, ScheduleValidationError, SupervisionTone, Task,
};
pub use model::settings::{ApiConfig, ApiPreset, UserProfile};
pub use model::theme::{BubbleStyle, ChatTheme, ThemeKind, ThemeValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
