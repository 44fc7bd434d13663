use sully_core::{
    AppId, BackupValidationError, CharacterProfile, FullBackupData, Message, MessageRole,
    OsTheme, SupervisionTone, Task, UserProfile, BACKUP_SCHEMA_VERSION,
};

fn sample_backup() -> FullBackupData {
    let mut profile =
        CharacterProfile::new("Aria", "aria.png", "a gentle companion", "You are Aria.");
    profile.id = "c1".to_string();

    let mut backup = FullBackupData::new(1_700_000_000_000);
    backup.theme = Some(OsTheme {
        hue: 210.0,
        saturation: 40.0,
        lightness: 60.0,
        wallpaper: "night.png".to_string(),
        dark_mode: true,
        content_color: "#fefefe".to_string(),
    });
    backup.characters = Some(vec![profile]);
    backup.messages = Some(vec![Message::text(1, "c1", MessageRole::User, "hi", 1_000)]);
    backup.user_profile = Some(UserProfile {
        name: "mio".to_string(),
        avatar: "me.png".to_string(),
        bio: "night owl".to_string(),
    });
    backup
}

#[test]
fn new_envelope_is_empty_and_at_the_current_version() {
    let backup = FullBackupData::new(1_000);
    assert_eq!(backup.version, BACKUP_SCHEMA_VERSION);
    assert!(backup.is_supported_version());
    assert_eq!(backup.characters, None);
    backup.validate().expect("empty envelope is valid");
}

#[test]
fn round_trip_preserves_linkage_and_timestamps_exactly() {
    let backup = sample_backup();

    let json = serde_json::to_string(&backup).unwrap();
    let decoded: FullBackupData = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, backup);
    let character = &decoded.characters.as_ref().unwrap()[0];
    let message = &decoded.messages.as_ref().unwrap()[0];
    assert_eq!(message.char_id, character.id);
    assert_eq!(message.timestamp, 1_000);
}

#[test]
fn absent_collections_stay_off_the_wire() {
    let backup = sample_backup();

    let json = serde_json::to_value(&backup).unwrap();
    assert_eq!(json["version"], BACKUP_SCHEMA_VERSION);
    // Keys for absent collections must not exist at all, so a partial
    // backup imports as partial instead of as emptied-out collections.
    let object = json.as_object().unwrap();
    for absent in [
        "apiConfig",
        "apiPresets",
        "availableModels",
        "customIcons",
        "customThemes",
        "savedEmojis",
        "assets",
        "galleryImages",
        "diaries",
        "tasks",
        "anniversaries",
    ] {
        assert!(!object.contains_key(absent), "`{absent}` should be absent");
    }
}

#[test]
fn partial_backup_with_unknown_keys_still_decodes() {
    // Older exports may carry keys this build does not know; they are
    // ignored rather than rejected.
    let raw = serde_json::json!({
        "timestamp": 500,
        "version": 1,
        "availableModels": ["sully-chat-1"],
        "legacyField": { "anything": true }
    });
    let decoded: FullBackupData = serde_json::from_value(raw).unwrap();
    assert_eq!(decoded.timestamp, 500);
    assert_eq!(
        decoded.available_models,
        Some(vec!["sully-chat-1".to_string()])
    );
    assert_eq!(decoded.characters, None);
}

#[test]
fn validation_sweep_surfaces_nested_shape_violations() {
    let mut backup = sample_backup();
    let mut task = Task::new("water the plants", "c1", SupervisionTone::Gentle, 1_000);
    task.is_completed = true; // no completed_at
    backup.tasks = Some(vec![task]);

    let err = backup.validate().unwrap_err();
    assert!(matches!(err, BackupValidationError::Schedule(_)));
}

#[test]
fn future_schema_version_is_rejected_before_interpretation() {
    let mut backup = sample_backup();
    backup.version = BACKUP_SCHEMA_VERSION + 1;

    assert!(!backup.is_supported_version());
    assert_eq!(
        backup.validate().unwrap_err(),
        BackupValidationError::UnsupportedVersion(BACKUP_SCHEMA_VERSION + 1)
    );
}

#[test]
fn custom_icon_keys_match_app_id_wire_values() {
    let json = serde_json::to_value(AppId::ThemeMaker).unwrap();
    assert_eq!(json, "thememaker");
    assert!(serde_json::from_str::<AppId>("\"schedule\"").is_ok());
    assert!(serde_json::from_str::<AppId>("\"calculator\"").is_err());
}
