use std::collections::BTreeMap;

use sully_core::{
    CharacterProfile, CharacterValidationError, MemoryFragment, SpriteConfig, UserImpression,
    USER_IMPRESSION_VERSION,
};

#[test]
fn new_profile_starts_with_empty_optional_state() {
    let profile = CharacterProfile::new("Aria", "aria.png", "a gentle companion", "You are Aria.");

    assert!(!profile.id.is_empty());
    assert_eq!(profile.name, "Aria");
    assert!(profile.memories.is_empty());
    assert_eq!(profile.worldview, None);
    assert_eq!(profile.impression, None);
    assert_eq!(profile.sprite_config, None);
    profile.validate().expect("fresh profile is valid");
}

#[test]
fn append_memory_grows_history_in_order() {
    let mut profile = CharacterProfile::new("Aria", "aria.png", "", "");
    profile.append_memory(MemoryFragment::new("2026-08-01", "went stargazing"));
    profile.append_memory(MemoryFragment::new("2026-08-02", "argued about tea"));

    assert_eq!(profile.memories.len(), 2);
    assert_eq!(profile.memories[0].summary, "went stargazing");
    assert_eq!(profile.memories[1].date, "2026-08-02");
}

#[test]
fn profile_serialization_uses_camel_case_wire_names() {
    let mut profile = CharacterProfile::new("Aria", "aria.png", "desc", "prompt");
    profile.id = "c1".to_string();
    profile.context_limit = Some(40);
    profile.chat_background = Some("bg.png".to_string());

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["id"], "c1");
    assert_eq!(json["systemPrompt"], "prompt");
    assert_eq!(json["contextLimit"], 40);
    assert_eq!(json["chatBackground"], "bg.png");
    assert!(json.get("refinedMemories").is_none());
    assert!(json.get("activeMemoryMonths").is_none());

    let decoded: CharacterProfile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn impression_keeps_snake_case_body_and_camel_case_last_updated() {
    let mut impression = UserImpression::new();
    impression.last_updated = Some(1_700_000_000_000);
    impression.value_map.likes.push("astronomy".to_string());
    impression.emotion_schema.triggers.negative.push("mondays".to_string());

    assert_eq!(impression.version, USER_IMPRESSION_VERSION);
    assert!(impression.is_current());

    let json = serde_json::to_value(&impression).unwrap();
    assert_eq!(json["version"], 2);
    assert_eq!(json["lastUpdated"], 1_700_000_000_000_i64);
    assert_eq!(json["value_map"]["likes"][0], "astronomy");
    assert_eq!(json["emotion_schema"]["triggers"]["negative"][0], "mondays");
    assert_eq!(json["personality_core"]["summary"], "");

    let decoded: UserImpression = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, impression);
}

#[test]
fn impression_from_a_future_version_is_not_current() {
    let mut impression = UserImpression::new();
    impression.version = USER_IMPRESSION_VERSION + 1;
    assert!(!impression.is_current());
}

#[test]
fn sprite_offsets_outside_range_are_rejected() {
    let config = SpriteConfig {
        scale: 1.0,
        x: 101.0,
        y: 0.0,
    };
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        CharacterValidationError::SpriteOffsetOutOfRange {
            axis: "x",
            value: 101.0,
        }
    );

    let ok = SpriteConfig {
        scale: 1.5,
        x: -100.0,
        y: 100.0,
    };
    ok.validate().expect("boundary offsets are allowed");
}

#[test]
fn non_positive_sprite_scale_is_rejected() {
    let config = SpriteConfig {
        scale: 0.0,
        x: 0.0,
        y: 0.0,
    };
    assert_eq!(
        config.validate().unwrap_err(),
        CharacterValidationError::InvalidSpriteScale(0.0)
    );
}

#[test]
fn validate_rejects_bad_month_keys_and_memory_dates() {
    let mut profile = CharacterProfile::new("Aria", "aria.png", "", "");

    profile.append_memory(MemoryFragment::new("august 3rd", "malformed"));
    let err = profile.validate().unwrap_err();
    assert_eq!(
        err,
        CharacterValidationError::InvalidMemoryDate("august 3rd".to_string())
    );

    profile.memories.clear();
    let mut refined = BTreeMap::new();
    refined.insert("2026-08-01".to_string(), "a whole month of stars".to_string());
    profile.refined_memories = Some(refined);
    let err = profile.validate().unwrap_err();
    assert_eq!(
        err,
        CharacterValidationError::InvalidMonthKey("2026-08-01".to_string())
    );
}
