use sully_core::{
    BubbleStyle, CardError, CharacterCard, CharacterProfile, ChatTheme, MemoryFragment, ThemeKind,
    UserImpression, CHARACTER_CARD_TYPE, CHARACTER_CARD_VERSION,
};

fn profile_with_runtime_state() -> CharacterProfile {
    let mut profile =
        CharacterProfile::new("Aria", "aria.png", "a gentle companion", "You are Aria.");
    profile.id = "c1".to_string();
    profile.worldview = Some("seaside town, near future".to_string());
    profile.append_memory(MemoryFragment::new("2026-08-01", "went stargazing"));
    profile.impression = Some(UserImpression::new());
    profile.active_memory_months = Some(vec!["2026-08".to_string()]);
    profile
}

fn custom_theme() -> ChatTheme {
    ChatTheme {
        id: "t1".to_string(),
        name: "midnight".to_string(),
        kind: ThemeKind::Custom,
        user: BubbleStyle::solid("#fff", "#123"),
        ai: BubbleStyle::solid("#000", "#eee"),
        custom_css: None,
    }
}

#[test]
fn projection_strips_identity_and_runtime_state() {
    let profile = profile_with_runtime_state();
    let card = CharacterCard::from_profile(&profile, None);

    assert_eq!(card.version, CHARACTER_CARD_VERSION);
    assert_eq!(card.card_type, CHARACTER_CARD_TYPE);
    assert_eq!(card.name, "Aria");
    assert_eq!(card.worldview, profile.worldview);

    let json = serde_json::to_value(&card).unwrap();
    for stripped in [
        "id",
        "memories",
        "refinedMemories",
        "activeMemoryMonths",
        "impression",
    ] {
        assert!(
            json.get(stripped).is_none(),
            "card must not carry `{stripped}`"
        );
    }
    assert_eq!(json["type"], "sully_character_card");
}

#[test]
fn embedded_theme_survives_a_round_trip() {
    let card = CharacterCard::from_profile(&profile_with_runtime_state(), Some(custom_theme()));

    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["embeddedTheme"]["name"], "midnight");

    let decoded: CharacterCard = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, card);
    decoded.validate().expect("projected card is valid");
}

#[test]
fn discriminant_check_tells_cards_apart_from_other_json() {
    let card_json = serde_json::to_value(CharacterCard::from_profile(
        &profile_with_runtime_state(),
        None,
    ))
    .unwrap();
    assert!(CharacterCard::is_character_card(&card_json));

    let other = serde_json::json!({ "type": "wallpaper_pack", "name": "sunsets" });
    assert!(!CharacterCard::is_character_card(&other));
    assert!(!CharacterCard::is_character_card(&serde_json::json!({})));
}

#[test]
fn validate_rejects_foreign_discriminant_and_future_version() {
    let mut card = CharacterCard::from_profile(&profile_with_runtime_state(), None);

    card.card_type = "someone_elses_card".to_string();
    assert_eq!(
        card.validate().unwrap_err(),
        CardError::WrongDiscriminant("someone_elses_card".to_string())
    );

    card.card_type = CHARACTER_CARD_TYPE.to_string();
    card.version = CHARACTER_CARD_VERSION + 1;
    assert_eq!(
        card.validate().unwrap_err(),
        CardError::UnsupportedVersion(CHARACTER_CARD_VERSION + 1)
    );
}
