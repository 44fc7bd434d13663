use sully_core::{GalleryImage, GalleryValidationError};

#[test]
fn new_image_has_no_review_and_is_valid() {
    let image = GalleryImage::with_id("g1", "c1", "sunset.png", 1_000);
    assert_eq!(image.review, None);
    assert_eq!(image.review_timestamp, None);
    image.validate().expect("unreviewed image is valid");
}

#[test]
fn new_mints_a_fresh_id() {
    let first = GalleryImage::new("c1", "sunset.png", 1_000);
    let second = GalleryImage::new("c1", "sunset.png", 1_000);
    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
}

#[test]
fn attach_review_sets_text_and_timestamp_together() {
    let mut image = GalleryImage::with_id("g1", "c1", "sunset.png", 1_000);
    image.attach_review("I love how the light falls here.", 5_000);

    assert_eq!(
        image.review.as_deref(),
        Some("I love how the light falls here.")
    );
    assert_eq!(image.review_timestamp, Some(5_000));
    image.validate().expect("reviewed image is valid");
}

#[test]
fn review_without_timestamp_is_rejected() {
    let mut image = GalleryImage::with_id("g1", "c1", "sunset.png", 1_000);
    image.review = Some("orphaned review".to_string());
    assert_eq!(
        image.validate().unwrap_err(),
        GalleryValidationError::ReviewTimestampMissing
    );
}

#[test]
fn review_predating_the_image_is_rejected() {
    let mut image = GalleryImage::with_id("g1", "c1", "sunset.png", 1_000);
    image.review = Some("time traveller".to_string());
    image.review_timestamp = Some(500);
    assert_eq!(
        image.validate().unwrap_err(),
        GalleryValidationError::ReviewBeforeCreation {
            created: 1_000,
            reviewed: 500,
        }
    );
}

#[test]
fn image_serialization_uses_expected_wire_fields() {
    let mut image = GalleryImage::with_id("g1", "c1", "sunset.png", 1_000);
    image.attach_review("lovely", 2_000);

    let json = serde_json::to_value(&image).unwrap();
    assert_eq!(json["charId"], "c1");
    assert_eq!(json["reviewTimestamp"], 2_000);

    let decoded: GalleryImage = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, image);
}
