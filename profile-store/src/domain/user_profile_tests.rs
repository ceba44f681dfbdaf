//! Tests for the user profile model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn full_profile() -> UserProfile {
    UserProfile::builder("u1")
        .name("Alex")
        .phone("+20 100 000 0000")
        .profile_picture_url("https://cdn.example.test/u1.png")
        .seller(true)
        .build()
}

#[rstest]
fn new_profile_leaves_optional_fields_unset() {
    let profile = UserProfile::new("u1");

    assert_eq!(profile.uid().as_str(), "u1");
    assert!(profile.name().is_none());
    assert!(profile.phone().is_none());
    assert!(profile.profile_picture_url().is_none());
    assert!(!profile.is_seller());
}

#[rstest]
fn serialises_with_camel_case_keys(full_profile: UserProfile) {
    let value = serde_json::to_value(&full_profile).expect("serialise profile");

    assert_eq!(
        value,
        json!({
            "uid": "u1",
            "name": "Alex",
            "phone": "+20 100 000 0000",
            "profilePictureUrl": "https://cdn.example.test/u1.png",
            "isSeller": true,
        })
    );
}

#[rstest]
fn unset_fields_are_omitted_but_seller_flag_is_kept() {
    let value = serde_json::to_value(UserProfile::new("u2")).expect("serialise profile");

    assert_eq!(value, json!({ "uid": "u2", "isSeller": false }));
}

#[rstest]
fn missing_seller_flag_defaults_to_false() {
    let profile: UserProfile =
        serde_json::from_value(json!({ "uid": "u3", "name": "Sam" })).expect("decode profile");

    assert_eq!(profile, UserProfile::builder("u3").name("Sam").build());
}

#[rstest]
fn unknown_document_keys_are_ignored() {
    let profile: UserProfile = serde_json::from_value(json!({
        "uid": "u4",
        "isSeller": true,
        "favouriteCuisine": "koshari",
    }))
    .expect("decode profile");

    assert!(profile.is_seller());
    assert_eq!(profile.uid().as_str(), "u4");
}

#[rstest]
#[case::empty("")]
#[case::padded("  u5  ")]
#[case::path_like("users/u5")]
fn identifiers_are_not_validated(#[case] raw: &str) {
    let uid = UserId::new(raw);

    assert_eq!(uid.as_str(), raw);
    assert_eq!(uid.to_string(), raw);
    assert_eq!(String::from(uid), raw);
}
