//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn ada() -> User {
    User::new(
        UserId::new(7),
        UserFields::new("Ada", "Lovelace", "9876543210", "ada@example.com"),
    )
}

#[rstest]
fn user_id_parses_decimal_text() {
    assert_eq!("42".parse::<UserId>(), Ok(UserId::new(42)));
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("-1")]
#[case("1.5")]
fn user_id_rejects_non_numeric_text(#[case] raw: &str) {
    assert!(raw.parse::<UserId>().is_err());
}

#[rstest]
fn user_id_next_increments() {
    assert_eq!(UserId::FIRST.next(), UserId::new(2));
    assert_eq!(UserId::new(u64::MAX).next(), UserId::new(u64::MAX));
}

#[rstest]
fn serialises_flat_camel_case_record(ada: User) {
    let value = serde_json::to_value(&ada).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phoneNumber": "9876543210",
            "emailAddress": "ada@example.com",
        })
    );
}

#[rstest]
fn omits_fields_never_supplied() {
    let user = User::new(
        UserId::FIRST,
        UserFields::default().with(FIRST_NAME, "Bob"),
    );

    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(value, json!({ "id": 1, "firstName": "Bob" }));
}

#[rstest]
fn deserialises_record_from_json(ada: User) {
    let parsed: User = serde_json::from_value(json!({
        "id": 7,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "phoneNumber": "9876543210",
        "emailAddress": "ada@example.com",
    }))
    .expect("parse user");
    assert_eq!(parsed, ada);
}

#[rstest]
fn fields_keep_unknown_keys_and_any_value_type() {
    let fields: UserFields = serde_json::from_value(json!({
        "firstName": "Ada",
        "phoneNumber": 9876543210_u64,
        "nickname": "countess",
    }))
    .expect("parse fields");

    assert_eq!(fields.first_name(), Some("Ada"));
    assert_eq!(fields.phone_number(), None);
    assert_eq!(fields.get(PHONE_NUMBER), Some(&json!(9876543210_u64)));
    assert_eq!(fields.text("nickname"), Some("countess"));
}

#[rstest]
fn fields_drop_id_and_null_values() {
    let fields: UserFields = serde_json::from_value(json!({
        "id": 99,
        "firstName": "Ada",
        "lastName": null,
    }))
    .expect("parse fields");

    assert_eq!(fields, UserFields::default().with(FIRST_NAME, "Ada"));
    assert!(UserFields::default().with("id", 5).is_empty());
}

#[rstest]
fn stored_extra_keys_round_trip_with_the_record() {
    let user = User::new(
        UserId::new(3),
        UserFields::default()
            .with(FIRST_NAME, "Ada")
            .with("tags", json!(["admin"])),
    );

    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(value, json!({"id": 3, "firstName": "Ada", "tags": ["admin"]}));
    let parsed: User = serde_json::from_value(value).expect("parse user");
    assert_eq!(parsed, user);
}

#[rstest]
fn apply_preserves_unspecified_fields_and_id(mut ada: User) {
    ada.apply(UserFields::default().with(PHONE_NUMBER, "8123456780"));

    assert_eq!(ada.id(), UserId::new(7));
    assert_eq!(ada.fields().phone_number(), Some("8123456780"));
    assert_eq!(ada.fields().first_name(), Some("Ada"));
    assert_eq!(ada.fields().last_name(), Some("Lovelace"));
    assert_eq!(ada.fields().email_address(), Some("ada@example.com"));
}

#[rstest]
fn apply_replaces_values_whatever_their_type(mut ada: User) {
    ada.apply(UserFields::default().with(PHONE_NUMBER, 42));

    assert_eq!(ada.fields().get(PHONE_NUMBER), Some(&json!(42)));
    assert_eq!(ada.fields().first_name(), Some("Ada"));
}

#[rstest]
fn empty_patch_changes_nothing(mut ada: User) {
    let before = ada.clone();
    ada.apply(UserFields::default());
    assert_eq!(ada, before);
    assert!(UserFields::default().is_empty());
}
