// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use yare::parameterized;

#[test]
fn defaults_are_off() {
    assert!(!Settings::default().caller_location);
}

#[test]
fn unset_variable_keeps_defaults() {
    let settings = Settings::from_lookup(|_| None);
    assert_eq!(settings, Ok(Settings::default()));
}

#[parameterized(
    one = { "1", true },
    true_lower = { "true", true },
    true_mixed = { "True", true },
    yes = { "yes", true },
    on_padded = { " on ", true },
    zero = { "0", false },
    false_upper = { "FALSE", false },
    off = { "off", false },
    empty = { "", false },
)]
fn caller_location_flag(raw: &str, expected: bool) {
    let settings = Settings::from_lookup(|name| {
        (name == VERDICT_CALLER_LOCATION).then(|| raw.to_string())
    });
    assert_eq!(settings.map(|s| s.caller_location), Ok(expected));
}

#[test]
fn invalid_flag_is_an_error() {
    let err = Settings::from_lookup(|_| Some("maybe".to_string()));
    assert_eq!(
        err,
        Err(SettingsError::InvalidFlag {
            name: VERDICT_CALLER_LOCATION,
            value: "maybe".to_string(),
        })
    );
}

#[test]
fn builder_enables_caller_location() {
    assert!(Settings::default().with_caller_location(true).caller_location);
}


#[test]
fn deserialize_empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn deserialize_caller_location() {
    let settings: Settings = serde_json::from_str(r#"{"caller_location": true}"#).unwrap();
    assert!(settings.caller_location);
    assert_eq!(
        serde_json::to_string(&settings).unwrap(),
        r#"{"caller_location":true}"#
    );
}

#[test]
fn deserialize_rejects_unknown_fields() {
    let err = serde_json::from_str::<Settings>(r#"{"colour": true}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `colour`"), "{err}");
}
