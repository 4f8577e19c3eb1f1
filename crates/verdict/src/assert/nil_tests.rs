// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{run, Outcome};
use std::io;

#[test]
fn none_and_ok_are_nil() {
    let none: Option<String> = None;
    let ok: Result<(), io::Error> = Ok(());
    assert_eq!(run(|t| assert_nil(t, &none, &[])), Outcome::Passed);
    assert_eq!(run(|t| assert_nil(t, &ok, &[])), Outcome::Passed);
    assert_eq!(run(|t| assert_nil(t, (), &[])), Outcome::Passed);
}

#[test]
fn some_is_not_nil() {
    let outcome = run(|t| assert_nil(t, Some(3), &[]));
    assert_eq!(outcome.message(), "AssertNil failed, val = 3");
    assert_eq!(run(|t| assert_not_nil(t, Some(3), &[])), Outcome::Passed);
}

#[test]
fn error_description_is_reported() {
    let err: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
    let outcome = run(|t| assert_nil(t, &err, &[&"opening config"]));
    assert_eq!(
        outcome.message(),
        "AssertNil failed, err = no such file, opening config"
    );
    assert_eq!(run(|t| assert_not_nil(t, &err, &[])), Outcome::Passed);
}

#[test]
fn not_nil_fails_on_none() {
    let none: Option<u8> = None;
    let outcome = run(|t| assert_not_nil(t, none, &[]));
    assert_eq!(
        outcome,
        Outcome::Failed("AssertNotNil failed, val = <nil>".to_string())
    );
}
