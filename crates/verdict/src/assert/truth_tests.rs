// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{run, Outcome};

#[test]
fn assert_passes_on_true() {
    assert_eq!(run(|t| assert(t, 2 > 1, &[])), Outcome::Passed);
    assert_eq!(
        run(|t| assert(t, 2 > 1, &[&"message1", &"message2"])),
        Outcome::Passed
    );
}

#[test]
fn assert_fails_on_false() {
    let outcome = run(|t| assert(t, 2 < 1, &[]));
    assert_eq!(outcome, Outcome::Failed("Assert failed".to_string()));
}

#[test]
fn assert_failure_concatenates_fragments() {
    let outcome = run(|t| assert(t, false, &[&"message1", &"message2"]));
    assert_eq!(
        outcome,
        Outcome::Failed("Assert failed, message1message2".to_string())
    );
}

#[test]
fn assert_true_and_false() {
    assert_eq!(run(|t| assert_true(t, true, &[])), Outcome::Passed);
    assert_eq!(run(|t| assert_false(t, false, &[])), Outcome::Passed);
    assert_eq!(
        run(|t| assert_true(t, false, &[])),
        Outcome::Failed("AssertTrue failed".to_string())
    );
    assert_eq!(
        run(|t| assert_false(t, true, &[&"x=", &1])),
        Outcome::Failed("AssertFalse failed, x=1".to_string())
    );
}

#[test]
fn code_after_failure_does_not_run() {
    let mut reached = false;
    let outcome = run(|t| {
        assert_true(t, false, &[]);
        reached = true;
    });
    assert!(outcome.failed());
    assert!(!reached);
}
