// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::settings::Settings;
use crate::test_support::{run, run_with, Outcome, Recorder};

#[test]
fn location_is_omitted_by_default() {
    let outcome = run(|t| assert_true(t, false, &[]));
    assert_eq!(outcome.message(), "AssertTrue failed");
}

#[test]
fn location_names_the_calling_line() {
    let ctx = Recorder::with_settings(Settings::default().with_caller_location(true));
    #[rustfmt::skip]
    let (line, outcome) = (line!(), run_with(&ctx, |t| assert_equal(t, 1, 2, &[])));
    assert_eq!(
        outcome.message(),
        format!("{}:{}: AssertEqual failed, expected = 1, got = 2", file!(), line)
    );

    let failures = ctx.failures();
    assert_eq!(failures.len(), 1);
    let location = failures[0].location().map(|l| (l.file(), l.line()));
    assert_eq!(location, Some((file!(), line)));
}

#[test]
fn location_survives_nested_helpers() {
    let ctx = Recorder::with_settings(Settings::default().with_caller_location(true));
    #[rustfmt::skip]
    let (line, outcome) = (line!(), run_with(&ctx, |t| assert_slice_contain(t, [1, 2], 3, &[])));
    assert!(outcome
        .message()
        .starts_with(&format!("{}:{}: AssertSliceContain failed", file!(), line)));
}

#[test]
fn each_failure_is_reported_once() {
    let ctx = Recorder::default();
    assert!(run_with(&ctx, |t| assert_between(t, 0, 1, 2, &[])).failed());
    assert!(run_with(&ctx, |t| assert_between(t, 0, 1, 3, &[])).failed());
    assert_eq!(run_with(&ctx, |t| assert_between(t, 0, 1, 1, &[])), Outcome::Passed);

    let ops: Vec<&str> = ctx.failures().iter().map(|f| f.op()).collect();
    assert_eq!(ops, vec!["AssertBetween", "AssertBetween"]);
}

#[test]
fn works_through_a_trait_object() {
    let ctx = Recorder::default();
    let dyn_ctx: &dyn TestContext = &ctx;
    assert_eq!(
        run_with(&ctx, |_| assert_true(dyn_ctx, true, &[])),
        Outcome::Passed
    );
}
