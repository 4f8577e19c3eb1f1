// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use crate::equal::{deep_equal, equivalent};
use crate::value::ToValue;
use std::fmt::Display;

/// Fail unless `expected` and `got` are deeply equal.
///
/// Numbers must agree in kind and width: `5i32` is not equal to `5i64`.
/// Use [`assert_equivalent`] for the numeric-aware comparison.
#[track_caller]
pub fn assert_equal<C, E, G>(t: &C, expected: E, got: G, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    E: ToValue,
    G: ToValue,
{
    let (expected, got) = (expected.to_value(), got.to_value());
    if !deep_equal(&expected, &got) {
        fail(
            t,
            "AssertEqual",
            format!("expected = {expected}, got = {got}"),
            args,
        );
    }
}

/// Fail if `expected` and `got` are deeply equal.
#[track_caller]
pub fn assert_not_equal<C, E, G>(t: &C, expected: E, got: G, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    E: ToValue,
    G: ToValue,
{
    let (expected, got) = (expected.to_value(), got.to_value());
    if deep_equal(&expected, &got) {
        fail(
            t,
            "AssertNotEqual",
            format!("expected = {expected}, got = {got}"),
            args,
        );
    }
}

/// Fail unless `expected` and `got` are equivalent: numerically equal when
/// both are numbers, deeply equal otherwise.
#[track_caller]
pub fn assert_equivalent<C, E, G>(t: &C, expected: E, got: G, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    E: ToValue,
    G: ToValue,
{
    let (expected, got) = (expected.to_value(), got.to_value());
    if !equivalent(&expected, &got) {
        fail(
            t,
            "AssertEquivalent",
            format!("expected = {expected}, got = {got}"),
            args,
        );
    }
}

/// Fail if `expected` and `got` are equivalent.
#[track_caller]
pub fn assert_not_equivalent<C, E, G>(t: &C, expected: E, got: G, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    E: ToValue,
    G: ToValue,
{
    let (expected, got) = (expected.to_value(), got.to_value());
    if equivalent(&expected, &got) {
        fail(
            t,
            "AssertNotEquivalent",
            format!("expected = {expected}, got = {got}"),
            args,
        );
    }
}

#[cfg(test)]
#[path = "equality_tests.rs"]
mod tests;
