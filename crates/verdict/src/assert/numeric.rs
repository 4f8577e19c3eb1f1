// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use std::fmt::Display;

/// Fail unless `|expected - got| <= abs`.
///
/// A NaN on either side fails.
#[track_caller]
pub fn assert_near<C>(
    t: &C,
    expected: impl Into<f64>,
    got: impl Into<f64>,
    abs: impl Into<f64>,
    args: &[&dyn Display],
) where
    C: TestContext + ?Sized,
{
    let (expected, got, abs) = (expected.into(), got.into(), abs.into());
    let within = (expected - got).abs() <= abs;
    if !within {
        fail(
            t,
            "AssertNear",
            format!("expected = {expected}, got = {got}, abs = {abs}"),
            args,
        );
    }
}

/// Fail unless `min <= val <= max`.
#[track_caller]
pub fn assert_between<C>(
    t: &C,
    min: impl Into<f64>,
    max: impl Into<f64>,
    val: impl Into<f64>,
    args: &[&dyn Display],
) where
    C: TestContext + ?Sized,
{
    let (min, max, val) = (min.into(), max.into(), val.into());
    if !in_range(min, max, val) {
        fail(
            t,
            "AssertBetween",
            format!("min = {min}, max = {max}, val = {val}"),
            args,
        );
    }
}

/// Fail if `min <= val <= max`.
#[track_caller]
pub fn assert_not_between<C>(
    t: &C,
    min: impl Into<f64>,
    max: impl Into<f64>,
    val: impl Into<f64>,
    args: &[&dyn Display],
) where
    C: TestContext + ?Sized,
{
    let (min, max, val) = (min.into(), max.into(), val.into());
    if in_range(min, max, val) {
        fail(
            t,
            "AssertNotBetween",
            format!("min = {min}, max = {max}, val = {val}"),
            args,
        );
    }
}

fn in_range(min: f64, max: f64, val: f64) -> bool {
    min <= val && val <= max
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
