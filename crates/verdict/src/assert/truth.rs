// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use std::fmt::Display;

/// Fail unless `condition` holds.
#[track_caller]
pub fn assert<C>(t: &C, condition: bool, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    if !condition {
        fail(t, "Assert", String::new(), args);
    }
}

/// Fail unless `condition` is `true`.
#[track_caller]
pub fn assert_true<C>(t: &C, condition: bool, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    if !condition {
        fail(t, "AssertTrue", String::new(), args);
    }
}

/// Fail unless `condition` is `false`.
#[track_caller]
pub fn assert_false<C>(t: &C, condition: bool, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    if condition {
        fail(t, "AssertFalse", String::new(), args);
    }
}

#[cfg(test)]
#[path = "truth_tests.rs"]
mod tests;
