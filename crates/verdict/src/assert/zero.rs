// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use std::fmt::{Debug, Display};

/// Fail unless `val` equals `T::default()`.
///
/// The value is rendered with `Debug`, since zero checks apply to any
/// `Default` type rather than only to `ToValue` ones.
#[track_caller]
pub fn assert_zero<C, T>(t: &C, val: &T, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    T: Default + PartialEq + Debug,
{
    if *val != T::default() {
        fail(t, "AssertZero", format!("val = {val:?}"), args);
    }
}

/// Fail if `val` equals `T::default()`.
#[track_caller]
pub fn assert_not_zero<C, T>(t: &C, val: &T, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    T: Default + PartialEq + Debug,
{
    if *val == T::default() {
        fail(t, "AssertNotZero", format!("val = {val:?}"), args);
    }
}

#[cfg(test)]
#[path = "zero_tests.rs"]
mod tests;
