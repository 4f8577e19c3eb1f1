// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use crate::value::{ToValue, Value};
use std::fmt::Display;

/// Fail unless `val` is the absence sentinel (`None`, `()`, `Ok(())`).
///
/// An error value (`Err(e)`) fails with `err = <description>`.
#[track_caller]
pub fn assert_nil<C, V>(t: &C, val: V, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    V: ToValue,
{
    match val.to_value() {
        Value::Nil => {}
        Value::Error(desc) => fail(t, "AssertNil", format!("err = {desc}"), args),
        other => fail(t, "AssertNil", format!("val = {other}"), args),
    }
}

/// Fail if `val` is the absence sentinel.
#[track_caller]
pub fn assert_not_nil<C, V>(t: &C, val: V, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    V: ToValue,
{
    let val = val.to_value();
    if val.is_nil() {
        fail(t, "AssertNotNil", format!("val = {val}"), args);
    }
}

#[cfg(test)]
#[path = "nil_tests.rs"]
mod tests;
