// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use crate::value::ToValue;
use std::fmt::Display;

/// Fail unless `pattern` matches somewhere in `got`.
///
/// A pattern that does not compile fails too, with an `err = ...` clause.
#[track_caller]
pub fn assert_match<C>(t: &C, pattern: &str, got: impl AsRef<[u8]>, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    let got = got.as_ref();
    match t.matcher().is_match(pattern, got) {
        Ok(true) => {}
        Ok(false) => fail(
            t,
            "AssertMatch",
            format!("expected = {pattern:?}, got = {}", got.to_value()),
            args,
        ),
        Err(err) => fail(
            t,
            "AssertMatch",
            format!("expected = {pattern:?}, got = {}, err = {err}", got.to_value()),
            args,
        ),
    }
}

/// Fail unless `pattern` matches somewhere in the string `got`.
#[track_caller]
pub fn assert_match_string<C>(t: &C, pattern: &str, got: &str, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    match t.matcher().is_match(pattern, got.as_bytes()) {
        Ok(true) => {}
        Ok(false) => fail(
            t,
            "AssertMatchString",
            format!("expected = {pattern:?}, got = {got}"),
            args,
        ),
        Err(err) => fail(
            t,
            "AssertMatchString",
            format!("expected = {pattern:?}, got = {got}, err = {err}"),
            args,
        ),
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
