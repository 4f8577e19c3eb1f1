// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use crate::guard::{catch_panic, PanicOutcome};
use std::fmt::Display;

/// Run `f` and fail unless it panics.
#[track_caller]
pub fn assert_panic<C, F, R>(t: &C, f: F, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    F: FnOnce() -> R,
{
    if let PanicOutcome::Returned = catch_panic(f) {
        fail(t, "AssertPanic", "returned normally".to_string(), args);
    }
}

/// Run `f` and fail if it panics, reporting the panic message.
#[track_caller]
pub fn assert_not_panic<C, F, R>(t: &C, f: F, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
    F: FnOnce() -> R,
{
    let outcome = catch_panic(f);
    if outcome.is_panicked() {
        let message = outcome.message().unwrap_or("<non-string payload>");
        fail(t, "AssertNotPanic", format!("panic = {message}"), args);
    }
}

#[cfg(test)]
#[path = "panics_tests.rs"]
mod tests;
