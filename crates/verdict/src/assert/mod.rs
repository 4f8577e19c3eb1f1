// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion operations.
//!
//! Every operation takes the test context, the values under test and a list
//! of extra message fragments, evaluates one predicate and reports at most
//! one failure. All operations are `#[track_caller]`, so the optional
//! location prefix names the line that called the assertion.

mod container;
mod equality;
mod exists;
mod nil;
mod numeric;
mod panics;
mod pattern;
mod truth;
mod types;
mod zero;

pub use container::{
    assert_map_contain, assert_map_contain_key, assert_map_contain_value, assert_map_not_contain,
    assert_map_not_contain_key, assert_map_not_contain_value, assert_slice_contain,
    assert_slice_not_contain,
};
pub use equality::{assert_equal, assert_equivalent, assert_not_equal, assert_not_equivalent};
pub use exists::{assert_file_exists, assert_file_not_exists};
pub use nil::{assert_nil, assert_not_nil};
pub use numeric::{assert_between, assert_near, assert_not_between};
pub use panics::{assert_not_panic, assert_panic};
pub use pattern::{assert_match, assert_match_string};
pub use truth::{assert, assert_false, assert_true};
pub use types::{assert_implements, assert_is_type, assert_same_type, Capability};
pub use zero::{assert_not_zero, assert_zero};

use crate::context::TestContext;
use crate::message::Failure;
use std::fmt::Display;
use std::panic::Location;

/// Build the failure for `op` and hand it to the context.
#[track_caller]
pub(crate) fn fail<C>(t: &C, op: &'static str, detail: String, args: &[&dyn Display]) -> !
where
    C: TestContext + ?Sized,
{
    let mut failure = Failure::new(op, detail, args);
    if t.settings().caller_location {
        failure = failure.at(Location::caller());
    }
    tracing::debug!(op, failure = %failure, "assertion failed");
    t.fatal(failure)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
