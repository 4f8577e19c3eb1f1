// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion helpers for test suites.
//!
//! Each assertion evaluates one predicate and, when it does not hold, hands a
//! single formatted [`Failure`] to the [`TestContext`] supplied by the test
//! runner. The context decides how the test stops; [`Panicking`] fails it the
//! way `assert!` does.
//!
//! Equality is structural across a dynamic [`Value`] model, so values of
//! different static types can be compared:
//!
//! ```
//! use verdict::{assert_equal, assert_equivalent, assert_slice_contain, Panicking};
//!
//! let t = Panicking::new();
//! assert_equal(&t, "abc", "ABC".to_lowercase(), &[]);
//! assert_equivalent(&t, 5i32, 5u64, &[&"widths differ, values do not"]);
//! assert_slice_contain(&t, [1, 1, 2, 3, 5, 8, 13], 8, &[]);
//! ```
//!
//! Extra message fragments are concatenated with no separator and appended
//! to the failure line.

mod assert;
mod context;
mod equal;
mod error;
mod fs;
mod guard;
mod matcher;
mod message;
mod settings;
mod value;

#[cfg(test)]
mod test_support;

pub use assert::*;
pub use context::{Panicking, TestContext};
pub use equal::{
    canonical_text, deep_equal, equivalent, numeric_kind, numerically_equal, NumericKind,
};
pub use error::{PatternError, SettingsError, UsageError};
pub use fs::{Filesystem, OsFilesystem};
pub use guard::{catch_panic, panic_message, PanicOutcome};
pub use matcher::{PatternMatcher, RegexMatcher};
pub use message::{concat, Failure};
pub use settings::{Settings, VERDICT_CALLER_LOCATION};
pub use value::{FloatWidth, IntWidth, Kind, ToValue, Value};
