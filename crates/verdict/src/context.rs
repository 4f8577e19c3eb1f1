// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The test context: how failures leave the assertion library.

use crate::fs::{Filesystem, OsFilesystem};
use crate::matcher::{PatternMatcher, RegexMatcher};
use crate::message::Failure;
use crate::settings::Settings;

/// Handle supplied by the test runner.
///
/// [`fatal`](TestContext::fatal) is the only required method. It receives a
/// fully formatted failure and must stop the current test; it never returns.
/// The collaborators default to the real filesystem and the `regex` crate.
///
/// Assertions may be called from several threads at once; a context shared
/// that way must be `Sync`.
pub trait TestContext {
    /// Report a failure and stop the current test.
    fn fatal(&self, failure: Failure) -> !;

    fn filesystem(&self) -> &dyn Filesystem {
        &OsFilesystem
    }

    fn matcher(&self) -> &dyn PatternMatcher {
        &RegexMatcher
    }

    fn settings(&self) -> Settings {
        Settings::default()
    }
}

/// Context that fails the test by panicking, as `assert!` does.
///
/// This is the context to use under the standard `cargo test` harness.
#[derive(Clone, Copy, Debug, Default)]
pub struct Panicking {
    settings: Settings,
}

impl Panicking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings taken from the environment (see [`Settings::from_env`]).
    pub fn from_env() -> Self {
        Self::with_settings(Settings::from_env())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }
}

impl TestContext for Panicking {
    #[allow(clippy::panic)]
    fn fatal(&self, failure: Failure) -> ! {
        panic!("{failure}")
    }

    fn settings(&self) -> Settings {
        self.settings
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
