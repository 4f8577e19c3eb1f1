// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers: a context that records failures instead of panicking.

use crate::context::TestContext;
use crate::fs::{Filesystem, OsFilesystem};
use crate::guard::panic_message;
use crate::message::Failure;
use crate::settings::Settings;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Unwind payload used by [`Recorder::fatal`].
pub(crate) struct Aborted;

/// Records failures and stops the test body by unwinding silently.
#[derive(Default)]
pub(crate) struct Recorder {
    failures: RefCell<Vec<Failure>>,
    settings: Settings,
    fs: Option<FakeFs>,
}

impl Recorder {
    pub(crate) fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub(crate) fn with_fs(fs: FakeFs) -> Self {
        Self {
            fs: Some(fs),
            ..Self::default()
        }
    }

    pub(crate) fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }
}

impl TestContext for Recorder {
    fn fatal(&self, failure: Failure) -> ! {
        self.failures.borrow_mut().push(failure);
        panic::resume_unwind(Box::new(Aborted))
    }

    fn filesystem(&self) -> &dyn Filesystem {
        match &self.fs {
            Some(fs) => fs as &dyn Filesystem,
            None => &OsFilesystem,
        }
    }

    fn settings(&self) -> Settings {
        self.settings
    }
}

/// How a recorded call ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Passed,
    Failed(String),
    Misused(String),
}

impl Outcome {
    pub(crate) fn failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub(crate) fn message(&self) -> &str {
        match self {
            Outcome::Passed => "",
            Outcome::Failed(msg) | Outcome::Misused(msg) => msg,
        }
    }
}

/// Run one assertion against `ctx` and classify what happened.
pub(crate) fn run_with<F>(ctx: &Recorder, f: F) -> Outcome
where
    F: FnOnce(&Recorder),
{
    let before = ctx.failures.borrow().len();
    match panic::catch_unwind(AssertUnwindSafe(|| f(ctx))) {
        Ok(()) => Outcome::Passed,
        Err(payload) if payload.is::<Aborted>() => {
            let failures = ctx.failures.borrow();
            assert_eq!(failures.len(), before + 1, "exactly one report per failure");
            Outcome::Failed(failures[before].to_string())
        }
        Err(payload) => Outcome::Misused(
            panic_message(payload.as_ref())
                .unwrap_or_default()
                .to_string(),
        ),
    }
}

/// Run one assertion against a fresh recorder.
pub(crate) fn run<F>(f: F) -> Outcome
where
    F: FnOnce(&Recorder),
{
    run_with(&Recorder::default(), f)
}

/// In-memory filesystem keyed by path.
#[derive(Default)]
pub(crate) struct FakeFs {
    entries: HashMap<PathBuf, io::ErrorKind>,
}

impl FakeFs {
    pub(crate) fn with_error(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.entries.insert(PathBuf::from(path), kind);
        self
    }
}

impl Filesystem for FakeFs {
    fn stat(&self, path: &Path) -> io::Result<()> {
        match self.entries.get(path) {
            Some(kind) => Err(io::Error::new(*kind, format!("stat {}", path.display()))),
            None => Ok(()),
        }
    }
}
