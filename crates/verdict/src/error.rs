// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types.
//!
//! A failed assertion is not an error: it is a [`Failure`](crate::Failure)
//! handed to the test context. The types here cover everything else.

use crate::value::Kind;
use thiserror::Error;

/// An assertion was called with an argument of the wrong shape.
///
/// This is a programming error in the test, never an assertion failure.
/// It is raised as a panic and never reaches the test context.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("{op} called with non-slice value of kind {kind}")]
    NotASequence { op: &'static str, kind: Kind },

    #[error("{op} called with non-map value of kind {kind}")]
    NotAMap { op: &'static str, kind: Kind },
}

/// A regular expression could not be compiled.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid regex pattern '{pattern}': {error}")]
    Invalid { pattern: String, error: String },
}

/// An environment setting could not be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid boolean for {name}: {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Abort the calling test with a usage error.
#[track_caller]
#[allow(clippy::panic)]
pub(crate) fn raise(err: UsageError) -> ! {
    tracing::warn!(error = %err, "assertion misuse");
    panic!("usage error: {err}")
}
