// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure message construction.

use std::fmt::{self, Display, Write as _};
use std::panic::Location;

/// Concatenate extra message fragments positionally, with no separator.
pub fn concat(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for arg in args {
        // Writing into a String cannot fail
        let _ = write!(out, "{arg}");
    }
    out
}

/// A single assertion failure, handed to the [`TestContext`](crate::TestContext).
///
/// Renders as one line: `[file:line: ]{op} failed[, {detail}][, {extra}]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    op: &'static str,
    detail: String,
    extra: String,
    location: Option<&'static Location<'static>>,
}

impl Failure {
    pub fn new(op: &'static str, detail: impl Into<String>, args: &[&dyn Display]) -> Self {
        Self {
            op,
            detail: detail.into(),
            extra: concat(args),
            location: None,
        }
    }

    /// Attach the caller location shown in front of the message.
    pub fn at(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    /// Operation name, e.g. `AssertEqual`.
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// The `name = value` clauses describing the compared values.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Caller-supplied annotation, empty when none was given.
    pub fn extra(&self) -> &str {
        &self.extra
    }

    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// The full rendered line.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = self.location {
            write!(f, "{}:{}: ", loc.file(), loc.line())?;
        }
        write!(f, "{} failed", self.op)?;
        if !self.detail.is_empty() {
            write!(f, ", {}", self.detail)?;
        }
        if !self.extra.is_empty() {
            write!(f, ", {}", self.extra)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
