// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded failure data type.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};
use verdict::Failure;

/// One failure reported to a [`FailureLog`](crate::FailureLog).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedFailure {
    /// Sequence number within the log
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Assertion that failed, e.g. `AssertEqual`
    pub op: String,

    /// The full failure line
    pub message: String,

    /// `file:line:column` of the caller, when caller locations are enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl RecordedFailure {
    pub(crate) fn new(seq: u64, elapsed: Duration, failure: &Failure) -> Self {
        Self {
            seq,
            timestamp: SystemTime::now(),
            elapsed,
            op: failure.op().to_string(),
            message: failure.message(),
            location: failure.location().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
