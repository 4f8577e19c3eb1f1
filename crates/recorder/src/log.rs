// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure log implementation.

use crate::record::RecordedFailure;
use parking_lot::Mutex;
use std::any::Any;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::panic;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use verdict::{Failure, Settings, TestContext};

/// Unwind payload raised by [`FailureLog`] after recording a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aborted {
    /// Sequence number of the failure that stopped the test
    pub seq: u64,
}

impl Aborted {
    /// Recognise the payload of an unwind caught with `catch_unwind`.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Option<Self> {
        payload.downcast_ref::<Self>().copied()
    }
}

/// Test context that records failures.
///
/// Clones share the same log, so a runner can hand a clone to each test
/// body and inspect the first one afterwards.
pub struct FailureLog {
    start: Instant,
    failures: Arc<Mutex<Vec<RecordedFailure>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
    settings: Settings,
}

impl FailureLog {
    /// Create a new in-memory failure log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            failures: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
            settings: Settings::default(),
        }
    }

    /// Create a failure log that also appends to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            ..Self::new()
        })
    }

    /// Use the given formatting settings for failures reported here
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Record a failure without unwinding, returning its sequence number
    pub fn record(&self, failure: &Failure) -> u64 {
        let mut failures = self.failures.lock();
        let seq = failures.len() as u64;
        let record = RecordedFailure::new(seq, self.start.elapsed(), failure);

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            let written = serde_json::to_string(&record)
                .map_err(std::io::Error::from)
                .and_then(|json| writeln!(w, "{json}"))
                .and_then(|()| w.flush());
            if let Err(err) = written {
                tracing::warn!(seq, error = %err, "failed to append failure to log file");
            }
        }

        failures.push(record);
        seq
    }

    /// Get all recorded failures
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures.lock().clone()
    }

    /// Find failures raised by one assertion, e.g. `AssertEqual`
    pub fn find_by_op(&self, op: &str) -> Vec<RecordedFailure> {
        self.failures
            .lock()
            .iter()
            .filter(|f| f.op == op)
            .cloned()
            .collect()
    }

    /// Find failures whose message contains `pattern`
    pub fn find_by_message(&self, pattern: &str) -> Vec<RecordedFailure> {
        self.failures
            .lock()
            .iter()
            .filter(|f| f.message.contains(pattern))
            .cloned()
            .collect()
    }

    /// Get the total number of failures
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Clear all recorded failures
    pub fn clear(&self) {
        self.failures.lock().clear();
    }
}

impl TestContext for FailureLog {
    fn fatal(&self, failure: Failure) -> ! {
        let seq = self.record(&failure);
        // resume_unwind skips the panic hook; the failure is already recorded
        panic::resume_unwind(Box::new(Aborted { seq }))
    }

    fn settings(&self) -> Settings {
        self.settings
    }
}

impl Default for FailureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FailureLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            failures: Arc::clone(&self.failures),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
            settings: self.settings,
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
