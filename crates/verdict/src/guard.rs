// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Guarded invocation: run a callable and capture an unwind as a value.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// What happened when a guarded callable ran.
#[derive(Debug)]
pub enum PanicOutcome {
    /// The callable returned normally.
    Returned,
    /// The callable unwound; carries the panic payload.
    Panicked(Box<dyn Any + Send>),
}

impl PanicOutcome {
    pub fn is_panicked(&self) -> bool {
        matches!(self, PanicOutcome::Panicked(_))
    }

    /// The panic message, when the payload is a string.
    pub fn message(&self) -> Option<&str> {
        match self {
            PanicOutcome::Returned => None,
            PanicOutcome::Panicked(payload) => panic_message(payload.as_ref()),
        }
    }
}

/// Extract the message from a panic payload created by `panic!`.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Run `f` to completion, converting a panic into [`PanicOutcome::Panicked`].
///
/// The callable's return value is discarded. The panic hook still runs for
/// panics raised with `panic!`.
pub fn catch_panic<F, R>(f: F) -> PanicOutcome
where
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => PanicOutcome::Returned,
        Err(payload) => {
            tracing::trace!(
                payload = panic_message(payload.as_ref()).unwrap_or("<non-string payload>"),
                "captured panic"
            );
            PanicOutcome::Panicked(payload)
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
