// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording test context for verdict assertions.
//!
//! [`FailureLog`] implements [`verdict::TestContext`] by recording each
//! failure, optionally appending it to a JSONL file, and unwinding out of the
//! test body with an [`Aborted`] payload. Runners catch the unwind and query
//! the log afterwards.

mod duration_serde;
mod log;
mod record;

pub use log::{Aborted, FailureLog};
pub use record::RecordedFailure;
