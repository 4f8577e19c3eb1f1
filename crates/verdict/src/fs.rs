// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem collaborator for the existence assertions.

use std::io;
use std::path::Path;

/// Path existence queries.
pub trait Filesystem {
    /// Stat a path. `Ok` means it exists; a `NotFound` error means it does
    /// not; any other error is reported as-is.
    fn stat(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn stat(&self, path: &Path) -> io::Result<()> {
        std::fs::metadata(path).map(|_| ())
    }
}
