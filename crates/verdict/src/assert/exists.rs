// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::fail;
use crate::context::TestContext;
use std::fmt::Display;
use std::io;
use std::path::Path;

/// Fail unless `path` can be stat'ed through the context's filesystem.
#[track_caller]
pub fn assert_file_exists<C>(t: &C, path: impl AsRef<Path>, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    let path = path.as_ref();
    if let Err(err) = t.filesystem().stat(path) {
        fail(
            t,
            "AssertFileExists",
            format!("path = {}, err = {err}", path.display()),
            args,
        );
    }
}

/// Fail unless stat'ing `path` reports "not found".
///
/// Any other outcome fails, including errors such as permission denied.
#[track_caller]
pub fn assert_file_not_exists<C>(t: &C, path: impl AsRef<Path>, args: &[&dyn Display])
where
    C: TestContext + ?Sized,
{
    let path = path.as_ref();
    match t.filesystem().stat(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => fail(
            t,
            "AssertFileNotExists",
            format!("path = {}, err = {err}", path.display()),
            args,
        ),
        Ok(()) => fail(
            t,
            "AssertFileNotExists",
            format!("path = {}, err = <nil>", path.display()),
            args,
        ),
    }
}

#[cfg(test)]
#[path = "exists_tests.rs"]
mod tests;
