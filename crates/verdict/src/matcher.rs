// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern matcher collaborator for the match assertions.

use crate::error::PatternError;
use regex::bytes::Regex;

/// Compiles a pattern and tests it against text.
pub trait PatternMatcher {
    /// Returns whether `pattern` matches anywhere in `text`, or a
    /// [`PatternError`] when the pattern does not compile.
    fn is_match(&self, pattern: &str, text: &[u8]) -> Result<bool, PatternError>;
}

/// Regular expressions in the `regex` crate syntax, matched over raw bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegexMatcher;

impl PatternMatcher for RegexMatcher {
    fn is_match(&self, pattern: &str, text: &[u8]) -> Result<bool, PatternError> {
        let re = Regex::new(pattern).map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            error: summarize(&e),
        })?;
        Ok(re.is_match(text))
    }
}

/// The `regex` crate renders syntax errors over several lines with a caret
/// under the pattern; failure messages keep only the final `error:` line.
fn summarize(err: &regex::Error) -> String {
    let text = err.to_string();
    text.lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix("error: "))
        .or_else(|| text.lines().map(str::trim).find(|line| !line.is_empty()))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
