// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion settings and their environment variables.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

/// `VERDICT_CALLER_LOCATION`: prefix failures with the caller's `file:line`.
pub const VERDICT_CALLER_LOCATION: &str = "VERDICT_CALLER_LOCATION";

/// Cosmetic knobs applied when formatting failures.
///
/// None of these affect whether an assertion passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prefix each failure with the immediate caller's source location.
    pub caller_location: bool,
}

impl Settings {
    pub fn with_caller_location(mut self, enabled: bool) -> Self {
        self.caller_location = enabled;
        self
    }

    /// Read settings from the process environment.
    ///
    /// Invalid values are logged and replaced by defaults.
    pub fn from_env() -> Self {
        match Self::from_lookup(|name| std::env::var(name).ok()) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring invalid verdict settings");
                Self::default()
            }
        }
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(raw) = lookup(VERDICT_CALLER_LOCATION) {
            settings.caller_location = parse_flag(VERDICT_CALLER_LOCATION, &raw)?;
        }
        Ok(settings)
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
