// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Option parsing.
//!
//! Options can be built in code, parsed from TOML (unknown keys warn), or
//! read from a JSON options bag, which never fails.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Construction options for a [`PathIgnoreSet`](crate::PathIgnoreSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Emit skip notices (default: false).
    pub debug: bool,
}

impl Options {
    pub fn debug(enabled: bool) -> Self {
        Self { debug: enabled }
    }
}

/// Options for a single `add_paths` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddOptions {
    /// Re-sort all patterns when this call added any (default: false).
    pub sort: bool,
}

impl AddOptions {
    /// Options with sort-on-modify enabled.
    pub fn sorted() -> Self {
        Self { sort: true }
    }
}

const KNOWN_OPTION_KEYS: &[&str] = &["debug"];
const KNOWN_ADD_OPTION_KEYS: &[&str] = &["sort"];

/// Parse construction options from TOML, warning on unknown keys.
pub fn parse_options(content: &str) -> Result<Options> {
    parse_toml(content, KNOWN_OPTION_KEYS)
}

/// Parse `add_paths` options from TOML, warning on unknown keys.
pub fn parse_add_options(content: &str) -> Result<AddOptions> {
    parse_toml(content, KNOWN_ADD_OPTION_KEYS)
}

fn parse_toml<T: DeserializeOwned>(content: &str, known: &[&str]) -> Result<T> {
    let table: toml::Table = toml::from_str(content).map_err(config_error)?;
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            tracing::warn!("unrecognized option: {}", key);
        }
    }
    toml::Value::Table(table).try_into().map_err(config_error)
}

fn config_error(e: impl std::fmt::Display) -> Error {
    Error::Config {
        message: e.to_string(),
    }
}

impl From<&serde_json::Value> for Options {
    fn from(value: &serde_json::Value) -> Self {
        Self {
            debug: flag(value, "debug"),
        }
    }
}

impl From<&serde_json::Value> for AddOptions {
    fn from(value: &serde_json::Value) -> Self {
        Self {
            sort: flag(value, "sort"),
        }
    }
}

/// Only a literal `true` enables a flag. Anything else, including a
/// non-object bag, leaves it off.
fn flag(value: &serde_json::Value, key: &str) -> bool {
    value.get(key) == Some(&serde_json::Value::Bool(true))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
