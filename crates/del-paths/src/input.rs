// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path input accepted by `add_paths`.

use serde_json::Value;

use crate::error::{Error, Result};

/// One path or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    One(String),
    Many(Vec<String>),
}

impl PathInput {
    /// The paths in input order. A single path becomes a one-element list.
    pub fn into_paths(self) -> Vec<String> {
        match self {
            PathInput::One(path) => vec![path],
            PathInput::Many(paths) => paths,
        }
    }
}

impl From<&str> for PathInput {
    fn from(path: &str) -> Self {
        PathInput::One(path.to_string())
    }
}

impl From<String> for PathInput {
    fn from(path: String) -> Self {
        PathInput::One(path)
    }
}

impl From<&String> for PathInput {
    fn from(path: &String) -> Self {
        PathInput::One(path.clone())
    }
}

impl From<Vec<String>> for PathInput {
    fn from(paths: Vec<String>) -> Self {
        PathInput::Many(paths)
    }
}

impl From<Vec<&str>> for PathInput {
    fn from(paths: Vec<&str>) -> Self {
        PathInput::Many(paths.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathInput {
    fn from(paths: &[&str]) -> Self {
        PathInput::Many(paths.iter().map(|p| p.to_string()).collect())
    }
}

impl From<&[String]> for PathInput {
    fn from(paths: &[String]) -> Self {
        PathInput::Many(paths.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for PathInput {
    fn from(paths: [&str; N]) -> Self {
        PathInput::Many(paths.iter().map(|p| p.to_string()).collect())
    }
}

/// Check that a value is a string or an array containing only strings.
///
/// The empty array is valid.
pub fn is_valid_path_list(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Array(items) => items.iter().all(Value::is_string),
        _ => false,
    }
}

impl TryFrom<&Value> for PathInput {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(path) => Ok(PathInput::One(path.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(PathInput::Many)
                .ok_or_else(Error::invalid_paths),
            _ => Err(Error::invalid_paths()),
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
