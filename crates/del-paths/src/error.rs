// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// del-paths error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input to `try_add_paths` was not a string or an array of strings.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Option document could not be deserialized.
    #[error("config error: {message}")]
    Config { message: String },
}

impl Error {
    /// The shape-check failure raised for malformed path input.
    pub(crate) fn invalid_paths() -> Self {
        Error::InvalidArgument(
            "del-paths: `paths` must be a string or an array of strings.".to_string(),
        )
    }
}

/// Result type using del-paths Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
