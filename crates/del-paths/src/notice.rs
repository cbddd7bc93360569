// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debug notices for skipped paths.
//!
//! A [`PathIgnoreSet`](crate::PathIgnoreSet) never fails on a glob or an
//! empty path; it skips the entry and, in debug mode, reports why through a
//! [`NoticeSink`]. The default sink forwards to `tracing`.

use std::fmt;

/// Why a path was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path contains glob syntax.
    Glob,
    /// The path is an empty string.
    Empty,
}

/// A skipped path and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub path: String,
    pub reason: SkipReason,
}

impl Notice {
    pub fn new(path: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Glob => write!(
                f,
                "del-paths: \"{}\" is a glob pattern, and will be skipped.",
                self.path
            ),
            SkipReason::Empty => {
                f.write_str("del-paths: the path is an empty string and will be skipped.")
            }
        }
    }
}

/// Receives skip notices while debug mode is enabled.
pub trait NoticeSink: Send + Sync {
    fn notice(&self, notice: &Notice);
}

/// Default sink: emits each notice as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notice(&self, notice: &Notice) {
        tracing::warn!("{}", notice);
    }
}

impl<F> NoticeSink for F
where
    F: Fn(&Notice) + Send + Sync,
{
    fn notice(&self, notice: &Notice) {
        self(notice)
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
