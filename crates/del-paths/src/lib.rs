// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build ignore lists for glob-based deletion.
//!
//! ```
//! use del_paths::{AddOptions, PathIgnoreSet};
//!
//! let mut set = PathIgnoreSet::default();
//! set.add_paths(["build/keep", "build/keep/me.txt"], AddOptions::default());
//! assert_eq!(set.snapshot(), ["!build", "!build/keep", "!build/keep/me.txt"]);
//! ```

pub mod config;
pub mod error;
pub mod glob;
pub mod ignore_set;
pub mod input;
pub mod notice;

pub use config::{AddOptions, Options};
pub use error::{Error, Result};
pub use glob::is_glob;
pub use ignore_set::PathIgnoreSet;
pub use input::{PathInput, is_valid_path_list};
pub use notice::{Notice, NoticeSink, SkipReason, TracingSink};

/// Create an empty set.
pub fn new(options: Options) -> PathIgnoreSet {
    PathIgnoreSet::new(options)
}

#[cfg(test)]
pub mod test_utils;
