//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving a `PathIgnoreSet` through its public API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::sync::{Arc, Mutex};

pub use del_paths::{AddOptions, Error, Notice, Options, PathIgnoreSet, SkipReason};
pub use serde_json::json;

/// Set with debug mode on and notices captured for inspection.
pub struct Recorded {
    pub set: PathIgnoreSet,
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl Recorded {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

pub fn recorded(options: Options) -> Recorded {
    let notices = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&notices);
    let set = del_paths::new(options)
        .with_sink(move |n: &Notice| captured.lock().unwrap().push(n.clone()));
    Recorded { set, notices }
}

/// Snapshot of a set built from `paths` in one unsorted call.
pub fn snapshot_of(paths: &[&str]) -> Vec<String> {
    let mut set = PathIgnoreSet::default();
    set.add_paths(paths, AddOptions::default());
    set.snapshot()
}

/// Owned string list, for comparing against snapshots.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// True if `path` is excluded by one of the negated `patterns`.
pub fn excluded(patterns: &[String], path: &str) -> bool {
    let mut builder = globset::GlobSetBuilder::new();
    for pattern in patterns {
        let Some(body) = pattern.strip_prefix('!') else {
            continue;
        };
        let glob = globset::GlobBuilder::new(body)
            .literal_separator(true)
            .build()
            .unwrap();
        builder.add(glob);
    }
    builder.build().unwrap().is_match(path)
}
