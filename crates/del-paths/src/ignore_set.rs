// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Accumulator of negated ignore patterns.
//!
//! Glob-based deletion tools skip a path only when every ancestor directory
//! entry is excluded too. Adding `a/b/c` therefore yields `!a`, `!a/b` and
//! `!a/b/c`. Descendants are not excluded: a path may be a file or a
//! folder, and nothing here touches the filesystem to find out.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::config::{AddOptions, Options};
use crate::error::Result;
use crate::glob::{GlobDetector, is_glob};
use crate::input::PathInput;
use crate::notice::{Notice, NoticeSink, SkipReason, TracingSink};

/// Ordered set of unique negated ignore patterns.
///
/// Every entry starts with `!`, uses `/` separators, and never ends in `/`.
/// Entries are appended in insertion order and only removed by [`reset`].
///
/// [`reset`]: PathIgnoreSet::reset
#[derive(Clone)]
pub struct PathIgnoreSet {
    patterns: Vec<String>,
    seen: HashSet<String>,
    debug: bool,
    sink: Arc<dyn NoticeSink>,
    is_glob: GlobDetector,
}

impl PathIgnoreSet {
    pub fn new(options: Options) -> Self {
        Self {
            patterns: Vec::new(),
            seen: HashSet::new(),
            debug: options.debug,
            sink: Arc::new(TracingSink),
            is_glob,
        }
    }

    /// Replace the sink that receives skip notices in debug mode.
    pub fn with_sink(mut self, sink: impl NoticeSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Replace the glob detector used to skip non-literal paths.
    pub fn with_glob_detector(mut self, detector: GlobDetector) -> Self {
        self.is_glob = detector;
        self
    }

    /// Enable or disable skip notices.
    pub fn set_debug(&mut self, enabled: bool) -> &mut Self {
        self.debug = enabled;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Add ignore patterns for one or more literal paths.
    ///
    /// Each path is negated (unless it already starts with `!`), has its
    /// backslashes turned into `/` and its trailing slashes stripped, then
    /// contributes one pattern per ancestor level including itself.
    /// Globs and empty strings are skipped.
    pub fn add_paths(&mut self, input: impl Into<PathInput>, options: AddOptions) -> &mut Self {
        let mut modified = false;
        for path in input.into().into_paths() {
            modified |= self.add_path(&path);
        }

        if modified && options.sort {
            self.patterns.sort();
            tracing::trace!("sorted {} ignore patterns", self.patterns.len());
        }
        self
    }

    /// Like [`add_paths`](Self::add_paths), for input of unchecked shape.
    ///
    /// Fails with `InvalidArgument` unless `input` is a string or an array
    /// of strings. Nothing is added on failure.
    pub fn try_add_paths(
        &mut self,
        input: &serde_json::Value,
        options: AddOptions,
    ) -> Result<&mut Self> {
        let input = PathInput::try_from(input)?;
        Ok(self.add_paths(input, options))
    }

    /// Returns true if any new pattern was added.
    fn add_path(&mut self, path: &str) -> bool {
        if (self.is_glob)(path) {
            self.skip(path, SkipReason::Glob);
            return false;
        }
        if path.is_empty() {
            self.skip(path, SkipReason::Empty);
            return false;
        }

        let pattern = negate(path);
        let mut added = false;
        for prefix in ancestor_prefixes(&pattern) {
            if self.seen.insert(prefix.to_string()) {
                tracing::trace!("ignore pattern added: {}", prefix);
                self.patterns.push(prefix.to_string());
                added = true;
            }
        }
        added
    }

    fn skip(&self, path: &str, reason: SkipReason) {
        if self.debug {
            self.sink.notice(&Notice::new(path, reason));
        }
    }

    /// Sorted copy of the patterns. Independent of the set.
    pub fn snapshot(&self) -> Vec<String> {
        let mut patterns = self.patterns.clone();
        patterns.sort();
        patterns
    }

    /// Remove every pattern.
    pub fn reset(&mut self) -> &mut Self {
        tracing::debug!("reset {} ignore patterns", self.patterns.len());
        self.patterns.clear();
        self.seen.clear();
        self
    }

    /// Patterns in their current internal order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.seen.contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PathIgnoreSet {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for PathIgnoreSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathIgnoreSet")
            .field("patterns", &self.patterns)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Negate and normalize a literal path: `!` prefix, `/` separators, no
/// trailing slash.
pub(crate) fn negate(path: &str) -> String {
    let mut pattern = String::with_capacity(path.len() + 1);
    if !path.starts_with('!') {
        pattern.push('!');
    }
    pattern.push_str(path);
    let pattern = pattern.replace('\\', "/");
    pattern.trim_end_matches('/').to_string()
}

/// Every `/`-joined prefix of `pattern`, shortest first, ending with the
/// pattern itself. Prefixes ending in `/` (from empty segments) are dropped.
pub(crate) fn ancestor_prefixes(pattern: &str) -> impl Iterator<Item = &str> {
    pattern
        .match_indices('/')
        .map(|(i, _)| &pattern[..i])
        .chain(std::iter::once(pattern))
        .filter(|prefix| !prefix.ends_with('/'))
}

#[cfg(test)]
#[path = "ignore_set_tests.rs"]
mod tests;
