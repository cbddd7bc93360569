// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob syntax detection.
//!
//! Paths handed to [`PathIgnoreSet`](crate::PathIgnoreSet) must be literal.
//! Anything that looks like a glob is skipped, since expanding it would
//! need filesystem access.

/// Signature of a glob detector. Swappable per set.
pub type GlobDetector = fn(&str) -> bool;

/// Check if a path contains glob syntax.
///
/// Detects:
/// - wildcards `*` and `?`
/// - character classes `[...]`
/// - brace expansion `{a,b}` and ranges `{1..3}`
/// - extglobs `@(...)`, `!(...)`, `+(...)` (`*(` and `?(` are caught by the wildcards)
/// - regex style groups `(a|b)`
///
/// A leading `!` on its own is a negation marker and does not count.
/// Backslashes are treated as path separators, never as escapes.
pub fn is_glob(path: &str) -> bool {
    let bytes = path.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let rest = &bytes[i + 1..];
        let found = match b {
            b'*' | b'?' => true,
            b'[' => closes_class(rest),
            b'{' => closes_brace(rest),
            b'@' | b'!' | b'+' => rest.first() == Some(&b'(') && rest.contains(&b')'),
            b'(' => closes_group(rest),
            _ => false,
        };
        if found {
            return true;
        }
    }
    false
}

fn closes_class(rest: &[u8]) -> bool {
    matches!(rest.iter().position(|&b| b == b']'), Some(end) if end > 0)
}

fn closes_brace(rest: &[u8]) -> bool {
    let Some(end) = rest.iter().position(|&b| b == b'}') else {
        return false;
    };
    let inner = &rest[..end];
    inner.contains(&b',') || inner.windows(2).any(|w| w == b"..")
}

fn closes_group(rest: &[u8]) -> bool {
    let Some(end) = rest.iter().position(|&b| b == b')') else {
        return false;
    };
    rest[..end].contains(&b'|')
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
