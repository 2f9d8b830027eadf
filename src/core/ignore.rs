//! Shell-style filename matching against lists of glob patterns.
//!
//! `*` and `?` never cross a path separator, so `*.go` matches `main.go`
//! but not `cmd/main.go`. Character classes (`[a-z]`, `[!0-9]`) are supported.
//! Braces are ordinary characters: `{a,b}` only matches the literal name.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use rayon::prelude::*;

fn build_glob(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(&escape_braces(pattern))
        .literal_separator(true)
        .build()
}

/// Rewrites `{` and `}` outside character classes as `[{]` and `[}]`, so
/// globset does not read them as alternation.
fn escape_braces(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                escaped.push(c);
                if let Some(&negate @ ('!' | '^')) = chars.peek() {
                    escaped.push(negate);
                    chars.next();
                }
                // A `]` right after the opening bracket is a member, not the end.
                if let Some(&']') = chars.peek() {
                    escaped.push(']');
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                escaped.push(c);
            }
            '{' if !in_class => escaped.push_str("[{]"),
            '}' if !in_class => escaped.push_str("[}]"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Returns `true` as soon as one of `patterns` matches `name`.
///
/// A malformed pattern is logged and treated as non-matching; the remaining
/// patterns are still tried. An empty pattern list never matches.
pub fn file_matches<S: AsRef<str>>(name: &str, patterns: &[S]) -> bool {
    for pattern in patterns {
        let pattern = pattern.as_ref();
        match build_glob(pattern) {
            Ok(glob) => {
                if glob.compile_matcher().is_match(name) {
                    return true;
                }
            }
            Err(e) => {
                tracing::warn!("Invalid glob pattern {:?} while matching {}: {}", pattern, name, e);
            }
        }
    }
    false
}

/// Builds a reusable `GlobSet` from a list of patterns.
///
/// Malformed patterns are logged and left out of the set.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        match build_glob(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => tracing::warn!("Skipping invalid glob pattern {:?}: {}", pattern, e),
        }
    }

    builder.build().unwrap_or_else(|e| {
        tracing::error!("Failed to build glob set from patterns: {}", e);
        GlobSet::empty()
    })
}

/// Keeps the names that match at least one pattern, preserving input order.
///
/// Names are tested in parallel, which pays off for large directory listings.
pub fn filter_matching<N, P>(names: &[N], patterns: &[P]) -> Vec<String>
where
    N: AsRef<str> + Sync,
    P: AsRef<str>,
{
    let set = compile_patterns(patterns);
    if set.is_empty() {
        return Vec::new();
    }

    names
        .par_iter()
        .map(|name| name.as_ref())
        .filter(|name| set.is_match(name))
        .map(str::to_string)
        .collect()
}
