//! Dotted property paths.
//!
//! A path is one or more segments joined by `.`; there is no escaping.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Split a path at its first separator into `(head, rest)`.
///
/// `rest` is `None` for a single segment, and `Some("")` for a trailing
/// separator (`"a."`).
#[must_use]
pub fn split_head(path: &str) -> (&str, Option<&str>) {
    match path.split_once(SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

/// Split a path at its last separator into `(prefix, last)`.
#[must_use]
pub fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some((prefix, last)) => (Some(prefix), last),
        None => (None, path),
    }
}

/// Join a prefix and a segment, skipping the separator for an empty prefix.
#[must_use]
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{SEPARATOR}{segment}")
    }
}

///
/// TESTS
///
