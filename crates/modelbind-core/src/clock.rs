//! Wall-clock access for timestamp properties.

use chrono::Utc;

/// Current Unix time in whole seconds.
#[must_use]
pub fn now_seconds() -> i64 {
    Utc::now().timestamp()
}

///
/// TESTS
///
