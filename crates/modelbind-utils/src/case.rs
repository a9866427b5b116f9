//! camelCase <-> snake_case conversion for property names.
//!
//! The rules are intentionally mechanical (ASCII only, no word detection) so
//! that the two directions invert each other for names produced by the other.

/// Convert a camelCase name to snake_case.
///
/// Inserts `_` before every ASCII uppercase letter, then lowercases the
/// result: `publicEmailPersonal` -> `public_email_personal`.
#[must_use]
pub fn camel_to_snake(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);

    for ch in value.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}

/// Convert a snake_case name to camelCase.
///
/// Names without `_` are returned unchanged. Otherwise the first segment is
/// kept as-is and every following segment gets its first letter uppercased:
/// `public_email_personal` -> `publicEmailPersonal`.
#[must_use]
pub fn snake_to_camel(value: &str) -> String {
    if !value.contains('_') {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());

    for (index, word) in value.split('_').enumerate() {
        if index == 0 {
            out.push_str(word);
        } else {
            out.push_str(&upper_first(word));
        }
    }

    out
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

///
/// TESTS
///
