//! Field-name case transform.

/// Convert a mixed-case identifier to underscore-separated lowercase.
///
/// A separator is inserted before each ASCII uppercase letter that
/// immediately follows an ASCII lowercase letter, then the whole string
/// is lowercased: `emailAddress` becomes `email_address`. The transform
/// is idempotent on already-normalized input.
///
/// ASCII-oriented: non-ASCII letters are lowercased where Rust defines a
/// lowercase mapping but never treated as word boundaries. Behavior for
/// non-ASCII casing is outside the contract.
pub fn to_snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    let mut prev_lower = false;

    for ch in identifier.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}
