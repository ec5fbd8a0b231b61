//! Field-level input validation. Pure, total, synchronous.

use regex::Regex;
use std::sync::LazyLock;

// Prefix-anchored on purpose: trailing junk after a plausible
// `local@domain.suffix` shape is accepted, as the original UI did.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

/// Loose email-shape check: something before an `@`, something after it, and
/// a `.` somewhere in the domain part. Deliberately permissive; accepts many
/// syntactically invalid addresses and must not be tightened.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

/// Exact string equality between a password and its confirmation.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}
