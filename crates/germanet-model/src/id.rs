//! Identifier codec.
//!
//! GermaNet resource files refer to lexical units, synsets and Wiktionary
//! entries with a one-letter prefix followed by decimal digits (`l42`,
//! `s1337`, `w7`). The prefix letter is never checked: whatever single
//! character leads the string is dropped and the rest must be a base-10
//! integer.

use crate::ModelError;

/// Integer id of a lexical unit, decoded from its prefixed form.
pub type LexUnitId = i32;

/// Decode `<prefix-char><digits>` into the integer value of `<digits>`.
pub fn parse_prefixed_id(value: &str) -> Result<i32, ModelError> {
    let mut chars = value.chars();
    if chars.next().is_none() {
        return Err(malformed(value, "empty identifier"));
    }
    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(malformed(value, "missing numeric suffix"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(value, "suffix is not a base-10 integer"));
    }
    digits
        .parse::<i32>()
        .map_err(|_| malformed(value, "numeric suffix out of range"))
}

/// Decode an unprefixed numeric id (e.g. a Wiktionary sense index).
pub fn parse_plain_id(value: &str) -> Result<i32, ModelError> {
    value
        .parse::<i32>()
        .map_err(|_| malformed(value, "not a base-10 integer"))
}

fn malformed(value: &str, reason: &'static str) -> ModelError {
    ModelError::MalformedIdentifier {
        value: value.to_string(),
        reason,
    }
}
