//! Scalar type coercion with Danea default rules.
//!
//! Easyfatt exports omit a tag entirely to mean "unset / false / zero", so
//! every coercion has a fixed absent-value default: `false`, `0`, `0.0` or
//! `""`. Boolean coercion is deliberately lenient — any text other than a
//! case-insensitive `true` yields `false` without raising — because that is
//! the contract real-world documents rely on.

use std::fmt;

use thiserror::Error;

/// Declared scalar type of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Bool => "boolean",
            ScalarKind::Int => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Text => "string",
        };
        f.write_str(name)
    }
}

/// Raw text that cannot be converted to the declared scalar type.
///
/// Carries only the offending text and the target kind; the decoder adds the
/// owning type and field names when it upgrades this to a
/// [`DecodeError`](crate::DecodeError).
#[derive(Debug, Clone, Error)]
#[error("`{raw}` is not a valid {kind}")]
pub struct CoerceError {
    /// The text that failed to parse.
    pub raw: String,
    /// The declared scalar type.
    pub kind: ScalarKind,
}

/// Coerce text to a boolean.
///
/// `true` iff the text equals `"true"` ignoring ASCII case. Absent or empty
/// text is `false`; so is anything else, including malformed input.
#[must_use]
pub fn to_bool(raw: Option<&str>) -> bool {
    raw.is_some_and(|text| text.eq_ignore_ascii_case("true"))
}

/// Coerce text to a base-10 integer. Absent or blank text is `0`.
pub fn to_int(raw: Option<&str>) -> Result<i64, CoerceError> {
    match raw {
        None => Ok(0),
        Some(text) if text.trim().is_empty() => Ok(0),
        Some(text) => text.trim().parse().map_err(|_| CoerceError {
            raw: text.to_string(),
            kind: ScalarKind::Int,
        }),
    }
}

/// Coerce text to a float. Absent or blank text is `0.0`.
pub fn to_float(raw: Option<&str>) -> Result<f64, CoerceError> {
    match raw {
        None => Ok(0.0),
        Some(text) if text.trim().is_empty() => Ok(0.0),
        Some(text) => text.trim().parse().map_err(|_| CoerceError {
            raw: text.to_string(),
            kind: ScalarKind::Float,
        }),
    }
}

/// Coerce text to a string. Absent text is `""`; present text is unmodified.
#[must_use]
pub fn to_text(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}
