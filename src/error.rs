//! Error types for the mapping engine.
//!
//! Two failure kinds exist: configuration errors (a malformed mapping table,
//! always an implementer bug) and conversion errors (document text that does
//! not fit the declared scalar type, recoverable by the caller). Coverage
//! warnings are advisory and never surface here.

use thiserror::Error;

use crate::coerce::ScalarKind;

/// Main error type for decode operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// XML text handed to [`from_xml`](crate::FromXml::from_xml) is not well formed.
    #[error("XML parsing failed: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The type declares no mapped fields at all.
    ///
    /// Every decodable type must carry exactly one non-empty mapping table.
    #[error("`{type_name}` has an empty field mapping; nothing can be decoded")]
    EmptyMapping { type_name: &'static str },

    /// A scalar field path does not follow the `@attr` / `#TEXT` / child-tag syntax.
    #[error("Invalid field path for `{type_name}.{field}`: {reason}")]
    InvalidPath {
        type_name: &'static str,
        field: &'static str,
        reason: String,
    },

    /// A nested, list, or group descriptor is malformed (e.g. an empty tag name).
    #[error("Invalid descriptor for `{type_name}.{field}`: {reason}")]
    InvalidDescriptor {
        type_name: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Document text cannot be converted to the declared scalar type.
    #[error("Cannot convert `{type_name}.{field}`: `{raw}` is not a valid {expected}")]
    TypeConversion {
        type_name: &'static str,
        field: &'static str,
        raw: String,
        expected: ScalarKind,
    },
}

impl DecodeError {
    /// Whether this error is a mapping-table configuration bug rather than a
    /// problem with the document being decoded.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DecodeError::EmptyMapping { .. }
                | DecodeError::InvalidPath { .. }
                | DecodeError::InvalidDescriptor { .. }
        )
    }
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
