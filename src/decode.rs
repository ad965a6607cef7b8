//! Recursive-descent decoder from XML elements to mapped types.
//!
//! Decoding is synchronous, deterministic and all-or-nothing: a call either
//! returns a fully populated instance or an error, never a partial object.
//! The source tree is read-only throughout.

use roxmltree::{Document, Node};

use crate::audit;
use crate::coerce::{self, CoerceError};
use crate::error::{DecodeError, Result};
use crate::field::{parse_scalar_path, FieldKind, Mapping, ScalarAssign, ScalarPath};
use crate::xml::find_child;

/// A type decodable from an XML element through a declarative field mapping.
///
/// Implementors provide the default element tag and the mapping table; the
/// decode entry points are supplied.
///
/// # Example
///
/// ```
/// use easyfatt_xml::{FromXml, Mapping};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct VatCode {
///     code: String,
///     percentage: String,
/// }
///
/// impl FromXml for VatCode {
///     const TAG: &'static str = "VatCode";
///
///     fn mapping() -> Mapping<Self> {
///         Mapping::new()
///             .text("code", "#TEXT", |v: &mut Self, s| v.code = s)
///             .text("percentage", "@Perc", |v: &mut Self, s| v.percentage = s)
///     }
/// }
///
/// let vat = VatCode::from_xml(r#"<VatCode Perc="20">20</VatCode>"#).unwrap();
/// assert_eq!(vat.code, "20");
/// assert_eq!(vat.percentage, "20");
/// ```
pub trait FromXml: Default + Sized + 'static {
    /// Default XML element tag for this type.
    ///
    /// Empty for group-only types, which are never located by tag.
    const TAG: &'static str;

    /// The static mapping table. Called once per decode of this type.
    fn mapping() -> Mapping<Self>;

    /// Decode an instance from an already-parsed element.
    ///
    /// # Errors
    /// Returns a configuration error for a malformed mapping table, or a
    /// conversion error when document text does not fit a declared scalar
    /// type.
    fn from_element(node: Node<'_, '_>) -> Result<Self> {
        decode_subtree(node, true)
    }

    /// Parse XML text and decode an instance from its root element.
    ///
    /// # Errors
    /// As [`from_element`](FromXml::from_element), plus a parse error for
    /// XML that is not well formed.
    fn from_xml(text: &str) -> Result<Self> {
        let doc = Document::parse(text)?;
        decode_subtree(doc.root_element(), true)
    }
}

/// Last path segment of a type name, for diagnostics.
pub(crate) fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Decode one element into `T`, processing fields in declaration order.
///
/// `audit_children` is false underneath group decodes, where coverage
/// warnings would be misattributed to the wrong nesting level.
pub(crate) fn decode_subtree<T: FromXml>(node: Node<'_, '_>, audit_children: bool) -> Result<T> {
    let type_name = short_type_name::<T>();
    let mapping = T::mapping();
    mapping.validate(type_name)?;

    if audit_children {
        let expected = mapping.expected_tags();
        let untracked = audit::untracked_children(node, &expected);
        if !untracked.is_empty() {
            tracing::warn!(
                type_name,
                count = untracked.len(),
                tags = ?untracked,
                "Child elements not tracked by the field mapping"
            );
        }
    }

    let mut value = T::default();
    for binding in mapping.fields() {
        match &binding.kind {
            FieldKind::Scalar { path, assign } => {
                apply_scalar(&mut value, type_name, binding.name, path, assign, node)?;
            }
            FieldKind::Single { decode, .. }
            | FieldKind::List { decode, .. }
            | FieldKind::Group { decode, .. } => decode(&mut value, node, audit_children)?,
        }
    }
    Ok(value)
}

fn apply_scalar<T: FromXml>(
    value: &mut T,
    type_name: &'static str,
    field: &'static str,
    path: &'static str,
    assign: &ScalarAssign<T>,
    node: Node<'_, '_>,
) -> Result<()> {
    let raw = match parse_scalar_path(type_name, field, path)? {
        ScalarPath::Attribute(name) => node.attribute(name.as_str()),
        ScalarPath::OwnText => node.text(),
        ScalarPath::Child(tag) => match find_child(node, &tag) {
            // An absent child skips the assignment so the struct default
            // survives; a present-but-empty child still coerces to the
            // type's zero value below.
            None => return Ok(()),
            Some(child) => child.text(),
        },
    };

    match assign {
        ScalarAssign::Bool(set) => set(value, coerce::to_bool(raw)),
        ScalarAssign::Int(set) => {
            let parsed =
                coerce::to_int(raw).map_err(|e| conversion_error(type_name, field, e))?;
            set(value, parsed);
        }
        ScalarAssign::Float(set) => {
            let parsed =
                coerce::to_float(raw).map_err(|e| conversion_error(type_name, field, e))?;
            set(value, parsed);
        }
        ScalarAssign::Text(set) => set(value, coerce::to_text(raw)),
    }
    Ok(())
}

fn conversion_error(
    type_name: &'static str,
    field: &'static str,
    err: CoerceError,
) -> DecodeError {
    DecodeError::TypeConversion {
        type_name,
        field,
        raw: err.raw,
        expected: err.kind,
    }
}
