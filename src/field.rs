//! Declarative field mappings.
//!
//! A [`Mapping`] is the ordered, static table describing how each field of a
//! decodable type is located in an XML element. Scalar fields use a path
//! string (`"@Attr"`, `"#TEXT"` or a child tag); nested objects, lists and
//! inline groups carry statically-dispatched decode functions built when the
//! mapping is declared.
//!
//! # Example
//!
//! ```
//! use easyfatt_xml::{FromXml, Mapping};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Payment {
//!     advance: bool,
//!     amount: f64,
//! }
//!
//! impl FromXml for Payment {
//!     const TAG: &'static str = "Payment";
//!
//!     fn mapping() -> Mapping<Self> {
//!         Mapping::new()
//!             .bool("advance", "Advance", |p: &mut Self, v| p.advance = v)
//!             .float("amount", "Amount", |p: &mut Self, v| p.amount = v)
//!     }
//! }
//!
//! let payment = Payment::from_xml("<Payment><Amount>10.5</Amount></Payment>").unwrap();
//! assert_eq!(payment, Payment { advance: false, amount: 10.5 });
//! ```

use roxmltree::Node;

use crate::decode::{decode_subtree, FromXml};
use crate::error::{DecodeError, Result};
use crate::xml::{find_child, find_children};

/// Where a scalar field's raw text lives, parsed from the path syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScalarPath {
    /// `"@Name"` — an XML attribute of the element itself.
    Attribute(String),
    /// `"#TEXT"` — the element's own text content.
    OwnText,
    /// Any bare tag — the text of the first child element with that tag.
    Child(String),
}

impl ScalarPath {
    fn parse(raw: &str) -> std::result::Result<Self, String> {
        let path = raw.trim();
        if let Some(name) = path.strip_prefix('@') {
            if name.is_empty() {
                return Err("attribute name is empty".to_string());
            }
            return Ok(ScalarPath::Attribute(name.to_string()));
        }
        if path.eq_ignore_ascii_case("#TEXT") {
            return Ok(ScalarPath::OwnText);
        }
        if path.is_empty() {
            return Err("path is empty".to_string());
        }
        if path.contains('/') {
            return Err("child tag must not contain `/`".to_string());
        }
        Ok(ScalarPath::Child(path.to_string()))
    }
}

/// Parse a scalar path, attaching type and field context to failures.
pub(crate) fn parse_scalar_path(
    type_name: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<ScalarPath> {
    ScalarPath::parse(raw).map_err(|reason| DecodeError::InvalidPath {
        type_name,
        field,
        reason,
    })
}

/// Typed setter for a scalar field. The variant is the declared scalar type.
pub(crate) enum ScalarAssign<T> {
    Bool(fn(&mut T, bool)),
    Int(fn(&mut T, i64)),
    Float(fn(&mut T, f64)),
    Text(fn(&mut T, String)),
}

/// Decode-and-assign function for nested, list and group fields.
///
/// The `bool` is the audit flag, threaded through so coverage warnings stay
/// suppressed underneath group decodes.
type NestedDecodeFn<T> = Box<dyn Fn(&mut T, Node<'_, '_>, bool) -> Result<()> + Send + Sync>;

/// How one field's value is located in an XML element.
pub(crate) enum FieldKind<T> {
    /// Leaf value coerced from raw text.
    Scalar {
        path: &'static str,
        assign: ScalarAssign<T>,
    },
    /// First child with `tag`, decoded recursively; field default kept when absent.
    Single {
        tag: &'static str,
        decode: NestedDecodeFn<T>,
    },
    /// All `container/item` matches, decoded in document order.
    List {
        container: &'static str,
        item_tag: &'static str,
        decode: NestedDecodeFn<T>,
    },
    /// Nested type decoded from the *same* element.
    Group {
        expected: fn() -> Vec<String>,
        decode: NestedDecodeFn<T>,
    },
}

/// One mapped field: its struct-field name (for diagnostics) plus its kind.
pub(crate) struct FieldBinding<T> {
    pub(crate) name: &'static str,
    pub(crate) kind: FieldKind<T>,
}

/// Ordered mapping table of a decodable type.
///
/// Built once per type by [`FromXml::mapping`]; immutable afterwards.
pub struct Mapping<T> {
    fields: Vec<FieldBinding<T>>,
}

impl<T: 'static> Default for Mapping<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Mapping<T> {
    /// Create an empty mapping. A mapping left empty is a configuration
    /// error at decode time.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn push(mut self, name: &'static str, kind: FieldKind<T>) -> Self {
        self.fields.push(FieldBinding { name, kind });
        self
    }

    /// Number of mapped fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the mapping has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[FieldBinding<T>] {
        &self.fields
    }

    /// Map a boolean field. Absent or non-`"true"` text decodes to `false`.
    #[must_use]
    pub fn bool(self, name: &'static str, path: &'static str, set: fn(&mut T, bool)) -> Self {
        self.push(
            name,
            FieldKind::Scalar {
                path,
                assign: ScalarAssign::Bool(set),
            },
        )
    }

    /// Map an integer field. Absent or blank text decodes to `0`.
    #[must_use]
    pub fn int(self, name: &'static str, path: &'static str, set: fn(&mut T, i64)) -> Self {
        self.push(
            name,
            FieldKind::Scalar {
                path,
                assign: ScalarAssign::Int(set),
            },
        )
    }

    /// Map a float field. Absent or blank text decodes to `0.0`.
    #[must_use]
    pub fn float(self, name: &'static str, path: &'static str, set: fn(&mut T, f64)) -> Self {
        self.push(
            name,
            FieldKind::Scalar {
                path,
                assign: ScalarAssign::Float(set),
            },
        )
    }

    /// Map a string field. Absent text decodes to `""`.
    #[must_use]
    pub fn text(self, name: &'static str, path: &'static str, set: fn(&mut T, String)) -> Self {
        self.push(
            name,
            FieldKind::Scalar {
                path,
                assign: ScalarAssign::Text(set),
            },
        )
    }

    /// Map a nested object located at `U`'s default tag.
    ///
    /// When the child element is absent the setter is not called and the
    /// field keeps its default.
    #[must_use]
    pub fn single<U: FromXml>(self, name: &'static str, set: fn(&mut T, U)) -> Self {
        self.single_at(name, U::TAG, set)
    }

    /// Map a nested object with an explicit tag override.
    #[must_use]
    pub fn single_at<U: FromXml>(
        self,
        name: &'static str,
        tag: &'static str,
        set: fn(&mut T, U),
    ) -> Self {
        let decode: NestedDecodeFn<T> = Box::new(move |target, node, audit| {
            if let Some(child) = find_child(node, tag) {
                set(target, decode_subtree::<U>(child, audit)?);
            }
            Ok(())
        });
        self.push(name, FieldKind::Single { tag, decode })
    }

    /// Map a list of nested objects at the two-level path `container/U::TAG`.
    ///
    /// The setter always runs, with an empty `Vec` when the container is
    /// absent. If any item fails to decode, the whole field fails.
    #[must_use]
    pub fn list<U: FromXml>(
        self,
        name: &'static str,
        container: &'static str,
        set: fn(&mut T, Vec<U>),
    ) -> Self {
        let decode: NestedDecodeFn<T> = Box::new(move |target, node, audit| {
            let mut items = Vec::new();
            if let Some(container_node) = find_child(node, container) {
                for item in find_children(container_node, U::TAG) {
                    items.push(decode_subtree::<U>(item, audit)?);
                }
            }
            set(target, items);
            Ok(())
        });
        self.push(
            name,
            FieldKind::List {
                container,
                item_tag: U::TAG,
                decode,
            },
        )
    }

    /// Map an inline group: `U` is decoded from the same element, its fields
    /// logically merged into this mapping.
    #[must_use]
    pub fn group<U: FromXml>(self, name: &'static str, set: fn(&mut T, U)) -> Self {
        let decode: NestedDecodeFn<T> = Box::new(move |target, node, _audit| {
            // Audit is suppressed for the nested decode; the group shares
            // this element and its tags are already in the parent's set.
            set(target, decode_subtree::<U>(node, false)?);
            Ok(())
        });
        self.push(
            name,
            FieldKind::Group {
                expected: expected_tags_of::<U>,
                decode,
            },
        )
    }

    /// Project every field to the child tag(s) it accounts for.
    ///
    /// Attribute and `#TEXT` fields contribute nothing; scalar child paths,
    /// nested tags and list containers contribute their tag; groups
    /// contribute the flattened tags of the nested mapping. Feed the result
    /// to [`audit::untracked_children`](crate::audit::untracked_children) to
    /// spot schema drift.
    #[must_use]
    pub fn expected_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        for binding in &self.fields {
            match &binding.kind {
                FieldKind::Scalar { path, .. } => {
                    if let Ok(ScalarPath::Child(tag)) = ScalarPath::parse(path) {
                        tags.push(tag);
                    }
                }
                FieldKind::Single { tag, .. } => tags.push((*tag).to_string()),
                FieldKind::List { container, .. } => tags.push((*container).to_string()),
                FieldKind::Group { expected, .. } => tags.extend(expected()),
            }
        }
        tags
    }

    /// Check every descriptor up front so a broken mapping aborts the decode
    /// before any field is applied.
    pub(crate) fn validate(&self, type_name: &'static str) -> Result<()> {
        if self.fields.is_empty() {
            return Err(DecodeError::EmptyMapping { type_name });
        }
        for binding in &self.fields {
            match &binding.kind {
                FieldKind::Scalar { path, .. } => {
                    parse_scalar_path(type_name, binding.name, path)?;
                }
                FieldKind::Single { tag, .. } => {
                    if tag.is_empty() {
                        return Err(DecodeError::InvalidDescriptor {
                            type_name,
                            field: binding.name,
                            reason: "nested element tag is empty".to_string(),
                        });
                    }
                }
                FieldKind::List {
                    container, item_tag, ..
                } => {
                    if container.is_empty() {
                        return Err(DecodeError::InvalidDescriptor {
                            type_name,
                            field: binding.name,
                            reason: "list container tag is empty".to_string(),
                        });
                    }
                    if item_tag.is_empty() {
                        return Err(DecodeError::InvalidDescriptor {
                            type_name,
                            field: binding.name,
                            reason: "list item type declares no element tag".to_string(),
                        });
                    }
                }
                FieldKind::Group { .. } => {}
            }
        }
        Ok(())
    }
}

fn expected_tags_of<U: FromXml>() -> Vec<String> {
    U::mapping().expected_tags()
}
