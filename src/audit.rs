//! Coverage auditing of mapping tables against real documents.
//!
//! Danea extends the `.DefXml` schema between releases; new tags must never
//! break decoding, but silently ignoring them hides drift. The auditor
//! reports every immediate child an element carries that the mapping table
//! does not account for. The report is strictly advisory: it never fails and
//! never alters the decode outcome.

use std::collections::HashSet;

use roxmltree::Node;

use crate::xml::{element_children, get_tag_name};

/// Tags present in `actual` but absent from `expected`.
///
/// Order and duplicate count of `actual` are preserved.
#[must_use]
pub fn untracked_tags<'a>(
    expected: &HashSet<&str>,
    actual: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    actual
        .into_iter()
        .filter(|tag| !expected.contains(tag))
        .map(ToString::to_string)
        .collect()
}

/// Run the audit against an element's immediate children.
#[must_use]
pub fn untracked_children(node: Node<'_, '_>, expected_tags: &[String]) -> Vec<String> {
    let expected: HashSet<&str> = expected_tags.iter().map(String::as_str).collect();
    untracked_tags(&expected, element_children(node).map(get_tag_name))
}
