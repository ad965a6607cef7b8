//! Helpers for navigating roxmltree element trees.
//!
//! The decoder only ever looks at an element's attributes, its own text and
//! its immediate children; these helpers keep that navigation in one place.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use easyfatt_xml::xml::get_tag_name;
///
/// let xml = r#"<Document><Number>5</Number></Document>"#;
/// let doc = Document::parse(xml).unwrap();
/// let number = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(number), "Number");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use easyfatt_xml::xml::find_child;
///
/// let xml = r#"<Document><Date/><Number/></Document>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "Number").is_some());
/// assert!(find_child(root, "Missing").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use easyfatt_xml::xml::find_children;
///
/// let xml = r#"<Rows><Row>1</Row><Row>2</Row><Other/></Rows>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let rows: Vec<_> = find_children(doc.root_element(), "Row").collect();
/// assert_eq!(rows.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get all element children of a node, skipping text nodes and comments.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
