//! Proptest support for tagtree
//!
//! Generates well-formed documents together with the tree they are expected
//! to parse into, so properties of the parser can be checked against
//! arbitrary input.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tagtree = { version = "0.1", features = ["proptest"] }
//! ```

use ahash::HashSet;
use proptest::prelude::*;

use crate::fixed::Element;

const PREFIXES: &[&str] = &["", "x", "y"];
const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "e", "item1"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s", "id"];
const SEPARATORS: &[&str] = &["", " ", "\n", "\n\t", "\r\n  "];
const BODY: &str = "[a-zA-Z0-9][a-zA-Z0-9 .,;:!?=/\u{e9}\u{4e2d}]{0,12}";
const ATTRIBUTE_VALUE: &str = "[a-zA-Z0-9 .,:/<>=\u{e9}]{0,10}";

/// Namespace bindings every generated document declares on its root.
pub const BINDINGS: &[(&str, &str)] = &[("x", "urn:example:x"), ("y", "urn:example:y")];

/// A generated document: its text and the tree it should parse into.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// The markup, starting with a declaration tag.
    pub text: String,
    /// The expected root element.
    pub root: Element,
}

fn arb_prefix() -> impl Strategy<Value = Option<String>> {
    prop::sample::select(PREFIXES).prop_map(|prefix| {
        if prefix.is_empty() {
            None
        } else {
            Some(prefix.to_string())
        }
    })
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE),
        0..4,
    )
    .prop_map(|attributes| {
        let mut seen = HashSet::default();
        let mut attributes = attributes
            .into_iter()
            .filter(|(name, _)| seen.insert(*name))
            .map(|(name, value)| (name.to_string(), value))
            .collect::<Vec<_>>();
        attributes.sort();
        attributes
    })
}

fn arb_element() -> impl Strategy<Value = Element> {
    let leaf = (
        prop::sample::select(ELEMENT_NAMES),
        arb_prefix(),
        arb_attributes(),
        prop::option::of(BODY),
    )
        .prop_map(|(name, prefix, attributes, body)| Element {
            name: name.to_string(),
            prefix,
            attributes,
            body: body.unwrap_or_default(),
            children: vec![],
        });

    leaf.prop_recursive(
        6,  // levels deep
        64, // maximum number of elements
        5,  // up to 5 children per element
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_prefix(),
                arb_attributes(),
                prop::collection::vec(inner, 1..5),
            )
                .prop_map(|(name, prefix, attributes, children)| Element {
                    name: name.to_string(),
                    prefix,
                    attributes,
                    body: String::new(),
                    children,
                })
        },
    )
}

fn full_name(element: &Element) -> String {
    match &element.prefix {
        Some(prefix) => format!("{}:{}", prefix, element.name),
        None => element.name.clone(),
    }
}

fn write_element(element: &Element, separator: &str, is_root: bool, out: &mut String) {
    let name = full_name(element);
    out.push('<');
    out.push_str(&name);
    if is_root {
        for (prefix, uri) in BINDINGS {
            out.push_str(&format!(" xmlns:{}=\"{}\"", prefix, uri));
        }
    }
    for (key, value) in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", key, value));
    }
    if element.body.is_empty() && element.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    out.push_str(&element.body);
    for child in &element.children {
        out.push_str(separator);
        write_element(child, separator, false, out);
    }
    // whitespace after a text body would become part of it
    if !element.children.is_empty() {
        out.push_str(separator);
    }
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

/// Generate a random document.
///
/// Example:
///
/// ```notrust
/// use tagtree::proptest::arb_document;
///
/// proptest! {
///   #[test]
///   fn test_parses(generated in arb_document()) {
///     let doc = tagtree::parse(&generated.text).unwrap();
///     prop_assert_eq!(doc.to_fixed(doc.root()), generated.root);
///   }
/// }
/// ```
pub fn arb_document() -> impl Strategy<Value = GeneratedDocument> {
    (arb_element(), prop::sample::select(SEPARATORS)).prop_map(|(root, separator)| {
        let mut text = String::from("<?xml version=\"1.0\"?>");
        text.push_str(separator);
        write_element(&root, separator, true, &mut text);
        GeneratedDocument { text, root }
    })
}
