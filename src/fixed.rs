//! A fixed representation of a parsed element tree.
//!
//! A [`Document`](crate::Document) keeps its elements in an arena and hands
//! out [`Node`](crate::Node) handles. Sometimes it is more convenient to have
//! an owned, nested value instead, where each element holds its children
//! directly. Get one with [`Document::to_fixed`].
//!
//! Example:
//!
//! ```rust
//! use tagtree::fixed;
//!
//! let doc = tagtree::parse(r#"<?xml?><a><b id="1"/></a>"#)?;
//! let expected = fixed::Element {
//!     name: "a".to_string(),
//!     prefix: None,
//!     attributes: vec![],
//!     body: "".to_string(),
//!     children: vec![fixed::Element {
//!         name: "b".to_string(),
//!         prefix: None,
//!         attributes: vec![("id".to_string(), "1".to_string())],
//!         body: "".to_string(),
//!         children: vec![],
//!     }],
//! };
//! assert_eq!(doc.to_fixed(doc.root()), expected);
//! # Ok::<(), tagtree::Error>(())
//! ```

use crate::document::{Document, Node};

/// A fixed representation of an element and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Local name
    pub name: String,
    /// Namespace prefix as written in the tag
    pub prefix: Option<String>,
    /// Attributes, sorted by name
    pub attributes: Vec<(String, String)>,
    /// Text body
    pub body: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Number of elements in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }

    /// Names of the elements in this subtree, parents before children.
    pub fn preorder_names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.count());
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        names.push(&self.name);
        for child in &self.children {
            child.collect_names(names);
        }
    }
}

impl Document {
    /// Copy the subtree under `node` into a [`fixed::Element`](Element).
    pub fn to_fixed(&self, node: Node) -> Element {
        let element = self.element(node);
        let mut attributes = element
            .attributes()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect::<Vec<_>>();
        attributes.sort();
        Element {
            name: element.name().to_string(),
            prefix: element.prefix().map(str::to_string),
            attributes,
            body: element.body().to_string(),
            children: self
                .children(node)
                .map(|child| self.to_fixed(child))
                .collect(),
        }
    }
}
