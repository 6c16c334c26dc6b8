use indextree::NodeId;

use crate::element::Element;
use crate::namespace::Namespaces;
use crate::parse::ElementArena;

/// A handle to an element in a [`Document`].
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// A parsed document.
///
/// It holds the element tree, the optional declaration tag, the registry of
/// all elements in the order their opening tags appear, and the namespace
/// bindings found anywhere in the document. A `Document` is never modified
/// after parsing.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) arena: ElementArena,
    pub(crate) root: Node,
    pub(crate) declaration: Option<Element>,
    pub(crate) registry: Vec<Node>,
    pub(crate) namespaces: Namespaces,
}

/// ## Read-only access
impl Document {
    /// The root element's node.
    pub fn root(&self) -> Node {
        self.root
    }

    /// The root element.
    ///
    /// ```rust
    /// let doc = tagtree::parse("<?xml?><p>Example</p>")?;
    /// assert_eq!(doc.root_element().name(), "p");
    /// assert_eq!(doc.root_element().body(), "Example");
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn root_element(&self) -> &Element {
        self.element(self.root)
    }

    /// The leading `<?name ...?>` tag, if the document had one.
    ///
    /// The declaration is not part of the element tree or the registry.
    pub fn declaration(&self) -> Option<&Element> {
        self.declaration.as_ref()
    }

    /// All elements, in the order their opening tags appear in the input.
    ///
    /// ```rust
    /// let doc = tagtree::parse("<?xml?><a><b/><c><d/></c></a>")?;
    /// let names = doc
    ///     .elements()
    ///     .iter()
    ///     .map(|node| doc.element(*node).name())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(names, vec!["a", "b", "c", "d"]);
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn elements(&self) -> &[Node] {
        &self.registry
    }

    /// Iterate over all elements in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.registry.iter().map(move |node| self.element(*node))
    }

    /// Number of elements, not counting the declaration.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// A document always has a root element, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The element for `node`.
    ///
    /// Panics if `node` comes from another document.
    #[inline]
    pub fn element(&self, node: Node) -> &Element {
        self.arena[node.get()].get()
    }

    /// Child elements of `node`, in document order.
    ///
    /// ```rust
    /// let doc = tagtree::parse("<?xml?><p><a/><b/></p>")?;
    /// let names = doc
    ///     .children(doc.root())
    ///     .map(|node| doc.element(node).name())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(names, vec!["a", "b"]);
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(&self.arena).map(Node::new)
    }

    /// The parent element, or [`None`] for the root.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena[node.get()].parent().map(Node::new)
    }

    /// `node` and everything below it, depth first, parents before children.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(&self.arena).map(Node::new)
    }

    /// Prefix to namespace URI bindings declared anywhere in the document.
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// The namespace URI of an element, looked up by its prefix.
    ///
    /// [`None`] if the element has no prefix or the prefix was never bound.
    ///
    /// ```rust
    /// let doc = tagtree::parse(r#"<?xml?><x:p xmlns:x="urn:x"><q/></x:p>"#)?;
    /// assert_eq!(doc.namespace_uri(doc.root()), Some("urn:x"));
    /// let q = doc.children(doc.root()).next().unwrap();
    /// assert_eq!(doc.namespace_uri(q), None);
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn namespace_uri(&self, node: Node) -> Option<&str> {
        let prefix = self.element(node).prefix()?;
        self.namespaces.get(prefix)
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;

    #[test]
    fn test_parent() {
        let doc = parse("<?xml?><a><b><c/></b></a>").unwrap();
        let b = doc.children(doc.root()).next().unwrap();
        let c = doc.children(b).next().unwrap();
        assert_eq!(doc.parent(c), Some(b));
        assert_eq!(doc.parent(b), Some(doc.root()));
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_descendants_match_registry() {
        let doc = parse("<?xml?><a><b><c/></b><d>x</d><e/></a>").unwrap();
        let descendants = doc.descendants(doc.root()).collect::<Vec<_>>();
        assert_eq!(descendants, doc.elements());
    }

    #[test]
    fn test_accessors_are_stable() {
        let doc = parse(r#"<?decl?><a id="1"><b/></a>"#).unwrap();
        assert_eq!(doc.root(), doc.root());
        assert_eq!(doc.root_element(), doc.root_element());
        assert_eq!(doc.declaration(), doc.declaration());
        assert_eq!(doc.elements(), doc.elements());
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
    }
}
