use ahash::HashMap;

/// Prefix to namespace URI bindings collected from `xmlns:prefix="uri"`
/// attributes.
///
/// The table is global to a parse: bindings are not scoped to the element
/// that declares them, and a later declaration of the same prefix replaces
/// the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Namespaces {
    by_prefix: HashMap<String, String>,
}

impl Namespaces {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a binding, returning the URI it replaced.
    pub(crate) fn bind(&mut self, prefix: &str, uri: &str) -> Option<String> {
        self.by_prefix.insert(prefix.to_string(), uri.to_string())
    }

    /// Look up the URI bound to `prefix`.
    ///
    /// ```rust
    /// let doc = tagtree::parse(r#"<?xml?><x:doc xmlns:x="urn:x"/>"#)?;
    /// assert_eq!(doc.namespaces().get("x"), Some("urn:x"));
    /// assert_eq!(doc.namespaces().get("y"), None);
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(|s| s.as_str())
    }

    /// Is `prefix` bound?
    pub fn contains(&self, prefix: &str) -> bool {
        self.by_prefix.contains_key(prefix)
    }

    /// Iterate over `(prefix, uri)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.by_prefix
            .iter()
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }
}
