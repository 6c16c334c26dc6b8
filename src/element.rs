use std::borrow::Cow;
use std::ops::Range;

use ahash::HashMap;

/// A map of attribute name to attribute value.
///
/// Prefixed attribute names are stored with their prefix, e.g. `"ns:id"`.
pub type Attributes = HashMap<String, String>;

/// Byte range of a construct in the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Offset of the first byte.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The span as a range, usable to slice the original input.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A parsed element.
///
/// Example: `<foo/>`, `<ns:foo bar="baz">text</ns:foo>`.
///
/// Children are not stored on the element itself; get them through
/// [`Document::children`](crate::Document::children).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    pub(crate) name: String,
    pub(crate) prefix: Option<String>,
    pub(crate) attributes: Attributes,
    pub(crate) body: String,
    pub(crate) span: Span,
}

impl Element {
    pub(crate) fn new(name: String, prefix: Option<String>, start: usize) -> Self {
        Element {
            name,
            prefix,
            attributes: Attributes::default(),
            body: String::new(),
            span: Span::new(start, start),
        }
    }

    /// The local name of the element, without namespace prefix.
    ///
    /// ```rust
    /// let doc = tagtree::parse(r#"<?xml?><ns:doc xmlns:ns="urn:x"/>"#)?;
    /// assert_eq!(doc.root_element().name(), "doc");
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace prefix, if the tag was written as `prefix:name`.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The name as written in the tag: `prefix:name`, or just `name`.
    pub fn full_name(&self) -> Cow<'_, str> {
        match &self.prefix {
            Some(prefix) => Cow::Owned(format!("{}:{}", prefix, self.name)),
            None => Cow::Borrowed(&self.name),
        }
    }

    /// The attributes of the element.
    ///
    /// Namespace declarations (`xmlns:prefix="..."`) are not included; see
    /// [`Document::namespaces`](crate::Document::namespaces).
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value by name.
    ///
    /// ```rust
    /// let doc = tagtree::parse(r#"<?xml?><doc a="A"/>"#)?;
    /// let root = doc.root_element();
    /// assert_eq!(root.get_attribute("a"), Some("A"));
    /// assert_eq!(root.get_attribute("b"), None);
    /// # Ok::<(), tagtree::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// The text content.
    ///
    /// Empty if the element has child elements or is self-closing.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Where the element sits in the input.
    pub fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let plain = Element::new("a".to_string(), None, 0);
        assert_eq!(plain.full_name(), "a");
        let prefixed = Element::new("a".to_string(), Some("ns".to_string()), 0);
        assert_eq!(prefixed.full_name(), "ns:a");
    }

    #[test]
    fn test_span_range() {
        let span: Span = (3..7).into();
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 7);
        assert_eq!(&"abcdefghij"[span.range()], "defg");
    }
}
