#![forbid(unsafe_code)]

//! Parse small namespaced tag documents into an element tree.
//!
//! A document opens with a declaration tag such as `<?xml version="1.0"?>`
//! followed by a single root element. Elements have a name with an optional
//! `prefix:`, double-quoted attributes, and either a text body or child
//! elements.
//!
//! ```rust
//! let doc = tagtree::parse(
//!     r#"<?xml version="1.0"?>
//!     <ns:a xmlns:ns="urn:x" id="1">
//!         <ns:b/>
//!         <c>text</c>
//!     </ns:a>"#,
//! )?;
//!
//! let root = doc.root_element();
//! assert_eq!(root.name(), "a");
//! assert_eq!(root.prefix(), Some("ns"));
//! assert_eq!(root.get_attribute("id"), Some("1"));
//! assert_eq!(doc.namespaces().get("ns"), Some("urn:x"));
//!
//! let c = doc.children(doc.root()).nth(1).unwrap();
//! assert_eq!(doc.element(c).body(), "text");
//! assert_eq!(doc.len(), 3);
//! # Ok::<(), tagtree::Error>(())
//! ```
//!
//! The whole input has to be in memory; there is no entity decoding, no
//! CDATA, no comments and no validation. The first error ends the parse.

mod builder;
mod cursor;
mod declaration;
mod document;
mod element;
mod encoding;
mod error;
pub mod fixed;
mod header;
mod namespace;
mod options;
mod parse;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

use tracing::debug;

pub use document::{Document, Node};
pub use element::{Attributes, Element, Span};
pub use error::{Error, ErrorKind};
pub use namespace::Namespaces;
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};

/// Parse a document with the default [`ParseOptions`].
///
/// ```rust
/// let doc = tagtree::parse("<?decl?><a>text</a>")?;
/// assert_eq!(doc.declaration().unwrap().name(), "decl");
/// assert_eq!(doc.root_element().body(), "text");
/// # Ok::<(), tagtree::Error>(())
/// ```
pub fn parse(input: &str) -> Result<Document, Error> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a document.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Document, Error> {
    match parse::Parser::new(input, options).run() {
        Ok(document) => {
            debug!(
                elements = document.len(),
                namespaces = document.namespaces().len(),
                "parsed document"
            );
            Ok(document)
        }
        Err(err) => {
            debug!(error = %err, offset = ?err.offset(), "parse failed");
            Err(err)
        }
    }
}

/// Parse a document from raw bytes with the default [`ParseOptions`].
///
/// The encoding is taken from a byte order mark or from the `encoding`
/// attribute of the declaration tag, and defaults to UTF-8. Offsets in
/// errors refer to the decoded text.
///
/// ```rust
/// let doc = tagtree::parse_bytes(b"<?xml encoding=\"utf-8\"?><a/>")?;
/// assert_eq!(doc.root_element().name(), "a");
/// # Ok::<(), tagtree::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document, Error> {
    parse_bytes_with_options(data, &ParseOptions::default())
}

/// Parse a document from raw bytes.
pub fn parse_bytes_with_options(data: &[u8], options: &ParseOptions) -> Result<Document, Error> {
    let text = encoding::decode(data)?;
    parse_with_options(&text, options)
}
