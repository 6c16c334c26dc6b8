//! Recursive construction of the element tree.
//!
//! Each call to `parse_element` handles one element: header, content and
//! closing tag. The parent is passed down explicitly; an element is linked
//! into its parent only once it has been closed.

use indextree::NodeId;
use tracing::trace;

use crate::cursor::{byte_at, find, scan_name, skip_whitespace, starts_with};
use crate::document::Node;
use crate::element::Span;
use crate::error::Error;
use crate::parse::Parser;

impl<'a> Parser<'a> {
    /// Parse the document's root element and whatever may follow it.
    pub(crate) fn parse_root(&mut self) -> Result<Node, Error> {
        self.pos = skip_whitespace(self.bytes(), self.pos);
        if byte_at(self.bytes(), self.pos) != Some(b'<') {
            return Err(Error::StructuralMismatch {
                expected: "<",
                offset: self.pos,
            });
        }
        let root = self.parse_element(None, 1)?;

        let end = skip_whitespace(self.bytes(), self.pos);
        if !self.options.allow_trailing_content && end < self.input.len() {
            return Err(Error::StructuralMismatch {
                expected: "end of input",
                offset: end,
            });
        }
        Ok(Node::new(root))
    }

    fn parse_element(&mut self, parent: Option<NodeId>, depth: usize) -> Result<NodeId, Error> {
        let start = self.pos;
        if depth > self.options.max_depth {
            return Err(Error::NestingTooDeep {
                limit: self.options.max_depth,
                offset: start,
            });
        }
        self.expect("<")?;
        let element = self.parse_header(start)?;
        trace!(name = element.name(), offset = start, depth, "open element");

        let node = self.arena.new_node(element);
        self.registry.push(Node::new(node));

        if starts_with(self.bytes(), self.pos, b"/>") {
            self.pos += 2;
        } else {
            match byte_at(self.bytes(), self.pos) {
                Some(b'>') => self.pos += 1,
                None => {
                    return Err(Error::UnterminatedValue {
                        construct: "tag",
                        offset: start,
                    })
                }
                Some(_) => {
                    return Err(Error::StructuralMismatch {
                        expected: "> or />",
                        offset: self.pos,
                    })
                }
            }
            self.parse_content(node, start, depth)?;
            self.parse_close_tag(node)?;
        }

        self.arena[node].get_mut().span = Span::new(start, self.pos);
        if let Some(parent) = parent {
            parent.append(node, &mut self.arena);
        }
        trace!(offset = self.pos, "close element");
        Ok(node)
    }

    /// Parse what sits between `>` and the closing tag: either a text body
    /// or a sequence of child elements.
    fn parse_content(&mut self, node: NodeId, start: usize, depth: usize) -> Result<(), Error> {
        let input = self.input;
        let content_start = skip_whitespace(self.bytes(), self.pos);
        self.pos = content_start;

        match byte_at(self.bytes(), content_start) {
            None => Err(Error::UnterminatedValue {
                construct: "element",
                offset: start,
            }),
            Some(b'<') => {
                while !starts_with(self.bytes(), self.pos, b"</") {
                    match byte_at(self.bytes(), self.pos) {
                        Some(b'<') => {}
                        None => {
                            return Err(Error::UnterminatedValue {
                                construct: "element",
                                offset: start,
                            })
                        }
                        Some(_) => {
                            return Err(Error::StructuralMismatch {
                                expected: "<",
                                offset: self.pos,
                            })
                        }
                    }
                    self.parse_element(Some(node), depth + 1)?;
                    self.pos = skip_whitespace(self.bytes(), self.pos);
                }
                Ok(())
            }
            Some(_) => {
                let end = find(self.bytes(), content_start, b'<').ok_or(
                    Error::UnterminatedValue {
                        construct: "text body",
                        offset: content_start,
                    },
                )?;
                self.arena[node].get_mut().body = input[content_start..end].to_string();
                self.pos = end;
                Ok(())
            }
        }
    }

    /// Match `</name>` against the element's local name. A prefix on the
    /// closing tag is skipped, not checked.
    fn parse_close_tag(&mut self, node: NodeId) -> Result<(), Error> {
        let input = self.input;
        let bytes = self.bytes();
        self.expect("</")?;

        let name_start = self.pos;
        let first_end = scan_name(bytes, name_start).ok_or_else(|| self.name_error(name_start))?;
        let (local_start, local_end) = if byte_at(bytes, first_end) == Some(b':') {
            let local_start = first_end + 1;
            let local_end =
                scan_name(bytes, local_start).ok_or_else(|| self.name_error(local_start))?;
            (local_start, local_end)
        } else {
            (name_start, first_end)
        };

        let found = &input[local_start..local_end];
        let expected = self.arena[node].get().name();
        if found != expected {
            return Err(Error::MismatchedCloseTag {
                expected: expected.to_string(),
                found: found.to_string(),
                offset: name_start,
            });
        }

        self.pos = skip_whitespace(bytes, local_end);
        self.expect(">")
    }
}
