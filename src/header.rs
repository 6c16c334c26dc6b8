//! Opening tag syntax: `name`, `prefix:name` and `key="value"` attributes.

use tracing::trace;

use crate::cursor::{byte_at, find, scan_name, skip_whitespace, starts_with};
use crate::element::Element;
use crate::error::Error;
use crate::parse::Parser;

impl<'a> Parser<'a> {
    /// Parse a tag header starting right after `<` (or `<?`).
    ///
    /// `start` is the offset of the `<`. On success the position points at
    /// the first character after the header: `>`, `/>` or `?>`.
    pub(crate) fn parse_header(&mut self, start: usize) -> Result<Element, Error> {
        let input = self.input;
        let bytes = self.bytes();

        let first_start = self.pos;
        let first_end = scan_name(bytes, first_start).ok_or_else(|| self.name_error(first_start))?;

        let (prefix, name_end) = if byte_at(bytes, first_end) == Some(b':') {
            let local_start = first_end + 1;
            let local_end =
                scan_name(bytes, local_start).ok_or_else(|| self.name_error(local_start))?;
            (Some(&input[first_start..first_end]), local_end)
        } else {
            (None, first_end)
        };
        let name = match prefix {
            Some(_) => &input[first_end + 1..name_end],
            None => &input[first_start..first_end],
        };

        let mut element = Element::new(name.to_string(), prefix.map(str::to_string), start);

        self.pos = skip_whitespace(bytes, name_end);
        if self.pos != name_end {
            self.parse_attributes(&mut element)?;
        }
        Ok(element)
    }

    fn at_header_end(&self) -> bool {
        let bytes = self.bytes();
        matches!(byte_at(bytes, self.pos), Some(b'?') | Some(b'>'))
            || starts_with(bytes, self.pos, b"/>")
    }

    fn parse_attributes(&mut self, element: &mut Element) -> Result<(), Error> {
        let input = self.input;
        let bytes = self.bytes();

        while !self.at_header_end() {
            if self.at_end() {
                return Err(Error::UnterminatedValue {
                    construct: "tag",
                    offset: element.span.start(),
                });
            }

            let name_start = self.pos;
            let first_end = scan_name(bytes, name_start).ok_or_else(|| self.name_error(name_start))?;
            let mut name_end = first_end;
            let mut binding = None;
            if byte_at(bytes, first_end) == Some(b':') {
                let local_start = first_end + 1;
                name_end =
                    scan_name(bytes, local_start).ok_or_else(|| self.name_error(local_start))?;
                if &input[name_start..first_end] == "xmlns" {
                    binding = Some(&input[local_start..name_end]);
                }
            }

            self.pos = name_end;
            self.expect("=\"")?;
            let value_start = self.pos;
            let value_end =
                find(bytes, value_start, b'"').ok_or(Error::UnterminatedValue {
                    construct: "attribute value",
                    offset: value_start,
                })?;
            let value = &input[value_start..value_end];

            match binding {
                Some(prefix) => {
                    trace!(prefix, uri = value, "namespace binding");
                    self.namespaces.bind(prefix, value);
                }
                None => {
                    element
                        .attributes
                        .insert(input[name_start..name_end].to_string(), value.to_string());
                }
            }

            self.pos = skip_whitespace(bytes, value_end + 1);
        }
        Ok(())
    }
}
