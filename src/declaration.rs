use tracing::trace;

use crate::cursor::{skip_whitespace, starts_with};
use crate::element::{Element, Span};
use crate::error::Error;
use crate::parse::Parser;

impl<'a> Parser<'a> {
    /// Consume the leading `<?name ...?>` declaration tag.
    ///
    /// Returns `None` only if the document has no declaration and
    /// [`ParseOptions::require_declaration`](crate::ParseOptions::require_declaration)
    /// is off.
    pub(crate) fn parse_declaration(&mut self) -> Result<Option<Element>, Error> {
        let start = skip_whitespace(self.bytes(), self.pos);
        if !starts_with(self.bytes(), start, b"<?") {
            if self.options.require_declaration {
                return Err(Error::MissingDeclaration { offset: start });
            }
            return Ok(None);
        }

        self.pos = start + 2;
        let declaration = self
            .parse_declaration_tag(start)
            .map_err(|cause| Error::MalformedDeclaration {
                offset: start,
                cause: Box::new(cause),
            })?;
        trace!(name = declaration.name(), "declaration");
        Ok(Some(declaration))
    }

    fn parse_declaration_tag(&mut self, start: usize) -> Result<Element, Error> {
        let mut element = self.parse_header(start)?;
        self.expect("?>")?;
        element.span = Span::new(start, self.pos);
        Ok(element)
    }
}
