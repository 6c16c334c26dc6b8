use indextree::Arena;

use crate::cursor::starts_with;
use crate::document::{Document, Node};
use crate::element::Element;
use crate::error::Error;
use crate::namespace::Namespaces;
use crate::options::ParseOptions;

pub(crate) type ElementArena = Arena<Element>;

/// State of a single parse.
///
/// The scanning steps live in their own modules as further `impl Parser`
/// blocks: `declaration`, `header` and `builder`.
pub(crate) struct Parser<'a> {
    pub(crate) input: &'a str,
    pub(crate) pos: usize,
    pub(crate) options: &'a ParseOptions,
    pub(crate) arena: ElementArena,
    pub(crate) registry: Vec<Node>,
    pub(crate) namespaces: Namespaces,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Parser {
            input,
            pos: 0,
            options,
            arena: ElementArena::new(),
            registry: Vec::new(),
            namespaces: Namespaces::new(),
        }
    }

    #[inline]
    pub(crate) fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume `token` at the current position.
    ///
    /// Running out of input halfway through is reported as an unterminated
    /// tag; any other difference is a structural mismatch.
    pub(crate) fn expect(&mut self, token: &'static str) -> Result<(), Error> {
        let bytes = self.bytes();
        if starts_with(bytes, self.pos, token.as_bytes()) {
            self.pos += token.len();
            return Ok(());
        }
        let rest = bytes.get(self.pos..).unwrap_or_default();
        if token.as_bytes().starts_with(rest) {
            Err(Error::UnterminatedValue {
                construct: "tag",
                offset: self.pos,
            })
        } else {
            Err(Error::StructuralMismatch {
                expected: token,
                offset: self.pos,
            })
        }
    }

    /// The error for a name that could not be scanned at `offset`.
    pub(crate) fn name_error(&self, offset: usize) -> Error {
        if offset >= self.input.len() {
            Error::UnterminatedValue {
                construct: "tag",
                offset,
            }
        } else {
            Error::InvalidName { offset }
        }
    }

    pub(crate) fn run(mut self) -> Result<Document, Error> {
        let declaration = self.parse_declaration()?;
        let root = self.parse_root()?;
        Ok(Document {
            arena: self.arena,
            root,
            declaration,
            registry: self.registry,
            namespaces: self.namespaces,
        })
    }
}
