use std::error;
use std::fmt;

/// Coarse classification of a parse failure.
///
/// Every [`Error`] maps onto exactly one kind through [`Error::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An expected character or sequence was absent, or a closing tag did
    /// not match its opening tag.
    StructuralMismatch,
    /// A tag or attribute name did not start with an ASCII letter.
    InvalidName,
    /// A quoted value, text body or tag ran into the end of the input.
    UnterminatedValue,
    /// The leading declaration tag was absent or malformed.
    MissingDeclaration,
    /// Elements were nested deeper than the configured limit.
    NestingTooDeep,
    /// Raw bytes could not be decoded to text.
    Encoding,
}

/// An error that occurred while parsing a document.
///
/// Parsing stops at the first failure; offsets are byte offsets into the
/// (decoded) input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Expected a specific character or sequence at `offset`.
    StructuralMismatch {
        /// What was expected, e.g. `">"` or `"=\""`.
        expected: &'static str,
        /// Byte offset where it was expected.
        offset: usize,
    },
    /// The closing tag at `offset` names a different element.
    MismatchedCloseTag {
        /// Local name of the element being closed.
        expected: String,
        /// Local name found in the closing tag.
        found: String,
        /// Byte offset of the closing tag name.
        offset: usize,
    },
    /// A name was expected at `offset` but it does not start with an ASCII
    /// letter.
    InvalidName {
        /// Byte offset of the offending character.
        offset: usize,
    },
    /// The input ended before `construct` was closed.
    UnterminatedValue {
        /// The construct that was left open, e.g. `"attribute value"`.
        construct: &'static str,
        /// Byte offset where the construct started.
        offset: usize,
    },
    /// The document does not start with a `<?name ...?>` declaration.
    MissingDeclaration {
        /// Byte offset of the first non-whitespace character.
        offset: usize,
    },
    /// The document starts with `<?` but the declaration could not be parsed.
    MalformedDeclaration {
        /// Byte offset of the `<?`.
        offset: usize,
        /// The failure inside the declaration.
        cause: Box<Error>,
    },
    /// An element was nested deeper than
    /// [`ParseOptions::max_depth`](crate::ParseOptions::max_depth) allows.
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
        /// Byte offset of the element that exceeded it.
        offset: usize,
    },
    /// The byte input names an encoding we don't know.
    UnsupportedEncoding(String),
    /// The byte input is not valid in its detected encoding.
    MalformedEncoding(&'static str),
}

impl Error {
    /// The taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::StructuralMismatch { .. } | Error::MismatchedCloseTag { .. } => {
                ErrorKind::StructuralMismatch
            }
            Error::InvalidName { .. } => ErrorKind::InvalidName,
            Error::UnterminatedValue { .. } => ErrorKind::UnterminatedValue,
            Error::MissingDeclaration { .. } | Error::MalformedDeclaration { .. } => {
                ErrorKind::MissingDeclaration
            }
            Error::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Error::UnsupportedEncoding(_) | Error::MalformedEncoding(_) => ErrorKind::Encoding,
        }
    }

    /// Byte offset at which the failure was detected.
    ///
    /// Encoding errors happen before any text exists and have no offset.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::StructuralMismatch { offset, .. }
            | Error::MismatchedCloseTag { offset, .. }
            | Error::InvalidName { offset }
            | Error::UnterminatedValue { offset, .. }
            | Error::MissingDeclaration { offset }
            | Error::MalformedDeclaration { offset, .. }
            | Error::NestingTooDeep { offset, .. } => Some(*offset),
            Error::UnsupportedEncoding(_) | Error::MalformedEncoding(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StructuralMismatch { expected, offset } => {
                write!(f, "expected {} at offset {}", expected, offset)
            }
            Error::MismatchedCloseTag {
                expected,
                found,
                offset,
            } => write!(
                f,
                "closing tag </{}> at offset {} does not match <{}>",
                found, offset, expected
            ),
            Error::InvalidName { offset } => {
                write!(f, "name at offset {} must start with an ASCII letter", offset)
            }
            Error::UnterminatedValue { construct, offset } => {
                write!(f, "unterminated {} starting at offset {}", construct, offset)
            }
            Error::MissingDeclaration { offset } => {
                write!(f, "expected declaration tag <?...?> at offset {}", offset)
            }
            Error::MalformedDeclaration { offset, cause } => {
                write!(f, "malformed declaration tag at offset {}: {}", offset, cause)
            }
            Error::NestingTooDeep { limit, offset } => write!(
                f,
                "element at offset {} is nested deeper than {} levels",
                offset, limit
            ),
            Error::UnsupportedEncoding(label) => write!(f, "unsupported encoding: {}", label),
            Error::MalformedEncoding(name) => write!(f, "input is not valid {}", name),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::MalformedDeclaration { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}
