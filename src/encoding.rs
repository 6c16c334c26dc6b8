use std::borrow::Cow;

use encoding_rs::Encoding;
use xhtmlchardet::detect;

use crate::error::Error;

/// Work out the encoding of `data` from its byte order mark or the
/// `encoding="..."` attribute of its declaration tag. Defaults to UTF-8.
pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Result<&'static Encoding, Error> {
    let mut cursor = std::io::Cursor::new(data);
    // reading from memory can't fail; treat it like no detection
    let charsets = detect(&mut cursor, hint).unwrap_or_default();
    let label = charsets.first().map(|s| s.as_str()).unwrap_or("UTF-8");
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))
}

/// Decode `data` to text in its detected encoding.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<'_, str>, Error> {
    let encoding = encoding(data, None)?;
    let (text, actual, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(Error::MalformedEncoding(actual.name()));
    }
    Ok(text)
}
