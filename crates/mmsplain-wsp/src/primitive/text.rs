//! NUL-terminated text encodings.

use super::{Parsed, QUOTE, QUOTED_STRING_MARK};
use crate::{Cursor, Result, Warnings};

/// Bytes up to the terminating NUL; the terminator counts as consumed.
pub(crate) fn nul_terminated<'a>(c: Cursor<'a>) -> Result<Parsed<&'a [u8]>> {
    let bytes = c.take_until_nul()?;
    Ok(Parsed::new(bytes, bytes.len() + 1))
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Raw Text-string bytes with a disambiguating leading Quote removed.
pub(crate) fn text_string_bytes<'a>(c: Cursor<'a>) -> Result<Parsed<&'a [u8]>> {
    let raw = nul_terminated(c)?;
    let bytes = match raw.value {
        [QUOTE, second, ..] if *second > 127 => &raw.value[1..],
        other => other,
    };
    Ok(Parsed::new(bytes, raw.len))
}

/// Text-string: `[Quote] *TEXT End-of-string`.
///
/// The Quote octet is only part of the encoding when the text itself
/// starts with an octet of 128 or above.
pub fn text_string(c: Cursor<'_>) -> Result<Parsed<String>> {
    Ok(text_string_bytes(c)?.map(lossy))
}

/// Uri-value: a Text-string.
pub fn uri_value(c: Cursor<'_>) -> Result<Parsed<String>> {
    text_string(c)
}

/// Token-text, returned verbatim.
pub fn token_text(c: Cursor<'_>) -> Result<Parsed<String>> {
    Ok(nul_terminated(c)?.map(lossy))
}

/// Quoted-string: `<Octet 34> *TEXT End-of-string`, rendered with
/// surrounding double quotes.
pub fn quoted_string(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let octet = c.peek()?;
    if octet != QUOTED_STRING_MARK {
        w.malformed(
            c.position(),
            format!("quoted-string starts with {octet:#04x} instead of a quote"),
        );
    }
    let content = nul_terminated(c.advance(1)?)?;
    Ok(Parsed::new(
        format!("\"{}\"", lossy(content.value)),
        content.len + 1,
    ))
}

/// No-value: a single zero octet.
pub fn no_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let octet = c.peek()?;
    if octet != 0 {
        w.malformed(c.position(), format!("no-value octet is {octet:#04x}"));
    }
    Ok(Parsed::new(String::new(), 1))
}

/// Text-value: No-value, Quoted-string or Token-text.
pub fn text_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    match c.peek()? {
        0 => no_value(c, w),
        QUOTED_STRING_MARK => quoted_string(c, w),
        _ => token_text(c),
    }
}
