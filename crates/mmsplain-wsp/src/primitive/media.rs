//! Charset, encoded string and content-type encodings.

use super::text::{lossy, nul_terminated, text_string_bytes};
use super::{Env, LENGTH_QUOTE, Parsed, integer_value, lookup_code, parameters, short_integer};
use super::{text_string, value_length};
use crate::charset::is_passthrough;
use crate::lookup::Table;
use crate::{Cursor, Result, WarningKind, Warnings};

/// Any-charset octet.
const ANY_CHARSET: u8 = 128;

/// Well-known-charset: Any-charset (`128`, rendered `Auto`) or an
/// Integer-value MIBEnum looked up in the charset table.
pub fn well_known_charset(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    if c.peek()? == ANY_CHARSET {
        return Ok(Parsed::new("Auto".to_string(), 1));
    }
    let code = integer_value(c, w)?;
    if code.len == 0 {
        return Ok(Parsed::new(String::new(), 0));
    }
    let name = env.resolve(Table::Charset, lookup_code(code.value), c.position(), w);
    Ok(Parsed::new(name, code.len))
}

/// Charset: a Text-string name or a Well-known-charset.
pub fn charset(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    if (LENGTH_QUOTE..=127).contains(&c.peek()?) {
        text_string(c)
    } else {
        well_known_charset(env, c, w)
    }
}

/// Encoded-string-value: a bare Text-string, or Value-length, Charset and
/// Text-string.
///
/// Text in a charset other than UTF-8 or `Auto` goes through the
/// transcoder; if it cannot handle the charset the bytes are kept as they
/// are.
pub fn encoded_string_value(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
) -> Result<Parsed<String>> {
    if c.peek()? > LENGTH_QUOTE {
        return text_string(c);
    }

    let declared = value_length(c, w)?;
    let charset = charset(env, c.advance(declared.len)?, w)?;
    let head = declared.len + charset.len;

    if charset.len >= declared.value {
        w.malformed(
            c.position(),
            format!(
                "encoded-string-value length {} leaves no room for text after the charset",
                declared.value
            ),
        );
        return Ok(Parsed::new(String::new(), head));
    }

    let raw = text_string_bytes(c.advance(head)?)?;
    if charset.len + raw.len != declared.value {
        w.malformed(
            c.position(),
            format!(
                "encoded-string-value declares {} byte(s) but charset and text occupy {}",
                declared.value,
                charset.len + raw.len
            ),
        );
    }

    let text = if charset.value.is_empty() || is_passthrough(&charset.value) {
        lossy(raw.value)
    } else if let Some(text) = env.transcoder.transcode(raw.value, &charset.value) {
        text
    } else {
        w.push(
            WarningKind::UnsupportedCharset,
            c.position(),
            format!("cannot convert charset {} to UTF-8", charset.value),
        );
        lossy(raw.value)
    };

    Ok(Parsed::new(text, head + raw.len))
}

/// Extension-media: a NUL-terminated media type name.
pub fn extension_media(c: Cursor<'_>) -> Result<Parsed<String>> {
    Ok(nul_terminated(c)?.map(lossy))
}

fn well_known_media(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let code = integer_value(c, w)?;
    let name = env.resolve(Table::ContentType, lookup_code(code.value), c.position(), w);
    Ok(Parsed::new(name, code.len))
}

/// Constrained-encoding: a Short-integer content-type code or
/// Extension-media.
pub fn constrained_encoding(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
) -> Result<Parsed<String>> {
    if c.peek()? > 127 {
        let code = short_integer(c, w)?;
        let name = env.resolve(Table::ContentType, u32::from(code.value), c.position(), w);
        Ok(Parsed::new(name, code.len))
    } else {
        extension_media(c)
    }
}

/// Media-type: Well-known-media or Extension-media followed by parameters
/// filling the rest of `content_len`.
///
/// Rendered as `type;param,param,`; the `;` only appears when there are
/// parameters.
pub fn media_type(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
    content_len: usize,
) -> Result<Parsed<String>> {
    let media = if (LENGTH_QUOTE..=127).contains(&c.peek()?) {
        extension_media(c)?
    } else {
        well_known_media(env, c, w)?
    };

    if media.len > content_len {
        w.malformed(
            c.position(),
            format!(
                "media type occupies {} byte(s) of a {content_len} byte content type",
                media.len
            ),
        );
        return Ok(media);
    }

    let params = parameters(env, c.advance(media.len)?, w, content_len - media.len)?;
    let mut rendered = media.value;
    let mut params_iter = params.value.iter().filter(|p| !p.is_empty()).peekable();
    if params_iter.peek().is_some() {
        rendered.push(';');
        for param in params_iter {
            rendered.push_str(param);
            rendered.push(',');
        }
    }
    Ok(Parsed::new(rendered, media.len + params.len))
}

/// Content-type-value: Constrained-media, or Content-general-form
/// (Value-length then a Media-type bounded by it).
pub fn content_type_value(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
) -> Result<Parsed<String>> {
    if c.peek()? > LENGTH_QUOTE {
        return constrained_encoding(env, c, w);
    }

    let declared = value_length(c, w)?;
    let media = media_type(env, c.advance(declared.len)?, w, declared.value)?;
    if media.len != declared.value {
        w.malformed(
            c.position(),
            format!(
                "content type declares {} byte(s) but its media type occupies {}",
                declared.value, media.len
            ),
        );
    }
    Ok(Parsed::new(
        media.value,
        declared.len.saturating_add(declared.value),
    ))
}
