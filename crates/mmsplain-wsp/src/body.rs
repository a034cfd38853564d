//! Multipart body decoding.
//!
//! A body is a part count followed by that many parts. Each part carries
//! its header length and data length as Uintvar-integers, then a header
//! block of exactly that many bytes, then the payload.

use tracing::debug;

use crate::lookup::Table;
use crate::model::{Field, Part};
use crate::names::PartField;
use crate::primitive::{
    Env, Parsed, content_type_value, quoted_string, short_integer, text_string, to_len,
    token_text, uintvar_integer,
};
use crate::{Cursor, Result, Warnings};

/// Decodes the part count and every part that follows it.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if a part
/// runs past the input.
pub fn decode_body(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<Vec<Part>>> {
    let count = c.peek()?;
    debug!(count, position = c.position(), "body parts");

    let mut parts = Vec::with_capacity(usize::from(count));
    let mut used = 1;
    for index in 0..count {
        let part = decode_part(env, c.advance(used)?, w)?;
        debug!(
            index,
            header_fields = part.value.header.len(),
            data_len = part.value.data_len(),
            "body part"
        );
        used += part.len;
        parts.push(part.value);
    }
    Ok(Parsed::new(parts, used))
}

/// Decodes one part: lengths, header block and payload.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the header
/// block or payload runs past the input.
pub fn decode_part(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<Part>> {
    let header_len = uintvar_integer(c, w)?;
    let data_len = uintvar_integer(c.advance(header_len.len)?, w)?;
    let header_size = to_len(header_len.value);
    let data_size = to_len(data_len.value);

    let head = header_len.len + data_len.len;
    let header = decode_part_header(env, c.advance(head)?, w, header_size)?;
    let data = c.advance(head.saturating_add(header_size))?.take(data_size)?;

    Ok(Parsed::new(
        Part::new(header.value, data.to_vec()),
        head + header_size + data_size,
    ))
}

/// Decodes a part header block of `header_len` bytes: a Content-Type
/// value followed by header fields.
///
/// Well-known fields (code octet of 128 or above) are resolved through
/// the parameter field table; only `Content-ID` and `Content-Location`
/// have known value encodings. Any other well-known field is recorded
/// with an empty value and ends the scan, since its length is unknown.
/// An octet in `32..=127` starts an application header: a Token-text name
/// and a Text-string value.
///
/// The returned length is always `header_len`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if a field
/// runs past the input.
pub fn decode_part_header(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
    header_len: usize,
) -> Result<Parsed<Vec<Field>>> {
    let content_type = content_type_value(env, c, w)?;
    let start = c.position();
    let end = c.advance(content_type.len)?.position();
    let mut fields = vec![Field::new("Content-Type", content_type.value, start..end)];

    let mut used = content_type.len;
    while used < header_len {
        let at = c.advance(used)?;
        let (field, known) = part_field(env, at, w)?;
        used += field.len;
        fields.push(field.value);

        if !known {
            if used < header_len {
                w.malformed(
                    at.position(),
                    format!(
                        "part header field has no known encoding, skipping {} byte(s)",
                        header_len - used
                    ),
                );
            }
            return Ok(Parsed::new(fields, header_len));
        }
    }

    if used > header_len {
        w.malformed(
            start,
            format!("part header declares {header_len} byte(s) but occupies {used}"),
        );
    }
    Ok(Parsed::new(fields, header_len))
}

/// Decodes one part header field; the flag is false when its value
/// encoding is unknown.
fn part_field(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<(Parsed<Field>, bool)> {
    let start = c.position();

    if (32..=127).contains(&c.peek()?) {
        let name = token_text(c)?;
        let value = text_string(c.advance(name.len)?)?;
        let len = name.len + value.len;
        let field = Field::new(name.value, value.value, start..start + len);
        return Ok((Parsed::new(field, len), true));
    }

    let code = short_integer(c, w)?;
    let name = env.resolve(Table::ParameterField, u32::from(code.value), start, w);
    let vc = c.advance(code.len)?;
    let (value, known) = match PartField::from_name(&name) {
        PartField::ContentId => (quoted_string(vc, w)?, true),
        PartField::ContentLocation => (text_string(vc)?, true),
        PartField::Other(_) => (Parsed::new(String::new(), 0), false),
    };

    let len = code.len + value.len;
    Ok((
        Parsed::new(Field::new(name, value.value, start..start + len), len),
        known,
    ))
}
