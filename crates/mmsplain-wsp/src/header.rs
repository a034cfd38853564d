//! MMS header decoding.
//!
//! The header is a run of `field-code value` pairs that ends with the
//! `Content-Type` field. Each code is resolved to a name, the name picks
//! the value encoding, and decoding moves on by the bytes the value used.

use tracing::debug;

use crate::lookup::Table;
use crate::model::Field;
use crate::names::HeaderField;
use crate::primitive::{
    Env, Parsed, content_type_value, date_value, delta_seconds_value, encoded_string_value,
    format_version, long_integer, short_integer, text_string, token_text, uri_value,
    value_length,
};
use crate::{Cursor, Error, Result, Warnings};

/// From value: an address follows.
const ADDRESS_PRESENT_TOKEN: u8 = 128;
/// From value: the relay inserts the sender address.
const INSERT_ADDRESS_TOKEN: u8 = 129;
/// Rendered From value when the relay inserts the address.
pub const ADDRESS_PLACEHOLDER: &str = "[Placeholder]";
/// Expiry and Delivery-Time: an absolute Date-value follows.
const ABSOLUTE_TOKEN: u8 = 128;
/// Expiry and Delivery-Time: a relative Delta-seconds-value follows.
const RELATIVE_TOKEN: u8 = 129;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading fields.
    Scanning,
    /// The Content-Type field was decoded.
    Terminal,
    /// Input ran out at a field boundary.
    Exhausted,
}

/// Decodes header fields up to and including `Content-Type`.
///
/// Returns the fields in wire order and the bytes consumed.
///
/// # Errors
///
/// Returns [`Error::UnterminatedHeader`] if input ends between fields
/// before a `Content-Type` field, and [`Error::OutOfBounds`] if it ends
/// inside a field.
pub fn decode_header(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<Vec<Field>>> {
    let mut fields = Vec::new();
    let mut used = 0;
    let mut state = if c.is_eof() {
        State::Exhausted
    } else {
        State::Scanning
    };

    loop {
        match state {
            State::Scanning => {
                let at = c.advance(used)?;
                let (kind, field) = decode_field(env, at, w)?;
                used = used.saturating_add(field.len);
                fields.push(field.value);

                state = if kind.is_terminal() {
                    State::Terminal
                } else if c.advance(used)?.is_eof() {
                    State::Exhausted
                } else {
                    State::Scanning
                };
            }
            State::Terminal => return Ok(Parsed::new(fields, used)),
            State::Exhausted => {
                return Err(Error::UnterminatedHeader {
                    position: c.position() + used,
                    fields: fields.len(),
                });
            }
        }
    }
}

/// Decodes one header field: a code octet and the value it selects.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if the field runs past the input.
pub fn decode_field(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
) -> Result<(HeaderField, Parsed<Field>)> {
    let code = c.peek()?;
    let name = env.resolve(Table::HeaderField, u32::from(code & 0x7F), c.position(), w);
    let kind = HeaderField::from_name(&name);

    let value = decode_value(env, &kind, c.advance(1)?, w)?;
    let len = value.len.saturating_add(1);
    debug!(code, name = %name, value = %value.value, "header field");

    let start = c.position();
    Ok((
        kind,
        Parsed::new(Field::new(name, value.value, start..start.saturating_add(len)), len),
    ))
}

fn decode_value(
    env: &Env<'_>,
    kind: &HeaderField,
    c: Cursor<'_>,
    w: &mut Warnings,
) -> Result<Parsed<String>> {
    match kind {
        HeaderField::MessageType => option(env, Table::MessageType, c, w),
        HeaderField::Priority => option(env, Table::Priority, c, w),
        HeaderField::DeliveryReport => option(env, Table::DeliveryReport, c, w),
        HeaderField::ReadReply => option(env, Table::ReadReply, c, w),
        HeaderField::ReportAllowed => option(env, Table::ReportAllowed, c, w),
        HeaderField::ResponseStatus => option(env, Table::ResponseStatus, c, w),
        HeaderField::MessageClass => {
            if c.peek()? > 127 {
                option(env, Table::MessageClass, c, w)
            } else {
                token_text(c)
            }
        }
        HeaderField::MmsVersion => Ok(short_integer(c, w)?.map(format_version)),
        HeaderField::TransactionId | HeaderField::MessageId => text_string(c),
        HeaderField::Date => Ok(date_value(c, w)?.map(|v| v.to_string())),
        HeaderField::To
        | HeaderField::Cc
        | HeaderField::Bcc
        | HeaderField::Subject
        | HeaderField::ResponseText
        | HeaderField::RetrieveText => encoded_string_value(env, c, w),
        HeaderField::From => from_value(env, c, w),
        HeaderField::ContentType => content_type_value(env, c, w),
        HeaderField::ContentLocation => uri_value(c),
        HeaderField::Expiry | HeaderField::DeliveryTime => time_value(c, w),
        HeaderField::MessageSize => Ok(long_integer(c, w)?.map(|v| v.to_string())),
        HeaderField::Other(name) => {
            // Unknown encoding: assume a single-octet value.
            c.advance(1)?;
            debug!(name = %name, position = c.position(), "skipping one octet of unknown field");
            Ok(Parsed::new(String::new(), 1))
        }
    }
}

/// A single octet resolved in a code table.
fn option(env: &Env<'_>, table: Table, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let octet = c.peek()?;
    Ok(Parsed::new(
        env.resolve(table, u32::from(octet), c.position(), w),
        1,
    ))
}

/// From-value: Value-length, then an address-present token and an
/// Encoded-string-value, or an insert-address token.
fn from_value(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let declared = value_length(c, w)?;
    let body = c.advance(declared.len)?;
    let total = declared.len.saturating_add(declared.value);

    let (value, inner) = match body.peek()? {
        INSERT_ADDRESS_TOKEN => (ADDRESS_PLACEHOLDER.to_string(), 1),
        ADDRESS_PRESENT_TOKEN => {
            let address = encoded_string_value(env, body.advance(1)?, w)?;
            (address.value, 1 + address.len)
        }
        token => {
            w.malformed(
                body.position(),
                format!("from value has unknown address token {token:#04x}"),
            );
            return Ok(Parsed::new(String::new(), total));
        }
    };

    if inner != declared.value {
        w.malformed(
            c.position(),
            format!(
                "from value declares {} byte(s) but occupies {inner}",
                declared.value
            ),
        );
    }
    Ok(Parsed::new(value, total))
}

/// Expiry-value and Delivery-time-value: Value-length, then an absolute
/// Date-value or a relative Delta-seconds-value rendered with a `+`.
fn time_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let declared = value_length(c, w)?;
    let body = c.advance(declared.len)?;
    let total = declared.len.saturating_add(declared.value);

    let value = match body.peek()? {
        ABSOLUTE_TOKEN => date_value(body.advance(1)?, w)?.map(|v| v.to_string()),
        RELATIVE_TOKEN => delta_seconds_value(body.advance(1)?, w)?.map(|v| format!("+{v}")),
        token => {
            w.malformed(
                body.position(),
                format!("time value has unknown token {token:#04x}"),
            );
            return Ok(Parsed::new("0".to_string(), total));
        }
    };

    if 1 + value.len != declared.value {
        w.malformed(
            c.position(),
            format!(
                "time value declares {} byte(s) but occupies {}",
                declared.value,
                1 + value.len
            ),
        );
    }
    Ok(Parsed::new(value.value, total))
}
