//! Integer, length, date and version encodings.

use super::{LENGTH_QUOTE, Parsed, text_string};
use crate::{Cursor, Result, Warnings};

/// Largest Short-length value.
const MAX_SHORT_LENGTH: u8 = 30;
/// WSP limits a Uintvar-integer to 32 bits, i.e. five octets.
const MAX_UINTVAR_OCTETS: usize = 5;

/// Short-integer: one octet with the high bit set, value in the low 7 bits.
///
/// An octet with the high bit clear is decoded the same way but recorded
/// as malformed.
pub fn short_integer(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<u8>> {
    let octet = c.peek()?;
    if octet < 0x80 {
        w.malformed(
            c.position(),
            format!("short-integer octet {octet:#04x} has the high bit clear"),
        );
    }
    Ok(Parsed::new(octet & 0x7F, 1))
}

/// Short-length: a raw octet in `0..=30`.
pub fn short_length(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<usize>> {
    let octet = c.peek()?;
    if octet > MAX_SHORT_LENGTH {
        w.malformed(
            c.position(),
            format!("short-length {octet} is out of range 0-30"),
        );
    }
    Ok(Parsed::new(usize::from(octet), 1))
}

/// Long-integer: a Short-length octet count followed by that many
/// big-endian octets.
pub fn long_integer(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<u64>> {
    let count = short_length(c, w)?;
    if count.value > 8 {
        w.malformed(
            c.position(),
            format!("long-integer of {} octets does not fit in 64 bits", count.value),
        );
    }
    let octets = c.advance(count.len)?.take(count.value)?;
    let value = octets
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    Ok(Parsed::new(value, count.len + count.value))
}

/// Integer-value: Long-integer below 31, Short-integer above 127.
///
/// Any other first octet is malformed and consumes nothing.
pub fn integer_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<u64>> {
    let octet = c.peek()?;
    if octet < LENGTH_QUOTE {
        long_integer(c, w)
    } else if octet > 127 {
        Ok(short_integer(c, w)?.map(u64::from))
    } else {
        w.malformed(
            c.position(),
            format!("octet {octet:#04x} cannot start an integer-value"),
        );
        Ok(Parsed::new(0, 0))
    }
}

/// Uintvar-integer: 7-bit groups, high bit set on every octet but the last.
pub fn uintvar_integer(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<u64>> {
    let mut value = 0u64;
    let mut len = 0;
    loop {
        let octet = c.byte_at(len)?;
        value = (value << 7) | u64::from(octet & 0x7F);
        len += 1;
        if octet & 0x80 == 0 {
            break;
        }
    }
    if len > MAX_UINTVAR_OCTETS {
        w.malformed(
            c.position(),
            format!("uintvar-integer spans {len} octets, more than {MAX_UINTVAR_OCTETS}"),
        );
    }
    Ok(Parsed::new(value, len))
}

/// Value-length: a Short-length, or Length-quote followed by a
/// Uintvar-integer.
///
/// Any other first octet is malformed and consumes nothing.
pub fn value_length(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<usize>> {
    let octet = c.peek()?;
    if octet < LENGTH_QUOTE {
        short_length(c, w)
    } else if octet == LENGTH_QUOTE {
        let length = uintvar_integer(c.advance(1)?, w)?;
        Ok(Parsed::new(super::to_len(length.value), length.len + 1))
    } else {
        w.malformed(
            c.position(),
            format!("octet {octet:#04x} cannot start a value-length"),
        );
        Ok(Parsed::new(0, 0))
    }
}

/// Date-value: seconds since the epoch as a Long-integer.
pub fn date_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<u64>> {
    long_integer(c, w)
}

/// Delta-seconds-value: an Integer-value.
pub fn delta_seconds_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<u64>> {
    integer_value(c, w)
}

/// Q-value: a Uintvar-integer rendered as a decimal quality factor.
///
/// One and two digit factors are encoded as `q * 100 + 1`, three digit
/// factors as `q * 1000 + 100`.
pub fn q_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let raw = uintvar_integer(c, w)?;
    let rendered = match raw.value {
        0 => {
            w.malformed(c.position(), "q-value of zero");
            "0".to_string()
        }
        v @ 1..=100 => decimal_fraction(v - 1, 2),
        v => decimal_fraction(v - 100, 3),
    };
    Ok(Parsed::new(rendered, raw.len))
}

fn decimal_fraction(value: u64, digits: usize) -> String {
    let scale = 10u64.pow(u32::try_from(digits).unwrap_or(3));
    if value >= scale {
        return (value / scale).to_string();
    }
    let fraction = format!("{value:0digits$}");
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        "0".to_string()
    } else {
        format!("0.{fraction}")
    }
}

/// Renders a 7-bit version code as `major.minor`, or `major` when the
/// minor nibble is 15.
#[must_use]
pub fn format_version(code: u8) -> String {
    let major = (code >> 4) & 0x07;
    let minor = code & 0x0F;
    if minor == 0x0F {
        major.to_string()
    } else {
        format!("{major}.{minor}")
    }
}

/// Version-value: a Short-integer version code or a Text-string.
pub fn version_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    if c.peek()? > 127 {
        Ok(short_integer(c, w)?.map(format_version))
    } else {
        text_string(c)
    }
}
