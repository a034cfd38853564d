//! WSP primitive value decoders.
//!
//! Every decoder takes a [`Cursor`](crate::Cursor) by value and returns the
//! decoded value together with the number of bytes it consumed. Nothing is
//! mutated except the [`Warnings`](crate::Warnings) sink passed in.
//!
//! Dispatch follows the first-octet rules of WAP-230-WSP section 8.4.

mod integer;
mod media;
mod parameter;
mod text;

pub use integer::{
    date_value, delta_seconds_value, format_version, integer_value, long_integer, q_value,
    short_integer, short_length, uintvar_integer, value_length, version_value,
};
pub use media::{
    charset, constrained_encoding, content_type_value, encoded_string_value, extension_media,
    media_type, well_known_charset,
};
pub use parameter::{parameter, parameters, typed_parameter, untyped_parameter, untyped_value};
pub use text::{no_value, quoted_string, text_string, text_value, token_text, uri_value};

use crate::charset::Transcode;
use crate::lookup::{Lookup, Table};
use crate::warning::{WarningKind, Warnings};

/// Octet that introduces a Value-length encoded as a Uintvar-integer.
pub const LENGTH_QUOTE: u8 = 31;
/// Octet that opens a Quoted-string.
pub const QUOTED_STRING_MARK: u8 = 34;
/// Octet that escapes a Text-string starting with a high-bit octet.
pub const QUOTE: u8 = 127;

/// A decoded value and the number of bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// Decoded value.
    pub value: T,
    /// Bytes consumed.
    pub len: usize,
}

impl<T> Parsed<T> {
    /// Pairs a value with its encoded length.
    #[must_use]
    pub const fn new(value: T, len: usize) -> Self {
        Self { value, len }
    }

    /// Transforms the value, keeping the length.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed::new(f(self.value), self.len)
    }
}

/// The collaborators a decode needs: code tables and a charset transcoder.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    /// Code-to-name tables.
    pub lookup: &'a dyn Lookup,
    /// Charset converter for encoded string values.
    pub transcoder: &'a dyn Transcode,
}

impl<'a> Env<'a> {
    /// Bundles the collaborators.
    #[must_use]
    pub const fn new(lookup: &'a dyn Lookup, transcoder: &'a dyn Transcode) -> Self {
        Self { lookup, transcoder }
    }

    /// Looks up a code, recording a warning and yielding an empty name if
    /// the table has no entry.
    pub fn resolve(&self, table: Table, code: u32, position: usize, w: &mut Warnings) -> String {
        if let Some(name) = self.lookup.find(table, code) {
            name.to_string()
        } else {
            w.push(
                WarningKind::UnresolvedLookup,
                position,
                format!("no {table} entry for code {code:#04x}"),
            );
            String::new()
        }
    }
}

/// Narrows a decoded integer to a lookup code.
pub(crate) fn lookup_code(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Narrows a decoded length to `usize`; oversized values fail later as
/// out-of-bounds reads.
pub(crate) fn to_len(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
