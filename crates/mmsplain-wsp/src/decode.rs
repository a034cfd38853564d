//! Whole-PDU decoding.

use tracing::debug;

use crate::body::decode_body;
use crate::header::decode_header;
use crate::model::Document;
use crate::primitive::Env;
use crate::warning::DecodeWarning;
use crate::{Cursor, Result, Warnings};

/// A decoded document and the problems met while decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded message.
    pub document: Document,
    /// Non-fatal problems, in the order they were found.
    pub warnings: Vec<DecodeWarning>,
}

/// Decodes an MMS PDU.
///
/// The header is decoded up to its `Content-Type` field. The body is only
/// decoded for messages whose type is `M-Retrieve-Conf`; anything after
/// the header of other messages is ignored.
///
/// # Errors
///
/// Returns [`Error::UnterminatedHeader`](crate::Error::UnterminatedHeader)
/// if the header has no `Content-Type` field, and
/// [`Error::OutOfBounds`](crate::Error::OutOfBounds) if any field or part
/// runs past the end of `data`.
///
/// # Example
///
/// ```
/// use mmsplain_wsp::{CodeTables, Env, LabelTranscoder, decode};
///
/// let tables = CodeTables::wsp_defaults();
/// let env = Env::new(&tables, &LabelTranscoder);
///
/// // Message-Type: M-Send-Req, Content-Type: text/plain
/// let decoded = decode(&env, &[0x8C, 0x80, 0x84, 0x83]).unwrap();
/// assert_eq!(decoded.document.header_value("Message-Type"), Some("M-Send-Req"));
/// assert!(!decoded.document.has_body());
/// ```
pub fn decode(env: &Env<'_>, data: &[u8]) -> Result<Decoded> {
    let mut warnings = Warnings::new();
    let mut document = Document::new();
    let c = Cursor::new(data);

    let header = decode_header(env, c, &mut warnings)?;
    for field in header.value {
        document.add_header_field(field);
    }
    debug!(
        fields = document.header().len(),
        len = header.len,
        "decoded header"
    );

    if document.has_body() {
        let body = decode_body(env, c.advance(header.len)?, &mut warnings)?;
        for part in body.value {
            document.add_part(part);
        }
        debug!(parts = document.body().len(), len = body.len, "decoded body");
    }

    Ok(Decoded {
        document,
        warnings: warnings.into_vec(),
    })
}
