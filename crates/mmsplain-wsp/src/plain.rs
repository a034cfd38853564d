//! Plain-text rendering of a decoded document.
//!
//! The output is MIME-like: `Name: Value` lines, a blank line after the
//! message header, then each part introduced by a separator line and
//! closed by a synthesized `Content-Length` field. It is one-way; nothing
//! parses it back.

use std::io::{self, Write};

use crate::model::{Document, Field};

/// Line terminator.
pub const CRLF: &[u8] = b"\r\n";
/// Line that opens each part.
pub const PART_SEPARATOR: &[u8] = b"----------------------------part";
/// Line that follows the last part.
pub const PART_SEPARATOR_END: &[u8] = b"----------------------------part--";

fn push_field(out: &mut Vec<u8>, name: &str, value: &str) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(CRLF);
}

fn push_fields(out: &mut Vec<u8>, fields: &[Field]) {
    for field in fields {
        push_field(out, &field.name, &field.value);
    }
}

impl Document {
    /// Renders the document as plain text.
    ///
    /// Part payloads are written only when `include_body` is set; the
    /// `Content-Length` line is always present.
    #[must_use]
    pub fn to_plain(&self, include_body: bool) -> Vec<u8> {
        let mut out = Vec::new();
        push_fields(&mut out, self.header());
        out.extend_from_slice(CRLF);

        if self.has_body() {
            for part in self.body() {
                out.extend_from_slice(PART_SEPARATOR);
                out.extend_from_slice(CRLF);
                push_fields(&mut out, &part.header);
                push_field(&mut out, "Content-Length", &part.data_len().to_string());
                if include_body {
                    out.extend_from_slice(&part.data);
                    out.extend_from_slice(CRLF);
                }
            }
            out.extend_from_slice(PART_SEPARATOR_END);
        }

        out
    }

    /// Writes the plain-text rendering to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error from the writer.
    pub fn write_plain<W: Write>(&self, writer: &mut W, include_body: bool) -> io::Result<()> {
        writer.write_all(&self.to_plain(include_body))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Part;

    fn retrieve_conf() -> Document {
        let mut doc = Document::new();
        doc.add_header_field(Field::new("Message-Type", "M-Retrieve-Conf", 0..2));
        doc.add_header_field(Field::new("Content-Type", "application/vnd.wap.multipart.related", 2..4));
        doc.add_part(Part::new(
            vec![Field::new("Content-Type", "text/plain", 0..1)],
            b"hello".to_vec(),
        ));
        doc
    }

    #[test]
    fn test_header_only() {
        let mut doc = Document::new();
        doc.add_header_field(Field::new("Message-Type", "M-Send-Req", 0..2));
        doc.add_header_field(Field::new("Subject", "Hi", 2..5));
        doc.add_part(Part::new(Vec::new(), b"ignored".to_vec()));

        assert_eq!(
            doc.to_plain(true),
            b"Message-Type: M-Send-Req\r\nSubject: Hi\r\n\r\n".to_vec()
        );
    }

    #[test]
    fn test_with_body() {
        let text = String::from_utf8(retrieve_conf().to_plain(true)).unwrap();
        assert_eq!(
            text,
            "Message-Type: M-Retrieve-Conf\r\n\
             Content-Type: application/vnd.wap.multipart.related\r\n\
             \r\n\
             ----------------------------part\r\n\
             Content-Type: text/plain\r\n\
             Content-Length: 5\r\n\
             hello\r\n\
             ----------------------------part--"
        );
    }

    #[test]
    fn test_without_payloads() {
        let text = String::from_utf8(retrieve_conf().to_plain(false)).unwrap();
        assert!(text.contains("Content-Length: 5\r\n----------------------------part--"));
        assert!(!text.contains("hello"));
    }

    #[test]
    fn test_write_plain_matches_to_plain() {
        let doc = retrieve_conf();
        let mut out = Vec::new();
        doc.write_plain(&mut out, true).unwrap();
        assert_eq!(out, doc.to_plain(true));
    }
}
