//! Decoded MMS document structure.

use std::ops::Range;

/// Message type value that carries a multipart body.
pub const RETRIEVE_CONF: &str = "M-Retrieve-Conf";

/// A decoded header field.
///
/// `span` records where the field sat in the source buffer. It is
/// provenance only and does not take part in equality.
#[derive(Debug, Clone, Eq)]
pub struct Field {
    /// Field name, usually resolved from a code.
    pub name: String,
    /// Rendered field value.
    pub value: String,
    /// Byte range of the encoded field in the source buffer.
    pub span: Range<usize>,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            span,
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

/// One part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Part header fields; the first is always `Content-Type`.
    pub header: Vec<Field>,
    /// Payload, copied verbatim from the source buffer.
    pub data: Vec<u8>,
}

impl Part {
    /// Creates a part.
    #[must_use]
    pub const fn new(header: Vec<Field>, data: Vec<u8>) -> Self {
        Self { header, data }
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Value of the first header field with the given name.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find(&self.header, name)
    }

    /// The part's content type.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header_value("Content-Type")
    }
}

/// A decoded MMS message: header fields in wire order plus body parts in
/// index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    header: Vec<Field>,
    body: Vec<Part>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header field.
    pub fn add_header_field(&mut self, field: Field) {
        self.header.push(field);
    }

    /// Appends a body part.
    pub fn add_part(&mut self, part: Part) {
        self.body.push(part);
    }

    /// Header fields in wire order.
    #[must_use]
    pub fn header(&self) -> &[Field] {
        &self.header
    }

    /// Body parts in index order.
    #[must_use]
    pub fn body(&self) -> &[Part] {
        &self.body
    }

    /// Value of the first header field with the given name.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find(&self.header, name)
    }

    /// Returns true if the header marks this message as one that carries a
    /// body (`Message-Type: M-Retrieve-Conf`).
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.header
            .iter()
            .any(|f| f.name == "Message-Type" && f.value == RETRIEVE_CONF)
    }
}

fn find<'a>(fields: &'a [Field], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_equality_ignores_span() {
        assert_eq!(Field::new("To", "a", 0..3), Field::new("To", "a", 10..20));
        assert_ne!(Field::new("To", "a", 0..3), Field::new("To", "b", 0..3));
    }

    #[test]
    fn test_has_body() {
        let mut doc = Document::new();
        assert!(!doc.has_body());

        doc.add_header_field(Field::new("Message-Type", "M-Send-Req", 0..2));
        assert!(!doc.has_body());

        doc.add_header_field(Field::new("Message-Type", RETRIEVE_CONF, 2..4));
        assert!(doc.has_body());
    }

    #[test]
    fn test_header_order_and_lookup() {
        let mut doc = Document::new();
        doc.add_header_field(Field::new("Subject", "first", 0..1));
        doc.add_header_field(Field::new("Subject", "second", 1..2));
        assert_eq!(doc.header().len(), 2);
        assert_eq!(doc.header_value("Subject"), Some("first"));
        assert_eq!(doc.header_value("To"), None);
    }

    #[test]
    fn test_part_accessors() {
        let part = Part::new(
            vec![
                Field::new("Content-Type", "text/plain", 0..1),
                Field::new("Content-Location", "a.txt", 1..8),
            ],
            b"hi".to_vec(),
        );
        assert_eq!(part.data_len(), 2);
        assert_eq!(part.content_type(), Some("text/plain"));
        assert_eq!(part.header_value("Content-Location"), Some("a.txt"));
    }
}
