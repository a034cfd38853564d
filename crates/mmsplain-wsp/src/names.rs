//! Typed views of looked-up field and parameter names.
//!
//! Lookup tables hand back plain strings. These enums turn them into a
//! closed set once, so the decoders can match exhaustively instead of
//! comparing strings.

/// Header fields the header decoder knows how to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField {
    /// `Message-Type`
    MessageType,
    /// `MMS-Version`
    MmsVersion,
    /// `Message-Class`
    MessageClass,
    /// `Priority`
    Priority,
    /// `Delivery-Report`
    DeliveryReport,
    /// `Read-Reply`
    ReadReply,
    /// `Report-Allowed`
    ReportAllowed,
    /// `Response-Status`
    ResponseStatus,
    /// `Transaction-Id`
    TransactionId,
    /// `Message-ID`
    MessageId,
    /// `Date`
    Date,
    /// `To`
    To,
    /// `Cc`
    Cc,
    /// `Bcc`
    Bcc,
    /// `Subject`
    Subject,
    /// `Response-Text`
    ResponseText,
    /// `Retrieve-Text`
    RetrieveText,
    /// `From`
    From,
    /// `Content-Type`, the last header field.
    ContentType,
    /// `Content-Location`
    ContentLocation,
    /// `Expiry`
    Expiry,
    /// `Delivery-Time`
    DeliveryTime,
    /// `Message-Size`
    MessageSize,
    /// Any other name, including an unresolved (empty) one.
    Other(String),
}

impl HeaderField {
    /// Classifies a looked-up header field name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Message-Type" => Self::MessageType,
            "MMS-Version" => Self::MmsVersion,
            "Message-Class" => Self::MessageClass,
            "Priority" => Self::Priority,
            "Delivery-Report" => Self::DeliveryReport,
            "Read-Reply" => Self::ReadReply,
            "Report-Allowed" => Self::ReportAllowed,
            "Response-Status" => Self::ResponseStatus,
            "Transaction-Id" => Self::TransactionId,
            "Message-ID" => Self::MessageId,
            "Date" => Self::Date,
            "To" => Self::To,
            "Cc" => Self::Cc,
            "Bcc" => Self::Bcc,
            "Subject" => Self::Subject,
            "Response-Text" => Self::ResponseText,
            "Retrieve-Text" => Self::RetrieveText,
            "From" => Self::From,
            "Content-Type" => Self::ContentType,
            "Content-Location" => Self::ContentLocation,
            "Expiry" => Self::Expiry,
            "Delivery-Time" => Self::DeliveryTime,
            "Message-Size" => Self::MessageSize,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true for the field that ends the header.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::ContentType)
    }
}

/// How a `Type` parameter value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeForm {
    /// WSP 1.1: Integer-value.
    Integer,
    /// WSP 1.2 and later: Constrained-encoding.
    Media,
}

/// How a textual parameter value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextForm {
    /// WSP 1.1 to 1.3: Text-string.
    TextString,
    /// WSP 1.4: Text-value.
    TextValue,
}

/// Well-known parameter tokens, as resolved from `name[,version]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterToken {
    /// `Q`: Q-value.
    Q,
    /// `Charset`: Well-known-charset.
    Charset,
    /// `Level`: Version-value.
    Level,
    /// `Type`
    Type(TypeForm),
    /// `Name`
    Name(TextForm),
    /// `Filename`
    Filename(TextForm),
    /// `Start`
    Start(TextForm),
    /// `Start-Info`
    StartInfo(TextForm),
    /// `Comment`
    Comment(TextForm),
    /// `Domain`
    Domain(TextForm),
    /// `Path`
    Path(TextForm),
    /// `Differences`: Short-integer.
    Differences,
    /// `Padding`: Short-integer.
    Padding,
    /// `SEC`: Short-integer.
    Sec,
    /// `MAC`: Text-value.
    Mac,
    /// `Max-Age`: Delta-seconds-value.
    MaxAge,
    /// `Secure`: No-value.
    Secure,
    /// `Creation-Date`: Date-value.
    CreationDate,
    /// `Modification-Date`: Date-value.
    ModificationDate,
    /// `Read-Date`: Date-value.
    ReadDate,
    /// `Size`: Integer-value.
    Size,
    /// Unknown token; its value cannot be decoded.
    Other,
}

impl ParameterToken {
    /// Classifies a looked-up `name[,version]` token.
    #[must_use]
    pub fn from_lookup(token: &str) -> Self {
        let (name, version) = match token.split_once(',') {
            Some((name, version)) => (name, Some(version.trim())),
            None => (token, None),
        };
        let text_form = if version == Some("1.4") {
            TextForm::TextValue
        } else {
            TextForm::TextString
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "q" => Self::Q,
            "charset" => Self::Charset,
            "level" => Self::Level,
            "type" => match version {
                Some("1.1") | None => Self::Type(TypeForm::Integer),
                Some(_) => Self::Type(TypeForm::Media),
            },
            "name" => Self::Name(text_form),
            "filename" => Self::Filename(text_form),
            "start" => Self::Start(text_form),
            "start-info" => Self::StartInfo(text_form),
            "comment" => Self::Comment(text_form),
            "domain" => Self::Domain(text_form),
            "path" => Self::Path(text_form),
            "differences" => Self::Differences,
            "padding" => Self::Padding,
            "sec" => Self::Sec,
            "mac" => Self::Mac,
            "max-age" => Self::MaxAge,
            "secure" => Self::Secure,
            "creation-date" => Self::CreationDate,
            "modification-date" => Self::ModificationDate,
            "read-date" => Self::ReadDate,
            "size" => Self::Size,
            _ => Self::Other,
        }
    }
}

/// Returns the display name of a `name[,version]` token.
#[must_use]
pub fn token_name(token: &str) -> &str {
    token.split_once(',').map_or(token, |(name, _)| name)
}

/// Well-known fields recognized inside a part header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartField {
    /// `Content-ID`: Quoted-string.
    ContentId,
    /// `Content-Location`: Text-string.
    ContentLocation,
    /// Any other name.
    Other(String),
}

impl PartField {
    /// Classifies a looked-up part header field name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Content-ID" => Self::ContentId,
            "Content-Location" => Self::ContentLocation,
            other => Self::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_field_from_name() {
        assert_eq!(HeaderField::from_name("Message-Type"), HeaderField::MessageType);
        assert_eq!(HeaderField::from_name("Content-Type"), HeaderField::ContentType);
        assert!(HeaderField::from_name("Content-Type").is_terminal());
        assert_eq!(
            HeaderField::from_name("Status"),
            HeaderField::Other("Status".to_string())
        );
        assert!(!HeaderField::from_name("").is_terminal());
    }

    #[test]
    fn test_parameter_token_versions() {
        assert_eq!(
            ParameterToken::from_lookup("Type,1.1"),
            ParameterToken::Type(TypeForm::Integer)
        );
        assert_eq!(
            ParameterToken::from_lookup("Type,1.2"),
            ParameterToken::Type(TypeForm::Media)
        );
        assert_eq!(
            ParameterToken::from_lookup("Name,1.1"),
            ParameterToken::Name(TextForm::TextString)
        );
        assert_eq!(
            ParameterToken::from_lookup("Name,1.4"),
            ParameterToken::Name(TextForm::TextValue)
        );
        assert_eq!(
            ParameterToken::from_lookup("Start-Info,1.2"),
            ParameterToken::StartInfo(TextForm::TextString)
        );
        assert_eq!(ParameterToken::from_lookup("Q"), ParameterToken::Q);
        assert_eq!(ParameterToken::from_lookup("SEC"), ParameterToken::Sec);
        assert_eq!(ParameterToken::from_lookup(""), ParameterToken::Other);
    }

    #[test]
    fn test_token_name() {
        assert_eq!(token_name("Filename,1.4"), "Filename");
        assert_eq!(token_name("Charset"), "Charset");
    }

    #[test]
    fn test_part_field() {
        assert_eq!(PartField::from_name("Content-ID"), PartField::ContentId);
        assert_eq!(
            PartField::from_name("Content-Disposition"),
            PartField::Other("Content-Disposition".to_string())
        );
    }
}
