//! Charset transcoding for encoded string values.

/// Converts text in a named charset into UTF-8.
pub trait Transcode {
    /// Returns `bytes` decoded from `charset`, or `None` if the charset is
    /// not supported.
    fn transcode(&self, bytes: &[u8], charset: &str) -> Option<String>;
}

/// Transcoder backed by the WHATWG encoding registry in `encoding_rs`.
///
/// Charset names are matched as WHATWG labels, which cover the IANA names
/// MMS clients use in practice (`ISO-8859-1`, `Shift_JIS`, `Big5`, `GBK`,
/// `UTF-16BE`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTranscoder;

impl Transcode for LabelTranscoder {
    fn transcode(&self, bytes: &[u8], charset: &str) -> Option<String> {
        let encoding = encoding_rs::Encoding::for_label(charset.trim().as_bytes())?;
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors {
            tracing::debug!(charset, used = used.name(), "replacement characters in transcoded text");
        }
        Some(text.into_owned())
    }
}

/// Returns true if text in this charset is passed through untouched.
#[must_use]
pub fn is_passthrough(charset: &str) -> bool {
    charset.eq_ignore_ascii_case("UTF-8") || charset == "Auto"
}
