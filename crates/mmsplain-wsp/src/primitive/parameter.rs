//! Content-type parameters.

use super::text::{no_value, text_string, text_value, token_text};
use super::{
    Env, LENGTH_QUOTE, Parsed, constrained_encoding, date_value, delta_seconds_value,
    integer_value, lookup_code, q_value, short_integer, version_value, well_known_charset,
};
use crate::lookup::Table;
use crate::names::{ParameterToken, TextForm, TypeForm, token_name};
use crate::{Cursor, Result, Warnings};

fn render(name: &str, value: &str) -> String {
    if value.is_empty() {
        name.to_string()
    } else {
        format!("{name}={value}")
    }
}

/// Typed-parameter: a well-known token (Integer-value) followed by the
/// value encoding bound to that token.
pub fn typed_parameter(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let code = integer_value(c, w)?;
    let token = env.resolve(
        Table::ParameterWellKnown,
        lookup_code(code.value),
        c.position(),
        w,
    );
    let vc = c.advance(code.len)?;

    let value = match ParameterToken::from_lookup(&token) {
        ParameterToken::Q => q_value(vc, w)?,
        ParameterToken::Charset => well_known_charset(env, vc, w)?,
        ParameterToken::Level => version_value(vc, w)?,
        ParameterToken::Type(TypeForm::Integer) | ParameterToken::Size => {
            integer_value(vc, w)?.map(|v| v.to_string())
        }
        ParameterToken::Type(TypeForm::Media) => constrained_encoding(env, vc, w)?,
        ParameterToken::Name(TextForm::TextString)
        | ParameterToken::Filename(TextForm::TextString)
        | ParameterToken::Start(TextForm::TextString)
        | ParameterToken::StartInfo(TextForm::TextString)
        | ParameterToken::Comment(TextForm::TextString)
        | ParameterToken::Domain(TextForm::TextString)
        | ParameterToken::Path(TextForm::TextString) => text_string(vc)?,
        ParameterToken::Name(TextForm::TextValue)
        | ParameterToken::Filename(TextForm::TextValue)
        | ParameterToken::Start(TextForm::TextValue)
        | ParameterToken::StartInfo(TextForm::TextValue)
        | ParameterToken::Comment(TextForm::TextValue)
        | ParameterToken::Domain(TextForm::TextValue)
        | ParameterToken::Path(TextForm::TextValue)
        | ParameterToken::Mac => text_value(vc, w)?,
        ParameterToken::Differences | ParameterToken::Padding | ParameterToken::Sec => {
            short_integer(vc, w)?.map(|v| v.to_string())
        }
        ParameterToken::MaxAge => delta_seconds_value(vc, w)?.map(|v| v.to_string()),
        ParameterToken::Secure => no_value(vc, w)?,
        ParameterToken::CreationDate
        | ParameterToken::ModificationDate
        | ParameterToken::ReadDate => date_value(vc, w)?.map(|v| v.to_string()),
        ParameterToken::Other => {
            w.malformed(
                vc.position(),
                format!("no value decoder for parameter token {token:?}"),
            );
            Parsed::new(String::new(), 0)
        }
    };

    Ok(Parsed::new(
        render(token_name(&token), &value.value),
        code.len + value.len,
    ))
}

/// Untyped-value: Text-value for `31..=127`, otherwise an Integer-value in
/// decimal.
pub fn untyped_value(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    if (LENGTH_QUOTE..=127).contains(&c.peek()?) {
        text_value(c, w)
    } else {
        Ok(integer_value(c, w)?.map(|v| v.to_string()))
    }
}

/// Untyped-parameter: Token-text followed by an Untyped-value.
pub fn untyped_parameter(c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    let name = token_text(c)?;
    let value = untyped_value(c.advance(name.len)?, w)?;
    Ok(Parsed::new(
        render(&name.value, &value.value),
        name.len + value.len,
    ))
}

/// Parameter: Untyped-parameter for `32..=127`, Typed-parameter otherwise.
///
/// A Length-quote octet cannot start a parameter; it is reported and
/// consumes nothing.
pub fn parameter(env: &Env<'_>, c: Cursor<'_>, w: &mut Warnings) -> Result<Parsed<String>> {
    match c.peek()? {
        LENGTH_QUOTE => {
            w.malformed(c.position(), "length-quote octet cannot start a parameter");
            Ok(Parsed::new(String::new(), 0))
        }
        32..=127 => untyped_parameter(c, w),
        _ => typed_parameter(env, c, w),
    }
}

/// Decodes parameters until `content_len` bytes are used.
///
/// Stops early if a parameter consumes nothing, since its length is then
/// unknown.
pub fn parameters(
    env: &Env<'_>,
    c: Cursor<'_>,
    w: &mut Warnings,
    content_len: usize,
) -> Result<Parsed<Vec<String>>> {
    let mut params = Vec::new();
    let mut used = 0;
    while used < content_len {
        let at = c.advance(used)?;
        let param = parameter(env, at, w)?;
        if param.len == 0 {
            w.malformed(
                at.position(),
                format!(
                    "undecodable parameter, skipping {} remaining byte(s)",
                    content_len - used
                ),
            );
            break;
        }
        used += param.len;
        params.push(param.value);
    }
    if used > content_len {
        w.malformed(
            c.position(),
            format!("parameters overran their {content_len} byte(s) by {}", used - content_len),
        );
    }
    Ok(Parsed::new(params, used))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::WarningKind;
    use crate::charset::LabelTranscoder;
    use crate::lookup::CodeTables;

    fn decode(data: &[u8]) -> (Parsed<String>, Warnings) {
        let tables = CodeTables::wsp_defaults();
        let env = Env::new(&tables, &LabelTranscoder);
        let mut w = Warnings::new();
        let parsed = parameter(&env, Cursor::new(data), &mut w).unwrap();
        (parsed, w)
    }

    #[test]
    fn test_typed_name_text_string() {
        let mut data = vec![0x85];
        data.extend_from_slice(b"photo.jpg\0");
        let (p, w) = decode(&data);
        assert_eq!(p, Parsed::new("Name=photo.jpg".to_string(), 11));
        assert!(w.is_empty());
    }

    #[test]
    fn test_typed_name_text_value() {
        let mut data = vec![0x97, b'"'];
        data.extend_from_slice(b"x y\0");
        let (p, _) = decode(&data);
        assert_eq!(p, Parsed::new("Name=\"x y\"".to_string(), 6));
    }

    #[test]
    fn test_typed_secure_no_value() {
        let (p, w) = decode(&[0x90, 0x00]);
        assert_eq!(p, Parsed::new("Secure".to_string(), 2));
        assert!(w.is_empty());
    }

    #[test]
    fn test_typed_size_and_dates() {
        assert_eq!(decode(&[0x96, 0x02, 0x01, 0x00]).0.value, "Size=256");
        assert_eq!(
            decode(&[0x93, 0x04, 0x5F, 0xE1, 0x0B, 0x20]).0.value,
            "Creation-Date=1608583968"
        );
        assert_eq!(decode(&[0x8E, 0x9E]).0.value, "Max-Age=30");
    }

    #[test]
    fn test_typed_level_and_q() {
        assert_eq!(decode(&[0x82, 0x92]).0.value, "Level=1.2");
        assert_eq!(decode(&[0x80, 0x0B]).0.value, "Q=0.1");
    }

    #[test]
    fn test_typed_unknown_token() {
        let (p, w) = decode(&[0xFE, 0x41]);
        assert_eq!(p, Parsed::new(String::new(), 1));
        assert!(w.contains(WarningKind::UnresolvedLookup));
        assert!(w.contains(WarningKind::MalformedField));
    }

    #[test]
    fn test_untyped_parameter() {
        let (p, w) = decode(b"format\0flowed\0");
        assert_eq!(p, Parsed::new("format=flowed".to_string(), 14));
        assert!(w.is_empty());

        let (p, _) = decode(b"level\0\x83");
        assert_eq!(p, Parsed::new("level=3".to_string(), 7));

        let (p, _) = decode(b"flag\0\x00");
        assert_eq!(p, Parsed::new("flag=0".to_string(), 6));
    }

    #[test]
    fn test_length_quote_is_rejected() {
        let (p, w) = decode(&[0x1F, 0x01]);
        assert_eq!(p.len, 0);
        assert!(w.contains(WarningKind::MalformedField));
    }

    #[test]
    fn test_parameters_stop_on_zero_length() {
        let tables = CodeTables::wsp_defaults();
        let env = Env::new(&tables, &LabelTranscoder);
        let mut w = Warnings::new();
        let data = [0x81, 0xEA, 0x1F, 0x00, 0x00];
        let p = parameters(&env, Cursor::new(&data), &mut w, 5).unwrap();
        assert_eq!(p.value, vec!["Charset=UTF-8".to_string()]);
        assert_eq!(p.len, 2);
        assert!(w.contains(WarningKind::MalformedField));
    }
}
