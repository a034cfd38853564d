//! End-to-end decoding of complete MMS PDUs.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use mmsplain_wsp::primitive::uintvar_integer;
use mmsplain_wsp::{
    CodeTables, Cursor, Decoded, Env, Error, LabelTranscoder, Part, WarningKind, Warnings, decode,
};

fn decode_with_defaults(data: &[u8]) -> mmsplain_wsp::Result<Decoded> {
    let tables = CodeTables::wsp_defaults();
    let env = Env::new(&tables, &LabelTranscoder);
    decode(&env, data)
}

/// Appends a part with one-octet header and data lengths.
fn push_part(pdu: &mut Vec<u8>, header: &[u8], data: &[u8]) {
    pdu.push(u8::try_from(header.len()).unwrap());
    pdu.push(u8::try_from(data.len()).unwrap());
    pdu.extend_from_slice(header);
    pdu.extend_from_slice(data);
}

/// An M-Retrieve-Conf with a SMIL-style related body of two parts.
fn retrieve_conf() -> Vec<u8> {
    let mut pdu = vec![0x8C, 0x84];
    pdu.push(0x98);
    pdu.extend_from_slice(b"T1\0");
    pdu.extend_from_slice(&[0x8D, 0x92]);
    pdu.extend_from_slice(&[0x89, 0x01, 0x81]);
    pdu.push(0x97);
    pdu.extend_from_slice(b"+15550001/TYPE=PLMN\0");
    pdu.extend_from_slice(&[0x96, 0x08, 0xEA]);
    pdu.extend_from_slice("Héllo".as_bytes());
    pdu.push(0x00);
    pdu.extend_from_slice(&[0x85, 0x04, 0x5F, 0xE1, 0x0B, 0x20]);
    pdu.extend_from_slice(&[0x84, 0x1B, 0xB3, 0x89]);
    pdu.extend_from_slice(b"application/smil\0");
    pdu.push(0x8A);
    pdu.extend_from_slice(b"<0000>\0");

    pdu.push(0x02);

    let mut first = vec![0x83, 0x8E];
    first.extend_from_slice(b"a.txt\0");
    push_part(&mut pdu, &first, b"Hello");

    let mut second = vec![0x03, 0x83, 0x81, 0xEA, 0xC0];
    second.extend_from_slice(b"\"<t2>\0");
    push_part(&mut pdu, &second, &[0x00, 0xFF, 0x10]);

    pdu
}

#[test]
fn test_retrieve_conf_header() {
    let decoded = decode_with_defaults(&retrieve_conf()).unwrap();
    let doc = &decoded.document;

    let header: Vec<_> = doc
        .header()
        .iter()
        .map(|f| (f.name.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(
        header,
        [
            ("Message-Type", "M-Retrieve-Conf"),
            ("Transaction-Id", "T1"),
            ("MMS-Version", "1.2"),
            ("From", "[Placeholder]"),
            ("To", "+15550001/TYPE=PLMN"),
            ("Subject", "Héllo"),
            ("Date", "1608583968"),
            (
                "Content-Type",
                "application/vnd.wap.multipart.related;Type=application/smil,Start=<0000>,"
            ),
        ]
    );
    assert!(doc.has_body());
    assert!(decoded.warnings.is_empty(), "{:?}", decoded.warnings);
}

#[test]
fn test_retrieve_conf_parts_are_verbatim() {
    let pdu = retrieve_conf();
    let decoded = decode_with_defaults(&pdu).unwrap();
    let body = decoded.document.body();

    assert_eq!(body.len(), 2);
    assert_eq!(body[0].data, b"Hello");
    assert_eq!(body[0].header_value("Content-Location"), Some("a.txt"));
    assert_eq!(body[1].data, [0x00, 0xFF, 0x10]);
    assert_eq!(body[1].content_type(), Some("text/plain;Charset=UTF-8,"));
    assert_eq!(body[1].header_value("Content-ID"), Some("\"<t2>\""));
    assert!(pdu.ends_with(&body[1].data));
}

#[test]
fn test_retrieve_conf_plain_text() {
    let decoded = decode_with_defaults(&retrieve_conf()).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(
        "Message-Type: M-Retrieve-Conf\r\n\
         Transaction-Id: T1\r\n\
         MMS-Version: 1.2\r\n\
         From: [Placeholder]\r\n\
         To: +15550001/TYPE=PLMN\r\n\
         Subject: Héllo\r\n\
         Date: 1608583968\r\n\
         Content-Type: application/vnd.wap.multipart.related;Type=application/smil,Start=<0000>,\r\n\
         \r\n\
         ----------------------------part\r\n\
         Content-Type: text/plain\r\n\
         Content-Location: a.txt\r\n\
         Content-Length: 5\r\n\
         Hello\r\n\
         ----------------------------part\r\n\
         Content-Type: text/plain;Charset=UTF-8,\r\n\
         Content-ID: \"<t2>\"\r\n\
         Content-Length: 3\r\n"
            .as_bytes(),
    );
    expected.extend_from_slice(&[0x00, 0xFF, 0x10]);
    expected.extend_from_slice(b"\r\n----------------------------part--");

    assert_eq!(decoded.document.to_plain(true), expected);
}

#[test]
fn test_plain_text_is_deterministic() {
    let pdu = retrieve_conf();
    let first = decode_with_defaults(&pdu).unwrap();
    let second = decode_with_defaults(&pdu).unwrap();
    assert_eq!(first.document.to_plain(true), second.document.to_plain(true));
    assert_eq!(first.document.to_plain(false), second.document.to_plain(false));
}

#[test]
fn test_non_retrieve_message_has_no_body() {
    // M-Send-Req followed by bytes that would be a body.
    let mut pdu = vec![0x8C, 0x80, 0x84, 0xA3];
    pdu.push(0x01);
    push_part(&mut pdu, &[0x83], b"x");

    let decoded = decode_with_defaults(&pdu).unwrap();
    assert!(!decoded.document.has_body());
    assert!(decoded.document.body().is_empty());
    assert_eq!(
        decoded.document.to_plain(true),
        b"Message-Type: M-Send-Req\r\nContent-Type: application/vnd.wap.multipart.mixed\r\n\r\n"
    );
}

#[test]
fn test_missing_message_type_has_no_body() {
    let decoded = decode_with_defaults(&[0x8D, 0x92, 0x84, 0x83]).unwrap();
    assert!(!decoded.document.has_body());
}

#[test]
fn test_unresolved_codes_are_reported() {
    // Message-Type 0xF0 has no table entry.
    let decoded = decode_with_defaults(&[0x8C, 0xF0, 0x84, 0x83]).unwrap();
    assert_eq!(decoded.document.header_value("Message-Type"), Some(""));
    assert!(
        decoded
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::UnresolvedLookup && w.position == 1)
    );
}

#[test]
fn test_custom_lookup_names() {
    let mut tables = CodeTables::wsp_defaults();
    tables.insert(mmsplain_wsp::Table::MessageType, 132, "retrieve");
    let env = Env::new(&tables, &LabelTranscoder);

    let decoded = decode(&env, &[0x8C, 0x84, 0x84, 0x83]).unwrap();
    assert_eq!(decoded.document.header_value("Message-Type"), Some("retrieve"));
    assert!(!decoded.document.has_body());
}

#[test]
fn test_header_without_content_type_is_an_error() {
    let err = decode_with_defaults(&[0x8C, 0x84, 0x8D, 0x92]).unwrap_err();
    assert_eq!(
        err,
        Error::UnterminatedHeader {
            position: 4,
            fields: 2
        }
    );
}

#[test]
fn test_body_with_too_few_parts_is_an_error() {
    let mut pdu = vec![0x8C, 0x84, 0x84, 0x83, 0x02];
    push_part(&mut pdu, &[0x83], b"only one");
    assert!(matches!(
        decode_with_defaults(&pdu),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn test_oversized_part_content_type_is_an_error() {
    let mut header = vec![0x1F];
    header.extend_from_slice(&[0xFF; 9]);
    header.extend_from_slice(&[0x7F, 0x83, 0x1F, 0x00]);
    let mut pdu = vec![0x8C, 0x84, 0x84, 0x83, 0x01];
    push_part(&mut pdu, &header, &[]);

    assert!(matches!(
        decode_with_defaults(&pdu),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn test_empty_body() {
    let decoded = decode_with_defaults(&[0x8C, 0x84, 0x84, 0x83, 0x00]).unwrap();
    let doc = decoded.document;
    assert!(doc.has_body());
    assert_eq!(doc.body(), &[] as &[Part]);
    assert!(doc.to_plain(true).ends_with(b"\r\n\r\n----------------------------part--"));
}

/// Minimal big-endian 7-bit group encoding.
fn encode_uintvar(mut value: u32) -> Vec<u8> {
    let mut out = vec![u8::try_from(value & 0x7F).unwrap()];
    value >>= 7;
    while value > 0 {
        out.push(u8::try_from(value & 0x7F).unwrap() | 0x80);
        value >>= 7;
    }
    out.reverse();
    out
}

proptest! {
    #[test]
    fn uintvar_round_trip(value in any::<u32>()) {
        let encoded = encode_uintvar(value);
        let mut w = Warnings::new();
        let parsed = uintvar_integer(Cursor::new(&encoded), &mut w).unwrap();

        prop_assert_eq!(parsed.value, u64::from(value));
        prop_assert_eq!(parsed.len, encoded.len());
        prop_assert!(parsed.len <= 5);
        prop_assert!(w.is_empty());
    }

    #[test]
    fn truncated_pdu_fails_cleanly(cut in 0usize..120) {
        let pdu = retrieve_conf();
        let cut = cut.min(pdu.len() - 1);
        let result = decode_with_defaults(&pdu[..cut]);
        prop_assert!(
            matches!(
                result,
                Err(Error::OutOfBounds { .. } | Error::UnterminatedHeader { .. })
            ),
            "prefix of {} bytes: {:?}",
            cut,
            result
        );
    }

    #[test]
    fn part_content_type_length_never_panics(
        length in prop::collection::vec(any::<u8>(), 1..12),
        tail in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let mut header = vec![0x1F];
        header.extend_from_slice(&length);
        header.extend_from_slice(&tail);
        let mut pdu = vec![0x8C, 0x84, 0x84, 0x83, 0x01];
        push_part(&mut pdu, &header, &[]);
        let _ = decode_with_defaults(&pdu);
    }

    #[test]
    fn arbitrary_input_never_panics(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode_with_defaults(&data);
    }
}
