use crate::{Uuid, Wildcard};

const CANONICAL: &str = "550e8400-e29b-41d4-a716-446655440000";

fn canonical() -> Uuid {
    Uuid::parse(CANONICAL).unwrap()
}

#[test]
fn text_identifier_is_stored_as_binary() {
    let w = Wildcard::decode_text(CANONICAL.as_bytes());
    assert_eq!(w, Wildcard::Id(canonical()));
    assert_eq!(w.encode_binary(), canonical().as_bytes());
    assert_eq!(w.encode_text(), CANONICAL.as_bytes());
    assert_eq!(w.to_string(), CANONICAL);
    assert_eq!(w.as_uuid(), Some(canonical()));
}

#[test]
fn text_identifier_is_normalized() {
    let w = Wildcard::decode_text(b"{550E8400-E29B-41D4-A716-446655440000}");
    assert!(w.is_id());
    assert_eq!(w.encode_text(), CANONICAL.as_bytes());
}

#[test]
fn binary_identifier_roundtrip() {
    let w = Wildcard::decode_binary(canonical().as_bytes());
    assert_eq!(w, Wildcard::Id(canonical()));
    assert_eq!(w.encode_binary(), canonical().as_bytes());
    assert_eq!(w.encode_text(), CANONICAL.as_bytes());
}

#[test]
fn short_binary_is_stored_verbatim() {
    let input = b"hello world!!!!";
    assert_eq!(input.len(), 15);

    let w = Wildcard::decode_binary(input);
    assert_eq!(w, Wildcard::Raw(input.to_vec()));
    assert_eq!(w.encode_binary(), input);
    assert_eq!(w.encode_text(), input.as_slice());
    assert_eq!(w.as_uuid(), None);
}

#[test]
fn non_identifier_strings_roundtrip() {
    for input in [
        b"hello".as_slice(),
        b"".as_slice(),
        b"550e8400".as_slice(),
        b"550e8400-e29b-41d4-a716-44665544000".as_slice(),
        b"a string that is clearly longer than sixteen bytes".as_slice(),
        b"\xff\xfe\x00binary".as_slice(),
    ] {
        for w in [
            Wildcard::decode_binary(input),
            Wildcard::decode_text(input),
            Wildcard::decode_json(input),
        ] {
            assert!(!w.is_id(), "{input:?}");
            assert_eq!(w.encode_binary(), input);
            assert_eq!(w.encode_text(), input);
        }
    }
}

#[test]
fn any_16_bytes_decode_as_binary_identifier() {
    let input = b"0123456789abcdef";
    let w = Wildcard::decode_binary(input);
    assert!(w.is_id());
    assert_eq!(w.encode_binary(), input);
    assert_eq!(w.to_string(), "30313233-3435-3637-3839-616263646566");
}

#[test]
fn raw_16_bytes_keep_their_variant_on_encode() {
    let input = b"0123456789abcdef";
    let w = Wildcard::decode_text(input);
    assert_eq!(w, Wildcard::Raw(input.to_vec()));

    // Encoding twice renders the same raw bytes; the variant is not
    // re-derived from content.
    assert_eq!(w.encode_text(), input.as_slice());
    assert_eq!(w.encode_text(), input.as_slice());
    assert_eq!(w.to_string(), "0123456789abcdef");
}

#[test]
fn raw_16_bytes_become_identifier_when_reclassified() {
    let input = b"0123456789abcdef";
    let w = Wildcard::decode_text(input).reclassify();
    assert!(w.is_id());
    assert_eq!(w.encode_binary(), input);
    assert_eq!(
        w.encode_text(),
        b"30313233-3435-3637-3839-616263646566".as_slice()
    );

    // Persisting the binary form and decoding it again does the same.
    let stored = Wildcard::decode_text(input).encode_binary().to_vec();
    assert_eq!(Wildcard::decode_binary(&stored), w);
}

#[test]
fn reclassify_leaves_other_values_alone() {
    let raw = Wildcard::decode_text(b"hello");
    assert_eq!(raw.clone().reclassify(), raw);

    let id = Wildcard::from(canonical());
    assert_eq!(id.clone().reclassify(), id);
}

#[test]
fn quoted_json_identifier_decodes_as_identifier() {
    let quoted = format!("\"{CANONICAL}\"");
    assert_eq!(Wildcard::decode_json(quoted.as_bytes()), Wildcard::Id(canonical()));
    assert_eq!(Wildcard::decode_text(quoted.as_bytes()), Wildcard::Id(canonical()));
}

#[test]
fn json_bytes_are_not_unescaped() {
    let escaped = br#""550e8400\u002de29b-41d4-a716-446655440000""#;
    let w = Wildcard::decode_json(escaped);
    assert_eq!(w, Wildcard::Raw(escaped.to_vec()));
    assert_eq!(w.encode_text(), escaped.as_slice());
}

#[test]
#[cfg(feature = "json")]
fn encode_json_reads_back_through_decode_json() {
    let id = Wildcard::from(canonical());
    assert_eq!(Wildcard::decode_json(id.encode_json().as_bytes()), id);

    let raw = Wildcard::decode_text(b"hello");
    assert_eq!(raw.encode_json(), r#""hello""#);
    assert_eq!(
        Wildcard::decode_json(raw.encode_json().as_bytes()),
        Wildcard::Raw(br#""hello""#.to_vec())
    );
}

#[test]
fn json_bytes_without_quotes_parse_as_identifier() {
    let w = Wildcard::decode_json(CANONICAL.as_bytes());
    assert_eq!(w, Wildcard::Id(canonical()));
}

#[test]
#[cfg(feature = "json")]
fn encode_json_quotes_every_variant() {
    assert_eq!(
        Wildcard::from(canonical()).encode_json(),
        format!("\"{CANONICAL}\"")
    );
    assert_eq!(Wildcard::decode_text(b"he\"llo").encode_json(), r#""he\"llo""#);
    assert_eq!(Wildcard::decode_binary(b"\xff\x01").encode_json(), "[255,1]");
}

#[test]
fn from_str_is_infallible() {
    let w: Wildcard = CANONICAL.parse().unwrap();
    assert!(w.is_id());
    let w: Wildcard = "user@example.com".parse().unwrap();
    assert_eq!(w.to_string(), "user@example.com");
}

#[test]
fn display_replaces_invalid_utf8() {
    let w = Wildcard::decode_binary(b"ok\xff");
    assert_eq!(w.to_string(), "ok\u{fffd}");
}

#[test]
#[cfg(feature = "rand")]
fn generated_identifiers_survive_every_format() {
    for _ in 0..64 {
        let id = Uuid::new();
        let text = id.encode_text();
        assert_eq!(Wildcard::decode_text(text.as_bytes()), Wildcard::Id(id));
        assert_eq!(Wildcard::decode_binary(id.as_bytes()), Wildcard::Id(id));
        assert_eq!(Wildcard::decode_json(text.as_bytes()), Wildcard::Id(id));
    }
}
