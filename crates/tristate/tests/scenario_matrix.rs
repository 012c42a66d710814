//! Record-level scenarios: a single `key` field decoded from a document and
//! encoded back, through both the record codec and derived serde records.

use json_tristate::{
    DecodeError, EncodeError, ErrorKind, Nullable, RecordDecoder, RecordEncoder, State, TriState,
    UndefinedPolicy, NULL_TOKEN,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    #[serde(default)]
    key: TriState<i64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct PatchRecord {
    #[serde(default, skip_serializing_if = "TriState::is_undefined")]
    key: TriState<i64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct StrictRecord {
    key: TriState<i64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct RequiredRecord {
    key: Nullable<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct WideRecord {
    #[serde(default)]
    unsigned: TriState<u128>,
    #[serde(default)]
    signed: TriState<i128>,
}

fn decode_key(doc: &str) -> TriState<i64> {
    RecordDecoder::parse(doc.as_bytes())
        .expect("record must parse")
        .field("key")
        .expect("field must decode")
}

fn encode_key(key: &TriState<i64>, policy: UndefinedPolicy) -> Result<String, EncodeError> {
    let mut enc = RecordEncoder::new(policy);
    enc.field("key", key)?;
    Ok(String::from_utf8(enc.finish()?).expect("encoder writes UTF-8"))
}

// ---------------------------------------------------------------------------
// Scenario A: present value
// ---------------------------------------------------------------------------

#[test]
fn present_value_record_codec() {
    let key = decode_key(r#"{"key":42}"#);
    assert_eq!(key.state(), State::Defined);
    assert_eq!(key.value(), Ok(&42));
    assert_eq!(encode_key(&key, UndefinedPolicy::Error).unwrap(), r#"{"key":42}"#);
}

#[test]
fn present_value_with_whitespace() {
    let key = decode_key("{ \"key\" :\t42 }");
    assert_eq!(key, TriState::new(42));
    assert_eq!(encode_key(&key, UndefinedPolicy::Error).unwrap(), r#"{"key":42}"#);
}

#[test]
fn present_value_serde() {
    let rec: Record = serde_json::from_str(r#"{"key": 42}"#).unwrap();
    assert_eq!(rec.key, TriState::new(42));
    assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"key":42}"#);
}

// ---------------------------------------------------------------------------
// Scenario B: explicit null
// ---------------------------------------------------------------------------

#[test]
fn explicit_null_record_codec() {
    let key = decode_key(r#"{"key":null}"#);
    assert_eq!(key.state(), State::Null);
    assert_eq!(key.value(), Err(ErrorKind::Null));
    assert_eq!(
        encode_key(&key, UndefinedPolicy::Error).unwrap(),
        r#"{"key":null}"#
    );
}

#[test]
fn explicit_null_serde() {
    let rec: Record = serde_json::from_str(r#"{"key": null}"#).unwrap();
    assert_eq!(rec.key, TriState::Null);
    assert_eq!(rec.key.value(), Err(ErrorKind::Null));
    assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"key":null}"#);
    let strict: StrictRecord = serde_json::from_str(r#"{"key":null}"#).unwrap();
    assert!(strict.key.is_null());
}

// ---------------------------------------------------------------------------
// Scenario C: absent field
// ---------------------------------------------------------------------------

#[test]
fn absent_field_record_codec() {
    let key = decode_key("{}");
    assert_eq!(key.state(), State::Undefined);
    assert_eq!(key.value(), Err(ErrorKind::Undefined));

    let err = encode_key(&key, UndefinedPolicy::Error).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Undefined));
    assert_eq!(encode_key(&key, UndefinedPolicy::Omit).unwrap(), "{}");
}

#[test]
fn absent_field_serde_fails_naive_encode() {
    let rec: Record = serde_json::from_str("{}").unwrap();
    assert_eq!(rec.key, TriState::Undefined);
    assert_eq!(rec.key.value(), Err(ErrorKind::Undefined));
    let err = serde_json::to_string(&rec).unwrap_err();
    assert_eq!(err.to_string(), EncodeError::Undefined.to_string());
}

#[test]
fn absent_field_serde_skip_attribute_omits() {
    let rec: PatchRecord = serde_json::from_str("{}").unwrap();
    assert!(rec.key.is_undefined());
    assert_eq!(serde_json::to_string(&rec).unwrap(), "{}");
}

#[test]
fn absent_field_without_default_is_missing_field() {
    let err = serde_json::from_str::<StrictRecord>("{}").unwrap_err();
    assert!(err.to_string().contains("missing field `key`"), "{err}");
}

// ---------------------------------------------------------------------------
// Decode failures
// ---------------------------------------------------------------------------

#[test]
fn wrong_type_propagates_inner_error() {
    let rec = RecordDecoder::parse(br#"{"key":"forty-two"}"#).unwrap();
    let err = rec.field::<i64>("key").unwrap_err();
    let DecodeError::Json(inner) = err else {
        panic!("expected inner codec error");
    };
    assert!(inner.is_data());
}

#[test]
fn out_of_range_propagates_inner_error() {
    let rec = RecordDecoder::parse(br#"{"key":300}"#).unwrap();
    assert!(matches!(rec.field::<u8>("key"), Err(DecodeError::Json(_))));
}

#[test]
fn serde_wrong_type_is_an_error() {
    assert!(serde_json::from_str::<Record>(r#"{"key":[1]}"#).is_err());
}

// ---------------------------------------------------------------------------
// Null token
// ---------------------------------------------------------------------------

#[test]
fn null_encodes_to_sentinel_for_any_type() {
    assert_eq!(TriState::<i64>::Null.encode().unwrap(), NULL_TOKEN);
    assert_eq!(TriState::<String>::Null.encode().unwrap(), NULL_TOKEN);
    assert_eq!(TriState::<Vec<Record>>::Null.encode().unwrap(), NULL_TOKEN);
    assert_eq!(Nullable::<bool>::null().encode().unwrap(), NULL_TOKEN);
}

#[test]
fn undefined_value_and_encode_fail_for_any_type() {
    assert_eq!(TriState::<String>::Undefined.value(), Err(ErrorKind::Undefined));
    assert_eq!(TriState::<bool>::Undefined.value(), Err(ErrorKind::Undefined));
    assert_eq!(
        TriState::<Vec<u8>>::Undefined.encode().unwrap_err().kind(),
        Some(ErrorKind::Undefined)
    );
}

// ---------------------------------------------------------------------------
// Nullable (required) fields
// ---------------------------------------------------------------------------

#[test]
fn nullable_field_record_codec() {
    let rec = RecordDecoder::parse(br#"{"key":"v","gone":null}"#).unwrap();
    assert_eq!(rec.nullable::<String>("key").unwrap(), Nullable::new(String::from("v")));
    assert_eq!(rec.nullable::<String>("gone").unwrap(), Nullable::null());
    assert!(matches!(
        rec.nullable::<String>("other"),
        Err(DecodeError::MissingField(ref k)) if k == "other"
    ));
}

#[test]
fn nullable_field_serde() {
    let rec: RequiredRecord = serde_json::from_str(r#"{"key":null}"#).unwrap();
    assert_eq!(rec.key.value(), Err(ErrorKind::Null));
    assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"key":null}"#);
    assert!(serde_json::from_str::<RequiredRecord>("{}").is_err());
}

// ---------------------------------------------------------------------------
// Re-decoding yields a fresh instance
// ---------------------------------------------------------------------------

#[test]
fn failed_decode_leaves_existing_field_untouched() {
    let mut key = decode_key(r#"{"key":1}"#);
    if let Ok(fresh) = TriState::<i64>::decode(b"oops") {
        key = fresh;
    }
    assert_eq!(key, TriState::new(1));
    key = TriState::decode(b"null").unwrap();
    assert!(key.is_null());
}

// ---------------------------------------------------------------------------
// Integers wider than 64 bits
// ---------------------------------------------------------------------------

#[test]
fn wide_integers_round_trip_through_derived_record() {
    let rec = WideRecord {
        unsigned: TriState::new(u64::MAX as u128 + 1),
        signed: TriState::new(i64::MIN as i128 - 1),
    };
    let text = serde_json::to_string(&rec).unwrap();
    assert_eq!(
        text,
        r#"{"unsigned":18446744073709551616,"signed":-9223372036854775809}"#
    );
    let back: WideRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn wide_integers_round_trip_through_record_codec() {
    let big = TriState::new(u128::MAX);
    let mut enc = RecordEncoder::default();
    enc.field("key", &big).unwrap();
    let bytes = enc.finish().unwrap();
    let rec = RecordDecoder::parse(&bytes).unwrap();
    assert_eq!(rec.field::<u128>("key").unwrap(), big);
}

#[test]
fn derived_record_keeps_inner_error_text_and_position() {
    let err = serde_json::from_str::<Record>(r#"{"key":"forty-two"}"#).unwrap_err();
    assert!(err.is_data());
    assert!(
        err.to_string().starts_with("invalid type: string \"forty-two\""),
        "{err}"
    );
    assert_eq!(err.line(), 1);
}

// ---------------------------------------------------------------------------
// Presence over nullability: Option<Nullable<T>>
// ---------------------------------------------------------------------------

#[test]
fn nested_option_nullable_matrix() {
    let cases: [(&str, Option<Nullable<i64>>); 3] = [
        (r#"{"key": 42}"#, Some(Nullable::new(42))),
        (r#"{"key": null}"#, Some(Nullable::null())),
        ("{}", None),
    ];
    for (doc, want) in cases {
        let from_codec = decode_key(doc).into_nested();
        assert_eq!(from_codec, want, "record codec: {doc}");

        let rec: Record = serde_json::from_str(doc).unwrap();
        let from_serde: Option<Nullable<i64>> = rec.key.into();
        assert_eq!(from_serde, want, "serde: {doc}");

        assert_eq!(TriState::from_nested(want), decode_key(doc), "{doc}");
    }
}

#[test]
fn plain_option_nullable_folds_null_into_absent() {
    #[derive(Deserialize)]
    struct Folded {
        #[serde(default)]
        key: Option<Nullable<i64>>,
    }
    let rec: Folded = serde_json::from_str(r#"{"key": null}"#).unwrap();
    assert_eq!(rec.key, None);
    assert_eq!(decode_key(r#"{"key": null}"#).into_nested(), Some(Nullable::null()));
}
