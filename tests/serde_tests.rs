use clsify::{clsify, cls, to_class_string, to_value, ClassValue, Error, Number};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Flags {
    active: bool,
    disabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct CardState {
    is_open: bool,
    has_shadow: bool,
    theme: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Variant {
    Primary,
    Ghost,
}

#[derive(Serialize)]
struct Button {
    base: &'static str,
    variant: Variant,
    flags: Flags,
}

#[test]
fn test_bool_struct_acts_as_key_presence_map() {
    let flags = Flags {
        active: true,
        disabled: false,
    };
    assert_eq!(to_class_string(&flags).unwrap(), "active");
}

#[test]
fn test_serde_renames_shape_tokens() {
    let state = CardState {
        is_open: true,
        has_shadow: true,
        theme: None,
    };
    assert_eq!(to_class_string(&state).unwrap(), "is-open has-shadow");
}

#[test]
fn test_nested_struct_fields_are_map_keys() {
    let button = Button {
        base: "btn",
        variant: Variant::Ghost,
        flags: Flags {
            active: false,
            disabled: false,
        },
    };

    // struct fields are keys; their (truthy) values are never emitted
    assert_eq!(to_class_string(&button).unwrap(), "base variant flags");

    let value = to_value(&button).unwrap();
    let map = value.as_map().unwrap();
    assert_eq!(map.get("variant"), Some(&ClassValue::from("ghost")));
}

#[test]
fn test_sequence_of_parts() {
    let parts = (
        "btn",
        Variant::Primary,
        Some("btn-wide"),
        None::<&str>,
        Flags {
            active: true,
            disabled: true,
        },
    );
    assert_eq!(
        to_class_string(&parts).unwrap(),
        "btn primary btn-wide active disabled"
    );
}

#[test]
fn test_non_string_keys_fail() {
    let mut map = BTreeMap::new();
    map.insert(1, true);
    assert_eq!(to_value(&map), Err(Error::KeyMustBeString("number".to_string())));
}

#[test]
fn test_deserialize_from_json() {
    let value: ClassValue =
        serde_json::from_str(r#"["a", {"b": true, "c": 0}, null, [1.5, ""]]"#).unwrap();
    assert_eq!(clsify(&[value]), "a b 1.5");
}

#[test]
fn test_deserialize_numbers() {
    let value: ClassValue = serde_json::from_str("[7, -3, 2.5, 18446744073709551615]").unwrap();
    assert_eq!(
        value,
        ClassValue::Array(vec![
            ClassValue::Number(Number::Integer(7)),
            ClassValue::Number(Number::Integer(-3)),
            ClassValue::Number(Number::Float(2.5)),
            ClassValue::Number(Number::Float(u64::MAX as f64)),
        ])
    );
}

#[test]
fn test_json_object_keeps_document_order() {
    let value: ClassValue = serde_json::from_str(r#"{"z": 1, "a": 1, "m": 1}"#).unwrap();
    assert_eq!(value.to_string(), "z a m");
}

#[test]
fn test_serialize_to_json() {
    let value = cls!(["a", { "b": true }, null, 2]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"["a",{"b":true},null,2]"#);

    let back: ClassValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_invalid_json_shape_is_a_json_error() {
    let result = serde_json::from_str::<ClassValue>("[\"a\",");
    assert!(result.is_err());
}
