use crate::value::{Kind, Object, Record, Value, ValueMap};

#[test]
fn kind_labels() {
    assert_eq!(Value::Null.kind_label(), "null");
    assert_eq!(Value::from(true).kind_label(), "bool");
    assert_eq!(Value::from(3u8).kind_label(), "int");
    assert_eq!(Value::from(1.5f32).kind_label(), "float");
    assert_eq!(Value::from("x").kind_label(), "string");
    assert_eq!(Value::from(vec![1, 2]).kind_label(), "array");
    assert_eq!(Value::from(ValueMap::new()).kind_label(), "array");
    assert_eq!(Value::from(Object::new("DateTime")).kind_label(), "object");
    assert_eq!(
        Value::from(Record::new("Country", ValueMap::new())).kind_label(),
        "Country"
    );
}

#[test]
fn option_converts_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("a")), Value::text("a"));
    assert_eq!(Value::from(()), Value::Null);
}

#[test]
fn is_kind_follows_union_membership_rules() {
    let object = Value::Object(Object::new("DateTime"));
    let nested = Value::Nested(Record::new("Address", ValueMap::new()));

    assert!(Value::Int(1).is_kind(&Kind::Float));
    assert!(!Value::Float(1.0).is_kind(&Kind::Int));
    assert!(Value::Null.is_kind(&Kind::Null));
    assert!(!Value::Null.is_kind(&Kind::String));
    assert!(object.is_kind(&Kind::Object));
    assert!(object.is_kind(&Kind::parse("DateTime")));
    assert!(!object.is_kind(&Kind::parse("Address")));
    assert!(nested.is_kind(&Kind::parse("Address")));
    assert!(Value::text("x").is_kind(&Kind::Mixed));
}

#[test]
fn kind_names_round_trip() {
    for name in ["", "bool", "int", "float", "string", "array", "object", "null", "Money"] {
        assert_eq!(Kind::parse(name).name(), name);
    }
    assert!(Kind::Int.is_scalar());
    assert!(!Kind::Array.is_scalar());
}

#[test]
fn deserializes_untagged_json() {
    let map: ValueMap = serde_json::from_str(
        r#"{ "n": null, "b": true, "i": -4, "f": 1.5, "s": "x", "l": [1, "a"], "m": { "k": 2 } }"#,
    )
    .unwrap();

    assert_eq!(map["n"], Value::Null);
    assert_eq!(map["b"], Value::Bool(true));
    assert_eq!(map["i"], Value::Int(-4));
    assert_eq!(map["f"], Value::Float(1.5));
    assert_eq!(map["s"], Value::text("x"));
    assert_eq!(map["l"], Value::List(vec![Value::Int(1), Value::text("a")]));
    assert_eq!(map["m"], Value::Map(value_map! { "k" => 2 }));
    assert_eq!(map.keys().collect::<Vec<_>>(), ["n", "b", "i", "f", "s", "l", "m"]);
}

#[test]
fn nested_records_serialize_as_their_fields() {
    let record = Record::new("Country", value_map! { "name" => "Peru" });
    let json = serde_json::to_string(&Value::Nested(record)).unwrap();

    assert_eq!(json, r#"{"name":"Peru"}"#);
}

#[test]
fn objects_serialize_with_class_and_text() {
    let json = serde_json::to_value(Value::Object(Object::stringable("Name", "joe"))).unwrap();

    assert_eq!(json, serde_json::json!({ "class": "Name", "text": "joe" }));
}

#[test]
fn wide_integers_fall_back_to_float() {
    assert_eq!(Value::from(42u64), Value::Int(42));
    assert_eq!(Value::from(7usize), Value::Int(7));
    assert_eq!(Value::from(-3i128), Value::Int(-3));
    assert!(matches!(Value::from(u64::MAX), Value::Float(f) if f > 1e19));
}
