mod support;

use modelbind::{Error, prelude::*};
use support::UnionType;

#[test]
fn rejects_values_outside_the_union() {
    let mut model = UnionType::default();
    let err = model.set_property_value("union", 1.1.into()).unwrap_err();

    let Error::TypeMismatch(err) = err else {
        panic!("expected type mismatch, got {err:?}");
    };
    assert_eq!(err.found, "float");
    assert_eq!(err.expected, ["object", "string", "int", "bool", "null"]);
    assert!(
        err.to_string().ends_with(
            "support::UnionType::$union of type object|string|int|bool|null"
        ),
        "{err}"
    );
    assert!(err.to_string().starts_with("cannot assign float to property "));
}

#[test]
fn property_types_list_members_in_order() {
    let model = UnionType::default();

    assert_eq!(
        model.property_types()["union"],
        PropertyType::from(["object", "string", "int", "bool", "null"])
    );
}

#[test]
fn is_property_type_checks_membership() {
    let model = UnionType::default();

    assert!(!model.is_property_type("union", "datetime"));
    for kind in ["object", "string", "int", "bool", "null"] {
        assert!(model.is_property_type("union", kind), "{kind}");
    }
}

#[test]
fn union_values_pass_through_uncast() {
    let mut model = UnionType::default();
    let object = Object::new("stdClass");

    for value in [
        Value::Int(1),
        Value::text("1"),
        Value::Bool(true),
        Value::Object(object),
        Value::Null,
    ] {
        model.set_property_value("union", value.clone()).unwrap();
        assert_eq!(model.property_value("union").unwrap(), value);
    }
}
