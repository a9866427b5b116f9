mod support;

use modelbind::{Error, prelude::*};
use support::{DinamicNested, dinamic};

fn with_contact_properties(model: &mut dyn Model) {
    model.add_property("name", "string".into());
    model.add_property("age", "int".into());
    model.add_property("email", "string".into());
}

#[test]
fn add_property_registers_in_order() {
    let mut model = dinamic();
    with_contact_properties(&mut model);

    assert_eq!(model.properties(), ["name", "age", "email"]);
    assert_eq!(
        model
            .property_types()
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.to_string()))
            .collect::<Vec<_>>(),
        [
            ("name", "string".to_string()),
            ("age", "int".to_string()),
            ("email", "string".to_string()),
        ]
    );
}

#[test]
fn add_property_overwrites_in_place() {
    let mut model = dinamic();
    with_contact_properties(&mut model);
    model.add_property("name", ["string", "null"].into());

    assert_eq!(model.properties(), ["name", "age", "email"]);
    assert!(model.is_property_type("name", "null"));
}

#[test]
fn load_with_explicit_scope() {
    let mut model = dinamic();
    with_contact_properties(&mut model);

    let data = value_map! {
        "name" => "John Doe",
        "age" => 30,
        "email" => "test@example.com",
    };

    assert!(model.load(&data, Some("Dinamic")).unwrap());
    assert_eq!(model.property_value("name").unwrap(), Value::text("John Doe"));
    assert_eq!(model.property_value("age").unwrap(), Value::Int(30));
    assert_eq!(
        model.property_value("email").unwrap(),
        Value::text("test@example.com")
    );
}

#[test]
fn load_with_timestamp_property() {
    let mut model = dinamic();
    with_contact_properties(&mut model);
    model.add_property("created_at", "timestamp".into());

    let data = value_map! { "name" => "John Doe", "age" => 30 };

    assert!(model.load(&data, Some("Dinamic")).unwrap());
    assert!(model.property_value("created_at").unwrap().as_int().unwrap() > 0);
}

#[test]
fn unknown_head_is_undefined() {
    let mut model = dinamic();
    let err = model.property_value("property.name").unwrap_err();

    assert_eq!(
        err,
        Error::UndefinedProperty(modelbind::error::UndefinedPropertyError::new(
            "Dinamic", "property"
        ))
    );
    assert_eq!(err.to_string(), "undefined property: \"Dinamic::property\"");
}

#[test]
fn dotted_names_register_as_leaves() {
    let mut model = dinamic();
    with_contact_properties(&mut model);
    for name in ["address.city", "address.state", "address.zip"] {
        model.add_property(name, "string".into());
    }

    assert_eq!(
        model.properties(),
        [
            "name",
            "age",
            "email",
            "address.city",
            "address.state",
            "address.zip"
        ]
    );
    assert!(model.is_property_type("address.zip", "string"));
}

#[test]
fn nested_dynamic_model_with_load() {
    let mut nested = dinamic();
    for name in ["city", "state", "zip"] {
        nested.add_property(name, "string".into());
    }
    nested.add_property("createdAt", "timestamp".into());

    let mut model = DinamicNested::new(nested);
    with_contact_properties(&mut model);

    let data = value_map! {
        "name" => "John Doe",
        "age" => 30,
        "email" => "test@example.com",
        "dinamic.city" => "New York",
        "dinamic.state" => "NY",
        "dinamic.zip" => 10001,
    };

    assert!(model.load(&data, Some("DinamicNested")).unwrap());
    assert_eq!(model.property_value("name").unwrap(), Value::text("John Doe"));
    assert_eq!(model.property_value("age").unwrap(), Value::Int(30));
    assert_eq!(
        model.property_value("dinamic.city").unwrap(),
        Value::text("New York")
    );
    assert_eq!(model.property_value("dinamic.state").unwrap(), Value::text("NY"));
    // cast on the nested model's own registry
    assert_eq!(model.property_value("dinamic.zip").unwrap(), Value::text("10001"));
    assert!(
        model
            .property_value("dinamic.createdAt")
            .unwrap()
            .as_int()
            .unwrap()
            > 0
    );

    assert_eq!(
        model.properties(),
        [
            "dinamic.city",
            "dinamic.state",
            "dinamic.zip",
            "dinamic.createdAt",
            "name",
            "age",
            "email"
        ]
    );
}
