mod access;
mod cast;


use crate::{
    model::{FieldModel, PropertyType},
    value::Value,
};
use indexmap::IndexMap;

pub(crate) use access::{
    has_property, leaf_paths, property_value, set_properties_values, set_property_value, to_map,
};

///
/// PropertyTypes
/// Property name → descriptor, in registration order.
///

pub type PropertyTypes = IndexMap<String, PropertyType>;

///
/// TypeCollector
///
/// Property registry for one model instance. Built from the declared
/// fields, then extended at runtime; entries are never removed.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeCollector {
    properties: PropertyTypes,
}

impl TypeCollector {
    /// Build the registry from declared fields, skipping do-not-collect ones.
    #[must_use]
    pub fn collect(fields: &[FieldModel]) -> Self {
        let properties = fields
            .iter()
            .filter(|field| field.collect)
            .map(|field| (field.name.to_string(), field.property_type()))
            .collect();

        Self { properties }
    }

    /// Insert a property; an existing name keeps its position and gets the
    /// new descriptor.
    pub fn add_property(&mut self, name: impl Into<String>, property_type: PropertyType) {
        self.properties.insert(name.into(), property_type);
    }

    #[must_use]
    pub const fn properties(&self) -> &PropertyTypes {
        &self.properties
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyType> {
        self.properties.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[must_use]
    pub fn is_property_type(&self, name: &str, kind: &str) -> bool {
        self.get(name)
            .is_some_and(|property_type| property_type.matches(kind))
    }

    /// Coerce `value` into the declared type of `name`.
    ///
    /// Unregistered names yield `Null`. Nulls, arrays and values for union
    /// or non-scalar properties pass through unchanged.
    #[must_use]
    pub fn cast(&self, name: &str, value: Value) -> Value {
        let Some(property_type) = self.get(name) else {
            return Value::Null;
        };

        if value.is_null() || value.is_array() {
            return value;
        }

        match property_type {
            PropertyType::Single(kind) if kind.is_scalar() => cast::cast_to(kind, value),
            _ => value,
        }
    }
}
