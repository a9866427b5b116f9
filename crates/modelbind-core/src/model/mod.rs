mod dynamic;
mod field;
mod property;
mod state;

use crate::{
    collector::{self, PropertyTypes, TypeCollector},
    error::{Result, TypeMismatchError},
    traits::FieldValue,
    value::{Kind, Value, ValueMap},
};
use tracing::debug;

// re-exports
pub use dynamic::DynamicModel;
pub use field::{DeclaredType, FieldModel};
pub use property::PropertyType;
pub use state::ModelState;

///
/// FieldWrite
///
/// Outcome of a raw field write.
/// Vacant → the name is not a declared field; the value goes to the
/// model's runtime property storage.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldWrite {
    Written,
    Vacant(Value),
}

///
/// Model
///
/// A structured model whose properties can be read, written and exported
/// by name or dotted path. The required methods are the accessors
/// `#[derive(Model)]` generates; the provided methods are the façade.
///

pub trait Model {
    /// Scope name used by `load`; empty for anonymous models.
    fn model_name(&self) -> &str;

    /// Fully-qualified type path, for diagnostics.
    fn model_path(&self) -> &str;

    /// Declared fields in declaration order.
    fn fields(&self) -> &'static [FieldModel];

    fn state(&self) -> &ModelState;

    fn state_mut(&mut self) -> &mut ModelState;

    /// Current value of a declared leaf field. `None` for any other name.
    fn read_field(&self, name: &str) -> Option<Value>;

    /// Assign a declared leaf field without casting.
    fn write_field(&mut self, name: &str, value: Value) -> Result<FieldWrite, TypeMismatchError>;

    /// Nested model held by `name`, if the field holds one right now.
    fn nested(&self, name: &str) -> Option<&dyn Model>;

    fn nested_mut(&mut self, name: &str) -> Option<&mut dyn Model>;

    ///
    /// REGISTRY
    ///

    fn type_collector(&self) -> &TypeCollector {
        self.state().collector(self.fields())
    }

    /// Ordered property registry.
    fn property_types(&self) -> &PropertyTypes {
        self.type_collector().properties()
    }

    /// Register a property at runtime, or replace the type of an existing one.
    fn add_property(&mut self, name: &str, property_type: PropertyType) {
        debug!(
            model = self.model_path(),
            property = name,
            property_type = %property_type,
            "adding property"
        );

        let fields = self.fields();
        self.state_mut().add_property(fields, name, property_type);
    }

    /// Single segments must be registered; multi-segment paths are
    /// optimistic unless the model's config asks for strict paths.
    fn has_property(&self, path: &str) -> bool {
        collector::has_property(self, path)
    }

    fn is_property_type(&self, name: &str, kind: &str) -> bool {
        self.type_collector().is_property_type(name, kind)
    }

    /// Leaf property paths, expanding nested models recursively.
    fn properties(&self) -> Vec<String> {
        let mut out = Vec::new();
        collector::leaf_paths(self, "", &mut out);

        out
    }

    ///
    /// DATA
    ///

    /// Raw snapshot stored by the last `load`.
    fn data(&self) -> &ValueMap {
        self.state().data()
    }

    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Bind the entry named after the scope (the model name by default),
    /// or the whole mapping when that entry is missing or not a map.
    ///
    /// Returns whether the effective mapping had any entries.
    fn load(&mut self, data: &ValueMap, scope: Option<&str>) -> Result<bool> {
        let scope = scope.unwrap_or_else(|| self.model_name()).to_string();
        let effective = match data.get(&scope) {
            Some(Value::Map(inner)) => inner.clone(),
            _ => data.clone(),
        };

        debug!(
            model = self.model_path(),
            scope = %scope,
            entries = effective.len(),
            "loading model data"
        );

        self.state_mut().replace_data(effective.clone());
        for (name, value) in &effective {
            self.set_property_value(name, value.clone())?;
        }

        Ok(!effective.is_empty())
    }

    ///
    /// ACCESS
    ///

    fn property_value(&mut self, path: &str) -> Result<Value> {
        collector::property_value(self, path)
    }

    fn set_property_value(&mut self, path: &str, value: Value) -> Result<()> {
        collector::set_property_value(self, path, value)
    }

    /// Write every entry except those in `except`; keys are converted from
    /// snake_case to camelCase before they are resolved.
    fn set_properties_values(&mut self, data: &ValueMap, except: &[&str]) -> Result<()> {
        collector::set_properties_values(self, data, except)
    }

    /// Export every registered property except those in `except`.
    fn to_map(&mut self, snake_case: bool, except: &[&str]) -> Result<ValueMap> {
        collector::to_map(self, snake_case, except)
    }
}

///
/// DERIVE SUPPORT
///

/// Assign a typed field from a value, rejecting values the type cannot hold.
#[doc(hidden)]
pub fn assign<T: FieldValue>(
    slot: &mut T,
    value: Value,
    model: &str,
    field: &FieldModel,
) -> Result<FieldWrite, TypeMismatchError> {
    match T::from_value(&value) {
        Some(v) => {
            *slot = v;
            Ok(FieldWrite::Written)
        }
        None => Err(reject(&value, model, field)),
    }
}

/// Assign a union field, accepting only values of a declared member kind.
#[doc(hidden)]
pub fn assign_union(
    slot: &mut Value,
    value: Value,
    model: &str,
    field: &FieldModel,
) -> Result<FieldWrite, TypeMismatchError> {
    let accepted = match field.declared {
        DeclaredType::Union(members) => members
            .iter()
            .any(|member| value.is_kind(&Kind::parse(member))),
        _ => true,
    };

    if !accepted {
        return Err(reject(&value, model, field));
    }

    *slot = value;
    Ok(FieldWrite::Written)
}

#[doc(hidden)]
#[must_use]
pub fn reject(value: &Value, model: &str, field: &FieldModel) -> TypeMismatchError {
    TypeMismatchError::new(model, field.name, field.expected(), value.kind_label())
}
