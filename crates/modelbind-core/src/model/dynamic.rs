use crate::{
    config::ModelConfig,
    error::TypeMismatchError,
    model::{FieldModel, FieldWrite, Model, ModelState},
    value::Value,
};

///
/// DynamicModel
///
/// Schema-less model: it declares no fields, so every property comes from
/// `add_property` and every value lives in its `ModelState`.
///

#[derive(Clone, Debug, Default)]
pub struct DynamicModel {
    name: String,
    state: ModelState,
}

impl DynamicModel {
    /// Anonymous model; its scope name is empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ModelState::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.state.set_config(config);
        self
    }
}

impl Model for DynamicModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn model_path(&self) -> &str {
        if self.name.is_empty() {
            concat!(module_path!(), "::DynamicModel")
        } else {
            &self.name
        }
    }

    fn fields(&self) -> &'static [FieldModel] {
        &[]
    }

    fn state(&self) -> &ModelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ModelState {
        &mut self.state
    }

    fn read_field(&self, _name: &str) -> Option<Value> {
        None
    }

    fn write_field(&mut self, _name: &str, value: Value) -> Result<FieldWrite, TypeMismatchError> {
        Ok(FieldWrite::Vacant(value))
    }

    fn nested(&self, _name: &str) -> Option<&dyn Model> {
        None
    }

    fn nested_mut(&mut self, _name: &str) -> Option<&mut dyn Model> {
        None
    }
}

///
/// TESTS
///
