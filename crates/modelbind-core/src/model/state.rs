use crate::{
    collector::TypeCollector,
    config::ModelConfig,
    model::{FieldModel, PropertyType},
    value::{Value, ValueMap},
};
use std::cell::OnceCell;
use tracing::debug;

///
/// ModelState
///
/// Per-instance state every model embeds: the raw-data snapshot from the
/// last `load`, the lazily-built property registry, values of properties
/// added at runtime, and the instance config.
///

#[derive(Clone, Debug, Default)]
pub struct ModelState {
    config: ModelConfig,
    data: ValueMap,
    collector: OnceCell<TypeCollector>,
    values: ValueMap,
}

impl ModelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> ModelConfig {
        self.config
    }

    pub const fn set_config(&mut self, config: ModelConfig) {
        self.config = config;
    }

    /// Raw snapshot stored by the last `load`.
    #[must_use]
    pub const fn data(&self) -> &ValueMap {
        &self.data
    }

    pub(crate) fn replace_data(&mut self, data: ValueMap) {
        self.data = data;
    }

    /// Value of a runtime-added property, if one was written.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub(crate) fn store_value(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    ///
    /// REGISTRY
    ///

    /// The property registry, built from `fields` on first use.
    pub(crate) fn collector(&self, fields: &[FieldModel]) -> &TypeCollector {
        self.collector.get_or_init(|| build_collector(fields))
    }

    pub(crate) fn add_property(
        &mut self,
        fields: &[FieldModel],
        name: &str,
        property_type: PropertyType,
    ) {
        let mut collector = self
            .collector
            .take()
            .unwrap_or_else(|| build_collector(fields));

        collector.add_property(name, property_type);
        self.collector = OnceCell::from(collector);
    }
}

fn build_collector(fields: &[FieldModel]) -> TypeCollector {
    let collector = TypeCollector::collect(fields);
    debug!(properties = collector.len(), "built property registry");

    collector
}
