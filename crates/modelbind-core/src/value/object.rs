use crate::value::ValueMap;
use serde::{Serialize, Serializer};

///
/// Object
///
/// Opaque object value. `text` is its string form, if the object has one;
/// string properties coerce stringable objects through it.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Object {
    class: String,
    text: Option<String>,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: None,
        }
    }

    pub fn stringable(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

///
/// Record
///
/// Detached snapshot of a nested model: its scope name and its properties
/// as `to_map` produced them. Serializes as the bare property map.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    model: String,
    fields: ValueMap,
}

impl Record {
    pub fn new(model: impl Into<String>, fields: ValueMap) -> Self {
        Self {
            model: model.into(),
            fields,
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub const fn fields(&self) -> &ValueMap {
        &self.fields
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&crate::value::Value> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn into_fields(self) -> ValueMap {
        self.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
