use crate::model::PropertyType;

///
/// FieldModel
/// Macro-generated metadata for one declared field, in declaration order.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Property name as used in paths and maps.
    pub name: &'static str,
    /// Declared type, as written on the field.
    pub declared: DeclaredType,
    /// Timestamp marker; overrides the declared type in the registry.
    pub timestamp: bool,
    /// False for do-not-collect fields, which never become properties.
    pub collect: bool,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, declared: DeclaredType) -> Self {
        Self {
            name,
            declared,
            timestamp: false,
            collect: true,
        }
    }

    /// Registry descriptor for this field.
    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        if self.timestamp {
            return PropertyType::Timestamp;
        }

        match self.declared {
            DeclaredType::None => PropertyType::parse(""),
            DeclaredType::Named(name) => PropertyType::parse(name),
            DeclaredType::Union(members) => PropertyType::union(members.iter().copied()),
            DeclaredType::Model(name) => PropertyType::model(name),
        }
    }

    /// Declared type names, for mismatch diagnostics.
    #[must_use]
    pub fn expected(&self) -> Vec<String> {
        match self.declared {
            DeclaredType::None => vec![String::new()],
            DeclaredType::Named(name) | DeclaredType::Model(name) => vec![name.to_string()],
            DeclaredType::Union(members) => members.iter().map(ToString::to_string).collect(),
        }
    }
}

///
/// DeclaredType
///
/// None  → no declared type (untyped field).
/// Model → a nested model, by scope name.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclaredType {
    None,
    Named(&'static str),
    Union(&'static [&'static str]),
    Model(&'static str),
}
