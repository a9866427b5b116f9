use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure a model operation can report. Multi-property writes are
/// not atomic: writes that succeeded before the error stay applied.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    UndefinedProperty(#[from] UndefinedPropertyError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    #[error(transparent)]
    NotNested(#[from] NotNestedError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

///
/// UndefinedPropertyError
///
/// A path segment is not registered on the model it was resolved against.
/// `model` is the model's type path; `property` is the offending segment,
/// or the full path for a single-segment write.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("undefined property: \"{model}::{property}\"")]
pub struct UndefinedPropertyError {
    pub model: String,
    pub property: String,
}

impl UndefinedPropertyError {
    pub fn new(model: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            property: property.into(),
        }
    }
}

///
/// TypeMismatchError
///
/// A value was rejected by the field's own type after casting.
/// `expected` holds the declared type names, in declaration order.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error(
    "cannot assign {found} to property {model}::${property} of type {}",
    .expected.join("|")
)]
pub struct TypeMismatchError {
    pub model: String,
    pub property: String,
    pub expected: Vec<String>,
    pub found: String,
}

impl TypeMismatchError {
    pub fn new(
        model: impl Into<String>,
        property: impl Into<String>,
        expected: Vec<String>,
        found: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            property: property.into(),
            expected,
            found: found.into(),
        }
    }
}

///
/// NotNestedError
///
/// A dotted path continues past a property that does not hold a model.
/// Only reported when `ModelConfig::strict_paths` is set.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("property {model}::{property} holds {found}, not a nested model")]
pub struct NotNestedError {
    pub model: String,
    pub property: String,
    pub found: String,
}

impl NotNestedError {
    pub fn new(
        model: impl Into<String>,
        property: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            property: property.into(),
            found: found.into(),
        }
    }
}

///
/// TESTS
///
