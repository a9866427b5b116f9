mod kind;
mod object;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// re-exports
pub use kind::Kind;
pub use object::{Object, Record};

///
/// ValueMap
///
/// Insertion-ordered string-keyed mapping; both the input and output shape
/// of a model.
///

pub type ValueMap = IndexMap<String, Value>;

///
/// Value
///
/// Every runtime property value.
///
/// Object → opaque host object, identified by class name.
/// Nested → detached snapshot of a nested model.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Self>),
    Map(ValueMap),
    #[serde(skip_deserializing)]
    Object(Object),
    #[serde(skip_deserializing)]
    Nested(Record),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::Text` from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    ///
    /// TYPES
    ///

    /// Type label used in mismatch diagnostics and union membership.
    ///
    /// Lists and maps both report `array`; nested snapshots report their
    /// model name.
    #[must_use]
    pub fn kind_label(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::List(_) | Self::Map(_) => "array",
            Self::Object(_) => "object",
            Self::Nested(record) => record.model(),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Returns true if the value is accepted by a property declared as `kind`.
    ///
    /// Ints are accepted by float members; objects by `object` or their own
    /// class name; untyped members accept everything.
    #[must_use]
    pub fn is_kind(&self, kind: &Kind) -> bool {
        match (kind, self) {
            (Kind::Mixed, _)
            | (Kind::Null, Self::Null)
            | (Kind::Bool, Self::Bool(_))
            | (Kind::Int, Self::Int(_))
            | (Kind::Float, Self::Int(_) | Self::Float(_))
            | (Kind::String, Self::Text(_))
            | (Kind::Array, Self::List(_) | Self::Map(_))
            | (Kind::Object, Self::Object(_) | Self::Nested(_)) => true,
            (Kind::Named(name), Self::Object(object)) => object.class() == name,
            (Kind::Named(name), Self::Nested(record)) => record.model() == name,
            _ => false,
        }
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&Vec<Self>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Nested(record) => Some(record),
            _ => None,
        }
    }
}

///
/// CONVERSIONS
///

// impl_from_for
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    &str => Text,
    String => Text,
    ValueMap => Map,
    Object => Object,
    Record => Nested,
}

// impl_from_wide
// Integers wider than `Int` become floats once they leave the `i64` range.
macro_rules! impl_from_wide {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                #[allow(clippy::cast_precision_loss)]
                fn from(v: $type) -> Self {
                    i64::try_from(v).map_or(Self::Float(v as f64), Self::Int)
                }
            }
        )*
    };
}

impl_from_wide!(i128, isize, u64, u128, usize);

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
