use crate::value::{Object, Value, ValueMap};
use indexmap::IndexMap;
use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    hash::BuildHasher,
};

///
/// FieldValue
///
/// Conversion boundary between a strongly-typed field and `Value`.
///
/// `from_value` is strict: it returns `None` for any value the field type
/// cannot hold, and the caller reports that as a type mismatch.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    #[expect(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as Self),
            _ => None,
        }
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float((*self).into())
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v as Self),
            Value::Int(v) => Some(*v as Self),
            _ => None,
        }
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FieldValue for Object {
    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue> FieldValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        items.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(map_to_value(self))
    }

    fn from_value(value: &Value) -> Option<Self> {
        map_from_value(value)?.collect()
    }
}

// impl_field_value_hashed
macro_rules! impl_field_value_hashed {
    ( $( $map:ident ),* $(,)? ) => {
        $(
            impl<T: FieldValue, S: BuildHasher + Default> FieldValue for $map<String, T, S> {
                fn to_value(&self) -> Value {
                    Value::Map(map_to_value(self))
                }

                fn from_value(value: &Value) -> Option<Self> {
                    map_from_value(value)?.collect()
                }
            }
        )*
    };
}

impl_field_value_hashed!(HashMap, IndexMap);

fn map_to_value<'a, T: FieldValue + 'a>(
    entries: impl IntoIterator<Item = (&'a String, &'a T)>,
) -> ValueMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.to_value()))
        .collect()
}

/// Entries of a `Map` value converted item by item; `None` when the value is
/// not a map. A single rejected entry fails the whole collect.
fn map_from_value<T: FieldValue>(
    value: &Value,
) -> Option<impl Iterator<Item = Option<(String, T)>> + '_> {
    let Value::Map(entries) = value else {
        return None;
    };

    Some(
        entries
            .iter()
            .map(|(key, value)| T::from_value(value).map(|value| (key.clone(), value))),
    )
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    bool => Bool,
);

// impl_field_value_wide
// Integers wider than `Value::Int`. Reads are range-checked; values past
// `i64` are written as floats.
macro_rules! impl_field_value_wide {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value_wide!(i128, isize, u64, u128, usize);

///
/// TESTS
///
