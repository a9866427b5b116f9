//! Core runtime for modelbind: values, the property-type registry, the
//! `Model` façade, and the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

extern crate self as modelbind;

#[macro_use]
mod macros;

// public exports are one module level down
pub mod clock;
pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};

///
/// CONSTANTS
///

/// Property type name that marks a timestamp property.
pub const TIMESTAMP: &str = "timestamp";

///
/// Prelude
///
/// Prelude contains the vocabulary needed to declare and drive models.
/// Errors and configuration stay one module level down.
///

pub mod prelude {
    pub use crate::{
        model::{DynamicModel, Model, ModelState, PropertyType},
        traits::FieldValue,
        value::{Object, Value, ValueMap},
        value_map,
    };
}
