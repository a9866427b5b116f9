//! ## Crate layout
//! - `core`: values, the property registry, the `Model` façade and errors.
//! - `utils`: case conversion and dotted-path helpers.
//! - `Model` (derive): implements `model::Model` for a plain struct.
//!
//! The `prelude` module carries what model declarations and callers need;
//! errors and configuration stay one module level down.

pub use modelbind_core as core;
pub use modelbind_utils as utils;

pub use modelbind_core::{
    Error, Result, TIMESTAMP, clock, collector, config, error, model, traits, value, value_map,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use modelbind_derive::Model;

///
/// Prelude
/// the derive and the trait share the `Model` name
///

pub mod prelude {
    pub use modelbind_core::prelude::*;
    pub use modelbind_derive::Model;
}
