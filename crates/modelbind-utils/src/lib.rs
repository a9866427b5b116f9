//! Pure string helpers shared by the modelbind runtime and its derive macro.
//!
//! Nothing in here knows about models; both crates need the exact same
//! property-name rules, so they live in one place.

pub mod case;
pub mod path;
