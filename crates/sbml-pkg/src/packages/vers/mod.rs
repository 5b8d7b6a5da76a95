// crates/sbml-pkg/src/packages/vers/mod.rs

//! The `vers` test package: one class whose attributes change with the
//! package version.

mod class_one;
pub mod errors;
mod plugin;

pub use class_one::{CLASS_ONE_SCHEMA, ClassOne};
pub use plugin::{LIST_OF_CLASS_ONES_SCHEMA, VersModelPlugin};
