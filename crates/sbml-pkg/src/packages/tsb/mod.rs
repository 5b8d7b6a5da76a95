// crates/sbml-pkg/src/packages/tsb/mod.rs

//! The `tsb` test package: an attribute class covering every primitive
//! type, and a container class owning a list of them.

mod abc;
mod container_y;
pub mod errors;
mod plugin;

pub use abc::{ABC_SCHEMA, Abc};
pub use container_y::{CONTAINER_Y_SCHEMA, ContainerY, LIST_OF_ABCS_SCHEMA};
pub use plugin::{LIST_OF_CONTAINER_YS_SCHEMA, TsbModelPlugin};
