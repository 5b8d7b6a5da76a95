// crates/sbml-pkg/src/packages/foo/mod.rs

//! The `foo` test package: a container with a required list, and a class
//! holding raw XML.

mod container;
pub mod errors;
mod parent;
mod plugin;

pub use container::{CONTAINER_SCHEMA, Container, LIST_OF_PARENTS_SCHEMA};
pub use parent::{PARENT_SCHEMA, Parent};
pub use plugin::FooModelPlugin;
