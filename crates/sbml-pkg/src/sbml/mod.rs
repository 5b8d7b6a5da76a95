// crates/sbml-pkg/src/sbml/mod.rs

//! The SBML core elements that host package content: `<sbml>` and `<model>`.

mod document;
mod model;

pub use document::{EnabledPackage, SBML_DOCUMENT_SCHEMA, SbmlDocument};
pub use model::{MODEL_SCHEMA, Model};
