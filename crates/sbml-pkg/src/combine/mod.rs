// crates/sbml-pkg/src/combine/mod.rs

//! The COMBINE archive manifest (`manifest.xml`).

mod content;
pub mod errors;
mod manifest;

pub use content::{CONTENT_SCHEMA, CaContent};
pub use manifest::{CaOmexManifest, OMEX_MANIFEST_SCHEMA};
