// crates/sbml-pkg/src/sedml/mod.rs

//! SED-ML Level 1: models and the changes applied to them.

use crate::namespaces::Namespaces;
use crate::schema::SchemaRow;

/// Accessors for `String` fields. Unset values read as `""`.
macro_rules! string_accessors {
    ($($field:ident, $is_set:ident, $set:ident, $unset:ident;)*) => {
        $(
            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn $is_set(&self) -> bool {
                !self.$field.is_empty()
            }

            pub fn $set(&mut self, value: &str) -> $crate::status::OperationResult {
                self.$field = alloc::string::ToString::to_string(value);
                Ok(())
            }

            pub fn $unset(&mut self) -> $crate::status::OperationResult {
                self.$field.clear();
                Ok(())
            }
        )*
    };
}

mod change;
mod document;
pub mod errors;
mod model;

pub use change::{
    ADD_XML_SCHEMA, AddXml, CHANGE_ATTRIBUTE_SCHEMA, ChangeAttribute, REMOVE_XML_SCHEMA, RemoveXml,
    SedChange,
};
pub use document::{LIST_OF_MODELS_SCHEMA, SED_DOCUMENT_SCHEMA, SedDocument};
pub use model::{LIST_OF_CHANGES_SCHEMA, SED_MODEL_SCHEMA, SedModel};

/// The single row of an attribute-less SED-ML element such as a `listOf`.
pub(crate) const SEDML_EMPTY_ROWS: &[SchemaRow] = &[SchemaRow {
    level: 1,
    versions: (1, 4),
    pkg_version: None,
    attributes: &[],
}];

/// SED-ML Level 1 Version 4, the namespaces of default-constructed elements.
pub fn default_namespaces() -> Namespaces {
    Namespaces::sedml(1, 4)
}
