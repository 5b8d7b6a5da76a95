// crates/sbml-pkg/src/packages/fbc/mod.rs

//! Flux Balance Constraints version 2: gene product associations.

mod association;
pub mod errors;
mod gene_product_association;
mod gene_product_ref;
mod junction;

pub use association::{Association, InfixError};
pub use gene_product_association::{GENE_PRODUCT_ASSOCIATION_SCHEMA, GeneProductAssociation};
pub use gene_product_ref::{GENE_PRODUCT_REF_SCHEMA, GeneProductRef};
pub use junction::{FBC_AND_SCHEMA, FBC_OR_SCHEMA, FbcAnd, FbcOr};
