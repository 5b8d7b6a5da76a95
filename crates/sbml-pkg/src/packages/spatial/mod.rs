// crates/sbml-pkg/src/packages/spatial/mod.rs

//! Spatial Processes: constructive solid geometry trees.
//!
//! A CSG tree is built from primitives, set operators over lists of nodes,
//! and transformations that wrap exactly one node.

use crate::namespaces::Namespaces;
use crate::status::{OperationError, OperationResult};

mod csg_node;
pub mod errors;
mod primitive;
mod set_operator;
mod transformation;

pub use csg_node::CsgNode;
pub use primitive::{CSG_PRIMITIVE_SCHEMA, CsgPrimitive, PrimitiveKind};
pub use set_operator::{CSG_SET_OPERATOR_SCHEMA, CsgSetOperator, LIST_OF_CSG_NODES_SCHEMA, SetOperation};
pub use transformation::{
    CSG_ROTATION_SCHEMA, CSG_SCALE_SCHEMA, CSG_TRANSLATION_SCHEMA, CsgRotation, CsgScale,
    CsgTransformation, CsgTranslation,
};

/// Checks that a node built in `theirs` may be attached under an element in `own`.
fn check_attachable(own: &Namespaces, theirs: &Namespaces) -> OperationResult {
    if own.level() != theirs.level() {
        return Err(OperationError::LevelMismatch);
    }
    if own.version() != theirs.version() {
        return Err(OperationError::VersionMismatch);
    }
    if !own.matches_for_addition(theirs) {
        return Err(OperationError::NamespacesMismatch);
    }
    Ok(())
}
