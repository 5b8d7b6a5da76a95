// crates/sbml-pkg/src/packages/spatial/set_operator.rs

use super::csg_node::CsgNode;
use super::errors::*;
use super::primitive::CsgPrimitive;
use super::transformation::{CsgRotation, CsgScale, CsgTransformation, CsgTranslation};
use crate::attributes::{AttributeEnum, AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::list_of::ListOf;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::sbase::{SBase, SBaseCore, read_element, write_element};
use crate::schema::{
    AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SBML_L3_EMPTY_ROWS, SchemaRow,
};
use crate::status::{OperationError, OperationResult};
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// How a [`CsgSetOperator`] combines its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperation {
    Union,
    Intersection,
    /// The first node minus every following node.
    Difference,
}

impl SetOperation {
    pub const VALUES: &'static [&'static str] = &["union", "intersection", "difference"];
}

impl AttributeEnum for SetOperation {
    fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "union" => Some(Self::Union),
            "intersection" => Some(Self::Intersection),
            "difference" => Some(Self::Difference),
            _ => None,
        }
    }

    fn as_attribute(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Difference => "difference",
        }
    }
}

impl fmt::Display for SetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute())
    }
}

pub static CSG_SET_OPERATOR_SCHEMA: ElementSchema = ElementSchema {
    element: "csgSetOperator",
    errors: ElementErrors {
        allowed_core_attributes: SPATIAL_CSG_SET_OPERATOR_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SPATIAL_CSG_SET_OPERATOR_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SPATIAL_CSG_SET_OPERATOR_ALLOWED_ATTRIBUTES,
        allowed_elements: SPATIAL_CSG_SET_OPERATOR_ALLOWED_ELEMENTS,
        id_syntax: SPATIAL_ID_SYNTAX_RULE,
        duplicate_id: SPATIAL_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, SPATIAL_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SPATIAL_CSG_SET_OPERATOR_NAME_MUST_BE_STRING),
            AttributeSpec::required(
                "operationType",
                AttributeKind::Enum(SetOperation::VALUES),
                SPATIAL_CSG_SET_OPERATOR_OPERATION_TYPE_MUST_BE_SET_OPERATION_ENUM,
            ),
        ],
    }],
};

pub static LIST_OF_CSG_NODES_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfCSGNodes",
    errors: ElementErrors {
        allowed_core_attributes: SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ATTRIBUTES,
        allowed_elements: SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ELEMENTS,
        id_syntax: SPATIAL_ID_SYNTAX_RULE,
        duplicate_id: SPATIAL_DUPLICATE_COMPONENT_ID,
    },
    rows: SBML_L3_EMPTY_ROWS,
};

/// Combines the nodes of its `<listOfCSGNodes>` with a set operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgSetOperator {
    core: SBaseCore,
    id: String,
    name: String,
    operation_type: Option<SetOperation>,
    csg_nodes: ListOf<CsgNode>,
}

impl CsgSetOperator {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Spatial, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            csg_nodes: ListOf::new_required(&LIST_OF_CSG_NODES_SCHEMA, namespaces.clone()),
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            operation_type: None,
        }
    }

    id_name_accessors!();

    pub fn operation_type(&self) -> Option<SetOperation> {
        self.operation_type
    }

    pub fn is_set_operation_type(&self) -> bool {
        self.operation_type.is_some()
    }

    pub fn set_operation_type(&mut self, operation: SetOperation) -> OperationResult {
        self.operation_type = Some(operation);
        Ok(())
    }

    pub fn set_operation_type_str(&mut self, value: &str) -> OperationResult {
        let operation = SetOperation::from_attribute(value).ok_or(OperationError::InvalidAttributeValue)?;
        self.set_operation_type(operation)
    }

    pub fn unset_operation_type(&mut self) -> OperationResult {
        self.operation_type = None;
        Ok(())
    }

    pub fn list_of_csg_nodes(&self) -> &ListOf<CsgNode> {
        &self.csg_nodes
    }

    pub fn list_of_csg_nodes_mut(&mut self) -> &mut ListOf<CsgNode> {
        &mut self.csg_nodes
    }

    pub fn csg_node(&self, n: usize) -> Option<&CsgNode> {
        self.csg_nodes.get(n)
    }

    pub fn csg_node_mut(&mut self, n: usize) -> Option<&mut CsgNode> {
        self.csg_nodes.get_mut(n)
    }

    pub fn csg_node_by_id(&self, id: &str) -> Option<&CsgNode> {
        self.csg_nodes.get_by_id(id)
    }

    pub fn csg_node_by_id_mut(&mut self, id: &str) -> Option<&mut CsgNode> {
        self.csg_nodes.get_by_id_mut(id)
    }

    pub fn add_csg_node(&mut self, node: &CsgNode) -> OperationResult {
        self.csg_nodes.add(node)
    }

    pub fn create_csg_primitive(&mut self) -> &mut CsgPrimitive {
        match self.csg_nodes.create_with(|ns| CsgPrimitive::with_namespaces(ns).into()) {
            CsgNode::Primitive(p) => p,
            _ => unreachable!(),
        }
    }

    pub fn create_csg_set_operator(&mut self) -> &mut CsgSetOperator {
        match self.csg_nodes.create_with(|ns| CsgSetOperator::with_namespaces(ns).into()) {
            CsgNode::SetOperator(s) => s,
            _ => unreachable!(),
        }
    }

    pub fn create_csg_translation(&mut self) -> &mut CsgTranslation {
        match self.csg_nodes.create_with(|ns| CsgTranslation::with_namespaces(ns).into()) {
            CsgNode::Transformation(CsgTransformation::Translation(t)) => t,
            _ => unreachable!(),
        }
    }

    pub fn create_csg_rotation(&mut self) -> &mut CsgRotation {
        match self.csg_nodes.create_with(|ns| CsgRotation::with_namespaces(ns).into()) {
            CsgNode::Transformation(CsgTransformation::Rotation(r)) => r,
            _ => unreachable!(),
        }
    }

    pub fn create_csg_scale(&mut self) -> &mut CsgScale {
        match self.csg_nodes.create_with(|ns| CsgScale::with_namespaces(ns).into()) {
            CsgNode::Transformation(CsgTransformation::Scale(s)) => s,
            _ => unreachable!(),
        }
    }

    pub fn remove_csg_node(&mut self, n: usize) -> Option<CsgNode> {
        self.csg_nodes.remove(n)
    }

    pub fn remove_csg_node_by_id(&mut self, id: &str) -> Option<CsgNode> {
        self.csg_nodes.remove_by_id(id)
    }

    pub fn num_csg_nodes(&self) -> usize {
        self.csg_nodes.len()
    }
}

impl Default for CsgSetOperator {
    fn default() -> Self {
        Self::with_namespaces(Package::Spatial.default_namespaces())
    }
}

impl SBase for CsgSetOperator {
    fn type_code(&self) -> TypeCode {
        TypeCode::SpatialCsgSetOperator
    }

    fn schema(&self) -> &'static ElementSchema {
        &CSG_SET_OPERATOR_SCHEMA
    }

    fn core(&self) -> &SBaseCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        &mut self.core
    }

    fn id_attribute(&self) -> Option<&str> {
        self.is_set_id().then_some(self.id.as_str())
    }

    fn name_attribute(&self) -> Option<&str> {
        self.is_set_name().then_some(self.name.as_str())
    }

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        if let Some(id) = reader.sid("id") {
            self.id = id;
        }
        if let Some(name) = reader.string("name") {
            self.name = name;
        }
        self.operation_type = reader.enumeration("operationType");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(operation) = self.operation_type {
            attributes.add("operationType", operation.as_attribute());
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_CSG_NODES_SCHEMA.element {
            return false;
        }
        if !self.csg_nodes.is_empty() {
            let details = format!("A <csgSetOperator> may only contain one <{}>.", node.name());
            log.log_package_error(
                SPATIAL_CSG_SET_OPERATOR_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.csg_nodes, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if !self.csg_nodes.is_empty() {
            out.push(write_element(&self.csg_nodes));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.csg_nodes as &dyn SBase]
    }

    fn has_required_elements(&self) -> bool {
        !self.csg_nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{check_consistency, get_element_by_sid};

    fn cube(id: &str) -> CsgNode {
        let mut p = CsgPrimitive::default();
        p.set_id(id).unwrap();
        p.set_primitive_type(super::super::PrimitiveKind::Cube).unwrap();
        p.into()
    }

    #[test]
    fn test_operation_type_values() {
        let mut op = CsgSetOperator::default();
        assert_eq!(op.operation_type(), None);
        op.set_operation_type_str("difference").unwrap();
        assert_eq!(op.operation_type(), Some(SetOperation::Difference));
        assert_eq!(op.set_operation_type_str("xor"), Err(OperationError::InvalidAttributeValue));
        assert_eq!(op.operation_type().map(|o| o.as_attribute()), Some("difference"));
    }

    #[test]
    fn test_list_rejects_duplicate_ids() {
        let mut op = CsgSetOperator::default();
        assert_eq!(op.add_csg_node(&cube("a")), Ok(()));
        assert_eq!(op.add_csg_node(&cube("a")), Err(OperationError::DuplicateObjectId));
        assert_eq!(op.add_csg_node(&cube("b")), Ok(()));
        assert_eq!(op.num_csg_nodes(), 2);
        assert!(op.remove_csg_node_by_id("a").is_some());
        assert_eq!(op.csg_node(0).and_then(|n| n.id_attribute()), Some("b"));
    }

    #[test]
    fn test_list_rejects_incomplete_node() {
        let mut op = CsgSetOperator::default();
        let mut p = CsgPrimitive::default();
        p.set_id("noshape").unwrap();
        assert_eq!(op.add_csg_node(&p.into()), Err(OperationError::InvalidObject));
    }

    #[test]
    fn test_empty_list_fails_consistency() {
        let mut op = CsgSetOperator::default();
        op.set_id("u").unwrap();
        op.set_operation_type(SetOperation::Union).unwrap();

        let mut log = ErrorLog::new();
        check_consistency(&op, &mut log);
        assert!(log.contains(SPATIAL_CSG_SET_OPERATOR_ALLOWED_ELEMENTS));
        assert!(write_element(&op).num_children() == 0);
    }

    #[test]
    fn test_tree_lookup_descends_into_nodes() {
        let mut op = CsgSetOperator::default();
        op.set_id("root").unwrap();
        let t = op.create_csg_translation();
        t.set_id("moved").unwrap();
        t.create_csg_primitive().set_id("deep").unwrap();

        let found = get_element_by_sid(&op, "deep");
        assert_eq!(found.map(|e| e.type_code()), Some(TypeCode::SpatialCsgPrimitive));
        assert!(get_element_by_sid(&op, "root").is_none());
    }
}
