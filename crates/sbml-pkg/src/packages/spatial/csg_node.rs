// crates/sbml-pkg/src/packages/spatial/csg_node.rs

use super::primitive::CsgPrimitive;
use super::set_operator::CsgSetOperator;
use super::transformation::{CsgRotation, CsgScale, CsgTransformation, CsgTranslation};
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::ElementSchema;
use crate::types::TypeCode;
use alloc::vec::Vec;

/// Any node of a CSG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CsgNode {
    Primitive(CsgPrimitive),
    Transformation(CsgTransformation),
    SetOperator(CsgSetOperator),
}

impl CsgNode {
    pub fn is_csg_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_csg_transformation(&self) -> bool {
        matches!(self, Self::Transformation(_))
    }

    pub fn is_csg_set_operator(&self) -> bool {
        matches!(self, Self::SetOperator(_))
    }

    pub fn is_csg_translation(&self) -> bool {
        matches!(self, Self::Transformation(t) if t.is_csg_translation())
    }

    pub fn is_csg_rotation(&self) -> bool {
        matches!(self, Self::Transformation(t) if t.is_csg_rotation())
    }

    pub fn is_csg_scale(&self) -> bool {
        matches!(self, Self::Transformation(t) if t.is_csg_scale())
    }

    pub fn as_csg_primitive(&self) -> Option<&CsgPrimitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_csg_primitive_mut(&mut self) -> Option<&mut CsgPrimitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_csg_transformation(&self) -> Option<&CsgTransformation> {
        match self {
            Self::Transformation(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_csg_transformation_mut(&mut self) -> Option<&mut CsgTransformation> {
        match self {
            Self::Transformation(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_csg_set_operator(&self) -> Option<&CsgSetOperator> {
        match self {
            Self::SetOperator(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_csg_set_operator_mut(&mut self) -> Option<&mut CsgSetOperator> {
        match self {
            Self::SetOperator(s) => Some(s),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        self.id_attribute().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name_attribute().unwrap_or("")
    }

    fn inner(&self) -> &dyn SBase {
        match self {
            Self::Primitive(p) => p,
            Self::Transformation(t) => t.inner(),
            Self::SetOperator(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SBase {
        match self {
            Self::Primitive(p) => p,
            Self::Transformation(t) => t.inner_mut(),
            Self::SetOperator(s) => s,
        }
    }
}

impl From<CsgPrimitive> for CsgNode {
    fn from(p: CsgPrimitive) -> Self {
        Self::Primitive(p)
    }
}

impl From<CsgSetOperator> for CsgNode {
    fn from(s: CsgSetOperator) -> Self {
        Self::SetOperator(s)
    }
}

impl From<CsgTransformation> for CsgNode {
    fn from(t: CsgTransformation) -> Self {
        Self::Transformation(t)
    }
}

impl From<CsgTranslation> for CsgNode {
    fn from(t: CsgTranslation) -> Self {
        Self::Transformation(t.into())
    }
}

impl From<CsgRotation> for CsgNode {
    fn from(r: CsgRotation) -> Self {
        Self::Transformation(r.into())
    }
}

impl From<CsgScale> for CsgNode {
    fn from(s: CsgScale) -> Self {
        Self::Transformation(s.into())
    }
}

impl SBase for CsgNode {
    fn type_code(&self) -> TypeCode {
        self.inner().type_code()
    }

    fn schema(&self) -> &'static ElementSchema {
        self.inner().schema()
    }

    fn core(&self) -> &SBaseCore {
        self.inner().core()
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        self.inner_mut().core_mut()
    }

    fn id_attribute(&self) -> Option<&str> {
        self.inner().id_attribute()
    }

    fn name_attribute(&self) -> Option<&str> {
        self.inner().name_attribute()
    }

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        self.inner_mut().read_attributes(reader);
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        self.inner().write_attributes(attributes);
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        self.inner_mut().create_object(node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        self.inner().write_elements(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.inner().children()
    }

    fn has_required_elements(&self) -> bool {
        self.inner().has_required_elements()
    }
}

impl ListItem for CsgNode {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        match name {
            "csgPrimitive" => Some(Self::Primitive(CsgPrimitive::with_namespaces(ns.clone()))),
            "csgSetOperator" => Some(Self::SetOperator(CsgSetOperator::with_namespaces(ns.clone()))),
            _ => CsgTransformation::create_item(name, ns).map(Self::Transformation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::Package;
    use crate::sbase::{read_item, write_element};

    #[test]
    fn test_create_item_by_tag() {
        let ns = Package::Spatial.default_namespaces();
        assert!(CsgNode::create_item("csgRotation", &ns).is_some_and(|n| n.is_csg_rotation()));
        assert!(CsgNode::create_item("csgSetOperator", &ns).is_some_and(|n| n.is_csg_set_operator()));
        assert!(CsgNode::create_item("csgNode", &ns).is_none());
    }

    #[test]
    fn test_read_written_tree() {
        let mut op = CsgSetOperator::default();
        op.set_id("shape").unwrap();
        op.set_operation_type(super::super::SetOperation::Union).unwrap();
        let scale = op.create_csg_scale();
        scale.set_id("wide").unwrap();
        scale.set_scale_x(2.5).unwrap();
        let ball = scale.create_csg_primitive();
        ball.set_id("ball").unwrap();
        ball.set_primitive_type(super::super::PrimitiveKind::Sphere).unwrap();
        let original = CsgNode::from(op);

        let node = write_element(&original);
        let mut log = ErrorLog::new();
        let read: Option<CsgNode> = read_item(&node, &Package::Spatial.default_namespaces(), &mut log);
        assert!(log.is_empty());
        assert_eq!(read.as_ref(), Some(&original));
        assert_eq!(original.id(), "shape");
        assert_eq!(original.name(), "");
    }
}
