// crates/sbml-pkg/src/packages/spatial/primitive.rs

use super::errors::*;
use crate::attributes::{AttributeEnum, AttributeReader, XmlAttributes};
use crate::namespaces::{Namespaces, Package};
use crate::sbase::{SBase, SBaseCore};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::{OperationError, OperationResult};
use crate::types::TypeCode;
use alloc::string::String;
use core::fmt;

/// The shape of a [`CsgPrimitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    Cube,
    Cylinder,
    Cone,
    Circle,
    Square,
    RightTriangle,
}

impl PrimitiveKind {
    pub const VALUES: &'static [&'static str] = &[
        "sphere",
        "cube",
        "cylinder",
        "cone",
        "circle",
        "square",
        "rightTriangle",
    ];

    /// `true` for the two-dimensional shapes.
    pub fn is_planar(self) -> bool {
        matches!(self, Self::Circle | Self::Square | Self::RightTriangle)
    }
}

impl AttributeEnum for PrimitiveKind {
    fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "sphere" => Some(Self::Sphere),
            "cube" => Some(Self::Cube),
            "cylinder" => Some(Self::Cylinder),
            "cone" => Some(Self::Cone),
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "rightTriangle" => Some(Self::RightTriangle),
            _ => None,
        }
    }

    fn as_attribute(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::RightTriangle => "rightTriangle",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute())
    }
}

pub static CSG_PRIMITIVE_SCHEMA: ElementSchema = ElementSchema {
    element: "csgPrimitive",
    errors: ElementErrors {
        allowed_core_attributes: SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SPATIAL_CSG_PRIMITIVE_ALLOWED_ATTRIBUTES,
        allowed_elements: SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ELEMENTS,
        id_syntax: SPATIAL_ID_SYNTAX_RULE,
        duplicate_id: SPATIAL_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, SPATIAL_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SPATIAL_CSG_PRIMITIVE_NAME_MUST_BE_STRING),
            AttributeSpec::required(
                "primitiveType",
                AttributeKind::Enum(PrimitiveKind::VALUES),
                SPATIAL_CSG_PRIMITIVE_PRIMITIVE_TYPE_MUST_BE_PRIMITIVE_KIND_ENUM,
            ),
        ],
    }],
};

/// A leaf of a CSG tree: a unit shape centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgPrimitive {
    core: SBaseCore,
    id: String,
    name: String,
    primitive_type: Option<PrimitiveKind>,
}

impl CsgPrimitive {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Spatial, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            primitive_type: None,
        }
    }

    id_name_accessors!();

    pub fn primitive_type(&self) -> Option<PrimitiveKind> {
        self.primitive_type
    }

    pub fn is_set_primitive_type(&self) -> bool {
        self.primitive_type.is_some()
    }

    pub fn set_primitive_type(&mut self, kind: PrimitiveKind) -> OperationResult {
        self.primitive_type = Some(kind);
        Ok(())
    }

    /// Sets the shape from its attribute spelling, e.g. `"rightTriangle"`.
    pub fn set_primitive_type_str(&mut self, value: &str) -> OperationResult {
        let kind = PrimitiveKind::from_attribute(value).ok_or(OperationError::InvalidAttributeValue)?;
        self.set_primitive_type(kind)
    }

    pub fn unset_primitive_type(&mut self) -> OperationResult {
        self.primitive_type = None;
        Ok(())
    }
}

impl Default for CsgPrimitive {
    fn default() -> Self {
        Self::with_namespaces(Package::Spatial.default_namespaces())
    }
}

impl SBase for CsgPrimitive {
    fn type_code(&self) -> TypeCode {
        TypeCode::SpatialCsgPrimitive
    }

    fn schema(&self) -> &'static ElementSchema {
        &CSG_PRIMITIVE_SCHEMA
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
        self.primitive_type = reader.enumeration("primitiveType");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(kind) = self.primitive_type {
            attributes.add("primitiveType", kind.as_attribute());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorLog;
    use crate::node::XmlNode;
    use crate::sbase::{read_element, write_element};

    #[test]
    fn test_primitive_type_from_string() {
        let mut p = CsgPrimitive::default();
        assert_eq!(p.primitive_type(), None);
        assert_eq!(p.set_primitive_type_str("hexagon"), Err(OperationError::InvalidAttributeValue));
        p.set_primitive_type_str("rightTriangle").unwrap();
        assert_eq!(p.primitive_type(), Some(PrimitiveKind::RightTriangle));
        assert!(p.primitive_type().is_some_and(PrimitiveKind::is_planar));
    }

    #[test]
    fn test_required_attributes() {
        let mut p = CsgPrimitive::default();
        p.set_id("ball").unwrap();
        assert!(!p.has_required_attributes());
        p.set_primitive_type(PrimitiveKind::Sphere).unwrap();
        assert!(p.has_required_attributes());

        let node = write_element(&p);
        assert_eq!(node.attributes().get_prefixed("spatial", "primitiveType"), Some("sphere"));
    }

    #[test]
    fn test_bad_enum_value_is_logged() {
        let mut node = XmlNode::new("csgPrimitive");
        node.attributes_mut().add("id", "p");
        node.attributes_mut().add("primitiveType", "blob");

        let mut p = CsgPrimitive::default();
        let mut log = ErrorLog::new();
        read_element(&mut p, &node, &mut log);
        assert_eq!(p.id(), "p");
        assert!(!p.is_set_primitive_type());
        assert!(log.contains(SPATIAL_CSG_PRIMITIVE_PRIMITIVE_TYPE_MUST_BE_PRIMITIVE_KIND_ENUM));
    }
}
