// crates/sbml-pkg/src/packages/spatial/transformation.rs

use super::check_attachable;
use super::csg_node::CsgNode;
use super::errors::*;
use super::primitive::CsgPrimitive;
use super::set_operator::CsgSetOperator;
use crate::attributes::{AttributeReader, XmlAttributes, format_double};
use crate::error::ErrorLog;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore, read_item, write_element};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

// --- Child slot ---

/// Reads the single wrapped node. Returns `false` for tags that are not CSG nodes.
fn read_child(
    slot: &mut Option<Box<CsgNode>>,
    schema: &ElementSchema,
    ns: &Namespaces,
    node: &XmlNode,
    log: &mut ErrorLog,
) -> bool {
    if CsgNode::create_item(node.name(), ns).is_none() {
        return false;
    }
    if slot.is_some() {
        let details = format!(
            "A <{}> may only contain one CSG node, found a second <{}>.",
            schema.element,
            node.name()
        );
        log.log_package_error(schema.errors.allowed_elements, ns, &details, node.line(), node.column());
        return true;
    }
    *slot = read_item::<CsgNode>(node, ns, log).map(Box::new);
    true
}

fn write_child(slot: &Option<Box<CsgNode>>, out: &mut Vec<XmlNode>) {
    if let Some(child) = slot {
        out.push(write_element(child.as_ref()));
    }
}

fn child_refs(slot: &Option<Box<CsgNode>>) -> Vec<&dyn SBase> {
    slot.as_deref().map(|n| n as &dyn SBase).into_iter().collect()
}

/// Accessors for the wrapped node, stored in a `node: Option<Box<CsgNode>>` field.
macro_rules! csg_child_accessors {
    () => {
        pub fn csg_node(&self) -> Option<&CsgNode> {
            self.node.as_deref()
        }

        pub fn csg_node_mut(&mut self) -> Option<&mut CsgNode> {
            self.node.as_deref_mut()
        }

        pub fn is_set_csg_node(&self) -> bool {
            self.node.is_some()
        }

        /// Stores a copy of `node`, replacing any existing child.
        pub fn set_csg_node(&mut self, node: &CsgNode) -> OperationResult {
            check_attachable(self.core.namespaces(), node.namespaces())?;
            self.node = Some(Box::new(node.clone()));
            Ok(())
        }

        /// Detaches and returns the wrapped node.
        pub fn unset_csg_node(&mut self) -> Option<CsgNode> {
            self.node.take().map(|n| *n)
        }

        pub fn create_csg_primitive(&mut self) -> &mut CsgPrimitive {
            let ns = self.core.namespaces().clone();
            match &mut **self.node.insert(Box::new(CsgPrimitive::with_namespaces(ns).into())) {
                CsgNode::Primitive(p) => p,
                _ => unreachable!(),
            }
        }

        pub fn create_csg_set_operator(&mut self) -> &mut CsgSetOperator {
            let ns = self.core.namespaces().clone();
            match &mut **self.node.insert(Box::new(CsgSetOperator::with_namespaces(ns).into())) {
                CsgNode::SetOperator(s) => s,
                _ => unreachable!(),
            }
        }

        pub fn create_csg_translation(&mut self) -> &mut CsgTranslation {
            let ns = self.core.namespaces().clone();
            match &mut **self.node.insert(Box::new(CsgTranslation::with_namespaces(ns).into())) {
                CsgNode::Transformation(CsgTransformation::Translation(t)) => t,
                _ => unreachable!(),
            }
        }

        pub fn create_csg_rotation(&mut self) -> &mut CsgRotation {
            let ns = self.core.namespaces().clone();
            match &mut **self.node.insert(Box::new(CsgRotation::with_namespaces(ns).into())) {
                CsgNode::Transformation(CsgTransformation::Rotation(r)) => r,
                _ => unreachable!(),
            }
        }

        pub fn create_csg_scale(&mut self) -> &mut CsgScale {
            let ns = self.core.namespaces().clone();
            match &mut **self.node.insert(Box::new(CsgScale::with_namespaces(ns).into())) {
                CsgNode::Transformation(CsgTransformation::Scale(s)) => s,
                _ => unreachable!(),
            }
        }
    };
}

// --- csgTranslation ---

pub static CSG_TRANSLATION_SCHEMA: ElementSchema = ElementSchema {
    element: "csgTranslation",
    errors: ElementErrors {
        allowed_core_attributes: SPATIAL_CSG_TRANSLATION_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SPATIAL_CSG_TRANSLATION_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SPATIAL_CSG_TRANSLATION_ALLOWED_ATTRIBUTES,
        allowed_elements: SPATIAL_CSG_TRANSLATION_ALLOWED_ELEMENTS,
        id_syntax: SPATIAL_ID_SYNTAX_RULE,
        duplicate_id: SPATIAL_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, SPATIAL_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SPATIAL_CSG_TRANSLATION_NAME_MUST_BE_STRING),
            AttributeSpec::required(
                "translateX",
                AttributeKind::Double,
                SPATIAL_CSG_TRANSLATION_TRANSLATE_X_MUST_BE_DOUBLE,
            ),
            AttributeSpec::optional(
                "translateY",
                AttributeKind::Double,
                SPATIAL_CSG_TRANSLATION_TRANSLATE_Y_MUST_BE_DOUBLE,
            ),
            AttributeSpec::optional(
                "translateZ",
                AttributeKind::Double,
                SPATIAL_CSG_TRANSLATION_TRANSLATE_Z_MUST_BE_DOUBLE,
            ),
        ],
    }],
};

/// Moves its child node by a vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgTranslation {
    core: SBaseCore,
    id: String,
    name: String,
    translate_x: Option<f64>,
    translate_y: Option<f64>,
    translate_z: Option<f64>,
    node: Option<Box<CsgNode>>,
}

impl CsgTranslation {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Spatial, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            translate_x: None,
            translate_y: None,
            translate_z: None,
            node: None,
        }
    }

    id_name_accessors!();

    double_accessors! {
        translate_x, is_set_translate_x, set_translate_x, unset_translate_x;
        translate_y, is_set_translate_y, set_translate_y, unset_translate_y;
        translate_z, is_set_translate_z, set_translate_z, unset_translate_z;
    }

    csg_child_accessors!();
}

impl Default for CsgTranslation {
    fn default() -> Self {
        Self::with_namespaces(Package::Spatial.default_namespaces())
    }
}

impl SBase for CsgTranslation {
    fn type_code(&self) -> TypeCode {
        TypeCode::SpatialCsgTranslation
    }

    fn schema(&self) -> &'static ElementSchema {
        &CSG_TRANSLATION_SCHEMA
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
        self.translate_x = reader.double("translateX");
        self.translate_y = reader.double("translateY");
        self.translate_z = reader.double("translateZ");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(x) = self.translate_x {
            attributes.add("translateX", format_double(x));
        }
        if let Some(y) = self.translate_y {
            attributes.add("translateY", format_double(y));
        }
        if let Some(z) = self.translate_z {
            attributes.add("translateZ", format_double(z));
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        let ns = self.core.namespaces().clone();
        read_child(&mut self.node, &CSG_TRANSLATION_SCHEMA, &ns, node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        write_child(&self.node, out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        child_refs(&self.node)
    }

    fn has_required_elements(&self) -> bool {
        self.node.is_some()
    }
}

// --- csgRotation ---

pub static CSG_ROTATION_SCHEMA: ElementSchema = ElementSchema {
    element: "csgRotation",
    errors: ElementErrors {
        allowed_core_attributes: SPATIAL_CSG_ROTATION_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SPATIAL_CSG_ROTATION_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SPATIAL_CSG_ROTATION_ALLOWED_ATTRIBUTES,
        allowed_elements: SPATIAL_CSG_ROTATION_ALLOWED_ELEMENTS,
        id_syntax: SPATIAL_ID_SYNTAX_RULE,
        duplicate_id: SPATIAL_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, SPATIAL_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SPATIAL_CSG_ROTATION_NAME_MUST_BE_STRING),
            AttributeSpec::required(
                "rotateAxisX",
                AttributeKind::Double,
                SPATIAL_CSG_ROTATION_ROTATE_AXIS_X_MUST_BE_DOUBLE,
            ),
            AttributeSpec::optional(
                "rotateAxisY",
                AttributeKind::Double,
                SPATIAL_CSG_ROTATION_ROTATE_AXIS_Y_MUST_BE_DOUBLE,
            ),
            AttributeSpec::optional(
                "rotateAxisZ",
                AttributeKind::Double,
                SPATIAL_CSG_ROTATION_ROTATE_AXIS_Z_MUST_BE_DOUBLE,
            ),
            AttributeSpec::required(
                "rotateAngleInRadians",
                AttributeKind::Double,
                SPATIAL_CSG_ROTATION_ROTATE_ANGLE_MUST_BE_DOUBLE,
            ),
        ],
    }],
};

/// Rotates its child node about an axis through the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgRotation {
    core: SBaseCore,
    id: String,
    name: String,
    rotate_axis_x: Option<f64>,
    rotate_axis_y: Option<f64>,
    rotate_axis_z: Option<f64>,
    rotate_angle_in_radians: Option<f64>,
    node: Option<Box<CsgNode>>,
}

impl CsgRotation {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Spatial, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            rotate_axis_x: None,
            rotate_axis_y: None,
            rotate_axis_z: None,
            rotate_angle_in_radians: None,
            node: None,
        }
    }

    id_name_accessors!();

    double_accessors! {
        rotate_axis_x, is_set_rotate_axis_x, set_rotate_axis_x, unset_rotate_axis_x;
        rotate_axis_y, is_set_rotate_axis_y, set_rotate_axis_y, unset_rotate_axis_y;
        rotate_axis_z, is_set_rotate_axis_z, set_rotate_axis_z, unset_rotate_axis_z;
        rotate_angle_in_radians, is_set_rotate_angle_in_radians, set_rotate_angle_in_radians,
            unset_rotate_angle_in_radians;
    }

    csg_child_accessors!();
}

impl Default for CsgRotation {
    fn default() -> Self {
        Self::with_namespaces(Package::Spatial.default_namespaces())
    }
}

impl SBase for CsgRotation {
    fn type_code(&self) -> TypeCode {
        TypeCode::SpatialCsgRotation
    }

    fn schema(&self) -> &'static ElementSchema {
        &CSG_ROTATION_SCHEMA
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
        self.rotate_axis_x = reader.double("rotateAxisX");
        self.rotate_axis_y = reader.double("rotateAxisY");
        self.rotate_axis_z = reader.double("rotateAxisZ");
        self.rotate_angle_in_radians = reader.double("rotateAngleInRadians");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(x) = self.rotate_axis_x {
            attributes.add("rotateAxisX", format_double(x));
        }
        if let Some(y) = self.rotate_axis_y {
            attributes.add("rotateAxisY", format_double(y));
        }
        if let Some(z) = self.rotate_axis_z {
            attributes.add("rotateAxisZ", format_double(z));
        }
        if let Some(angle) = self.rotate_angle_in_radians {
            attributes.add("rotateAngleInRadians", format_double(angle));
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        let ns = self.core.namespaces().clone();
        read_child(&mut self.node, &CSG_ROTATION_SCHEMA, &ns, node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        write_child(&self.node, out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        child_refs(&self.node)
    }

    fn has_required_elements(&self) -> bool {
        self.node.is_some()
    }
}

// --- csgScale ---

pub static CSG_SCALE_SCHEMA: ElementSchema = ElementSchema {
    element: "csgScale",
    errors: ElementErrors {
        allowed_core_attributes: SPATIAL_CSG_SCALE_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SPATIAL_CSG_SCALE_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SPATIAL_CSG_SCALE_ALLOWED_ATTRIBUTES,
        allowed_elements: SPATIAL_CSG_SCALE_ALLOWED_ELEMENTS,
        id_syntax: SPATIAL_ID_SYNTAX_RULE,
        duplicate_id: SPATIAL_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, SPATIAL_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SPATIAL_CSG_SCALE_NAME_MUST_BE_STRING),
            AttributeSpec::required("scaleX", AttributeKind::Double, SPATIAL_CSG_SCALE_SCALE_X_MUST_BE_DOUBLE),
            AttributeSpec::optional("scaleY", AttributeKind::Double, SPATIAL_CSG_SCALE_SCALE_Y_MUST_BE_DOUBLE),
            AttributeSpec::optional("scaleZ", AttributeKind::Double, SPATIAL_CSG_SCALE_SCALE_Z_MUST_BE_DOUBLE),
        ],
    }],
};

/// Scales its child node along each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CsgScale {
    core: SBaseCore,
    id: String,
    name: String,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    scale_z: Option<f64>,
    node: Option<Box<CsgNode>>,
}

impl CsgScale {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Spatial, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            scale_x: None,
            scale_y: None,
            scale_z: None,
            node: None,
        }
    }

    id_name_accessors!();

    double_accessors! {
        scale_x, is_set_scale_x, set_scale_x, unset_scale_x;
        scale_y, is_set_scale_y, set_scale_y, unset_scale_y;
        scale_z, is_set_scale_z, set_scale_z, unset_scale_z;
    }

    csg_child_accessors!();
}

impl Default for CsgScale {
    fn default() -> Self {
        Self::with_namespaces(Package::Spatial.default_namespaces())
    }
}

impl SBase for CsgScale {
    fn type_code(&self) -> TypeCode {
        TypeCode::SpatialCsgScale
    }

    fn schema(&self) -> &'static ElementSchema {
        &CSG_SCALE_SCHEMA
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
        self.scale_x = reader.double("scaleX");
        self.scale_y = reader.double("scaleY");
        self.scale_z = reader.double("scaleZ");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(x) = self.scale_x {
            attributes.add("scaleX", format_double(x));
        }
        if let Some(y) = self.scale_y {
            attributes.add("scaleY", format_double(y));
        }
        if let Some(z) = self.scale_z {
            attributes.add("scaleZ", format_double(z));
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        let ns = self.core.namespaces().clone();
        read_child(&mut self.node, &CSG_SCALE_SCHEMA, &ns, node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        write_child(&self.node, out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        child_refs(&self.node)
    }

    fn has_required_elements(&self) -> bool {
        self.node.is_some()
    }
}

// --- Variant ---

/// A CSG node that wraps exactly one other node.
#[derive(Debug, Clone, PartialEq)]
pub enum CsgTransformation {
    Translation(CsgTranslation),
    Rotation(CsgRotation),
    Scale(CsgScale),
}

impl CsgTransformation {
    pub fn is_csg_translation(&self) -> bool {
        matches!(self, Self::Translation(_))
    }

    pub fn is_csg_rotation(&self) -> bool {
        matches!(self, Self::Rotation(_))
    }

    pub fn is_csg_scale(&self) -> bool {
        matches!(self, Self::Scale(_))
    }

    pub fn as_csg_translation(&self) -> Option<&CsgTranslation> {
        match self {
            Self::Translation(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_csg_translation_mut(&mut self) -> Option<&mut CsgTranslation> {
        match self {
            Self::Translation(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_csg_rotation(&self) -> Option<&CsgRotation> {
        match self {
            Self::Rotation(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_csg_rotation_mut(&mut self) -> Option<&mut CsgRotation> {
        match self {
            Self::Rotation(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_csg_scale(&self) -> Option<&CsgScale> {
        match self {
            Self::Scale(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_csg_scale_mut(&mut self) -> Option<&mut CsgScale> {
        match self {
            Self::Scale(s) => Some(s),
            _ => None,
        }
    }

    /// The wrapped node of whichever transformation this is.
    pub fn csg_node(&self) -> Option<&CsgNode> {
        match self {
            Self::Translation(t) => t.csg_node(),
            Self::Rotation(r) => r.csg_node(),
            Self::Scale(s) => s.csg_node(),
        }
    }

    pub fn csg_node_mut(&mut self) -> Option<&mut CsgNode> {
        match self {
            Self::Translation(t) => t.csg_node_mut(),
            Self::Rotation(r) => r.csg_node_mut(),
            Self::Scale(s) => s.csg_node_mut(),
        }
    }

    pub fn set_csg_node(&mut self, node: &CsgNode) -> OperationResult {
        match self {
            Self::Translation(t) => t.set_csg_node(node),
            Self::Rotation(r) => r.set_csg_node(node),
            Self::Scale(s) => s.set_csg_node(node),
        }
    }

    pub(crate) fn inner(&self) -> &dyn SBase {
        match self {
            Self::Translation(t) => t,
            Self::Rotation(r) => r,
            Self::Scale(s) => s,
        }
    }

    pub(crate) fn inner_mut(&mut self) -> &mut dyn SBase {
        match self {
            Self::Translation(t) => t,
            Self::Rotation(r) => r,
            Self::Scale(s) => s,
        }
    }
}

impl From<CsgTranslation> for CsgTransformation {
    fn from(t: CsgTranslation) -> Self {
        Self::Translation(t)
    }
}

impl From<CsgRotation> for CsgTransformation {
    fn from(r: CsgRotation) -> Self {
        Self::Rotation(r)
    }
}

impl From<CsgScale> for CsgTransformation {
    fn from(s: CsgScale) -> Self {
        Self::Scale(s)
    }
}

impl SBase for CsgTransformation {
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

impl ListItem for CsgTransformation {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        match name {
            "csgTranslation" => Some(Self::Translation(CsgTranslation::with_namespaces(ns.clone()))),
            "csgRotation" => Some(Self::Rotation(CsgRotation::with_namespaces(ns.clone()))),
            "csgScale" => Some(Self::Scale(CsgScale::with_namespaces(ns.clone()))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbase::read_element;
    use crate::status::OperationError;
    use crate::tree::check_consistency;

    #[test]
    fn test_rotation_required_attributes() {
        let mut r = CsgRotation::default();
        r.set_id("turn").unwrap();
        r.set_rotate_axis_x(1.0).unwrap();
        assert!(!r.has_required_attributes());
        r.set_rotate_angle_in_radians(core::f64::consts::FRAC_PI_2).unwrap();
        assert!(r.has_required_attributes());
        assert!(r.rotate_axis_y().is_nan());
    }

    #[test]
    fn test_missing_child_fails_consistency() {
        let mut t = CsgTranslation::default();
        t.set_id("shift").unwrap();
        t.set_translate_x(2.0).unwrap();

        let mut log = ErrorLog::new();
        check_consistency(&t, &mut log);
        assert!(log.contains(SPATIAL_CSG_TRANSLATION_ALLOWED_ELEMENTS));

        t.create_csg_primitive().set_id("cube").unwrap();
        assert!(t.has_required_elements());
        assert!(t.csg_node().is_some_and(CsgNode::is_csg_primitive));
    }

    #[test]
    fn test_nested_transformations() {
        let mut scale = CsgScale::default();
        scale.set_id("big").unwrap();
        scale.set_scale_x(3.0).unwrap();
        let rotation = scale.create_csg_rotation();
        rotation.set_id("spin").unwrap();
        rotation.create_csg_primitive().set_id("shape").unwrap();

        let inner = scale.csg_node().and_then(CsgNode::as_csg_transformation);
        assert!(inner.is_some_and(CsgTransformation::is_csg_rotation));
        let leaf = inner.and_then(CsgTransformation::csg_node);
        assert_eq!(leaf.and_then(|n| n.id_attribute()), Some("shape"));
    }

    #[test]
    fn test_read_second_child_reported() {
        let mut node = XmlNode::new("csgScale");
        node.attributes_mut().add("id", "s");
        node.attributes_mut().add("scaleX", "2");
        for id in ["a", "b"] {
            let mut child = XmlNode::new("csgPrimitive");
            child.attributes_mut().add("id", id);
            child.attributes_mut().add("primitiveType", "cube");
            node.add_child(child);
        }

        let mut scale = CsgScale::default();
        let mut log = ErrorLog::new();
        read_element(&mut scale, &node, &mut log);
        assert_eq!(scale.scale_x(), 2.0);
        assert_eq!(scale.csg_node().and_then(|n| n.id_attribute()), Some("a"));
        assert!(log.contains(SPATIAL_CSG_SCALE_ALLOWED_ELEMENTS));
    }

    #[test]
    fn test_set_child_checks_namespaces() {
        let mut t = CsgTranslation::default();
        let foreign = CsgNode::from(CsgPrimitive::new(3, 2, 1));
        assert_eq!(t.set_csg_node(&foreign), Err(OperationError::VersionMismatch));
        assert!(t.unset_csg_node().is_none());
    }
}
