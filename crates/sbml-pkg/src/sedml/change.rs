// crates/sbml-pkg/src/sedml/change.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::packages::id_name_accessors;
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub static CHANGE_ATTRIBUTE_SCHEMA: ElementSchema = ElementSchema {
    element: "changeAttribute",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_CHANGE_ATTRIBUTE_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SEDML_CHANGE_ATTRIBUTE_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SEDML_CHANGE_ATTRIBUTE_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_CHANGE_ATTRIBUTE_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 1,
        versions: (1, 4),
        pkg_version: None,
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, SEDML_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SEDML_CHANGE_ATTRIBUTE_NAME_MUST_BE_STRING),
            AttributeSpec::required("target", AttributeKind::String, SEDML_CHANGE_ATTRIBUTE_TARGET_MUST_BE_STRING),
            AttributeSpec::required(
                "newValue",
                AttributeKind::String,
                SEDML_CHANGE_ATTRIBUTE_NEW_VALUE_MUST_BE_STRING,
            ),
        ],
    }],
};

pub static REMOVE_XML_SCHEMA: ElementSchema = ElementSchema {
    element: "removeXML",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_REMOVE_XML_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SEDML_REMOVE_XML_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SEDML_REMOVE_XML_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_REMOVE_XML_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 1,
        versions: (1, 4),
        pkg_version: None,
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, SEDML_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SEDML_REMOVE_XML_NAME_MUST_BE_STRING),
            AttributeSpec::required("target", AttributeKind::String, SEDML_REMOVE_XML_TARGET_MUST_BE_STRING),
        ],
    }],
};

pub static ADD_XML_SCHEMA: ElementSchema = ElementSchema {
    element: "addXML",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_ADD_XML_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SEDML_ADD_XML_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SEDML_ADD_XML_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_ADD_XML_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 1,
        versions: (1, 4),
        pkg_version: None,
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, SEDML_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SEDML_ADD_XML_NAME_MUST_BE_STRING),
            AttributeSpec::required("target", AttributeKind::String, SEDML_ADD_XML_TARGET_MUST_BE_STRING),
        ],
    }],
};

const NEW_XML: &str = "newXML";

/// Reads the attributes the three change classes share.
fn read_common(reader: &mut AttributeReader<'_>, id: &mut String, name: &mut String, target: &mut String) {
    if let Some(value) = reader.sid("id") {
        *id = value;
    }
    if let Some(value) = reader.string("name") {
        *name = value;
    }
    if let Some(value) = reader.string("target") {
        *target = value;
    }
}

fn write_common(attributes: &mut XmlAttributes, id: &str, name: &str, target: &str) {
    for (key, value) in [("id", id), ("name", name), ("target", target)] {
        if !value.is_empty() {
            attributes.add(key, value);
        }
    }
}

// --- changeAttribute ---

/// Sets the attribute addressed by `target` to `newValue`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeAttribute {
    core: SBaseCore,
    id: String,
    name: String,
    target: String,
    new_value: String,
}

impl ChangeAttribute {
    pub fn new(level: u32, version: u32) -> Self {
        Self::with_namespaces(Namespaces::sedml(level, version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            target: String::new(),
            new_value: String::new(),
        }
    }

    id_name_accessors!();

    string_accessors! {
        target, is_set_target, set_target, unset_target;
        new_value, is_set_new_value, set_new_value, unset_new_value;
    }
}

impl Default for ChangeAttribute {
    fn default() -> Self {
        Self::with_namespaces(super::default_namespaces())
    }
}

impl SBase for ChangeAttribute {
    fn type_code(&self) -> TypeCode {
        TypeCode::SedChangeAttribute
    }

    fn schema(&self) -> &'static ElementSchema {
        &CHANGE_ATTRIBUTE_SCHEMA
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
        read_common(reader, &mut self.id, &mut self.name, &mut self.target);
        if let Some(value) = reader.string("newValue") {
            self.new_value = value;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        write_common(attributes, &self.id, &self.name, &self.target);
        if self.is_set_new_value() {
            attributes.add("newValue", &self.new_value);
        }
    }
}

// --- removeXML ---

/// Removes the XML element addressed by `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveXml {
    core: SBaseCore,
    id: String,
    name: String,
    target: String,
}

impl RemoveXml {
    pub fn new(level: u32, version: u32) -> Self {
        Self::with_namespaces(Namespaces::sedml(level, version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            target: String::new(),
        }
    }

    id_name_accessors!();

    string_accessors! {
        target, is_set_target, set_target, unset_target;
    }
}

impl Default for RemoveXml {
    fn default() -> Self {
        Self::with_namespaces(super::default_namespaces())
    }
}

impl SBase for RemoveXml {
    fn type_code(&self) -> TypeCode {
        TypeCode::SedRemoveXml
    }

    fn schema(&self) -> &'static ElementSchema {
        &REMOVE_XML_SCHEMA
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
        read_common(reader, &mut self.id, &mut self.name, &mut self.target);
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        write_common(attributes, &self.id, &self.name, &self.target);
    }
}

// --- addXML ---

/// Inserts the content of `<newXML>` as a child of the element addressed by `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddXml {
    core: SBaseCore,
    id: String,
    name: String,
    target: String,
    new_xml: Option<XmlNode>,
}

impl AddXml {
    pub fn new(level: u32, version: u32) -> Self {
        Self::with_namespaces(Namespaces::sedml(level, version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            target: String::new(),
            new_xml: None,
        }
    }

    id_name_accessors!();

    string_accessors! {
        target, is_set_target, set_target, unset_target;
    }

    /// The whole `<newXML>` element.
    pub fn new_xml(&self) -> Option<&XmlNode> {
        self.new_xml.as_ref()
    }

    pub fn is_set_new_xml(&self) -> bool {
        self.new_xml.is_some()
    }

    /// Stores `xml`. A node that is not itself a `<newXML>` element becomes
    /// the content of one.
    pub fn set_new_xml(&mut self, xml: XmlNode) -> OperationResult {
        let mut xml = if xml.name() == NEW_XML {
            xml
        } else {
            let mut wrapper = XmlNode::new(NEW_XML);
            wrapper.add_child(xml);
            wrapper
        };
        xml.set_prefix(None);
        self.new_xml = Some(xml);
        Ok(())
    }

    pub fn unset_new_xml(&mut self) -> OperationResult {
        self.new_xml = None;
        Ok(())
    }
}

impl Default for AddXml {
    fn default() -> Self {
        Self::with_namespaces(super::default_namespaces())
    }
}

impl SBase for AddXml {
    fn type_code(&self) -> TypeCode {
        TypeCode::SedAddXml
    }

    fn schema(&self) -> &'static ElementSchema {
        &ADD_XML_SCHEMA
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
        read_common(reader, &mut self.id, &mut self.name, &mut self.target);
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        write_common(attributes, &self.id, &self.name, &self.target);
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != NEW_XML {
            return false;
        }
        if self.is_set_new_xml() {
            let details = format!("An <addXML> may only contain one <{}>.", NEW_XML);
            log.log_package_error(
                SEDML_ADD_XML_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
            return true;
        }
        let _ = self.set_new_xml(node.clone());
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if let Some(xml) = &self.new_xml {
            out.push(xml.clone());
        }
    }

    fn has_required_elements(&self) -> bool {
        self.is_set_new_xml()
    }
}

// --- Variant ---

/// One entry of a `<listOfChanges>`.
#[derive(Debug, Clone, PartialEq)]
pub enum SedChange {
    ChangeAttribute(ChangeAttribute),
    RemoveXml(RemoveXml),
    AddXml(AddXml),
}

impl SedChange {
    pub fn is_change_attribute(&self) -> bool {
        matches!(self, Self::ChangeAttribute(_))
    }

    pub fn is_remove_xml(&self) -> bool {
        matches!(self, Self::RemoveXml(_))
    }

    pub fn is_add_xml(&self) -> bool {
        matches!(self, Self::AddXml(_))
    }

    pub fn as_change_attribute(&self) -> Option<&ChangeAttribute> {
        match self {
            Self::ChangeAttribute(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_change_attribute_mut(&mut self) -> Option<&mut ChangeAttribute> {
        match self {
            Self::ChangeAttribute(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_remove_xml(&self) -> Option<&RemoveXml> {
        match self {
            Self::RemoveXml(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_remove_xml_mut(&mut self) -> Option<&mut RemoveXml> {
        match self {
            Self::RemoveXml(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_add_xml(&self) -> Option<&AddXml> {
        match self {
            Self::AddXml(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_add_xml_mut(&mut self) -> Option<&mut AddXml> {
        match self {
            Self::AddXml(c) => Some(c),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        self.id_attribute().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name_attribute().unwrap_or("")
    }

    /// The XPath of the element the change applies to.
    pub fn target(&self) -> &str {
        match self {
            Self::ChangeAttribute(c) => c.target(),
            Self::RemoveXml(c) => c.target(),
            Self::AddXml(c) => c.target(),
        }
    }

    pub fn set_target(&mut self, target: &str) -> OperationResult {
        match self {
            Self::ChangeAttribute(c) => c.set_target(target),
            Self::RemoveXml(c) => c.set_target(target),
            Self::AddXml(c) => c.set_target(target),
        }
    }

    fn inner(&self) -> &dyn SBase {
        match self {
            Self::ChangeAttribute(c) => c,
            Self::RemoveXml(c) => c,
            Self::AddXml(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SBase {
        match self {
            Self::ChangeAttribute(c) => c,
            Self::RemoveXml(c) => c,
            Self::AddXml(c) => c,
        }
    }
}

impl From<ChangeAttribute> for SedChange {
    fn from(c: ChangeAttribute) -> Self {
        Self::ChangeAttribute(c)
    }
}

impl From<RemoveXml> for SedChange {
    fn from(c: RemoveXml) -> Self {
        Self::RemoveXml(c)
    }
}

impl From<AddXml> for SedChange {
    fn from(c: AddXml) -> Self {
        Self::AddXml(c)
    }
}

impl SBase for SedChange {
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

    fn has_required_elements(&self) -> bool {
        self.inner().has_required_elements()
    }
}

impl ListItem for SedChange {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        match name {
            "changeAttribute" => Some(Self::ChangeAttribute(ChangeAttribute::with_namespaces(ns.clone()))),
            "removeXML" => Some(Self::RemoveXml(RemoveXml::with_namespaces(ns.clone()))),
            "addXML" => Some(Self::AddXml(AddXml::with_namespaces(ns.clone()))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbase::{read_item, write_element};

    #[test]
    fn test_variant_predicates() {
        let change = SedChange::from(RemoveXml::default());
        assert!(change.is_remove_xml());
        assert!(!change.is_add_xml());
        assert!(change.as_change_attribute().is_none());
        assert_eq!(change.type_code(), TypeCode::SedRemoveXml);
        assert_eq!(change.element_name(), "removeXML");
    }

    #[test]
    fn test_change_attribute_required_attributes() {
        let mut c = ChangeAttribute::default();
        c.set_target("/sbml:sbml/sbml:model/@id").unwrap();
        assert!(!c.has_required_attributes());
        c.set_new_value("m2").unwrap();
        assert!(c.has_required_attributes());
        c.unset_target().unwrap();
        assert_eq!(c.target(), "");
    }

    #[test]
    fn test_add_xml_written_unprefixed_and_read_back() {
        let mut add = AddXml::default();
        add.set_id("a1").unwrap();
        add.set_target("/sbml:sbml/sbml:model").unwrap();
        add.set_new_xml(XmlNode::new("parameter")).unwrap();
        assert_eq!(add.new_xml().map(XmlNode::name), Some("newXML"));
        let change = SedChange::from(add);

        let node = write_element(&change);
        assert_eq!(node.qualified_name(), "addXML");
        assert_eq!(node.attributes().get("target"), Some("/sbml:sbml/sbml:model"));
        assert_eq!(node.nth_child(0).and_then(|c| c.nth_child(0)).unwrap().name(), "parameter");

        let mut log = ErrorLog::new();
        let back: Option<SedChange> = read_item(&node, change.namespaces(), &mut log);
        assert!(log.is_empty());
        assert_eq!(back.as_ref(), Some(&change));
    }

    #[test]
    fn test_add_xml_requires_new_xml() {
        let mut add = AddXml::default();
        assert!(!add.has_required_elements());
        add.set_new_xml(XmlNode::new("newXML")).unwrap();
        assert!(add.has_required_elements());
    }

    #[test]
    fn test_missing_new_value_is_reported() {
        let mut node = XmlNode::new("changeAttribute");
        node.attributes_mut().add("target", "/x");
        let mut log = ErrorLog::new();
        let change: Option<SedChange> = read_item(&node, &super::super::default_namespaces(), &mut log);
        assert!(change.is_some_and(|c| c.is_change_attribute() && c.target() == "/x"));
        assert!(log.contains(SEDML_CHANGE_ATTRIBUTE_ALLOWED_ATTRIBUTES));
    }
}
