// crates/sbml-pkg/src/sbase.rs

//! State and behaviour shared by every element class.
//!
//! Element classes hold an [`SBaseCore`] and implement [`SBase`] with their
//! own attributes and children. The [`read_element`] and [`write_element`]
//! drivers do the rest: core attributes, unknown-attribute and
//! unknown-element reporting, `<notes>`/`<annotation>` and namespace prefixes.

use crate::attributes::{AttributeReader, ExpectedAttributes, XmlAttributes};
use crate::error::{ErrorLog, INVALID_META_ID_SYNTAX, INVALID_SBO_TERM_SYNTAX};
use crate::log::{ElementContext, sbml_debug};
use crate::namespaces::{Host, Namespaces};
use crate::node::XmlNode;
use crate::schema::ElementSchema;
use crate::sid::{format_sbo_term, is_valid_meta_id, is_valid_sbo_term, is_valid_sid, is_valid_unit_sid, parse_sbo_term};
use crate::status::{OperationError, OperationResult};
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// --- Shared state ---

/// Attributes and sub-elements every element carries.
#[derive(Debug, Clone)]
pub struct SBaseCore {
    namespaces: Namespaces,
    meta_id: String,
    sbo_term: Option<u32>,
    notes: Option<XmlNode>,
    annotation: Option<XmlNode>,
    line: u32,
    column: u32,
}

// Source positions are not part of an element's identity.
impl PartialEq for SBaseCore {
    fn eq(&self, other: &Self) -> bool {
        self.namespaces == other.namespaces
            && self.meta_id == other.meta_id
            && self.sbo_term == other.sbo_term
            && self.notes == other.notes
            && self.annotation == other.annotation
    }
}

impl SBaseCore {
    pub fn new(namespaces: Namespaces) -> Self {
        Self {
            namespaces,
            meta_id: String::new(),
            sbo_term: None,
            notes: None,
            annotation: None,
            line: 0,
            column: 0,
        }
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn level(&self) -> u32 {
        self.namespaces.level()
    }

    pub fn version(&self) -> u32 {
        self.namespaces.version()
    }

    pub fn package_version(&self) -> u32 {
        self.namespaces.package_version()
    }

    pub fn meta_id(&self) -> &str {
        &self.meta_id
    }

    pub fn is_set_meta_id(&self) -> bool {
        !self.meta_id.is_empty()
    }

    /// Sets `metaid`. An empty value unsets it.
    pub fn set_meta_id(&mut self, meta_id: &str) -> OperationResult {
        if meta_id.is_empty() {
            self.meta_id.clear();
            return Ok(());
        }
        if !is_valid_meta_id(meta_id) {
            return Err(OperationError::InvalidAttributeValue);
        }
        self.meta_id = meta_id.into();
        Ok(())
    }

    pub fn unset_meta_id(&mut self) -> OperationResult {
        self.meta_id.clear();
        Ok(())
    }

    pub fn sbo_term(&self) -> Option<u32> {
        self.sbo_term
    }

    /// The SBO term as `SBO:NNNNNNN`, or `""` when unset.
    pub fn sbo_term_id(&self) -> String {
        self.sbo_term.map(format_sbo_term).unwrap_or_default()
    }

    pub fn is_set_sbo_term(&self) -> bool {
        self.sbo_term.is_some()
    }

    pub fn set_sbo_term(&mut self, term: u32) -> OperationResult {
        if self.namespaces.host() != Host::Sbml {
            return Err(OperationError::UnexpectedAttribute);
        }
        if !is_valid_sbo_term(term) {
            return Err(OperationError::InvalidAttributeValue);
        }
        self.sbo_term = Some(term);
        Ok(())
    }

    pub fn set_sbo_term_id(&mut self, term: &str) -> OperationResult {
        if self.namespaces.host() != Host::Sbml {
            return Err(OperationError::UnexpectedAttribute);
        }
        let term = parse_sbo_term(term).ok_or(OperationError::InvalidAttributeValue)?;
        self.set_sbo_term(term)
    }

    pub fn unset_sbo_term(&mut self) -> OperationResult {
        self.sbo_term = None;
        Ok(())
    }

    pub fn notes(&self) -> Option<&XmlNode> {
        self.notes.as_ref()
    }

    pub fn is_set_notes(&self) -> bool {
        self.notes.is_some()
    }

    pub fn set_notes(&mut self, notes: XmlNode) -> OperationResult {
        if notes.name() != "notes" {
            return Err(OperationError::InvalidXmlOperation);
        }
        self.notes = Some(notes);
        Ok(())
    }

    pub fn unset_notes(&mut self) -> OperationResult {
        self.notes = None;
        Ok(())
    }

    pub fn annotation(&self) -> Option<&XmlNode> {
        self.annotation.as_ref()
    }

    pub fn is_set_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    pub fn set_annotation(&mut self, annotation: XmlNode) -> OperationResult {
        if annotation.name() != "annotation" {
            return Err(OperationError::InvalidXmlOperation);
        }
        self.annotation = Some(annotation);
        Ok(())
    }

    pub fn unset_annotation(&mut self) -> OperationResult {
        self.annotation = None;
        Ok(())
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn set_position(&mut self, line: u32, column: u32) {
        self.line = line;
        self.column = column;
    }
}

// --- Field setters shared by the element classes ---

/// Stores an `SId`. An empty value unsets the field.
pub(crate) fn assign_sid(field: &mut String, value: &str) -> OperationResult {
    if !value.is_empty() && !is_valid_sid(value) {
        return Err(OperationError::InvalidAttributeValue);
    }
    *field = value.into();
    Ok(())
}

/// Stores a `UnitSIdRef`. An empty value unsets the field.
pub(crate) fn assign_unit_sid(field: &mut String, value: &str) -> OperationResult {
    if !value.is_empty() && !is_valid_unit_sid(value) {
        return Err(OperationError::InvalidAttributeValue);
    }
    *field = value.into();
    Ok(())
}

// --- The element trait ---

/// Behaviour every element class provides.
///
/// The trait is object safe; tree walking, consistency checking and the
/// generic XML entry points work on `&dyn SBase`.
pub trait SBase: fmt::Debug {
    fn type_code(&self) -> TypeCode;

    fn schema(&self) -> &'static ElementSchema;

    fn core(&self) -> &SBaseCore;

    fn core_mut(&mut self) -> &mut SBaseCore;

    /// The XML local name.
    fn element_name(&self) -> &'static str {
        self.schema().element
    }

    fn namespaces(&self) -> &Namespaces {
        self.core().namespaces()
    }

    /// The value of the `id` attribute, if the class has one and it is set.
    fn id_attribute(&self) -> Option<&str> {
        None
    }

    /// The value of the `name` attribute, if the class has one and it is set.
    fn name_attribute(&self) -> Option<&str> {
        None
    }

    /// Reads the class's own attributes. Core attributes are handled by [`read_element`].
    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>);

    /// Writes every set attribute of the class, in declaration order.
    fn write_attributes(&self, attributes: &mut XmlAttributes);

    /// Consumes one child element. Returns `false` if the element is not a
    /// child this class knows.
    fn create_object(&mut self, _node: &XmlNode, _log: &mut ErrorLog) -> bool {
        false
    }

    fn write_elements(&self, _out: &mut Vec<XmlNode>) {}

    /// Owned children in declaration order.
    fn children(&self) -> Vec<&dyn SBase> {
        Vec::new()
    }

    /// `true` if every attribute the schema marks as required is set.
    fn has_required_attributes(&self) -> bool {
        missing_required_attributes(self).is_empty()
    }

    fn has_required_elements(&self) -> bool {
        true
    }
}

/// Names of the required attributes `element` does not have set.
pub fn missing_required_attributes<E: SBase + ?Sized>(element: &E) -> Vec<&'static str> {
    let mut written = XmlAttributes::new();
    element.write_attributes(&mut written);
    element
        .schema()
        .required_attributes(element.namespaces())
        .filter(|name| !written.has(name))
        .collect()
}

/// An element that can live in a [`crate::list_of::ListOf`] and be built from its tag.
pub trait ListItem: SBase + Clone + Sized {
    /// Builds an empty item for the XML element `name`, or `None` if no
    /// variant uses that tag.
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self>;
}

// --- Read/write drivers ---

/// Populates `element` from `node`, logging every schema violation to `log`.
pub fn read_element(element: &mut dyn SBase, node: &XmlNode, log: &mut ErrorLog) {
    let ns = element.namespaces().clone();
    let schema = element.schema();
    let (line, column) = (node.line(), node.column());
    let ctx = ElementContext::new(&ns, schema.element, line);
    sbml_debug!(ctx, "reading <{}>", node.qualified_name());

    element.core_mut().set_position(line, column);
    check_unknown_attributes(schema, &ns, node, log);
    read_core_attributes(element.core_mut(), schema, node, log);

    let mut reader = AttributeReader::new(node.attributes(), schema, &ns, line, column, log);
    element.read_attributes(&mut reader);

    for child in node.children() {
        match child.name() {
            "notes" | "annotation" => read_core_element(element.core_mut(), schema, child, log),
            _ => {
                if !element.create_object(child, log) {
                    let details = format!(
                        "Element <{}> is not permitted inside <{}>.",
                        child.qualified_name(),
                        schema.element
                    );
                    log.log_package_error(
                        schema.errors.allowed_elements,
                        &ns,
                        &details,
                        child.line(),
                        child.column(),
                    );
                }
            }
        }
    }
}

fn check_unknown_attributes(
    schema: &ElementSchema,
    ns: &Namespaces,
    node: &XmlNode,
    log: &mut ErrorLog,
) {
    let expected = schema.expected_attributes(ns);
    let own_prefix = ns.element_prefix();
    for attr in node.attributes().iter() {
        if expected.contains(&attr.name) {
            continue;
        }
        let code = match (attr.prefix.as_deref(), own_prefix) {
            // Attributes of foreign namespaces are not ours to judge.
            (Some(p), own) if Some(p) != own => continue,
            (Some(_), _) => schema.errors.allowed_attributes,
            (None, Some(_)) => schema.errors.allowed_core_attributes,
            (None, None) => schema.errors.allowed_attributes,
        };
        let details = format!(
            "Attribute '{}' is not permitted on <{}>.",
            attr.qualified_name(),
            schema.element
        );
        log.log_package_error(code, ns, &details, node.line(), node.column());
    }
}

fn read_core_attributes(
    core: &mut SBaseCore,
    schema: &ElementSchema,
    node: &XmlNode,
    log: &mut ErrorLog,
) {
    let ns = core.namespaces().clone();
    let (line, column) = (node.line(), node.column());
    for name in ExpectedAttributes::CORE {
        let Some(value) = node.attributes().get(name) else {
            continue;
        };
        let result = match name {
            "metaid" => core.set_meta_id(value.trim()),
            _ => core.set_sbo_term_id(value.trim()),
        };
        let (code, details) = match result {
            Ok(()) => continue,
            // sboTerm only exists on SBML hosts.
            Err(OperationError::UnexpectedAttribute) => (
                schema.errors.allowed_core_attributes,
                format!("Attribute '{}' is not permitted on <{}>.", name, schema.element),
            ),
            Err(_) => (
                if name == "metaid" { INVALID_META_ID_SYNTAX } else { INVALID_SBO_TERM_SYNTAX },
                format!("The value '{}' of attribute '{}' is not valid.", value, name),
            ),
        };
        log.log_package_error(code, &ns, &details, line, column);
    }
}

fn read_core_element(
    core: &mut SBaseCore,
    schema: &ElementSchema,
    child: &XmlNode,
    log: &mut ErrorLog,
) {
    let duplicate = match child.name() {
        "notes" => core.is_set_notes(),
        _ => core.is_set_annotation(),
    };
    if duplicate {
        let details = format!(
            "Only one <{}> element is permitted inside <{}>.",
            child.name(),
            schema.element
        );
        let ns = core.namespaces().clone();
        log.log_package_error(
            schema.errors.allowed_core_elements,
            &ns,
            &details,
            child.line(),
            child.column(),
        );
        return;
    }
    let mut content = child.clone();
    content.set_prefix(None);
    let _ = match child.name() {
        "notes" => core.set_notes(content),
        _ => core.set_annotation(content),
    };
}

/// Serialises `element` into an [`XmlNode`].
///
/// Package elements get their package prefix on the element name and on
/// their own attributes; core attributes stay unprefixed.
pub fn write_element(element: &dyn SBase) -> XmlNode {
    let ns = element.namespaces();
    let prefix = ns.element_prefix();
    let ctx = ElementContext::new(ns, element.element_name(), element.core().line());
    sbml_debug!(ctx, "writing element");

    let mut node = XmlNode::new(element.element_name());
    node.set_prefix(prefix);

    let core = element.core();
    if core.is_set_meta_id() {
        node.attributes_mut().add("metaid", core.meta_id());
    }
    if core.is_set_sbo_term() {
        node.attributes_mut().add("sboTerm", core.sbo_term_id());
    }
    let start = node.attributes().len();
    element.write_attributes(node.attributes_mut());
    if let Some(prefix) = prefix {
        node.attributes_mut().apply_prefix_from(start, prefix);
    }

    if let Some(notes) = core.notes() {
        node.add_child(notes.clone());
    }
    if let Some(annotation) = core.annotation() {
        node.add_child(annotation.clone());
    }
    let mut children = Vec::new();
    element.write_elements(&mut children);
    for child in children {
        node.add_child(child);
    }
    node
}

/// Reads a fresh `T` from `node` in the namespaces `ns`.
///
/// Returns `None` if `T` has no variant for the node's tag.
pub fn read_item<T: ListItem>(node: &XmlNode, ns: &Namespaces, log: &mut ErrorLog) -> Option<T> {
    let mut item = T::create_item(node.name(), ns)?;
    read_element(&mut item, node, log);
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::Package;
    use crate::node::XmlContent;
    use crate::packages::tsb::Abc;
    use crate::sedml::SedModel;

    #[test]
    fn test_meta_id_validation() {
        let mut core = SBaseCore::new(Namespaces::sbml(3, 1));
        assert_eq!(core.set_meta_id("1bad"), Err(OperationError::InvalidAttributeValue));
        assert!(!core.is_set_meta_id());
        assert_eq!(core.set_meta_id("_m1"), Ok(()));
        assert_eq!(core.meta_id(), "_m1");
        assert_eq!(core.set_meta_id(""), Ok(()));
        assert!(!core.is_set_meta_id());
    }

    #[test]
    fn test_sbo_term_range() {
        let mut core = SBaseCore::new(Package::Tsb.default_namespaces());
        assert_eq!(core.set_sbo_term(10_000_000), Err(OperationError::InvalidAttributeValue));
        assert_eq!(core.set_sbo_term_id("SBO:0000064"), Ok(()));
        assert_eq!(core.sbo_term(), Some(64));
        assert_eq!(core.sbo_term_id(), "SBO:0000064");
        assert_eq!(core.unset_sbo_term(), Ok(()));
        assert_eq!(core.sbo_term_id(), "");

        let mut sed = SBaseCore::new(Namespaces::sedml(1, 4));
        assert_eq!(sed.set_sbo_term(1), Err(OperationError::UnexpectedAttribute));
    }

    #[test]
    fn test_notes_must_be_notes() {
        let mut core = SBaseCore::new(Namespaces::sbml(3, 1));
        assert_eq!(
            core.set_notes(XmlNode::new("annotation")),
            Err(OperationError::InvalidXmlOperation)
        );
        assert_eq!(core.set_notes(XmlNode::new("notes")), Ok(()));
        assert!(core.is_set_notes());
    }

    #[test]
    fn test_sbo_term_on_sedml_is_an_unknown_core_attribute() {
        let mut node = XmlNode::new("model");
        node.attributes_mut().add("id", "m");
        node.attributes_mut().add("source", "model.xml");
        node.attributes_mut().add("sboTerm", "SBO:0000001");

        let mut model = SedModel::new(1, 4);
        let mut log = ErrorLog::new();
        read_element(&mut model, &node, &mut log);

        assert!(log.contains(model.schema().errors.allowed_core_attributes));
        assert!(!log.contains(INVALID_SBO_TERM_SYNTAX));
        assert!(!model.core().is_set_sbo_term());
        assert_eq!(model.id(), "m");
    }

    #[test]
    fn test_bad_sbo_term_syntax_on_sbml() {
        let mut node = XmlNode::new("abc");
        node.attributes_mut().add("sboTerm", "SBO:12");
        let mut abc = Abc::with_namespaces(Package::Tsb.default_namespaces());
        let mut log = ErrorLog::new();
        read_element(&mut abc, &node, &mut log);
        assert!(log.contains(INVALID_SBO_TERM_SYNTAX));
    }

    #[test]
    fn test_mixed_content_notes_survive_write_and_read() {
        let mut p = XmlNode::new("p");
        p.add_namespace(None, "http://www.w3.org/1999/xhtml");
        p.append_text("Hello ");
        let mut b = XmlNode::new("b");
        b.set_text("big");
        p.add_child(b);
        p.append_text(" world");
        let mut notes = XmlNode::new("notes");
        notes.add_child(p);

        let mut model = SedModel::new(1, 4);
        model.set_id("m").unwrap();
        model.set_source("model.xml").unwrap();
        model.core_mut().set_notes(notes).unwrap();

        let node = write_element(&model);
        let mut read = SedModel::new(1, 4);
        let mut log = ErrorLog::new();
        read_element(&mut read, &node, &mut log);

        assert!(log.is_empty());
        assert_eq!(read, model);
        let p = read.core().notes().and_then(|n| n.child("p")).unwrap();
        assert_eq!(p.text(), "Hello  world");
        assert!(matches!(&p.content()[1], XmlContent::Element(b) if b.text() == "big"));
    }

    #[test]
    fn test_assign_sid() {
        let mut field = String::new();
        assert_eq!(assign_sid(&mut field, "a b"), Err(OperationError::InvalidAttributeValue));
        assert_eq!(assign_sid(&mut field, "ab"), Ok(()));
        assert_eq!(field, "ab");
        assert_eq!(assign_sid(&mut field, ""), Ok(()));
        assert!(field.is_empty());
    }
}
