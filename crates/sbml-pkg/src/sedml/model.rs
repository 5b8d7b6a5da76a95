// crates/sbml-pkg/src/sedml/model.rs

use super::SEDML_EMPTY_ROWS;
use super::change::{AddXml, ChangeAttribute, RemoveXml, SedChange};
use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::list_of::ListOf;
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::packages::id_name_accessors;
use crate::sbase::{ListItem, SBase, SBaseCore, read_element, write_element};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub static SED_MODEL_SCHEMA: ElementSchema = ElementSchema {
    element: "model",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_MODEL_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SEDML_MODEL_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SEDML_MODEL_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_MODEL_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 1,
        versions: (1, 4),
        pkg_version: None,
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, SEDML_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, SEDML_MODEL_NAME_MUST_BE_STRING),
            AttributeSpec::optional("language", AttributeKind::String, SEDML_MODEL_LANGUAGE_MUST_BE_STRING),
            AttributeSpec::required("source", AttributeKind::String, SEDML_MODEL_SOURCE_MUST_BE_STRING),
        ],
    }],
};

pub static LIST_OF_CHANGES_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfChanges",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_MODEL_LO_CHANGES_ALLOWED_ATTRIBUTES,
        allowed_core_elements: SEDML_MODEL_LO_CHANGES_ALLOWED_ELEMENTS,
        allowed_attributes: SEDML_MODEL_LO_CHANGES_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_MODEL_LO_CHANGES_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: SEDML_EMPTY_ROWS,
};

/// A model a simulation experiment runs on, with the changes applied to it first.
#[derive(Debug, Clone, PartialEq)]
pub struct SedModel {
    core: SBaseCore,
    id: String,
    name: String,
    /// URN of the model's encoding, e.g. `urn:sedml:language:sbml`.
    language: String,
    source: String,
    changes: ListOf<SedChange>,
}

impl SedModel {
    pub fn new(level: u32, version: u32) -> Self {
        Self::with_namespaces(Namespaces::sedml(level, version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            changes: ListOf::new(&LIST_OF_CHANGES_SCHEMA, namespaces.clone()),
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            language: String::new(),
            source: String::new(),
        }
    }

    id_name_accessors!();

    string_accessors! {
        language, is_set_language, set_language, unset_language;
        source, is_set_source, set_source, unset_source;
    }

    // --- listOfChanges ---

    pub fn list_of_changes(&self) -> &ListOf<SedChange> {
        &self.changes
    }

    pub fn list_of_changes_mut(&mut self) -> &mut ListOf<SedChange> {
        &mut self.changes
    }

    pub fn change(&self, n: usize) -> Option<&SedChange> {
        self.changes.get(n)
    }

    pub fn change_mut(&mut self, n: usize) -> Option<&mut SedChange> {
        self.changes.get_mut(n)
    }

    pub fn change_by_id(&self, id: &str) -> Option<&SedChange> {
        self.changes.get_by_id(id)
    }

    pub fn add_change(&mut self, change: &SedChange) -> OperationResult {
        self.changes.add(change)
    }

    pub fn create_change_attribute(&mut self) -> &mut ChangeAttribute {
        let ns = self.core.namespaces().clone();
        match self.changes.push(ChangeAttribute::with_namespaces(ns).into()) {
            SedChange::ChangeAttribute(c) => c,
            _ => unreachable!(),
        }
    }

    pub fn create_remove_xml(&mut self) -> &mut RemoveXml {
        let ns = self.core.namespaces().clone();
        match self.changes.push(RemoveXml::with_namespaces(ns).into()) {
            SedChange::RemoveXml(c) => c,
            _ => unreachable!(),
        }
    }

    pub fn create_add_xml(&mut self) -> &mut AddXml {
        let ns = self.core.namespaces().clone();
        match self.changes.push(AddXml::with_namespaces(ns).into()) {
            SedChange::AddXml(c) => c,
            _ => unreachable!(),
        }
    }

    pub fn remove_change(&mut self, n: usize) -> Option<SedChange> {
        self.changes.remove(n)
    }

    pub fn remove_change_by_id(&mut self, id: &str) -> Option<SedChange> {
        self.changes.remove_by_id(id)
    }

    pub fn num_changes(&self) -> usize {
        self.changes.len()
    }
}

impl Default for SedModel {
    fn default() -> Self {
        Self::with_namespaces(super::default_namespaces())
    }
}

impl SBase for SedModel {
    fn type_code(&self) -> TypeCode {
        TypeCode::SedModel
    }

    fn schema(&self) -> &'static ElementSchema {
        &SED_MODEL_SCHEMA
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
        if let Some(language) = reader.string("language") {
            self.language = language;
        }
        if let Some(source) = reader.string("source") {
            self.source = source;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if self.is_set_language() {
            attributes.add("language", &self.language);
        }
        if self.is_set_source() {
            attributes.add("source", &self.source);
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_CHANGES_SCHEMA.element {
            return false;
        }
        if !self.changes.is_empty() {
            let details = format!("A <model> may only contain one <{}>.", node.name());
            log.log_package_error(
                SEDML_MODEL_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.changes, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if !self.changes.is_empty() {
            out.push(write_element(&self.changes));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.changes as &dyn SBase]
    }
}

impl ListItem for SedModel {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == SED_MODEL_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OperationError;

    #[test]
    fn test_create_changes_in_order() {
        let mut model = SedModel::default();
        model.set_id("m1").unwrap();
        model.set_source("model.xml").unwrap();
        model.create_change_attribute().set_id("c1").unwrap();
        model.create_remove_xml().set_id("c2").unwrap();
        model.create_add_xml().set_id("c3").unwrap();

        assert_eq!(model.num_changes(), 3);
        assert!(model.change(0).is_some_and(SedChange::is_change_attribute));
        assert!(model.change_by_id("c3").is_some_and(SedChange::is_add_xml));

        let removed = model.remove_change_by_id("c2");
        assert!(removed.is_some_and(|c| c.is_remove_xml()));
        assert_eq!(model.num_changes(), 2);
    }

    #[test]
    fn test_add_change_checks() {
        let mut model = SedModel::default();
        let mut change = ChangeAttribute::default();
        change.set_id("c").unwrap();
        change.set_target("/a").unwrap();
        let change = SedChange::from(change);
        // newValue is required.
        assert_eq!(model.add_change(&change), Err(OperationError::InvalidObject));

        let mut remove = RemoveXml::new(1, 3);
        remove.set_target("/a").unwrap();
        assert_eq!(model.add_change(&remove.into()), Err(OperationError::VersionMismatch));
    }

    #[test]
    fn test_sbo_term_not_available() {
        let mut model = SedModel::default();
        assert_eq!(model.core_mut().set_sbo_term(1), Err(OperationError::UnexpectedAttribute));
    }

    #[test]
    fn test_write_and_read_back() {
        let mut model = SedModel::default();
        model.set_id("m1").unwrap();
        model.set_language("urn:sedml:language:sbml").unwrap();
        model.set_source("model.xml").unwrap();
        let remove = model.create_remove_xml();
        remove.set_target("/sbml:sbml/sbml:model/sbml:listOfReactions").unwrap();

        let node = write_element(&model);
        assert_eq!(node.qualified_name(), "model");
        assert_eq!(node.nth_child(0).unwrap().name(), "listOfChanges");

        let mut back = SedModel::default();
        let mut log = ErrorLog::new();
        read_element(&mut back, &node, &mut log);
        assert!(log.is_empty());
        assert_eq!(back, model);
    }
}
