// crates/sbml-pkg/src/sedml/document.rs

use super::SEDML_EMPTY_ROWS;
use super::errors::*;
use super::model::SedModel;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::{DocumentError, ErrorLog};
use crate::list_of::ListOf;
use crate::log::{ElementContext, sbml_debug};
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::sbase::{SBase, SBaseCore, read_element, write_element};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::tree;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

pub static SED_DOCUMENT_SCHEMA: ElementSchema = ElementSchema {
    element: "sedML",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_DOCUMENT_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: SEDML_DOCUMENT_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: SEDML_DOCUMENT_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_DOCUMENT_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 1,
        versions: (1, 4),
        pkg_version: None,
        attributes: &[
            AttributeSpec::required("level", AttributeKind::UnsignedInt, SEDML_DOCUMENT_LEVEL_MUST_BE_INTEGER),
            AttributeSpec::required("version", AttributeKind::UnsignedInt, SEDML_DOCUMENT_VERSION_MUST_BE_INTEGER),
        ],
    }],
};

pub static LIST_OF_MODELS_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfModels",
    errors: ElementErrors {
        allowed_core_attributes: SEDML_DOCUMENT_LO_MODELS_ALLOWED_ATTRIBUTES,
        allowed_core_elements: SEDML_DOCUMENT_LO_MODELS_ALLOWED_ELEMENTS,
        allowed_attributes: SEDML_DOCUMENT_LO_MODELS_ALLOWED_ATTRIBUTES,
        allowed_elements: SEDML_DOCUMENT_LO_MODELS_ALLOWED_ELEMENTS,
        id_syntax: SEDML_ID_SYNTAX_RULE,
        duplicate_id: SEDML_DUPLICATE_COMPONENT_ID,
    },
    rows: SEDML_EMPTY_ROWS,
};

/// The root `<sedML>` element of a simulation experiment description.
#[derive(Debug, Clone, PartialEq)]
pub struct SedDocument {
    core: SBaseCore,
    models: ListOf<SedModel>,
    error_log: ErrorLog,
}

impl SedDocument {
    pub fn new(level: u32, version: u32) -> Self {
        let namespaces = Namespaces::sedml(level, version);
        Self {
            models: ListOf::new(&LIST_OF_MODELS_SCHEMA, namespaces.clone()),
            core: SBaseCore::new(namespaces),
            error_log: ErrorLog::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.core.level()
    }

    pub fn version(&self) -> u32 {
        self.core.version()
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    pub fn error_log_mut(&mut self) -> &mut ErrorLog {
        &mut self.error_log
    }

    pub fn num_errors(&self) -> usize {
        self.error_log.len()
    }

    // --- listOfModels ---

    pub fn list_of_models(&self) -> &ListOf<SedModel> {
        &self.models
    }

    pub fn list_of_models_mut(&mut self) -> &mut ListOf<SedModel> {
        &mut self.models
    }

    pub fn model(&self, n: usize) -> Option<&SedModel> {
        self.models.get(n)
    }

    pub fn model_mut(&mut self, n: usize) -> Option<&mut SedModel> {
        self.models.get_mut(n)
    }

    pub fn model_by_id(&self, id: &str) -> Option<&SedModel> {
        self.models.get_by_id(id)
    }

    pub fn model_by_id_mut(&mut self, id: &str) -> Option<&mut SedModel> {
        self.models.get_by_id_mut(id)
    }

    pub fn add_model(&mut self, model: &SedModel) -> OperationResult {
        self.models.add(model)
    }

    pub fn create_model(&mut self) -> &mut SedModel {
        self.models.create_with(SedModel::with_namespaces)
    }

    pub fn remove_model(&mut self, n: usize) -> Option<SedModel> {
        self.models.remove(n)
    }

    pub fn remove_model_by_id(&mut self, id: &str) -> Option<SedModel> {
        self.models.remove_by_id(id)
    }

    pub fn num_models(&self) -> usize {
        self.models.len()
    }

    // --- XML ---

    /// Builds a document from a parsed `<sedML>` tree.
    ///
    /// Structural problems (wrong root, missing or unsupported level and
    /// version) fail; schema violations land in the document's error log.
    pub fn from_node(node: &XmlNode) -> Result<Self, DocumentError> {
        if node.name() != SED_DOCUMENT_SCHEMA.element {
            return Err(DocumentError::UnexpectedRoot {
                expected: SED_DOCUMENT_SCHEMA.element,
                found: node.qualified_name(),
            });
        }
        let level = root_number(node, "level")?;
        let version = root_number(node, "version")?;
        let namespaces = Namespaces::sedml(level, version);
        namespaces
            .check_supported()
            .map_err(|_| DocumentError::UnsupportedLevelVersion { level, version })?;

        let mut doc = Self::new(level, version);
        let mut log = ErrorLog::new();
        match node.namespace_uri(None) {
            Some(uri) if Namespaces::from_core_uri(uri).as_ref() == Some(&namespaces) => {}
            declared => {
                let details = format!(
                    "Expected the namespace '{}' for level {} version {}, found '{}'.",
                    namespaces.uri(),
                    level,
                    version,
                    declared.unwrap_or("")
                );
                log.log_package_error(SEDML_NAMESPACE_MISMATCH, &namespaces, &details, node.line(), node.column());
            }
        }
        read_element(&mut doc, node, &mut log);
        doc.error_log = log;

        let ctx = ElementContext::new(&namespaces, SED_DOCUMENT_SCHEMA.element, node.line());
        sbml_debug!(ctx, "read {} models, {} errors", doc.num_models(), doc.num_errors());
        Ok(doc)
    }

    /// Serialises the document, declaring its namespace on the root.
    pub fn to_node(&self) -> XmlNode {
        let mut node = write_element(self);
        node.add_namespace(None, self.core.namespaces().uri());
        node
    }

    /// Runs the consistency checks and appends the findings to the error log.
    ///
    /// Returns the number of new entries.
    pub fn check_consistency(&mut self) -> usize {
        let mut log = ErrorLog::new();
        let found = tree::check_consistency(&*self, &mut log);
        self.error_log.append(&mut log);
        found
    }
}

impl Default for SedDocument {
    fn default() -> Self {
        let ns = super::default_namespaces();
        Self::new(ns.level(), ns.version())
    }
}

fn root_number(node: &XmlNode, attribute: &'static str) -> Result<u32, DocumentError> {
    let value = node.attributes().get(attribute).ok_or(DocumentError::MissingAttribute {
        element: SED_DOCUMENT_SCHEMA.element,
        attribute,
    })?;
    value.trim().parse().map_err(|_| DocumentError::InvalidValue {
        kind: attribute,
        value: value.to_string(),
    })
}

impl SBase for SedDocument {
    fn type_code(&self) -> TypeCode {
        TypeCode::SedDocument
    }

    fn schema(&self) -> &'static ElementSchema {
        &SED_DOCUMENT_SCHEMA
    }

    fn core(&self) -> &SBaseCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        &mut self.core
    }

    // Level and version are taken from the root before reading starts.
    fn read_attributes(&mut self, _reader: &mut AttributeReader<'_>) {}

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        attributes.add("level", self.level().to_string());
        attributes.add("version", self.version().to_string());
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_MODELS_SCHEMA.element {
            return false;
        }
        if !self.models.is_empty() {
            let details = format!("A <sedML> may only contain one <{}>.", node.name());
            log.log_package_error(
                SEDML_DOCUMENT_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.models, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if !self.models.is_empty() {
            out.push(write_element(&self.models));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.models as &dyn SBase]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SedDocument {
        let mut doc = SedDocument::new(1, 3);
        let model = doc.create_model();
        model.set_id("m1").unwrap();
        model.set_source("urn:miriam:biomodels.db:BIOMD0000000012").unwrap();
        let change = model.create_change_attribute();
        change.set_target("/sbml:sbml/sbml:model/sbml:listOfParameters/sbml:parameter[@id='k']/@value").unwrap();
        change.set_new_value("2.5").unwrap();
        doc
    }

    #[test]
    fn test_round_trip_through_node() {
        let doc = sample();
        let node = doc.to_node();
        assert_eq!(node.attributes().get("level"), Some("1"));
        assert_eq!(node.namespace_uri(None), Some("http://sed-ml.org/sed-ml/level1/version3"));

        let back = SedDocument::from_node(&node).unwrap();
        assert!(back.error_log().is_empty());
        assert_eq!(back.list_of_models(), doc.list_of_models());
        assert_eq!(back.version(), 3);
    }

    #[test]
    fn test_structural_failures() {
        let wrong = XmlNode::new("sbml");
        assert!(matches!(
            SedDocument::from_node(&wrong),
            Err(DocumentError::UnexpectedRoot { expected: "sedML", .. })
        ));

        let mut no_version = XmlNode::new("sedML");
        no_version.attributes_mut().add("level", "1");
        assert_eq!(
            SedDocument::from_node(&no_version),
            Err(DocumentError::MissingAttribute { element: "sedML", attribute: "version" })
        );

        let mut bad = XmlNode::new("sedML");
        bad.attributes_mut().add("level", "2");
        bad.attributes_mut().add("version", "1");
        assert_eq!(
            SedDocument::from_node(&bad),
            Err(DocumentError::UnsupportedLevelVersion { level: 2, version: 1 })
        );
    }

    #[test]
    fn test_namespace_mismatch_is_logged() {
        let mut node = sample().to_node();
        node.add_namespace(None, "http://sed-ml.org/sed-ml/level1/version2");
        let doc = SedDocument::from_node(&node).unwrap();
        assert!(doc.error_log().contains(SEDML_NAMESPACE_MISMATCH));
    }

    #[test]
    fn test_consistency_finds_duplicate_ids_and_missing_source() {
        let mut doc = sample();
        let second = doc.create_model();
        second.set_id("m1").unwrap();
        assert_eq!(doc.check_consistency(), 2);
        assert!(doc.error_log().contains(SEDML_DUPLICATE_COMPONENT_ID));
        assert!(doc.error_log().contains(SEDML_MODEL_ALLOWED_ATTRIBUTES));
    }
}
