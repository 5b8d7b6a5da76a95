// crates/sbml-pkg/src/combine/manifest.rs

use super::content::CaContent;
use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::{DocumentError, ErrorLog};
use crate::list_of::ListOf;
use crate::log::{ElementContext, sbml_debug};
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::sbase::{SBase, SBaseCore, read_element, write_element};
use crate::schema::{ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::tree;
use crate::types::TypeCode;
use alloc::format;
use alloc::vec::Vec;

const MANIFEST_ROWS: &[SchemaRow] = &[SchemaRow {
    level: 1,
    versions: (1, 1),
    pkg_version: None,
    attributes: &[],
}];

const MANIFEST_ERRORS: ElementErrors = ElementErrors {
    allowed_core_attributes: COMBINE_MANIFEST_ALLOWED_CORE_ATTRIBUTES,
    allowed_core_elements: COMBINE_MANIFEST_ALLOWED_CORE_ELEMENTS,
    allowed_attributes: COMBINE_MANIFEST_ALLOWED_ATTRIBUTES,
    allowed_elements: COMBINE_MANIFEST_ALLOWED_ELEMENTS,
    id_syntax: COMBINE_ID_SYNTAX_RULE,
    duplicate_id: COMBINE_DUPLICATE_COMPONENT_ID,
};

pub static OMEX_MANIFEST_SCHEMA: ElementSchema = ElementSchema {
    element: "omexManifest",
    errors: MANIFEST_ERRORS,
    rows: MANIFEST_ROWS,
};

// The contents are written inline; this names the list in log lines only.
static CONTENTS_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfContents",
    errors: MANIFEST_ERRORS,
    rows: MANIFEST_ROWS,
};

/// The `manifest.xml` of a COMBINE archive: one `<content>` per file.
#[derive(Debug, Clone, PartialEq)]
pub struct CaOmexManifest {
    core: SBaseCore,
    contents: ListOf<CaContent>,
    error_log: ErrorLog,
}

impl CaOmexManifest {
    pub fn new(level: u32, version: u32) -> Self {
        let namespaces = Namespaces::omex_with(level, version);
        Self {
            contents: ListOf::new_required(&CONTENTS_SCHEMA, namespaces.clone()),
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

    // --- contents ---

    pub fn contents(&self) -> impl Iterator<Item = &CaContent> {
        self.contents.iter()
    }

    pub fn content(&self, n: usize) -> Option<&CaContent> {
        self.contents.get(n)
    }

    pub fn content_mut(&mut self, n: usize) -> Option<&mut CaContent> {
        self.contents.get_mut(n)
    }

    pub fn content_by_location(&self, location: &str) -> Option<&CaContent> {
        self.contents.iter().find(|c| c.location() == location)
    }

    pub fn add_content(&mut self, content: &CaContent) -> OperationResult {
        self.contents.add(content)
    }

    pub fn create_content(&mut self) -> &mut CaContent {
        self.contents.create_with(CaContent::with_namespaces)
    }

    pub fn remove_content(&mut self, n: usize) -> Option<CaContent> {
        self.contents.remove(n)
    }

    pub fn num_contents(&self) -> usize {
        self.contents.len()
    }

    /// The first entry flagged as the archive's master file.
    pub fn master_file(&self) -> Option<&CaContent> {
        self.contents.iter().find(|c| c.master())
    }

    // --- XML ---

    /// Builds a manifest from a parsed `<omexManifest>` tree.
    pub fn from_node(node: &XmlNode) -> Result<Self, DocumentError> {
        if node.name() != OMEX_MANIFEST_SCHEMA.element {
            return Err(DocumentError::UnexpectedRoot {
                expected: OMEX_MANIFEST_SCHEMA.element,
                found: node.qualified_name(),
            });
        }
        let mut manifest = Self::default();
        let namespaces = manifest.core.namespaces().clone();
        let mut log = ErrorLog::new();
        let declared = node.namespace_uri(None);
        if declared != Some(namespaces.uri().as_str()) {
            let details = format!(
                "Expected the namespace '{}', found '{}'.",
                namespaces.uri(),
                declared.unwrap_or("")
            );
            log.log_package_error(COMBINE_NAMESPACE_MISMATCH, &namespaces, &details, node.line(), node.column());
        }
        read_element(&mut manifest, node, &mut log);
        manifest.error_log = log;

        let ctx = ElementContext::new(&namespaces, OMEX_MANIFEST_SCHEMA.element, node.line());
        sbml_debug!(ctx, "read {} contents, {} errors", manifest.num_contents(), manifest.num_errors());
        Ok(manifest)
    }

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

impl Default for CaOmexManifest {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl SBase for CaOmexManifest {
    fn type_code(&self) -> TypeCode {
        TypeCode::CaOmexManifest
    }

    fn schema(&self) -> &'static ElementSchema {
        &OMEX_MANIFEST_SCHEMA
    }

    fn core(&self) -> &SBaseCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        &mut self.core
    }

    fn read_attributes(&mut self, _reader: &mut AttributeReader<'_>) {}

    fn write_attributes(&self, _attributes: &mut XmlAttributes) {}

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        self.contents.create_object(node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        self.contents.write_items(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.contents.item_refs()
    }

    fn has_required_elements(&self) -> bool {
        !self.contents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OperationError;

    fn sample() -> CaOmexManifest {
        let mut manifest = CaOmexManifest::default();
        let archive = manifest.create_content();
        archive.set_location(".").unwrap();
        archive.set_format("http://identifiers.org/combine.specifications/omex").unwrap();
        let model = manifest.create_content();
        model.set_location("./model.xml").unwrap();
        model.set_format("http://identifiers.org/combine.specifications/sbml").unwrap();
        model.set_master(true).unwrap();
        manifest
    }

    #[test]
    fn test_master_file() {
        let manifest = sample();
        assert_eq!(manifest.master_file().map(CaContent::location), Some("./model.xml"));
        assert!(CaOmexManifest::default().master_file().is_none());
        assert!(manifest.content_by_location(".").is_some());
    }

    #[test]
    fn test_contents_written_inline() {
        let node = sample().to_node();
        assert_eq!(node.name(), "omexManifest");
        assert_eq!(node.num_children(), 2);
        assert!(node.children().all(|c| c.name() == "content"));
        assert_eq!(
            node.namespace_uri(None),
            Some("http://identifiers.org/combine.specifications/omex-manifest")
        );

        let back = CaOmexManifest::from_node(&node).unwrap();
        assert!(back.error_log().is_empty());
        assert_eq!(back.num_contents(), 2);
        assert_eq!(back.content(1), sample().content(1));
    }

    #[test]
    fn test_add_content_checks() {
        let mut manifest = CaOmexManifest::default();
        assert_eq!(manifest.add_content(&CaContent::default()), Err(OperationError::InvalidObject));
        let mut other = CaContent::new(1, 2);
        other.set_location("a").unwrap();
        other.set_format("b").unwrap();
        assert_eq!(manifest.add_content(&other), Err(OperationError::VersionMismatch));
    }

    #[test]
    fn test_empty_manifest_is_inconsistent() {
        let mut manifest = CaOmexManifest::default();
        assert_eq!(manifest.check_consistency(), 1);
        assert!(manifest.error_log().contains(COMBINE_MANIFEST_ALLOWED_ELEMENTS));
    }

    #[test]
    fn test_wrong_root_and_unknown_child() {
        assert!(CaOmexManifest::from_node(&XmlNode::new("manifest")).is_err());

        let mut node = sample().to_node();
        node.add_child(XmlNode::new("archive"));
        let manifest = CaOmexManifest::from_node(&node).unwrap();
        assert!(manifest.error_log().contains(COMBINE_MANIFEST_ALLOWED_ELEMENTS));
    }
}
