// crates/sbml-pkg/src/combine/content.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes, format_bool};
use crate::namespaces::Namespaces;
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::string::{String, ToString};

pub static CONTENT_SCHEMA: ElementSchema = ElementSchema {
    element: "content",
    errors: ElementErrors {
        allowed_core_attributes: COMBINE_CONTENT_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: COMBINE_CONTENT_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: COMBINE_CONTENT_ALLOWED_ATTRIBUTES,
        allowed_elements: COMBINE_CONTENT_ALLOWED_ELEMENTS,
        id_syntax: COMBINE_ID_SYNTAX_RULE,
        duplicate_id: COMBINE_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 1,
        versions: (1, 1),
        pkg_version: None,
        attributes: &[
            AttributeSpec::required("location", AttributeKind::String, COMBINE_CONTENT_LOCATION_MUST_BE_STRING),
            AttributeSpec::required("format", AttributeKind::String, COMBINE_CONTENT_FORMAT_MUST_BE_STRING),
            AttributeSpec::optional("master", AttributeKind::Boolean, COMBINE_CONTENT_MASTER_MUST_BE_BOOLEAN),
        ],
    }],
};

/// One file of a COMBINE archive.
#[derive(Debug, Clone, PartialEq)]
pub struct CaContent {
    core: SBaseCore,
    /// Path of the file inside the archive, e.g. `./model.xml`.
    location: String,
    /// Media type or identifiers.org format URI.
    format: String,
    master: Option<bool>,
}

impl CaContent {
    pub fn new(level: u32, version: u32) -> Self {
        Self::with_namespaces(Namespaces::omex_with(level, version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            location: String::new(),
            format: String::new(),
            master: None,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_set_location(&self) -> bool {
        !self.location.is_empty()
    }

    pub fn set_location(&mut self, location: &str) -> OperationResult {
        self.location = location.to_string();
        Ok(())
    }

    pub fn unset_location(&mut self) -> OperationResult {
        self.location.clear();
        Ok(())
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn is_set_format(&self) -> bool {
        !self.format.is_empty()
    }

    pub fn set_format(&mut self, format: &str) -> OperationResult {
        self.format = format.to_string();
        Ok(())
    }

    pub fn unset_format(&mut self) -> OperationResult {
        self.format.clear();
        Ok(())
    }

    /// `false` when unset.
    pub fn master(&self) -> bool {
        self.master.unwrap_or(false)
    }

    pub fn is_set_master(&self) -> bool {
        self.master.is_some()
    }

    pub fn set_master(&mut self, master: bool) -> OperationResult {
        self.master = Some(master);
        Ok(())
    }

    pub fn unset_master(&mut self) -> OperationResult {
        self.master = None;
        Ok(())
    }

    /// Returns `true` if the format names an identifiers.org COMBINE format
    /// of the given kind (`"sbml"`, `"sed-ml"`, ...).
    pub fn is_format(&self, kind: &str) -> bool {
        self.format
            .strip_prefix("http://identifiers.org/combine.specifications/")
            .is_some_and(|rest| rest == kind || rest.strip_prefix(kind).is_some_and(|v| v.starts_with('.')))
    }
}

impl Default for CaContent {
    fn default() -> Self {
        Self::with_namespaces(Namespaces::omex())
    }
}

impl SBase for CaContent {
    fn type_code(&self) -> TypeCode {
        TypeCode::CaContent
    }

    fn schema(&self) -> &'static ElementSchema {
        &CONTENT_SCHEMA
    }

    fn core(&self) -> &SBaseCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        &mut self.core
    }

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        if let Some(location) = reader.string("location") {
            self.location = location;
        }
        if let Some(format) = reader.string("format") {
            self.format = format;
        }
        self.master = reader.boolean("master");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_location() {
            attributes.add("location", &self.location);
        }
        if self.is_set_format() {
            attributes.add("format", &self.format);
        }
        if let Some(master) = self.master {
            attributes.add("master", format_bool(master));
        }
    }
}

impl ListItem for CaContent {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == CONTENT_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorLog;
    use crate::node::XmlNode;
    use crate::sbase::read_element;

    #[test]
    fn test_defaults_and_required() {
        let mut content = CaContent::default();
        assert!(!content.master());
        assert!(!content.is_set_master());
        assert!(!content.has_required_attributes());
        content.set_location("./model.xml").unwrap();
        content.set_format("http://identifiers.org/combine.specifications/sbml").unwrap();
        assert!(content.has_required_attributes());
        content.unset_format().unwrap();
        assert_eq!(content.format(), "");
    }

    #[test]
    fn test_format_kind() {
        let mut content = CaContent::default();
        content
            .set_format("http://identifiers.org/combine.specifications/sbml.level-3.version-1")
            .unwrap();
        assert!(content.is_format("sbml"));
        assert!(!content.is_format("sed-ml"));
        content.set_format("application/xml").unwrap();
        assert!(!content.is_format("sbml"));
    }

    #[test]
    fn test_bad_master_is_reported() {
        let mut node = XmlNode::new("content");
        node.attributes_mut().add("location", ".");
        node.attributes_mut().add("format", "http://identifiers.org/combine.specifications/omex");
        node.attributes_mut().add("master", "maybe");
        let mut content = CaContent::default();
        let mut log = ErrorLog::new();
        read_element(&mut content, &node, &mut log);
        assert!(log.contains(COMBINE_CONTENT_MASTER_MUST_BE_BOOLEAN));
        assert!(!content.is_set_master());
        assert_eq!(content.location(), ".");
    }

    #[test]
    fn test_other_version_is_kept() {
        let content = CaContent::new(1, 2);
        assert_eq!(content.core().version(), 2);
    }
}
