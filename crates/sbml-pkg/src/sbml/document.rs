// crates/sbml-pkg/src/sbml/document.rs

use super::model::{MODEL_SCHEMA, Model};
use crate::attributes::{AttributeReader, XmlAttributes, format_bool, parse_bool};
use crate::error::{
    ALLOWED_ATTRIBUTES_ON_SBML, DUPLICATE_COMPONENT_ID, DocumentError, ErrorLog,
    INVALID_ID_SYNTAX, INVALID_NAMESPACE_ON_SBML, MISSING_OR_INCONSISTENT_LEVEL,
    MISSING_OR_INCONSISTENT_VERSION, ONE_MODEL_ALLOWED, ONLY_ONE_NOTES_ELEMENT_ALLOWED,
    REQUIRED_PACKAGE_PRESENT, UNRECOGNIZED_ELEMENT, UNREQUIRED_PACKAGE_PRESENT,
};
use crate::log::{ElementContext, sbml_debug, sbml_info};
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::sbase::{SBase, SBaseCore, read_element, write_element};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::{OperationError, OperationResult};
use crate::tree;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

pub static SBML_DOCUMENT_SCHEMA: ElementSchema = ElementSchema {
    element: "sbml",
    errors: ElementErrors {
        allowed_core_attributes: ALLOWED_ATTRIBUTES_ON_SBML,
        allowed_core_elements: ONLY_ONE_NOTES_ELEMENT_ALLOWED,
        allowed_attributes: ALLOWED_ATTRIBUTES_ON_SBML,
        allowed_elements: UNRECOGNIZED_ELEMENT,
        id_syntax: INVALID_ID_SYNTAX,
        duplicate_id: DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: None,
        attributes: &[
            AttributeSpec::required("level", AttributeKind::UnsignedInt, MISSING_OR_INCONSISTENT_LEVEL),
            AttributeSpec::required("version", AttributeKind::UnsignedInt, MISSING_OR_INCONSISTENT_VERSION),
        ],
    }],
};

/// A package switched on for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledPackage {
    pub package: Package,
    pub version: u32,
    /// The `prefix:required` flag written on `<sbml>`.
    pub required: bool,
}

/// The root `<sbml>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SbmlDocument {
    core: SBaseCore,
    packages: Vec<EnabledPackage>,
    model: Option<Model>,
    error_log: ErrorLog,
}

impl SbmlDocument {
    pub fn new(level: u32, version: u32) -> Self {
        Self {
            core: SBaseCore::new(Namespaces::sbml(level, version)),
            packages: Vec::new(),
            model: None,
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

    // --- packages ---

    /// Switches `package` on in version `pkg_version`, replacing an earlier
    /// version, and attaches its plugin to the model.
    pub fn enable_package(&mut self, package: Package, pkg_version: u32, required: bool) -> OperationResult {
        let namespaces = self.core.namespaces().clone().with_package(package, pkg_version);
        namespaces.check_supported()?;

        self.packages.retain(|p| p.package != package);
        self.packages.push(EnabledPackage {
            package,
            version: pkg_version,
            required,
        });
        if let Some(model) = self.model.as_mut() {
            model.enable_package(package, pkg_version);
        }
        let ctx = ElementContext::new(&namespaces, SBML_DOCUMENT_SCHEMA.element, self.core.line());
        sbml_info!(ctx, "enabled package {} version {} (required={})", package, pkg_version, required);
        Ok(())
    }

    /// Switches `package` off and drops its content from the model.
    pub fn disable_package(&mut self, package: Package) -> OperationResult {
        self.packages.retain(|p| p.package != package);
        if let Some(model) = self.model.as_mut() {
            model.disable_package(package);
        }
        Ok(())
    }

    pub fn enabled_packages(&self) -> &[EnabledPackage] {
        &self.packages
    }

    fn enabled(&self, package: Package) -> Option<&EnabledPackage> {
        self.packages.iter().find(|p| p.package == package)
    }

    pub fn is_package_enabled(&self, package: Package) -> bool {
        self.enabled(package).is_some()
    }

    pub fn package_version(&self, package: Package) -> Option<u32> {
        self.enabled(package).map(|p| p.version)
    }

    /// `false` for packages that are not enabled.
    pub fn is_package_required(&self, package: Package) -> bool {
        self.enabled(package).is_some_and(|p| p.required)
    }

    pub fn set_package_required(&mut self, package: Package, required: bool) -> OperationResult {
        let entry = self
            .packages
            .iter_mut()
            .find(|p| p.package == package)
            .ok_or(OperationError::PkgUnknown)?;
        entry.required = required;
        Ok(())
    }

    // --- model ---

    /// Replaces the model with an empty one carrying a plugin per enabled package.
    pub fn create_model(&mut self) -> &mut Model {
        let mut model = Model::with_namespaces(self.core.namespaces().clone());
        for p in &self.packages {
            model.enable_package(p.package, p.version);
        }
        self.model.insert(model)
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> Option<&mut Model> {
        self.model.as_mut()
    }

    pub fn is_set_model(&self) -> bool {
        self.model.is_some()
    }

    /// Stores a copy of `model`, which must share the document's level and version.
    pub fn set_model(&mut self, model: &Model) -> OperationResult {
        if model.core().level() != self.level() {
            return Err(OperationError::LevelMismatch);
        }
        if model.core().version() != self.version() {
            return Err(OperationError::VersionMismatch);
        }
        self.model = Some(model.clone());
        Ok(())
    }

    pub fn unset_model(&mut self) -> Option<Model> {
        self.model.take()
    }

    // --- XML ---

    /// Builds a document from a parsed `<sbml>` tree.
    ///
    /// Structural problems fail; everything else, including package
    /// declaration problems, lands in the document's error log.
    pub fn from_node(node: &XmlNode) -> Result<Self, DocumentError> {
        if node.name() != SBML_DOCUMENT_SCHEMA.element {
            return Err(DocumentError::UnexpectedRoot {
                expected: SBML_DOCUMENT_SCHEMA.element,
                found: node.qualified_name(),
            });
        }
        let level = root_number(node, "level")?;
        let version = root_number(node, "version")?;
        let namespaces = Namespaces::sbml(level, version);
        namespaces
            .check_supported()
            .map_err(|_| DocumentError::UnsupportedLevelVersion { level, version })?;

        let mut doc = Self::new(level, version);
        let mut log = ErrorLog::new();
        let (line, column) = (node.line(), node.column());
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
                log.log_error(INVALID_NAMESPACE_ON_SBML, level, version, &details, line, column);
            }
        }
        doc.read_package_declarations(node, &mut log);
        read_element(&mut doc, node, &mut log);
        doc.error_log = log;

        let ctx = ElementContext::new(&namespaces, SBML_DOCUMENT_SCHEMA.element, line);
        sbml_debug!(
            ctx,
            "read {} packages, model={}, {} errors",
            doc.packages.len(),
            doc.model.is_some(),
            doc.num_errors()
        );
        Ok(doc)
    }

    // Enables every package declared on the root and checks its `required` flag.
    fn read_package_declarations(&mut self, node: &XmlNode, log: &mut ErrorLog) {
        let (level, version) = (self.level(), self.version());
        let (line, column) = (node.line(), node.column());
        for decl in node.namespaces() {
            let Some(prefix) = decl.prefix.as_deref() else {
                continue;
            };
            let required = node.attributes().get_prefixed(prefix, "required");
            let Some((package, pkg_level, pkg_host_version, pkg_version)) = Package::from_uri(&decl.uri) else {
                // Only namespaces flagged with `required` are packages.
                match required.and_then(parse_bool) {
                    Some(true) => {
                        let details = format!("The package '{}' ({}) is not supported.", prefix, decl.uri);
                        log.log_error(REQUIRED_PACKAGE_PRESENT, level, version, &details, line, column);
                    }
                    Some(false) => {
                        let details = format!("The package '{}' ({}) is not supported.", prefix, decl.uri);
                        log.log_error(UNREQUIRED_PACKAGE_PRESENT, level, version, &details, line, column);
                    }
                    None => {}
                }
                continue;
            };
            let pkg_ns = Namespaces::sbml(level, version).with_package(package, pkg_version);
            let undeclared = package.error_offset() + 10101;
            if pkg_level != level || pkg_host_version != version || pkg_ns.check_supported().is_err() {
                let details = format!(
                    "The namespace '{}' does not match level {} version {}.",
                    decl.uri, level, version
                );
                log.log_package_error(undeclared, &pkg_ns, &details, line, column);
                continue;
            }
            let expected = package.required_value();
            let flag = match required {
                None => {
                    let details = format!("The attribute '{}:required' is missing.", prefix);
                    log.log_package_error(package.error_offset() + 20101, &pkg_ns, &details, line, column);
                    expected
                }
                Some(value) => match parse_bool(value) {
                    None => {
                        let details = format!("The value '{}' of '{}:required' is not a boolean.", value, prefix);
                        log.log_package_error(package.error_offset() + 20102, &pkg_ns, &details, line, column);
                        expected
                    }
                    Some(flag) => {
                        if flag != expected {
                            let details = format!(
                                "The attribute '{}:required' must be '{}'.",
                                prefix,
                                format_bool(expected)
                            );
                            log.log_package_error(package.error_offset() + 20103, &pkg_ns, &details, line, column);
                        }
                        flag
                    }
                },
            };
            // Supported versions were checked above.
            let _ = self.enable_package(package, pkg_version, flag);
        }
    }

    /// Serialises the document, declaring the core and package namespaces on the root.
    pub fn to_node(&self) -> XmlNode {
        let mut node = write_element(self);
        node.add_namespace(None, self.core.namespaces().uri());
        for p in &self.packages {
            node.add_namespace(Some(p.package.prefix()), p.package.uri(self.level(), self.version(), p.version));
            node.attributes_mut()
                .add_prefixed(p.package.prefix(), "required", format_bool(p.required));
        }
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

impl Default for SbmlDocument {
    fn default() -> Self {
        Self::new(3, 1)
    }
}

fn root_number(node: &XmlNode, attribute: &'static str) -> Result<u32, DocumentError> {
    let value = node.attributes().get(attribute).ok_or(DocumentError::MissingAttribute {
        element: SBML_DOCUMENT_SCHEMA.element,
        attribute,
    })?;
    value.trim().parse().map_err(|_| DocumentError::InvalidValue {
        kind: attribute,
        value: value.to_string(),
    })
}

impl SBase for SbmlDocument {
    fn type_code(&self) -> TypeCode {
        TypeCode::SbmlDocument
    }

    fn schema(&self) -> &'static ElementSchema {
        &SBML_DOCUMENT_SCHEMA
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
        if node.name() != MODEL_SCHEMA.element || node.prefix().is_some() {
            return false;
        }
        if self.model.is_some() {
            log.log_error(
                ONE_MODEL_ALLOWED,
                self.level(),
                self.version(),
                "An <sbml> may only contain one <model>.",
                node.line(),
                node.column(),
            );
            return true;
        }
        let model = self.create_model();
        read_element(model, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if let Some(model) = &self.model {
            out.push(write_element(model));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.model.iter().map(|m| m as &dyn SBase).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::vers::errors::VERS_CLASS_ONE_ALLOWED_ATTRIBUTES;
    use crate::plugin::{ModelPlugin, SBasePlugin};

    fn sample() -> SbmlDocument {
        let mut doc = SbmlDocument::default();
        doc.enable_package(Package::Vers, 1, false).unwrap();
        let model = doc.create_model();
        model.set_id("m").unwrap();
        let vers = model.plugin_mut(Package::Vers).and_then(ModelPlugin::as_vers_mut).unwrap();
        vers.create_class_one().set_id("c1").unwrap();
        doc
    }

    #[test]
    fn test_package_bookkeeping() {
        let mut doc = SbmlDocument::default();
        assert_eq!(doc.enable_package(Package::Vers, 9, false), Err(OperationError::PkgUnknownVersion));
        assert!(!doc.is_package_enabled(Package::Vers));

        doc.enable_package(Package::Spatial, 1, true).unwrap();
        assert_eq!(doc.package_version(Package::Spatial), Some(1));
        assert!(doc.is_package_required(Package::Spatial));
        doc.set_package_required(Package::Spatial, false).unwrap();
        assert!(!doc.is_package_required(Package::Spatial));
        assert_eq!(doc.set_package_required(Package::Foo, true), Err(OperationError::PkgUnknown));

        doc.disable_package(Package::Spatial).unwrap();
        assert!(doc.enabled_packages().is_empty());
    }

    #[test]
    fn test_round_trip_through_node() {
        let doc = sample();
        let node = doc.to_node();
        assert_eq!(
            node.namespace_uri(Some("vers")),
            Some("http://www.sbml.org/sbml/level3/version1/vers/version1")
        );
        assert_eq!(node.attributes().get_prefixed("vers", "required"), Some("false"));

        let back = SbmlDocument::from_node(&node).unwrap();
        assert!(back.error_log().is_empty(), "{:?}", back.error_log());
        assert_eq!(back.model(), doc.model());
        assert_eq!(back.enabled_packages(), doc.enabled_packages());
    }

    #[test]
    fn test_required_flag_checks() {
        let mut node = sample().to_node();
        node.attributes_mut().remove("required");
        let doc = SbmlDocument::from_node(&node).unwrap();
        assert!(doc.error_log().contains(Package::Vers.error_offset() + 20101));

        let mut node = sample().to_node();
        node.attributes_mut().add_prefixed("vers", "required", "yes");
        let doc = SbmlDocument::from_node(&node).unwrap();
        assert!(doc.error_log().contains(Package::Vers.error_offset() + 20102));

        let mut node = sample().to_node();
        node.attributes_mut().add_prefixed("vers", "required", "true");
        let doc = SbmlDocument::from_node(&node).unwrap();
        assert!(doc.error_log().contains(Package::Vers.error_offset() + 20103));
        assert!(doc.is_package_required(Package::Vers));
    }

    #[test]
    fn test_unknown_packages_are_reported() {
        let mut node = SbmlDocument::default().to_node();
        node.add_namespace(Some("comp"), "http://www.sbml.org/sbml/level3/version1/comp/version1");
        node.attributes_mut().add_prefixed("comp", "required", "true");
        node.add_namespace(Some("layout"), "http://www.sbml.org/sbml/level3/version1/layout/version1");
        node.attributes_mut().add_prefixed("layout", "required", "false");
        node.add_namespace(Some("html"), "http://www.w3.org/1999/xhtml");

        let doc = SbmlDocument::from_node(&node).unwrap();
        assert_eq!(doc.num_errors(), 2);
        assert!(doc.error_log().contains(REQUIRED_PACKAGE_PRESENT));
        assert!(doc.error_log().contains(UNREQUIRED_PACKAGE_PRESENT));
    }

    #[test]
    fn test_second_model_and_bad_namespace() {
        let mut node = sample().to_node();
        node.add_child(XmlNode::new("model"));
        node.add_namespace(None, "http://www.sbml.org/sbml/level3/version2/core");
        let doc = SbmlDocument::from_node(&node).unwrap();
        assert!(doc.error_log().contains(ONE_MODEL_ALLOWED));
        assert!(doc.error_log().contains(INVALID_NAMESPACE_ON_SBML));
        assert_eq!(doc.model().and_then(|m| m.plugin(Package::Vers)).map(|p| p.children().len()), Some(1));
    }

    #[test]
    fn test_structural_failures() {
        let mut node = XmlNode::new("sbml");
        node.attributes_mut().add("level", "3");
        assert_eq!(
            SbmlDocument::from_node(&node),
            Err(DocumentError::MissingAttribute { element: "sbml", attribute: "version" })
        );
        node.attributes_mut().add("version", "x");
        assert!(matches!(SbmlDocument::from_node(&node), Err(DocumentError::InvalidValue { .. })));
        node.attributes_mut().add("version", "5");
        assert_eq!(
            SbmlDocument::from_node(&node),
            Err(DocumentError::UnsupportedLevelVersion { level: 3, version: 5 })
        );
    }

    #[test]
    fn test_consistency_reaches_package_content() {
        let mut doc = sample();
        let model = doc.model_mut().unwrap();
        let vers = model.plugin_mut(Package::Vers).and_then(ModelPlugin::as_vers_mut).unwrap();
        vers.create_class_one();
        assert_eq!(doc.check_consistency(), 1);
        assert!(doc.error_log().contains(VERS_CLASS_ONE_ALLOWED_ATTRIBUTES));
    }
}
