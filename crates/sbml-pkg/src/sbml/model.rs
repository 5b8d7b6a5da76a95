// crates/sbml-pkg/src/sbml/model.rs

use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::{
    ALLOWED_ATTRIBUTES_ON_MODEL, DUPLICATE_COMPONENT_ID, ErrorLog, INVALID_ID_SYNTAX,
    ONLY_ONE_NOTES_ELEMENT_ALLOWED, UNRECOGNIZED_ELEMENT,
};
use crate::log::{ElementContext, sbml_debug};
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::packages::id_name_accessors;
use crate::plugin::{ModelPlugin, SBasePlugin};
use crate::sbase::{SBase, SBaseCore, assign_unit_sid};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::string::String;
use alloc::vec::Vec;

pub static MODEL_SCHEMA: ElementSchema = ElementSchema {
    element: "model",
    errors: ElementErrors {
        allowed_core_attributes: ALLOWED_ATTRIBUTES_ON_MODEL,
        allowed_core_elements: ONLY_ONE_NOTES_ELEMENT_ALLOWED,
        allowed_attributes: ALLOWED_ATTRIBUTES_ON_MODEL,
        allowed_elements: UNRECOGNIZED_ELEMENT,
        id_syntax: INVALID_ID_SYNTAX,
        duplicate_id: DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: None,
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, INVALID_ID_SYNTAX),
            AttributeSpec::optional("name", AttributeKind::String, ALLOWED_ATTRIBUTES_ON_MODEL),
            AttributeSpec::optional("substanceUnits", AttributeKind::UnitSIdRef, ALLOWED_ATTRIBUTES_ON_MODEL),
            AttributeSpec::optional("timeUnits", AttributeKind::UnitSIdRef, ALLOWED_ATTRIBUTES_ON_MODEL),
            AttributeSpec::optional("extentUnits", AttributeKind::UnitSIdRef, ALLOWED_ATTRIBUTES_ON_MODEL),
        ],
    }],
};

macro_rules! unit_accessors {
    ($($field:ident, $is_set:ident, $set:ident, $unset:ident;)*) => {
        $(
            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn $is_set(&self) -> bool {
                !self.$field.is_empty()
            }

            pub fn $set(&mut self, units: &str) -> OperationResult {
                assign_unit_sid(&mut self.$field, units)
            }

            pub fn $unset(&mut self) -> OperationResult {
                self.$field.clear();
                Ok(())
            }
        )*
    };
}

/// The SBML `<model>`, reduced to the attributes the packages rely on and
/// one plugin per enabled package.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    core: SBaseCore,
    id: String,
    name: String,
    substance_units: String,
    time_units: String,
    extent_units: String,
    plugins: Vec<ModelPlugin>,
}

impl Model {
    pub fn new(level: u32, version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version))
    }

    /// Builds a model in the core part of `namespaces`.
    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces.core_only()),
            id: String::new(),
            name: String::new(),
            substance_units: String::new(),
            time_units: String::new(),
            extent_units: String::new(),
            plugins: Vec::new(),
        }
    }

    id_name_accessors!();

    unit_accessors! {
        substance_units, is_set_substance_units, set_substance_units, unset_substance_units;
        time_units, is_set_time_units, set_time_units, unset_time_units;
        extent_units, is_set_extent_units, set_extent_units, unset_extent_units;
    }

    // --- plugins ---

    /// Attaches the plugin of `package`, replacing an existing one.
    ///
    /// Packages that do not extend `<model>` attach nothing.
    pub fn enable_package(&mut self, package: Package, pkg_version: u32) {
        self.disable_package(package);
        let namespaces = self.core.namespaces().clone().with_package(package, pkg_version);
        if let Some(plugin) = ModelPlugin::for_package(package, namespaces) {
            self.plugins.push(plugin);
        }
    }

    /// Drops the plugin of `package` together with its children.
    pub fn disable_package(&mut self, package: Package) {
        self.plugins.retain(|p| p.package() != package);
    }

    pub fn plugins(&self) -> &[ModelPlugin] {
        &self.plugins
    }

    pub fn plugin(&self, package: Package) -> Option<&ModelPlugin> {
        self.plugins.iter().find(|p| p.package() == package)
    }

    pub fn plugin_mut(&mut self, package: Package) -> Option<&mut ModelPlugin> {
        self.plugins.iter_mut().find(|p| p.package() == package)
    }

    pub fn num_plugins(&self) -> usize {
        self.plugins.len()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(3, 1)
    }
}

impl SBase for Model {
    fn type_code(&self) -> TypeCode {
        TypeCode::Model
    }

    fn schema(&self) -> &'static ElementSchema {
        &MODEL_SCHEMA
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
        if let Some(units) = reader.unit_sid_ref("substanceUnits") {
            self.substance_units = units;
        }
        if let Some(units) = reader.unit_sid_ref("timeUnits") {
            self.time_units = units;
        }
        if let Some(units) = reader.unit_sid_ref("extentUnits") {
            self.extent_units = units;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if self.is_set_substance_units() {
            attributes.add("substanceUnits", &self.substance_units);
        }
        if self.is_set_time_units() {
            attributes.add("timeUnits", &self.time_units);
        }
        if self.is_set_extent_units() {
            attributes.add("extentUnits", &self.extent_units);
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if self.plugins.iter_mut().any(|p| p.create_object(node, log)) {
            return true;
        }
        // Prefixed children belong to packages this document does not enable.
        if node.prefix().is_some() {
            let ctx = ElementContext::new(self.core.namespaces(), MODEL_SCHEMA.element, node.line());
            sbml_debug!(ctx, "skipping <{}> of an unknown package", node.qualified_name());
            return true;
        }
        false
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        for plugin in &self.plugins {
            plugin.write_elements(out);
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.plugins.iter().flat_map(|p| p.children()).collect()
    }

    fn has_required_elements(&self) -> bool {
        self.plugins.iter().all(|p| p.has_required_elements())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbase::{read_element, write_element};
    use crate::status::OperationError;

    #[test]
    fn test_units_are_validated() {
        let mut model = Model::default();
        assert_eq!(model.set_time_units("second"), Ok(()));
        assert_eq!(model.time_units(), "second");
        assert_eq!(model.set_extent_units("1mole"), Err(OperationError::InvalidAttributeValue));
        assert!(!model.is_set_extent_units());
    }

    #[test]
    fn test_plugins_follow_enabled_packages() {
        let mut model = Model::default();
        model.enable_package(Package::Vers, 1);
        model.enable_package(Package::Fbc, 2);
        assert_eq!(model.num_plugins(), 1);
        assert!(model.plugin(Package::Vers).and_then(ModelPlugin::as_vers).is_some());

        model.enable_package(Package::Vers, 2);
        assert_eq!(model.num_plugins(), 1);
        assert_eq!(model.plugin(Package::Vers).map(|p| p.namespaces().package_version()), Some(2));

        model.disable_package(Package::Vers);
        assert!(model.plugin(Package::Vers).is_none());
    }

    #[test]
    fn test_plugin_children_round_trip() {
        let mut model = Model::default();
        model.set_id("m").unwrap();
        model.enable_package(Package::Tsb, 1);
        let tsb = model.plugin_mut(Package::Tsb).and_then(ModelPlugin::as_tsb_mut).unwrap();
        tsb.create_container_y().set_id("y1").unwrap();

        let node = write_element(&model);
        assert_eq!(node.nth_child(0).unwrap().qualified_name(), "tsb:listOfContainerYs");

        let mut back = Model::default();
        back.enable_package(Package::Tsb, 1);
        let mut log = ErrorLog::new();
        read_element(&mut back, &node, &mut log);
        assert!(log.is_empty());
        assert_eq!(back, model);
    }

    #[test]
    fn test_unknown_children() {
        let mut node = XmlNode::new("model");
        node.add_child(XmlNode::from_qualified_name("other:listOfThings"));
        node.add_child(XmlNode::new("listOfWidgets"));
        let mut model = Model::default();
        let mut log = ErrorLog::new();
        read_element(&mut model, &node, &mut log);
        assert_eq!(log.len(), 1);
        assert!(log.contains(UNRECOGNIZED_ELEMENT));
    }
}
