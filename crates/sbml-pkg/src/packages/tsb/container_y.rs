// crates/sbml-pkg/src/packages/tsb/container_y.rs

use super::abc::Abc;
use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::list_of::ListOf;
use crate::namespaces::{Namespaces, Package};
use crate::packages::id_name_accessors;
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore, read_element, write_element};
use crate::schema::{
    AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SBML_L3_EMPTY_ROWS, SchemaRow,
};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub static CONTAINER_Y_SCHEMA: ElementSchema = ElementSchema {
    element: "containerY",
    errors: ElementErrors {
        allowed_core_attributes: TSB_CONTAINER_Y_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: TSB_CONTAINER_Y_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: TSB_CONTAINER_Y_ALLOWED_ATTRIBUTES,
        allowed_elements: TSB_CONTAINER_Y_ALLOWED_ELEMENTS,
        id_syntax: TSB_ID_SYNTAX_RULE,
        duplicate_id: TSB_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, TSB_ID_SYNTAX_RULE),
            AttributeSpec::optional(
                "name",
                AttributeKind::String,
                TSB_CONTAINER_Y_NAME_MUST_BE_STRING,
            ),
        ],
    }],
};

pub static LIST_OF_ABCS_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfAbcs",
    errors: ElementErrors {
        allowed_core_attributes: TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ATTRIBUTES,
        allowed_elements: TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ELEMENTS,
        id_syntax: TSB_ID_SYNTAX_RULE,
        duplicate_id: TSB_DUPLICATE_COMPONENT_ID,
    },
    rows: SBML_L3_EMPTY_ROWS,
};

/// The `<containerY>` element: a named owner of a `<listOfAbcs>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerY {
    core: SBaseCore,
    id: String,
    name: String,
    abcs: ListOf<Abc>,
}

impl ContainerY {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Tsb, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            abcs: ListOf::new(&LIST_OF_ABCS_SCHEMA, namespaces.clone()),
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
        }
    }

    id_name_accessors!();

    // --- listOfAbcs ---

    pub fn list_of_abcs(&self) -> &ListOf<Abc> {
        &self.abcs
    }

    pub fn list_of_abcs_mut(&mut self) -> &mut ListOf<Abc> {
        &mut self.abcs
    }

    pub fn abc(&self, n: usize) -> Option<&Abc> {
        self.abcs.get(n)
    }

    pub fn abc_mut(&mut self, n: usize) -> Option<&mut Abc> {
        self.abcs.get_mut(n)
    }

    pub fn abc_by_id(&self, id: &str) -> Option<&Abc> {
        self.abcs.get_by_id(id)
    }

    pub fn abc_by_id_mut(&mut self, id: &str) -> Option<&mut Abc> {
        self.abcs.get_by_id_mut(id)
    }

    pub fn add_abc(&mut self, abc: &Abc) -> OperationResult {
        self.abcs.add(abc)
    }

    pub fn create_abc(&mut self) -> &mut Abc {
        self.abcs.create_with(Abc::with_namespaces)
    }

    pub fn remove_abc(&mut self, n: usize) -> Option<Abc> {
        self.abcs.remove(n)
    }

    pub fn remove_abc_by_id(&mut self, id: &str) -> Option<Abc> {
        self.abcs.remove_by_id(id)
    }

    pub fn num_abcs(&self) -> usize {
        self.abcs.len()
    }
}

impl Default for ContainerY {
    fn default() -> Self {
        Self::with_namespaces(Package::Tsb.default_namespaces())
    }
}

impl SBase for ContainerY {
    fn type_code(&self) -> TypeCode {
        TypeCode::TsbContainerY
    }

    fn schema(&self) -> &'static ElementSchema {
        &CONTAINER_Y_SCHEMA
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
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_ABCS_SCHEMA.element {
            return false;
        }
        if !self.abcs.is_empty() {
            let details = format!("A <containerY> may only contain one <{}>.", node.name());
            log.log_package_error(
                TSB_CONTAINER_Y_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.abcs, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if !self.abcs.is_empty() {
            out.push(write_element(&self.abcs));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.abcs as &dyn SBase]
    }
}

impl ListItem for ContainerY {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == CONTAINER_Y_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OperationError;
    use crate::tree::{ElementFilter, check_consistency, get_all_elements, get_element_by_meta_id, get_element_by_sid};

    fn abc(id: &str) -> Abc {
        let mut abc = Abc::default();
        abc.set_id(id).unwrap();
        abc.set_flag(true).unwrap();
        abc
    }

    fn populated() -> ContainerY {
        let mut c = ContainerY::default();
        c.set_id("cy").unwrap();
        c.add_abc(&abc("a1")).unwrap();
        c.add_abc(&abc("a2")).unwrap();
        c.abc_mut(1).unwrap().core_mut().set_meta_id("m2").unwrap();
        c
    }

    #[test]
    fn test_add_duplicate_id_leaves_count() {
        let mut c = populated();
        assert_eq!(c.add_abc(&abc("a1")), Err(OperationError::DuplicateObjectId));
        assert_eq!(c.num_abcs(), 2);
    }

    #[test]
    fn test_add_level_and_namespace_mismatches() {
        let mut c = populated();
        let mut wrong_version = Abc::new(3, 2, 1);
        wrong_version.set_id("b").unwrap();
        wrong_version.set_flag(true).unwrap();
        assert_eq!(c.add_abc(&wrong_version), Err(OperationError::VersionMismatch));

        let mut incomplete = Abc::default();
        incomplete.set_id("c").unwrap();
        assert_eq!(c.add_abc(&incomplete), Err(OperationError::InvalidObject));
    }

    #[test]
    fn test_remove_transfers_ownership() {
        let mut c = populated();
        assert!(c.remove_abc_by_id("nope").is_none());
        assert_eq!(c.num_abcs(), 2);
        let removed = c.remove_abc_by_id("a1").unwrap();
        assert_eq!(c.num_abcs(), 1);
        assert_eq!(removed.id(), "a1");
        assert!(removed.has_required_attributes());
        assert!(c.abc_by_id("a1").is_none());
    }

    #[test]
    fn test_create_uses_container_namespaces() {
        let mut c = ContainerY::new(3, 2, 1);
        let created = c.create_abc();
        assert_eq!(created.core().version(), 2);
        assert_eq!(c.num_abcs(), 1);
    }

    #[test]
    fn test_tree_lookups() {
        let c = populated();
        let found = get_element_by_sid(&c, "a2").map(|e| e.type_code());
        assert_eq!(found, Some(TypeCode::TsbAbc));
        assert!(get_element_by_sid(&c, "cy").is_none());
        assert_eq!(get_element_by_meta_id(&c, "m2").and_then(|e| e.id_attribute()), Some("a2"));

        // The list itself plus both abcs.
        assert_eq!(get_all_elements(&c, None).len(), 3);
        let only_abcs = |e: &dyn SBase| e.type_code() == TypeCode::TsbAbc;
        let filtered = get_all_elements(&c, Some(&only_abcs as &dyn ElementFilter));
        let ids: Vec<_> = filtered.iter().filter_map(|e| e.id_attribute()).collect();
        assert_eq!(ids, ["a1", "a2"]);
    }

    #[test]
    fn test_consistency_reports_duplicates_and_missing_attributes() {
        let mut c = populated();
        // Bypass the checks of add() to build an invalid tree.
        c.create_abc().set_id("a1").unwrap();
        let mut log = ErrorLog::new();
        let found = check_consistency(&c, &mut log);
        assert_eq!(found, 2);
        assert!(log.contains(TSB_DUPLICATE_COMPONENT_ID));
        assert!(log.contains(TSB_ABC_ALLOWED_ATTRIBUTES));
    }
}
