// crates/sbml-pkg/src/packages/foo/container.rs

use super::errors::*;
use super::parent::Parent;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::list_of::ListOf;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore, assign_sid, read_element, write_element};
use crate::schema::{
    AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SBML_L3_EMPTY_ROWS, SchemaRow,
};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub static CONTAINER_SCHEMA: ElementSchema = ElementSchema {
    element: "container",
    errors: ElementErrors {
        allowed_core_attributes: FOO_CONTAINER_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: FOO_CONTAINER_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: FOO_CONTAINER_ALLOWED_ATTRIBUTES,
        allowed_elements: FOO_CONTAINER_ALLOWED_ELEMENTS,
        id_syntax: FOO_ID_SYNTAX_RULE,
        duplicate_id: FOO_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[AttributeSpec::optional("id", AttributeKind::SId, FOO_ID_SYNTAX_RULE)],
    }],
};

pub static LIST_OF_PARENTS_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfParents",
    errors: ElementErrors {
        allowed_core_attributes: FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ATTRIBUTES,
        allowed_elements: FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ELEMENTS,
        id_syntax: FOO_ID_SYNTAX_RULE,
        duplicate_id: FOO_DUPLICATE_COMPONENT_ID,
    },
    rows: SBML_L3_EMPTY_ROWS,
};

/// The `<container>` element. Its `<listOfParents>` is required and must
/// not be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    core: SBaseCore,
    id: String,
    parents: ListOf<Parent>,
}

impl Container {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Foo, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            parents: ListOf::new_required(&LIST_OF_PARENTS_SCHEMA, namespaces.clone()),
            core: SBaseCore::new(namespaces),
            id: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_set_id(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn set_id(&mut self, id: &str) -> OperationResult {
        assign_sid(&mut self.id, id)
    }

    pub fn unset_id(&mut self) -> OperationResult {
        self.id.clear();
        Ok(())
    }

    pub fn list_of_parents(&self) -> &ListOf<Parent> {
        &self.parents
    }

    pub fn parent(&self, n: usize) -> Option<&Parent> {
        self.parents.get(n)
    }

    pub fn parent_mut(&mut self, n: usize) -> Option<&mut Parent> {
        self.parents.get_mut(n)
    }

    pub fn parent_by_id(&self, id: &str) -> Option<&Parent> {
        self.parents.get_by_id(id)
    }

    pub fn add_parent(&mut self, parent: &Parent) -> OperationResult {
        self.parents.add(parent)
    }

    pub fn create_parent(&mut self) -> &mut Parent {
        self.parents.create_with(Parent::with_namespaces)
    }

    pub fn remove_parent(&mut self, n: usize) -> Option<Parent> {
        self.parents.remove(n)
    }

    pub fn remove_parent_by_id(&mut self, id: &str) -> Option<Parent> {
        self.parents.remove_by_id(id)
    }

    pub fn num_parents(&self) -> usize {
        self.parents.len()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::with_namespaces(Package::Foo.default_namespaces())
    }
}

impl SBase for Container {
    fn type_code(&self) -> TypeCode {
        TypeCode::FooContainer
    }

    fn schema(&self) -> &'static ElementSchema {
        &CONTAINER_SCHEMA
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

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        if let Some(id) = reader.sid("id") {
            self.id = id;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_PARENTS_SCHEMA.element {
            return false;
        }
        if !self.parents.is_empty() {
            let details = format!("A <container> may only contain one <{}>.", node.name());
            log.log_package_error(
                FOO_CONTAINER_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.parents, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        out.push(write_element(&self.parents));
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.parents as &dyn SBase]
    }

    fn has_required_elements(&self) -> bool {
        !self.parents.is_empty()
    }
}

impl ListItem for Container {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == CONTAINER_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::check_consistency;

    #[test]
    fn test_empty_parents_fail_required_elements() {
        let mut c = Container::default();
        assert!(!c.has_required_elements());
        c.create_parent().set_id("p").unwrap();
        assert!(c.has_required_elements());
        assert!(c.remove_parent(0).is_some());
        assert!(!c.has_required_elements());
    }

    #[test]
    fn test_consistency_reports_empty_list() {
        let c = Container::default();
        let mut log = ErrorLog::new();
        check_consistency(&c, &mut log);
        // The container and its required list both report.
        assert!(log.contains(FOO_CONTAINER_ALLOWED_ELEMENTS));
        assert!(log.contains(FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ELEMENTS));
    }
}
