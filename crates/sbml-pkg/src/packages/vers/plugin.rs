// crates/sbml-pkg/src/packages/vers/plugin.rs

use super::class_one::ClassOne;
use super::errors::*;
use crate::error::ErrorLog;
use crate::list_of::ListOf;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::plugin::SBasePlugin;
use crate::sbase::{SBase, read_element, write_element};
use crate::schema::{ElementErrors, ElementSchema, SBML_L3_EMPTY_ROWS};
use crate::status::OperationResult;
use alloc::format;
use alloc::vec::Vec;

pub static LIST_OF_CLASS_ONES_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfClassOnes",
    errors: ElementErrors {
        allowed_core_attributes: VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ATTRIBUTES,
        allowed_elements: VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ELEMENTS,
        id_syntax: VERS_ID_SYNTAX_RULE,
        duplicate_id: VERS_DUPLICATE_COMPONENT_ID,
    },
    rows: SBML_L3_EMPTY_ROWS,
};

/// Extends `<model>` with a `<listOfClassOnes>`.
#[derive(Debug, Clone, PartialEq)]
pub struct VersModelPlugin {
    namespaces: Namespaces,
    class_ones: ListOf<ClassOne>,
}

impl VersModelPlugin {
    pub fn new(namespaces: Namespaces) -> Self {
        Self {
            class_ones: ListOf::new(&LIST_OF_CLASS_ONES_SCHEMA, namespaces.clone()),
            namespaces,
        }
    }

    pub fn list_of_class_ones(&self) -> &ListOf<ClassOne> {
        &self.class_ones
    }

    pub fn list_of_class_ones_mut(&mut self) -> &mut ListOf<ClassOne> {
        &mut self.class_ones
    }

    pub fn class_one(&self, n: usize) -> Option<&ClassOne> {
        self.class_ones.get(n)
    }

    pub fn class_one_mut(&mut self, n: usize) -> Option<&mut ClassOne> {
        self.class_ones.get_mut(n)
    }

    pub fn class_one_by_id(&self, id: &str) -> Option<&ClassOne> {
        self.class_ones.get_by_id(id)
    }

    pub fn add_class_one(&mut self, class_one: &ClassOne) -> OperationResult {
        self.class_ones.add(class_one)
    }

    pub fn create_class_one(&mut self) -> &mut ClassOne {
        self.class_ones.create_with(ClassOne::with_namespaces)
    }

    pub fn remove_class_one(&mut self, n: usize) -> Option<ClassOne> {
        self.class_ones.remove(n)
    }

    pub fn remove_class_one_by_id(&mut self, id: &str) -> Option<ClassOne> {
        self.class_ones.remove_by_id(id)
    }

    pub fn num_class_ones(&self) -> usize {
        self.class_ones.len()
    }
}

impl Default for VersModelPlugin {
    fn default() -> Self {
        Self::new(Package::Vers.default_namespaces())
    }
}

impl SBasePlugin for VersModelPlugin {
    fn package(&self) -> Package {
        Package::Vers
    }

    fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_CLASS_ONES_SCHEMA.element {
            return false;
        }
        if !self.class_ones.is_empty() {
            let details = format!("A <model> may only contain one <{}>.", node.name());
            log.log_package_error(
                VERS_MODEL_ALLOWED_ELEMENTS,
                &self.namespaces,
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.class_ones, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if !self.class_ones.is_empty() {
            out.push(write_element(&self.class_ones));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.class_ones as &dyn SBase]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OperationError;

    #[test]
    fn test_add_rejects_duplicates_and_mismatches() {
        let mut plugin = VersModelPlugin::default();
        let mut c = ClassOne::default();
        c.set_id("c1").unwrap();
        assert_eq!(plugin.add_class_one(&c), Ok(()));
        assert_eq!(plugin.add_class_one(&c), Err(OperationError::DuplicateObjectId));
        assert_eq!(plugin.num_class_ones(), 1);

        // Required id missing.
        assert_eq!(plugin.add_class_one(&ClassOne::default()), Err(OperationError::InvalidObject));

        let mut other_version = ClassOne::new(3, 2, 1);
        other_version.set_id("c2").unwrap();
        assert_eq!(plugin.add_class_one(&other_version), Err(OperationError::VersionMismatch));

        let mut other_pkg_version = ClassOne::new(3, 1, 2);
        other_pkg_version.set_id("c3").unwrap();
        assert_eq!(
            plugin.add_class_one(&other_pkg_version),
            Err(OperationError::NamespacesMismatch)
        );
    }

    #[test]
    fn test_create_and_remove() {
        let mut plugin = VersModelPlugin::default();
        plugin.create_class_one().set_id("a").unwrap();
        plugin.create_class_one().set_id("b").unwrap();
        assert_eq!(plugin.class_one(1).map(ClassOne::id), Some("b"));

        assert!(plugin.remove_class_one_by_id("zzz").is_none());
        assert_eq!(plugin.num_class_ones(), 2);

        let removed = plugin.remove_class_one_by_id("a");
        assert_eq!(removed.as_ref().map(ClassOne::id), Some("a"));
        assert_eq!(plugin.num_class_ones(), 1);
        assert!(plugin.remove_class_one(5).is_none());
    }
}
