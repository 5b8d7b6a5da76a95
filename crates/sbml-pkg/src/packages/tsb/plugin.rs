// crates/sbml-pkg/src/packages/tsb/plugin.rs

use super::container_y::ContainerY;
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

pub static LIST_OF_CONTAINER_YS_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfContainerYs",
    errors: ElementErrors {
        allowed_core_attributes: TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ATTRIBUTES,
        allowed_elements: TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ELEMENTS,
        id_syntax: TSB_ID_SYNTAX_RULE,
        duplicate_id: TSB_DUPLICATE_COMPONENT_ID,
    },
    rows: SBML_L3_EMPTY_ROWS,
};

/// Extends `<model>` with a `<listOfContainerYs>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TsbModelPlugin {
    namespaces: Namespaces,
    container_ys: ListOf<ContainerY>,
}

impl TsbModelPlugin {
    pub fn new(namespaces: Namespaces) -> Self {
        Self {
            container_ys: ListOf::new(&LIST_OF_CONTAINER_YS_SCHEMA, namespaces.clone()),
            namespaces,
        }
    }

    pub fn list_of_container_ys(&self) -> &ListOf<ContainerY> {
        &self.container_ys
    }

    pub fn container_y(&self, n: usize) -> Option<&ContainerY> {
        self.container_ys.get(n)
    }

    pub fn container_y_mut(&mut self, n: usize) -> Option<&mut ContainerY> {
        self.container_ys.get_mut(n)
    }

    pub fn container_y_by_id(&self, id: &str) -> Option<&ContainerY> {
        self.container_ys.get_by_id(id)
    }

    pub fn add_container_y(&mut self, container_y: &ContainerY) -> OperationResult {
        self.container_ys.add(container_y)
    }

    pub fn create_container_y(&mut self) -> &mut ContainerY {
        self.container_ys.create_with(ContainerY::with_namespaces)
    }

    pub fn remove_container_y(&mut self, n: usize) -> Option<ContainerY> {
        self.container_ys.remove(n)
    }

    pub fn remove_container_y_by_id(&mut self, id: &str) -> Option<ContainerY> {
        self.container_ys.remove_by_id(id)
    }

    pub fn num_container_ys(&self) -> usize {
        self.container_ys.len()
    }
}

impl Default for TsbModelPlugin {
    fn default() -> Self {
        Self::new(Package::Tsb.default_namespaces())
    }
}

impl SBasePlugin for TsbModelPlugin {
    fn package(&self) -> Package {
        Package::Tsb
    }

    fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != LIST_OF_CONTAINER_YS_SCHEMA.element {
            return false;
        }
        if !self.container_ys.is_empty() {
            let details = format!("A <model> may only contain one <{}>.", node.name());
            log.log_package_error(
                TSB_MODEL_ALLOWED_ELEMENTS,
                &self.namespaces,
                &details,
                node.line(),
                node.column(),
            );
        }
        read_element(&mut self.container_ys, node, log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if !self.container_ys.is_empty() {
            out.push(write_element(&self.container_ys));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        alloc::vec![&self.container_ys as &dyn SBase]
    }
}
