// crates/sbml-pkg/src/packages/foo/plugin.rs

use super::container::{CONTAINER_SCHEMA, Container};
use super::errors::*;
use crate::error::ErrorLog;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::plugin::SBasePlugin;
use crate::sbase::{SBase, read_element, write_element};
use crate::status::{OperationError, OperationResult};
use alloc::format;
use alloc::vec::Vec;

/// Extends `<model>` with an optional `<container>`.
#[derive(Debug, Clone, PartialEq)]
pub struct FooModelPlugin {
    namespaces: Namespaces,
    container: Option<Container>,
}

impl FooModelPlugin {
    pub fn new(namespaces: Namespaces) -> Self {
        Self {
            namespaces,
            container: None,
        }
    }

    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut Container> {
        self.container.as_mut()
    }

    pub fn is_set_container(&self) -> bool {
        self.container.is_some()
    }

    /// Stores a copy of `container`, replacing any existing one.
    pub fn set_container(&mut self, container: &Container) -> OperationResult {
        let theirs = container.namespaces();
        if theirs.level() != self.namespaces.level() {
            return Err(OperationError::LevelMismatch);
        }
        if theirs.version() != self.namespaces.version() {
            return Err(OperationError::VersionMismatch);
        }
        if !self.namespaces.matches_for_addition(theirs) {
            return Err(OperationError::NamespacesMismatch);
        }
        self.container = Some(container.clone());
        Ok(())
    }

    /// Replaces any existing container with an empty one and returns it.
    pub fn create_container(&mut self) -> &mut Container {
        self.container
            .insert(Container::with_namespaces(self.namespaces.clone()))
    }

    /// Detaches and returns the container.
    pub fn unset_container(&mut self) -> Option<Container> {
        self.container.take()
    }
}

impl Default for FooModelPlugin {
    fn default() -> Self {
        Self::new(Package::Foo.default_namespaces())
    }
}

impl SBasePlugin for FooModelPlugin {
    fn package(&self) -> Package {
        Package::Foo
    }

    fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != CONTAINER_SCHEMA.element {
            return false;
        }
        if self.container.is_some() {
            let details = format!("A <model> may only contain one <{}>.", node.name());
            log.log_package_error(
                FOO_MODEL_ALLOWED_ELEMENTS,
                &self.namespaces,
                &details,
                node.line(),
                node.column(),
            );
            return true;
        }
        let mut container = Container::with_namespaces(self.namespaces.clone());
        read_element(&mut container, node, log);
        self.container = Some(container);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if let Some(container) = &self.container {
            out.push(write_element(container));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.container
            .iter()
            .map(|c| c as &dyn SBase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_unset_container() {
        let mut plugin = FooModelPlugin::default();
        assert!(!plugin.is_set_container());

        let mut c = Container::default();
        c.set_id("box").unwrap();
        assert_eq!(plugin.set_container(&c), Ok(()));
        assert_eq!(plugin.container().map(Container::id), Some("box"));

        let wrong = Container::new(3, 2, 1);
        assert_eq!(plugin.set_container(&wrong), Err(OperationError::VersionMismatch));

        let detached = plugin.unset_container();
        assert_eq!(detached.as_ref().map(Container::id), Some("box"));
        assert!(!plugin.is_set_container());
    }

    #[test]
    fn test_create_container_replaces() {
        let mut plugin = FooModelPlugin::default();
        plugin.create_container().set_id("one").unwrap();
        plugin.create_container();
        assert_eq!(plugin.container().map(Container::id), Some(""));
    }
}
