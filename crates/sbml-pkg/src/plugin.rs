// crates/sbml-pkg/src/plugin.rs

//! Package extensions of host elements.
//!
//! A plugin adds a package's children to a core element (here `<model>`).
//! The host asks each of its plugins to consume the child elements it does
//! not recognise itself, and appends each plugin's output after its own.

use crate::error::ErrorLog;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::packages::foo::FooModelPlugin;
use crate::packages::tsb::TsbModelPlugin;
use crate::packages::vers::VersModelPlugin;
use crate::sbase::SBase;
use alloc::vec::Vec;
use core::fmt;

/// Behaviour every package plugin provides.
pub trait SBasePlugin: fmt::Debug {
    fn package(&self) -> Package;

    /// The package namespaces the plugin's children are created in.
    fn namespaces(&self) -> &Namespaces;

    /// Consumes one child element of the host. Returns `false` if the element
    /// does not belong to this plugin.
    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool;

    fn write_elements(&self, out: &mut Vec<XmlNode>);

    fn children(&self) -> Vec<&dyn SBase>;

    fn has_required_elements(&self) -> bool {
        true
    }
}

/// The plugins a `<model>` can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelPlugin {
    Vers(VersModelPlugin),
    Tsb(TsbModelPlugin),
    Foo(FooModelPlugin),
}

impl ModelPlugin {
    /// Builds the model plugin of `package`, or `None` if the package does
    /// not extend `<model>`.
    pub fn for_package(package: Package, namespaces: Namespaces) -> Option<Self> {
        match package {
            Package::Vers => Some(ModelPlugin::Vers(VersModelPlugin::new(namespaces))),
            Package::Tsb => Some(ModelPlugin::Tsb(TsbModelPlugin::new(namespaces))),
            Package::Foo => Some(ModelPlugin::Foo(FooModelPlugin::new(namespaces))),
            Package::Fbc | Package::Spatial | Package::Distrib => None,
        }
    }

    fn inner(&self) -> &dyn SBasePlugin {
        match self {
            ModelPlugin::Vers(p) => p,
            ModelPlugin::Tsb(p) => p,
            ModelPlugin::Foo(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SBasePlugin {
        match self {
            ModelPlugin::Vers(p) => p,
            ModelPlugin::Tsb(p) => p,
            ModelPlugin::Foo(p) => p,
        }
    }

    pub fn as_vers(&self) -> Option<&VersModelPlugin> {
        match self {
            ModelPlugin::Vers(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_vers_mut(&mut self) -> Option<&mut VersModelPlugin> {
        match self {
            ModelPlugin::Vers(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_tsb(&self) -> Option<&TsbModelPlugin> {
        match self {
            ModelPlugin::Tsb(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_tsb_mut(&mut self) -> Option<&mut TsbModelPlugin> {
        match self {
            ModelPlugin::Tsb(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_foo(&self) -> Option<&FooModelPlugin> {
        match self {
            ModelPlugin::Foo(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_foo_mut(&mut self) -> Option<&mut FooModelPlugin> {
        match self {
            ModelPlugin::Foo(p) => Some(p),
            _ => None,
        }
    }
}

impl SBasePlugin for ModelPlugin {
    fn package(&self) -> Package {
        self.inner().package()
    }

    fn namespaces(&self) -> &Namespaces {
        self.inner().namespaces()
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        self.inner_mut().create_object(node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        self.inner().write_elements(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.inner().children()
    }

    fn has_required_elements(&self) -> bool {
        self.inner().has_required_elements()
    }
}
