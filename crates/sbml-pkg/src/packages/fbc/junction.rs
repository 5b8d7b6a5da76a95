// crates/sbml-pkg/src/packages/fbc/junction.rs

//! `<and>` and `<or>`: logical junctions of two or more associations,
//! written with their children inline.

use super::association::{ASSOCIATIONS_SCHEMA, Association};
use super::errors::*;
use super::gene_product_ref::GeneProductRef;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::list_of::ListOf;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::sbase::{SBase, SBaseCore, assign_sid};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

macro_rules! junction_class {
    (
        $(#[$doc:meta])*
        $name:ident {
            schema: $schema:ident,
            element: $element:literal,
            type_code: $type_code:ident,
            core_attributes: $core_attributes:expr,
            core_elements: $core_elements:expr,
            attributes: $attributes:expr,
            two_children: $two_children:expr,
            name_error: $name_error:expr,
        }
    ) => {
        pub static $schema: ElementSchema = ElementSchema {
            element: $element,
            errors: ElementErrors {
                allowed_core_attributes: $core_attributes,
                allowed_core_elements: $core_elements,
                allowed_attributes: $attributes,
                allowed_elements: $two_children,
                id_syntax: FBC_SBML_SID_SYNTAX,
                duplicate_id: FBC_DUPLICATE_COMPONENT_ID,
            },
            rows: &[SchemaRow {
                level: 3,
                versions: (1, 2),
                pkg_version: Some(2),
                attributes: &[
                    AttributeSpec::optional("id", AttributeKind::SId, FBC_SBML_SID_SYNTAX),
                    AttributeSpec::optional("name", AttributeKind::String, $name_error),
                ],
            }],
        };

        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            core: SBaseCore,
            id: String,
            name: String,
            associations: ListOf<Association>,
        }

        impl $name {
            pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
                Self::with_namespaces(
                    Namespaces::sbml(level, version).with_package(Package::Fbc, pkg_version),
                )
            }

            pub fn with_namespaces(namespaces: Namespaces) -> Self {
                Self {
                    associations: ListOf::new(&ASSOCIATIONS_SCHEMA, namespaces.clone()),
                    core: SBaseCore::new(namespaces),
                    id: String::new(),
                    name: String::new(),
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

            pub fn name(&self) -> &str {
                &self.name
            }

            pub fn is_set_name(&self) -> bool {
                !self.name.is_empty()
            }

            pub fn set_name(&mut self, name: &str) -> OperationResult {
                self.name = name.to_string();
                Ok(())
            }

            pub fn unset_name(&mut self) -> OperationResult {
                self.name.clear();
                Ok(())
            }

            pub fn associations(&self) -> impl Iterator<Item = &Association> {
                self.associations.iter()
            }

            pub fn association(&self, n: usize) -> Option<&Association> {
                self.associations.get(n)
            }

            pub fn association_mut(&mut self, n: usize) -> Option<&mut Association> {
                self.associations.get_mut(n)
            }

            pub fn association_by_id(&self, id: &str) -> Option<&Association> {
                self.associations.get_by_id(id)
            }

            pub fn num_associations(&self) -> usize {
                self.associations.len()
            }

            pub fn add_association(&mut self, association: &Association) -> OperationResult {
                self.associations.add(association)
            }

            pub fn add_gene_product_ref(&mut self, gene_product_ref: &GeneProductRef) -> OperationResult {
                self.associations
                    .append_and_own(Association::GeneProductRef(gene_product_ref.clone()))
            }

            pub fn add_fbc_and(&mut self, and: &FbcAnd) -> OperationResult {
                self.associations.append_and_own(Association::And(and.clone()))
            }

            pub fn add_fbc_or(&mut self, or: &FbcOr) -> OperationResult {
                self.associations.append_and_own(Association::Or(or.clone()))
            }

            pub fn create_gene_product_ref(&mut self) -> &mut GeneProductRef {
                let ns = self.core.namespaces().clone();
                match self.push_association(GeneProductRef::with_namespaces(ns).into()) {
                    Association::GeneProductRef(r) => r,
                    _ => unreachable!(),
                }
            }

            pub fn create_fbc_and(&mut self) -> &mut FbcAnd {
                let ns = self.core.namespaces().clone();
                match self.push_association(FbcAnd::with_namespaces(ns).into()) {
                    Association::And(and) => and,
                    _ => unreachable!(),
                }
            }

            pub fn create_fbc_or(&mut self) -> &mut FbcOr {
                let ns = self.core.namespaces().clone();
                match self.push_association(FbcOr::with_namespaces(ns).into()) {
                    Association::Or(or) => or,
                    _ => unreachable!(),
                }
            }

            pub fn remove_association(&mut self, n: usize) -> Option<Association> {
                self.associations.remove(n)
            }

            pub fn remove_association_by_id(&mut self, id: &str) -> Option<Association> {
                self.associations.remove_by_id(id)
            }

            pub(crate) fn push_association(&mut self, association: Association) -> &mut Association {
                self.associations.push(association)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::with_namespaces(Package::Fbc.default_namespaces())
            }
        }

        impl SBase for $name {
            fn type_code(&self) -> TypeCode {
                TypeCode::$type_code
            }

            fn schema(&self) -> &'static ElementSchema {
                &$schema
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
                self.associations.create_object(node, log)
            }

            fn write_elements(&self, out: &mut Vec<XmlNode>) {
                self.associations.write_items(out);
            }

            fn children(&self) -> Vec<&dyn SBase> {
                self.associations.item_refs()
            }

            fn has_required_elements(&self) -> bool {
                self.associations.len() >= 2
            }
        }
    };
}

junction_class! {
    /// All child associations are needed.
    FbcAnd {
        schema: FBC_AND_SCHEMA,
        element: "and",
        type_code: FbcAnd,
        core_attributes: FBC_AND_ALLOWED_CORE_ATTRIBUTES,
        core_elements: FBC_AND_ALLOWED_CORE_ELEMENTS,
        attributes: FBC_AND_ALLOWED_ATTRIBUTES,
        two_children: FBC_AND_TWO_CHILDREN,
        name_error: FBC_AND_NAME_MUST_BE_STRING,
    }
}

junction_class! {
    /// Any one of the child associations suffices.
    FbcOr {
        schema: FBC_OR_SCHEMA,
        element: "or",
        type_code: FbcOr,
        core_attributes: FBC_OR_ALLOWED_CORE_ATTRIBUTES,
        core_elements: FBC_OR_ALLOWED_CORE_ELEMENTS,
        attributes: FBC_OR_ALLOWED_ATTRIBUTES,
        two_children: FBC_OR_TWO_CHILDREN,
        name_error: FBC_OR_NAME_MUST_BE_STRING,
    }
}
