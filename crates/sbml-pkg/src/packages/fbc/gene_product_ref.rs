// crates/sbml-pkg/src/packages/fbc/gene_product_ref.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::namespaces::{Namespaces, Package};
use crate::sbase::{SBase, SBaseCore, assign_sid};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::string::{String, ToString};

pub static GENE_PRODUCT_REF_SCHEMA: ElementSchema = ElementSchema {
    element: "geneProductRef",
    errors: ElementErrors {
        allowed_core_attributes: FBC_GENE_PROD_REF_ALLOWED_CORE_ATTRIBS,
        allowed_core_elements: FBC_GENE_PROD_REF_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: FBC_GENE_PROD_REF_ALLOWED_ATTRIBS,
        allowed_elements: FBC_GENE_PROD_REF_ALLOWED_CORE_ELEMENTS,
        id_syntax: FBC_SBML_SID_SYNTAX,
        duplicate_id: FBC_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(2),
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, FBC_SBML_SID_SYNTAX),
            AttributeSpec::optional("name", AttributeKind::String, FBC_GENE_PROD_REF_NAME_MUST_BE_STRING),
            AttributeSpec::required(
                "geneProduct",
                AttributeKind::SIdRef,
                FBC_GENE_PROD_REF_GENE_PRODUCT_MUST_BE_SID_REF,
            ),
        ],
    }],
};

/// A leaf of a gene association: a reference to one gene product.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneProductRef {
    core: SBaseCore,
    id: String,
    name: String,
    gene_product: String,
}

impl GeneProductRef {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Fbc, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            gene_product: String::new(),
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

    pub fn gene_product(&self) -> &str {
        &self.gene_product
    }

    pub fn is_set_gene_product(&self) -> bool {
        !self.gene_product.is_empty()
    }

    pub fn set_gene_product(&mut self, gene_product: &str) -> OperationResult {
        assign_sid(&mut self.gene_product, gene_product)
    }

    pub fn unset_gene_product(&mut self) -> OperationResult {
        self.gene_product.clear();
        Ok(())
    }
}

impl Default for GeneProductRef {
    fn default() -> Self {
        Self::with_namespaces(Package::Fbc.default_namespaces())
    }
}

impl SBase for GeneProductRef {
    fn type_code(&self) -> TypeCode {
        TypeCode::FbcGeneProductRef
    }

    fn schema(&self) -> &'static ElementSchema {
        &GENE_PRODUCT_REF_SCHEMA
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
        if let Some(gene_product) = reader.sid_ref("geneProduct") {
            self.gene_product = gene_product;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if self.is_set_gene_product() {
            attributes.add("geneProduct", &self.gene_product);
        }
    }
}
