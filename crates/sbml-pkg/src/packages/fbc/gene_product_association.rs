// crates/sbml-pkg/src/packages/fbc/gene_product_association.rs

use super::association::{Association, InfixError};
use super::errors::*;
use super::gene_product_ref::GeneProductRef;
use super::junction::{FbcAnd, FbcOr};
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::namespaces::{Namespaces, Package};
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore, assign_sid, read_item, write_element};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::{OperationError, OperationResult};
use crate::types::TypeCode;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

pub static GENE_PRODUCT_ASSOCIATION_SCHEMA: ElementSchema = ElementSchema {
    element: "geneProductAssociation",
    errors: ElementErrors {
        allowed_core_attributes: FBC_GENE_PROD_ASSOC_ALLOWED_CORE_ATTRIBS,
        allowed_core_elements: FBC_GENE_PROD_ASSOC_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: FBC_GENE_PROD_ASSOC_ALLOWED_ATTRIBS,
        allowed_elements: FBC_GENE_PROD_ASSOC_CONTAINS_ONE_ELEMENT,
        id_syntax: FBC_SBML_SID_SYNTAX,
        duplicate_id: FBC_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(2),
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, FBC_SBML_SID_SYNTAX),
            AttributeSpec::optional("name", AttributeKind::String, FBC_GENE_PROD_ASSOC_NAME_MUST_BE_STRING),
        ],
    }],
};

/// The gene rule of a reaction. Holds exactly one association once valid.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneProductAssociation {
    core: SBaseCore,
    id: String,
    name: String,
    association: Option<Association>,
}

impl GeneProductAssociation {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Fbc, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            association: None,
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

    pub fn association(&self) -> Option<&Association> {
        self.association.as_ref()
    }

    pub fn association_mut(&mut self) -> Option<&mut Association> {
        self.association.as_mut()
    }

    pub fn is_set_association(&self) -> bool {
        self.association.is_some()
    }

    /// Stores a copy of `association`, replacing any existing one.
    pub fn set_association(&mut self, association: &Association) -> OperationResult {
        let own = self.core.namespaces();
        let theirs = association.namespaces();
        if own.level() != theirs.level() {
            return Err(OperationError::LevelMismatch);
        }
        if own.version() != theirs.version() {
            return Err(OperationError::VersionMismatch);
        }
        if !own.matches_for_addition(theirs) {
            return Err(OperationError::NamespacesMismatch);
        }
        self.association = Some(association.clone());
        Ok(())
    }

    /// Replaces the association with one parsed from `text`.
    pub fn set_association_infix(&mut self, text: &str) -> Result<(), InfixError> {
        let association = Association::parse_infix(text, self.core.namespaces())?;
        self.association = Some(association);
        Ok(())
    }

    /// The association as an infix expression, or `""` if unset.
    pub fn association_infix(&self) -> String {
        self.association
            .as_ref()
            .map(Association::to_infix)
            .unwrap_or_default()
    }

    pub fn create_gene_product_ref(&mut self) -> &mut GeneProductRef {
        let ns = self.core.namespaces().clone();
        match self.association.insert(GeneProductRef::with_namespaces(ns).into()) {
            Association::GeneProductRef(r) => r,
            _ => unreachable!(),
        }
    }

    pub fn create_fbc_and(&mut self) -> &mut FbcAnd {
        let ns = self.core.namespaces().clone();
        match self.association.insert(FbcAnd::with_namespaces(ns).into()) {
            Association::And(and) => and,
            _ => unreachable!(),
        }
    }

    pub fn create_fbc_or(&mut self) -> &mut FbcOr {
        let ns = self.core.namespaces().clone();
        match self.association.insert(FbcOr::with_namespaces(ns).into()) {
            Association::Or(or) => or,
            _ => unreachable!(),
        }
    }

    /// Detaches and returns the association.
    pub fn unset_association(&mut self) -> Option<Association> {
        self.association.take()
    }
}

impl Default for GeneProductAssociation {
    fn default() -> Self {
        Self::with_namespaces(Package::Fbc.default_namespaces())
    }
}

impl SBase for GeneProductAssociation {
    fn type_code(&self) -> TypeCode {
        TypeCode::FbcGeneProductAssociation
    }

    fn schema(&self) -> &'static ElementSchema {
        &GENE_PRODUCT_ASSOCIATION_SCHEMA
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
        if Association::create_item(node.name(), self.core.namespaces()).is_none() {
            return false;
        }
        if self.association.is_some() {
            let details = format!(
                "A <geneProductAssociation> may only contain one association, found a second <{}>.",
                node.name()
            );
            log.log_package_error(
                FBC_GENE_PROD_ASSOC_CONTAINS_ONE_ELEMENT,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
            return true;
        }
        self.association = read_item(node, self.core.namespaces(), log);
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if let Some(association) = &self.association {
            out.push(write_element(association));
        }
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.association
            .iter()
            .map(|a| a as &dyn SBase)
            .collect()
    }

    fn has_required_elements(&self) -> bool {
        self.association.is_some()
    }
}

impl ListItem for GeneProductAssociation {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == GENE_PRODUCT_ASSOCIATION_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbase::read_element;
    use crate::tree::{check_consistency, get_all_elements};

    #[test]
    fn test_second_association_is_reported() {
        let mut node = XmlNode::new("geneProductAssociation");
        let mut first = XmlNode::new("geneProductRef");
        first.attributes_mut().add("geneProduct", "g1");
        node.add_child(first);
        node.add_child(XmlNode::new("or"));

        let mut gpa = GeneProductAssociation::default();
        let mut log = ErrorLog::new();
        read_element(&mut gpa, &node, &mut log);
        assert!(gpa.association().is_some_and(Association::is_gene_product_ref));
        assert!(log.contains(FBC_GENE_PROD_ASSOC_CONTAINS_ONE_ELEMENT));
    }

    #[test]
    fn test_missing_association_fails_consistency() {
        let gpa = GeneProductAssociation::default();
        let mut log = ErrorLog::new();
        check_consistency(&gpa, &mut log);
        assert!(log.contains(FBC_GENE_PROD_ASSOC_CONTAINS_ONE_ELEMENT));
    }

    #[test]
    fn test_infix_accessors() {
        let mut gpa = GeneProductAssociation::default();
        assert_eq!(gpa.association_infix(), "");
        gpa.set_association_infix("b1 and (b2 or b3)").unwrap();
        assert_eq!(gpa.association_infix(), "b1 and (b2 or b3)");

        let all = get_all_elements(&gpa, None);
        let refs = all
            .iter()
            .filter(|e| e.type_code() == TypeCode::FbcGeneProductRef)
            .count();
        assert_eq!(refs, 3);
    }

    #[test]
    fn test_set_association_checks_namespaces() {
        let mut gpa = GeneProductAssociation::default();
        let other = Association::from(GeneProductRef::new(3, 2, 2));
        assert_eq!(gpa.set_association(&other), Err(OperationError::VersionMismatch));

        gpa.create_fbc_or().create_gene_product_ref().set_gene_product("x").unwrap();
        assert!(gpa.association().is_some_and(Association::is_fbc_or));
        assert!(gpa.unset_association().is_some());
        assert!(!gpa.is_set_association());
    }
}
