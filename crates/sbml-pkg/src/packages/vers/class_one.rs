// crates/sbml-pkg/src/packages/vers/class_one.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes, format_bool};
use crate::namespaces::{Namespaces, Package};
use crate::packages::id_name_accessors;
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::string::String;

const V1_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::required("id", AttributeKind::SId, VERS_ID_SYNTAX_RULE),
    AttributeSpec::optional("att1", AttributeKind::Boolean, VERS_CLASS_ONE_ATT1_MUST_BE_BOOLEAN),
];

const V2_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::required("id", AttributeKind::SId, VERS_ID_SYNTAX_RULE),
    AttributeSpec::optional("att2", AttributeKind::Boolean, VERS_CLASS_ONE_ATT2_MUST_BE_BOOLEAN),
];

/// `att1` exists only in package version 1, `att2` only in version 2.
pub static CLASS_ONE_SCHEMA: ElementSchema = ElementSchema {
    element: "classOne",
    errors: ElementErrors {
        allowed_core_attributes: VERS_CLASS_ONE_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: VERS_CLASS_ONE_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: VERS_CLASS_ONE_ALLOWED_ATTRIBUTES,
        allowed_elements: VERS_CLASS_ONE_ALLOWED_CORE_ELEMENTS,
        id_syntax: VERS_ID_SYNTAX_RULE,
        duplicate_id: VERS_DUPLICATE_COMPONENT_ID,
    },
    rows: &[
        SchemaRow {
            level: 3,
            versions: (1, 2),
            pkg_version: Some(1),
            attributes: V1_ATTRIBUTES,
        },
        SchemaRow {
            level: 3,
            versions: (1, 2),
            pkg_version: Some(2),
            attributes: V2_ATTRIBUTES,
        },
    ],
};

/// The `<classOne>` element of the vers package.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassOne {
    core: SBaseCore,
    id: String,
    att1: Option<bool>,
    att2: Option<bool>,
}

impl ClassOne {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Vers, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            att1: None,
            att2: None,
        }
    }

    id_name_accessors!(id);

    pub fn att1(&self) -> bool {
        self.att1.unwrap_or(false)
    }

    pub fn is_set_att1(&self) -> bool {
        self.att1.is_some()
    }

    pub fn set_att1(&mut self, att1: bool) -> OperationResult {
        CLASS_ONE_SCHEMA.check_attribute(self.core.namespaces(), "att1")?;
        self.att1 = Some(att1);
        Ok(())
    }

    pub fn unset_att1(&mut self) -> OperationResult {
        self.att1 = None;
        Ok(())
    }

    pub fn att2(&self) -> bool {
        self.att2.unwrap_or(false)
    }

    pub fn is_set_att2(&self) -> bool {
        self.att2.is_some()
    }

    pub fn set_att2(&mut self, att2: bool) -> OperationResult {
        CLASS_ONE_SCHEMA.check_attribute(self.core.namespaces(), "att2")?;
        self.att2 = Some(att2);
        Ok(())
    }

    pub fn unset_att2(&mut self) -> OperationResult {
        self.att2 = None;
        Ok(())
    }
}

impl Default for ClassOne {
    fn default() -> Self {
        Self::with_namespaces(Package::Vers.default_namespaces())
    }
}

impl SBase for ClassOne {
    fn type_code(&self) -> TypeCode {
        TypeCode::VersClassOne
    }

    fn schema(&self) -> &'static ElementSchema {
        &CLASS_ONE_SCHEMA
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
        self.att1 = reader.boolean("att1");
        self.att2 = reader.boolean("att2");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if let Some(att1) = self.att1 {
            attributes.add("att1", format_bool(att1));
        }
        if let Some(att2) = self.att2 {
            attributes.add("att2", format_bool(att2));
        }
    }
}

impl ListItem for ClassOne {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == CLASS_ONE_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OperationError;

    #[test]
    fn test_version_one_accepts_att1_only() {
        // 1. Construct in package version 1.
        let mut c = ClassOne::new(3, 1, 1);
        assert!(!c.has_required_attributes());

        // 2. Set the id and the version-1 attribute.
        assert_eq!(c.set_id("foo"), Ok(()));
        assert_eq!(c.set_att1(true), Ok(()));

        // 3. att2 does not exist in version 1.
        assert_eq!(c.set_att2(true), Err(OperationError::UnexpectedAttribute));
        assert!(!c.is_set_att2());
        assert!(c.has_required_attributes());
        assert!(c.att1());
    }

    #[test]
    fn test_version_two_accepts_att2_only() {
        let mut c = ClassOne::new(3, 2, 2);
        assert_eq!(c.set_att1(true), Err(OperationError::UnexpectedAttribute));
        assert_eq!(c.set_att2(false), Ok(()));
        assert!(c.is_set_att2());
        assert!(!c.att2());
    }

    #[test]
    fn test_unset_restores_defaults() {
        let mut c = ClassOne::default();
        c.set_id("x").unwrap();
        c.set_att1(true).unwrap();
        c.unset_id().unwrap();
        c.unset_att1().unwrap();
        assert!(!c.is_set_id());
        assert_eq!(c.id(), "");
        assert!(!c.is_set_att1());
        assert!(!c.att1());
    }

    #[test]
    fn test_invalid_id_rejected() {
        let mut c = ClassOne::default();
        assert_eq!(c.set_id("9lives"), Err(OperationError::InvalidAttributeValue));
        assert!(!c.is_set_id());
    }

    #[test]
    fn test_write_attributes_in_declared_order() {
        let mut c = ClassOne::default();
        c.set_att1(false).unwrap();
        c.set_id("c1").unwrap();
        let mut attrs = XmlAttributes::new();
        c.write_attributes(&mut attrs);
        let names: alloc::vec::Vec<_> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["id", "att1"]);
    }
}
