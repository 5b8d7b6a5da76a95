// crates/sbml-pkg/src/schema.rs

//! Static attribute schema tables.
//!
//! Each element class owns one [`ElementSchema`]: the attributes it accepts
//! for every `(level, version, package version)` combination, plus the error
//! codes its reader reports. Setters, readers and the unknown-attribute check
//! all consult the same table, so version-gated attributes (such as
//! `ClassOne`'s `att1`/`att2`) need no per-method branching.

use crate::attributes::ExpectedAttributes;
use crate::namespaces::Namespaces;
use crate::status::{OperationError, OperationResult};

/// The value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    SId,
    SIdRef,
    UnitSIdRef,
    String,
    Boolean,
    UnsignedInt,
    Int,
    Double,
    /// One of a closed set of string values.
    Enum(&'static [&'static str]),
}

impl AttributeKind {
    /// The type name used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            AttributeKind::SId => "SId",
            AttributeKind::SIdRef => "SIdRef",
            AttributeKind::UnitSIdRef => "UnitSIdRef",
            AttributeKind::String => "string",
            AttributeKind::Boolean => "boolean",
            AttributeKind::UnsignedInt => "unsigned integer",
            AttributeKind::Int => "integer",
            AttributeKind::Double => "double",
            AttributeKind::Enum(_) => "enumeration",
        }
    }
}

/// One attribute of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
    /// Code logged when the value does not parse as `kind`.
    pub error: u32,
}

impl AttributeSpec {
    pub const fn required(name: &'static str, kind: AttributeKind, error: u32) -> Self {
        Self {
            name,
            kind,
            required: true,
            error,
        }
    }

    pub const fn optional(name: &'static str, kind: AttributeKind, error: u32) -> Self {
        Self {
            name,
            kind,
            required: false,
            error,
        }
    }
}

/// The attribute set valid for a range of namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRow {
    pub level: u32,
    /// Inclusive range of host versions.
    pub versions: (u32, u32),
    /// `None` matches any package version (and core namespaces).
    pub pkg_version: Option<u32>,
    /// In declaration order; this is also the write order.
    pub attributes: &'static [AttributeSpec],
}

impl SchemaRow {
    fn matches(&self, ns: &Namespaces) -> bool {
        self.level == ns.level()
            && (self.versions.0..=self.versions.1).contains(&ns.version())
            && self
                .pkg_version
                .is_none_or(|pv| pv == ns.package_version())
    }
}

/// The single row of an attribute-less SBML Level 3 element such as a `listOf`.
pub const SBML_L3_EMPTY_ROWS: &[SchemaRow] = &[SchemaRow {
    level: 3,
    versions: (1, 2),
    pkg_version: None,
    attributes: &[],
}];

/// Error codes an element's reader and consistency check report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementErrors {
    pub allowed_core_attributes: u32,
    pub allowed_core_elements: u32,
    pub allowed_attributes: u32,
    pub allowed_elements: u32,
    pub id_syntax: u32,
    pub duplicate_id: u32,
}

/// The full schema of one element class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSchema {
    /// The XML local name.
    pub element: &'static str,
    pub errors: ElementErrors,
    pub rows: &'static [SchemaRow],
}

impl ElementSchema {
    /// The row matching the given namespaces, if any.
    pub fn row(&self, ns: &Namespaces) -> Option<&'static SchemaRow> {
        self.rows.iter().find(|r| r.matches(ns))
    }

    pub fn attribute(&self, ns: &Namespaces, name: &str) -> Option<&'static AttributeSpec> {
        self.row(ns)?.attributes.iter().find(|a| a.name == name)
    }

    /// Returns `true` if the attribute exists for the given namespaces.
    pub fn allows(&self, ns: &Namespaces, name: &str) -> bool {
        self.attribute(ns, name).is_some()
    }

    /// `Ok` if the attribute exists for the given namespaces,
    /// [`OperationError::UnexpectedAttribute`] otherwise.
    pub fn check_attribute(&self, ns: &Namespaces, name: &str) -> OperationResult {
        if self.allows(ns, name) {
            Ok(())
        } else {
            Err(OperationError::UnexpectedAttribute)
        }
    }

    /// Names of the required attributes for the given namespaces.
    pub fn required_attributes(&self, ns: &Namespaces) -> impl Iterator<Item = &'static str> {
        self.row(ns)
            .map(|r| r.attributes)
            .unwrap_or(&[])
            .iter()
            .filter(|a| a.required)
            .map(|a| a.name)
    }

    /// Core attributes plus the row's attributes.
    pub fn expected_attributes(&self, ns: &Namespaces) -> ExpectedAttributes {
        let mut expected = ExpectedAttributes::core();
        if let Some(row) = self.row(ns) {
            for attr in row.attributes {
                expected.add(attr.name);
            }
        }
        expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::Package;
    use alloc::vec::Vec;

    const V1: &[AttributeSpec] = &[
        AttributeSpec::required("id", AttributeKind::SId, 1),
        AttributeSpec::optional("att1", AttributeKind::Boolean, 2),
    ];
    const V2: &[AttributeSpec] = &[
        AttributeSpec::required("id", AttributeKind::SId, 1),
        AttributeSpec::optional("att2", AttributeKind::Boolean, 3),
    ];

    static SCHEMA: ElementSchema = ElementSchema {
        element: "classOne",
        errors: ElementErrors {
            allowed_core_attributes: 10,
            allowed_core_elements: 11,
            allowed_attributes: 12,
            allowed_elements: 13,
            id_syntax: 14,
            duplicate_id: 15,
        },
        rows: &[
            SchemaRow {
                level: 3,
                versions: (1, 2),
                pkg_version: Some(1),
                attributes: V1,
            },
            SchemaRow {
                level: 3,
                versions: (1, 2),
                pkg_version: Some(2),
                attributes: V2,
            },
        ],
    };

    #[test]
    fn test_row_selection_by_package_version() {
        let v1 = Namespaces::sbml(3, 1).with_package(Package::Vers, 1);
        let v2 = Namespaces::sbml(3, 2).with_package(Package::Vers, 2);
        assert!(SCHEMA.allows(&v1, "att1"));
        assert!(!SCHEMA.allows(&v1, "att2"));
        assert!(SCHEMA.allows(&v2, "att2"));
        assert_eq!(
            SCHEMA.check_attribute(&v2, "att1"),
            Err(OperationError::UnexpectedAttribute)
        );
    }

    #[test]
    fn test_no_row_for_unsupported_level() {
        let l2 = Namespaces::sbml(2, 4).with_package(Package::Vers, 1);
        assert!(SCHEMA.row(&l2).is_none());
        assert_eq!(SCHEMA.required_attributes(&l2).count(), 0);
    }

    #[test]
    fn test_expected_attributes_include_core() {
        let v1 = Namespaces::sbml(3, 1).with_package(Package::Vers, 1);
        let expected = SCHEMA.expected_attributes(&v1);
        assert!(expected.contains("metaid"));
        assert!(expected.contains("sboTerm"));
        assert!(expected.contains("att1"));
        assert!(!expected.contains("att2"));
        let required: Vec<_> = SCHEMA.required_attributes(&v1).collect();
        assert_eq!(required, ["id"]);
    }
}
