// crates/sbml-pkg/src/packages/tsb/abc.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes, format_bool, format_double};
use crate::namespaces::{Namespaces, Package};
use crate::packages::id_name_accessors;
use crate::sbase::{ListItem, SBase, SBaseCore, assign_unit_sid};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::{SBML_INT_MAX, TypeCode};
use alloc::string::{String, ToString};

pub static ABC_SCHEMA: ElementSchema = ElementSchema {
    element: "abc",
    errors: ElementErrors {
        allowed_core_attributes: TSB_ABC_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: TSB_ABC_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: TSB_ABC_ALLOWED_ATTRIBUTES,
        allowed_elements: TSB_ABC_ALLOWED_CORE_ELEMENTS,
        id_syntax: TSB_ID_SYNTAX_RULE,
        duplicate_id: TSB_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, TSB_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, TSB_ABC_NAME_MUST_BE_STRING),
            AttributeSpec::optional(
                "number",
                AttributeKind::UnsignedInt,
                TSB_ABC_NUMBER_MUST_BE_UN_INTEGER,
            ),
            AttributeSpec::required("flag", AttributeKind::Boolean, TSB_ABC_FLAG_MUST_BE_BOOLEAN),
            AttributeSpec::optional("value", AttributeKind::Double, TSB_ABC_VALUE_MUST_BE_DOUBLE),
            AttributeSpec::optional("unit", AttributeKind::UnitSIdRef, TSB_ABC_UNIT_MUST_BE_UNIT_SID),
        ],
    }],
};

/// The `<abc>` element: one attribute of every primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Abc {
    core: SBaseCore,
    id: String,
    name: String,
    number: Option<u32>,
    flag: Option<bool>,
    value: Option<f64>,
    unit: String,
}

impl Abc {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Tsb, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            number: None,
            flag: None,
            value: None,
            unit: String::new(),
        }
    }

    id_name_accessors!();

    /// [`SBML_INT_MAX`] when unset.
    pub fn number(&self) -> u32 {
        self.number.unwrap_or(SBML_INT_MAX)
    }

    pub fn is_set_number(&self) -> bool {
        self.number.is_some()
    }

    pub fn set_number(&mut self, number: u32) -> OperationResult {
        self.number = Some(number);
        Ok(())
    }

    pub fn unset_number(&mut self) -> OperationResult {
        self.number = None;
        Ok(())
    }

    pub fn flag(&self) -> bool {
        self.flag.unwrap_or(false)
    }

    pub fn is_set_flag(&self) -> bool {
        self.flag.is_some()
    }

    pub fn set_flag(&mut self, flag: bool) -> OperationResult {
        self.flag = Some(flag);
        Ok(())
    }

    pub fn unset_flag(&mut self) -> OperationResult {
        self.flag = None;
        Ok(())
    }

    /// `NaN` when unset.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }

    pub fn is_set_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: f64) -> OperationResult {
        self.value = Some(value);
        Ok(())
    }

    pub fn unset_value(&mut self) -> OperationResult {
        self.value = None;
        Ok(())
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn is_set_unit(&self) -> bool {
        !self.unit.is_empty()
    }

    pub fn set_unit(&mut self, unit: &str) -> OperationResult {
        assign_unit_sid(&mut self.unit, unit)
    }

    pub fn unset_unit(&mut self) -> OperationResult {
        self.unit.clear();
        Ok(())
    }
}

impl Default for Abc {
    fn default() -> Self {
        Self::with_namespaces(Package::Tsb.default_namespaces())
    }
}

impl SBase for Abc {
    fn type_code(&self) -> TypeCode {
        TypeCode::TsbAbc
    }

    fn schema(&self) -> &'static ElementSchema {
        &ABC_SCHEMA
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
        self.number = reader.unsigned_int("number");
        self.flag = reader.boolean("flag");
        self.value = reader.double("value");
        if let Some(unit) = reader.unit_sid_ref("unit") {
            self.unit = unit;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(number) = self.number {
            attributes.add("number", number.to_string());
        }
        if let Some(flag) = self.flag {
            attributes.add("flag", format_bool(flag));
        }
        if let Some(value) = self.value {
            attributes.add("value", format_double(value));
        }
        if self.is_set_unit() {
            attributes.add("unit", &self.unit);
        }
    }
}

impl ListItem for Abc {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == ABC_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::OperationError;

    #[test]
    fn test_set_get_round_trip() {
        let mut abc = Abc::default();
        abc.set_id("a1").unwrap();
        abc.set_name("An abc").unwrap();
        abc.set_number(7).unwrap();
        abc.set_flag(true).unwrap();
        abc.set_value(0.25).unwrap();
        abc.set_unit("second").unwrap();

        assert_eq!(abc.id(), "a1");
        assert_eq!(abc.name(), "An abc");
        assert_eq!(abc.number(), 7);
        assert!(abc.flag());
        assert_eq!(abc.value(), 0.25);
        assert_eq!(abc.unit(), "second");
        assert!(abc.has_required_attributes());
    }

    #[test]
    fn test_unset_defaults() {
        let mut abc = Abc::default();
        abc.set_number(3).unwrap();
        abc.set_value(1.0).unwrap();
        abc.unset_number().unwrap();
        abc.unset_value().unwrap();
        assert!(!abc.is_set_number());
        assert_eq!(abc.number(), SBML_INT_MAX);
        assert!(!abc.is_set_value());
        assert!(abc.value().is_nan());
        assert!(!abc.flag());
        assert_eq!(abc.name(), "");
    }

    #[test]
    fn test_required_attributes() {
        let mut abc = Abc::default();
        abc.set_id("a").unwrap();
        // flag is required as well.
        assert!(!abc.has_required_attributes());
        abc.set_flag(false).unwrap();
        assert!(abc.has_required_attributes());
        abc.unset_id().unwrap();
        assert!(!abc.has_required_attributes());
    }

    #[test]
    fn test_unit_syntax() {
        let mut abc = Abc::default();
        assert_eq!(abc.set_unit("per second"), Err(OperationError::InvalidAttributeValue));
        assert!(!abc.is_set_unit());
    }
}
