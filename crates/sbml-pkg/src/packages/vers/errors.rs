// crates/sbml-pkg/src/packages/vers/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity, package_error_table};
use crate::namespaces::Package;

const OFFSET: u32 = Package::Vers.error_offset();

pub const VERS_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const VERS_ID_SYNTAX_RULE: u32 = OFFSET + 10302;
pub const VERS_MODEL_ALLOWED_ELEMENTS: u32 = OFFSET + 20201;
pub const VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20202;
pub const VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20203;
pub const VERS_CLASS_ONE_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20301;
pub const VERS_CLASS_ONE_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20302;
pub const VERS_CLASS_ONE_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20303;
pub const VERS_CLASS_ONE_ATT1_MUST_BE_BOOLEAN: u32 = OFFSET + 20304;
pub const VERS_CLASS_ONE_ATT2_MUST_BE_BOOLEAN: u32 = OFFSET + 20305;

const REFERENCE: &str = "SBML Level 3 Package Vers Version 1, Section 3";

pub static VERS_ERROR_TABLE: &[ErrorTableEntry] = package_error_table!(
    OFFSET,
    "vers",
    "SBML Level 3 Package Vers Version 1, Section 3.1",
    [
        ErrorTableEntry::new(
            VERS_MODEL_ALLOWED_ELEMENTS,
            "Elements allowed on <model>",
            Category::GeneralConsistency,
            Severity::Error,
            "A <model> object may contain one and only one instance of the \
             <listOfClassOnes> element. No other elements from the SBML Level 3 \
             Vers namespaces are permitted on a <model> object.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <listOfClassOnes>",
            Category::GeneralConsistency,
            Severity::Error,
            "Apart from the general notes and annotations subobjects permitted \
             on all SBML objects, a <listOfClassOnes> container object may only \
             contain <classOne> objects.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_MODEL_LO_CLASS_ONES_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <listOfClassOnes>",
            Category::GeneralConsistency,
            Severity::Error,
            "A <listOfClassOnes> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the \
             SBML Level 3 Core namespaces are permitted on a <listOfClassOnes> object.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_CLASS_ONE_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <classOne>",
            Category::GeneralConsistency,
            Severity::Error,
            "A <classOne> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the \
             SBML Level 3 Core namespaces are permitted on a <classOne>.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_CLASS_ONE_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <classOne>",
            Category::GeneralConsistency,
            Severity::Error,
            "A <classOne> object may have the optional SBML Level 3 Core \
             subobjects for notes and annotations. No other elements from the \
             SBML Level 3 Core namespaces are permitted on a <classOne>.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_CLASS_ONE_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <classOne>",
            Category::GeneralConsistency,
            Severity::Error,
            "A <classOne> object must have the required attribute 'vers:id', and \
             may have the optional attribute 'vers:att1' (version 1) or \
             'vers:att2' (version 2). No other attributes from the SBML Level 3 \
             Vers namespaces are permitted on a <classOne> object.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_CLASS_ONE_ATT1_MUST_BE_BOOLEAN,
            "The 'att1' attribute must be Boolean",
            Category::GeneralConsistency,
            Severity::Error,
            "The attribute 'vers:att1' on a <classOne> must have a value of data \
             type 'boolean'.",
            REFERENCE,
        ),
        ErrorTableEntry::new(
            VERS_CLASS_ONE_ATT2_MUST_BE_BOOLEAN,
            "The 'att2' attribute must be Boolean",
            Category::GeneralConsistency,
            Severity::Error,
            "The attribute 'vers:att2' on a <classOne> must have a value of data \
             type 'boolean'.",
            REFERENCE,
        ),
    ]
);
