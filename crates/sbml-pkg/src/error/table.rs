// crates/sbml-pkg/src/error/table.rs

//! SBML core errors reported by the shared `SBase`, `model` and `sbml` handling.

use super::{Category, ErrorTableEntry, Severity};

pub const UNRECOGNIZED_ELEMENT: u32 = 10102;
pub const DUPLICATE_COMPONENT_ID: u32 = 10301;
pub const DUPLICATE_META_ID: u32 = 10307;
pub const INVALID_SBO_TERM_SYNTAX: u32 = 10308;
pub const INVALID_META_ID_SYNTAX: u32 = 10309;
pub const INVALID_ID_SYNTAX: u32 = 10310;
pub const ONLY_ONE_NOTES_ELEMENT_ALLOWED: u32 = 10805;
pub const INVALID_NAMESPACE_ON_SBML: u32 = 20101;
pub const ALLOWED_ATTRIBUTES_ON_SBML: u32 = 20102;
pub const MISSING_OR_INCONSISTENT_LEVEL: u32 = 20103;
pub const MISSING_OR_INCONSISTENT_VERSION: u32 = 20104;
pub const ONE_MODEL_ALLOWED: u32 = 20201;
pub const ALLOWED_ATTRIBUTES_ON_MODEL: u32 = 20222;
pub const REQUIRED_PACKAGE_PRESENT: u32 = 99107;
pub const UNREQUIRED_PACKAGE_PRESENT: u32 = 99108;

pub static CORE_ERROR_TABLE: &[ErrorTableEntry] = &[
    ErrorTableEntry::new(
        UNRECOGNIZED_ELEMENT,
        "Unrecognized element",
        Category::Sbml,
        Severity::Error,
        "An SBML XML document must not contain undefined elements or \
         elements not permitted at this position.",
        "SBML L3V1 Section 4.1",
    ),
    ErrorTableEntry::new(
        DUPLICATE_COMPONENT_ID,
        "Duplicate 'id' attribute value",
        Category::IdentifierConsistency,
        Severity::Error,
        "The value of the attribute 'id' on every instance of the following \
         classes of objects must be unique across the set of all 'id' values \
         in a model.",
        "SBML L3V1 Section 3.1.7",
    ),
    ErrorTableEntry::new(
        DUPLICATE_META_ID,
        "Duplicate 'metaid' attribute value",
        Category::IdentifierConsistency,
        Severity::Error,
        "Every 'metaid' attribute value must be unique across the set of all \
         'metaid' values in a model.",
        "SBML L3V1 Section 3.2.1",
    ),
    ErrorTableEntry::new(
        INVALID_SBO_TERM_SYNTAX,
        "Invalid 'sboTerm' attribute syntax",
        Category::Sbml,
        Severity::Error,
        "The value of an 'sboTerm' attribute must have the data type SBOTerm, \
         which is a string consisting of the characters 'S', 'B', 'O', ':' \
         followed by exactly seven digits.",
        "SBML L3V1 Section 3.1.9",
    ),
    ErrorTableEntry::new(
        INVALID_META_ID_SYNTAX,
        "Invalid 'metaid' attribute syntax",
        Category::Sbml,
        Severity::Error,
        "The syntax of 'metaid' attribute values must conform to the syntax of \
         the XML type ID.",
        "SBML L3V1 Section 3.2.1",
    ),
    ErrorTableEntry::new(
        INVALID_ID_SYNTAX,
        "Invalid syntax for an 'id' attribute value",
        Category::Sbml,
        Severity::Error,
        "The syntax of 'id' attribute values must conform to the syntax of the \
         SBML data type SId.",
        "SBML L3V1 Section 3.1.7",
    ),
    ErrorTableEntry::new(
        ONLY_ONE_NOTES_ELEMENT_ALLOWED,
        "Only one <notes> or <annotation> element allowed",
        Category::Sbml,
        Severity::Error,
        "Only one <notes> and one <annotation> subobject is permitted on a \
         given SBML object.",
        "SBML L3V1 Section 3.2",
    ),
    ErrorTableEntry::new(
        INVALID_NAMESPACE_ON_SBML,
        "Invalid XML namespace for the SBML container",
        Category::Sbml,
        Severity::Error,
        "The <sbml> container object must declare the SBML Level 3 core \
         namespace as its default namespace.",
        "SBML L3V1 Section 4.1.1",
    ),
    ErrorTableEntry::new(
        ALLOWED_ATTRIBUTES_ON_SBML,
        "Invalid attribute on the SBML container",
        Category::Sbml,
        Severity::Error,
        "The <sbml> object must have the required attributes 'level' and \
         'version', and may have the optional attributes 'metaid' and \
         'sboTerm'. No other attributes from the SBML Level 3 Core namespace \
         are permitted.",
        "SBML L3V1 Section 4.1",
    ),
    ErrorTableEntry::new(
        MISSING_OR_INCONSISTENT_LEVEL,
        "Missing or inconsistent value for the 'level' attribute",
        Category::Sbml,
        Severity::Error,
        "The value of attribute 'level' on the <sbml> object must be consistent \
         with the SBML namespace declared on it.",
        "SBML L3V1 Section 4.1.3",
    ),
    ErrorTableEntry::new(
        MISSING_OR_INCONSISTENT_VERSION,
        "Missing or inconsistent value for the 'version' attribute",
        Category::Sbml,
        Severity::Error,
        "The value of attribute 'version' on the <sbml> object must be \
         consistent with the SBML namespace declared on it.",
        "SBML L3V1 Section 4.1.3",
    ),
    ErrorTableEntry::new(
        ONE_MODEL_ALLOWED,
        "Only one <model> element allowed",
        Category::Sbml,
        Severity::Error,
        "An <sbml> object may contain at most one <model> object.",
        "SBML L3V1 Section 4.1",
    ),
    ErrorTableEntry::new(
        ALLOWED_ATTRIBUTES_ON_MODEL,
        "Invalid attribute on <model>",
        Category::Sbml,
        Severity::Error,
        "A <model> object may have the optional attributes 'metaid', \
         'sboTerm', 'id', 'name', 'substanceUnits', 'timeUnits' and \
         'extentUnits'. No other attributes from the SBML Level 3 Core \
         namespace are permitted.",
        "SBML L3V1 Section 4.2",
    ),
    ErrorTableEntry::new(
        REQUIRED_PACKAGE_PRESENT,
        "The SBML document requires an SBML Level 3 package unavailable in this software",
        Category::Sbml,
        Severity::Error,
        "This document uses an SBML Level 3 package that is marked as \
         required but is not supported by this software, so the model \
         cannot be interpreted correctly.",
        "SBML L3V1 Section 4.1.2",
    ),
    ErrorTableEntry::new(
        UNREQUIRED_PACKAGE_PRESENT,
        "The SBML document uses an SBML Level 3 package unavailable in this software",
        Category::Sbml,
        Severity::Warning,
        "This document uses an SBML Level 3 package that is not supported by \
         this software. The package is marked as not required, so its \
         constructs are ignored.",
        "SBML L3V1 Section 4.1.2",
    ),
];
