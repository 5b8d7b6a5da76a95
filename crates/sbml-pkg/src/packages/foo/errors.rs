// crates/sbml-pkg/src/packages/foo/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity, package_error_table};
use crate::namespaces::Package;

const OFFSET: u32 = Package::Foo.error_offset();

pub const FOO_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const FOO_ID_SYNTAX_RULE: u32 = OFFSET + 10302;
pub const FOO_MODEL_ALLOWED_ELEMENTS: u32 = OFFSET + 20201;
pub const FOO_PARENT_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20301;
pub const FOO_PARENT_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20302;
pub const FOO_PARENT_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20303;
pub const FOO_PARENT_ALLOWED_ELEMENTS: u32 = OFFSET + 20304;
pub const FOO_PARENT_NAME_MUST_BE_STRING: u32 = OFFSET + 20305;
pub const FOO_CONTAINER_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20401;
pub const FOO_CONTAINER_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20402;
pub const FOO_CONTAINER_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20403;
pub const FOO_CONTAINER_ALLOWED_ELEMENTS: u32 = OFFSET + 20404;
pub const FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20405;
pub const FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20406;

const REFERENCE: &str = "SBML Level 3 Package Foo Version 1, Section 3";

const fn rule(code: u32, short_message: &'static str, message: &'static str) -> ErrorTableEntry {
    ErrorTableEntry::new(
        code,
        short_message,
        Category::GeneralConsistency,
        Severity::Error,
        message,
        REFERENCE,
    )
}

pub static FOO_ERROR_TABLE: &[ErrorTableEntry] = package_error_table!(
    OFFSET,
    "foo",
    "SBML Level 3 Package Foo Version 1, Section 3.1",
    [
        rule(
            FOO_MODEL_ALLOWED_ELEMENTS,
            "Elements allowed on <model>",
            "A <model> object may contain one and only one instance of the \
             <container> element. No other elements from the SBML Level 3 Foo \
             namespaces are permitted on a <model> object.",
        ),
        rule(
            FOO_PARENT_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <parent>",
            "A <parent> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespaces are permitted on a <parent>.",
        ),
        rule(
            FOO_PARENT_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <parent>",
            "A <parent> object may have the optional SBML Level 3 Core subobjects \
             for notes and annotations. No other elements from the SBML Level 3 \
             Core namespaces are permitted on a <parent>.",
        ),
        rule(
            FOO_PARENT_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <parent>",
            "A <parent> object must have the required attribute 'foo:id', and may \
             have the optional attribute 'foo:name'. No other attributes from the \
             SBML Level 3 Foo namespaces are permitted on a <parent> object.",
        ),
        rule(
            FOO_PARENT_ALLOWED_ELEMENTS,
            "Elements allowed on <parent>",
            "A <parent> object may contain one and only one instance of the <mess> \
             XML element. No other elements from the SBML Level 3 Foo namespaces \
             are permitted on a <parent> object.",
        ),
        rule(
            FOO_PARENT_NAME_MUST_BE_STRING,
            "The 'name' attribute must be String",
            "The attribute 'foo:name' on a <parent> must have a value of data type 'string'.",
        ),
        rule(
            FOO_CONTAINER_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <container>",
            "A <container> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML \
             Level 3 Core namespaces are permitted on a <container>.",
        ),
        rule(
            FOO_CONTAINER_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <container>",
            "A <container> object may have the optional SBML Level 3 Core \
             subobjects for notes and annotations. No other elements from the SBML \
             Level 3 Core namespaces are permitted on a <container>.",
        ),
        rule(
            FOO_CONTAINER_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <container>",
            "A <container> object may have the optional attribute 'foo:id'. No \
             other attributes from the SBML Level 3 Foo namespaces are permitted \
             on a <container> object.",
        ),
        rule(
            FOO_CONTAINER_ALLOWED_ELEMENTS,
            "Elements allowed on <container>",
            "A <container> object must contain one and only one instance of the \
             <listOfParents> element, and it must not be empty. No other elements \
             from the SBML Level 3 Foo namespaces are permitted on a <container> object.",
        ),
        rule(
            FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <listOfParents>",
            "Apart from the general notes and annotations subobjects permitted on \
             all SBML objects, a <listOfParents> container object may only contain \
             <parent> objects.",
        ),
        rule(
            FOO_CONTAINER_LO_PARENTS_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <listOfParents>",
            "A <listOfParents> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML \
             Level 3 Core namespaces are permitted on a <listOfParents> object.",
        ),
    ]
);
