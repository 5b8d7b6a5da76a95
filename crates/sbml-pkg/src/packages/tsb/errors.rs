// crates/sbml-pkg/src/packages/tsb/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity, package_error_table};
use crate::namespaces::Package;

const OFFSET: u32 = Package::Tsb.error_offset();

pub const TSB_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const TSB_ID_SYNTAX_RULE: u32 = OFFSET + 10302;
pub const TSB_MODEL_ALLOWED_ELEMENTS: u32 = OFFSET + 20201;
pub const TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20202;
pub const TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20203;
pub const TSB_ABC_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20301;
pub const TSB_ABC_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20302;
pub const TSB_ABC_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20303;
pub const TSB_ABC_NAME_MUST_BE_STRING: u32 = OFFSET + 20304;
pub const TSB_ABC_NUMBER_MUST_BE_UN_INTEGER: u32 = OFFSET + 20305;
pub const TSB_ABC_FLAG_MUST_BE_BOOLEAN: u32 = OFFSET + 20306;
pub const TSB_ABC_VALUE_MUST_BE_DOUBLE: u32 = OFFSET + 20307;
pub const TSB_ABC_UNIT_MUST_BE_UNIT_SID: u32 = OFFSET + 20308;
pub const TSB_CONTAINER_Y_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20401;
pub const TSB_CONTAINER_Y_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20402;
pub const TSB_CONTAINER_Y_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20403;
pub const TSB_CONTAINER_Y_ALLOWED_ELEMENTS: u32 = OFFSET + 20404;
pub const TSB_CONTAINER_Y_NAME_MUST_BE_STRING: u32 = OFFSET + 20405;
pub const TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20406;
pub const TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20407;

const REFERENCE: &str = "SBML Level 3 Package Tsb Version 1, Section 3";

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

pub static TSB_ERROR_TABLE: &[ErrorTableEntry] = package_error_table!(
    OFFSET,
    "tsb",
    "SBML Level 3 Package Tsb Version 1, Section 3.1",
    [
        rule(
            TSB_MODEL_ALLOWED_ELEMENTS,
            "Elements allowed on <model>",
            "A <model> object may contain one and only one instance of the \
             <listOfContainerYs> element. No other elements from the SBML Level 3 \
             Tsb namespaces are permitted on a <model> object.",
        ),
        rule(
            TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <listOfContainerYs>",
            "Apart from the general notes and annotations subobjects permitted on \
             all SBML objects, a <listOfContainerYs> container object may only \
             contain <containerY> objects.",
        ),
        rule(
            TSB_MODEL_LO_CONTAINER_YS_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <listOfContainerYs>",
            "A <listOfContainerYs> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML \
             Level 3 Core namespaces are permitted on a <listOfContainerYs> object.",
        ),
        rule(
            TSB_ABC_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <abc>",
            "An <abc> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespaces are permitted on an <abc>.",
        ),
        rule(
            TSB_ABC_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <abc>",
            "An <abc> object may have the optional SBML Level 3 Core subobjects for \
             notes and annotations. No other elements from the SBML Level 3 Core \
             namespaces are permitted on an <abc>.",
        ),
        rule(
            TSB_ABC_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <abc>",
            "An <abc> object must have the required attributes 'tsb:id' and \
             'tsb:flag', and may have the optional attributes 'tsb:name', \
             'tsb:number', 'tsb:value' and 'tsb:unit'. No other attributes from the \
             SBML Level 3 Tsb namespaces are permitted on an <abc> object.",
        ),
        rule(
            TSB_ABC_NAME_MUST_BE_STRING,
            "The 'name' attribute must be String",
            "The attribute 'tsb:name' on an <abc> must have a value of data type 'string'.",
        ),
        rule(
            TSB_ABC_NUMBER_MUST_BE_UN_INTEGER,
            "The 'number' attribute must be Unsigned Integer",
            "The attribute 'tsb:number' on an <abc> must have a value of data type \
             'integer', and must be non negative.",
        ),
        rule(
            TSB_ABC_FLAG_MUST_BE_BOOLEAN,
            "The 'flag' attribute must be Boolean",
            "The attribute 'tsb:flag' on an <abc> must have a value of data type 'boolean'.",
        ),
        rule(
            TSB_ABC_VALUE_MUST_BE_DOUBLE,
            "The 'value' attribute must be Double",
            "The attribute 'tsb:value' on an <abc> must have a value of data type 'double'.",
        ),
        rule(
            TSB_ABC_UNIT_MUST_BE_UNIT_SID,
            "The 'unit' attribute must be UnitSId",
            "The value of the attribute 'tsb:unit' on an <abc> must be taken \
             from the following: the identifier of a <unitDefinition> object in \
             the enclosing <model>, or one of the base units in SBML.",
        ),
        rule(
            TSB_CONTAINER_Y_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <containerY>",
            "A <containerY> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespaces are permitted on a <containerY>.",
        ),
        rule(
            TSB_CONTAINER_Y_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <containerY>",
            "A <containerY> object may have the optional SBML Level 3 Core subobjects \
             for notes and annotations. No other elements from the SBML Level 3 Core \
             namespaces are permitted on a <containerY>.",
        ),
        rule(
            TSB_CONTAINER_Y_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <containerY>",
            "A <containerY> object may have the optional attributes 'tsb:id' and \
             'tsb:name'. No other attributes from the SBML Level 3 Tsb namespaces \
             are permitted on a <containerY> object.",
        ),
        rule(
            TSB_CONTAINER_Y_ALLOWED_ELEMENTS,
            "Elements allowed on <containerY>",
            "A <containerY> object may contain one and only one instance of the \
             <listOfAbcs> element. No other elements from the SBML Level 3 Tsb \
             namespaces are permitted on a <containerY> object.",
        ),
        rule(
            TSB_CONTAINER_Y_NAME_MUST_BE_STRING,
            "The 'name' attribute must be String",
            "The attribute 'tsb:name' on a <containerY> must have a value of data type 'string'.",
        ),
        rule(
            TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <listOfAbcs>",
            "Apart from the general notes and annotations subobjects permitted on \
             all SBML objects, a <listOfAbcs> container object may only contain \
             <abc> objects.",
        ),
        rule(
            TSB_CONTAINER_Y_LO_ABCS_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <listOfAbcs>",
            "A <listOfAbcs> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespaces are permitted on a <listOfAbcs> object.",
        ),
    ]
);
