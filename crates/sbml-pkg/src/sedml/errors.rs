// crates/sbml-pkg/src/sedml/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity};

const OFFSET: u32 = 8_000_000;

pub const SEDML_NAMESPACE_MISMATCH: u32 = OFFSET + 10101;
pub const SEDML_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const SEDML_ID_SYNTAX_RULE: u32 = OFFSET + 10302;

pub const SEDML_DOCUMENT_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20101;
pub const SEDML_DOCUMENT_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20102;
pub const SEDML_DOCUMENT_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20103;
pub const SEDML_DOCUMENT_ALLOWED_ELEMENTS: u32 = OFFSET + 20104;
pub const SEDML_DOCUMENT_LEVEL_MUST_BE_INTEGER: u32 = OFFSET + 20105;
pub const SEDML_DOCUMENT_VERSION_MUST_BE_INTEGER: u32 = OFFSET + 20106;
pub const SEDML_DOCUMENT_LO_MODELS_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20107;
pub const SEDML_DOCUMENT_LO_MODELS_ALLOWED_ELEMENTS: u32 = OFFSET + 20108;

pub const SEDML_MODEL_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20201;
pub const SEDML_MODEL_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20202;
pub const SEDML_MODEL_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20203;
pub const SEDML_MODEL_ALLOWED_ELEMENTS: u32 = OFFSET + 20204;
pub const SEDML_MODEL_NAME_MUST_BE_STRING: u32 = OFFSET + 20205;
pub const SEDML_MODEL_LANGUAGE_MUST_BE_STRING: u32 = OFFSET + 20206;
pub const SEDML_MODEL_SOURCE_MUST_BE_STRING: u32 = OFFSET + 20207;
pub const SEDML_MODEL_LO_CHANGES_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20208;
pub const SEDML_MODEL_LO_CHANGES_ALLOWED_ELEMENTS: u32 = OFFSET + 20209;

pub const SEDML_CHANGE_ATTRIBUTE_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20301;
pub const SEDML_CHANGE_ATTRIBUTE_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20302;
pub const SEDML_CHANGE_ATTRIBUTE_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20303;
pub const SEDML_CHANGE_ATTRIBUTE_ALLOWED_ELEMENTS: u32 = OFFSET + 20304;
pub const SEDML_CHANGE_ATTRIBUTE_NAME_MUST_BE_STRING: u32 = OFFSET + 20305;
pub const SEDML_CHANGE_ATTRIBUTE_TARGET_MUST_BE_STRING: u32 = OFFSET + 20306;
pub const SEDML_CHANGE_ATTRIBUTE_NEW_VALUE_MUST_BE_STRING: u32 = OFFSET + 20307;

pub const SEDML_REMOVE_XML_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20401;
pub const SEDML_REMOVE_XML_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20402;
pub const SEDML_REMOVE_XML_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20403;
pub const SEDML_REMOVE_XML_ALLOWED_ELEMENTS: u32 = OFFSET + 20404;
pub const SEDML_REMOVE_XML_NAME_MUST_BE_STRING: u32 = OFFSET + 20405;
pub const SEDML_REMOVE_XML_TARGET_MUST_BE_STRING: u32 = OFFSET + 20406;

pub const SEDML_ADD_XML_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20501;
pub const SEDML_ADD_XML_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20502;
pub const SEDML_ADD_XML_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20503;
pub const SEDML_ADD_XML_ALLOWED_ELEMENTS: u32 = OFFSET + 20504;
pub const SEDML_ADD_XML_NAME_MUST_BE_STRING: u32 = OFFSET + 20505;
pub const SEDML_ADD_XML_TARGET_MUST_BE_STRING: u32 = OFFSET + 20506;

const REFERENCE: &str = "SED-ML Level 1 Version 4, Section 2";

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

/// The four structural rules every SED-ML class carries.
macro_rules! sed_rules {
    ($element:literal, $attributes:literal, $elements:literal, $codes:expr) => {
        [
            rule(
                $codes[0],
                concat!("Core attributes allowed on <", $element, ">"),
                concat!(
                    "A <", $element, "> object may have the optional attribute 'metaid'. \
                     No other attributes from the SED-ML namespaces are permitted as core \
                     attributes on a <", $element, ">."
                ),
            ),
            rule(
                $codes[1],
                concat!("Core elements allowed on <", $element, ">"),
                concat!(
                    "A <", $element, "> object may have one optional <notes> and one \
                     optional <annotation> subobject."
                ),
            ),
            rule(
                $codes[2],
                concat!("Attributes allowed on <", $element, ">"),
                concat!("A <", $element, "> object ", $attributes),
            ),
            rule(
                $codes[3],
                concat!("Elements allowed on <", $element, ">"),
                concat!("A <", $element, "> object ", $elements),
            ),
        ]
    };
}

const DOCUMENT: [ErrorTableEntry; 4] = sed_rules!(
    "sedML",
    "must have the required attributes 'level' and 'version'. No other attributes from \
     the SED-ML namespaces are permitted on a <sedML> object.",
    "may contain one optional <listOfModels>. No other elements are permitted.",
    [
        SEDML_DOCUMENT_ALLOWED_CORE_ATTRIBUTES,
        SEDML_DOCUMENT_ALLOWED_CORE_ELEMENTS,
        SEDML_DOCUMENT_ALLOWED_ATTRIBUTES,
        SEDML_DOCUMENT_ALLOWED_ELEMENTS,
    ]
);

const MODEL: [ErrorTableEntry; 4] = sed_rules!(
    "model",
    "must have the required attributes 'id' and 'source', and may have the optional \
     attributes 'name' and 'language'. No other attributes from the SED-ML namespaces \
     are permitted on a <model> object.",
    "may contain one optional <listOfChanges>. No other elements are permitted.",
    [
        SEDML_MODEL_ALLOWED_CORE_ATTRIBUTES,
        SEDML_MODEL_ALLOWED_CORE_ELEMENTS,
        SEDML_MODEL_ALLOWED_ATTRIBUTES,
        SEDML_MODEL_ALLOWED_ELEMENTS,
    ]
);

const CHANGE_ATTRIBUTE: [ErrorTableEntry; 4] = sed_rules!(
    "changeAttribute",
    "must have the required attributes 'target' and 'newValue', and may have the \
     optional attributes 'id' and 'name'. No other attributes from the SED-ML namespaces \
     are permitted on a <changeAttribute> object.",
    "must not contain child elements other than <notes> and <annotation>.",
    [
        SEDML_CHANGE_ATTRIBUTE_ALLOWED_CORE_ATTRIBUTES,
        SEDML_CHANGE_ATTRIBUTE_ALLOWED_CORE_ELEMENTS,
        SEDML_CHANGE_ATTRIBUTE_ALLOWED_ATTRIBUTES,
        SEDML_CHANGE_ATTRIBUTE_ALLOWED_ELEMENTS,
    ]
);

const REMOVE_XML: [ErrorTableEntry; 4] = sed_rules!(
    "removeXML",
    "must have the required attribute 'target', and may have the optional attributes \
     'id' and 'name'. No other attributes from the SED-ML namespaces are permitted on a \
     <removeXML> object.",
    "must not contain child elements other than <notes> and <annotation>.",
    [
        SEDML_REMOVE_XML_ALLOWED_CORE_ATTRIBUTES,
        SEDML_REMOVE_XML_ALLOWED_CORE_ELEMENTS,
        SEDML_REMOVE_XML_ALLOWED_ATTRIBUTES,
        SEDML_REMOVE_XML_ALLOWED_ELEMENTS,
    ]
);

const ADD_XML: [ErrorTableEntry; 4] = sed_rules!(
    "addXML",
    "must have the required attribute 'target', and may have the optional attributes \
     'id' and 'name'. No other attributes from the SED-ML namespaces are permitted on an \
     <addXML> object.",
    "must contain exactly one <newXML> element.",
    [
        SEDML_ADD_XML_ALLOWED_CORE_ATTRIBUTES,
        SEDML_ADD_XML_ALLOWED_CORE_ELEMENTS,
        SEDML_ADD_XML_ALLOWED_ATTRIBUTES,
        SEDML_ADD_XML_ALLOWED_ELEMENTS,
    ]
);

pub static SEDML_ERROR_TABLE: &[ErrorTableEntry] = &[
    rule(
        SEDML_NAMESPACE_MISMATCH,
        "The SED-ML namespace is not correctly declared",
        "The <sedML> object must declare the SED-ML namespace matching its 'level' and \
         'version' attributes as its default namespace.",
    ),
    ErrorTableEntry::new(
        SEDML_DUPLICATE_COMPONENT_ID,
        "Duplicate 'id' attribute value",
        Category::IdentifierConsistency,
        Severity::Error,
        "The value of the attribute 'id' on every SED-ML object must be unique across the \
         set of all 'id' values in a document.",
        REFERENCE,
    ),
    ErrorTableEntry::new(
        SEDML_ID_SYNTAX_RULE,
        "Invalid SId syntax",
        Category::IdentifierConsistency,
        Severity::Error,
        "The value of an 'id' attribute must conform to the syntax of the SED-ML data type SId.",
        REFERENCE,
    ),
    DOCUMENT[0],
    DOCUMENT[1],
    DOCUMENT[2],
    DOCUMENT[3],
    rule(
        SEDML_DOCUMENT_LEVEL_MUST_BE_INTEGER,
        "'level' must be integer",
        "The attribute 'level' of a <sedML> object must be of the data type 'integer'.",
    ),
    rule(
        SEDML_DOCUMENT_VERSION_MUST_BE_INTEGER,
        "'version' must be integer",
        "The attribute 'version' of a <sedML> object must be of the data type 'integer'.",
    ),
    rule(
        SEDML_DOCUMENT_LO_MODELS_ALLOWED_ATTRIBUTES,
        "Attributes allowed on <listOfModels>",
        "A <listOfModels> object may have the optional attribute 'metaid'. No other \
         attributes are permitted on a <listOfModels> object.",
    ),
    rule(
        SEDML_DOCUMENT_LO_MODELS_ALLOWED_ELEMENTS,
        "Elements allowed on <listOfModels>",
        "Apart from the general notes and annotations subobjects permitted on all SED-ML \
         objects, a <listOfModels> container object may only contain <model> objects.",
    ),
    MODEL[0],
    MODEL[1],
    MODEL[2],
    MODEL[3],
    rule(
        SEDML_MODEL_NAME_MUST_BE_STRING,
        "'name' must be string",
        "The attribute 'name' of a <model> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_MODEL_LANGUAGE_MUST_BE_STRING,
        "'language' must be string",
        "The attribute 'language' of a <model> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_MODEL_SOURCE_MUST_BE_STRING,
        "'source' must be string",
        "The attribute 'source' of a <model> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_MODEL_LO_CHANGES_ALLOWED_ATTRIBUTES,
        "Attributes allowed on <listOfChanges>",
        "A <listOfChanges> object may have the optional attribute 'metaid'. No other \
         attributes are permitted on a <listOfChanges> object.",
    ),
    rule(
        SEDML_MODEL_LO_CHANGES_ALLOWED_ELEMENTS,
        "Elements allowed on <listOfChanges>",
        "Apart from the general notes and annotations subobjects permitted on all SED-ML \
         objects, a <listOfChanges> container object may only contain <changeAttribute>, \
         <removeXML> and <addXML> objects.",
    ),
    CHANGE_ATTRIBUTE[0],
    CHANGE_ATTRIBUTE[1],
    CHANGE_ATTRIBUTE[2],
    CHANGE_ATTRIBUTE[3],
    rule(
        SEDML_CHANGE_ATTRIBUTE_NAME_MUST_BE_STRING,
        "'name' must be string",
        "The attribute 'name' of a <changeAttribute> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_CHANGE_ATTRIBUTE_TARGET_MUST_BE_STRING,
        "'target' must be string",
        "The attribute 'target' of a <changeAttribute> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_CHANGE_ATTRIBUTE_NEW_VALUE_MUST_BE_STRING,
        "'newValue' must be string",
        "The attribute 'newValue' of a <changeAttribute> object must be of the data type 'string'.",
    ),
    REMOVE_XML[0],
    REMOVE_XML[1],
    REMOVE_XML[2],
    REMOVE_XML[3],
    rule(
        SEDML_REMOVE_XML_NAME_MUST_BE_STRING,
        "'name' must be string",
        "The attribute 'name' of a <removeXML> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_REMOVE_XML_TARGET_MUST_BE_STRING,
        "'target' must be string",
        "The attribute 'target' of a <removeXML> object must be of the data type 'string'.",
    ),
    ADD_XML[0],
    ADD_XML[1],
    ADD_XML[2],
    ADD_XML[3],
    rule(
        SEDML_ADD_XML_NAME_MUST_BE_STRING,
        "'name' must be string",
        "The attribute 'name' of an <addXML> object must be of the data type 'string'.",
    ),
    rule(
        SEDML_ADD_XML_TARGET_MUST_BE_STRING,
        "'target' must be string",
        "The attribute 'target' of an <addXML> object must be of the data type 'string'.",
    ),
];
