// crates/sbml-pkg/src/combine/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity};

const OFFSET: u32 = 7_000_000;

pub const COMBINE_NAMESPACE_MISMATCH: u32 = OFFSET + 10101;
pub const COMBINE_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const COMBINE_ID_SYNTAX_RULE: u32 = OFFSET + 10302;

pub const COMBINE_MANIFEST_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20101;
pub const COMBINE_MANIFEST_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20102;
pub const COMBINE_MANIFEST_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20103;
pub const COMBINE_MANIFEST_ALLOWED_ELEMENTS: u32 = OFFSET + 20104;

pub const COMBINE_CONTENT_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20201;
pub const COMBINE_CONTENT_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20202;
pub const COMBINE_CONTENT_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20203;
pub const COMBINE_CONTENT_ALLOWED_ELEMENTS: u32 = OFFSET + 20204;
pub const COMBINE_CONTENT_LOCATION_MUST_BE_STRING: u32 = OFFSET + 20205;
pub const COMBINE_CONTENT_FORMAT_MUST_BE_STRING: u32 = OFFSET + 20206;
pub const COMBINE_CONTENT_MASTER_MUST_BE_BOOLEAN: u32 = OFFSET + 20207;

const REFERENCE: &str = "COMBINE Archive Version 1, Section 3.2";

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

pub static COMBINE_ERROR_TABLE: &[ErrorTableEntry] = &[
    rule(
        COMBINE_NAMESPACE_MISMATCH,
        "The OMEX manifest namespace is not correctly declared",
        "The <omexManifest> object must declare \
         'http://identifiers.org/combine.specifications/omex-manifest' as its default namespace.",
    ),
    ErrorTableEntry::new(
        COMBINE_DUPLICATE_COMPONENT_ID,
        "Duplicate 'id' attribute value",
        Category::IdentifierConsistency,
        Severity::Error,
        "Identifiers within an OMEX manifest must be unique.",
        REFERENCE,
    ),
    ErrorTableEntry::new(
        COMBINE_ID_SYNTAX_RULE,
        "Invalid identifier syntax",
        Category::IdentifierConsistency,
        Severity::Error,
        "Identifiers within an OMEX manifest must conform to the syntax of the XML type ID.",
        REFERENCE,
    ),
    rule(
        COMBINE_MANIFEST_ALLOWED_CORE_ATTRIBUTES,
        "Core attributes allowed on <omexManifest>",
        "An <omexManifest> object may have the optional attribute 'metaid'. No other \
         core attributes are permitted on an <omexManifest>.",
    ),
    rule(
        COMBINE_MANIFEST_ALLOWED_CORE_ELEMENTS,
        "Core elements allowed on <omexManifest>",
        "An <omexManifest> object may have one optional <notes> and one optional \
         <annotation> subobject.",
    ),
    rule(
        COMBINE_MANIFEST_ALLOWED_ATTRIBUTES,
        "Attributes allowed on <omexManifest>",
        "An <omexManifest> object has no attributes of its own.",
    ),
    rule(
        COMBINE_MANIFEST_ALLOWED_ELEMENTS,
        "Elements allowed on <omexManifest>",
        "An <omexManifest> object must contain one or more <content> objects and no other \
         elements.",
    ),
    rule(
        COMBINE_CONTENT_ALLOWED_CORE_ATTRIBUTES,
        "Core attributes allowed on <content>",
        "A <content> object may have the optional attribute 'metaid'. No other core \
         attributes are permitted on a <content>.",
    ),
    rule(
        COMBINE_CONTENT_ALLOWED_CORE_ELEMENTS,
        "Core elements allowed on <content>",
        "A <content> object may have one optional <notes> and one optional <annotation> \
         subobject.",
    ),
    rule(
        COMBINE_CONTENT_ALLOWED_ATTRIBUTES,
        "Attributes allowed on <content>",
        "A <content> object must have the required attributes 'location' and 'format', \
         and may have the optional attribute 'master'. No other attributes are permitted \
         on a <content> object.",
    ),
    rule(
        COMBINE_CONTENT_ALLOWED_ELEMENTS,
        "Elements allowed on <content>",
        "A <content> object must not contain child elements other than <notes> and \
         <annotation>.",
    ),
    rule(
        COMBINE_CONTENT_LOCATION_MUST_BE_STRING,
        "'location' must be string",
        "The attribute 'location' of a <content> object must be of the data type 'string'.",
    ),
    rule(
        COMBINE_CONTENT_FORMAT_MUST_BE_STRING,
        "'format' must be string",
        "The attribute 'format' of a <content> object must be of the data type 'string'.",
    ),
    rule(
        COMBINE_CONTENT_MASTER_MUST_BE_BOOLEAN,
        "'master' must be boolean",
        "The attribute 'master' of a <content> object must be of the data type 'boolean'.",
    ),
];
