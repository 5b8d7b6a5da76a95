// crates/sbml-pkg/src/packages/fbc/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity, package_error_table};
use crate::namespaces::Package;

const OFFSET: u32 = Package::Fbc.error_offset();

pub const FBC_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const FBC_SBML_SID_SYNTAX: u32 = OFFSET + 10302;
pub const FBC_GENE_PROD_ASSOC_ALLOWED_CORE_ATTRIBS: u32 = OFFSET + 21001;
pub const FBC_GENE_PROD_ASSOC_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21002;
pub const FBC_GENE_PROD_ASSOC_ALLOWED_ATTRIBS: u32 = OFFSET + 21003;
pub const FBC_GENE_PROD_ASSOC_CONTAINS_ONE_ELEMENT: u32 = OFFSET + 21005;
pub const FBC_GENE_PROD_ASSOC_NAME_MUST_BE_STRING: u32 = OFFSET + 21006;
pub const FBC_GENE_PROD_REF_ALLOWED_CORE_ATTRIBS: u32 = OFFSET + 21101;
pub const FBC_GENE_PROD_REF_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21102;
pub const FBC_GENE_PROD_REF_ALLOWED_ATTRIBS: u32 = OFFSET + 21103;
pub const FBC_GENE_PROD_REF_GENE_PRODUCT_MUST_BE_SID_REF: u32 = OFFSET + 21104;
pub const FBC_GENE_PROD_REF_NAME_MUST_BE_STRING: u32 = OFFSET + 21106;
pub const FBC_AND_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 21201;
pub const FBC_AND_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21202;
pub const FBC_AND_TWO_CHILDREN: u32 = OFFSET + 21203;
pub const FBC_AND_ALLOWED_ATTRIBUTES: u32 = OFFSET + 21204;
pub const FBC_AND_NAME_MUST_BE_STRING: u32 = OFFSET + 21205;
pub const FBC_OR_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 21301;
pub const FBC_OR_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21302;
pub const FBC_OR_TWO_CHILDREN: u32 = OFFSET + 21303;
pub const FBC_OR_ALLOWED_ATTRIBUTES: u32 = OFFSET + 21304;
pub const FBC_OR_NAME_MUST_BE_STRING: u32 = OFFSET + 21305;

const REFERENCE: &str = "SBML Level 3 Package Flux Balance Constraints Version 2, Section 3.9";

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

pub static FBC_ERROR_TABLE: &[ErrorTableEntry] = package_error_table!(
    OFFSET,
    "fbc",
    "SBML Level 3 Package Flux Balance Constraints Version 2, Section 3.1",
    [
        rule(
            FBC_GENE_PROD_ASSOC_ALLOWED_CORE_ATTRIBS,
            "Allowed core attributes on <geneProductAssociation>",
            "A <geneProductAssociation> object may have the optional SBML Level 3 \
             Core attributes 'metaid' and 'sboTerm'. No other attributes from the \
             SBML Level 3 Core namespace are permitted on a <geneProductAssociation>.",
        ),
        rule(
            FBC_GENE_PROD_ASSOC_ALLOWED_CORE_ELEMENTS,
            "Allowed core elements on <geneProductAssociation>",
            "A <geneProductAssociation> object may have the optional SBML Level 3 \
             Core subobjects for notes and annotations. No other elements from the \
             SBML Level 3 Core namespace are permitted on a <geneProductAssociation>.",
        ),
        rule(
            FBC_GENE_PROD_ASSOC_ALLOWED_ATTRIBS,
            "Allowed fbc attributes on <geneProductAssociation>",
            "A <geneProductAssociation> object may have the optional attributes \
             'fbc:id' and 'fbc:name'. No other attributes from the SBML Level 3 \
             Flux Balance Constraints namespace are permitted on a \
             <geneProductAssociation> object.",
        ),
        rule(
            FBC_GENE_PROD_ASSOC_CONTAINS_ONE_ELEMENT,
            "<geneProductAssociation> must contain one concrete object",
            "A <geneProductAssociation> must contain one and only one of the \
             concrete objects <and>, <or> or <geneProductRef>.",
        ),
        rule(
            FBC_GENE_PROD_ASSOC_NAME_MUST_BE_STRING,
            "'fbc:name' must be string",
            "The attribute 'fbc:name' of a <geneProductAssociation> object must be \
             of the data type 'string'.",
        ),
        rule(
            FBC_GENE_PROD_REF_ALLOWED_CORE_ATTRIBS,
            "Allowed core attributes on <geneProductRef>",
            "A <geneProductRef> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML \
             Level 3 Core namespace are permitted on a <geneProductRef>.",
        ),
        rule(
            FBC_GENE_PROD_REF_ALLOWED_CORE_ELEMENTS,
            "Allowed core elements on <geneProductRef>",
            "A <geneProductRef> object may have the optional SBML Level 3 Core \
             subobjects for notes and annotations. No other elements from the SBML \
             Level 3 Core namespace are permitted on a <geneProductRef>.",
        ),
        rule(
            FBC_GENE_PROD_REF_ALLOWED_ATTRIBS,
            "Allowed fbc attributes on <geneProductRef>",
            "A <geneProductRef> object must have the required attribute \
             'fbc:geneProduct' and may have the optional attributes 'fbc:id' and \
             'fbc:name'. No other attributes from the SBML Level 3 Flux Balance \
             Constraints namespace are permitted on a <geneProductRef> object.",
        ),
        rule(
            FBC_GENE_PROD_REF_GENE_PRODUCT_MUST_BE_SID_REF,
            "'fbc:geneProduct' must be of type SIdRef",
            "The value of the attribute 'fbc:geneProduct' of a <geneProductRef> \
             object must conform to the syntax of the SBML data type SIdRef.",
        ),
        rule(
            FBC_GENE_PROD_REF_NAME_MUST_BE_STRING,
            "'fbc:name' must be string",
            "The attribute 'fbc:name' of a <geneProductRef> object must be of the \
             data type 'string'.",
        ),
        rule(
            FBC_AND_ALLOWED_CORE_ATTRIBUTES,
            "Allowed core attributes on <and>",
            "An <and> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespace are permitted on an <and>.",
        ),
        rule(
            FBC_AND_ALLOWED_CORE_ELEMENTS,
            "Allowed core elements on <and>",
            "An <and> object may have the optional SBML Level 3 Core subobjects for \
             notes and annotations. No other elements from the SBML Level 3 Core \
             namespace are permitted on an <and>.",
        ),
        rule(
            FBC_AND_TWO_CHILDREN,
            "<and> must have two child elements",
            "An <and> object must have at least two concrete child objects of the \
             types <and>, <or> or <geneProductRef>.",
        ),
        rule(
            FBC_AND_ALLOWED_ATTRIBUTES,
            "Allowed fbc attributes on <and>",
            "An <and> object may have the optional attributes 'fbc:id' and \
             'fbc:name'. No other attributes from the SBML Level 3 Flux Balance \
             Constraints namespace are permitted on an <and> object.",
        ),
        rule(
            FBC_AND_NAME_MUST_BE_STRING,
            "'fbc:name' must be string",
            "The attribute 'fbc:name' of an <and> object must be of the data type 'string'.",
        ),
        rule(
            FBC_OR_ALLOWED_CORE_ATTRIBUTES,
            "Allowed core attributes on <or>",
            "An <or> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespace are permitted on an <or>.",
        ),
        rule(
            FBC_OR_ALLOWED_CORE_ELEMENTS,
            "Allowed core elements on <or>",
            "An <or> object may have the optional SBML Level 3 Core subobjects for \
             notes and annotations. No other elements from the SBML Level 3 Core \
             namespace are permitted on an <or>.",
        ),
        rule(
            FBC_OR_TWO_CHILDREN,
            "<or> must have two child elements",
            "An <or> object must have at least two concrete child objects of the \
             types <and>, <or> or <geneProductRef>.",
        ),
        rule(
            FBC_OR_ALLOWED_ATTRIBUTES,
            "Allowed fbc attributes on <or>",
            "An <or> object may have the optional attributes 'fbc:id' and \
             'fbc:name'. No other attributes from the SBML Level 3 Flux Balance \
             Constraints namespace are permitted on an <or> object.",
        ),
        rule(
            FBC_OR_NAME_MUST_BE_STRING,
            "'fbc:name' must be string",
            "The attribute 'fbc:name' of an <or> object must be of the data type 'string'.",
        ),
    ]
);
