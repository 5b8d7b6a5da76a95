// crates/sbml-pkg/src/packages/distrib/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity, package_error_table};
use crate::namespaces::Package;

const OFFSET: u32 = Package::Distrib.error_offset();

pub const DISTRIB_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const DISTRIB_ID_SYNTAX_RULE: u32 = OFFSET + 10302;

pub const DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20601;
pub const DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20602;
pub const DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20603;
pub const DISTRIB_NORMAL_DISTRIBUTION_MEAN_MUST_BE_DOUBLE: u32 = OFFSET + 20604;
pub const DISTRIB_NORMAL_DISTRIBUTION_STDDEV_MUST_BE_DOUBLE: u32 = OFFSET + 20605;
pub const DISTRIB_NORMAL_DISTRIBUTION_NAME_MUST_BE_STRING: u32 = OFFSET + 20606;

pub const DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20701;
pub const DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20702;
pub const DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20703;
pub const DISTRIB_UNIFORM_DISTRIBUTION_LOW_MUST_BE_DOUBLE: u32 = OFFSET + 20704;
pub const DISTRIB_UNIFORM_DISTRIBUTION_HIGH_MUST_BE_DOUBLE: u32 = OFFSET + 20705;
pub const DISTRIB_UNIFORM_DISTRIBUTION_NAME_MUST_BE_STRING: u32 = OFFSET + 20706;

pub const DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 20801;
pub const DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 20802;
pub const DISTRIB_POISSON_DISTRIBUTION_ALLOWED_ATTRIBUTES: u32 = OFFSET + 20803;
pub const DISTRIB_POISSON_DISTRIBUTION_RATE_MUST_BE_DOUBLE: u32 = OFFSET + 20804;
pub const DISTRIB_POISSON_DISTRIBUTION_NAME_MUST_BE_STRING: u32 = OFFSET + 20805;

const REFERENCE: &str = "SBML Level 3 Package Distributions Version 1, Section 3.5";

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

pub static DISTRIB_ERROR_TABLE: &[ErrorTableEntry] = package_error_table!(
    OFFSET,
    "distrib",
    "SBML Level 3 Package Distributions Version 1, Section 3.1",
    [
        rule(
            DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <normalDistribution>",
            "A <normalDistribution> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 \
             Core namespaces are permitted on a <normalDistribution>.",
        ),
        rule(
            DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <normalDistribution>",
            "A <normalDistribution> object may have the optional SBML Level 3 Core \
             subobjects for notes and annotations. No other elements from the SBML Level 3 \
             Core namespaces are permitted on a <normalDistribution>.",
        ),
        rule(
            DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <normalDistribution>",
            "A <normalDistribution> object must have the required attributes \
             'distrib:mean' and 'distrib:stddev', and may have the optional attributes \
             'distrib:id' and 'distrib:name'. No other attributes from the SBML Level 3 \
             Distributions namespaces are permitted on a <normalDistribution> object.",
        ),
        rule(
            DISTRIB_NORMAL_DISTRIBUTION_MEAN_MUST_BE_DOUBLE,
            "'distrib:mean' must be double",
            "The attribute 'distrib:mean' of a <normalDistribution> object must be of the data type 'double'.",
        ),
        rule(
            DISTRIB_NORMAL_DISTRIBUTION_STDDEV_MUST_BE_DOUBLE,
            "'distrib:stddev' must be double",
            "The attribute 'distrib:stddev' of a <normalDistribution> object must be of the data type 'double'.",
        ),
        rule(
            DISTRIB_NORMAL_DISTRIBUTION_NAME_MUST_BE_STRING,
            "'distrib:name' must be string",
            "The attribute 'distrib:name' of a <normalDistribution> object must be of the data type 'string'.",
        ),
        rule(
            DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <uniformDistribution>",
            "A <uniformDistribution> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 \
             Core namespaces are permitted on a <uniformDistribution>.",
        ),
        rule(
            DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <uniformDistribution>",
            "A <uniformDistribution> object may have the optional SBML Level 3 Core \
             subobjects for notes and annotations. No other elements from the SBML Level 3 \
             Core namespaces are permitted on a <uniformDistribution>.",
        ),
        rule(
            DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <uniformDistribution>",
            "A <uniformDistribution> object must have the required attributes \
             'distrib:low' and 'distrib:high', and may have the optional attributes \
             'distrib:id' and 'distrib:name'. No other attributes from the SBML Level 3 \
             Distributions namespaces are permitted on a <uniformDistribution> object.",
        ),
        rule(
            DISTRIB_UNIFORM_DISTRIBUTION_LOW_MUST_BE_DOUBLE,
            "'distrib:low' must be double",
            "The attribute 'distrib:low' of a <uniformDistribution> object must be of the data type 'double'.",
        ),
        rule(
            DISTRIB_UNIFORM_DISTRIBUTION_HIGH_MUST_BE_DOUBLE,
            "'distrib:high' must be double",
            "The attribute 'distrib:high' of a <uniformDistribution> object must be of the data type 'double'.",
        ),
        rule(
            DISTRIB_UNIFORM_DISTRIBUTION_NAME_MUST_BE_STRING,
            "'distrib:name' must be string",
            "The attribute 'distrib:name' of a <uniformDistribution> object must be of the data type 'string'.",
        ),
        rule(
            DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <poissonDistribution>",
            "A <poissonDistribution> object may have the optional SBML Level 3 Core \
             attributes 'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 \
             Core namespaces are permitted on a <poissonDistribution>.",
        ),
        rule(
            DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <poissonDistribution>",
            "A <poissonDistribution> object may have the optional SBML Level 3 Core \
             subobjects for notes and annotations. No other elements from the SBML Level 3 \
             Core namespaces are permitted on a <poissonDistribution>.",
        ),
        rule(
            DISTRIB_POISSON_DISTRIBUTION_ALLOWED_ATTRIBUTES,
            "Attributes allowed on <poissonDistribution>",
            "A <poissonDistribution> object must have the required attribute \
             'distrib:rate', and may have the optional attributes 'distrib:id' and \
             'distrib:name'. No other attributes from the SBML Level 3 Distributions \
             namespaces are permitted on a <poissonDistribution> object.",
        ),
        rule(
            DISTRIB_POISSON_DISTRIBUTION_RATE_MUST_BE_DOUBLE,
            "'distrib:rate' must be double",
            "The attribute 'distrib:rate' of a <poissonDistribution> object must be of the data type 'double'.",
        ),
        rule(
            DISTRIB_POISSON_DISTRIBUTION_NAME_MUST_BE_STRING,
            "'distrib:name' must be string",
            "The attribute 'distrib:name' of a <poissonDistribution> object must be of the data type 'string'.",
        ),
    ]
);
