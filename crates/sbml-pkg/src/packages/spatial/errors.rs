// crates/sbml-pkg/src/packages/spatial/errors.rs

use crate::error::{Category, ErrorTableEntry, Severity, package_error_table};
use crate::namespaces::Package;

const OFFSET: u32 = Package::Spatial.error_offset();

pub const SPATIAL_DUPLICATE_COMPONENT_ID: u32 = OFFSET + 10301;
pub const SPATIAL_ID_SYNTAX_RULE: u32 = OFFSET + 10302;

pub const SPATIAL_CSG_TRANSLATION_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 21701;
pub const SPATIAL_CSG_TRANSLATION_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21702;
pub const SPATIAL_CSG_TRANSLATION_ALLOWED_ATTRIBUTES: u32 = OFFSET + 21703;
pub const SPATIAL_CSG_TRANSLATION_ALLOWED_ELEMENTS: u32 = OFFSET + 21704;
pub const SPATIAL_CSG_TRANSLATION_TRANSLATE_X_MUST_BE_DOUBLE: u32 = OFFSET + 21705;
pub const SPATIAL_CSG_TRANSLATION_TRANSLATE_Y_MUST_BE_DOUBLE: u32 = OFFSET + 21706;
pub const SPATIAL_CSG_TRANSLATION_TRANSLATE_Z_MUST_BE_DOUBLE: u32 = OFFSET + 21707;
pub const SPATIAL_CSG_TRANSLATION_NAME_MUST_BE_STRING: u32 = OFFSET + 21708;

pub const SPATIAL_CSG_ROTATION_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 21801;
pub const SPATIAL_CSG_ROTATION_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21802;
pub const SPATIAL_CSG_ROTATION_ALLOWED_ATTRIBUTES: u32 = OFFSET + 21803;
pub const SPATIAL_CSG_ROTATION_ALLOWED_ELEMENTS: u32 = OFFSET + 21804;
pub const SPATIAL_CSG_ROTATION_ROTATE_AXIS_X_MUST_BE_DOUBLE: u32 = OFFSET + 21805;
pub const SPATIAL_CSG_ROTATION_ROTATE_AXIS_Y_MUST_BE_DOUBLE: u32 = OFFSET + 21806;
pub const SPATIAL_CSG_ROTATION_ROTATE_AXIS_Z_MUST_BE_DOUBLE: u32 = OFFSET + 21807;
pub const SPATIAL_CSG_ROTATION_ROTATE_ANGLE_MUST_BE_DOUBLE: u32 = OFFSET + 21808;
pub const SPATIAL_CSG_ROTATION_NAME_MUST_BE_STRING: u32 = OFFSET + 21809;

pub const SPATIAL_CSG_SCALE_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 21901;
pub const SPATIAL_CSG_SCALE_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 21902;
pub const SPATIAL_CSG_SCALE_ALLOWED_ATTRIBUTES: u32 = OFFSET + 21903;
pub const SPATIAL_CSG_SCALE_ALLOWED_ELEMENTS: u32 = OFFSET + 21904;
pub const SPATIAL_CSG_SCALE_SCALE_X_MUST_BE_DOUBLE: u32 = OFFSET + 21905;
pub const SPATIAL_CSG_SCALE_SCALE_Y_MUST_BE_DOUBLE: u32 = OFFSET + 21906;
pub const SPATIAL_CSG_SCALE_SCALE_Z_MUST_BE_DOUBLE: u32 = OFFSET + 21907;
pub const SPATIAL_CSG_SCALE_NAME_MUST_BE_STRING: u32 = OFFSET + 21908;

pub const SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 22201;
pub const SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 22202;
pub const SPATIAL_CSG_PRIMITIVE_ALLOWED_ATTRIBUTES: u32 = OFFSET + 22203;
pub const SPATIAL_CSG_PRIMITIVE_PRIMITIVE_TYPE_MUST_BE_PRIMITIVE_KIND_ENUM: u32 = OFFSET + 22204;
pub const SPATIAL_CSG_PRIMITIVE_NAME_MUST_BE_STRING: u32 = OFFSET + 22205;

pub const SPATIAL_CSG_SET_OPERATOR_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 22301;
pub const SPATIAL_CSG_SET_OPERATOR_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 22302;
pub const SPATIAL_CSG_SET_OPERATOR_ALLOWED_ATTRIBUTES: u32 = OFFSET + 22303;
pub const SPATIAL_CSG_SET_OPERATOR_ALLOWED_ELEMENTS: u32 = OFFSET + 22304;
pub const SPATIAL_CSG_SET_OPERATOR_OPERATION_TYPE_MUST_BE_SET_OPERATION_ENUM: u32 = OFFSET + 22305;
pub const SPATIAL_CSG_SET_OPERATOR_NAME_MUST_BE_STRING: u32 = OFFSET + 22306;
pub const SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ELEMENTS: u32 = OFFSET + 22307;
pub const SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ATTRIBUTES: u32 = OFFSET + 22308;

const REFERENCE: &str = "SBML Level 3 Package Spatial Processes Version 1, Section 3.40";

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

/// Core attribute, core element and attribute rules shared by every CSG class.
macro_rules! csg_rules {
    ($element:literal, $attributes:literal, $core_attributes:expr, $core_elements:expr, $allowed:expr) => {
        [
            rule(
                $core_attributes,
                concat!("Core attributes allowed on <", $element, ">"),
                concat!(
                    "A <", $element, "> object may have the optional SBML Level 3 Core \
                     attributes 'metaid' and 'sboTerm'. No other attributes from the SBML \
                     Level 3 Core namespaces are permitted on a <", $element, ">."
                ),
            ),
            rule(
                $core_elements,
                concat!("Core elements allowed on <", $element, ">"),
                concat!(
                    "A <", $element, "> object may have the optional SBML Level 3 Core \
                     subobjects for notes and annotations. No other elements from the SBML \
                     Level 3 Core namespaces are permitted on a <", $element, ">."
                ),
            ),
            rule(
                $allowed,
                concat!("Attributes allowed on <", $element, ">"),
                concat!("A <", $element, "> object ", $attributes),
            ),
        ]
    };
}

const TRANSLATION: [ErrorTableEntry; 3] = csg_rules!(
    "csgTranslation",
    "must have the required attributes 'spatial:id' and 'spatial:translateX', and may \
     have the optional attributes 'spatial:name', 'spatial:translateY' and \
     'spatial:translateZ'. No other attributes from the SBML Level 3 Spatial Processes \
     namespaces are permitted on a <csgTranslation> object.",
    SPATIAL_CSG_TRANSLATION_ALLOWED_CORE_ATTRIBUTES,
    SPATIAL_CSG_TRANSLATION_ALLOWED_CORE_ELEMENTS,
    SPATIAL_CSG_TRANSLATION_ALLOWED_ATTRIBUTES
);

const ROTATION: [ErrorTableEntry; 3] = csg_rules!(
    "csgRotation",
    "must have the required attributes 'spatial:id', 'spatial:rotateAxisX' and \
     'spatial:rotateAngleInRadians', and may have the optional attributes \
     'spatial:name', 'spatial:rotateAxisY' and 'spatial:rotateAxisZ'. No other \
     attributes from the SBML Level 3 Spatial Processes namespaces are permitted on a \
     <csgRotation> object.",
    SPATIAL_CSG_ROTATION_ALLOWED_CORE_ATTRIBUTES,
    SPATIAL_CSG_ROTATION_ALLOWED_CORE_ELEMENTS,
    SPATIAL_CSG_ROTATION_ALLOWED_ATTRIBUTES
);

const SCALE: [ErrorTableEntry; 3] = csg_rules!(
    "csgScale",
    "must have the required attributes 'spatial:id' and 'spatial:scaleX', and may have \
     the optional attributes 'spatial:name', 'spatial:scaleY' and 'spatial:scaleZ'. No \
     other attributes from the SBML Level 3 Spatial Processes namespaces are permitted \
     on a <csgScale> object.",
    SPATIAL_CSG_SCALE_ALLOWED_CORE_ATTRIBUTES,
    SPATIAL_CSG_SCALE_ALLOWED_CORE_ELEMENTS,
    SPATIAL_CSG_SCALE_ALLOWED_ATTRIBUTES
);

const PRIMITIVE: [ErrorTableEntry; 3] = csg_rules!(
    "csgPrimitive",
    "must have the required attributes 'spatial:id' and 'spatial:primitiveType', and \
     may have the optional attribute 'spatial:name'. No other attributes from the SBML \
     Level 3 Spatial Processes namespaces are permitted on a <csgPrimitive> object.",
    SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ATTRIBUTES,
    SPATIAL_CSG_PRIMITIVE_ALLOWED_CORE_ELEMENTS,
    SPATIAL_CSG_PRIMITIVE_ALLOWED_ATTRIBUTES
);

const SET_OPERATOR: [ErrorTableEntry; 3] = csg_rules!(
    "csgSetOperator",
    "must have the required attributes 'spatial:id' and 'spatial:operationType', and \
     may have the optional attribute 'spatial:name'. No other attributes from the SBML \
     Level 3 Spatial Processes namespaces are permitted on a <csgSetOperator> object.",
    SPATIAL_CSG_SET_OPERATOR_ALLOWED_CORE_ATTRIBUTES,
    SPATIAL_CSG_SET_OPERATOR_ALLOWED_CORE_ELEMENTS,
    SPATIAL_CSG_SET_OPERATOR_ALLOWED_ATTRIBUTES
);

pub static SPATIAL_ERROR_TABLE: &[ErrorTableEntry] = package_error_table!(
    OFFSET,
    "spatial",
    "SBML Level 3 Package Spatial Processes Version 1, Section 3.1",
    [
        TRANSLATION[0],
        TRANSLATION[1],
        TRANSLATION[2],
        rule(
            SPATIAL_CSG_TRANSLATION_ALLOWED_ELEMENTS,
            "Elements allowed on <csgTranslation>",
            "A <csgTranslation> object must contain exactly one <csgNode> child object.",
        ),
        rule(
            SPATIAL_CSG_TRANSLATION_TRANSLATE_X_MUST_BE_DOUBLE,
            "'spatial:translateX' must be double",
            "The attribute 'spatial:translateX' of a <csgTranslation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_TRANSLATION_TRANSLATE_Y_MUST_BE_DOUBLE,
            "'spatial:translateY' must be double",
            "The attribute 'spatial:translateY' of a <csgTranslation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_TRANSLATION_TRANSLATE_Z_MUST_BE_DOUBLE,
            "'spatial:translateZ' must be double",
            "The attribute 'spatial:translateZ' of a <csgTranslation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_TRANSLATION_NAME_MUST_BE_STRING,
            "'spatial:name' must be string",
            "The attribute 'spatial:name' of a <csgTranslation> object must be of the data type 'string'.",
        ),
        ROTATION[0],
        ROTATION[1],
        ROTATION[2],
        rule(
            SPATIAL_CSG_ROTATION_ALLOWED_ELEMENTS,
            "Elements allowed on <csgRotation>",
            "A <csgRotation> object must contain exactly one <csgNode> child object.",
        ),
        rule(
            SPATIAL_CSG_ROTATION_ROTATE_AXIS_X_MUST_BE_DOUBLE,
            "'spatial:rotateAxisX' must be double",
            "The attribute 'spatial:rotateAxisX' of a <csgRotation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_ROTATION_ROTATE_AXIS_Y_MUST_BE_DOUBLE,
            "'spatial:rotateAxisY' must be double",
            "The attribute 'spatial:rotateAxisY' of a <csgRotation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_ROTATION_ROTATE_AXIS_Z_MUST_BE_DOUBLE,
            "'spatial:rotateAxisZ' must be double",
            "The attribute 'spatial:rotateAxisZ' of a <csgRotation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_ROTATION_ROTATE_ANGLE_MUST_BE_DOUBLE,
            "'spatial:rotateAngleInRadians' must be double",
            "The attribute 'spatial:rotateAngleInRadians' of a <csgRotation> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_ROTATION_NAME_MUST_BE_STRING,
            "'spatial:name' must be string",
            "The attribute 'spatial:name' of a <csgRotation> object must be of the data type 'string'.",
        ),
        SCALE[0],
        SCALE[1],
        SCALE[2],
        rule(
            SPATIAL_CSG_SCALE_ALLOWED_ELEMENTS,
            "Elements allowed on <csgScale>",
            "A <csgScale> object must contain exactly one <csgNode> child object.",
        ),
        rule(
            SPATIAL_CSG_SCALE_SCALE_X_MUST_BE_DOUBLE,
            "'spatial:scaleX' must be double",
            "The attribute 'spatial:scaleX' of a <csgScale> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_SCALE_SCALE_Y_MUST_BE_DOUBLE,
            "'spatial:scaleY' must be double",
            "The attribute 'spatial:scaleY' of a <csgScale> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_SCALE_SCALE_Z_MUST_BE_DOUBLE,
            "'spatial:scaleZ' must be double",
            "The attribute 'spatial:scaleZ' of a <csgScale> object must be of the data type 'double'.",
        ),
        rule(
            SPATIAL_CSG_SCALE_NAME_MUST_BE_STRING,
            "'spatial:name' must be string",
            "The attribute 'spatial:name' of a <csgScale> object must be of the data type 'string'.",
        ),
        PRIMITIVE[0],
        PRIMITIVE[1],
        PRIMITIVE[2],
        rule(
            SPATIAL_CSG_PRIMITIVE_PRIMITIVE_TYPE_MUST_BE_PRIMITIVE_KIND_ENUM,
            "'spatial:primitiveType' must be PrimitiveKind",
            "The value of the attribute 'spatial:primitiveType' of a <csgPrimitive> object \
             must conform to the syntax of SBML data type 'PrimitiveKind' and may only take \
             on the allowed values of 'PrimitiveKind' defined in SBML; that is, the value \
             must be one of the following: 'sphere', 'cube', 'cylinder', 'cone', 'circle', \
             'square' or 'rightTriangle'.",
        ),
        rule(
            SPATIAL_CSG_PRIMITIVE_NAME_MUST_BE_STRING,
            "'spatial:name' must be string",
            "The attribute 'spatial:name' of a <csgPrimitive> object must be of the data type 'string'.",
        ),
        SET_OPERATOR[0],
        SET_OPERATOR[1],
        SET_OPERATOR[2],
        rule(
            SPATIAL_CSG_SET_OPERATOR_ALLOWED_ELEMENTS,
            "Elements allowed on <csgSetOperator>",
            "A <csgSetOperator> object must contain one and only one instance of the \
             <listOfCSGNodes> element, which must not be empty.",
        ),
        rule(
            SPATIAL_CSG_SET_OPERATOR_OPERATION_TYPE_MUST_BE_SET_OPERATION_ENUM,
            "'spatial:operationType' must be SetOperation",
            "The value of the attribute 'spatial:operationType' of a <csgSetOperator> \
             object must conform to the syntax of SBML data type 'SetOperation' and may \
             only take on the allowed values of 'SetOperation' defined in SBML; that is, \
             the value must be one of the following: 'union', 'intersection' or 'difference'.",
        ),
        rule(
            SPATIAL_CSG_SET_OPERATOR_NAME_MUST_BE_STRING,
            "'spatial:name' must be string",
            "The attribute 'spatial:name' of a <csgSetOperator> object must be of the data type 'string'.",
        ),
        rule(
            SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ELEMENTS,
            "Core elements allowed on <listOfCSGNodes>",
            "Apart from the general notes and annotations subobjects permitted on all SBML \
             objects, a <listOfCSGNodes> container object may only contain <csgNode> objects.",
        ),
        rule(
            SPATIAL_CSG_SET_OPERATOR_LO_CSG_NODES_ALLOWED_CORE_ATTRIBUTES,
            "Core attributes allowed on <listOfCSGNodes>",
            "A <listOfCSGNodes> object may have the optional SBML Level 3 Core attributes \
             'metaid' and 'sboTerm'. No other attributes from the SBML Level 3 Core \
             namespaces are permitted on a <listOfCSGNodes> object.",
        ),
    ]
);
