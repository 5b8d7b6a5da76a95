// crates/sbml-pkg/src/status.rs

//! Status codes returned by element operations (setters, unsetters, adders).
//!
//! Every mutating operation returns an [`OperationResult`]. The error side
//! maps one-to-one onto the numeric libSBML `OperationReturnValues_t` codes,
//! which the C-API hands back unchanged.

use core::fmt;

/// `LIBSBML_OPERATION_SUCCESS`.
pub const LIBSBML_OPERATION_SUCCESS: i32 = 0;

/// The failure reasons of an element operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationError {
    /// An index was past the end of a list.
    IndexExceedsSize,
    /// The attribute is not defined for the object's level/version/package version.
    UnexpectedAttribute,
    /// Generic failure.
    OperationFailed,
    /// The value does not satisfy the attribute's syntax.
    InvalidAttributeValue,
    /// The object is incomplete (e.g. missing required attributes).
    InvalidObject,
    /// An object with the same identifier already exists in the target list.
    DuplicateObjectId,
    /// The SBML level of the object does not match the container.
    LevelMismatch,
    /// The SBML version of the object does not match the container.
    VersionMismatch,
    /// The operation is not valid on this XML content.
    InvalidXmlOperation,
    /// The namespaces of the object do not match the container.
    NamespacesMismatch,
    /// The package version of the object does not match the container.
    PkgVersionMismatch,
    /// The package is not known.
    PkgUnknown,
    /// The package is known but the requested version is not.
    PkgUnknownVersion,
}

impl OperationError {
    /// Returns the libSBML numeric code of this status.
    pub const fn code(self) -> i32 {
        match self {
            Self::IndexExceedsSize => -1,
            Self::UnexpectedAttribute => -2,
            Self::OperationFailed => -3,
            Self::InvalidAttributeValue => -4,
            Self::InvalidObject => -5,
            Self::DuplicateObjectId => -6,
            Self::LevelMismatch => -7,
            Self::VersionMismatch => -8,
            Self::InvalidXmlOperation => -9,
            Self::NamespacesMismatch => -10,
            Self::PkgVersionMismatch => -20,
            Self::PkgUnknown => -21,
            Self::PkgUnknownVersion => -22,
        }
    }

    /// Maps a libSBML numeric code back onto a status. `0` has no error
    /// counterpart and yields `None`, as does any unknown code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::IndexExceedsSize),
            -2 => Some(Self::UnexpectedAttribute),
            -3 => Some(Self::OperationFailed),
            -4 => Some(Self::InvalidAttributeValue),
            -5 => Some(Self::InvalidObject),
            -6 => Some(Self::DuplicateObjectId),
            -7 => Some(Self::LevelMismatch),
            -8 => Some(Self::VersionMismatch),
            -9 => Some(Self::InvalidXmlOperation),
            -10 => Some(Self::NamespacesMismatch),
            -20 => Some(Self::PkgVersionMismatch),
            -21 => Some(Self::PkgUnknown),
            -22 => Some(Self::PkgUnknownVersion),
            _ => None,
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexExceedsSize => write!(f, "Index exceeds the size of the list"),
            Self::UnexpectedAttribute => {
                write!(f, "Attribute is not valid for this level/version/package version")
            }
            Self::OperationFailed => write!(f, "Operation failed"),
            Self::InvalidAttributeValue => write!(f, "Invalid attribute value"),
            Self::InvalidObject => write!(f, "Object is invalid or incomplete"),
            Self::DuplicateObjectId => write!(f, "An object with this id already exists"),
            Self::LevelMismatch => write!(f, "SBML level mismatch"),
            Self::VersionMismatch => write!(f, "SBML version mismatch"),
            Self::InvalidXmlOperation => write!(f, "Invalid XML operation"),
            Self::NamespacesMismatch => write!(f, "Namespaces mismatch"),
            Self::PkgVersionMismatch => write!(f, "Package version mismatch"),
            Self::PkgUnknown => write!(f, "Unknown package"),
            Self::PkgUnknownVersion => write!(f, "Unknown package version"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OperationError {}

/// The return type of every element operation.
pub type OperationResult = Result<(), OperationError>;

/// Flattens an [`OperationResult`] into its libSBML numeric code.
pub fn status_code(result: &OperationResult) -> i32 {
    match result {
        Ok(()) => LIBSBML_OPERATION_SUCCESS,
        Err(e) => e.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        let all = [
            OperationError::IndexExceedsSize,
            OperationError::UnexpectedAttribute,
            OperationError::OperationFailed,
            OperationError::InvalidAttributeValue,
            OperationError::InvalidObject,
            OperationError::DuplicateObjectId,
            OperationError::LevelMismatch,
            OperationError::VersionMismatch,
            OperationError::InvalidXmlOperation,
            OperationError::NamespacesMismatch,
            OperationError::PkgVersionMismatch,
            OperationError::PkgUnknown,
            OperationError::PkgUnknownVersion,
        ];
        for status in all {
            assert_eq!(OperationError::from_code(status.code()), Some(status));
        }
        assert_eq!(OperationError::from_code(0), None);
    }

    #[test]
    fn test_status_code_flattening() {
        assert_eq!(status_code(&Ok(())), LIBSBML_OPERATION_SUCCESS);
        assert_eq!(status_code(&Err(OperationError::DuplicateObjectId)), -6);
    }
}
