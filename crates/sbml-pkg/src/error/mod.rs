// crates/sbml-pkg/src/error/mod.rs

//! Schema-violation log, static error tables and structural document errors.

mod table;

use crate::combine::errors::COMBINE_ERROR_TABLE;
use crate::namespaces::{Host, Namespaces};
use crate::packages::distrib::errors::DISTRIB_ERROR_TABLE;
use crate::packages::fbc::errors::FBC_ERROR_TABLE;
use crate::packages::foo::errors::FOO_ERROR_TABLE;
use crate::packages::spatial::errors::SPATIAL_ERROR_TABLE;
use crate::packages::tsb::errors::TSB_ERROR_TABLE;
use crate::packages::vers::errors::VERS_ERROR_TABLE;
use crate::sedml::errors::SEDML_ERROR_TABLE;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

pub use table::*;

// --- Severity and category ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl FromStr for Severity {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(DocumentError::InvalidValue {
                kind: "severity",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Internal,
    Xml,
    Sbml,
    GeneralConsistency,
    IdentifierConsistency,
    ModelingPractice,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Internal => "internal",
            Category::Xml => "xml",
            Category::Sbml => "sbml",
            Category::GeneralConsistency => "general-consistency",
            Category::IdentifierConsistency => "identifier-consistency",
            Category::ModelingPractice => "modeling-practice",
        }
    }
}

impl FromStr for Category {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(Category::Internal),
            "xml" => Ok(Category::Xml),
            "sbml" => Ok(Category::Sbml),
            "general-consistency" => Ok(Category::GeneralConsistency),
            "identifier-consistency" => Ok(Category::IdentifierConsistency),
            "modeling-practice" => Ok(Category::ModelingPractice),
            _ => Err(DocumentError::InvalidValue {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

// --- Error tables ---

/// One row of a static error table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorTableEntry {
    pub code: u32,
    pub short_message: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    /// The specification section the rule comes from.
    pub reference: &'static str,
}

impl ErrorTableEntry {
    pub const fn new(
        code: u32,
        short_message: &'static str,
        category: Category,
        severity: Severity,
        message: &'static str,
        reference: &'static str,
    ) -> Self {
        Self {
            code,
            short_message,
            category,
            severity,
            message,
            reference,
        }
    }
}

/// Builds a package error table: the codes every package shares, at
/// `offset + 10100..` and `offset + 20101..`, followed by the class entries.
macro_rules! package_error_table {
    ($offset:expr, $pkg:literal, $reference:literal, [$($entry:expr),* $(,)?]) => {
        &[
            $crate::error::ErrorTableEntry::new(
                $offset + 10100,
                concat!("Unknown error from the ", $pkg, " package"),
                $crate::error::Category::Internal,
                $crate::error::Severity::Error,
                "Encountered an unknown internal error.",
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 10101,
                concat!("The ", $pkg, " namespace is not correctly declared"),
                $crate::error::Category::GeneralConsistency,
                $crate::error::Severity::Error,
                concat!(
                    "To conform to the ", $pkg, " package specification, an SBML document ",
                    "must declare the ", $pkg, " namespace as its own."
                ),
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 10102,
                concat!("Element not in the ", $pkg, " namespace"),
                $crate::error::Category::GeneralConsistency,
                $crate::error::Severity::Error,
                concat!(
                    "Wherever they appear in an SBML document, elements and attributes ",
                    "from the ", $pkg, " package must use the ", $pkg, " namespace."
                ),
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 10301,
                "Duplicate 'id' attribute value",
                $crate::error::Category::IdentifierConsistency,
                $crate::error::Severity::Error,
                concat!(
                    "(Extends validation rule #10301 in the SBML Level 3 Core specification.) ",
                    "Within a Model, the values of the attributes id and ", $pkg, ":id ",
                    "on every instance of the following classes of objects must be unique."
                ),
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 10302,
                "Invalid SId syntax",
                $crate::error::Category::IdentifierConsistency,
                $crate::error::Severity::Error,
                concat!(
                    "The value of a ", $pkg, ":id must conform to the syntax of ",
                    "the SBML data type SId."
                ),
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 20101,
                concat!("Required ", $pkg, ":required attribute on <sbml>"),
                $crate::error::Category::GeneralConsistency,
                $crate::error::Severity::Error,
                concat!(
                    "In all SBML documents using the ", $pkg, " package, the SBML object ",
                    "must have the ", $pkg, ":required attribute."
                ),
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 20102,
                concat!("The ", $pkg, ":required attribute must be Boolean"),
                $crate::error::Category::GeneralConsistency,
                $crate::error::Severity::Error,
                concat!("The value of attribute ", $pkg, ":required on the SBML object must be of data type boolean."),
                $reference,
            ),
            $crate::error::ErrorTableEntry::new(
                $offset + 20103,
                concat!("The ", $pkg, ":required attribute has the wrong value"),
                $crate::error::Category::GeneralConsistency,
                $crate::error::Severity::Error,
                concat!(
                    "The value of attribute ", $pkg, ":required on the SBML object must ",
                    "be the value the ", $pkg, " package specification prescribes."
                ),
                $reference,
            ),
            $($entry),*
        ]
    };
}

pub(crate) use package_error_table;

static TABLES: [&[ErrorTableEntry]; 9] = [
    CORE_ERROR_TABLE,
    VERS_ERROR_TABLE,
    TSB_ERROR_TABLE,
    FOO_ERROR_TABLE,
    FBC_ERROR_TABLE,
    SPATIAL_ERROR_TABLE,
    DISTRIB_ERROR_TABLE,
    SEDML_ERROR_TABLE,
    COMBINE_ERROR_TABLE,
];

/// Finds the table entry for `code` across the core and every package table.
pub fn lookup(code: u32) -> Option<&'static ErrorTableEntry> {
    TABLES
        .iter()
        .flat_map(|table| table.iter())
        .find(|entry| entry.code == code)
}

// --- Logged errors ---

/// One entry of an [`ErrorLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbmlError {
    pub code: u32,
    pub severity: Severity,
    pub category: Category,
    /// `"core"`, a package name, `"sedml"` or `"combine"`.
    pub package: String,
    pub level: u32,
    pub version: u32,
    pub pkg_version: u32,
    pub line: u32,
    pub column: u32,
    pub short_message: String,
    pub message: String,
}

impl SbmlError {
    /// Builds an entry from the error tables, appending call-site `details`
    /// to the table's message.
    pub fn new(code: u32, ns: &Namespaces, details: &str, line: u32, column: u32) -> Self {
        let (severity, category, short_message, base) = match lookup(code) {
            Some(entry) => (
                entry.severity,
                entry.category,
                entry.short_message.to_string(),
                format!("{}\nReference: {}", entry.message, entry.reference),
            ),
            None => (
                Severity::Error,
                Category::Internal,
                "Unknown error".to_string(),
                format!("Unrecognized error code {}.", code),
            ),
        };
        let message = if details.is_empty() {
            base
        } else {
            format!("{}\n {}", base, details)
        };
        let package = match (ns.host(), ns.package()) {
            (Host::Sbml, Some(p)) => p.name(),
            (Host::Sbml, None) => "core",
            (host, _) => host.name(),
        };
        Self {
            code,
            severity,
            category,
            package: package.to_string(),
            level: ns.level(),
            version: ns.version(),
            pkg_version: ns.package_version(),
            line,
            column,
            short_message,
            message,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity >= Severity::Error
    }
}

impl fmt::Display for SbmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}:{}: ({} {} {}) {}",
            self.line,
            self.column,
            self.package,
            self.severity.as_str(),
            self.code,
            self.message
        )
    }
}

/// Collects schema violations while a document is read or checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    errors: Vec<SbmlError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already-built entry.
    pub fn add(&mut self, error: SbmlError) {
        if error.is_failure() {
            crate::log::sbml_error!(
                "{} error {} at {}:{}: {}",
                error.package,
                error.code,
                error.line,
                error.column,
                error.short_message
            );
        } else {
            crate::log::sbml_warn!(
                "{} {:?} {} at {}:{}: {}",
                error.package,
                error.severity,
                error.code,
                error.line,
                error.column,
                error.short_message
            );
        }
        self.errors.push(error);
    }

    /// Logs an SBML core error.
    pub fn log_error(
        &mut self,
        code: u32,
        level: u32,
        version: u32,
        details: &str,
        line: u32,
        column: u32,
    ) {
        let ns = Namespaces::sbml(level, version);
        self.add(SbmlError::new(code, &ns, details, line, column));
    }

    /// Logs an error attributed to the language or package of `ns`.
    pub fn log_package_error(
        &mut self,
        code: u32,
        ns: &Namespaces,
        details: &str,
        line: u32,
        column: u32,
    ) {
        self.add(SbmlError::new(code, ns, details, line, column));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, n: usize) -> Option<&SbmlError> {
        self.errors.get(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SbmlError> {
        self.errors.iter()
    }

    pub fn num_with_severity(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Number of entries with severity `Error` or `Fatal`.
    pub fn num_failures(&self) -> usize {
        self.errors.iter().filter(|e| e.is_failure()).count()
    }

    pub fn contains(&self, code: u32) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Removes the first entry with `code`.
    pub fn remove(&mut self, code: u32) -> Option<SbmlError> {
        let pos = self.errors.iter().position(|e| e.code == code)?;
        Some(self.errors.remove(pos))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Moves every entry of `other` to the end of this log.
    pub fn append(&mut self, other: &mut ErrorLog) {
        self.errors.append(&mut other.errors);
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a SbmlError;
    type IntoIter = core::slice::Iter<'a, SbmlError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// --- Structural errors ---

/// A document could not be built from (or turned into) an XML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The root element is not the one the document type expects.
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// A required attribute of the root element was missing.
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// The level/version pair is not supported.
    UnsupportedLevelVersion { level: u32, version: u32 },

    /// The root element does not declare a namespace this crate understands.
    UnknownNamespace(String),

    /// A value could not be parsed into the named kind.
    InvalidValue { kind: &'static str, value: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::UnexpectedRoot { expected, found } => {
                write!(f, "Expected root element <{}>, found <{}>", expected, found)
            }
            DocumentError::MissingAttribute { element, attribute } => {
                write!(f, "Missing required attribute '{}' on <{}>", attribute, element)
            }
            DocumentError::UnsupportedLevelVersion { level, version } => write!(
                f,
                "Unsupported level {} version {}",
                level, version
            ),
            DocumentError::UnknownNamespace(uri) => write!(f, "Unknown namespace: {}", uri),
            DocumentError::InvalidValue { kind, value } => {
                write!(f, "Invalid {} value: {}", kind, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DocumentError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::Package;

    #[test]
    fn test_lookup_spans_all_tables() {
        assert_eq!(lookup(DUPLICATE_COMPONENT_ID).map(|e| e.category), Some(Category::IdentifierConsistency));
        assert!(lookup(Package::Vers.error_offset() + 10301).is_some());
        assert!(lookup(Package::Fbc.error_offset() + 10301).is_some());
        assert!(lookup(1).is_none());
    }

    #[test]
    fn test_every_code_is_unique() {
        let mut codes: Vec<u32> = TABLES.iter().flat_map(|t| t.iter()).map(|e| e.code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_failures_and_warnings_are_both_kept() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ns = Namespaces::sbml(3, 1);
        let mut log = ErrorLog::new();
        log.log_package_error(DUPLICATE_COMPONENT_ID, &ns, "twice", 3, 5);
        let mut warning = SbmlError::new(DUPLICATE_COMPONENT_ID, &ns, "", 4, 1);
        warning.severity = Severity::Warning;
        log.add(warning);

        assert_eq!(log.len(), 2);
        assert_eq!(log.num_failures(), 1);
        assert_eq!(log.num_with_severity(Severity::Warning), 1);
    }

    #[test]
    fn test_unknown_code_is_internal_error() {
        let err = SbmlError::new(42, &Namespaces::sbml(3, 1), "", 1, 1);
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.category, Category::Internal);
        assert_eq!(err.short_message, "Unknown error");
    }

    #[test]
    fn test_log_counts_and_removal() {
        let mut log = ErrorLog::new();
        let ns = Package::Tsb.default_namespaces();
        log.log_package_error(Package::Tsb.error_offset() + 10301, &ns, "dup", 2, 3);
        log.log_error(UNREQUIRED_PACKAGE_PRESENT, 3, 1, "render", 1, 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log.num_with_severity(Severity::Warning), 1);
        assert_eq!(log.num_failures(), 1);
        assert_eq!(log.get(0).map(|e| e.package.as_str()), Some("tsb"));
        assert!(log.get(0).is_some_and(|e| e.message.ends_with("dup")));

        assert!(log.remove(UNREQUIRED_PACKAGE_PRESENT).is_some());
        assert!(!log.contains(UNREQUIRED_PACKAGE_PRESENT));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_severity_and_category_names_parse_back() {
        for s in [Severity::Info, Severity::Warning, Severity::Error, Severity::Fatal] {
            assert_eq!(s.as_str().parse::<Severity>(), Ok(s));
        }
        assert_eq!("modeling-practice".parse::<Category>(), Ok(Category::ModelingPractice));
        assert!("bogus".parse::<Category>().is_err());
    }
}
