// crates/sbml-pkg-xml/src/report.rs

//! An `ErrorLog` as an XML document:
//!
//! ```xml
//! <errorReport>
//!   <error code="20101" severity="error" category="general-consistency" ...>
//!     <shortMessage>...</shortMessage>
//!     <message>...</message>
//!   </error>
//! </errorReport>
//! ```

use crate::error::XmlError;
use sbml_pkg::{Category, ErrorLog, SbmlError, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "errorReport")]
struct ErrorReport {
    #[serde(rename = "error", default)]
    errors: Vec<ReportEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReportEntry {
    #[serde(rename = "@code")]
    code: u32,
    #[serde(rename = "@severity")]
    severity: String,
    #[serde(rename = "@category")]
    category: String,
    #[serde(rename = "@package")]
    package: String,
    #[serde(rename = "@level")]
    level: u32,
    #[serde(rename = "@version")]
    version: u32,
    #[serde(rename = "@pkgVersion", default)]
    pkg_version: u32,
    #[serde(rename = "@line", default)]
    line: u32,
    #[serde(rename = "@column", default)]
    column: u32,
    #[serde(rename = "shortMessage", default)]
    short_message: String,
    #[serde(rename = "message", default)]
    message: String,
}

impl From<&SbmlError> for ReportEntry {
    fn from(e: &SbmlError) -> Self {
        Self {
            code: e.code,
            severity: e.severity.as_str().to_string(),
            category: e.category.as_str().to_string(),
            package: e.package.clone(),
            level: e.level,
            version: e.version,
            pkg_version: e.pkg_version,
            line: e.line,
            column: e.column,
            short_message: e.short_message.clone(),
            message: e.message.clone(),
        }
    }
}

impl ReportEntry {
    fn into_error(self) -> Result<SbmlError, XmlError> {
        let severity: Severity = self.severity.parse()?;
        let category: Category = self.category.parse()?;
        Ok(SbmlError {
            code: self.code,
            severity,
            category,
            package: self.package,
            level: self.level,
            version: self.version,
            pkg_version: self.pkg_version,
            line: self.line,
            column: self.column,
            short_message: self.short_message,
            message: self.message,
        })
    }
}

/// Serializes every entry of `log` into an `<errorReport>` document.
///
/// # Errors
/// Returns an `XmlError` if serialization fails.
pub fn save_error_report_to_string(log: &ErrorLog) -> Result<String, XmlError> {
    let report = ErrorReport {
        errors: log.iter().map(ReportEntry::from).collect(),
    };
    let mut buffer = String::new();
    buffer.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    report.serialize(serializer)?;
    Ok(buffer)
}

/// Rebuilds an `ErrorLog` from an `<errorReport>` document.
///
/// # Errors
/// Returns an `XmlError` if the text is not a report or names an unknown
/// severity or category.
pub fn load_error_report_from_str(text: &str) -> Result<ErrorLog, XmlError> {
    let report: ErrorReport = quick_xml::de::from_str(text)?;
    let mut log = ErrorLog::new();
    for entry in report.errors {
        log.add(entry.into_error()?);
    }
    Ok(log)
}
