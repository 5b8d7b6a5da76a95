// crates/sbml-pkg-xml/src/error.rs

use quick_xml::errors::serialize::{DeError, SeError};
use sbml_pkg::DocumentError;
use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors that can occur while reading or writing XML.
#[derive(Debug)]
pub enum XmlError {
    /// The text is not well-formed XML.
    Parsing {
        line: u32,
        column: u32,
        message: String,
    },

    /// An error from the underlying `quick-xml` writer.
    Writing(String),

    /// Text or written output was not valid UTF-8.
    Utf8,

    /// An error from the `quick-xml` serializer of the error report.
    ReportSerializing(SeError),

    /// An error from the `quick-xml` deserializer of the error report.
    ReportParsing(DeError),

    /// The text contains no root element.
    EmptyDocument,

    /// The root element has no reader for the requested element type.
    UnexpectedElement(String),

    /// The tree was well formed but is not a document of the requested kind.
    Document(DocumentError),
}

impl From<SeError> for XmlError {
    fn from(e: SeError) -> Self {
        XmlError::ReportSerializing(e)
    }
}

impl From<DeError> for XmlError {
    fn from(e: DeError) -> Self {
        XmlError::ReportParsing(e)
    }
}

impl From<io::Error> for XmlError {
    fn from(e: io::Error) -> Self {
        XmlError::Writing(e.to_string())
    }
}

impl From<FromUtf8Error> for XmlError {
    fn from(_: FromUtf8Error) -> Self {
        XmlError::Utf8
    }
}

impl From<DocumentError> for XmlError {
    fn from(e: DocumentError) -> Self {
        XmlError::Document(e)
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlError::Parsing {
                line,
                column,
                message,
            } => write!(f, "XML parsing error at {}:{}: {}", line, column, message),
            XmlError::Writing(msg) => write!(f, "XML writing error: {}", msg),
            XmlError::Utf8 => write!(f, "Invalid UTF-8 in XML"),
            XmlError::ReportSerializing(e) => write!(f, "Error report serializing error: {}", e),
            XmlError::ReportParsing(e) => write!(f, "Error report parsing error: {}", e),
            XmlError::EmptyDocument => write!(f, "The document has no root element"),
            XmlError::UnexpectedElement(name) => write!(f, "No reader for element <{}>", name),
            XmlError::Document(e) => write!(f, "Document error: {}", e),
        }
    }
}

impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XmlError::ReportSerializing(e) => Some(e),
            XmlError::ReportParsing(e) => Some(e),
            XmlError::Document(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::XmlError;
    use sbml_pkg::DocumentError;

    #[test]
    fn test_from_de_error() {
        let de_err = quick_xml::de::from_str::<()>("invalid xml").unwrap_err();
        let err: XmlError = de_err.into();
        assert!(matches!(err, XmlError::ReportParsing(_)));
    }

    #[test]
    fn test_from_se_error() {
        let se_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: XmlError = se_err.into();
        assert!(matches!(err, XmlError::ReportSerializing(_)));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: XmlError = utf8_err.into();
        assert!(matches!(err, XmlError::Utf8));
    }

    #[test]
    fn test_document_error_display() {
        let err: XmlError = DocumentError::UnsupportedLevelVersion { level: 2, version: 4 }.into();
        assert_eq!(err.to_string(), "Document error: Unsupported level 2 version 4");
    }
}
