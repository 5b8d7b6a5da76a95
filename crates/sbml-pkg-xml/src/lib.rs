// crates/sbml-pkg-xml/src/lib.rs

#![doc = "Reads and writes sbml-pkg documents and elements as XML text."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_sbml_from_str` / `save_sbml_to_string`: SBML Level 3 documents with packages."]
#![doc = "- `load_sedml_from_str` / `save_sedml_to_string`: SED-ML Level 1 documents."]
#![doc = "- `load_omex_manifest_from_str` / `save_omex_manifest_to_string`: COMBINE archive manifests."]
#![doc = "- `load_element_from_str` / `save_element_to_string`: single package elements."]
#![doc = "- `save_error_report_to_string` / `load_error_report_from_str`: error logs as XML."]

// --- Crate Modules ---

mod builder;
mod config;
mod error;
mod parser;
mod report;

// --- Public API Re-exports ---

pub use builder::write_xml_node;
pub use config::WriterOptions;
pub use error::XmlError;
pub use parser::parse_xml_node;
pub use report::{load_error_report_from_str, save_error_report_to_string};

use sbml_pkg::{CaOmexManifest, ErrorLog, ListItem, Namespaces, SBase, SbmlDocument, SedDocument, read_item, write_element};

/// Parses an SBML document.
///
/// Schema violations are collected in the document's error log.
///
/// # Errors
/// Returns an `XmlError` if the text is not well formed or its root is not
/// a supported `<sbml>` element.
pub fn load_sbml_from_str(text: &str) -> Result<SbmlDocument, XmlError> {
    let root = parse_xml_node(text)?;
    let doc = SbmlDocument::from_node(&root)?;
    log::debug!(
        "loaded SBML L{}V{} with {} packages, {} errors",
        doc.level(),
        doc.version(),
        doc.enabled_packages().len(),
        doc.num_errors()
    );
    Ok(doc)
}

pub fn save_sbml_to_string(doc: &SbmlDocument) -> Result<String, XmlError> {
    save_sbml_to_string_with_options(doc, &WriterOptions::default())
}

pub fn save_sbml_to_string_with_options(doc: &SbmlDocument, options: &WriterOptions) -> Result<String, XmlError> {
    log::debug!("saving SBML L{}V{}", doc.level(), doc.version());
    write_xml_node(&doc.to_node(), options)
}

/// Parses a SED-ML document.
///
/// # Errors
/// Returns an `XmlError` if the text is not well formed or its root is not
/// a supported `<sedML>` element.
pub fn load_sedml_from_str(text: &str) -> Result<SedDocument, XmlError> {
    let root = parse_xml_node(text)?;
    let doc = SedDocument::from_node(&root)?;
    log::debug!(
        "loaded SED-ML L{}V{} with {} models, {} errors",
        doc.level(),
        doc.version(),
        doc.num_models(),
        doc.num_errors()
    );
    Ok(doc)
}

pub fn save_sedml_to_string(doc: &SedDocument) -> Result<String, XmlError> {
    save_sedml_to_string_with_options(doc, &WriterOptions::default())
}

pub fn save_sedml_to_string_with_options(doc: &SedDocument, options: &WriterOptions) -> Result<String, XmlError> {
    log::debug!("saving SED-ML L{}V{}", doc.level(), doc.version());
    write_xml_node(&doc.to_node(), options)
}

/// Parses a COMBINE archive `manifest.xml`.
///
/// # Errors
/// Returns an `XmlError` if the text is not well formed or its root is not
/// `<omexManifest>`.
pub fn load_omex_manifest_from_str(text: &str) -> Result<CaOmexManifest, XmlError> {
    let root = parse_xml_node(text)?;
    let manifest = CaOmexManifest::from_node(&root)?;
    log::debug!(
        "loaded OMEX manifest with {} contents, {} errors",
        manifest.num_contents(),
        manifest.num_errors()
    );
    Ok(manifest)
}

pub fn save_omex_manifest_to_string(manifest: &CaOmexManifest) -> Result<String, XmlError> {
    save_omex_manifest_to_string_with_options(manifest, &WriterOptions::default())
}

pub fn save_omex_manifest_to_string_with_options(
    manifest: &CaOmexManifest,
    options: &WriterOptions,
) -> Result<String, XmlError> {
    log::debug!("saving OMEX manifest with {} contents", manifest.num_contents());
    write_xml_node(&manifest.to_node(), options)
}

/// Parses a single element of type `T` in the namespaces `ns`.
///
/// Returns the element together with the schema violations found while
/// reading it.
///
/// # Errors
/// Returns [`XmlError::UnexpectedElement`] if `T` has no variant for the
/// root element's tag.
pub fn load_element_from_str<T: ListItem>(text: &str, ns: &Namespaces) -> Result<(T, ErrorLog), XmlError> {
    let root = parse_xml_node(text)?;
    let mut log = ErrorLog::new();
    let element = read_item::<T>(&root, ns, &mut log).ok_or_else(|| {
        log::warn!("no reader for <{}>", root.qualified_name());
        XmlError::UnexpectedElement(root.qualified_name())
    })?;
    Ok((element, log))
}

/// Serializes a single element, declaring the namespaces it is written in.
pub fn save_element_to_string(element: &dyn SBase) -> Result<String, XmlError> {
    save_element_to_string_with_options(element, &WriterOptions::default())
}

pub fn save_element_to_string_with_options(element: &dyn SBase, options: &WriterOptions) -> Result<String, XmlError> {
    let ns = element.namespaces();
    let mut node = write_element(element);
    node.add_namespace(None, ns.uri());
    if let (Some(prefix), Some(uri)) = (ns.element_prefix(), ns.package_uri()) {
        node.add_namespace(Some(prefix), uri);
    }
    write_xml_node(&node, options)
}
