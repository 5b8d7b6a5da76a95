//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the loaders reject text that cannot be a document and
//! record, rather than fail on, schema violations inside a document.

use sbml_pkg::error::{
    INVALID_NAMESPACE_ON_SBML, INVALID_SBO_TERM_SYNTAX, ONE_MODEL_ALLOWED, REQUIRED_PACKAGE_PRESENT, UNREQUIRED_PACKAGE_PRESENT,
};
use sbml_pkg::packages::tsb::{self, ContainerY};
use sbml_pkg::packages::vers;
use sbml_pkg::sedml::SedModel;
use sbml_pkg::{DocumentError, Namespaces, Package, SBase, Severity};
use sbml_pkg_xml::{
    XmlError, load_element_from_str, load_error_report_from_str, load_omex_manifest_from_str, load_sbml_from_str,
    load_sedml_from_str, save_error_report_to_string,
};

/// A minimal valid document used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sbml xmlns="http://www.sbml.org/sbml/level3/version1/core"
      xmlns:vers="http://www.sbml.org/sbml/level3/version1/vers/version1"
      level="3" version="1" vers:required="false">
  <model id="m">
    <vers:listOfClassOnes>
      <vers:classOne id="c1" att1="true"/>
    </vers:listOfClassOnes>
  </model>
</sbml>"#;

#[test]
fn test_minimal_document_is_clean() {
    let doc = load_sbml_from_str(MINIMAL_VALID_XML).unwrap();
    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());
}

#[test]
fn test_malformed_xml() {
    let truncated = &MINIMAL_VALID_XML[..MINIMAL_VALID_XML.len() - 10];
    assert!(matches!(load_sbml_from_str(truncated), Err(XmlError::Parsing { .. })));

    let mismatched = MINIMAL_VALID_XML.replace("</model>", "</modle>");
    match load_sbml_from_str(&mismatched) {
        Err(XmlError::Parsing { line, .. }) => assert!(line >= 8, "reported line {}", line),
        other => panic!("expected a parsing error, got {:?}", other.map(|d| d.num_errors())),
    }

    assert!(matches!(load_sbml_from_str(""), Err(XmlError::EmptyDocument)));
    assert!(matches!(load_sbml_from_str("<?xml version=\"1.0\"?>"), Err(XmlError::EmptyDocument)));
}

#[test]
fn test_wrong_root_element() {
    let err = load_sbml_from_str("<sedML level=\"1\" version=\"3\"/>").unwrap_err();
    assert!(matches!(
        err,
        XmlError::Document(DocumentError::UnexpectedRoot { expected: "sbml", .. })
    ));
    assert!(matches!(
        load_sedml_from_str(MINIMAL_VALID_XML),
        Err(XmlError::Document(DocumentError::UnexpectedRoot { .. }))
    ));
    assert!(load_omex_manifest_from_str(MINIMAL_VALID_XML).is_err());
}

#[test]
fn test_missing_or_unsupported_level() {
    let missing = MINIMAL_VALID_XML.replace(" level=\"3\"", "");
    assert!(matches!(
        load_sbml_from_str(&missing),
        Err(XmlError::Document(DocumentError::MissingAttribute { attribute: "level", .. }))
    ));

    let level_two = MINIMAL_VALID_XML.replace("level=\"3\"", "level=\"2\"");
    assert!(matches!(
        load_sbml_from_str(&level_two),
        Err(XmlError::Document(DocumentError::UnsupportedLevelVersion { level: 2, version: 1 }))
    ));

    let sedml = "<sedML xmlns=\"http://sed-ml.org/sed-ml/level1/version9\" level=\"1\" version=\"9\"/>";
    assert!(matches!(
        load_sedml_from_str(sedml),
        Err(XmlError::Document(DocumentError::UnsupportedLevelVersion { .. }))
    ));
}

#[test]
fn test_unknown_packages_are_logged() {
    let text = MINIMAL_VALID_XML.replace(
        "vers:required=\"false\"",
        "vers:required=\"false\"
      xmlns:comp=\"http://www.sbml.org/sbml/level3/version1/comp/version1\" comp:required=\"true\"
      xmlns:layout=\"http://www.sbml.org/sbml/level3/version1/layout/version1\" layout:required=\"false\"",
    );
    let doc = load_sbml_from_str(&text).unwrap();
    assert!(doc.error_log().contains(REQUIRED_PACKAGE_PRESENT));
    assert!(doc.error_log().contains(UNREQUIRED_PACKAGE_PRESENT));
    assert_eq!(doc.enabled_packages().len(), 1);
    // The known package is still read.
    assert!(doc.model().and_then(|m| m.plugin(Package::Vers)).is_some());
}

#[test]
fn test_version_gated_attribute_is_reported() {
    // att2 only exists in package version 2.
    let text = MINIMAL_VALID_XML.replace("att1=\"true\"", "att2=\"true\"");
    let doc = load_sbml_from_str(&text).unwrap();
    assert_eq!(doc.num_errors(), 1);
    let error = doc.error_log().get(0).unwrap();
    assert_eq!(error.code, vers::errors::VERS_CLASS_ONE_ALLOWED_CORE_ATTRIBUTES);
    assert_eq!(error.severity, Severity::Error);
    assert_eq!(error.package, "vers");
    assert_eq!(error.line, 7);

    let c1 = doc
        .model()
        .and_then(|m| m.plugin(Package::Vers))
        .and_then(|p| p.as_vers())
        .and_then(|v| v.class_one(0))
        .unwrap();
    assert!(!c1.is_set_att2());
}

#[test]
fn test_package_namespace_with_wrong_core_version() {
    let text = MINIMAL_VALID_XML.replace("level3/version1/vers", "level3/version2/vers");
    let doc = load_sbml_from_str(&text).unwrap();
    assert!(doc.error_log().contains(Package::Vers.error_offset() + 10101));
    assert!(!doc.is_package_enabled(Package::Vers));
}

#[test]
fn test_document_level_violations() {
    let second_model = MINIMAL_VALID_XML.replace("</model>", "</model>\n  <model id=\"other\"/>");
    let doc = load_sbml_from_str(&second_model).unwrap();
    assert!(doc.error_log().contains(ONE_MODEL_ALLOWED));
    assert_eq!(doc.model().map(|m| m.id()), Some("m"));

    let wrong_ns = MINIMAL_VALID_XML.replace("level3/version1/core", "level3/version2/core");
    let doc = load_sbml_from_str(&wrong_ns).unwrap();
    assert!(doc.error_log().contains(INVALID_NAMESPACE_ON_SBML));
}

#[test]
fn test_invalid_attribute_values() {
    let ns = Namespaces::sbml(3, 1).with_package(Package::Tsb, 1);
    let text = r#"<tsb:containerY id="9bad">
        <tsb:listOfAbcs>
            <tsb:abc id="a" number="-3" value="lots" unit="1unit"/>
        </tsb:listOfAbcs>
    </tsb:containerY>"#;
    let (container, log) = load_element_from_str::<ContainerY>(text, &ns).unwrap();
    assert!(!container.is_set_id());
    assert!(log.contains(tsb::errors::TSB_ID_SYNTAX_RULE));

    let abc = container.abc(0).expect("the abc is kept");
    assert!(!abc.is_set_number());
    assert!(!abc.is_set_value());
    assert!(!abc.is_set_unit());
    assert!(!abc.is_set_flag());
    assert!(log.contains(tsb::errors::TSB_ABC_NUMBER_MUST_BE_UN_INTEGER));
    assert!(log.contains(tsb::errors::TSB_ABC_VALUE_MUST_BE_DOUBLE));
    assert!(log.contains(tsb::errors::TSB_ABC_UNIT_MUST_BE_UNIT_SID));
    // The missing required flag.
    assert!(log.contains(tsb::errors::TSB_ABC_ALLOWED_ATTRIBUTES));
}

#[test]
fn test_unexpected_element_for_type() {
    let ns = Namespaces::sedml(1, 4);
    let err = load_element_from_str::<SedModel>("<task id=\"t\"/>", &ns).unwrap_err();
    assert!(matches!(err, XmlError::UnexpectedElement(ref name) if name == "task"));
}

#[test]
fn test_sbo_term_is_not_a_sedml_attribute() {
    let ns = Namespaces::sedml(1, 4);
    let text = r#"<model id="m" source="model.xml" sboTerm="SBO:0000001"/>"#;
    let (model, log) = load_element_from_str::<SedModel>(text, &ns).unwrap();
    assert_eq!(log.len(), 1);
    assert!(log.contains(model.schema().errors.allowed_core_attributes));
    assert!(!log.contains(INVALID_SBO_TERM_SYNTAX));
    assert_eq!(model.source(), "model.xml");
}

#[test]
fn test_manifest_without_contents() {
    let text = r#"<omexManifest xmlns="http://identifiers.org/combine.specifications/omex-manifest"/>"#;
    let mut manifest = load_omex_manifest_from_str(text).unwrap();
    assert_eq!(manifest.num_contents(), 0);
    assert!(manifest.check_consistency() > 0);
}

#[test]
fn test_error_report_survives_a_round_trip() {
    let text = MINIMAL_VALID_XML.replace("att1=\"true\"", "att1=\"sometimes\" bogus=\"1\"");
    let doc = load_sbml_from_str(&text).unwrap();
    assert_eq!(doc.num_errors(), 2);

    let report = save_error_report_to_string(doc.error_log()).unwrap();
    let back = load_error_report_from_str(&report).unwrap();
    assert_eq!(back.len(), 2);
    for (a, b) in doc.error_log().iter().zip(back.iter()) {
        assert_eq!(a.code, b.code);
        assert_eq!(a.short_message, b.short_message);
        assert_eq!((a.line, a.column), (b.line, b.column));
    }
}

#[test]
fn test_report_rejects_garbage() {
    assert!(load_error_report_from_str("<errorReport><error code=\"x\"/></errorReport>").is_err());
}
