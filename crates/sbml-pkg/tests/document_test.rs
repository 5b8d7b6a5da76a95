// crates/sbml-pkg/tests/document_test.rs

//! Builds whole documents through the public API and checks them the way a
//! loader would: by walking the tree and running the consistency checks.

use sbml_pkg::error::DUPLICATE_META_ID;
use sbml_pkg::packages::tsb::errors::TSB_DUPLICATE_COMPONENT_ID;
use sbml_pkg::packages::vers::ClassOne;
use sbml_pkg::tree::{self, Visitor};
use sbml_pkg::{
    CaOmexManifest, ModelPlugin, OperationError, Package, SBase, SBasePlugin, SbmlDocument, SedDocument, TypeCode,
};
use std::collections::BTreeMap;

fn init_logging() {
    env_logger::try_init().ok(); // Ignore error if already initialized
}

/// A document with a vers class and a tsb container holding two abcs.
fn build_document() -> SbmlDocument {
    let mut doc = SbmlDocument::new(3, 2);
    doc.enable_package(Package::Vers, 2, false).unwrap();
    doc.enable_package(Package::Tsb, 1, false).unwrap();

    let model = doc.create_model();
    model.set_id("m").unwrap();

    let vers = model.plugin_mut(Package::Vers).and_then(ModelPlugin::as_vers_mut).unwrap();
    let c1 = vers.create_class_one();
    c1.set_id("c1").unwrap();
    c1.set_att2(true).unwrap();

    let tsb = model.plugin_mut(Package::Tsb).and_then(ModelPlugin::as_tsb_mut).unwrap();
    let y = tsb.create_container_y();
    y.set_id("y").unwrap();
    for id in ["a1", "a2"] {
        let abc = y.create_abc();
        abc.set_id(id).unwrap();
        abc.set_flag(true).unwrap();
    }
    doc
}

#[derive(Default)]
struct TypeCounter {
    counts: BTreeMap<&'static str, usize>,
    depth: usize,
    max_depth: usize,
}

impl Visitor for TypeCounter {
    fn visit(&mut self, element: &dyn SBase) -> bool {
        *self.counts.entry(element.element_name()).or_default() += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        true
    }

    fn leave(&mut self, _element: &dyn SBase) {
        self.depth -= 1;
    }
}

#[test]
fn test_built_document_is_consistent() {
    init_logging();
    let mut doc = build_document();
    assert_eq!(doc.check_consistency(), 0, "{:?}", doc.error_log());
}

#[test]
fn test_children_created_in_document_namespaces() {
    let doc = build_document();
    let model = doc.model().unwrap();
    let c1 = tree::get_element_by_sid(model, "c1").unwrap();
    assert_eq!(c1.namespaces().version(), 2);
    assert_eq!(c1.namespaces().package_version(), 2);

    let abc = tree::get_element_by_sid(model, "a2").unwrap();
    assert_eq!(abc.type_code(), TypeCode::TsbAbc);
    assert_eq!(abc.namespaces().package(), Some(Package::Tsb));
}

#[test]
fn test_visitor_sees_every_element() {
    let doc = build_document();
    let mut counter = TypeCounter::default();
    tree::accept(&doc, &mut counter);

    assert_eq!(counter.counts.get("sbml"), Some(&1));
    assert_eq!(counter.counts.get("classOne"), Some(&1));
    assert_eq!(counter.counts.get("abc"), Some(&2));
    // sbml > model > listOfContainerYs > containerY > listOfAbcs > abc
    assert_eq!(counter.max_depth, 6);
    assert_eq!(counter.depth, 0);
}

#[test]
fn test_duplicate_ids_across_packages() {
    init_logging();
    let mut doc = build_document();
    let model = doc.model_mut().unwrap();
    let tsb = model.plugin_mut(Package::Tsb).and_then(ModelPlugin::as_tsb_mut).unwrap();
    tsb.container_y_mut(0).and_then(|y| y.abc_mut(1)).unwrap().set_id("c1").unwrap();

    assert_eq!(doc.check_consistency(), 1);
    assert!(doc.error_log().contains(TSB_DUPLICATE_COMPONENT_ID));
}

#[test]
fn test_duplicate_meta_ids() {
    let mut doc = build_document();
    let model = doc.model_mut().unwrap();
    model.core_mut().set_meta_id("shared").unwrap();
    let vers = model.plugin_mut(Package::Vers).and_then(ModelPlugin::as_vers_mut).unwrap();
    vers.class_one_mut(0).unwrap().core_mut().set_meta_id("shared").unwrap();

    assert_eq!(doc.check_consistency(), 1);
    assert!(doc.error_log().contains(DUPLICATE_META_ID));
}

#[test]
fn test_enabling_a_package_late_attaches_its_plugin() {
    let mut doc = SbmlDocument::new(3, 1);
    doc.create_model();
    assert_eq!(doc.model().map(|m| m.num_plugins()), Some(0));

    doc.enable_package(Package::Foo, 1, false).unwrap();
    let foo = doc.model().and_then(|m| m.plugin(Package::Foo)).unwrap();
    assert_eq!(foo.package(), Package::Foo);
    assert!(foo.children().is_empty());

    doc.disable_package(Package::Foo).unwrap();
    assert!(doc.model().and_then(|m| m.plugin(Package::Foo)).is_none());
}

#[test]
fn test_adding_an_element_from_another_package_version() {
    let mut doc = build_document();
    let vers = doc
        .model_mut()
        .and_then(|m| m.plugin_mut(Package::Vers))
        .and_then(ModelPlugin::as_vers_mut)
        .unwrap();

    let mut other = ClassOne::new(3, 2, 1);
    other.set_id("c9").unwrap();
    assert_eq!(vers.add_class_one(&other), Err(OperationError::NamespacesMismatch));

    let mut wrong_version = ClassOne::new(3, 1, 2);
    wrong_version.set_id("c9").unwrap();
    assert_eq!(vers.add_class_one(&wrong_version), Err(OperationError::VersionMismatch));
    assert_eq!(vers.num_class_ones(), 1);
}

#[test]
fn test_sedml_and_manifest_built_from_scratch() {
    let mut sed = SedDocument::default();
    let model = sed.create_model();
    model.set_id("model1").unwrap();
    model.set_source("model.xml").unwrap();
    let change = model.create_change_attribute();
    change.set_target("/sbml:sbml/sbml:model/@id").unwrap();
    change.set_new_value("renamed").unwrap();
    assert_eq!(sed.check_consistency(), 0, "{:?}", sed.error_log());

    sed.model_mut(0).unwrap().unset_source().unwrap();
    assert_eq!(sed.check_consistency(), 1);

    let mut manifest = CaOmexManifest::default();
    assert_eq!(manifest.check_consistency(), 1);
    let content = manifest.create_content();
    content.set_location("./model.xml").unwrap();
    content.set_format("http://identifiers.org/combine.specifications/sbml").unwrap();
    let before = manifest.num_errors();
    assert_eq!(manifest.check_consistency(), 0);
    assert_eq!(manifest.num_errors(), before);
}
