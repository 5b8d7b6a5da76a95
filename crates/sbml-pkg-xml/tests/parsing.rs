// crates/sbml-pkg-xml/tests/parsing.rs

use sbml_pkg::packages::tsb::Abc;
use sbml_pkg::packages::vers::ClassOne;
use sbml_pkg::sedml::SedChange;
use sbml_pkg::{Namespaces, Package, SBase, SBasePlugin, TypeCode, XmlContent, XmlNode, tree};
use sbml_pkg_xml::{
    WriterOptions, load_element_from_str, load_omex_manifest_from_str, load_sbml_from_str, load_sedml_from_str,
    save_element_to_string, save_omex_manifest_to_string, save_sbml_to_string, save_sbml_to_string_with_options,
    save_sedml_to_string, save_sedml_to_string_with_options,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

/// Loads a document carrying three packages and checks that each package's
/// content lands in the matching model plugin.
#[test]
fn test_load_packages_document() {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = load_sbml_from_str(&load_test_file("packages_l3v1.xml")).expect("Failed to parse document");
    assert!(doc.error_log().is_empty(), "unexpected errors: {:?}", doc.error_log());
    assert_eq!((doc.level(), doc.version()), (3, 1));
    assert_eq!(doc.enabled_packages().len(), 3);
    assert!(!doc.is_package_required(Package::Tsb));
    assert_eq!(doc.package_version(Package::Vers), Some(1));

    let model = doc.model().expect("model is missing");
    assert_eq!(model.id(), "cell");
    assert_eq!(model.name(), "Cell model");
    assert_eq!(model.time_units(), "second");
    assert_eq!(model.num_plugins(), 3);

    // 1. vers
    let vers = model.plugin(Package::Vers).and_then(|p| p.as_vers()).expect("vers plugin");
    assert_eq!(vers.num_class_ones(), 2);
    let c1 = vers.class_one_by_id("c1").expect("classOne c1");
    assert!(c1.is_set_att1());
    assert!(c1.att1());
    assert!(!vers.class_one(1).expect("second classOne").att1());

    // 2. tsb
    let tsb = model.plugin(Package::Tsb).and_then(|p| p.as_tsb()).expect("tsb plugin");
    let y1 = tsb.container_y_by_id("y1").expect("containerY y1");
    assert_eq!(y1.name(), "first");
    assert_eq!(y1.num_abcs(), 2);
    let a1 = y1.abc_by_id("a1").expect("abc a1");
    assert_eq!(a1.number(), 42);
    assert!(a1.flag());
    assert_eq!(a1.value(), 2.5);
    assert_eq!(a1.unit(), "mole");
    let a2 = y1.abc(1).expect("abc a2");
    assert!(!a2.is_set_number());
    assert_eq!(a2.value(), f64::NEG_INFINITY);

    // 3. foo
    let foo = model.plugin(Package::Foo).and_then(|p| p.as_foo()).expect("foo plugin");
    let container = foo.container().expect("foo container");
    let parent = container.parent_by_id("p1").expect("parent p1");
    assert_eq!(parent.name(), "parent & child");
    let mess = parent.mess().expect("mess is missing");
    assert_eq!(mess.num_children(), 1);
    assert_eq!(mess.nth_child(0).unwrap().text(), "free text");
    assert_eq!(mess.nth_child(0).unwrap().namespace_uri(None), Some("http://www.w3.org/1999/xhtml"));
}

#[test]
fn test_element_positions_are_recorded() {
    let doc = load_sbml_from_str(&load_test_file("packages_l3v1.xml")).unwrap();
    let model = doc.model().unwrap();
    assert_eq!(model.core().line(), 9);
    let c1 = tree::get_element_by_sid(model, "c1").expect("c1 is reachable from the model");
    assert_eq!(c1.type_code(), TypeCode::VersClassOne);
    assert_eq!((c1.core().line(), c1.core().column()), (11, 7));
}

#[test]
fn test_tree_walks_cross_packages() {
    let doc = load_sbml_from_str(&load_test_file("packages_l3v1.xml")).unwrap();
    let model = doc.model().unwrap();

    let abc = tree::get_element_by_sid(model, "a2").expect("a2 is reachable");
    assert_eq!(abc.element_name(), "abc");
    assert_eq!(abc.namespaces().package(), Some(Package::Tsb));

    let is_parent = |e: &dyn SBase| e.type_code() == TypeCode::FooParent;
    assert_eq!(tree::get_all_elements(model, Some(&is_parent)).len(), 1);
}

#[test]
fn test_sbml_save_and_reload() {
    let doc = load_sbml_from_str(&load_test_file("packages_l3v1.xml")).unwrap();
    let text = save_sbml_to_string(&doc).expect("Failed to save document");
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("xmlns:tsb=\"http://www.sbml.org/sbml/level3/version1/tsb/version1\""));
    assert!(text.contains("tsb:required=\"false\""));
    assert!(text.contains("<vers:classOne id=\"c1\" att1=\"true\"/>"));
    assert!(text.contains("value=\"-INF\""));

    let back = load_sbml_from_str(&text).expect("Failed to reload document");
    assert!(back.error_log().is_empty(), "{:?}", back.error_log());
    assert_eq!(back.model(), doc.model());
    assert_eq!(back.enabled_packages(), doc.enabled_packages());

    let compact = save_sbml_to_string_with_options(&doc, &WriterOptions::compact()).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(load_sbml_from_str(&compact).unwrap().model(), doc.model());
}

#[test]
fn test_package_version_two_document() {
    let doc = load_sbml_from_str(&load_test_file("vers_v2_l3v2.xml")).unwrap();
    assert_eq!(doc.package_version(Package::Vers), Some(2));
    let vers = doc.model().and_then(|m| m.plugin(Package::Vers)).and_then(|p| p.as_vers()).unwrap();
    let c1 = vers.class_one_by_id("c1").unwrap();
    assert!(c1.is_set_att2());
    assert!(c1.att2());

    // att1 is not part of version 2 and is reported, not read.
    let c2 = vers.class_one_by_id("c2").unwrap();
    assert!(!c2.is_set_att1());
    assert_eq!(doc.num_errors(), 1);
    let error = doc.error_log().get(0).unwrap();
    assert_eq!(error.code, sbml_pkg::packages::vers::errors::VERS_CLASS_ONE_ALLOWED_CORE_ATTRIBUTES);
    assert_eq!(error.pkg_version, 2);
    assert_eq!(error.line, 8);
}

#[test]
fn test_load_sedml_document() {
    let doc = load_sedml_from_str(&load_test_file("simulation_l1v3.xml")).expect("Failed to parse SED-ML");
    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());
    assert_eq!((doc.level(), doc.version()), (1, 3));
    assert_eq!(doc.num_models(), 2);

    let base = doc.model_by_id("base").expect("model base");
    assert_eq!(base.source(), "model.xml");
    assert_eq!(base.num_changes(), 3);
    let change = base.change(0).unwrap();
    assert!(change.is_change_attribute());
    assert_eq!(change.as_change_attribute().map(|c| c.new_value()), Some("0.5"));
    assert!(base.change(1).is_some_and(SedChange::is_remove_xml));

    let add = base.change(2).and_then(SedChange::as_add_xml).expect("addXML");
    assert_eq!(add.target(), "/sbml:sbml/sbml:model/sbml:listOfParameters");
    let new_xml = add.new_xml().expect("newXML");
    assert_eq!(new_xml.nth_child(0).unwrap().name(), "parameter");
    assert_eq!(new_xml.nth_child(0).unwrap().attributes().get("id"), Some("k3"));

    assert_eq!(doc.model_by_id("variant").map(|m| m.source()), Some("#base"));
}

#[test]
fn test_sedml_save_and_reload() {
    let doc = load_sedml_from_str(&load_test_file("simulation_l1v3.xml")).unwrap();
    let text = save_sedml_to_string(&doc).unwrap();
    assert!(text.contains("<sedML xmlns=\"http://sed-ml.org/sed-ml/level1/version3\" level=\"1\" version=\"3\">"));
    let back = load_sedml_from_str(&text).unwrap();
    assert!(back.error_log().is_empty(), "{:?}", back.error_log());
    assert_eq!(back.list_of_models(), doc.list_of_models());
}

#[test]
fn test_load_omex_manifest() {
    let manifest = load_omex_manifest_from_str(&load_test_file("manifest.xml")).expect("Failed to parse manifest");
    assert!(manifest.error_log().is_empty(), "{:?}", manifest.error_log());
    assert_eq!(manifest.num_contents(), 4);

    let master = manifest.master_file().expect("master file");
    assert_eq!(master.location(), "./simulation.sedml");
    assert!(master.is_format("sed-ml"));
    assert!(!master.is_format("sbml"));

    let model = manifest.content_by_location("./model.xml").expect("model entry");
    assert!(model.is_format("sbml"));
    assert!(!model.is_set_master());

    let text = save_omex_manifest_to_string(&manifest).unwrap();
    let back = load_omex_manifest_from_str(&text).unwrap();
    assert_eq!(back.contents().count(), 4);
    assert_eq!(back.master_file().map(|c| c.location()), Some("./simulation.sedml"));
}

#[test]
fn test_single_element_round_trip() {
    let ns = Namespaces::sbml(3, 1).with_package(Package::Tsb, 1);
    let (abc, log) = load_element_from_str::<Abc>(r#"<tsb:abc id="x" flag="true" number="7"/>"#, &ns).unwrap();
    assert!(log.is_empty(), "{:?}", log);
    assert_eq!(abc.number(), 7);

    let text = save_element_to_string(&abc).unwrap();
    assert!(text.contains("xmlns=\"http://www.sbml.org/sbml/level3/version1/core\""));
    assert!(text.contains("xmlns:tsb=\"http://www.sbml.org/sbml/level3/version1/tsb/version1\""));
    assert!(text.contains("<tsb:abc"));

    let (back, log) = load_element_from_str::<Abc>(&text, &ns).unwrap();
    assert!(log.is_empty());
    assert_eq!(back, abc);
}

#[test]
fn test_single_element_reports_schema_violations() {
    let ns = Namespaces::sbml(3, 1).with_package(Package::Vers, 1);
    let (class_one, log) = load_element_from_str::<ClassOne>(r#"<classOne id="c" att1="maybe"/>"#, &ns).unwrap();
    assert_eq!(class_one.id(), "c");
    assert!(!class_one.is_set_att1());
    assert!(log.contains(sbml_pkg::packages::vers::errors::VERS_CLASS_ONE_ATT1_MUST_BE_BOOLEAN));
}

#[test]
fn test_plugin_children_follow_document_order() {
    let doc = load_sbml_from_str(&load_test_file("packages_l3v1.xml")).unwrap();
    let model = doc.model().unwrap();
    let names: Vec<_> = model.plugins().iter().map(|p| p.package()).collect();
    assert_eq!(names, [Package::Vers, Package::Tsb, Package::Foo]);
    let tsb_children = model.plugin(Package::Tsb).map(|p| p.children().len());
    assert_eq!(tsb_children, Some(1));
}

/// Flattens an element's content into text and `<name>` markers.
fn content_outline(node: &XmlNode) -> Vec<String> {
    node.content()
        .iter()
        .map(|item| match item {
            XmlContent::Text(t) => t.clone(),
            XmlContent::Element(e) => format!("<{}>", e.qualified_name()),
        })
        .collect()
}

#[test]
fn test_sbml_mixed_content_round_trip() {
    let doc = load_sbml_from_str(&load_test_file("raw_content_l3v1.xml")).expect("Failed to parse document");
    assert!(doc.error_log().is_empty(), "unexpected errors: {:?}", doc.error_log());
    let model = doc.model().unwrap();

    let notes = model.core().notes().expect("notes");
    let body = notes.nth_child(0).expect("body");
    assert_eq!(body.num_children(), 2);
    assert_eq!(content_outline(body.nth_child(0).unwrap()), ["Hello ", "<b>", " world"]);
    assert_eq!(content_outline(body.nth_child(1).unwrap()), ["<b>", " ", "<i>"]);

    let info = model.core().annotation().and_then(|a| a.nth_child(0)).expect("annotation content");
    assert_eq!(content_outline(info), ["rate is ", "<x:val>", " per second"]);

    let parent = model
        .plugin(Package::Foo)
        .and_then(|p| p.as_foo())
        .and_then(|foo| foo.container())
        .and_then(|c| c.parent_by_id("p1"))
        .expect("parent p1");
    let mess_p = parent.mess().and_then(|m| m.nth_child(0)).expect("mess content");
    assert_eq!(content_outline(mess_p), ["Mixed ", "<em>", " here & there"]);

    let text = save_sbml_to_string(&doc).unwrap();
    assert!(text.contains("<p>Hello <b>big</b> world</p>"), "{}", text);
    assert!(text.contains("<p><b>a</b> <i>c</i></p>"), "{}", text);
    assert!(text.contains(">rate is <x:val>5</x:val> per second</x:info>"), "{}", text);
    assert!(text.contains("Mixed <em>content</em> here &amp; there"), "{}", text);

    for options in [WriterOptions::default(), WriterOptions::compact()] {
        let text = save_sbml_to_string_with_options(&doc, &options).unwrap();
        let back = load_sbml_from_str(&text).unwrap();
        assert!(back.error_log().is_empty(), "{:?}", back.error_log());
        assert_eq!(back.model(), doc.model());
    }
}

#[test]
fn test_sedml_mixed_content_round_trip() {
    let doc = load_sedml_from_str(&load_test_file("raw_content_l1v4.xml")).expect("Failed to parse SED-ML");
    assert!(doc.error_log().is_empty(), "{:?}", doc.error_log());
    let base = doc.model_by_id("base").expect("model base");

    let p = base.core().notes().and_then(|n| n.nth_child(0)).expect("notes content");
    assert_eq!(content_outline(p), ["Taken from ", "<a>", "."]);

    let add = base.change(0).and_then(SedChange::as_add_xml).expect("addXML");
    let added = add
        .new_xml()
        .and_then(|x| x.nth_child(0))
        .and_then(|notes| notes.nth_child(0))
        .expect("added paragraph");
    assert_eq!(content_outline(added), ["Added ", "<b>", " the simulation."]);

    for options in [WriterOptions::default(), WriterOptions::compact()] {
        let text = save_sedml_to_string_with_options(&doc, &options).unwrap();
        assert!(text.contains("<p xmlns=\"http://www.w3.org/1999/xhtml\">Added <b>by</b> the simulation.</p>"));
        let back = load_sedml_from_str(&text).unwrap();
        assert!(back.error_log().is_empty(), "{:?}", back.error_log());
        assert_eq!(back.list_of_models(), doc.list_of_models());
    }
}
