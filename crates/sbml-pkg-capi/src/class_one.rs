// crates/sbml-pkg-capi/src/class_one.rs

use core::ffi::c_uint;
use sbml_pkg::namespaces::{Namespaces, Package};
use sbml_pkg::packages::vers::ClassOne;

/// The `vers` `<classOne>` as seen from C.
pub type ClassOne_t = ClassOne;

/// Creates a `ClassOne`, or returns `NULL` for an unsupported combination
/// of level, version and package version.
#[unsafe(no_mangle)]
pub extern "C" fn ClassOne_create(level: c_uint, version: c_uint, pkgVersion: c_uint) -> *mut ClassOne_t {
    let ns = Namespaces::sbml(level, version).with_package(Package::Vers, pkgVersion);
    crate::create_in(ns, ClassOne::with_namespaces)
}

object_lifecycle!(ClassOne_t, ClassOne_clone, ClassOne_free, ClassOne_hasRequiredAttributes);

string_field!(
    ClassOne_t,
    ClassOne_getId, ClassOne_isSetId, ClassOne_setId, ClassOne_unsetId =>
    id, is_set_id, set_id, unset_id
);

bool_field!(
    ClassOne_t,
    ClassOne_getAtt1, ClassOne_isSetAtt1, ClassOne_setAtt1, ClassOne_unsetAtt1 =>
    att1, is_set_att1, set_att1, unset_att1
);

bool_field!(
    ClassOne_t,
    ClassOne_getAtt2, ClassOne_isSetAtt2, ClassOne_setAtt2, ClassOne_unsetAtt2 =>
    att2, is_set_att2, set_att2, unset_att2
);
