// crates/sbml-pkg-capi/src/content.rs

use core::ffi::{c_char, c_int, c_uint};
use sbml_pkg::combine::CaContent;
use sbml_pkg::namespaces::Namespaces;

/// An OMEX manifest `<content>` as seen from C.
pub type CaContent_t = CaContent;

/// Creates a `CaContent`, or returns `NULL` unless `level` and `version`
/// are both 1.
#[unsafe(no_mangle)]
pub extern "C" fn CaContent_create(level: c_uint, version: c_uint) -> *mut CaContent_t {
    crate::create_in(Namespaces::omex_with(level, version), CaContent::with_namespaces)
}

object_lifecycle!(CaContent_t, CaContent_clone, CaContent_free, CaContent_hasRequiredAttributes);

string_field!(
    CaContent_t,
    CaContent_getLocation, CaContent_isSetLocation, CaContent_setLocation, CaContent_unsetLocation =>
    location, is_set_location, set_location, unset_location
);

string_field!(
    CaContent_t,
    CaContent_getFormat, CaContent_isSetFormat, CaContent_setFormat, CaContent_unsetFormat =>
    format, is_set_format, set_format, unset_format
);

bool_field!(
    CaContent_t,
    CaContent_getMaster, CaContent_isSetMaster, CaContent_setMaster, CaContent_unsetMaster =>
    master, is_set_master, set_master, unset_master
);

/// Returns 1 if the format is the identifiers.org COMBINE format `kind`,
/// e.g. `"sbml"` or `"sed-ml"`.
///
/// # Safety
/// `content` must be `NULL` or a valid pointer from this library; `kind`
/// must be `NULL` or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CaContent_isFormat(content: *const CaContent_t, kind: *const c_char) -> c_int {
    match (unsafe { content.as_ref() }, unsafe { crate::strings::from_c_str(kind) }) {
        (Some(content), Some(kind)) => content.is_format(kind) as c_int,
        _ => 0,
    }
}
