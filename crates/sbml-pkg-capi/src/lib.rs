// crates/sbml-pkg-capi/src/lib.rs

#![doc = "A flat C function table over the sbml-pkg element classes."]
#![doc = ""]
#![doc = "Objects cross the boundary as opaque pointers. Functions named `_create`,"]
#![doc = "`_clone` and `_remove*` hand ownership to the caller, who releases it"]
#![doc = "with the matching `_free`. Pointers returned by `_get*`/`_create*` on a"]
#![doc = "container point into it and stay valid until the container changes."]
#![doc = "Strings returned are heap copies released with `SbmlPkg_freeString`."]
#![doc = ""]
#![doc = "A `NULL` receiver never crashes: functions return `NULL`, `0`,"]
#![doc = "`SBML_INT_MAX`, `NaN` or `LIBSBML_INVALID_OBJECT` instead."]
#![allow(non_snake_case)]

#[macro_use]
mod macros;

mod abc;
mod class_one;
mod container_y;
mod content;
mod strings;

pub use abc::*;
pub use class_one::*;
pub use container_y::*;
pub use content::*;
pub use strings::SbmlPkg_freeString;

use core::ffi::c_int;
use sbml_pkg::OperationError;
use sbml_pkg::namespaces::Namespaces;

pub use sbml_pkg::status::LIBSBML_OPERATION_SUCCESS;

/// Returned by every status function called with a `NULL` receiver.
pub const LIBSBML_INVALID_OBJECT: c_int = OperationError::InvalidObject.code();
/// Returned by setters given a `NULL` or non-UTF-8 string.
pub const LIBSBML_INVALID_ATTRIBUTE_VALUE: c_int = OperationError::InvalidAttributeValue.code();
/// Returned by adders given a `NULL` item.
pub const LIBSBML_OPERATION_FAILED: c_int = OperationError::OperationFailed.code();

/// Boxes a new object if `ns` is a supported combination, `NULL` otherwise.
fn create_in<T>(ns: Namespaces, build: impl FnOnce(Namespaces) -> T) -> *mut T {
    match ns.check_supported() {
        Ok(()) => Box::into_raw(Box::new(build(ns))),
        Err(e) => {
            log::warn!(
                "cannot create an object for level {} version {} package version {}: {}",
                ns.level(),
                ns.version(),
                ns.package_version(),
                e
            );
            core::ptr::null_mut()
        }
    }
}
