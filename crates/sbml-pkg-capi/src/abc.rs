// crates/sbml-pkg-capi/src/abc.rs

use core::ffi::{c_double, c_int, c_uint};
use sbml_pkg::SBML_INT_MAX;
use sbml_pkg::namespaces::{Namespaces, Package};
use sbml_pkg::packages::tsb::Abc;
use sbml_pkg::status_code;

/// The `tsb` `<abc>` as seen from C.
pub type Abc_t = Abc;

/// Creates an `Abc`, or returns `NULL` for an unsupported combination of
/// level, version and package version.
#[unsafe(no_mangle)]
pub extern "C" fn Abc_create(level: c_uint, version: c_uint, pkgVersion: c_uint) -> *mut Abc_t {
    let ns = Namespaces::sbml(level, version).with_package(Package::Tsb, pkgVersion);
    crate::create_in(ns, Abc::with_namespaces)
}

object_lifecycle!(Abc_t, Abc_clone, Abc_free, Abc_hasRequiredAttributes);

string_field!(
    Abc_t,
    Abc_getId, Abc_isSetId, Abc_setId, Abc_unsetId =>
    id, is_set_id, set_id, unset_id
);

string_field!(
    Abc_t,
    Abc_getName, Abc_isSetName, Abc_setName, Abc_unsetName =>
    name, is_set_name, set_name, unset_name
);

string_field!(
    Abc_t,
    Abc_getUnit, Abc_isSetUnit, Abc_setUnit, Abc_unsetUnit =>
    unit, is_set_unit, set_unit, unset_unit
);

bool_field!(
    Abc_t,
    Abc_getFlag, Abc_isSetFlag, Abc_setFlag, Abc_unsetFlag =>
    flag, is_set_flag, set_flag, unset_flag
);

// --- number ---

/// Returns `SBML_INT_MAX` when unset or for a `NULL` receiver.
///
/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_getNumber(abc: *const Abc_t) -> c_uint {
    unsafe { abc.as_ref() }.map_or(SBML_INT_MAX, Abc::number)
}

/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_isSetNumber(abc: *const Abc_t) -> c_int {
    unsafe { abc.as_ref() }.is_some_and(Abc::is_set_number) as c_int
}

/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_setNumber(abc: *mut Abc_t, number: c_uint) -> c_int {
    match unsafe { abc.as_mut() } {
        Some(abc) => status_code(&abc.set_number(number)),
        None => crate::LIBSBML_INVALID_OBJECT,
    }
}

/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_unsetNumber(abc: *mut Abc_t) -> c_int {
    match unsafe { abc.as_mut() } {
        Some(abc) => status_code(&abc.unset_number()),
        None => crate::LIBSBML_INVALID_OBJECT,
    }
}

// --- value ---

/// Returns `NaN` when unset or for a `NULL` receiver.
///
/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_getValue(abc: *const Abc_t) -> c_double {
    unsafe { abc.as_ref() }.map_or(f64::NAN, Abc::value)
}

/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_isSetValue(abc: *const Abc_t) -> c_int {
    unsafe { abc.as_ref() }.is_some_and(Abc::is_set_value) as c_int
}

/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_setValue(abc: *mut Abc_t, value: c_double) -> c_int {
    match unsafe { abc.as_mut() } {
        Some(abc) => status_code(&abc.set_value(value)),
        None => crate::LIBSBML_INVALID_OBJECT,
    }
}

/// # Safety
/// `abc` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Abc_unsetValue(abc: *mut Abc_t) -> c_int {
    match unsafe { abc.as_mut() } {
        Some(abc) => status_code(&abc.unset_value()),
        None => crate::LIBSBML_INVALID_OBJECT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LIBSBML_INVALID_OBJECT, LIBSBML_OPERATION_SUCCESS, SbmlPkg_freeString};
    use sbml_pkg::OperationError;
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_numeric_attributes() {
        unsafe {
            let abc = Abc_create(3, 1, 1);
            assert_eq!(Abc_getNumber(abc), SBML_INT_MAX);
            assert!(Abc_getValue(abc).is_nan());

            assert_eq!(Abc_setNumber(abc, 12), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_setValue(abc, -0.25), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_getNumber(abc), 12);
            assert_eq!(Abc_getValue(abc), -0.25);
            assert_eq!(Abc_isSetValue(abc), 1);

            assert_eq!(Abc_unsetNumber(abc), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_isSetNumber(abc), 0);
            Abc_free(abc);
        }
    }

    #[test]
    fn test_required_attributes_and_unit() {
        unsafe {
            let abc = Abc_create(3, 2, 1);
            assert_eq!(Abc_setId(abc, c"a".as_ptr()), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_hasRequiredAttributes(abc), 0);
            assert_eq!(Abc_setFlag(abc, 0), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_isSetFlag(abc), 1);
            assert_eq!(Abc_getFlag(abc), 0);
            assert_eq!(Abc_hasRequiredAttributes(abc), 1);

            assert_eq!(Abc_setUnit(abc, c"not a unit".as_ptr()), OperationError::InvalidAttributeValue.code());
            assert_eq!(Abc_setUnit(abc, c"mole".as_ptr()), LIBSBML_OPERATION_SUCCESS);
            let unit = Abc_getUnit(abc);
            assert_eq!(CStr::from_ptr(unit).to_str(), Ok("mole"));
            SbmlPkg_freeString(unit);
            Abc_free(abc);
        }
    }

    #[test]
    fn test_null_receivers() {
        unsafe {
            assert_eq!(Abc_getNumber(ptr::null()), SBML_INT_MAX);
            assert!(Abc_getValue(ptr::null()).is_nan());
            assert_eq!(Abc_isSetName(ptr::null()), 0);
            assert_eq!(Abc_setValue(ptr::null_mut(), 1.0), LIBSBML_INVALID_OBJECT);
            assert_eq!(Abc_hasRequiredAttributes(ptr::null()), 0);
        }
    }
}
