// crates/sbml-pkg-capi/src/container_y.rs

use crate::abc::Abc_t;
use crate::strings::from_c_str;
use core::ffi::{c_char, c_int, c_uint};
use core::ptr;
use sbml_pkg::SBML_INT_MAX;
use sbml_pkg::namespaces::{Namespaces, Package};
use sbml_pkg::packages::tsb::ContainerY;
use sbml_pkg::status_code;

/// The `tsb` `<containerY>` as seen from C.
pub type ContainerY_t = ContainerY;

/// Creates a `ContainerY`, or returns `NULL` for an unsupported combination
/// of level, version and package version.
#[unsafe(no_mangle)]
pub extern "C" fn ContainerY_create(level: c_uint, version: c_uint, pkgVersion: c_uint) -> *mut ContainerY_t {
    let ns = Namespaces::sbml(level, version).with_package(Package::Tsb, pkgVersion);
    crate::create_in(ns, ContainerY::with_namespaces)
}

object_lifecycle!(
    ContainerY_t,
    ContainerY_clone,
    ContainerY_free,
    ContainerY_hasRequiredAttributes
);

string_field!(
    ContainerY_t,
    ContainerY_getId, ContainerY_isSetId, ContainerY_setId, ContainerY_unsetId =>
    id, is_set_id, set_id, unset_id
);

string_field!(
    ContainerY_t,
    ContainerY_getName, ContainerY_isSetName, ContainerY_setName, ContainerY_unsetName =>
    name, is_set_name, set_name, unset_name
);

// --- listOfAbcs ---

/// Returns `SBML_INT_MAX` for a `NULL` receiver.
///
/// # Safety
/// `cy` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_getNumAbcs(cy: *const ContainerY_t) -> c_uint {
    match unsafe { cy.as_ref() } {
        Some(cy) => u32::try_from(cy.num_abcs()).unwrap_or(SBML_INT_MAX),
        None => SBML_INT_MAX,
    }
}

/// Returns the `n`th `Abc`, owned by the container, or `NULL`.
///
/// # Safety
/// `cy` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_getAbc(cy: *mut ContainerY_t, n: c_uint) -> *mut Abc_t {
    unsafe { cy.as_mut() }
        .and_then(|cy| cy.abc_mut(n as usize))
        .map_or(ptr::null_mut(), |abc| abc as *mut Abc_t)
}

/// Returns the `Abc` with the given id, owned by the container, or `NULL`.
///
/// # Safety
/// `cy` must be `NULL` or a valid pointer from this library; `sid` must be
/// `NULL` or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_getAbcById(cy: *mut ContainerY_t, sid: *const c_char) -> *mut Abc_t {
    let (Some(cy), Some(sid)) = (unsafe { cy.as_mut() }, unsafe { from_c_str(sid) }) else {
        return ptr::null_mut();
    };
    cy.abc_by_id_mut(sid).map_or(ptr::null_mut(), |abc| abc as *mut Abc_t)
}

/// Adds a copy of `abc`. The caller keeps ownership of `abc`.
///
/// # Safety
/// `cy` and `abc` must each be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_addAbc(cy: *mut ContainerY_t, abc: *const Abc_t) -> c_int {
    let Some(cy) = (unsafe { cy.as_mut() }) else {
        return crate::LIBSBML_INVALID_OBJECT;
    };
    match unsafe { abc.as_ref() } {
        Some(abc) => status_code(&cy.add_abc(abc)),
        None => crate::LIBSBML_OPERATION_FAILED,
    }
}

/// Appends a new `Abc` in the container's namespaces and returns it. The
/// container keeps ownership.
///
/// # Safety
/// `cy` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_createAbc(cy: *mut ContainerY_t) -> *mut Abc_t {
    match unsafe { cy.as_mut() } {
        Some(cy) => cy.create_abc() as *mut Abc_t,
        None => ptr::null_mut(),
    }
}

/// Removes the `n`th `Abc` and hands it to the caller, or returns `NULL`.
///
/// # Safety
/// `cy` must be `NULL` or a valid pointer from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_removeAbc(cy: *mut ContainerY_t, n: c_uint) -> *mut Abc_t {
    unsafe { cy.as_mut() }
        .and_then(|cy| cy.remove_abc(n as usize))
        .map_or(ptr::null_mut(), |abc| Box::into_raw(Box::new(abc)))
}

/// Removes the `Abc` with the given id and hands it to the caller, or
/// returns `NULL`.
///
/// # Safety
/// `cy` must be `NULL` or a valid pointer from this library; `sid` must be
/// `NULL` or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ContainerY_removeAbcById(cy: *mut ContainerY_t, sid: *const c_char) -> *mut Abc_t {
    let (Some(cy), Some(sid)) = (unsafe { cy.as_mut() }, unsafe { from_c_str(sid) }) else {
        return ptr::null_mut();
    };
    cy.remove_abc_by_id(sid)
        .map_or(ptr::null_mut(), |abc| Box::into_raw(Box::new(abc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abc::{Abc_create, Abc_free, Abc_getNumber, Abc_setFlag, Abc_setId, Abc_setNumber};
    use crate::{LIBSBML_INVALID_OBJECT, LIBSBML_OPERATION_SUCCESS};
    use sbml_pkg::OperationError;

    unsafe fn new_abc(level: c_uint, version: c_uint, id: &std::ffi::CStr) -> *mut Abc_t {
        unsafe {
            let abc = Abc_create(level, version, 1);
            Abc_setId(abc, id.as_ptr());
            Abc_setFlag(abc, 1);
            abc
        }
    }

    #[test]
    fn test_list_operations() {
        unsafe {
            let cy = ContainerY_create(3, 1, 1);
            assert_eq!(ContainerY_getNumAbcs(cy), 0);

            let a = new_abc(3, 1, c"a");
            assert_eq!(ContainerY_addAbc(cy, a), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(ContainerY_addAbc(cy, a), OperationError::DuplicateObjectId.code());
            Abc_free(a);

            let b = ContainerY_createAbc(cy);
            Abc_setId(b, c"b".as_ptr());
            Abc_setNumber(b, 5);
            assert_eq!(ContainerY_getNumAbcs(cy), 2);

            assert_eq!(Abc_getNumber(ContainerY_getAbcById(cy, c"b".as_ptr())), 5);
            assert!(ContainerY_getAbc(cy, 2).is_null());
            assert!(ContainerY_getAbcById(cy, c"zz".as_ptr()).is_null());

            let removed = ContainerY_removeAbcById(cy, c"a".as_ptr());
            assert!(!removed.is_null());
            Abc_free(removed);
            assert_eq!(ContainerY_getNumAbcs(cy), 1);

            let removed = ContainerY_removeAbc(cy, 0);
            assert_eq!(Abc_getNumber(removed), 5);
            Abc_free(removed);
            assert!(ContainerY_removeAbc(cy, 0).is_null());

            ContainerY_free(cy);
        }
    }

    #[test]
    fn test_add_rejects_mismatched_namespaces() {
        unsafe {
            let cy = ContainerY_create(3, 1, 1);
            let other = new_abc(3, 2, c"x");
            assert_eq!(ContainerY_addAbc(cy, other), OperationError::VersionMismatch.code());
            assert_eq!(ContainerY_addAbc(cy, ptr::null()), crate::LIBSBML_OPERATION_FAILED);
            Abc_free(other);
            ContainerY_free(cy);
        }
    }

    #[test]
    fn test_clone_is_deep() {
        unsafe {
            let cy = ContainerY_create(3, 1, 1);
            ContainerY_setId(cy, c"y".as_ptr());
            ContainerY_createAbc(cy);
            let copy = ContainerY_clone(cy);
            Abc_free(ContainerY_removeAbc(cy, 0));
            assert_eq!(ContainerY_getNumAbcs(copy), 1);
            assert_eq!(ContainerY_isSetId(copy), 1);
            ContainerY_free(copy);
            ContainerY_free(cy);
        }
    }

    #[test]
    fn test_null_receivers() {
        unsafe {
            assert_eq!(ContainerY_getNumAbcs(ptr::null()), SBML_INT_MAX);
            assert!(ContainerY_getAbc(ptr::null_mut(), 0).is_null());
            assert!(ContainerY_createAbc(ptr::null_mut()).is_null());
            assert_eq!(ContainerY_addAbc(ptr::null_mut(), ptr::null()), LIBSBML_INVALID_OBJECT);
            assert!(ContainerY_removeAbcById(ptr::null_mut(), c"a".as_ptr()).is_null());
        }
    }

}
