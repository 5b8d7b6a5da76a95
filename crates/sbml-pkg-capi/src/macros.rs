// crates/sbml-pkg-capi/src/macros.rs

//! Generators for the accessor families every class exposes.
//!
//! Each macro takes the exported C names explicitly so the symbol table
//! stays greppable.

/// `_clone`, `_free` and `_hasRequiredAttributes`.
macro_rules! object_lifecycle {
    ($ty:ty, $clone:ident, $free:ident, $has_required:ident) => {
        /// Returns a deep copy owned by the caller, or `NULL`.
        ///
        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $clone(obj: *const $ty) -> *mut $ty {
            match unsafe { obj.as_ref() } {
                Some(obj) => Box::into_raw(Box::new(obj.clone())),
                None => core::ptr::null_mut(),
            }
        }

        /// Releases an object owned by the caller.
        ///
        /// # Safety
        /// `obj` must be `NULL` or an owned pointer from this library that is
        /// not used afterwards. Pointers into a container must not be freed.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $free(obj: *mut $ty) {
            if !obj.is_null() {
                drop(unsafe { Box::from_raw(obj) });
            }
        }

        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $has_required(obj: *const $ty) -> core::ffi::c_int {
            match unsafe { obj.as_ref() } {
                Some(obj) => sbml_pkg::SBase::has_required_attributes(obj) as core::ffi::c_int,
                None => 0,
            }
        }
    };
}

/// Get/isSet/set/unset for a string attribute. Unset values read as `NULL`.
macro_rules! string_field {
    (
        $ty:ty,
        $get:ident, $is_set:ident, $set:ident, $unset:ident =>
        $field:ident, $rs_is_set:ident, $rs_set:ident, $rs_unset:ident
    ) => {
        /// Returns a copy released with `SbmlPkg_freeString`, or `NULL` when unset.
        ///
        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(obj: *const $ty) -> *mut core::ffi::c_char {
            match unsafe { obj.as_ref() } {
                Some(obj) if obj.$rs_is_set() => $crate::strings::to_c_string(obj.$field()),
                _ => core::ptr::null_mut(),
            }
        }

        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $is_set(obj: *const $ty) -> core::ffi::c_int {
            unsafe { obj.as_ref() }.is_some_and(|obj| obj.$rs_is_set()) as core::ffi::c_int
        }

        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library; `value`
        /// must be `NULL` or a NUL-terminated string.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(obj: *mut $ty, value: *const core::ffi::c_char) -> core::ffi::c_int {
            let Some(obj) = (unsafe { obj.as_mut() }) else {
                return $crate::LIBSBML_INVALID_OBJECT;
            };
            match unsafe { $crate::strings::from_c_str(value) } {
                Some(value) => sbml_pkg::status_code(&obj.$rs_set(value)),
                None => $crate::LIBSBML_INVALID_ATTRIBUTE_VALUE,
            }
        }

        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $unset(obj: *mut $ty) -> core::ffi::c_int {
            match unsafe { obj.as_mut() } {
                Some(obj) => sbml_pkg::status_code(&obj.$rs_unset()),
                None => $crate::LIBSBML_INVALID_OBJECT,
            }
        }
    };
}

/// Get/isSet/set/unset for a boolean attribute, as C `int`s.
macro_rules! bool_field {
    (
        $ty:ty,
        $get:ident, $is_set:ident, $set:ident, $unset:ident =>
        $field:ident, $rs_is_set:ident, $rs_set:ident, $rs_unset:ident
    ) => {
        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(obj: *const $ty) -> core::ffi::c_int {
            unsafe { obj.as_ref() }.is_some_and(|obj| obj.$field()) as core::ffi::c_int
        }

        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $is_set(obj: *const $ty) -> core::ffi::c_int {
            unsafe { obj.as_ref() }.is_some_and(|obj| obj.$rs_is_set()) as core::ffi::c_int
        }

        /// Any non-zero `value` is `true`.
        ///
        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(obj: *mut $ty, value: core::ffi::c_int) -> core::ffi::c_int {
            match unsafe { obj.as_mut() } {
                Some(obj) => sbml_pkg::status_code(&obj.$rs_set(value != 0)),
                None => $crate::LIBSBML_INVALID_OBJECT,
            }
        }

        /// # Safety
        /// `obj` must be `NULL` or a valid pointer from this library.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $unset(obj: *mut $ty) -> core::ffi::c_int {
            match unsafe { obj.as_mut() } {
                Some(obj) => sbml_pkg::status_code(&obj.$rs_unset()),
                None => $crate::LIBSBML_INVALID_OBJECT,
            }
        }
    };
}
