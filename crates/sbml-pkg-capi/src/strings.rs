// crates/sbml-pkg-capi/src/strings.rs

use core::ffi::c_char;
use core::ptr;
use std::ffi::{CStr, CString};

/// Copies `s` into a NUL-terminated heap string owned by the caller.
///
/// Returns `NULL` if `s` contains an interior NUL.
pub(crate) fn to_c_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            log::warn!("string with interior NUL at byte {} not returned", e.nul_position());
            ptr::null_mut()
        }
    }
}

/// Borrows a C string. `None` for `NULL` or text that is not UTF-8.
///
/// # Safety
/// `s` must be `NULL` or point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn from_c_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    match unsafe { CStr::from_ptr(s) }.to_str() {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("rejected non-UTF-8 argument: {}", e);
            None
        }
    }
}

/// Releases a string returned by any `_get` function of this library.
///
/// # Safety
/// `s` must be `NULL` or a string returned by this library that has not
/// been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SbmlPkg_freeString(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        let raw = to_c_string("c1");
        assert_eq!(unsafe { from_c_str(raw) }, Some("c1"));
        unsafe { SbmlPkg_freeString(raw) };
    }

    #[test]
    fn test_interior_nul_and_null() {
        assert!(to_c_string("a\0b").is_null());
        assert_eq!(unsafe { from_c_str(ptr::null()) }, None);
        unsafe { SbmlPkg_freeString(ptr::null_mut()) };
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let bytes = [0xffu8, 0xfe, 0];
        assert_eq!(unsafe { from_c_str(bytes.as_ptr().cast()) }, None);
    }
}
