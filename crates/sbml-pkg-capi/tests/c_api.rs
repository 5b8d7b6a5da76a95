// crates/sbml-pkg-capi/tests/c_api.rs

use sbml_pkg::SBase;
use sbml_pkg_capi::*;
use std::ffi::CStr;
use std::ptr;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_build_container_through_c_functions() {
    init_logging();
    unsafe {
        let cy = ContainerY_create(3, 2, 1);
        assert_eq!(ContainerY_setId(cy, c"y1".as_ptr()), LIBSBML_OPERATION_SUCCESS);

        for (id, number) in [(c"a1", 1), (c"a2", 2), (c"a3", 3)] {
            let abc = ContainerY_createAbc(cy);
            assert_eq!(Abc_setId(abc, id.as_ptr()), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_setFlag(abc, 1), LIBSBML_OPERATION_SUCCESS);
            assert_eq!(Abc_setNumber(abc, number), LIBSBML_OPERATION_SUCCESS);
        }
        assert_eq!(ContainerY_getNumAbcs(cy), 3);

        // The C handle is the Rust object.
        let container = &*cy;
        assert_eq!(container.id(), "y1");
        assert_eq!(container.children().len(), 1);
        assert!(container.list_of_abcs().iter().all(|abc| abc.has_required_attributes()));

        let second = ContainerY_getAbc(cy, 1);
        let id = Abc_getId(second);
        assert_eq!(CStr::from_ptr(id).to_str(), Ok("a2"));
        SbmlPkg_freeString(id);

        let taken = ContainerY_removeAbcById(cy, c"a1".as_ptr());
        assert_eq!(Abc_getNumber(taken), 1);
        Abc_free(taken);
        assert_eq!(Abc_getNumber(ContainerY_getAbc(cy, 0)), 2);

        ContainerY_free(cy);
    }
}

#[test]
fn test_unsupported_namespaces_return_null() {
    init_logging();
    assert!(ClassOne_create(3, 3, 1).is_null());
    assert!(Abc_create(3, 1, 2).is_null());
    assert!(ContainerY_create(2, 1, 1).is_null());
    assert!(CaContent_create(1, 2).is_null());
}

#[test]
fn test_null_handles_are_harmless() {
    init_logging();
    unsafe {
        ClassOne_free(ptr::null_mut());
        Abc_free(ptr::null_mut());
        ContainerY_free(ptr::null_mut());
        CaContent_free(ptr::null_mut());
        SbmlPkg_freeString(ptr::null_mut());
        assert_eq!(Abc_setId(ptr::null_mut(), c"a".as_ptr()), LIBSBML_INVALID_OBJECT);
        assert_eq!(CaContent_isSetLocation(ptr::null()), 0);
    }
}
