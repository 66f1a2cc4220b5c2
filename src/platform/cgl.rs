// glapi/src/platform/cgl.rs
//
//! Proc-address resolution via the OpenGL framework bundle.
//!
//! All entry points the framework exports are plain symbols, so a single
//! `CFBundleGetFunctionPointerForName` lookup covers every version and
//! extension.

use core_foundation::base::TCFType;
use core_foundation::bundle::{
    CFBundleGetBundleWithIdentifier, CFBundleGetFunctionPointerForName, CFBundleRef,
};
use core_foundation::string::CFString;
use std::os::raw::c_void;
use std::ptr;
use std::str::FromStr;

static OPENGL_FRAMEWORK_IDENTIFIER: &str = "com.apple.opengl";

thread_local! {
    static OPENGL_FRAMEWORK: CFBundleRef = {
        unsafe {
            let framework_identifier: CFString =
                FromStr::from_str(OPENGL_FRAMEWORK_IDENTIFIER).unwrap();
            CFBundleGetBundleWithIdentifier(framework_identifier.as_concrete_TypeRef())
        }
    };
}

pub(crate) fn library_is_available() -> bool {
    OPENGL_FRAMEWORK.with(|framework| !framework.is_null())
}

pub(crate) fn get_proc_address(symbol_name: &str) -> *const c_void {
    OPENGL_FRAMEWORK.with(|framework| {
        if framework.is_null() {
            return ptr::null();
        }
        unsafe {
            let symbol_name: CFString = FromStr::from_str(symbol_name).unwrap();
            CFBundleGetFunctionPointerForName(*framework, symbol_name.as_concrete_TypeRef())
        }
    })
}
