// glapi/src/platform/egl.rs
//
//! Proc-address resolution via EGL.
//!
//! `eglGetProcAddress` is the canonical resolver on Android, but older
//! implementations only answer for extension commands, so core entry points
//! fall back to a `dlsym` lookup in `libGLESv2.so`.

use libc::{dlopen, dlsym, RTLD_LAZY};
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_char, c_void};

type EglGetProcAddress = unsafe extern "C" fn(*const c_char) -> *const c_void;

struct EGLLibrary {
    egl_library: *mut c_void,
    gles_library: *mut c_void,
    egl_get_proc_address: Option<EglGetProcAddress>,
}

// The handles are only ever passed back to dlsym, which is thread-safe.
unsafe impl Send for EGLLibrary {}
unsafe impl Sync for EGLLibrary {}

lazy_static! {
    static ref EGL_LIBRARY: EGLLibrary = {
        unsafe {
            let egl_library = dlopen(&b"libEGL.so\0"[0] as *const u8 as *const c_char, RTLD_LAZY);
            let gles_library =
                dlopen(&b"libGLESv2.so\0"[0] as *const u8 as *const c_char, RTLD_LAZY);

            let mut egl_get_proc_address = None;
            if !egl_library.is_null() {
                let symbol = &b"eglGetProcAddress\0"[0] as *const u8 as *const c_char;
                let function = dlsym(egl_library, symbol);
                if !function.is_null() {
                    egl_get_proc_address = Some(mem::transmute::<
                        *mut c_void,
                        EglGetProcAddress,
                    >(function));
                }
            }

            EGLLibrary {
                egl_library,
                gles_library,
                egl_get_proc_address,
            }
        }
    };
}

pub(crate) fn library_is_available() -> bool {
    !EGL_LIBRARY.egl_library.is_null() || !EGL_LIBRARY.gles_library.is_null()
}

pub(crate) fn get_proc_address(symbol_name: &str) -> *const c_void {
    unsafe {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        if let Some(egl_get_proc_address) = EGL_LIBRARY.egl_get_proc_address {
            let address = egl_get_proc_address(symbol_name.as_ptr());
            if !address.is_null() {
                return address;
            }
        }
        if EGL_LIBRARY.gles_library.is_null() {
            return std::ptr::null();
        }
        dlsym(EGL_LIBRARY.gles_library, symbol_name.as_ptr()) as *const c_void
    }
}
