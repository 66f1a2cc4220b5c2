// glapi/src/platform/glx.rs
//
//! Proc-address resolution via GLX.
//!
//! `glXGetProcAddress` can return entry points for commands that the running
//! implementation does not actually export, so a `dlsym` lookup on the GL
//! library backs it up for symbols it reports as missing (and for old libGL
//! builds that lack `glXGetProcAddress` entirely).

use crate::types::GLubyte;

use libc::{dlopen, dlsym, RTLD_LAZY};
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_char, c_void};

type GlXGetProcAddress = unsafe extern "C" fn(*const GLubyte) -> *mut c_void;

struct GLLibrary {
    library: *mut c_void,
    glx_get_proc_address: Option<GlXGetProcAddress>,
}

// The handle is only ever passed back to dlsym, which is thread-safe.
unsafe impl Send for GLLibrary {}
unsafe impl Sync for GLLibrary {}

lazy_static! {
    static ref GL_LIBRARY: GLLibrary = {
        unsafe {
            let mut library = dlopen(
                &b"libGL.so.1\0"[0] as *const u8 as *const c_char,
                RTLD_LAZY,
            );
            if library.is_null() {
                library = dlopen(&b"libGL.so\0"[0] as *const u8 as *const c_char, RTLD_LAZY);
            }

            let mut glx_get_proc_address = None;
            if !library.is_null() {
                let symbol = &b"glXGetProcAddress\0"[0] as *const u8 as *const c_char;
                let mut function = dlsym(library, symbol);
                if function.is_null() {
                    let symbol = &b"glXGetProcAddressARB\0"[0] as *const u8 as *const c_char;
                    function = dlsym(library, symbol);
                }
                if !function.is_null() {
                    glx_get_proc_address = Some(mem::transmute::<
                        *mut c_void,
                        GlXGetProcAddress,
                    >(function));
                }
            }

            GLLibrary {
                library,
                glx_get_proc_address,
            }
        }
    };
}

pub(crate) fn library_is_available() -> bool {
    !GL_LIBRARY.library.is_null()
}

pub(crate) fn get_proc_address(symbol_name: &str) -> *const c_void {
    unsafe {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        if let Some(glx_get_proc_address) = GL_LIBRARY.glx_get_proc_address {
            let address = glx_get_proc_address(symbol_name.as_ptr() as *const GLubyte);
            if !address.is_null() {
                return address as *const c_void;
            }
        }
        if GL_LIBRARY.library.is_null() {
            return std::ptr::null();
        }
        dlsym(GL_LIBRARY.library, symbol_name.as_ptr()) as *const c_void
    }
}
