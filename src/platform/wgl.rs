// glapi/src/platform/wgl.rs
//
//! Proc-address resolution via WGL.
//!
//! `wglGetProcAddress` only resolves post-1.1 entry points, and on failure it
//! returns one of a handful of bogus non-null sentinels depending on the
//! driver. Anything it can't resolve is looked up in `opengl32.dll` directly.

use std::ffi::CString;
use std::os::raw::c_void;
use winapi::shared::minwindef::HMODULE;
use winapi::shared::ntdef::LPCSTR;
use winapi::um::libloaderapi::{GetProcAddress, LoadLibraryA};
use winapi::um::wingdi::wglGetProcAddress;

struct SendableModule(HMODULE);

unsafe impl Send for SendableModule {}
unsafe impl Sync for SendableModule {}

lazy_static! {
    static ref OPENGL_LIBRARY: SendableModule = {
        unsafe { SendableModule(LoadLibraryA(&b"opengl32.dll\0"[0] as *const u8 as LPCSTR)) }
    };
}

pub(crate) fn library_is_available() -> bool {
    !OPENGL_LIBRARY.0.is_null()
}

pub(crate) fn get_proc_address(symbol_name: &str) -> *const c_void {
    unsafe {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        let address = wglGetProcAddress(symbol_name.as_ptr() as LPCSTR);
        match address as isize {
            0 | 1 | 2 | 3 | -1 => {}
            _ => return address as *const c_void,
        }
        if OPENGL_LIBRARY.0.is_null() {
            return std::ptr::null();
        }
        GetProcAddress(OPENGL_LIBRARY.0, symbol_name.as_ptr() as LPCSTR) as *const c_void
    }
}
