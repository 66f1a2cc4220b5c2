// glapi/src/tests.rs
//
//! Unit tests.
//!
//! These drive the loader through stub resolvers that hand back addresses of
//! real `extern "system"` functions, so the probe path exercises the same
//! transmute-and-call machinery as a live context. The function table is
//! process-wide, hence `#[serial]` on every test that touches it.

use crate::commands::{self, CONTEXT_CORE_PROFILE_BIT, NO_ERROR, VERSION};
use crate::types::{GLbitfield, GLenum, GLint, GLubyte};
use crate::{ContextProfile, Error, GLApi, GLVersion};

use serial_test::serial;
use std::os::raw::c_void;
use std::ptr;

extern "system" fn get_error_no_error() -> GLenum {
    NO_ERROR
}

extern "system" fn get_string_2_1(name: GLenum) -> *const GLubyte {
    version_string(name, b"2.1 stub\0")
}

extern "system" fn get_string_4_1(name: GLenum) -> *const GLubyte {
    version_string(name, b"4.1 stub\0")
}

extern "system" fn get_string_gles_3_2(name: GLenum) -> *const GLubyte {
    version_string(name, b"OpenGL ES 3.2 stub\0")
}

extern "system" fn get_string_garbage(name: GLenum) -> *const GLubyte {
    version_string(name, b"stub without a version\0")
}

extern "system" fn get_string_null(_: GLenum) -> *const GLubyte {
    ptr::null()
}

extern "system" fn get_integerv_core_profile(pname: GLenum, data: *mut GLint) {
    if pname == crate::commands::CONTEXT_PROFILE_MASK {
        unsafe {
            *data = CONTEXT_CORE_PROFILE_BIT as GLint;
        }
    }
}

extern "system" fn clear_noop(_: GLbitfield) {}

fn version_string(name: GLenum, string: &'static [u8]) -> *const GLubyte {
    if name == VERSION {
        string.as_ptr()
    } else {
        ptr::null()
    }
}

/// A resolver that answers only for the baseline commands, with the given
/// `glGetString` stub.
fn baseline_resolver(
    get_string: extern "system" fn(GLenum) -> *const GLubyte,
) -> impl FnMut(&'static str) -> *const c_void {
    move |symbol_name| match symbol_name {
        "glGetString" => get_string as *const c_void,
        "glGetError" => get_error_no_error as *const c_void,
        _ => ptr::null(),
    }
}

#[test]
#[serial]
fn test_load_with_reports_version() {
    let version = crate::load_with(baseline_resolver(get_string_2_1)).unwrap();
    assert_eq!(version, GLVersion::new(2, 1));
    assert!(crate::is_loaded());
    assert_eq!(crate::version(), Some(GLVersion::new(2, 1)));
    assert_eq!(crate::api(), Some(GLApi::GL));
    assert_eq!(crate::profile(), Some(ContextProfile::empty()));
    crate::unload();
}

#[test]
#[serial]
fn test_load_with_fails_without_baseline() {
    let result = crate::load_with(|_| ptr::null());
    assert_eq!(result, Err(Error::NoCurrentContext));
    assert!(!crate::is_loaded());
    assert_eq!(crate::version(), None);
    assert!(!crate::is_supported("glGetString"));
}

#[test]
#[serial]
fn test_load_with_fails_on_null_version_string() {
    let result = crate::load_with(baseline_resolver(get_string_null));
    assert_eq!(result, Err(Error::NoCurrentContext));
    assert!(!crate::is_loaded());
}

#[test]
#[serial]
fn test_load_with_fails_on_garbage_version_string() {
    let mut resolver = baseline_resolver(get_string_garbage);
    let result = crate::load_with(|symbol_name| match symbol_name {
        "glClear" => clear_noop as *const c_void,
        _ => resolver(symbol_name),
    });
    assert_eq!(result, Err(Error::UnexpectedVersionString));

    // A failed load must not leave stale pointers behind.
    assert!(!crate::is_loaded());
    assert!(!crate::is_supported("glClear"));
}

#[test]
#[serial]
fn test_unload_is_idempotent() {
    crate::unload();
    crate::unload();
    assert!(!crate::is_loaded());

    crate::load_with(baseline_resolver(get_string_2_1)).unwrap();
    crate::unload();
    crate::unload();
    assert!(!crate::is_loaded());
    assert_eq!(crate::version(), None);
}

#[test]
#[serial]
fn test_reload_clears_stale_slots() {
    let mut resolver = baseline_resolver(get_string_2_1);
    crate::load_with(|symbol_name| match symbol_name {
        "glClear" => clear_noop as *const c_void,
        _ => resolver(symbol_name),
    })
    .unwrap();
    assert!(crate::is_supported("glClear"));

    // Reload through a resolver that no longer knows glClear.
    crate::load_with(baseline_resolver(get_string_2_1)).unwrap();
    assert!(crate::is_loaded());
    assert!(!crate::is_supported("glClear"));
    crate::unload();
}

#[test]
#[serial]
fn test_is_supported_matches_resolver_answers() {
    let mut resolver = baseline_resolver(get_string_2_1);
    crate::load_with(|symbol_name| match symbol_name {
        "glClear" => clear_noop as *const c_void,
        _ => resolver(symbol_name),
    })
    .unwrap();

    assert!(crate::is_supported("glGetString"));
    assert!(crate::is_supported("glGetError"));
    assert!(crate::is_supported("glClear"));
    assert!(!crate::is_supported("glDrawArrays"));
    assert!(!crate::is_supported("glNotARealCommand"));
    crate::unload();
}

#[test]
#[serial]
fn test_gles_version_string_selects_gles_api() {
    let version = crate::load_with(baseline_resolver(get_string_gles_3_2)).unwrap();
    assert_eq!(version, GLVersion::new(3, 2));
    assert_eq!(crate::api(), Some(GLApi::GLES));
    // GLES has no core/compatibility split, even at 3.2.
    assert_eq!(crate::profile(), Some(ContextProfile::empty()));
    crate::unload();
}

#[test]
#[serial]
fn test_profile_mask_queried_on_modern_desktop_gl() {
    let mut resolver = baseline_resolver(get_string_4_1);
    crate::load_with(|symbol_name| match symbol_name {
        "glGetIntegerv" => get_integerv_core_profile as *const c_void,
        _ => resolver(symbol_name),
    })
    .unwrap();
    assert_eq!(crate::profile(), Some(ContextProfile::CORE));
    crate::unload();
}

#[test]
#[serial]
fn test_old_desktop_gl_reports_empty_profile() {
    let mut resolver = baseline_resolver(get_string_2_1);
    crate::load_with(|symbol_name| match symbol_name {
        "glGetIntegerv" => get_integerv_core_profile as *const c_void,
        _ => resolver(symbol_name),
    })
    .unwrap();
    assert_eq!(crate::profile(), Some(ContextProfile::empty()));
    crate::unload();
}

#[test]
#[serial]
fn test_resolver_sees_every_command_once() {
    let mut seen = Vec::new();
    let _ = crate::load_with(|symbol_name| {
        seen.push(symbol_name);
        ptr::null()
    });

    assert_eq!(seen.len(), commands::COMMANDS.len());
    assert!(seen.iter().all(|name| name.starts_with("gl")));
    assert!(seen.contains(&"glGetString"));
    assert!(seen.contains(&"glClear"));
    assert!(seen.contains(&"glSpecializeShader"));
    assert!(seen.contains(&"glGenFramebuffersEXT"));

    let mut sorted = seen.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), seen.len(), "duplicate command in catalog");
}

#[test]
fn test_catalog_features_are_well_formed() {
    for command in commands::COMMANDS {
        assert!(command.name.starts_with("gl"), "{}", command.name);
        assert!(
            command.feature.starts_with("GL_VERSION_")
                || command.feature.starts_with("GL_EXT_")
                || command.feature.starts_with("GL_ARB_"),
            "{}",
            command.feature
        );
    }

    let clear = commands::COMMANDS
        .iter()
        .find(|command| command.name == "glClear")
        .unwrap();
    assert_eq!(clear.feature, "GL_VERSION_1_0");
}

#[test]
#[serial]
fn test_calling_through_loaded_slot() {
    let mut resolver = baseline_resolver(get_string_2_1);
    crate::load_with(|symbol_name| match symbol_name {
        "glClear" => clear_noop as *const c_void,
        _ => resolver(symbol_name),
    })
    .unwrap();

    unsafe {
        crate::Clear(crate::COLOR_BUFFER_BIT);
        assert_eq!(crate::GetError(), NO_ERROR);
    }
    crate::unload();
}
