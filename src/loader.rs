// glapi/src/loader.rs
//
//! The load/unload driver.
//!
//! Loading resolves every slot in the function table, probes the current
//! context to make sure the resolved pointers are actually callable, and
//! records what the context reported about itself. All of it must happen on
//! the thread that owns the current OpenGL context.

use crate::commands::{self, CONTEXT_CORE_PROFILE_BIT};
use crate::commands::{CONTEXT_COMPATIBILITY_PROFILE_BIT, CONTEXT_PROFILE_MASK, VERSION};
use crate::error::Error;
use crate::info::{ContextProfile, GLApi, GLVersion};
use crate::platform;
use crate::types::{GLint, GLubyte};

use log::{info, warn};

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};

/// What a successful load learned about the current context.
#[derive(Clone, Copy)]
struct ContextInfo {
    version: GLVersion,
    api: GLApi,
    profile: ContextProfile,
}

// Guarded by the same single-thread contract as the function table: written
// only by load/unload, read by value everywhere else.
static mut CONTEXT_INFO: Option<ContextInfo> = None;

/// Loads all OpenGL entry points through the platform's own resolver.
///
/// Returns the version of the current context on success. A context must be
/// current on this thread; otherwise the table is left unloaded and an error
/// is returned.
pub fn load() -> Result<GLVersion, Error> {
    if !platform::default::library_is_available() {
        return Err(Error::NoGLLibraryFound);
    }
    load_with(|symbol_name| platform::default::get_proc_address(symbol_name))
}

/// Loads all OpenGL entry points through a caller-supplied resolver, such as
/// `SDL_GL_GetProcAddress` or `glfwGetProcAddress`.
///
/// The resolver is called once per catalogued command, in catalog order, and
/// its answers are taken as-is. Calling this while already loaded discards
/// the previous table and starts over.
pub fn load_with<F>(mut loadfn: F) -> Result<GLVersion, Error>
where
    F: FnMut(&'static str) -> *const c_void,
{
    unload();
    commands::load_all(&mut loadfn);

    let info = match probe_context() {
        Ok(info) => info,
        Err(error) => {
            commands::reset();
            return Err(error);
        }
    };

    unsafe {
        CONTEXT_INFO = Some(info);
    }

    let resolved = commands::COMMANDS
        .iter()
        .filter(|command| commands::slot_is_loaded(command.name))
        .count();
    info!(
        "loaded OpenGL {}.{} ({:?}), {} of {} entry points resolved",
        info.version.major,
        info.version.minor,
        info.api,
        resolved,
        commands::COMMANDS.len()
    );

    Ok(info.version)
}

/// Returns every entry point to the unloaded state and forgets the recorded
/// context information. Safe to call at any time, loaded or not.
pub fn unload() {
    commands::reset();
    unsafe {
        CONTEXT_INFO = None;
    }
}

/// Whether a load has succeeded and not been undone by `unload`.
#[inline]
pub fn is_loaded() -> bool {
    unsafe { CONTEXT_INFO }.is_some()
}

/// The version reported by the context at the most recent successful load.
#[inline]
pub fn version() -> Option<GLVersion> {
    unsafe { CONTEXT_INFO }.map(|info| info.version)
}

/// The API (OpenGL or OpenGL ES) of the most recently loaded context.
#[inline]
pub fn api() -> Option<GLApi> {
    unsafe { CONTEXT_INFO }.map(|info| info.api)
}

/// The profile bits of the most recently loaded context.
#[inline]
pub fn profile() -> Option<ContextProfile> {
    unsafe { CONTEXT_INFO }.map(|info| info.profile)
}

/// Whether the named command (e.g. `"glDrawArrays"`) resolved during the most
/// recent load. Always false while unloaded.
#[inline]
pub fn is_supported(command_name: &str) -> bool {
    commands::slot_is_loaded(command_name)
}

/// Checks that the freshly resolved table can actually talk to a context, and
/// reads back what the context says about itself.
fn probe_context() -> Result<ContextInfo, Error> {
    if !commands::slot_is_loaded("glGetString") || !commands::slot_is_loaded("glGetError") {
        warn!("baseline entry points didn't resolve; no current context?");
        return Err(Error::NoCurrentContext);
    }

    let version_string = unsafe {
        // Flush any error left over from before the load.
        commands::GetError();

        let version_pointer: *const GLubyte = commands::GetString(VERSION);
        if version_pointer.is_null() {
            warn!("GL_VERSION query returned null; no current context?");
            return Err(Error::NoCurrentContext);
        }
        CStr::from_ptr(version_pointer as *const c_char)
            .to_str()
            .map_err(|_| Error::UnexpectedVersionString)?
    };

    let (version, api) =
        parse_version_string(version_string).ok_or(Error::UnexpectedVersionString)?;

    Ok(ContextInfo {
        version,
        api,
        profile: query_profile(version, api),
    })
}

/// Parses a `GL_VERSION` string such as `"4.6.0 NVIDIA 535.54.03"`,
/// `"3.0 Mesa 20.0.8"`, or `"OpenGL ES 3.2 Mesa 20.0.8"`.
fn parse_version_string(version_string: &str) -> Option<(GLVersion, GLApi)> {
    let (rest, gl_api) = match version_string
        .strip_prefix("OpenGL ES-CM ")
        .or_else(|| version_string.strip_prefix("OpenGL ES-CL "))
        .or_else(|| version_string.strip_prefix("OpenGL ES "))
    {
        Some(rest) => (rest, GLApi::GLES),
        None => (version_string, GLApi::GL),
    };

    let mut components = rest.split_whitespace().next()?.split('.');
    let major = components.next()?.parse::<u8>().ok()?;
    let minor = components.next()?.parse::<u8>().ok()?;
    Some((GLVersion::new(major, minor), gl_api))
}

/// Queries `GL_CONTEXT_PROFILE_MASK`, which only exists on desktop OpenGL
/// 3.2 and up. Everything older reports an empty profile set.
fn query_profile(version: GLVersion, api: GLApi) -> ContextProfile {
    if api != GLApi::GL
        || (version.major, version.minor) < (3, 2)
        || !commands::slot_is_loaded("glGetIntegerv")
    {
        return ContextProfile::empty();
    }

    let mut mask: GLint = 0;
    unsafe {
        commands::GetIntegerv(CONTEXT_PROFILE_MASK, &mut mask);
        // Swallow INVALID_ENUM from drivers that advertise 3.2 but don't
        // know the query.
        commands::GetError();
    }

    let mut profile = ContextProfile::empty();
    if mask & CONTEXT_CORE_PROFILE_BIT as GLint != 0 {
        profile |= ContextProfile::CORE;
    }
    if mask & CONTEXT_COMPATIBILITY_PROFILE_BIT as GLint != 0 {
        profile |= ContextProfile::COMPATIBILITY;
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::parse_version_string;
    use crate::info::{GLApi, GLVersion};

    #[test]
    fn parses_desktop_version_strings() {
        assert_eq!(
            parse_version_string("4.6.0 NVIDIA 535.54.03"),
            Some((GLVersion::new(4, 6), GLApi::GL))
        );
        assert_eq!(
            parse_version_string("3.0 Mesa 20.0.8"),
            Some((GLVersion::new(3, 0), GLApi::GL))
        );
        assert_eq!(
            parse_version_string("2.1"),
            Some((GLVersion::new(2, 1), GLApi::GL))
        );
    }

    #[test]
    fn parses_gles_version_strings() {
        assert_eq!(
            parse_version_string("OpenGL ES 3.2 Mesa 20.0.8"),
            Some((GLVersion::new(3, 2), GLApi::GLES))
        );
        assert_eq!(
            parse_version_string("OpenGL ES-CM 1.1"),
            Some((GLVersion::new(1, 1), GLApi::GLES))
        );
    }

    #[test]
    fn rejects_garbage_version_strings() {
        assert_eq!(parse_version_string(""), None);
        assert_eq!(parse_version_string("Mesa 20.0.8"), None);
        assert_eq!(parse_version_string("4"), None);
        assert_eq!(parse_version_string("four.six"), None);
    }
}
