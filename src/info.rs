// glapi/src/info.rs
//
//! OpenGL context information reported by a successful load.

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GLApi {
    GL,
    GLES,
}

/// Describes the OpenGL version that the current context implements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GLVersion {
    pub major: u8,
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }
}

bitflags! {
    /// The profile bits advertised by the current context.
    ///
    /// Contexts older than OpenGL 3.2, and all OpenGL ES contexts, predate
    /// the core/compatibility split and report an empty set.
    pub struct ContextProfile: u8 {
        const CORE = 0x01;
        const COMPATIBILITY = 0x02;
    }
}
