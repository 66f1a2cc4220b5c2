// glapi/src/error.rs
//
//! Various errors that loading can produce.

/// Various errors that loading can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// No OpenGL context is current on this thread.
    ///
    /// The platform resolvers can't tell a missing context apart from a driver
    /// that exposes no entry points at all, so this error also covers the case
    /// where no usable OpenGL implementation is installed.
    NoCurrentContext,
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// The context returned a `GL_VERSION` string that couldn't be parsed.
    UnexpectedVersionString,
}
