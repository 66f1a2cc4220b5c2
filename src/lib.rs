//! Cross-platform OpenGL entry-point loading.
//!
//! OpenGL commands past version 1.1 aren't plain link-time symbols on any
//! desktop platform; they have to be resolved at runtime, against the
//! context that is current on the calling thread. This crate owns that
//! resolution: call [`load`] (or [`load_with`], handing in the resolver from
//! your windowing library) once a context is current, then call commands
//! like [`Clear`] directly. This is in contrast to crates like glutin, which
//! manage context creation as well; this crate only loads entry points into
//! whatever context something else made current.
//!
//! The function table is process-wide and deliberately unsynchronized,
//! matching the thread-affinity rules of OpenGL itself: load, call, and
//! unload only on the thread that owns the current context.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

mod commands;
pub use crate::commands::*;

pub mod error;
pub use crate::error::Error;

mod info;
pub use crate::info::{ContextProfile, GLApi, GLVersion};

mod loader;
pub use crate::loader::{api, is_loaded, is_supported, load, load_with, profile, unload, version};

mod platform;

pub mod types;

#[cfg(test)]
mod tests;
