// glapi/src/platform/mod.rs
//
//! Platform-specific proc-address resolvers.
//!
//! Each backend exposes the same two functions: `library_is_available`, which
//! reports whether the system GL library could be opened at all, and
//! `get_proc_address`, which resolves one entry point by name.

#[cfg(android)]
pub(crate) mod egl;
#[cfg(android)]
pub(crate) use egl as default;

#[cfg(macos)]
pub(crate) mod cgl;
#[cfg(macos)]
pub(crate) use cgl as default;

#[cfg(linux)]
pub(crate) mod glx;
#[cfg(linux)]
pub(crate) use glx as default;

#[cfg(windows)]
pub(crate) mod wgl;
#[cfg(windows)]
pub(crate) use wgl as default;
