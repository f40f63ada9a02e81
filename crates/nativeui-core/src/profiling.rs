//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    () => {};
    ($data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {};
    ($name:expr, $data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

/// Turn scope collection on or off.
///
/// Collection is off until this is called with `true`.
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    {
        puffin::set_scopes_on(enabled);
        tracing::info!("Puffin scopes {}", if enabled { "enabled" } else { "disabled" });
    }
    #[cfg(not(feature = "profiling"))]
    {
        if enabled {
            tracing::warn!("Profiling requested but the `profiling` feature is disabled");
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// The host calls this once per batch of commands so scopes group sensibly.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
