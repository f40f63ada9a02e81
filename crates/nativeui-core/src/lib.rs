//! nativeui Core
//!
//! Shared plumbing for the nativeui crates: logging setup, hash collections
//! and profiling scopes.

pub mod alloc;
pub mod logging;
pub mod profiling;
