//! Opaque integer handles that the host uses to address widgets.

use std::fmt;

/// Caller-visible identifier of a live widget.
///
/// Handles are plain integers on the host side. The engine never hands out
/// references to widgets, only handles, and a handle is never reused within
/// the lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(i32);

static_assertions::assert_eq_size!(Handle, i32);

impl Handle {
    /// The host's built-in root screen, registered before any user widget.
    pub const NATIVE_ROOT: Handle = Handle(0);

    /// First handle given out to user-created widgets.
    pub const FIRST_USER: Handle = Handle(1);

    /// Raw value the host uses for "no widget" (e.g. an empty radio selection).
    pub const NONE_RAW: i32 = -1;

    /// Wrap a raw host value.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw host value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this is the reserved native root handle.
    pub const fn is_native_root(self) -> bool {
        self.0 == Self::NATIVE_ROOT.0
    }

    /// The handle that follows this one, if the integer space allows it.
    pub(crate) fn next(self) -> Option<Handle> {
        self.0.checked_add(1).map(Handle)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Handle {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<Handle> for i32 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_root_is_zero() {
        assert_eq!(Handle::NATIVE_ROOT.raw(), 0);
        assert!(Handle::NATIVE_ROOT.is_native_root());
        assert!(!Handle::FIRST_USER.is_native_root());
    }

    #[test]
    fn test_next_stops_at_max() {
        assert_eq!(Handle::from_raw(4).next(), Some(Handle::from_raw(5)));
        assert_eq!(Handle::from_raw(i32::MAX).next(), None);
    }

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(Handle::from_raw(42).to_string(), "42");
    }
}
