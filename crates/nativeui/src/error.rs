//! Error types and host result codes.

use std::fmt;

use crate::handle::Handle;
use crate::property::PropertyError;

/// Stable integer result codes returned across the host boundary.
///
/// Zero is success; every failure is a negative constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ResultCode {
    Ok = 0,
    Error = -2,
    InvalidPropertyName = -3,
    InvalidPropertyValue = -4,
    InvalidHandle = -5,
    InvalidTypeName = -6,
    InvalidIndex = -7,
    InvalidStringBufferSize = -8,
    InvalidScreen = -9,
    InvalidLayout = -10,
    FeatureNotAvailable = -12,
    CannotInsertDialog = -13,
}

impl ResultCode {
    /// The raw integer handed to the host.
    pub const fn raw(self) -> i32 {
        self as i32
    }
}

/// Errors produced by widget commands.
///
/// Every variant maps onto exactly one [`ResultCode`]; the extra fields only
/// feed the diagnostic that gets logged.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// No live widget is registered under the handle.
    InvalidHandle {
        handle: Handle,
        reason: &'static str,
    },

    /// The factory has no constructor for the type name.
    InvalidTypeName { type_name: String },

    /// The factory knows the type but its constructor failed.
    Construction { type_name: String, message: String },

    /// The same handle was passed as parent and child.
    SameParentAndChild { handle: Handle },

    /// The child already has a parent.
    AlreadyAttached { child: Handle, parent: Handle },

    /// The insert would make a widget its own ancestor.
    CyclicInsert { parent: Handle, child: Handle },

    /// Index below -1 or past the end of the parent's children.
    InvalidIndex { index: i32, len: usize },

    /// Dialogs are overlays and never tree children.
    CannotInsertDialog { dialog: Handle },

    /// The parent cannot hold this child.
    InvalidParentType {
        parent: Handle,
        reason: &'static str,
    },

    /// A screen-family widget of a particular kind was required.
    InvalidScreenType {
        handle: Handle,
        expected: &'static str,
    },

    /// The key is not a property of this widget (or not readable/writable).
    InvalidPropertyName { handle: Handle, key: String },

    /// The value could not be converted or is out of range.
    InvalidPropertyValue {
        handle: Handle,
        key: String,
        message: String,
    },

    /// The platform or widget lacks the capability behind this property.
    FeatureNotAvailable {
        handle: Handle,
        key: String,
        feature: &'static str,
    },

    /// The caller's buffer cannot hold the value plus its terminator.
    BufferTooSmall { required: usize, capacity: usize },

    /// The requested options menu icon is not usable.
    InvalidIcon { icon: i32, reason: &'static str },

    /// The icon mode flag is neither predefined nor image.
    InvalidIconMode { mode: i32 },
}

impl WidgetError {
    /// The host result code for this error.
    pub fn code(&self) -> ResultCode {
        match self {
            WidgetError::InvalidHandle { .. } => ResultCode::InvalidHandle,
            WidgetError::InvalidTypeName { .. } => ResultCode::InvalidTypeName,
            WidgetError::Construction { .. }
            | WidgetError::SameParentAndChild { .. }
            | WidgetError::AlreadyAttached { .. }
            | WidgetError::CyclicInsert { .. }
            | WidgetError::InvalidIcon { .. }
            | WidgetError::InvalidIconMode { .. } => ResultCode::Error,
            WidgetError::InvalidIndex { .. } => ResultCode::InvalidIndex,
            WidgetError::CannotInsertDialog { .. } => ResultCode::CannotInsertDialog,
            WidgetError::InvalidParentType { .. } => ResultCode::InvalidLayout,
            WidgetError::InvalidScreenType { .. } => ResultCode::InvalidScreen,
            WidgetError::InvalidPropertyName { .. } => ResultCode::InvalidPropertyName,
            WidgetError::InvalidPropertyValue { .. } => ResultCode::InvalidPropertyValue,
            WidgetError::FeatureNotAvailable { .. } => ResultCode::FeatureNotAvailable,
            WidgetError::BufferTooSmall { .. } => ResultCode::InvalidStringBufferSize,
        }
    }

    /// Attach the widget handle and key to a property-level error.
    pub fn from_property(handle: Handle, key: &str, err: PropertyError) -> Self {
        match err {
            PropertyError::Conversion { value, expected } => WidgetError::InvalidPropertyValue {
                handle,
                key: key.to_string(),
                message: format!("cannot convert '{}' to {}", value, expected),
            },
            PropertyError::InvalidValue(message) => WidgetError::InvalidPropertyValue {
                handle,
                key: key.to_string(),
                message,
            },
            PropertyError::FeatureNotAvailable(feature) => WidgetError::FeatureNotAvailable {
                handle,
                key: key.to_string(),
                feature,
            },
            PropertyError::UnknownName | PropertyError::ReadOnly | PropertyError::WriteOnly => {
                WidgetError::InvalidPropertyName {
                    handle,
                    key: key.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::InvalidHandle { handle, reason } => {
                write!(f, "Invalid widget handle {}: {}", handle, reason)
            }
            WidgetError::InvalidTypeName { type_name } => {
                write!(f, "Unknown widget type: {}", type_name)
            }
            WidgetError::Construction { type_name, message } => {
                write!(f, "Error while creating widget '{}': {}", type_name, message)
            }
            WidgetError::SameParentAndChild { handle } => {
                write!(f, "Child and parent are the same widget: {}", handle)
            }
            WidgetError::AlreadyAttached { child, parent } => {
                write!(f, "Widget {} already has a parent: {}", child, parent)
            }
            WidgetError::CyclicInsert { parent, child } => {
                write!(f, "Widget {} is an ancestor of {}", child, parent)
            }
            WidgetError::InvalidIndex { index, len } => {
                write!(f, "Invalid index {} for {} children", index, len)
            }
            WidgetError::CannotInsertDialog { dialog } => {
                write!(f, "Cannot add dialog {} to a widget", dialog)
            }
            WidgetError::InvalidParentType { parent, reason } => {
                write!(f, "Widget {} cannot hold this child: {}", parent, reason)
            }
            WidgetError::InvalidScreenType { handle, expected } => {
                write!(f, "Widget {} is not a {}", handle, expected)
            }
            WidgetError::InvalidPropertyName { handle, key } => {
                write!(f, "Invalid property '{}' on widget {}", key, handle)
            }
            WidgetError::InvalidPropertyValue {
                handle,
                key,
                message,
            } => write!(
                f,
                "Invalid value for property '{}' on widget {}: {}",
                key, handle, message
            ),
            WidgetError::FeatureNotAvailable {
                handle,
                key,
                feature,
            } => write!(
                f,
                "Property '{}' on widget {} needs unavailable feature {}",
                key, handle, feature
            ),
            WidgetError::BufferTooSmall { required, capacity } => write!(
                f,
                "Buffer size {} too short to hold {} bytes",
                capacity, required
            ),
            WidgetError::InvalidIcon { icon, reason } => {
                write!(f, "Invalid options menu icon {}: {}", icon, reason)
            }
            WidgetError::InvalidIconMode { mode } => {
                write!(f, "Invalid icon mode: {}", mode)
            }
        }
    }
}

impl std::error::Error for WidgetError {}

/// Result type alias for widget commands.
pub type WidgetResult<T> = Result<T, WidgetError>;
