//! String-typed property protocol.
//!
//! Each widget kind owns a list of property tables (kind-specific first,
//! shared ones after). A table row binds a key to a setter and/or getter
//! that converts between the host's strings and the variant's typed state.
//! The first row whose key matches wins, so a kind can override a shared key.

pub mod convert;
pub mod keys;
mod tables;

use std::fmt;

use crate::config::PlatformFeatures;
use crate::services::ImageTable;
use crate::widget::{Widget, WidgetKind};

/// Failure of a single property conversion or assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// The string could not be parsed into the expected type.
    Conversion {
        value: String,
        expected: &'static str,
    },

    /// Parsed fine but is not acceptable for this widget.
    InvalidValue(String),

    /// The platform lacks the capability behind this property.
    FeatureNotAvailable(&'static str),

    /// The widget has no property with this key.
    UnknownName,

    /// The property can be read but not written.
    ReadOnly,

    /// The property can be written but not read.
    WriteOnly,
}

impl PropertyError {
    pub fn conversion(value: &str, expected: &'static str) -> Self {
        PropertyError::Conversion {
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::Conversion { value, expected } => {
                write!(f, "cannot convert '{}' to {}", value, expected)
            }
            PropertyError::InvalidValue(msg) => write!(f, "invalid value: {}", msg),
            PropertyError::FeatureNotAvailable(feature) => {
                write!(f, "feature not available: {}", feature)
            }
            PropertyError::UnknownName => write!(f, "unknown property"),
            PropertyError::ReadOnly => write!(f, "property is read-only"),
            PropertyError::WriteOnly => write!(f, "property is write-only"),
        }
    }
}

impl std::error::Error for PropertyError {}

/// Read-only collaborators a property conversion may consult.
pub struct PropertyContext<'a> {
    pub images: &'a dyn ImageTable,
    pub features: PlatformFeatures,
}

impl PropertyContext<'_> {
    /// Fail with `FeatureNotAvailable` unless `feature` is present.
    pub fn require(
        &self,
        feature: PlatformFeatures,
        name: &'static str,
    ) -> Result<(), PropertyError> {
        if self.features.contains(feature) {
            Ok(())
        } else {
            Err(PropertyError::FeatureNotAvailable(name))
        }
    }
}

pub type PropertySetter =
    fn(&mut Widget, &str, &PropertyContext<'_>) -> Result<(), PropertyError>;
pub type PropertyGetter = fn(&Widget, &PropertyContext<'_>) -> Result<String, PropertyError>;

/// One row of a property table.
pub struct PropertyDescriptor {
    pub key: &'static str,
    pub set: Option<PropertySetter>,
    pub get: Option<PropertyGetter>,
}

impl PropertyDescriptor {
    pub const fn read_write(key: &'static str, set: PropertySetter, get: PropertyGetter) -> Self {
        Self {
            key,
            set: Some(set),
            get: Some(get),
        }
    }

    pub const fn read_only(key: &'static str, get: PropertyGetter) -> Self {
        Self {
            key,
            set: None,
            get: Some(get),
        }
    }

    pub const fn write_only(key: &'static str, set: PropertySetter) -> Self {
        Self {
            key,
            set: Some(set),
            get: None,
        }
    }
}

/// Find the row for `key` on widgets of `kind`.
pub fn find(kind: WidgetKind, key: &str) -> Option<&'static PropertyDescriptor> {
    tables::for_kind(kind)
        .iter()
        .flat_map(|table| table.iter())
        .find(|descriptor| descriptor.key == key)
}

/// Every key a kind understands, including shadowed duplicates once.
pub fn known_keys(kind: WidgetKind) -> Vec<&'static str> {
    let mut known: Vec<&'static str> = Vec::new();
    for descriptor in tables::for_kind(kind).iter().flat_map(|table| table.iter()) {
        if !known.contains(&descriptor.key) {
            known.push(descriptor.key);
        }
    }
    known
}

/// Convert and assign a property through the widget's tables.
pub fn set_property(
    widget: &mut Widget,
    key: &str,
    value: &str,
    ctx: &PropertyContext<'_>,
) -> Result<(), PropertyError> {
    let descriptor = find(widget.kind(), key).ok_or(PropertyError::UnknownName)?;
    let set = descriptor.set.ok_or(PropertyError::ReadOnly)?;
    set(widget, value, ctx)
}

/// Read a property through the widget's tables.
pub fn get_property(
    widget: &Widget,
    key: &str,
    ctx: &PropertyContext<'_>,
) -> Result<String, PropertyError> {
    let descriptor = find(widget.kind(), key).ok_or(PropertyError::UnknownName)?;
    let get = descriptor.get.ok_or(PropertyError::WriteOnly)?;
    get(widget, ctx)
}
