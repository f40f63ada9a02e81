//! Type-name → constructor registry used by widget creation.
//!
//! The engine queries the factory once per create call. Unknown names are a
//! reportable error, and a constructor may itself refuse to build a widget.

use nativeui_core::alloc::HashMap;

use super::{Widget, WidgetKind};
use crate::handle::Handle;

/// Builds a default-configured widget for a freshly allocated handle.
pub type WidgetConstructor = Box<dyn Fn(Handle) -> Result<Widget, String> + Send + Sync>;

/// Registry mapping type names to constructors.
pub struct WidgetFactory {
    constructors: HashMap<String, WidgetConstructor>,
}

impl WidgetFactory {
    /// Create a factory with no registered types.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::default(),
        }
    }

    /// Create a factory knowing every creatable [`WidgetKind`] by its type
    /// name, plus `Layout` as an alias of `VerticalLayout`.
    pub fn with_defaults() -> Self {
        let mut factory = Self::empty();
        for kind in WidgetKind::CREATABLE {
            factory.register_kind(kind.type_name(), kind);
        }
        factory.register_kind("Layout", WidgetKind::VerticalLayout);
        factory
    }

    /// Register (or replace) a constructor for a type name.
    pub fn register<F>(&mut self, type_name: impl Into<String>, constructor: F)
    where
        F: Fn(Handle) -> Result<Widget, String> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        tracing::trace!("Registering widget type '{}'", type_name);
        self.constructors.insert(type_name, Box::new(constructor));
    }

    /// Register a type name that builds a default widget of `kind`.
    pub fn register_kind(&mut self, type_name: impl Into<String>, kind: WidgetKind) {
        self.register(type_name, move |handle| Ok(Widget::new(handle, kind)));
    }

    /// Remove a type name. Returns whether it was registered.
    pub fn unregister(&mut self, type_name: &str) -> bool {
        self.constructors.remove(type_name).is_some()
    }

    /// Check whether a type name is known.
    pub fn contains(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    /// Build a widget.
    ///
    /// `None` if the type name is unknown; `Some(Err(..))` if the
    /// constructor failed.
    pub fn construct(&self, type_name: &str, handle: Handle) -> Option<Result<Widget, String>> {
        self.constructors
            .get(type_name)
            .map(|constructor| constructor(handle))
    }

    /// Registered type names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Number of registered type names.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether no type names are registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for WidgetFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_creatable_kinds() {
        let factory = WidgetFactory::with_defaults();
        for kind in WidgetKind::CREATABLE {
            assert!(factory.contains(kind.type_name()), "{:?}", kind);
        }
        assert!(factory.contains("Layout"));
        assert!(!factory.contains("NativeRoot"));
        assert_eq!(factory.len(), WidgetKind::CREATABLE.len() + 1);
    }

    #[test]
    fn test_layout_alias_builds_vertical_layout() {
        let factory = WidgetFactory::with_defaults();
        let widget = factory
            .construct("Layout", Handle::from_raw(3))
            .unwrap()
            .unwrap();
        assert_eq!(widget.kind(), WidgetKind::VerticalLayout);
        assert_eq!(widget.handle(), Handle::from_raw(3));
    }

    #[test]
    fn test_unknown_and_failing_constructors() {
        let mut factory = WidgetFactory::empty();
        assert!(factory.construct("Label", Handle::from_raw(1)).is_none());

        factory.register("Camera", |_| Err("no camera hardware".to_string()));
        let result = factory.construct("Camera", Handle::from_raw(1)).unwrap();
        assert_eq!(result.unwrap_err(), "no camera hardware");

        assert_eq!(factory.type_names().collect::<Vec<_>>(), vec!["Camera"]);

        assert!(factory.unregister("Camera"));
        assert!(!factory.unregister("Camera"));
        assert_eq!(factory.type_names().count(), 0);
    }

    #[test]
    fn test_custom_constructor_presets_state() {
        let mut factory = WidgetFactory::empty();
        factory.register("TitleLabel", |handle| {
            let mut widget = Widget::new(handle, WidgetKind::Label);
            if let Some(text) = widget.text_mut() {
                text.font_size = 24.0;
            }
            Ok(widget)
        });

        let widget = factory
            .construct("TitleLabel", Handle::from_raw(2))
            .unwrap()
            .unwrap();
        assert_eq!(widget.text().unwrap().font_size, 24.0);
    }
}
