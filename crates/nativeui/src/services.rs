//! Collaborators the engine consumes but does not implement.
//!
//! Fonts, decoded images and the host's "replace the visible root view" hook
//! are injected at construction so the engine can run against fakes.

use std::sync::Arc;

use crate::handle::Handle;
use crate::widget::WidgetKind;

/// A resolved font: typeface name plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub typeface: String,
    pub size: f32,
}

/// Converts host font handles into typefaces.
pub trait FontResolver: Send + Sync {
    /// Resolve a font handle, `None` if the host never loaded it.
    fn resolve_font(&self, handle: i32) -> Option<FontSpec>;
}

/// A decoded image owned by the host's image table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub handle: i32,
    pub width: u32,
    pub height: u32,
}

/// Read-only view of the host's image resources.
pub trait ImageTable: Send + Sync {
    /// Whether a resource is registered under the handle.
    fn contains(&self, handle: i32) -> bool;

    /// The decoded bitmap, `None` if absent or not decodable.
    fn bitmap(&self, handle: i32) -> Option<ImageRef>;
}

/// What the host needs to swap in a newly shown screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootView {
    pub screen: Handle,
    pub kind: WidgetKind,
    /// The screen's root content widget, if it has one.
    pub content: Option<Handle>,
}

/// Receives the new root whenever a screen is shown.
pub trait RootViewSink: Send + Sync {
    fn root_view_replaced(&self, root: RootView);
}

/// Font resolver that knows no fonts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFonts;

impl FontResolver for NoFonts {
    fn resolve_font(&self, _handle: i32) -> Option<FontSpec> {
        None
    }
}

/// Image table with no resources.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImages;

impl ImageTable for NoImages {
    fn contains(&self, _handle: i32) -> bool {
        false
    }

    fn bitmap(&self, _handle: i32) -> Option<ImageRef> {
        None
    }
}

/// Bundle of injected collaborators.
#[derive(Clone)]
pub struct Services {
    pub fonts: Arc<dyn FontResolver>,
    pub images: Arc<dyn ImageTable>,
    pub root_sink: Option<Arc<dyn RootViewSink>>,
}

impl Services {
    /// Services with no fonts, no images and no root sink.
    pub fn new() -> Self {
        Self {
            fonts: Arc::new(NoFonts),
            images: Arc::new(NoImages),
            root_sink: None,
        }
    }

    pub fn with_fonts(mut self, fonts: Arc<dyn FontResolver>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_images(mut self, images: Arc<dyn ImageTable>) -> Self {
        self.images = images;
        self
    }

    pub fn with_root_sink(mut self, sink: Arc<dyn RootViewSink>) -> Self {
        self.root_sink = Some(sink);
        self
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("root_sink", &self.root_sink.is_some())
            .finish_non_exhaustive()
    }
}
