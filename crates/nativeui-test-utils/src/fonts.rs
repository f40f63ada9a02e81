use parking_lot::Mutex;

use nativeui::{FontResolver, FontSpec};

/// Font table keyed by host font handle.
///
/// Records every lookup so tests can check the engine consulted it.
#[derive(Debug, Default)]
pub struct FakeFonts {
    fonts: Vec<(i32, FontSpec)>,
    lookups: Mutex<Vec<i32>>,
}

impl FakeFonts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font under `handle`.
    pub fn with_font(mut self, handle: i32, typeface: &str, size: f32) -> Self {
        self.fonts.push((
            handle,
            FontSpec {
                typeface: typeface.to_string(),
                size,
            },
        ));
        self
    }

    /// Handles looked up so far, oldest first.
    pub fn lookups(&self) -> Vec<i32> {
        self.lookups.lock().clone()
    }
}

impl FontResolver for FakeFonts {
    fn resolve_font(&self, handle: i32) -> Option<FontSpec> {
        self.lookups.lock().push(handle);
        self.fonts
            .iter()
            .find(|(registered, _)| *registered == handle)
            .map(|(_, spec)| spec.clone())
    }
}
