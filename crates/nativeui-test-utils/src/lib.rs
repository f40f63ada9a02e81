//! Test utilities for nativeui.
//!
//! Fake implementations of the collaborators the engine consumes:
//!
//! - [`FakeFonts`] - in-memory font table
//! - [`FakeImages`] - in-memory image table, with optional undecodable entries
//! - [`RecordingRootSink`] - records every root view handed to the host
//!
//! Fakes use `parking_lot::Mutex` so `&self` trait methods can record and so
//! they stay `Send + Sync` like the traits require.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use nativeui::{NativeUi, NativeUiConfig, Services};
//! use nativeui_test_utils::{FakeImages, RecordingRootSink};
//!
//! let sink = Arc::new(RecordingRootSink::new());
//! let images = Arc::new(FakeImages::new().with_image(1, 32, 32));
//! let services = Services::new().with_images(images).with_root_sink(sink.clone());
//! let mut ui = NativeUi::new(NativeUiConfig::default(), services);
//!
//! let screen = ui.create_widget("Screen").unwrap();
//! ui.show_screen(screen).unwrap();
//! assert_eq!(sink.last().map(|root| root.screen), Some(screen));
//! ```

mod fonts;
mod images;
mod sink;

pub use fonts::FakeFonts;
pub use images::FakeImages;
pub use sink::RecordingRootSink;

use std::sync::Arc;

use nativeui::{NativeUi, NativeUiConfig, Services};

/// Fakes wired into an engine, kept around for assertions.
pub struct TestHost {
    pub ui: NativeUi,
    pub fonts: Arc<FakeFonts>,
    pub images: Arc<FakeImages>,
    pub sink: Arc<RecordingRootSink>,
}

impl TestHost {
    /// Engine with default config and empty fakes.
    pub fn new() -> Self {
        Self::with_fakes(
            NativeUiConfig::default(),
            FakeFonts::new(),
            FakeImages::new(),
        )
    }

    /// Engine with the given config and pre-populated fakes.
    pub fn with_fakes(config: NativeUiConfig, fonts: FakeFonts, images: FakeImages) -> Self {
        let fonts = Arc::new(fonts);
        let images = Arc::new(images);
        let sink = Arc::new(RecordingRootSink::new());
        let services = Services::new()
            .with_fonts(fonts.clone())
            .with_images(images.clone())
            .with_root_sink(sink.clone());

        Self {
            ui: NativeUi::new(config, services),
            fonts,
            images,
            sink,
        }
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}
