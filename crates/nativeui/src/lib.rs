//! NativeUI - handle-addressed native widget tree
//!
//! This crate is the platform-neutral core behind a native widget API:
//! - Opaque integer handles for every widget, never reused
//! - Widget tree with single-parent and type-compatibility rules
//! - String-typed property protocol with per-kind tables
//! - Screen navigation (stack screens, tab screens, back handling)
//! - Dialogs, options menus and radio groups
//! - Stable integer result codes for hosts
//!
//! ## Quick Start
//!
//! ```rust
//! use nativeui::{NativeUi, property::keys};
//!
//! let mut ui = NativeUi::default();
//! let screen = ui.create_widget("Screen").unwrap();
//! let layout = ui.create_widget("Layout").unwrap();
//! let label = ui.create_widget("Label").unwrap();
//!
//! ui.add_child(layout, label).unwrap();
//! ui.add_child(screen, layout).unwrap();
//! ui.set_property(label, keys::TEXT, "Hello").unwrap();
//! ui.show_screen(screen).unwrap();
//!
//! assert_eq!(ui.current_screen(), Some(screen));
//! assert_eq!(ui.property(layout, keys::CHILD_COUNT).unwrap(), "1");
//! ```

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod handle;
pub mod menu;
pub mod navigation;
pub mod property;
pub mod services;
pub mod table;
pub mod tree;
pub mod widget;

pub use command::Commands;
pub use config::{NativeUiConfig, PlatformFeatures, ProfilingMode};
pub use engine::NativeUi;
pub use error::{ResultCode, WidgetError, WidgetResult};
pub use event::{WidgetEvent, WidgetEventBuffer};
pub use handle::Handle;
pub use menu::{MenuIcon, MenuItem};
pub use navigation::Navigator;
pub use property::{PropertyContext, PropertyError};
pub use services::{
    FontResolver, FontSpec, ImageRef, ImageTable, RootView, RootViewSink, Services,
};
pub use tree::WidgetTree;
pub use widget::{Widget, WidgetFactory, WidgetKind};
