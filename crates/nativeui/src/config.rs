//! Engine configuration.

use bitflags::bitflags;

bitflags! {
    /// Platform capabilities that some properties depend on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlatformFeatures: u32 {
        /// Per-widget alpha blending.
        const WIDGET_ALPHA       = 1 << 0;
        /// Predefined platform icons in options menus.
        const OPTIONS_MENU_ICONS = 1 << 1;
        /// The host exposes its own root screen under handle 0.
        const NATIVE_ROOT_SCREEN = 1 << 2;
    }
}

impl Default for PlatformFeatures {
    fn default() -> Self {
        PlatformFeatures::all()
    }
}

/// Whether engine operations record profiling scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// No scopes are collected.
    #[default]
    Off,
    /// Scopes are collected and can be viewed with puffin tooling.
    On,
}

/// Configuration for a [`NativeUi`](crate::NativeUi) instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeUiConfig {
    pub features: PlatformFeatures,
    /// Register the host's root screen under [`Handle::NATIVE_ROOT`](crate::Handle::NATIVE_ROOT).
    ///
    /// Ignored unless `features` contains `NATIVE_ROOT_SCREEN`.
    pub register_native_root: bool,
    pub profiling: ProfilingMode,
}

impl Default for NativeUiConfig {
    fn default() -> Self {
        Self {
            features: PlatformFeatures::default(),
            register_native_root: true,
            profiling: ProfilingMode::Off,
        }
    }
}

impl NativeUiConfig {
    pub fn with_features(mut self, features: PlatformFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn with_native_root(mut self, register: bool) -> Self {
        self.register_native_root = register;
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }

    /// Whether the native root screen should be registered at startup.
    pub fn wants_native_root(&self) -> bool {
        self.register_native_root && self.features.contains(PlatformFeatures::NATIVE_ROOT_SCREEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let config = NativeUiConfig::default();
        assert_eq!(config.features, PlatformFeatures::all());
        assert!(config.wants_native_root());
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_native_root_needs_feature() {
        let config = NativeUiConfig::default()
            .with_features(PlatformFeatures::WIDGET_ALPHA);
        assert!(!config.wants_native_root());

        let config = NativeUiConfig::default().with_native_root(false);
        assert!(!config.wants_native_root());
    }
}
