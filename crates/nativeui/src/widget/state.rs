//! Per-variant widget state.

use crate::menu::MenuItem;
use crate::services::ImageRef;

/// Host constant for "fill the available space".
pub const FILL_AVAILABLE_SPACE: i32 = -1;
/// Host constant for "wrap the content".
pub const WRAP_CONTENT: i32 = -2;

/// Properties every widget carries.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonState {
    pub width: i32,
    pub height: i32,
    pub left: i32,
    pub top: i32,
    pub visible: bool,
    pub enabled: bool,
    /// ARGB.
    pub background_color: u32,
    pub alpha: f32,
}

impl Default for CommonState {
    fn default() -> Self {
        Self {
            width: WRAP_CONTENT,
            height: WRAP_CONTENT,
            left: 0,
            top: 0,
            visible: true,
            enabled: true,
            background_color: 0x0000_0000,
            alpha: 1.0,
        }
    }
}

/// Font applied through a font handle.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFont {
    pub handle: i32,
    pub typeface: String,
    pub size: f32,
}

/// Text, color and font of a text-capable widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TextState {
    pub text: String,
    /// ARGB.
    pub font_color: u32,
    pub font_size: f32,
    pub font: Option<AppliedFont>,
    /// 0 means unlimited.
    pub max_lines: u32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_color: 0xFF00_0000,
            font_size: 14.0,
            font: None,
            max_lines: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Text,
    Password,
}

impl EditMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(EditMode::Text),
            "password" => Some(EditMode::Password),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditMode::Text => "text",
            EditMode::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditBoxState {
    pub text: TextState,
    pub placeholder: String,
    pub mode: EditMode,
    /// 0 means unlimited.
    pub max_length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    #[default]
    None,
    ScaleXY,
    ScalePreserveAspect,
}

impl ScaleMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(ScaleMode::None),
            "scaleXY" => Some(ScaleMode::ScaleXY),
            "scalePreserveAspect" => Some(ScaleMode::ScalePreserveAspect),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleMode::None => "none",
            ScaleMode::ScaleXY => "scaleXY",
            ScaleMode::ScalePreserveAspect => "scalePreserveAspect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageState {
    pub image: Option<ImageRef>,
    pub scale_mode: ScaleMode,
    /// Present on image buttons.
    pub label: Option<TextState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub checked: bool,
}

/// Bounded integer value of sliders and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    pub max: i32,
    pub value: i32,
}

impl Default for RangeState {
    fn default() -> Self {
        Self { max: 100, value: 0 }
    }
}

impl RangeState {
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
        self.value = self.value.min(max);
    }

    /// Move the value by `delta`, clamped to `0..=max`.
    pub fn offset(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(0, self.max);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Child alignment of linear layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

/// Title, icon and options menu shared by the screen family.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    pub title: String,
    pub icon: Option<ImageRef>,
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackState {
    pub back_enabled: bool,
}

impl Default for StackState {
    fn default() -> Self {
        Self { back_enabled: true }
    }
}

/// Active tab index into the tab screen's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    pub active: Option<usize>,
}

impl TabState {
    /// Fix up the active index after the child at `removed` left a list that
    /// now has `remaining` entries.
    pub fn on_tab_removed(&mut self, removed: usize, remaining: usize) {
        self.active = match self.active {
            _ if remaining == 0 => None,
            Some(active) if removed < active => Some(active - 1),
            Some(active) => Some(active.min(remaining - 1)),
            None => None,
        };
    }

    /// Fix up the active index after a tab was inserted at `inserted`.
    pub fn on_tab_inserted(&mut self, inserted: usize) {
        self.active = match self.active {
            None => Some(0),
            Some(active) if inserted <= active => Some(active + 1),
            Some(active) => Some(active),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    pub title: String,
    pub shown: bool,
}

/// Currently checked member of a radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RadioGroupState {
    pub selected: Option<crate::handle::Handle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_clamps() {
        let mut range = RangeState { max: 10, value: 8 };
        range.set_max(5);
        assert_eq!(range.value, 5);
        range.offset(-20);
        assert_eq!(range.value, 0);
        range.offset(3);
        assert_eq!(range.value, 3);
    }

    #[test]
    fn test_tab_index_fixups() {
        let mut tabs = TabState::default();
        tabs.on_tab_inserted(0);
        assert_eq!(tabs.active, Some(0));

        tabs.on_tab_inserted(0);
        assert_eq!(tabs.active, Some(1));

        tabs.on_tab_inserted(2);
        assert_eq!(tabs.active, Some(1));

        tabs.on_tab_removed(0, 2);
        assert_eq!(tabs.active, Some(0));

        tabs.on_tab_removed(0, 1);
        assert_eq!(tabs.active, Some(0));

        tabs.on_tab_removed(0, 0);
        assert_eq!(tabs.active, None);
    }

    #[test]
    fn test_enum_names_round_trip() {
        for mode in [ScaleMode::None, ScaleMode::ScaleXY, ScaleMode::ScalePreserveAspect] {
            assert_eq!(ScaleMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(EditMode::parse("password"), Some(EditMode::Password));
        assert_eq!(HorizontalAlignment::parse("middle"), None);
    }
}
