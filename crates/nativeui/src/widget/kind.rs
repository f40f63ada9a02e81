//! The closed set of widget kinds and their capability flags.

use bitflags::bitflags;

bitflags! {
    /// What a widget kind can do, queried instead of testing concrete types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        /// Holds an ordered child sequence filled through insert/add.
        const CONTAINER     = 1 << 0;
        /// Accepts at most one child (a screen's root content).
        const SINGLE_CHILD  = 1 << 1;
        /// Top-level overlay shown with dialog show/hide.
        const DIALOG        = 1 << 2;
        /// Can be shown as the current screen.
        const SCREEN        = 1 << 3;
        /// Navigation stack of screens.
        const STACK         = 1 << 4;
        /// Tabbed set of screens.
        const TABS          = 1 << 5;
        /// Owns radio buttons.
        const RADIO_GROUP   = 1 << 6;
        /// Attaches only to radio groups.
        const RADIO_BUTTON  = 1 << 7;
        /// Displays text and accepts a font.
        const TEXT          = 1 << 8;
        /// Displays an image from the image table.
        const IMAGE         = 1 << 9;
        /// The host's own root screen.
        const NATIVE_ROOT   = 1 << 10;
    }
}

/// Every widget variant the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    NativeRoot,
    VerticalLayout,
    HorizontalLayout,
    RelativeLayout,
    ListView,
    Label,
    Button,
    EditBox,
    Image,
    ImageButton,
    CheckBox,
    Slider,
    ProgressBar,
    ListViewItem,
    Screen,
    StackScreen,
    TabScreen,
    Dialog,
    RadioGroup,
    RadioButton,
}

impl WidgetKind {
    /// Kinds the host may create by name.
    pub const CREATABLE: [WidgetKind; 19] = [
        WidgetKind::VerticalLayout,
        WidgetKind::HorizontalLayout,
        WidgetKind::RelativeLayout,
        WidgetKind::ListView,
        WidgetKind::Label,
        WidgetKind::Button,
        WidgetKind::EditBox,
        WidgetKind::Image,
        WidgetKind::ImageButton,
        WidgetKind::CheckBox,
        WidgetKind::Slider,
        WidgetKind::ProgressBar,
        WidgetKind::ListViewItem,
        WidgetKind::Screen,
        WidgetKind::StackScreen,
        WidgetKind::TabScreen,
        WidgetKind::Dialog,
        WidgetKind::RadioGroup,
        WidgetKind::RadioButton,
    ];

    /// The host-facing type name.
    pub const fn type_name(self) -> &'static str {
        match self {
            WidgetKind::NativeRoot => "NativeRoot",
            WidgetKind::VerticalLayout => "VerticalLayout",
            WidgetKind::HorizontalLayout => "HorizontalLayout",
            WidgetKind::RelativeLayout => "RelativeLayout",
            WidgetKind::ListView => "ListView",
            WidgetKind::Label => "Label",
            WidgetKind::Button => "Button",
            WidgetKind::EditBox => "EditBox",
            WidgetKind::Image => "Image",
            WidgetKind::ImageButton => "ImageButton",
            WidgetKind::CheckBox => "CheckBox",
            WidgetKind::Slider => "Slider",
            WidgetKind::ProgressBar => "ProgressBar",
            WidgetKind::ListViewItem => "ListViewItem",
            WidgetKind::Screen => "Screen",
            WidgetKind::StackScreen => "StackScreen",
            WidgetKind::TabScreen => "TabScreen",
            WidgetKind::Dialog => "Dialog",
            WidgetKind::RadioGroup => "RadioGroup",
            WidgetKind::RadioButton => "RadioButton",
        }
    }

    pub const fn capabilities(self) -> Capabilities {
        match self {
            WidgetKind::NativeRoot => Capabilities::SCREEN.union(Capabilities::NATIVE_ROOT),
            WidgetKind::VerticalLayout
            | WidgetKind::HorizontalLayout
            | WidgetKind::RelativeLayout
            | WidgetKind::ListView => Capabilities::CONTAINER,
            WidgetKind::Label | WidgetKind::Button | WidgetKind::EditBox | WidgetKind::ListViewItem => {
                Capabilities::TEXT
            }
            WidgetKind::Image => Capabilities::IMAGE,
            WidgetKind::ImageButton => Capabilities::IMAGE.union(Capabilities::TEXT),
            WidgetKind::CheckBox | WidgetKind::Slider | WidgetKind::ProgressBar => {
                Capabilities::empty()
            }
            WidgetKind::Screen => Capabilities::SCREEN
                .union(Capabilities::CONTAINER)
                .union(Capabilities::SINGLE_CHILD),
            WidgetKind::StackScreen => Capabilities::SCREEN.union(Capabilities::STACK),
            WidgetKind::TabScreen => Capabilities::SCREEN
                .union(Capabilities::TABS)
                .union(Capabilities::CONTAINER),
            WidgetKind::Dialog => Capabilities::DIALOG.union(Capabilities::CONTAINER),
            WidgetKind::RadioGroup => Capabilities::RADIO_GROUP,
            WidgetKind::RadioButton => Capabilities::RADIO_BUTTON,
        }
    }

    pub fn is_container(self) -> bool {
        self.capabilities().contains(Capabilities::CONTAINER)
    }

    pub fn is_dialog(self) -> bool {
        self.capabilities().contains(Capabilities::DIALOG)
    }

    /// Screens, stack screens, tab screens and the native root.
    pub fn is_screen_family(self) -> bool {
        self.capabilities().contains(Capabilities::SCREEN)
    }

    /// A plain `Screen`, the only kind a stack screen accepts.
    pub fn is_plain_screen(self) -> bool {
        self == WidgetKind::Screen
    }

    /// Screens that may be added as a tab.
    pub fn is_tab_page(self) -> bool {
        matches!(self, WidgetKind::Screen | WidgetKind::StackScreen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_queries() {
        assert!(WidgetKind::VerticalLayout.is_container());
        assert!(WidgetKind::Dialog.is_container());
        assert!(WidgetKind::Dialog.is_dialog());
        assert!(!WidgetKind::Label.is_container());
        assert!(WidgetKind::NativeRoot.is_screen_family());
        assert!(WidgetKind::StackScreen.is_screen_family());
        assert!(!WidgetKind::StackScreen.is_plain_screen());
        assert!(!WidgetKind::RadioGroup.is_container());
    }

    #[test]
    fn test_creatable_excludes_native_root() {
        assert!(!WidgetKind::CREATABLE.contains(&WidgetKind::NativeRoot));
        for kind in WidgetKind::CREATABLE {
            assert!(!kind.capabilities().contains(Capabilities::NATIVE_ROOT));
        }
    }
}
