//! Widget model.
//!
//! A widget is a tagged record: its handle, a [`WidgetKind`], the handle of
//! its parent (a weak link resolved through the handle table), its ordered
//! child handles and a variant body. Ownership flows parent → child through
//! the child sequence only.
//!
//! Which kinds may hold children is decided by [`Capabilities`], never by
//! matching on concrete kinds at call sites.

pub mod factory;
pub mod kind;
pub mod state;

pub use factory::{WidgetConstructor, WidgetFactory};
pub use kind::{Capabilities, WidgetKind};
pub use state::*;

use crate::handle::Handle;

/// Variant payload of a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetBody {
    /// Native root, relative layouts and list views.
    Plain,
    Layout(LayoutState),
    Text(TextState),
    EditBox(EditBoxState),
    Image(ImageState),
    Toggle(ToggleState),
    Range(RangeState),
    Screen(ScreenState),
    StackScreen(ScreenState, StackState),
    TabScreen(ScreenState, TabState),
    Dialog(DialogState),
    RadioGroup(RadioGroupState),
}

impl WidgetBody {
    /// Default body for a kind.
    pub fn for_kind(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::NativeRoot | WidgetKind::RelativeLayout | WidgetKind::ListView => {
                WidgetBody::Plain
            }
            WidgetKind::VerticalLayout | WidgetKind::HorizontalLayout => {
                WidgetBody::Layout(LayoutState::default())
            }
            WidgetKind::Label | WidgetKind::Button | WidgetKind::ListViewItem => {
                WidgetBody::Text(TextState::default())
            }
            WidgetKind::EditBox => WidgetBody::EditBox(EditBoxState::default()),
            WidgetKind::Image => WidgetBody::Image(ImageState::default()),
            WidgetKind::ImageButton => WidgetBody::Image(ImageState {
                label: Some(TextState::default()),
                ..ImageState::default()
            }),
            WidgetKind::CheckBox | WidgetKind::RadioButton => {
                WidgetBody::Toggle(ToggleState::default())
            }
            WidgetKind::Slider | WidgetKind::ProgressBar => WidgetBody::Range(RangeState::default()),
            WidgetKind::Screen => WidgetBody::Screen(ScreenState::default()),
            WidgetKind::StackScreen => {
                WidgetBody::StackScreen(ScreenState::default(), StackState::default())
            }
            WidgetKind::TabScreen => {
                WidgetBody::TabScreen(ScreenState::default(), TabState::default())
            }
            WidgetKind::Dialog => WidgetBody::Dialog(DialogState::default()),
            WidgetKind::RadioGroup => WidgetBody::RadioGroup(RadioGroupState::default()),
        }
    }
}

/// A widget instance stored in the handle table.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    handle: Handle,
    kind: WidgetKind,
    parent: Option<Handle>,
    children: Vec<Handle>,
    pub common: CommonState,
    pub body: WidgetBody,
}

impl Widget {
    /// A default-configured, detached widget with no children.
    pub fn new(handle: Handle, kind: WidgetKind) -> Self {
        Self {
            handle,
            kind,
            parent: None,
            children: Vec::new(),
            common: CommonState::default(),
            body: WidgetBody::for_kind(kind),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    pub fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub fn children(&self) -> &[Handle] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn is_dialog(&self) -> bool {
        self.kind.is_dialog()
    }

    pub fn is_screen_family(&self) -> bool {
        self.kind.is_screen_family()
    }

    // Link maintenance is crate-private: only the tree keeps both directions
    // consistent.

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    pub(crate) fn insert_child_at(&mut self, index: usize, child: Handle) {
        self.children.insert(index, child);
    }

    /// Remove a child, returning the position it occupied.
    pub(crate) fn remove_child(&mut self, child: Handle) -> Option<usize> {
        let position = self.children.iter().position(|&c| c == child)?;
        self.children.remove(position);
        Some(position)
    }

    /// Text state of text-capable widgets (labels, buttons, edit boxes,
    /// list items, image buttons).
    pub fn text(&self) -> Option<&TextState> {
        match &self.body {
            WidgetBody::Text(text) => Some(text),
            WidgetBody::EditBox(edit) => Some(&edit.text),
            WidgetBody::Image(image) => image.label.as_ref(),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextState> {
        match &mut self.body {
            WidgetBody::Text(text) => Some(text),
            WidgetBody::EditBox(edit) => Some(&mut edit.text),
            WidgetBody::Image(image) => image.label.as_mut(),
            _ => None,
        }
    }

    /// Title/icon/menu state of the screen family (not the native root).
    pub fn screen(&self) -> Option<&ScreenState> {
        match &self.body {
            WidgetBody::Screen(screen)
            | WidgetBody::StackScreen(screen, _)
            | WidgetBody::TabScreen(screen, _) => Some(screen),
            _ => None,
        }
    }

    pub fn screen_mut(&mut self) -> Option<&mut ScreenState> {
        match &mut self.body {
            WidgetBody::Screen(screen)
            | WidgetBody::StackScreen(screen, _)
            | WidgetBody::TabScreen(screen, _) => Some(screen),
            _ => None,
        }
    }

    pub fn tabs(&self) -> Option<&TabState> {
        match &self.body {
            WidgetBody::TabScreen(_, tabs) => Some(tabs),
            _ => None,
        }
    }

    pub fn tabs_mut(&mut self) -> Option<&mut TabState> {
        match &mut self.body {
            WidgetBody::TabScreen(_, tabs) => Some(tabs),
            _ => None,
        }
    }

    pub fn stack(&self) -> Option<&StackState> {
        match &self.body {
            WidgetBody::StackScreen(_, stack) => Some(stack),
            _ => None,
        }
    }

    pub fn dialog(&self) -> Option<&DialogState> {
        match &self.body {
            WidgetBody::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut DialogState> {
        match &mut self.body {
            WidgetBody::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Option<&ToggleState> {
        match &self.body {
            WidgetBody::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }

    pub fn toggle_mut(&mut self) -> Option<&mut ToggleState> {
        match &mut self.body {
            WidgetBody::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }

    pub fn radio_group(&self) -> Option<&RadioGroupState> {
        match &self.body {
            WidgetBody::RadioGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn radio_group_mut(&mut self) -> Option<&mut RadioGroupState> {
        match &mut self.body {
            WidgetBody::RadioGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Top of a stack screen's navigation stack.
    pub fn stack_top(&self) -> Option<Handle> {
        self.stack().and(self.children.last().copied())
    }

    /// Active tab page of a tab screen.
    pub fn active_tab(&self) -> Option<Handle> {
        let index = self.tabs()?.active?;
        self.children.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_widget_is_detached() {
        let widget = Widget::new(Handle::from_raw(1), WidgetKind::Label);
        assert_eq!(widget.parent(), None);
        assert!(widget.children().is_empty());
        assert!(widget.text().is_some());
        assert!(widget.screen().is_none());
    }

    #[test]
    fn test_child_sequence_maintenance() {
        let mut layout = Widget::new(Handle::from_raw(1), WidgetKind::VerticalLayout);
        layout.insert_child_at(0, Handle::from_raw(2));
        layout.insert_child_at(1, Handle::from_raw(3));
        layout.insert_child_at(0, Handle::from_raw(4));
        assert_eq!(
            layout.children(),
            &[Handle::from_raw(4), Handle::from_raw(2), Handle::from_raw(3)]
        );

        assert_eq!(layout.remove_child(Handle::from_raw(2)), Some(1));
        assert_eq!(layout.remove_child(Handle::from_raw(2)), None);
        assert_eq!(layout.child_count(), 2);
    }

    #[test]
    fn test_image_button_has_text_and_image() {
        let button = Widget::new(Handle::from_raw(5), WidgetKind::ImageButton);
        assert!(button.text().is_some());
        assert!(matches!(button.body, WidgetBody::Image(_)));
    }

    #[test]
    fn test_stack_top_and_active_tab() {
        let mut stack = Widget::new(Handle::from_raw(1), WidgetKind::StackScreen);
        assert_eq!(stack.stack_top(), None);
        stack.insert_child_at(0, Handle::from_raw(2));
        stack.insert_child_at(1, Handle::from_raw(3));
        assert_eq!(stack.stack_top(), Some(Handle::from_raw(3)));

        let mut tabs = Widget::new(Handle::from_raw(4), WidgetKind::TabScreen);
        tabs.insert_child_at(0, Handle::from_raw(5));
        assert_eq!(tabs.active_tab(), None);
        tabs.tabs_mut().unwrap().on_tab_inserted(0);
        assert_eq!(tabs.active_tab(), Some(Handle::from_raw(5)));
    }
}
