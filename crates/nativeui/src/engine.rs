//! The engine facade the host drives.
//!
//! [`NativeUi`] owns the widget tree, the navigator, the event queue and the
//! injected services. Every public operation runs to completion, logs a
//! diagnostic when it is rejected and returns a [`WidgetResult`]; the
//! integer result codes are produced by [`Commands`](crate::command::Commands).

use nativeui_core::profiling::{self, profile_function};

use crate::config::{NativeUiConfig, ProfilingMode};
use crate::error::{WidgetError, WidgetResult};
use crate::event::{WidgetEvent, WidgetEventBuffer};
use crate::handle::Handle;
use crate::menu::{self, MenuItem};
use crate::navigation::Navigator;
use crate::property::{self, convert, keys, PropertyContext};
use crate::services::{RootView, Services};
use crate::tree::WidgetTree;
use crate::widget::{AppliedFont, Widget, WidgetFactory, WidgetKind};

/// Log a rejected operation and pass the result through.
fn logged<T>(operation: &'static str, result: WidgetResult<T>) -> WidgetResult<T> {
    result.inspect_err(|err| {
        tracing::error!(code = err.code().raw(), "{} failed: {}", operation, err);
    })
}

/// Handle-addressed widget engine.
pub struct NativeUi {
    tree: WidgetTree,
    navigator: Navigator,
    events: WidgetEventBuffer,
    services: Services,
    config: NativeUiConfig,
}

impl NativeUi {
    /// Create an engine with the default widget factory.
    pub fn new(config: NativeUiConfig, services: Services) -> Self {
        Self::with_factory(config, services, WidgetFactory::with_defaults())
    }

    /// Create an engine with a custom widget factory.
    pub fn with_factory(
        config: NativeUiConfig,
        services: Services,
        factory: WidgetFactory,
    ) -> Self {
        if config.profiling == ProfilingMode::On {
            profiling::set_enabled(true);
        }

        let mut tree = WidgetTree::new(factory);
        if config.wants_native_root() {
            tree.register_native_root();
        }

        tracing::info!(
            features = ?config.features,
            native_root = config.wants_native_root(),
            "NativeUi initialized"
        );

        Self {
            tree,
            navigator: Navigator::new(),
            events: WidgetEventBuffer::new(),
            services,
            config,
        }
    }

    pub fn config(&self) -> &NativeUiConfig {
        &self.config
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Read access to the widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Register or replace widget constructors at runtime.
    pub fn factory_mut(&mut self) -> &mut WidgetFactory {
        self.tree.factory_mut()
    }

    // Tree mutation

    pub fn create_widget(&mut self, type_name: &str) -> WidgetResult<Handle> {
        logged("CreateWidget", self.tree.create(type_name))
    }

    /// Destroy a widget and everything below it.
    pub fn destroy_widget(&mut self, handle: Handle) -> WidgetResult<()> {
        let result = self.detaching(handle, |tree| tree.destroy(handle).map(|_| ()));
        logged("DestroyWidget", result)
    }

    pub fn add_child(&mut self, parent: Handle, child: Handle) -> WidgetResult<()> {
        logged("AddChild", self.tree.add_child(parent, child).map(|_| ()))
    }

    /// Insert at `index`, where `-1` appends.
    pub fn insert_child(&mut self, parent: Handle, child: Handle, index: i32) -> WidgetResult<()> {
        logged(
            "InsertChild",
            self.tree.insert_child(parent, child, index).map(|_| ()),
        )
    }

    pub fn remove_child(&mut self, child: Handle) -> WidgetResult<()> {
        let result = self.detaching(child, |tree| tree.remove_child(child).map(|_| ()));
        logged("RemoveChild", result)
    }

    /// Run an operation that unlinks `child`, queueing [`WidgetEvent::TabChanged`]
    /// when that moves its tab screen onto a different visible tab.
    fn detaching(
        &mut self,
        child: Handle,
        operation: impl FnOnce(&mut WidgetTree) -> WidgetResult<()>,
    ) -> WidgetResult<()> {
        let tab_screen = self
            .tree
            .get(child)
            .ok()
            .and_then(Widget::parent)
            .filter(|&parent| self.tree.get(parent).is_ok_and(|w| w.tabs().is_some()));
        let visible_before = tab_screen
            .and_then(|handle| self.tree.get(handle).ok())
            .and_then(Widget::active_tab);

        operation(&mut self.tree)?;

        if let Some(tab_screen) = tab_screen
            && let Ok(widget) = self.tree.get(tab_screen)
            && widget.active_tab() != visible_before
            && let Some(index) = widget.tabs().and_then(|tabs| tabs.active)
        {
            self.events.push(WidgetEvent::TabChanged { tab_screen, index });
        }
        Ok(())
    }

    // Properties

    /// Convert and assign a string property.
    pub fn set_property(&mut self, handle: Handle, key: &str, value: &str) -> WidgetResult<()> {
        profile_function!();
        let result = self.dispatch_set(handle, key, value);
        if result.is_ok() {
            tracing::debug!("Set '{}' = '{}' on widget {}", key, value, handle);
        }
        logged("SetProperty", result)
    }

    /// Read a property into `buffer` as a NUL-terminated string.
    ///
    /// Returns the string length without the terminator. If the value plus
    /// terminator does not fit, nothing is written.
    pub fn get_property(&self, handle: Handle, key: &str, buffer: &mut [u8]) -> WidgetResult<usize> {
        let result = self
            .dispatch_get(handle, key)
            .and_then(|value| write_terminated(&value, buffer));
        logged("GetProperty", result)
    }

    /// Read a property as an owned string.
    pub fn property(&self, handle: Handle, key: &str) -> WidgetResult<String> {
        logged("GetProperty", self.dispatch_get(handle, key))
    }

    fn dispatch_set(&mut self, handle: Handle, key: &str, value: &str) -> WidgetResult<()> {
        let kind = self.tree.get(handle)?.kind();

        if key == keys::FONT_HANDLE {
            return self.apply_font(handle, value);
        }
        match (kind, key) {
            (WidgetKind::RadioGroup, keys::RADIO_GROUP_ADD_VIEW) => {
                return self.radio_add(handle, value);
            }
            (WidgetKind::RadioGroup, keys::RADIO_GROUP_SELECTED) => {
                return self.radio_select(handle, value);
            }
            (WidgetKind::RadioButton, keys::CHECKED) => {
                return self.radio_checked(handle, value);
            }
            _ => {}
        }

        let ctx = PropertyContext {
            images: &*self.services.images,
            features: self.config.features,
        };
        let widget = self.tree.get_mut(handle)?;
        let active_before = widget.tabs().and_then(|tabs| tabs.active);
        property::set_property(widget, key, value, &ctx)
            .map_err(|err| WidgetError::from_property(handle, key, err))?;

        if let Some(tabs) = widget.tabs()
            && tabs.active != active_before
            && let Some(index) = tabs.active
        {
            self.events.push(WidgetEvent::TabChanged {
                tab_screen: handle,
                index,
            });
        }
        Ok(())
    }

    fn dispatch_get(&self, handle: Handle, key: &str) -> WidgetResult<String> {
        let widget = self.tree.get(handle)?;

        if key == keys::FONT_HANDLE {
            let text = widget.text().ok_or_else(|| WidgetError::InvalidPropertyName {
                handle,
                key: key.to_string(),
            })?;
            return Ok(text
                .font
                .as_ref()
                .map_or(Handle::NONE_RAW, |font| font.handle)
                .to_string());
        }
        if let Some(group) = widget.radio_group()
            && key == keys::RADIO_GROUP_SELECTED
        {
            return Ok(group
                .selected
                .map_or(Handle::NONE_RAW, Handle::raw)
                .to_string());
        }

        let ctx = PropertyContext {
            images: &*self.services.images,
            features: self.config.features,
        };
        property::get_property(widget, key, &ctx)
            .map_err(|err| WidgetError::from_property(handle, key, err))
    }

    /// The font is resolved before the widget is asked to take it, so an
    /// unknown font handle is a bad value on every widget kind.
    fn apply_font(&mut self, handle: Handle, value: &str) -> WidgetResult<()> {
        let key = keys::FONT_HANDLE;
        self.tree.get(handle)?;

        let font_handle =
            convert::parse_int(value).map_err(|err| WidgetError::from_property(handle, key, err))?;
        let spec = self.services.fonts.resolve_font(font_handle).ok_or_else(|| {
            WidgetError::InvalidPropertyValue {
                handle,
                key: key.to_string(),
                message: format!("no font with handle {}", font_handle),
            }
        })?;

        let text = self
            .tree
            .get_mut(handle)?
            .text_mut()
            .ok_or_else(|| WidgetError::InvalidPropertyName {
                handle,
                key: key.to_string(),
            })?;
        text.font_size = spec.size;
        text.font = Some(AppliedFont {
            handle: font_handle,
            typeface: spec.typeface,
            size: spec.size,
        });
        Ok(())
    }

    // Radio groups

    fn radio_add(&mut self, group: Handle, value: &str) -> WidgetResult<()> {
        let key = keys::RADIO_GROUP_ADD_VIEW;
        let invalid = |message: String| WidgetError::InvalidPropertyValue {
            handle: group,
            key: key.to_string(),
            message,
        };

        let button = convert::parse_handle(value)
            .map_err(|err| WidgetError::from_property(group, key, err))?;
        let button_widget = self
            .tree
            .get(button)
            .map_err(|_| invalid(format!("no widget with handle {}", button)))?;
        if button_widget.kind() != WidgetKind::RadioButton {
            return Err(invalid(format!("widget {} is not a radio button", button)));
        }
        if let Some(parent) = button_widget.parent() {
            return Err(invalid(format!(
                "radio button {} already belongs to {}",
                button, parent
            )));
        }
        let checked = button_widget.toggle().is_some_and(|toggle| toggle.checked);

        let position = self.tree.get(group)?.child_count();
        self.tree.attach(group, button, position);
        if checked {
            self.check_member(group, button);
        }
        tracing::debug!("Added radio button {} to group {}", button, group);
        Ok(())
    }

    fn radio_select(&mut self, group: Handle, value: &str) -> WidgetResult<()> {
        let key = keys::RADIO_GROUP_SELECTED;
        let raw = convert::parse_int(value).map_err(|err| WidgetError::from_property(group, key, err))?;
        if raw == Handle::NONE_RAW {
            self.clear_selection(group);
            return Ok(());
        }

        let button = Handle::from_raw(raw);
        if !self.tree.get(group)?.children().contains(&button) {
            return Err(WidgetError::InvalidPropertyValue {
                handle: group,
                key: key.to_string(),
                message: format!("widget {} is not a member of this group", button),
            });
        }
        self.check_member(group, button);
        Ok(())
    }

    /// `checked` on a radio button keeps its group's selection in sync.
    fn radio_checked(&mut self, button: Handle, value: &str) -> WidgetResult<()> {
        let checked = convert::parse_bool(value)
            .map_err(|err| WidgetError::from_property(button, keys::CHECKED, err))?;
        let group = self
            .tree
            .get(button)?
            .parent()
            .filter(|&parent| self.tree.get(parent).is_ok_and(|w| w.radio_group().is_some()));

        match (group, checked) {
            (Some(group), true) => self.check_member(group, button),
            (Some(group), false) => {
                let selected = self.tree.get(group)?.radio_group().and_then(|g| g.selected);
                if selected == Some(button) {
                    self.clear_selection(group);
                }
            }
            (None, _) => set_checked(self.tree.get_mut(button)?, checked),
        }
        Ok(())
    }

    /// Make `button` the only checked member of `group`.
    fn check_member(&mut self, group: Handle, button: Handle) {
        let previous = self
            .tree
            .get(group)
            .ok()
            .and_then(Widget::radio_group)
            .and_then(|g| g.selected);

        if let Some(previous) = previous.filter(|&previous| previous != button)
            && let Ok(widget) = self.tree.get_mut(previous)
        {
            set_checked(widget, false);
        }
        if let Ok(widget) = self.tree.get_mut(button) {
            set_checked(widget, true);
        }
        if let Ok(widget) = self.tree.get_mut(group)
            && let Some(state) = widget.radio_group_mut()
        {
            state.selected = Some(button);
        }
        if previous != Some(button) {
            self.events
                .push(WidgetEvent::RadioButtonChecked { group, button });
        }
    }

    fn clear_selection(&mut self, group: Handle) {
        let previous = self
            .tree
            .get_mut(group)
            .ok()
            .and_then(Widget::radio_group_mut)
            .and_then(|state| state.selected.take());
        if let Some(previous) = previous
            && let Ok(widget) = self.tree.get_mut(previous)
        {
            set_checked(widget, false);
        }
    }

    // Navigation

    /// Make a screen current and hand its root view to the host.
    pub fn show_screen(&mut self, handle: Handle) -> WidgetResult<RootView> {
        let sink = self.services.root_sink.as_deref();
        logged(
            "ShowScreen",
            self.navigator.show_screen(&self.tree, handle, sink),
        )
    }

    pub fn stack_push(&mut self, stack: Handle, screen: Handle) -> WidgetResult<()> {
        logged(
            "StackPush",
            self.navigator.stack_push(&mut self.tree, stack, screen),
        )
    }

    /// Pop the top screen of a stack. `Ok(None)` if the stack was empty.
    pub fn stack_pop(&mut self, stack: Handle) -> WidgetResult<Option<Handle>> {
        logged(
            "StackPop",
            self.navigator
                .stack_pop(&mut self.tree, &mut self.events, stack),
        )
    }

    /// The deepest visible screen.
    pub fn current_screen(&self) -> Option<Handle> {
        self.navigator.current_screen(&self.tree)
    }

    /// Offer a back press to the current screen. Returns whether it was
    /// consumed.
    pub fn handle_back(&mut self) -> bool {
        self.navigator.handle_back(&mut self.tree, &mut self.events)
    }

    // Dialogs

    pub fn dialog_show(&mut self, dialog: Handle) -> WidgetResult<()> {
        logged("DialogShow", self.set_dialog_shown(dialog, true))
    }

    pub fn dialog_hide(&mut self, dialog: Handle) -> WidgetResult<()> {
        logged("DialogHide", self.set_dialog_shown(dialog, false))
    }

    fn set_dialog_shown(&mut self, dialog: Handle, shown: bool) -> WidgetResult<()> {
        let state = self
            .tree
            .get_mut(dialog)?
            .dialog_mut()
            .ok_or(WidgetError::InvalidHandle {
                handle: dialog,
                reason: "widget is not a dialog",
            })?;
        if state.shown == shown {
            return Ok(());
        }
        state.shown = shown;
        self.events.push(if shown {
            WidgetEvent::DialogShown { dialog }
        } else {
            WidgetEvent::DialogDismissed { dialog }
        });
        Ok(())
    }

    // Options menus

    /// Append an options menu item to a screen. Returns the item's index.
    pub fn add_options_menu_item(
        &mut self,
        screen: Handle,
        title: &str,
        icon: i32,
        icon_mode: i32,
    ) -> WidgetResult<usize> {
        logged(
            "AddOptionsMenuItem",
            self.push_menu_item(screen, title, icon, icon_mode),
        )
    }

    fn push_menu_item(
        &mut self,
        screen: Handle,
        title: &str,
        icon: i32,
        icon_mode: i32,
    ) -> WidgetResult<usize> {
        if self.tree.get(screen)?.screen().is_none() {
            return Err(WidgetError::InvalidHandle {
                handle: screen,
                reason: "widget is not a screen",
            });
        }
        let icon = menu::resolve_icon(
            icon,
            icon_mode,
            self.config.features,
            &*self.services.images,
        )?;

        let menu = &mut self
            .tree
            .get_mut(screen)?
            .screen_mut()
            .ok_or(WidgetError::InvalidHandle {
                handle: screen,
                reason: "widget is not a screen",
            })?
            .menu;
        menu.push(MenuItem {
            title: title.to_string(),
            icon,
        });
        Ok(menu.len() - 1)
    }

    /// Report that the user picked an options menu item.
    pub fn select_options_menu_item(&mut self, screen: Handle, index: usize) -> WidgetResult<()> {
        let result = self.tree.get(screen).and_then(|widget| {
            let len = widget
                .screen()
                .ok_or(WidgetError::InvalidHandle {
                    handle: screen,
                    reason: "widget is not a screen",
                })?
                .menu
                .len();
            if index >= len {
                return Err(WidgetError::InvalidIndex {
                    index: i32::try_from(index).unwrap_or(i32::MAX),
                    len,
                });
            }
            Ok(())
        });
        if result.is_ok() {
            self.events
                .push(WidgetEvent::OptionsMenuItemSelected { screen, index });
        }
        logged("SelectOptionsMenuItem", result)
    }

    // Events

    /// Take every queued event, oldest first.
    ///
    /// The queue is unbounded and only this call empties it, so a host that
    /// ignores events should still drain them once per frame or input batch.
    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        self.events.drain().collect()
    }

    /// Events queued since the last [`drain_events`](Self::drain_events).
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // Introspection

    pub fn children(&self, handle: Handle) -> WidgetResult<&[Handle]> {
        self.tree.get(handle).map(Widget::children)
    }

    pub fn parent(&self, handle: Handle) -> WidgetResult<Option<Handle>> {
        self.tree.get(handle).map(Widget::parent)
    }

    pub fn type_name(&self, handle: Handle) -> WidgetResult<&'static str> {
        self.tree.get(handle).map(Widget::type_name)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.tree.contains(handle)
    }

    /// Live widgets, the native root included.
    pub fn widget_count(&self) -> usize {
        self.tree.len()
    }
}

impl Default for NativeUi {
    fn default() -> Self {
        Self::new(NativeUiConfig::default(), Services::default())
    }
}

fn set_checked(widget: &mut Widget, checked: bool) {
    if let Some(toggle) = widget.toggle_mut() {
        toggle.checked = checked;
    }
}

/// Copy `value` plus a NUL terminator into `buffer`.
fn write_terminated(value: &str, buffer: &mut [u8]) -> WidgetResult<usize> {
    let bytes = value.as_bytes();
    let required = bytes.len() + 1;
    if required > buffer.len() {
        return Err(WidgetError::BufferTooSmall {
            required,
            capacity: buffer.len(),
        });
    }
    buffer[..bytes.len()].copy_from_slice(bytes);
    buffer[bytes.len()] = 0;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultCode;

    #[test]
    fn test_write_terminated() {
        let mut buffer = [0xAAu8; 4];
        assert_eq!(write_terminated("abc", &mut buffer), Ok(3));
        assert_eq!(&buffer, b"abc\0");

        let mut small = [0xAAu8; 3];
        assert_eq!(
            write_terminated("abc", &mut small),
            Err(WidgetError::BufferTooSmall {
                required: 4,
                capacity: 3
            })
        );
        assert_eq!(small, [0xAA; 3]);
    }

    #[test]
    fn test_native_root_follows_config() {
        let ui = NativeUi::default();
        assert!(ui.contains(Handle::NATIVE_ROOT));
        assert_eq!(ui.widget_count(), 1);

        let ui = NativeUi::new(
            NativeUiConfig::default().with_native_root(false),
            Services::default(),
        );
        assert!(!ui.contains(Handle::NATIVE_ROOT));
        assert_eq!(ui.widget_count(), 0);
    }

    #[test]
    fn test_dialog_show_hide_events() {
        let mut ui = NativeUi::default();
        let dialog = ui.create_widget("Dialog").unwrap();
        ui.dialog_show(dialog).unwrap();
        ui.dialog_show(dialog).unwrap();
        assert_eq!(ui.property(dialog, keys::SHOWN).unwrap(), "true");
        ui.dialog_hide(dialog).unwrap();

        assert_eq!(
            ui.drain_events(),
            vec![
                WidgetEvent::DialogShown { dialog },
                WidgetEvent::DialogDismissed { dialog }
            ]
        );

        let label = ui.create_widget("Label").unwrap();
        assert_eq!(
            ui.dialog_show(label).unwrap_err().code(),
            ResultCode::InvalidHandle
        );
    }

    #[test]
    fn test_tab_change_is_queued_once() {
        let mut ui = NativeUi::default();
        let tabs = ui.create_widget("TabScreen").unwrap();
        let first = ui.create_widget("Screen").unwrap();
        let second = ui.create_widget("Screen").unwrap();
        ui.add_child(tabs, first).unwrap();
        ui.add_child(tabs, second).unwrap();

        ui.set_property(tabs, keys::CURRENT_TAB, "1").unwrap();
        ui.set_property(tabs, keys::CURRENT_TAB, "1").unwrap();
        assert_eq!(
            ui.drain_events(),
            vec![WidgetEvent::TabChanged {
                tab_screen: tabs,
                index: 1
            }]
        );
        assert_eq!(
            ui.set_property(tabs, keys::CURRENT_TAB, "2")
                .unwrap_err()
                .code(),
            ResultCode::InvalidPropertyValue
        );
    }

    #[test]
    fn test_losing_the_visible_tab_is_queued() {
        let mut ui = NativeUi::default();
        let tabs = ui.create_widget("TabScreen").unwrap();
        let first = ui.create_widget("Screen").unwrap();
        let second = ui.create_widget("Screen").unwrap();
        let third = ui.create_widget("Screen").unwrap();
        for screen in [first, second, third] {
            ui.add_child(tabs, screen).unwrap();
        }
        ui.set_property(tabs, keys::CURRENT_TAB, "1").unwrap();
        ui.drain_events();

        // Same screen stays visible, only its index moves.
        ui.remove_child(first).unwrap();
        assert_eq!(ui.pending_events(), 0);
        assert_eq!(ui.property(tabs, keys::CURRENT_TAB).unwrap(), "0");

        ui.destroy_widget(second).unwrap();
        assert_eq!(
            ui.drain_events(),
            vec![WidgetEvent::TabChanged {
                tab_screen: tabs,
                index: 0
            }]
        );
        assert_eq!(ui.tree().get(tabs).unwrap().active_tab(), Some(third));

        ui.remove_child(third).unwrap();
        assert_eq!(ui.pending_events(), 0);
    }

    #[test]
    fn test_menu_item_needs_real_screen() {
        let mut ui = NativeUi::default();
        let screen = ui.create_widget("Screen").unwrap();
        assert_eq!(
            ui.add_options_menu_item(screen, "Add", menu::ICON_ADD, menu::ICON_MODE_PREDEFINED),
            Ok(0)
        );
        assert_eq!(
            ui.add_options_menu_item(screen, "Plain", -1, menu::ICON_MODE_IMAGE),
            Ok(1)
        );
        assert_eq!(
            ui.add_options_menu_item(Handle::NATIVE_ROOT, "Root", -1, menu::ICON_MODE_IMAGE)
                .unwrap_err()
                .code(),
            ResultCode::InvalidHandle
        );

        ui.select_options_menu_item(screen, 1).unwrap();
        assert!(ui.select_options_menu_item(screen, 2).is_err());
        assert_eq!(
            ui.drain_events(),
            vec![WidgetEvent::OptionsMenuItemSelected { screen, index: 1 }]
        );
    }
}
