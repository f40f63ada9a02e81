//! Integer result-code command surface.
//!
//! Hosts that speak plain integers (raw handles in, result codes out) go
//! through [`Commands`]. Non-negative returns are successes (a handle, a
//! length or an index); negative returns are [`ResultCode`] values.

use crate::engine::NativeUi;
use crate::error::{ResultCode, WidgetResult};
use crate::handle::Handle;

/// Borrowed command view over a [`NativeUi`].
pub struct Commands<'a> {
    ui: &'a mut NativeUi,
}

fn status(result: WidgetResult<()>) -> i32 {
    match result {
        Ok(()) => ResultCode::Ok.raw(),
        Err(err) => err.code().raw(),
    }
}

fn value_or_code(result: WidgetResult<usize>) -> i32 {
    match result {
        Ok(value) => i32::try_from(value).unwrap_or(i32::MAX),
        Err(err) => err.code().raw(),
    }
}

impl NativeUi {
    /// Integer command view of this engine.
    pub fn commands(&mut self) -> Commands<'_> {
        Commands { ui: self }
    }
}

impl Commands<'_> {
    /// Returns the new handle or an error code.
    pub fn create_widget(&mut self, type_name: &str) -> i32 {
        match self.ui.create_widget(type_name) {
            Ok(handle) => handle.raw(),
            Err(err) => err.code().raw(),
        }
    }

    pub fn destroy_widget(&mut self, handle: i32) -> i32 {
        status(self.ui.destroy_widget(Handle::from_raw(handle)))
    }

    pub fn add_child(&mut self, parent: i32, child: i32) -> i32 {
        status(
            self.ui
                .add_child(Handle::from_raw(parent), Handle::from_raw(child)),
        )
    }

    pub fn insert_child(&mut self, parent: i32, child: i32, index: i32) -> i32 {
        status(
            self.ui
                .insert_child(Handle::from_raw(parent), Handle::from_raw(child), index),
        )
    }

    pub fn remove_child(&mut self, child: i32) -> i32 {
        status(self.ui.remove_child(Handle::from_raw(child)))
    }

    pub fn set_property(&mut self, handle: i32, key: &str, value: &str) -> i32 {
        status(self.ui.set_property(Handle::from_raw(handle), key, value))
    }

    /// Returns the value length (terminator excluded) or an error code.
    pub fn get_property(&mut self, handle: i32, key: &str, buffer: &mut [u8]) -> i32 {
        value_or_code(self.ui.get_property(Handle::from_raw(handle), key, buffer))
    }

    pub fn show_screen(&mut self, handle: i32) -> i32 {
        status(self.ui.show_screen(Handle::from_raw(handle)).map(|_| ()))
    }

    pub fn stack_push(&mut self, stack: i32, screen: i32) -> i32 {
        status(
            self.ui
                .stack_push(Handle::from_raw(stack), Handle::from_raw(screen)),
        )
    }

    pub fn stack_pop(&mut self, stack: i32) -> i32 {
        status(self.ui.stack_pop(Handle::from_raw(stack)).map(|_| ()))
    }

    pub fn dialog_show(&mut self, dialog: i32) -> i32 {
        status(self.ui.dialog_show(Handle::from_raw(dialog)))
    }

    pub fn dialog_hide(&mut self, dialog: i32) -> i32 {
        status(self.ui.dialog_hide(Handle::from_raw(dialog)))
    }

    /// Returns the item index or an error code.
    pub fn add_options_menu_item(
        &mut self,
        screen: i32,
        title: &str,
        icon: i32,
        icon_mode: i32,
    ) -> i32 {
        value_or_code(self.ui.add_options_menu_item(
            Handle::from_raw(screen),
            title,
            icon,
            icon_mode,
        ))
    }

    pub fn handle_back(&mut self) {
        self.ui.handle_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_cross_the_boundary() {
        let mut ui = NativeUi::default();
        let mut commands = ui.commands();

        let layout = commands.create_widget("Layout");
        let label = commands.create_widget("Label");
        assert_eq!((layout, label), (1, 2));
        assert_eq!(commands.create_widget("Nope"), ResultCode::InvalidTypeName.raw());

        assert_eq!(commands.insert_child(layout, label, -1), 0);
        assert_eq!(commands.add_child(layout, layout), ResultCode::Error.raw());
        assert_eq!(commands.remove_child(99), ResultCode::InvalidHandle.raw());
        assert_eq!(commands.show_screen(layout), ResultCode::InvalidScreen.raw());

        let mut buffer = [0u8; 8];
        assert_eq!(commands.get_property(layout, "childCount", &mut buffer), 1);
        assert_eq!(&buffer[..2], b"1\0");
        assert_eq!(
            commands.set_property(label, "fontSize", "big"),
            ResultCode::InvalidPropertyValue.raw()
        );
        assert_eq!(
            commands.set_property(label, "sparkle", "1"),
            ResultCode::InvalidPropertyName.raw()
        );
    }
}
