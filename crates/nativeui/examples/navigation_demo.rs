//! Walks a small app through screens, tabs, a stack and a dialog, printing
//! what the host would see.
//!
//! Run with `RUST_LOG=nativeui=debug cargo run --example navigation_demo`.

use std::sync::Arc;

use nativeui::property::keys;
use nativeui::{NativeUi, NativeUiConfig, RootView, RootViewSink, Services, WidgetResult};

struct PrintSink;

impl RootViewSink for PrintSink {
    fn root_view_replaced(&self, root: RootView) {
        println!(
            "host: root view is now {:?} {} (content {:?})",
            root.kind, root.screen, root.content
        );
    }
}

fn main() -> WidgetResult<()> {
    nativeui_core::logging::init();

    let services = Services::new().with_root_sink(Arc::new(PrintSink));
    let mut ui = NativeUi::new(NativeUiConfig::default(), services);

    let tabs = ui.create_widget("TabScreen")?;
    let home = ui.create_widget("Screen")?;
    let inbox = ui.create_widget("StackScreen")?;
    ui.set_property(home, keys::TITLE, "Home")?;
    ui.set_property(inbox, keys::TITLE, "Inbox")?;
    ui.add_child(tabs, home)?;
    ui.add_child(tabs, inbox)?;

    let layout = ui.create_widget("Layout")?;
    let greeting = ui.create_widget("Label")?;
    ui.set_property(greeting, keys::TEXT, "Welcome back")?;
    ui.add_child(layout, greeting)?;
    ui.add_child(home, layout)?;

    let list = ui.create_widget("Screen")?;
    let message = ui.create_widget("Screen")?;
    ui.stack_push(inbox, list)?;
    ui.stack_push(inbox, message)?;

    ui.show_screen(tabs)?;
    println!("current screen: {:?}", ui.current_screen());

    ui.set_property(tabs, keys::CURRENT_TAB, "1")?;
    println!("after switching tabs: {:?}", ui.current_screen());

    let consumed = ui.handle_back();
    println!("back consumed: {}, current: {:?}", consumed, ui.current_screen());

    let dialog = ui.create_widget("Dialog")?;
    ui.set_property(dialog, keys::TITLE, "Sync finished")?;
    ui.dialog_show(dialog)?;

    // Rejected on purpose; the failure is logged.
    let _ = ui.add_child(layout, dialog);

    for event in ui.drain_events() {
        println!("event: {:?}", event);
    }

    ui.destroy_widget(tabs)?;
    println!("widgets left: {}", ui.widget_count());
    Ok(())
}
