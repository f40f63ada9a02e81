//! Widget events queued for the host.

use crate::handle::Handle;

/// Events emitted by navigation, dialogs, menus and radio groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A screen was popped off a stack screen.
    StackScreenPopped {
        stack: Handle,
        popped: Handle,
        /// The new top of the stack, if any screen is left.
        revealed: Option<Handle>,
    },

    /// A tab screen's active tab changed.
    TabChanged { tab_screen: Handle, index: usize },

    /// A dialog was shown.
    DialogShown { dialog: Handle },

    /// A dialog was hidden.
    DialogDismissed { dialog: Handle },

    /// A back press that no screen consumed.
    BackPressed { screen: Option<Handle> },

    /// An options menu item was selected.
    OptionsMenuItemSelected { screen: Handle, index: usize },

    /// A radio button became the checked member of its group.
    RadioButtonChecked { group: Handle, button: Handle },
}

impl WidgetEvent {
    /// The widget the event is about.
    pub fn source(&self) -> Option<Handle> {
        match self {
            WidgetEvent::StackScreenPopped { stack, .. } => Some(*stack),
            WidgetEvent::TabChanged { tab_screen, .. } => Some(*tab_screen),
            WidgetEvent::DialogShown { dialog } => Some(*dialog),
            WidgetEvent::DialogDismissed { dialog } => Some(*dialog),
            WidgetEvent::BackPressed { screen } => *screen,
            WidgetEvent::OptionsMenuItemSelected { screen, .. } => Some(*screen),
            WidgetEvent::RadioButtonChecked { group, .. } => Some(*group),
        }
    }
}

/// FIFO buffer of widget events, drained by the host.
///
/// There is no capacity limit; events accumulate until [`drain`](Self::drain)
/// or [`clear`](Self::clear) is called.
#[derive(Debug, Default)]
pub struct WidgetEventBuffer {
    events: Vec<WidgetEvent>,
}

impl WidgetEventBuffer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: WidgetEvent) {
        tracing::trace!("Queued {:?}", event);
        self.events.push(event);
    }

    /// Drain all events in the order they were queued.
    pub fn drain(&mut self) -> impl Iterator<Item = WidgetEvent> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let mut buffer = WidgetEventBuffer::new();
        let dialog = Handle::from_raw(3);
        buffer.push(WidgetEvent::DialogShown { dialog });
        buffer.push(WidgetEvent::DialogDismissed { dialog });
        assert_eq!(buffer.len(), 2);

        let drained: Vec<_> = buffer.drain().collect();
        assert_eq!(
            drained,
            vec![
                WidgetEvent::DialogShown { dialog },
                WidgetEvent::DialogDismissed { dialog }
            ]
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_event_source() {
        let event = WidgetEvent::BackPressed { screen: None };
        assert_eq!(event.source(), None);
        let event = WidgetEvent::TabChanged {
            tab_screen: Handle::from_raw(4),
            index: 1,
        };
        assert_eq!(event.source(), Some(Handle::from_raw(4)));
    }
}
