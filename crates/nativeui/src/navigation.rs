//! Current-screen tracking, stack navigation and back handling.
//!
//! The navigator stores a weak pointer to the screen last shown or pushed to.
//! Reading the current screen drills through stack and tab screens to the
//! deepest visible screen; a pointer whose widget was destroyed reads as
//! "no current screen".

use crate::error::{WidgetError, WidgetResult};
use crate::event::{WidgetEvent, WidgetEventBuffer};
use crate::handle::Handle;
use crate::services::{RootView, RootViewSink};
use crate::tree::WidgetTree;
use crate::widget::Widget;

/// Follow stack tops and active tabs down from `handle`.
///
/// An empty stack or tab screen resolves to itself.
pub fn resolve_screen(tree: &WidgetTree, handle: Handle) -> Handle {
    let mut current = handle;
    while let Ok(widget) = tree.get(current) {
        match visible_child(widget) {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// The screen a stack or tab screen currently displays.
fn visible_child(widget: &Widget) -> Option<Handle> {
    if widget.stack().is_some() {
        widget.stack_top()
    } else if widget.tabs().is_some() {
        widget.active_tab()
    } else {
        None
    }
}

/// Weak current-screen pointer plus the navigation operations that move it.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Option<Handle>,
}

impl Navigator {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The widget last shown or pushed to, without drilling.
    pub fn shown(&self) -> Option<Handle> {
        self.current
    }

    /// The deepest visible screen, or `None` if nothing live was shown.
    pub fn current_screen(&self, tree: &WidgetTree) -> Option<Handle> {
        let shown = self.current.filter(|&handle| tree.contains(handle))?;
        Some(resolve_screen(tree, shown))
    }

    /// Make a screen-family widget the current screen and hand its root to
    /// the host.
    pub fn show_screen(
        &mut self,
        tree: &WidgetTree,
        handle: Handle,
        sink: Option<&dyn RootViewSink>,
    ) -> WidgetResult<RootView> {
        let widget = tree.get(handle)?;
        if !widget.is_screen_family() {
            return Err(WidgetError::InvalidScreenType {
                handle,
                expected: "screen",
            });
        }

        let root = RootView {
            screen: handle,
            kind: widget.kind(),
            content: root_content(widget),
        };
        if let Some(sink) = sink {
            sink.root_view_replaced(root.clone());
        }
        self.current = Some(handle);
        tracing::debug!("Showing screen {}", handle);
        Ok(root)
    }

    /// Push a plain screen onto a stack screen and make the stack current.
    pub fn stack_push(
        &mut self,
        tree: &mut WidgetTree,
        stack: Handle,
        screen: Handle,
    ) -> WidgetResult<()> {
        let depth = {
            let stack_widget = tree.get(stack)?;
            if stack_widget.stack().is_none() {
                return Err(WidgetError::InvalidScreenType {
                    handle: stack,
                    expected: "StackScreen",
                });
            }
            stack_widget.child_count()
        };

        let screen_widget = tree.get(screen)?;
        if !screen_widget.kind().is_plain_screen() {
            return Err(WidgetError::InvalidScreenType {
                handle: screen,
                expected: "Screen",
            });
        }
        if let Some(parent) = screen_widget.parent() {
            return Err(WidgetError::AlreadyAttached {
                child: screen,
                parent,
            });
        }

        tree.attach(stack, screen, depth);
        self.current = Some(stack);
        tracing::debug!("Pushed screen {} onto stack {} (depth {})", screen, stack, depth + 1);
        Ok(())
    }

    /// Pop the top screen off a stack screen.
    ///
    /// Popping an empty stack does nothing and returns `Ok(None)`. The popped
    /// screen stays alive and detached.
    pub fn stack_pop(
        &mut self,
        tree: &mut WidgetTree,
        events: &mut WidgetEventBuffer,
        stack: Handle,
    ) -> WidgetResult<Option<Handle>> {
        let stack_widget = tree.get(stack)?;
        if stack_widget.stack().is_none() {
            return Err(WidgetError::InvalidScreenType {
                handle: stack,
                expected: "StackScreen",
            });
        }
        Ok(pop_top(tree, events, stack))
    }

    /// Offer a back press to the current screen.
    ///
    /// Returns whether a screen consumed it. An unconsumed press is queued as
    /// [`WidgetEvent::BackPressed`].
    pub fn handle_back(&mut self, tree: &mut WidgetTree, events: &mut WidgetEventBuffer) -> bool {
        if self.current.is_some_and(|handle| !tree.contains(handle)) {
            tracing::trace!("Current screen was destroyed, clearing pointer");
            self.current = None;
        }

        let consumed = match self.current {
            Some(shown) => back_on(tree, events, shown),
            None => false,
        };
        if !consumed {
            events.push(WidgetEvent::BackPressed {
                screen: self.current_screen(tree),
            });
        }
        consumed
    }

    /// Forget the current screen.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// What the host should display for a shown screen.
fn root_content(widget: &Widget) -> Option<Handle> {
    visible_child(widget).or_else(|| {
        if widget.is_container() && widget.tabs().is_none() {
            widget.children().first().copied()
        } else {
            None
        }
    })
}

fn pop_top(tree: &mut WidgetTree, events: &mut WidgetEventBuffer, stack: Handle) -> Option<Handle> {
    let top = tree.get(stack).ok()?.stack_top();
    let Some(popped) = top else {
        tracing::debug!("Stack {} is empty, nothing to pop", stack);
        return None;
    };

    tree.detach(popped);
    let revealed = tree.get(stack).ok().and_then(Widget::stack_top);
    events.push(WidgetEvent::StackScreenPopped {
        stack,
        popped,
        revealed,
    });
    tracing::debug!("Popped screen {} from stack {}", popped, stack);
    Some(popped)
}

/// Screen-specific back handling.
fn back_on(tree: &mut WidgetTree, events: &mut WidgetEventBuffer, handle: Handle) -> bool {
    let Ok(widget) = tree.get(handle) else {
        return false;
    };

    if let Some(stack) = widget.stack() {
        if stack.back_enabled && widget.child_count() > 1 {
            return pop_top(tree, events, handle).is_some();
        }
        return false;
    }
    if widget.tabs().is_some() {
        return match widget.active_tab() {
            Some(active) => back_on(tree, events, active),
            None => false,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultCode;

    fn setup() -> (WidgetTree, Navigator, WidgetEventBuffer) {
        let mut tree = WidgetTree::default();
        tree.register_native_root();
        (tree, Navigator::new(), WidgetEventBuffer::new())
    }

    #[test]
    fn test_push_pop_moves_current() {
        let (mut tree, mut nav, mut events) = setup();
        let stack = tree.create("StackScreen").unwrap();
        let a = tree.create("Screen").unwrap();
        let b = tree.create("Screen").unwrap();

        nav.stack_push(&mut tree, stack, a).unwrap();
        nav.stack_push(&mut tree, stack, b).unwrap();
        assert_eq!(nav.current_screen(&tree), Some(b));
        assert_eq!(tree.get(b).unwrap().parent(), Some(stack));

        assert_eq!(nav.stack_pop(&mut tree, &mut events, stack).unwrap(), Some(b));
        assert_eq!(nav.current_screen(&tree), Some(a));
        assert_eq!(tree.get(b).unwrap().parent(), None);
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![WidgetEvent::StackScreenPopped {
                stack,
                popped: b,
                revealed: Some(a)
            }]
        );
    }

    #[test]
    fn test_pop_empty_stack_is_noop() {
        let (mut tree, mut nav, mut events) = setup();
        let stack = tree.create("StackScreen").unwrap();
        assert_eq!(nav.stack_pop(&mut tree, &mut events, stack).unwrap(), None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_push_type_checks() {
        let (mut tree, mut nav, _) = setup();
        let stack = tree.create("StackScreen").unwrap();
        let screen = tree.create("Screen").unwrap();
        let tabs = tree.create("TabScreen").unwrap();
        let label = tree.create("Label").unwrap();

        assert_eq!(
            nav.stack_push(&mut tree, screen, stack).unwrap_err().code(),
            ResultCode::InvalidScreen
        );
        assert_eq!(
            nav.stack_push(&mut tree, stack, tabs).unwrap_err().code(),
            ResultCode::InvalidScreen
        );
        assert_eq!(
            nav.stack_push(&mut tree, stack, label).unwrap_err().code(),
            ResultCode::InvalidScreen
        );
        assert_eq!(
            nav.stack_push(&mut tree, stack, Handle::NATIVE_ROOT)
                .unwrap_err()
                .code(),
            ResultCode::InvalidScreen
        );
        assert_eq!(
            nav.stack_push(&mut tree, Handle::from_raw(77), screen)
                .unwrap_err()
                .code(),
            ResultCode::InvalidHandle
        );

        nav.stack_push(&mut tree, stack, screen).unwrap();
        let other = tree.create("StackScreen").unwrap();
        assert_eq!(
            nav.stack_push(&mut tree, other, screen).unwrap_err().code(),
            ResultCode::Error
        );
    }

    #[test]
    fn test_show_screen_requires_screen_family() {
        let (mut tree, mut nav, _) = setup();
        let label = tree.create("Label").unwrap();
        let screen = tree.create("Screen").unwrap();
        let content = tree.create("Layout").unwrap();
        tree.add_child(screen, content).unwrap();

        assert_eq!(
            nav.show_screen(&tree, label, None).unwrap_err().code(),
            ResultCode::InvalidScreen
        );
        let root = nav.show_screen(&tree, screen, None).unwrap();
        assert_eq!(root.content, Some(content));
        assert_eq!(nav.current_screen(&tree), Some(screen));

        nav.show_screen(&tree, Handle::NATIVE_ROOT, None).unwrap();
        assert_eq!(nav.current_screen(&tree), Some(Handle::NATIVE_ROOT));
    }

    #[test]
    fn test_current_screen_drills_through_tabs() {
        let (mut tree, mut nav, _) = setup();
        let tabs = tree.create("TabScreen").unwrap();
        let stack = tree.create("StackScreen").unwrap();
        let inner = tree.create("Screen").unwrap();
        tree.add_child(tabs, stack).unwrap();
        nav.stack_push(&mut tree, stack, inner).unwrap();

        nav.show_screen(&tree, tabs, None).unwrap();
        assert_eq!(nav.current_screen(&tree), Some(inner));
    }

    #[test]
    fn test_destroyed_current_reads_as_none() {
        let (mut tree, mut nav, mut events) = setup();
        let screen = tree.create("Screen").unwrap();
        nav.show_screen(&tree, screen, None).unwrap();
        tree.destroy(screen).unwrap();
        assert_eq!(nav.current_screen(&tree), None);

        assert!(!nav.handle_back(&mut tree, &mut events));
        assert_eq!(nav.shown(), None);
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![WidgetEvent::BackPressed { screen: None }]
        );
    }

    #[test]
    fn test_back_pops_until_root() {
        let (mut tree, mut nav, mut events) = setup();
        let stack = tree.create("StackScreen").unwrap();
        let a = tree.create("Screen").unwrap();
        let b = tree.create("Screen").unwrap();
        nav.stack_push(&mut tree, stack, a).unwrap();
        nav.stack_push(&mut tree, stack, b).unwrap();

        assert!(nav.handle_back(&mut tree, &mut events));
        assert_eq!(nav.current_screen(&tree), Some(a));
        assert!(!nav.handle_back(&mut tree, &mut events));

        let kinds: Vec<_> = events.drain().collect();
        assert!(matches!(kinds[0], WidgetEvent::StackScreenPopped { .. }));
        assert_eq!(kinds[1], WidgetEvent::BackPressed { screen: Some(a) });
    }

    #[test]
    fn test_back_disabled_stack_does_not_pop() {
        let (mut tree, mut nav, mut events) = setup();
        let stack = tree.create("StackScreen").unwrap();
        let a = tree.create("Screen").unwrap();
        let b = tree.create("Screen").unwrap();
        nav.stack_push(&mut tree, stack, a).unwrap();
        nav.stack_push(&mut tree, stack, b).unwrap();
        if let crate::widget::WidgetBody::StackScreen(_, state) = &mut tree.get_mut(stack).unwrap().body {
            state.back_enabled = false;
        }

        assert!(!nav.handle_back(&mut tree, &mut events));
        assert_eq!(nav.current_screen(&tree), Some(b));
    }
}
