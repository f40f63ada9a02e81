//! Widget tree: creation, destruction and parent/child links.
//!
//! Every widget lives in one [`HandleTable`]. Children are stored as ordered
//! handle sequences on the parent and each child records its parent handle;
//! the tree keeps both directions in step. A failed operation leaves every
//! widget exactly as it was.

use nativeui_core::profiling::profile_function;

use crate::error::{WidgetError, WidgetResult};
use crate::handle::Handle;
use crate::table::HandleTable;
use crate::widget::{Capabilities, Widget, WidgetFactory, WidgetKind};

/// Index value meaning "append at the end".
pub const APPEND: i32 = -1;

/// All live widgets plus the factory that builds new ones.
pub struct WidgetTree {
    widgets: HandleTable<Widget>,
    factory: WidgetFactory,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new(factory: WidgetFactory) -> Self {
        Self {
            widgets: HandleTable::new(),
            factory,
        }
    }

    /// Register the host's root screen under [`Handle::NATIVE_ROOT`].
    pub fn register_native_root(&mut self) -> Handle {
        let root = Widget::new(Handle::NATIVE_ROOT, WidgetKind::NativeRoot);
        self.widgets.register(Handle::NATIVE_ROOT, root);
        tracing::debug!("Registered native root screen");
        Handle::NATIVE_ROOT
    }

    pub fn factory(&self) -> &WidgetFactory {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut WidgetFactory {
        &mut self.factory
    }

    /// Resolve a handle.
    pub fn get(&self, handle: Handle) -> WidgetResult<&Widget> {
        self.widgets.resolve(handle).ok_or(WidgetError::InvalidHandle {
            handle,
            reason: "no such widget",
        })
    }

    /// Resolve a handle mutably.
    pub fn get_mut(&mut self, handle: Handle) -> WidgetResult<&mut Widget> {
        self.widgets
            .resolve_mut(handle)
            .ok_or(WidgetError::InvalidHandle {
                handle,
                reason: "no such widget",
            })
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.widgets.contains(handle)
    }

    /// Number of live widgets, the native root included.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Live widgets in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &Widget)> {
        self.widgets.iter()
    }

    /// Construct and register a widget by type name.
    pub fn create(&mut self, type_name: &str) -> WidgetResult<Handle> {
        profile_function!();

        if !self.factory.contains(type_name) {
            return Err(WidgetError::InvalidTypeName {
                type_name: type_name.to_string(),
            });
        }

        let handle = self
            .widgets
            .allocate()
            .ok_or_else(|| WidgetError::Construction {
                type_name: type_name.to_string(),
                message: "handle space exhausted".to_string(),
            })?;

        let widget = match self.factory.construct(type_name, handle) {
            Some(Ok(widget)) => widget,
            Some(Err(message)) => {
                return Err(WidgetError::Construction {
                    type_name: type_name.to_string(),
                    message,
                });
            }
            None => {
                return Err(WidgetError::InvalidTypeName {
                    type_name: type_name.to_string(),
                });
            }
        };

        if widget.handle() != handle {
            return Err(WidgetError::Construction {
                type_name: type_name.to_string(),
                message: format!(
                    "constructor built widget {} for handle {}",
                    widget.handle(),
                    handle
                ),
            });
        }

        tracing::debug!("Created {} widget {}", widget.type_name(), handle);
        self.widgets.register(handle, widget);
        Ok(handle)
    }

    /// Destroy a widget and its whole subtree.
    ///
    /// Runs in two phases: the widget is detached from its parent, then the
    /// subtree is released children first. Returns the released handles in
    /// release order.
    pub fn destroy(&mut self, handle: Handle) -> WidgetResult<Vec<Handle>> {
        profile_function!();

        let widget = self.get(handle)?;
        if widget.kind() == WidgetKind::NativeRoot {
            return Err(WidgetError::InvalidHandle {
                handle,
                reason: "the native root screen cannot be destroyed",
            });
        }

        self.detach(handle);

        let released = self.subtree_post_order(handle);
        if let [single] = released.as_slice() {
            self.widgets.release(*single);
        } else {
            self.widgets.release_all(&released);
        }

        tracing::debug!("Destroyed widget {} ({} handles released)", handle, released.len());
        Ok(released)
    }

    /// Splice `child` into `parent`'s children at `index` ([`APPEND`] appends).
    ///
    /// Returns the position the child ended up at.
    pub fn insert_child(&mut self, parent: Handle, child: Handle, index: i32) -> WidgetResult<usize> {
        profile_function!();

        if parent == child {
            return Err(WidgetError::SameParentAndChild { handle: child });
        }

        let child_widget = self.get(child)?;
        let child_kind = child_widget.kind();
        let child_parent = child_widget.parent();
        let parent_widget = self.get(parent)?;

        if let Some(existing) = child_parent {
            return Err(WidgetError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        if index < APPEND {
            return Err(WidgetError::InvalidIndex {
                index,
                len: parent_widget.child_count(),
            });
        }
        if child_kind.is_dialog() {
            return Err(WidgetError::CannotInsertDialog { dialog: child });
        }
        if child_kind == WidgetKind::RadioButton {
            return Err(WidgetError::InvalidHandle {
                handle: child,
                reason: "radio buttons are added to radio groups through 'addview'",
            });
        }
        if child_kind == WidgetKind::NativeRoot {
            return Err(WidgetError::InvalidHandle {
                handle: child,
                reason: "the native root screen cannot be a child",
            });
        }

        check_parent_accepts(parent_widget, child_kind)?;

        let len = parent_widget.child_count();
        let position = if index == APPEND {
            len
        } else {
            // index >= 0 here
            index as usize
        };
        if position > len {
            return Err(WidgetError::InvalidIndex { index, len });
        }

        if self.is_ancestor(child, parent) {
            return Err(WidgetError::CyclicInsert { parent, child });
        }

        self.attach(parent, child, position);
        tracing::debug!("Inserted widget {} into {} at {}", child, parent, position);
        Ok(position)
    }

    /// Append `child` to `parent`.
    pub fn add_child(&mut self, parent: Handle, child: Handle) -> WidgetResult<usize> {
        self.insert_child(parent, child, APPEND)
    }

    /// Detach a child from its parent without destroying it.
    ///
    /// Returns the former parent.
    pub fn remove_child(&mut self, child: Handle) -> WidgetResult<Handle> {
        let parent = self.get(child)?.parent().ok_or(WidgetError::InvalidHandle {
            handle: child,
            reason: "widget has no parent",
        })?;

        self.detach(child);
        tracing::debug!("Removed widget {} from {}", child, parent);
        Ok(parent)
    }

    /// Whether `ancestor` is `node` or appears on `node`'s parent chain.
    pub fn is_ancestor(&self, ancestor: Handle, node: Handle) -> bool {
        let mut current = Some(node);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.widgets.resolve(handle).and_then(Widget::parent);
        }
        false
    }

    /// Handles of `root`'s subtree, children before their parent.
    pub fn subtree_post_order(&self, root: Handle) -> Vec<Handle> {
        let mut order = Vec::new();
        // (handle, children already pushed)
        let mut stack = vec![(root, false)];
        while let Some((handle, expanded)) = stack.pop() {
            if expanded {
                order.push(handle);
                continue;
            }
            stack.push((handle, true));
            if let Some(widget) = self.widgets.resolve(handle) {
                for &child in widget.children().iter().rev() {
                    stack.push((child, false));
                }
            }
        }
        order
    }

    /// Link a validated, detached child into `parent` at `position`.
    pub(crate) fn attach(&mut self, parent: Handle, child: Handle, position: usize) {
        if let Some(parent_widget) = self.widgets.resolve_mut(parent) {
            parent_widget.insert_child_at(position, child);
            if let Some(tabs) = parent_widget.tabs_mut() {
                tabs.on_tab_inserted(position);
            }
        }
        if let Some(child_widget) = self.widgets.resolve_mut(child) {
            child_widget.set_parent(Some(parent));
        }
    }

    /// Unlink a widget from its parent, fixing up tab and radio state.
    ///
    /// Returns the former parent and the position the widget occupied, or
    /// `None` if it had no parent.
    pub(crate) fn detach(&mut self, child: Handle) -> Option<(Handle, usize)> {
        let parent = self.widgets.resolve(child)?.parent()?;

        let parent_widget = self.widgets.resolve_mut(parent)?;
        let position = parent_widget.remove_child(child)?;
        let remaining = parent_widget.child_count();
        if let Some(tabs) = parent_widget.tabs_mut() {
            tabs.on_tab_removed(position, remaining);
        }
        let mut uncheck = false;
        if let Some(group) = parent_widget.radio_group_mut() {
            if group.selected == Some(child) {
                group.selected = None;
            }
            uncheck = true;
        }

        if let Some(child_widget) = self.widgets.resolve_mut(child) {
            child_widget.set_parent(None);
            if uncheck && let Some(toggle) = child_widget.toggle_mut() {
                toggle.checked = false;
            }
        }
        Some((parent, position))
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new(WidgetFactory::with_defaults())
    }
}

/// Check that a parent's kind can take a child of `child_kind` through
/// insert/add.
fn check_parent_accepts(parent: &Widget, child_kind: WidgetKind) -> WidgetResult<()> {
    let handle = parent.handle();
    let caps = parent.capabilities();

    let rejection = if caps.contains(Capabilities::STACK) {
        Some("stack screens receive screens through stack push")
    } else if caps.contains(Capabilities::RADIO_GROUP) {
        Some("radio groups receive buttons through 'addview'")
    } else if !caps.contains(Capabilities::CONTAINER) {
        Some("widget cannot hold children")
    } else if caps.contains(Capabilities::TABS) {
        (!child_kind.is_tab_page()).then_some("tab screens only hold screens and stack screens")
    } else if child_kind.is_screen_family() {
        Some("screens can only be tabs or stack entries")
    } else if caps.contains(Capabilities::SINGLE_CHILD) && parent.child_count() > 0 {
        Some("screen already has a root widget")
    } else {
        None
    };

    match rejection {
        Some(reason) => Err(WidgetError::InvalidParentType {
            parent: handle,
            reason,
        }),
        None => Ok(()),
    }
}
