//! Handle table mapping integer handles to live entries.
//!
//! Handles come from a monotonically increasing counter, so a released handle
//! is never handed out again and a stale handle can only ever miss.

use indexmap::IndexMap;
use nativeui_core::alloc::HashSet;

use crate::handle::Handle;

/// Handle → entry table with allocation. Entries record their own handle,
/// which makes the mapping two-way.
pub struct HandleTable<T> {
    entries: IndexMap<Handle, T>,
    next: Option<Handle>,
}

impl<T> HandleTable<T> {
    /// Create an empty table whose first allocation is [`Handle::FIRST_USER`].
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next: Some(Handle::FIRST_USER),
        }
    }

    /// Reserve a fresh handle.
    ///
    /// Returns `None` once the integer space is exhausted. A reserved handle
    /// that never gets registered is simply skipped.
    pub fn allocate(&mut self) -> Option<Handle> {
        let handle = self.next?;
        self.next = handle.next();
        Some(handle)
    }

    /// Store an entry under a handle, returning any entry it replaced.
    pub fn register(&mut self, handle: Handle, entry: T) -> Option<T> {
        self.entries.insert(handle, entry)
    }

    /// Look up a live entry.
    pub fn resolve(&self, handle: Handle) -> Option<&T> {
        self.entries.get(&handle)
    }

    /// Look up a live entry mutably.
    pub fn resolve_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.entries.get_mut(&handle)
    }

    /// Remove the mapping. Later lookups of `handle` miss.
    pub fn release(&mut self, handle: Handle) -> Option<T> {
        self.entries.shift_remove(&handle)
    }

    /// Remove every listed mapping in one pass over the table.
    ///
    /// Remaining entries keep their registration order. Returns how many
    /// entries were removed.
    pub fn release_all(&mut self, handles: &[Handle]) -> usize {
        let doomed: HashSet<Handle> = handles.iter().copied().collect();
        let before = self.entries.len();
        self.entries.retain(|handle, _| !doomed.contains(handle));
        before - self.entries.len()
    }

    /// Check whether a handle is live.
    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all live entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.entries.iter().map(|(handle, entry)| (*handle, entry))
    }
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
