use parking_lot::Mutex;

use nativeui::{RootView, RootViewSink};

/// Root view sink that keeps every root it receives.
#[derive(Debug, Default)]
pub struct RecordingRootSink {
    roots: Mutex<Vec<RootView>>,
}

impl RecordingRootSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every root received, oldest first.
    pub fn roots(&self) -> Vec<RootView> {
        self.roots.lock().clone()
    }

    /// The most recent root.
    pub fn last(&self) -> Option<RootView> {
        self.roots.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.roots.lock().len()
    }

    pub fn clear(&self) {
        self.roots.lock().clear();
    }
}

impl RootViewSink for RecordingRootSink {
    fn root_view_replaced(&self, root: RootView) {
        self.roots.lock().push(root);
    }
}
