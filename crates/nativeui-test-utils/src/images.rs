use nativeui::{ImageRef, ImageTable};

/// Image table keyed by host resource handle.
#[derive(Debug, Default, Clone)]
pub struct FakeImages {
    images: Vec<ImageRef>,
    /// Registered but failing to decode.
    broken: Vec<i32>,
}

impl FakeImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decodable image.
    pub fn with_image(mut self, handle: i32, width: u32, height: u32) -> Self {
        self.images.push(ImageRef {
            handle,
            width,
            height,
        });
        self
    }

    /// Register a resource that exists but cannot be decoded.
    pub fn with_broken(mut self, handle: i32) -> Self {
        self.broken.push(handle);
        self
    }
}

impl ImageTable for FakeImages {
    fn contains(&self, handle: i32) -> bool {
        self.broken.contains(&handle) || self.images.iter().any(|image| image.handle == handle)
    }

    fn bitmap(&self, handle: i32) -> Option<ImageRef> {
        self.images
            .iter()
            .find(|image| image.handle == handle)
            .cloned()
    }
}
