/// Pixel dimensions of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A resolved mount point inside the rendering environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub id: String,
    pub viewport: Viewport,
}

impl RenderTarget {
    #[must_use]
    pub fn new(id: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            id: id.into(),
            viewport,
        }
    }
}
