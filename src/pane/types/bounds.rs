//! Pixel-space geometry for the pane tree.

/// Available space handed to the root of the tree
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Bounds of a pane in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneBounds {
    /// X position in pixels from left edge of the tab content area
    pub x: f32,
    /// Y position in pixels from top of the tab content area
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl PaneBounds {
    /// Create new bounds
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds anchored at the origin covering `size`
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }
}
