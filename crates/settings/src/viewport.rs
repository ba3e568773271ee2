use serde::{Deserialize, Serialize};

/// Host viewport passed along with every settings refresh.
///
/// Opaque to the format-resolution core; only the sizing step reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if this viewport fits inside `other` on both axes.
    pub fn fits_within(&self, other: &Viewport) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}
