//! Playfield bounds.

use serde::{Deserialize, Serialize};

/// Height the base pixel sizes are authored for.
pub const BASE_HEIGHT: f32 = 360.0;

/// Width the base pixel sizes are authored for.
pub const BASE_WIDTH: f32 = 640.0;

/// The visible playfield in screen pixels, and the scale from authored
/// (base) pixels to screen pixels.
///
/// The world owns one viewport and hands it to actors every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub ratio: f32,
}

impl Viewport {
    /// Create a viewport of the given screen size. The ratio follows the height.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ratio: height / BASE_HEIGHT,
        }
    }

    /// Convert a base-pixel length to screen pixels.
    #[must_use]
    pub fn scale(&self, pixels: f32) -> f32 {
        pixels * self.ratio
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(BASE_WIDTH, BASE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unscaled() {
        let v = Viewport::default();
        assert_eq!(v.ratio, 1.0);
        assert_eq!(v.scale(30.0), 30.0);
    }

    #[test]
    fn test_ratio_follows_height() {
        let v = Viewport::new(1280.0, 720.0);
        assert_eq!(v.ratio, 2.0);
        assert_eq!(v.scale(36.0), 72.0);
    }
}
