//! Ellipse descriptors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse sampled at a single angle.
///
/// `angle` is in radians and already in screen orientation (y grows
/// downward), so callers negate compass angles before storing them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Horizontal radius.
    pub width: f32,
    /// Vertical radius.
    pub height: f32,
    /// Sampling angle in radians.
    pub angle: f32,
}

impl Ellipse {
    /// Sentinel used while no ellipse has been computed.
    pub const UNSET: Self = Self {
        width: -1.0,
        height: -1.0,
        angle: -1.0,
    };

    /// Create a new ellipse descriptor.
    #[must_use]
    pub fn new(width: f32, height: f32, angle: f32) -> Self {
        Self {
            width,
            height,
            angle,
        }
    }

    /// Returns the point on this ellipse at [`Ellipse::angle`] when centred on `center`.
    #[must_use]
    pub fn point_at(&self, center: Vec2) -> Vec2 {
        center + Vec2::new(self.width * self.angle.cos(), self.height * self.angle.sin())
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::UNSET
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_point_at_zero_angle_is_on_major_axis() {
        let e = Ellipse::new(120.0, 30.0, 0.0);
        let p = e.point_at(Vec2::new(10.0, 10.0));
        assert!((p - Vec2::new(130.0, 10.0)).length() < EPS);
    }

    #[test]
    fn test_point_at_screen_up() {
        // Compass UP (90°) negated for screen space.
        let e = Ellipse::new(120.0, 30.0, -FRAC_PI_2);
        let p = e.point_at(Vec2::new(0.0, 100.0));
        assert!((p - Vec2::new(0.0, 70.0)).length() < EPS);
    }
}
