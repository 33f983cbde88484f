//! Scalar helpers shared by the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Step a tick countdown toward zero by one, never underflowing.
#[must_use]
pub fn cool_down(ticks: u32) -> u32 {
    ticks.saturating_sub(1)
}

/// Clamp `x` into `[minimum, maximum]`. When the range is empty the minimum
/// wins, so an actor larger than the viewport pins to its top-left corner.
#[must_use]
pub fn min_max(x: f32, minimum: f32, maximum: f32) -> f32 {
    x.min(maximum).max(minimum)
}

/// Angle in degrees of `point` around `center`, in screen coordinates.
///
/// The result is the raw `atan2` angle in (−180, 180]; callers that want a
/// compass angle negate it, because screen y grows downward.
#[must_use]
pub fn degree_of_points(point: Vec2, center: Vec2) -> f32 {
    let d = point - center;
    d.y.atan2(d.x).to_degrees()
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[must_use]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns `true` if the two rectangles share at least one pixel.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !((self.x + self.w - 1.0) < other.x
            || (other.x + other.w - 1.0) < self.x
            || (self.y + self.h - 1.0) < other.y
            || (other.y + other.h - 1.0) < self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cool_down_floors_at_zero() {
        assert_eq!(cool_down(3), 2);
        assert_eq!(cool_down(1), 0);
        assert_eq!(cool_down(0), 0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(5.0, 0.0, 10.0), 5.0);
        assert_eq!(min_max(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(min_max(12.0, 0.0, 10.0), 10.0);
        assert_eq!(min_max(5.0, 8.0, 2.0), 8.0);
    }

    #[test]
    fn test_degree_of_points() {
        let center = Vec2::new(50.0, 50.0);
        assert!((degree_of_points(Vec2::new(100.0, 50.0), center)).abs() < 1e-4);
        // Screen-down is +90 before negation.
        assert!((degree_of_points(Vec2::new(50.0, 100.0), center) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
