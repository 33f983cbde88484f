//! Tapered diagonal speed.
//!
//! An actor steered at an arbitrary angle moves with per-axis speeds
//! interpolated between the two compass directions that bracket the angle.

use brawl_math::Vec2;
use serde::{Deserialize, Serialize};

use crate::compass::{DEGREES_PER_SLICE, Direction};

/// Per-axis walking speed of an actor, in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    /// Horizontal speed.
    pub x: f32,
    /// Vertical speed.
    pub y: f32,
    /// Multiplier applied to both axes while running.
    pub run_multiplier: f32,
}

impl Speed {
    /// Create a walking speed with the default run multiplier.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self {
            x: 5.0,
            y: 5.0,
            run_multiplier: 2.0,
        }
    }
}

/// Screen-space displacement for one tick of walking at `angle` degrees.
///
/// The angle is split into a 45° slice `[lower, lower + 45)` and the axis
/// weights of the two bracketing compass directions are blended by
/// `(angle - lower) / 45`. The returned `y` grows downward.
#[must_use]
pub fn tapered_displacement(angle: f32, speed: Speed, running: bool) -> Vec2 {
    let normalized = angle.rem_euclid(360.0);
    let slice = ((normalized / DEGREES_PER_SLICE).floor() as usize) % Direction::ALL.len();
    let fraction = (normalized - slice as f32 * DEGREES_PER_SLICE) / DEGREES_PER_SLICE;

    let lower = Direction::ALL[slice].axis_weights();
    let upper = Direction::ALL[(slice + 1) % Direction::ALL.len()].axis_weights();
    let weights = lower.lerp(upper, fraction);

    let multiplier = if running { speed.run_multiplier } else { 1.0 };
    Vec2::new(weights.x * speed.x, -weights.y * speed.y) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_cardinals_are_full_speed_on_one_axis() {
        let speed = Speed::new(2.0, 3.0);
        assert_close(tapered_displacement(0.0, speed, false), Vec2::new(2.0, 0.0));
        assert_close(tapered_displacement(90.0, speed, false), Vec2::new(0.0, -3.0));
        assert_close(tapered_displacement(180.0, speed, false), Vec2::new(-2.0, 0.0));
        assert_close(tapered_displacement(-90.0, speed, false), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_diagonals_are_full_speed_on_both_axes() {
        let speed = Speed::new(2.0, 3.0);
        assert_close(tapered_displacement(45.0, speed, false), Vec2::new(2.0, -3.0));
        assert_close(tapered_displacement(135.0, speed, false), Vec2::new(-2.0, -3.0));
        assert_close(tapered_displacement(-135.0, speed, false), Vec2::new(-2.0, 3.0));
        assert_close(tapered_displacement(-45.0, speed, false), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_between_slices_is_linear() {
        let speed = Speed::new(9.0, 9.0);
        // 30° is two thirds of the way from RIGHT to UP_RIGHT.
        assert_close(tapered_displacement(30.0, speed, false), Vec2::new(9.0, -6.0));
        // 60° is one third of the way from UP_RIGHT to UP.
        assert_close(tapered_displacement(60.0, speed, false), Vec2::new(6.0, -9.0));
        // −30° blends DOWN_RIGHT toward RIGHT.
        assert_close(tapered_displacement(-30.0, speed, false), Vec2::new(9.0, 6.0));
        // 170° sits between UP_LEFT and LEFT.
        assert_close(tapered_displacement(170.0, speed, false), Vec2::new(-9.0, -2.0));
    }

    #[test]
    fn test_running_applies_multiplier() {
        let speed = Speed::new(2.0, 3.0);
        assert_close(tapered_displacement(0.0, speed, true), Vec2::new(4.0, 0.0));
    }
}
