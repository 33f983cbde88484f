//! Compass directions.
//!
//! Directions are encoded as signed degrees in (−180, 180] with 0 pointing
//! right and 90 pointing up (screen up, i.e. negative y).

use brawl_math::Vec2;
use serde::{Deserialize, Serialize};

/// Width of one compass slice in degrees.
pub const DEGREES_PER_SLICE: f32 = 45.0;

/// One of the eight named compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions, counter-clockwise starting at [`Direction::Right`].
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// The fixed compass angle of this direction in degrees.
    #[must_use]
    pub const fn angle(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::UpRight => 45.0,
            Direction::Up => 90.0,
            Direction::UpLeft => 135.0,
            Direction::Left => 180.0,
            Direction::DownLeft => -135.0,
            Direction::Down => -90.0,
            Direction::DownRight => -45.0,
        }
    }

    /// Look up the direction whose angle is exactly `angle`.
    #[must_use]
    pub fn from_angle(angle: f32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.angle() == angle)
    }

    /// Resolve a held-key axis pair into a direction.
    ///
    /// `x` is +1 for right, −1 for left; `y` is +1 for up, −1 for down.
    /// Returns `None` when both axes are neutral.
    #[must_use]
    pub fn from_axes(x: i8, y: i8) -> Option<Self> {
        match (x.signum(), y.signum()) {
            (1, 0) => Some(Direction::Right),
            (1, 1) => Some(Direction::UpRight),
            (0, 1) => Some(Direction::Up),
            (-1, 1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, -1) => Some(Direction::DownLeft),
            (0, -1) => Some(Direction::Down),
            (1, -1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Per-axis speed weights for this direction in compass space (y up).
    ///
    /// Cardinals are full speed on one axis; diagonals are full speed on
    /// both, matching how the game has always moved diagonally.
    #[must_use]
    pub fn axis_weights(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::UpRight => Vec2::new(1.0, 1.0),
            Direction::Up => Vec2::new(0.0, 1.0),
            Direction::UpLeft => Vec2::new(-1.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::DownLeft => Vec2::new(-1.0, -1.0),
            Direction::Down => Vec2::new(0.0, -1.0),
            Direction::DownRight => Vec2::new(1.0, -1.0),
        }
    }
}

/// Which way an actor is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// The half-plane an angle falls in: [−90, 90] faces right.
    #[must_use]
    pub fn for_angle(angle: f32) -> Self {
        if (Direction::Down.angle()..=Direction::Up.angle()).contains(&angle) {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// Returns `true` if `angle` lies within the ±45° band (inclusive)
    /// around this facing's horizontal axis.
    #[must_use]
    pub fn in_run_band(self, angle: f32) -> bool {
        match self {
            Facing::Right => {
                (Direction::DownRight.angle()..=Direction::UpRight.angle()).contains(&angle)
            }
            Facing::Left => {
                angle >= Direction::UpLeft.angle() || angle <= Direction::DownLeft.angle()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_table() {
        assert_eq!(Direction::Right.angle(), 0.0);
        assert_eq!(Direction::UpRight.angle(), 45.0);
        assert_eq!(Direction::Up.angle(), 90.0);
        assert_eq!(Direction::UpLeft.angle(), 135.0);
        assert_eq!(Direction::Left.angle(), 180.0);
        assert_eq!(Direction::DownLeft.angle(), -135.0);
        assert_eq!(Direction::Down.angle(), -90.0);
        assert_eq!(Direction::DownRight.angle(), -45.0);
    }

    #[test]
    fn test_from_angle_roundtrips_table() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_angle(d.angle()), Some(d));
        }
        assert_eq!(Direction::from_angle(30.0), None);
    }

    #[test]
    fn test_from_axes() {
        assert_eq!(Direction::from_axes(1, 1), Some(Direction::UpRight));
        assert_eq!(Direction::from_axes(-1, -1), Some(Direction::DownLeft));
        assert_eq!(Direction::from_axes(0, -1), Some(Direction::Down));
        assert_eq!(Direction::from_axes(0, 0), None);
    }

    #[test]
    fn test_facing_half_planes() {
        assert_eq!(Facing::for_angle(90.0), Facing::Right);
        assert_eq!(Facing::for_angle(-90.0), Facing::Right);
        assert_eq!(Facing::for_angle(0.0), Facing::Right);
        assert_eq!(Facing::for_angle(91.0), Facing::Left);
        assert_eq!(Facing::for_angle(180.0), Facing::Left);
        assert_eq!(Facing::for_angle(-135.0), Facing::Left);
    }

    #[test]
    fn test_run_band_is_inclusive() {
        assert!(Facing::Right.in_run_band(45.0));
        assert!(Facing::Right.in_run_band(-45.0));
        assert!(!Facing::Right.in_run_band(46.0));
        assert!(Facing::Left.in_run_band(135.0));
        assert!(Facing::Left.in_run_band(-135.0));
        assert!(Facing::Left.in_run_band(180.0));
        assert!(!Facing::Left.in_run_band(90.0));
        assert!(!Facing::Left.in_run_band(-90.0));
    }
}
