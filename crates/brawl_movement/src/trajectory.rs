//! Procedural jump arcs.
//!
//! A jump is a quadratic curve from the takeoff point to the landing point
//! whose control point is solved so the curve passes through a peak sampled
//! on an "air" ellipse above the actor. The landing point is sampled on a
//! wider "ground" ellipse around the takeoff point. Both ellipses are sampled
//! at the actor's steering angle, so jumps carry the actor the way it was
//! moving; a stationary hop goes straight up and lands where it started.

use brawl_math::{Ellipse, Vec2, quadratic_point, solve_control_point};
use serde::{Deserialize, Serialize};

use crate::compass::Direction;
use crate::state::MovementState;

/// Fraction of the countdown still remaining when the actor reaches the peak.
pub const JUMP_PEAK_REFERENCE: f32 = 0.55;

/// Distance modifier for jumps launched from a run.
pub const RUNNING_JUMP_DISTANCE: f32 = 1.25;

/// Radii of the ellipse the peak is sampled on, in base pixels.
const AIR_ELLIPSE: Vec2 = Vec2::new(120.0, 30.0);

/// Radii of the ellipse the landing point is sampled on, in base pixels.
const GROUND_ELLIPSE: Vec2 = Vec2::new(200.0, 50.0);

/// Everything needed to plan one jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    /// Ground-contact point at takeoff (horizontal centre, bottom edge).
    pub origin: Vec2,
    /// Actor height in screen pixels.
    pub body_height: f32,
    /// Jump height in screen pixels.
    pub jump_height: f32,
    /// Viewport scale applied to the ellipse radii.
    pub scale: f32,
    /// Steering angle in degrees, or `None` for a stationary hop.
    pub heading: Option<f32>,
    /// Whether the jump was launched from a run.
    pub running: bool,
}

impl LaunchParams {
    /// Gather launch parameters from an actor's movement state.
    #[must_use]
    pub fn from_state(origin: Vec2, body_height: f32, state: &MovementState, scale: f32) -> Self {
        Self {
            origin,
            body_height,
            jump_height: state.jump_height * scale,
            scale,
            heading: state.moving.then_some(state.direction),
            running: state.is_running_jump(),
        }
    }
}

/// A planned jump arc, or the unset sentinel while the actor is grounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpTrajectory {
    pub origin: Vec2,
    pub control: Vec2,
    pub destination: Vec2,
    pub peak: Vec2,
    pub air: Ellipse,
    pub ground: Ellipse,
}

impl JumpTrajectory {
    /// Sentinel for "no jump in flight". Recognised by `origin.x == -1`.
    pub const UNSET: Self = Self {
        origin: Vec2::new(-1.0, -1.0),
        control: Vec2::new(-1.0, -1.0),
        destination: Vec2::new(-1.0, -1.0),
        peak: Vec2::new(-1.0, -1.0),
        air: Ellipse::UNSET,
        ground: Ellipse::UNSET,
    };

    /// Plan a jump arc.
    #[must_use]
    pub fn plan(params: &LaunchParams) -> Self {
        let distance = if params.running {
            RUNNING_JUMP_DISTANCE
        } else {
            1.0
        };
        let degrees = params.heading.unwrap_or(Direction::Up.angle());
        // Screen y grows downward, so compass angles are mirrored.
        let angle = -degrees.to_radians();
        let radius_scale = distance * params.scale;

        let air = Ellipse::new(
            AIR_ELLIPSE.x * radius_scale,
            AIR_ELLIPSE.y * radius_scale,
            angle,
        );
        let ground = Ellipse::new(
            GROUND_ELLIPSE.x * radius_scale,
            GROUND_ELLIPSE.y * radius_scale,
            angle,
        );

        let origin = params.origin;
        let anchor = origin - Vec2::new(0.0, params.body_height + params.jump_height);
        let peak = air.point_at(anchor);
        let destination = if params.heading.is_some() {
            ground.point_at(origin)
        } else {
            origin
        };
        let control = solve_control_point(origin, peak, destination, JUMP_PEAK_REFERENCE);

        Self {
            origin,
            control,
            destination,
            peak,
            air,
            ground,
        }
    }

    /// Returns `true` while a jump is planned.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.x != -1.0
    }

    /// Drop the planned arc so the next jump is planned afresh.
    pub fn invalidate(&mut self) {
        *self = Self::UNSET;
    }

    /// Progress through a jump from its countdown: 0 at takeoff, 1 at landing.
    #[must_use]
    pub fn progress(jumping: u32, jump_speed: u32) -> f32 {
        if jump_speed == 0 {
            return 1.0;
        }
        1.0 - (jumping.min(jump_speed) as f32 / jump_speed as f32)
    }

    /// Ground-contact point at `progress` along the arc.
    ///
    /// Progress at or past 1 returns the destination itself.
    #[must_use]
    pub fn sample(&self, progress: f32) -> Vec2 {
        if progress >= 1.0 {
            return self.destination;
        }
        quadratic_point(self.origin, self.control, self.destination, progress.max(0.0))
    }
}

impl Default for JumpTrajectory {
    fn default() -> Self {
        Self::UNSET
    }
}
