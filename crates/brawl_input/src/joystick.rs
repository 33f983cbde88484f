//! Touch joystick adapter.
//!
//! A circular on-screen stick reports touch points. Points inside a small
//! inner deadzone or outside the circle release the stick; anything else
//! presses [`ActionKey::Directional`] with the compass angle of the touch.

use brawl_math::{Vec2, degree_of_points};

use crate::action::{ActionKey, Edge};
use crate::router::{Router, StateContext};

/// Deadzone radius as a fraction of the stick radius.
pub const INNER_DEADZONE: f32 = 0.1;

/// What a touch point means for the stick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickReading {
    Released,
    /// Compass angle in degrees.
    Angle(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickAdapter {
    pub center: Vec2,
    pub radius: f32,
}

impl JoystickAdapter {
    #[must_use]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Interpret a touch point in screen coordinates.
    #[must_use]
    pub fn read(&self, touch: Vec2) -> JoystickReading {
        let distance = touch.distance(self.center);
        if distance < self.radius * INNER_DEADZONE || distance >= self.radius {
            return JoystickReading::Released;
        }
        let angle = -degree_of_points(touch, self.center);
        // Screen y points down, so straight left comes out as -180.
        JoystickReading::Angle(if angle <= -180.0 { angle + 360.0 } else { angle })
    }

    /// Route a touch start/move. Returns `true` if the host should swallow it.
    pub fn touch<T>(
        &self,
        router: &Router<T>,
        target: &mut T,
        touch: Vec2,
        context: Option<&dyn StateContext>,
    ) -> bool {
        match self.read(touch) {
            JoystickReading::Released => {
                router.trigger_event(target, Edge::Release, ActionKey::Directional, context, &[])
            }
            JoystickReading::Angle(angle) => {
                router.trigger_event(target, Edge::Press, ActionKey::Directional, context, &[angle])
            }
        }
    }

    /// Route a touch end or cancel.
    pub fn release<T>(
        &self,
        router: &Router<T>,
        target: &mut T,
        context: Option<&dyn StateContext>,
    ) -> bool {
        router.trigger_event(target, Edge::Release, ActionKey::Directional, context, &[])
    }
}
