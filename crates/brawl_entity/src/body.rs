//! Shared actor state and per-tick locomotion.
//!
//! A [`Body`] is the part of an actor that moves: its top-left position,
//! its size and speed in base pixels, the movement state driven by input,
//! and the jump arc planned from that state. Every actor variant embeds one
//! and calls [`Body::detect_jump`] and [`Body::detect_movement`] once per
//! tick.

use brawl_math::{Rect, Vec2, cool_down, min_max};
use brawl_movement::{
    Guided, JumpTrajectory, LaunchParams, MovementState, Speed, tapered_displacement,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::viewport::Viewport;

/// Tile coordinates of an actor's current sprite in its tileset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TilesetOffset {
    pub x: f32,
    pub y: f32,
}

impl TilesetOffset {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Creation-time defaults for an actor variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTemplate {
    pub name: &'static str,
    pub hp: u32,
    /// Width in base pixels.
    pub width: f32,
    /// Height in base pixels.
    pub height: f32,
    pub speed: Speed,
    pub tileset: TilesetOffset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner in screen pixels.
    pub position: Vec2,
    /// Width in base pixels.
    pub width: f32,
    /// Height in base pixels.
    pub height: f32,
    pub speed: Speed,
    pub movement: MovementState,
    pub jump: JumpTrajectory,
    pub tileset: TilesetOffset,
    pub hp: u32,
    pub name: String,
}

impl Body {
    /// Create a body from a variant's template at `position`.
    #[must_use]
    pub fn from_template(template: &BodyTemplate, position: Vec2) -> Self {
        Self {
            position,
            width: template.width,
            height: template.height,
            speed: template.speed,
            movement: MovementState::new(),
            jump: JumpTrajectory::UNSET,
            tileset: template.tileset,
            hp: template.hp,
            name: template.name.to_string(),
        }
    }

    /// Restore every field except the position to the template's values.
    pub fn reset_to(&mut self, template: &BodyTemplate) {
        let position = self.position;
        *self = Self::from_template(template, position);
    }

    /// Size in screen pixels.
    #[must_use]
    pub fn size(&self, viewport: &Viewport) -> Vec2 {
        Vec2::new(viewport.scale(self.width), viewport.scale(self.height))
    }

    /// Ground-contact point: horizontal centre of the bottom edge.
    #[must_use]
    pub fn foot(&self, viewport: &Viewport) -> Vec2 {
        let size = self.size(viewport);
        self.position + Vec2::new(size.x / 2.0, size.y)
    }

    /// Screen-space bounding box.
    #[must_use]
    pub fn bounds(&self, viewport: &Viewport) -> Rect {
        let size = self.size(viewport);
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    /// Returns `true` if the two bodies' bounding boxes share a pixel.
    #[must_use]
    pub fn touches(&self, other: &Body, viewport: &Viewport) -> bool {
        self.bounds(viewport).overlaps(&other.bounds(viewport))
    }

    /// Returns `true` while a jump arc is being followed.
    #[must_use]
    pub fn is_airborne(&self) -> bool {
        self.movement.guided == Guided::Jump && self.jump.is_active()
    }

    /// Move the top-left corner towards `target`, clamped into the viewport.
    ///
    /// While airborne the actor may not rise above the peak of its arc.
    pub fn attempt_to_move_to(&mut self, target: Vec2, viewport: &Viewport) {
        let size = self.size(viewport);
        let ceiling = if self.is_airborne() {
            (self.jump.peak.y - size.y).max(0.0)
        } else {
            0.0
        };
        self.position = Vec2::new(
            min_max(target.x, 0.0, viewport.width - size.x),
            min_max(target.y, ceiling, viewport.height - size.y),
        );
    }

    /// Follow the jump arc for one tick.
    ///
    /// Plans the arc on the first tick of a jump, then samples it from the
    /// remaining countdown. The tick that spends the countdown lands the
    /// body on the destination and returns control to the player, so a jump
    /// lasts `jump_speed` ticks.
    pub fn detect_jump(&mut self, viewport: &Viewport) {
        if self.movement.guided != Guided::Jump {
            return;
        }

        let size = self.size(viewport);
        if !self.jump.is_active() {
            let params = LaunchParams::from_state(
                self.foot(viewport),
                size.y,
                &self.movement,
                viewport.ratio,
            );
            self.jump = JumpTrajectory::plan(&params);
            debug!(
                name = %self.name,
                origin = ?self.jump.origin,
                destination = ?self.jump.destination,
                running = params.running,
                "jump planned"
            );
        }

        let progress = JumpTrajectory::progress(self.movement.jumping, self.movement.jump_speed);
        let foot = self.jump.sample(progress);
        self.attempt_to_move_to(foot - Vec2::new(size.x / 2.0, size.y), viewport);
        trace!(name = %self.name, progress, "jump sample");

        self.movement.jumping = cool_down(self.movement.jumping);
        if self.movement.jumping == 0 {
            let destination = self.jump.destination;
            self.attempt_to_move_to(destination - Vec2::new(size.x / 2.0, size.y), viewport);
            self.movement.land();
            self.jump.invalidate();
            debug!(name = %self.name, position = ?self.position, "landed");
        }
    }

    /// Walk one tick in the steered direction.
    pub fn detect_movement(&mut self, viewport: &Viewport) {
        if !self.movement.moving || self.movement.guided != Guided::None {
            return;
        }
        let step = tapered_displacement(
            self.movement.direction,
            self.speed,
            self.movement.running,
        ) * viewport.ratio;
        self.attempt_to_move_to(self.position + step, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_movement::Direction;

    const TEMPLATE: BodyTemplate = BodyTemplate {
        name: "test",
        hp: 10,
        width: 40.0,
        height: 60.0,
        speed: Speed {
            x: 4.0,
            y: 2.0,
            run_multiplier: 2.0,
        },
        tileset: TilesetOffset::new(1.0, 1.0),
    };

    fn body_at(x: f32, y: f32) -> Body {
        Body::from_template(&TEMPLATE, Vec2::new(x, y))
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn test_foot_is_bottom_centre() {
        let body = body_at(100.0, 100.0);
        assert_eq!(body.foot(&Viewport::default()), Vec2::new(120.0, 160.0));
        let doubled = Viewport::new(1280.0, 720.0);
        assert_eq!(body.foot(&doubled), Vec2::new(140.0, 220.0));
    }

    #[test]
    fn test_walk_right() {
        let viewport = Viewport::default();
        let mut body = body_at(100.0, 100.0);
        body.movement.steer(Some(Direction::Right.angle()), 0);
        body.detect_movement(&viewport);
        assert_close(body.position, Vec2::new(104.0, 100.0));
    }

    #[test]
    fn test_walk_up_moves_towards_top_of_screen() {
        let viewport = Viewport::default();
        let mut body = body_at(100.0, 100.0);
        body.movement.steer(Some(Direction::Up.angle()), 0);
        body.detect_movement(&viewport);
        assert_close(body.position, Vec2::new(100.0, 98.0));
    }

    #[test]
    fn test_idle_body_stays_put() {
        let viewport = Viewport::default();
        let mut body = body_at(100.0, 100.0);
        body.detect_movement(&viewport);
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_clamped_to_viewport() {
        let viewport = Viewport::default();
        let mut body = body_at(0.0, 0.0);
        body.attempt_to_move_to(Vec2::new(-50.0, -50.0), &viewport);
        assert_eq!(body.position, Vec2::ZERO);
        body.attempt_to_move_to(Vec2::new(1000.0, 1000.0), &viewport);
        assert_eq!(body.position, Vec2::new(600.0, 300.0));
    }

    #[test]
    fn test_jump_endpoints() {
        let viewport = Viewport::default();
        let mut body = body_at(280.0, 140.0);
        let start = body.position;
        body.movement.steer(Some(Direction::Right.angle()), 0);
        assert!(body.movement.jump(true, false));

        body.detect_jump(&viewport);
        assert!(body.jump.is_active());
        assert_close(body.position, start);
        let destination = body.jump.destination;

        let mut ticks = 1;
        while body.movement.guided == Guided::Jump {
            body.detect_jump(&viewport);
            ticks += 1;
        }
        assert_eq!(ticks, body.movement.jump_speed);
        assert_eq!(body.position, destination - Vec2::new(20.0, 60.0));
        assert_eq!(body.movement.jumping, 0);
        assert!(!body.jump.is_active());
    }

    #[test]
    fn test_jump_passes_through_peak() {
        let viewport = Viewport::default();
        let mut body = body_at(280.0, 200.0);
        body.movement.jump(true, false);
        body.detect_jump(&viewport);
        let peak = body.jump.peak;

        let mut highest = f32::MAX;
        while body.movement.guided == Guided::Jump {
            body.detect_jump(&viewport);
            highest = highest.min(body.foot(&viewport).y);
        }
        assert!((highest - peak.y).abs() < 1.0);
        assert_close(body.position, Vec2::new(280.0, 200.0));
    }

    #[test]
    fn test_walking_is_suppressed_mid_jump() {
        let viewport = Viewport::default();
        let mut body = body_at(280.0, 200.0);
        body.movement.jump(true, false);
        body.detect_jump(&viewport);
        body.movement.steer(Some(Direction::Right.angle()), 0);
        let before = body.position;
        body.detect_movement(&viewport);
        assert_eq!(body.position, before);
    }

    #[test]
    fn test_touches() {
        let viewport = Viewport::default();
        let a = body_at(100.0, 100.0);
        assert!(a.touches(&body_at(139.0, 159.0), &viewport));
        assert!(!a.touches(&body_at(140.0, 100.0), &viewport));
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut body = body_at(10.0, 20.0);
        body.hp = 1;
        body.movement.crouch(true);
        body.reset_to(&TEMPLATE);
        assert_eq!(body.hp, 10);
        assert!(!body.movement.crouching);
        assert_eq!(body.position, Vec2::new(10.0, 20.0));
    }
}
