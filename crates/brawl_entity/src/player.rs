//! The player-controlled actor.

use brawl_math::Vec2;
use brawl_movement::Speed;

use crate::actor::{Actor, ActorKind, TickContext};
use crate::body::{Body, BodyTemplate, TilesetOffset};

/// Defaults for a freshly created player.
pub const PLAYER_TEMPLATE: BodyTemplate = BodyTemplate {
    name: "Gramps",
    hp: 100,
    width: 36.0,
    height: 67.0,
    speed: Speed {
        x: 2.0,
        y: 3.0,
        run_multiplier: 2.0,
    },
    tileset: TilesetOffset::new(3.0, 2.0),
};

/// The actor driven by the input router.
///
/// A player does nothing on its own; its movement state is mutated between
/// frames by input handlers and consumed here once per tick.
#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
}

impl Player {
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::from_template(&PLAYER_TEMPLATE, position),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Actor for Player {
    fn kind(&self) -> ActorKind {
        ActorKind::Player
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.body.detect_jump(ctx.viewport);
        self.body.detect_movement(ctx.viewport);
    }

    fn reset(&mut self) {
        self.body.reset_to(&PLAYER_TEMPLATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use brawl_movement::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_player_defaults() {
        let player = Player::default();
        let body = player.body();
        assert_eq!(body.name, "Gramps");
        assert_eq!(body.hp, 100);
        assert_eq!(body.speed.x, 2.0);
        assert_eq!(body.speed.y, 3.0);
        assert_eq!(player.kind(), ActorKind::Player);
    }

    #[test]
    fn test_update_consumes_movement_state() {
        let viewport = Viewport::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player
            .body_mut()
            .movement
            .steer(Some(Direction::Left.angle()), 0);

        let mut ctx = TickContext {
            tick_id: 1,
            now: 16,
            viewport: &viewport,
            rng: &mut rng,
        };
        player.update(&mut ctx);
        assert!((player.body().position.x - 98.0).abs() < 1e-4);
    }

    #[test]
    fn test_render_reports_scaled_size() {
        let viewport = Viewport::new(1280.0, 720.0);
        let player = Player::new(Vec2::new(5.0, 6.0));
        let frame = player.render(&viewport);
        assert_eq!(frame.x, 5.0);
        assert_eq!(frame.width, 72.0);
        assert_eq!(frame.height, 134.0);
        assert_eq!(frame.tileset_x, 3.0);
        assert_eq!(frame.tileset_y, 2.0);
    }
}
