//! Wandering non-player actors.

use brawl_math::Vec2;
use brawl_movement::{Direction, Speed};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::actor::{Actor, ActorKind, TickContext};
use crate::body::{Body, BodyTemplate, TilesetOffset};

/// Defaults for a freshly created NPC.
pub const NPC_TEMPLATE: BodyTemplate = BodyTemplate {
    name: "NPC",
    hp: 20,
    width: 36.0,
    height: 66.0,
    speed: Speed {
        x: 5.0,
        y: 5.0,
        run_multiplier: 2.0,
    },
    tileset: TilesetOffset::new(47.0, 3.0),
};

/// Probability per tick that an NPC picks a new heading.
const WANDER_CHANCE: f64 = 0.5;

/// Headings an NPC picks from; `None` stops it.
const WANDER_CHOICES: [Option<Direction>; 9] = [
    Some(Direction::Right),
    Some(Direction::UpRight),
    Some(Direction::Up),
    Some(Direction::UpLeft),
    Some(Direction::Left),
    Some(Direction::DownLeft),
    Some(Direction::Down),
    Some(Direction::DownRight),
    None,
];

#[derive(Debug, Clone)]
pub struct Npc {
    body: Body,
}

impl Npc {
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::from_template(&NPC_TEMPLATE, position),
        }
    }

    fn wander(&mut self, ctx: &mut TickContext<'_>) {
        if !ctx.rng.gen_bool(WANDER_CHANCE) {
            return;
        }
        if let Some(choice) = WANDER_CHOICES.choose(&mut *ctx.rng) {
            self.body
                .movement
                .steer(choice.map(Direction::angle), ctx.now);
        }
    }
}

impl Default for Npc {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl Actor for Npc {
    fn kind(&self) -> ActorKind {
        ActorKind::Npc
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.wander(ctx);
        self.body.detect_jump(ctx.viewport);
        self.body.detect_movement(ctx.viewport);
    }

    fn reset(&mut self) {
        self.body.reset_to(&NPC_TEMPLATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(npc: &mut Npc, seed: u64, ticks: u64) -> Vec<Vec2> {
        let viewport = Viewport::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..ticks)
            .map(|tick_id| {
                let mut ctx = TickContext {
                    tick_id,
                    now: tick_id * 16,
                    viewport: &viewport,
                    rng: &mut rng,
                };
                npc.update(&mut ctx);
                npc.body().position
            })
            .collect()
    }

    #[test]
    fn test_npc_defaults() {
        let npc = Npc::default();
        assert_eq!(npc.body().name, "NPC");
        assert_eq!(npc.body().hp, 20);
        assert_eq!(npc.body().height, 66.0);
        assert_eq!(npc.kind(), ActorKind::Npc);
    }

    #[test]
    fn test_wandering_is_reproducible_per_seed() {
        let start = Vec2::new(300.0, 150.0);
        let a = run(&mut Npc::new(start), 7, 200);
        let b = run(&mut Npc::new(start), 7, 200);
        assert_eq!(a, b);
    }

    #[test]
    fn test_npc_wanders_and_stays_in_bounds() {
        let start = Vec2::new(300.0, 150.0);
        let mut npc = Npc::new(start);
        let path = run(&mut npc, 42, 500);
        assert!(path.iter().any(|p| *p != start));
        for p in path {
            assert!((0.0..=604.0).contains(&p.x));
            assert!((0.0..=294.0).contains(&p.y));
        }
    }
}
