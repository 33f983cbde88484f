//! The simulation world: actors, the viewport, and input-facing state.

use brawl_entity::{Actor, ActorId, ActorKind, ActorPool, SpriteFrame, TickContext, Viewport};
use brawl_input::{Controllable, HeldKeys};
use brawl_loop::TickInfo;
use brawl_math::Vec2;
use brawl_movement::{MovementState, Timestamp};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

/// Snapshot of the player's movement for the debug log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugSnapshot {
    pub facing: brawl_movement::Facing,
    pub moving: bool,
    pub running: bool,
    pub crouching: bool,
    pub stunned: bool,
    pub jumping: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug)]
pub struct World {
    pub pool: ActorPool,
    pub player: ActorId,
    pub viewport: Viewport,
    rng: ChaCha8Rng,
    keys: HeldKeys,
    now: Timestamp,
    debug: bool,
    menu_requested: bool,
}

impl World {
    /// Create a world with a player in the middle of the viewport and
    /// `npcs` NPCs at seeded random positions.
    #[must_use]
    pub fn new(viewport: Viewport, seed: u64, npcs: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pool = ActorPool::new();

        let center = Vec2::new(viewport.width / 2.0, viewport.height / 2.0);
        let player = pool.spawn_at(ActorKind::Player, center);
        for _ in 0..npcs {
            let position = Vec2::new(
                rng.gen_range(0.0..viewport.width.max(1.0)),
                rng.gen_range(0.0..viewport.height.max(1.0)),
            );
            let id = pool.spawn_at(ActorKind::Npc, position);
            if let Some(npc) = pool.get_mut(id) {
                // Pull spawn points fully on screen.
                let target = npc.body().position;
                npc.body_mut().attempt_to_move_to(target, &viewport);
            }
        }
        debug!(%player, npcs, seed, "world created");

        Self {
            pool,
            player,
            viewport,
            rng,
            keys: HeldKeys::default(),
            now: 0,
            debug: false,
            menu_requested: false,
        }
    }

    /// Advance every actor by one tick.
    pub fn tick(&mut self, tick: &TickInfo) {
        self.now = to_timestamp(tick.now);
        let mut ctx = TickContext {
            tick_id: tick.tick_id,
            now: self.now,
            viewport: &self.viewport,
            rng: &mut self.rng,
        };
        for (_, actor) in self.pool.iter_mut() {
            actor.update(&mut ctx);
        }
    }

    /// Record the host time at which input is being delivered.
    pub fn set_now(&mut self, now_ms: f64) {
        self.now = to_timestamp(now_ms);
    }

    #[must_use]
    pub fn player(&self) -> Option<&dyn Actor> {
        self.pool.get(self.player)
    }

    /// Sprites of every actor, back to front.
    #[must_use]
    pub fn sprites(&self) -> Vec<SpriteFrame> {
        self.pool
            .all_sorted()
            .into_iter()
            .map(|(_, actor)| actor.render(&self.viewport))
            .collect()
    }

    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub fn debug_snapshot(&self) -> Option<DebugSnapshot> {
        let body = self.player()?.body();
        let movement = &body.movement;
        Some(DebugSnapshot {
            facing: movement.facing,
            moving: movement.moving,
            running: movement.running,
            crouching: movement.crouching,
            stunned: movement.stunned,
            jumping: movement.jumping,
            x: body.position.x,
            y: body.position.y,
        })
    }

    /// Returns `true` once per menu press.
    pub fn take_menu_request(&mut self) -> bool {
        std::mem::take(&mut self.menu_requested)
    }
}

impl Controllable for World {
    fn movement(&mut self) -> Option<&mut MovementState> {
        self.pool
            .get_mut(self.player)
            .map(|player| &mut player.body_mut().movement)
    }

    fn held_keys(&mut self) -> &mut HeldKeys {
        &mut self.keys
    }

    fn now_ms(&self) -> Timestamp {
        self.now
    }

    fn toggle_debug(&mut self) {
        self.debug = !self.debug;
    }

    fn menu(&mut self) {
        self.menu_requested = true;
    }
}

fn to_timestamp(now_ms: f64) -> Timestamp {
    now_ms.max(0.0) as Timestamp
}
