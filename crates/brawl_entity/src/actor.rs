//! The actor capability interface.

use std::fmt;

use brawl_movement::Timestamp;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::viewport::Viewport;

/// The variant of an actor, used to pick a graveyard when recycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorKind {
    Player,
    Npc,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Player => f.write_str("player"),
            ActorKind::Npc => f.write_str("npc"),
        }
    }
}

/// Per-tick inputs handed to every actor.
pub struct TickContext<'a> {
    /// The scheduler's tick counter.
    pub tick_id: u64,
    /// Wall-clock time of the tick, in milliseconds.
    pub now: Timestamp,
    pub viewport: &'a Viewport,
    /// Source of randomness for actor behaviour.
    pub rng: &'a mut dyn RngCore,
}

/// What the renderer needs to draw one actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub kind: ActorKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tileset_x: f32,
    pub tileset_y: f32,
}

/// Something the scheduler can tick, the renderer can draw, and the pool
/// can recycle.
pub trait Actor: fmt::Debug {
    /// The actor's variant.
    fn kind(&self) -> ActorKind;

    /// Shared body state.
    fn body(&self) -> &Body;

    /// Mutable shared body state.
    fn body_mut(&mut self) -> &mut Body;

    /// Advance the actor by one simulation tick.
    fn update(&mut self, ctx: &mut TickContext<'_>);

    /// Restore the actor to its freshly created state.
    fn reset(&mut self);

    /// Snapshot of the actor for the renderer, in screen pixels.
    fn render(&self, viewport: &Viewport) -> SpriteFrame {
        let body = self.body();
        SpriteFrame {
            kind: self.kind(),
            x: body.position.x,
            y: body.position.y,
            width: viewport.scale(body.width),
            height: viewport.scale(body.height),
            tileset_x: body.tileset.x,
            tileset_y: body.tileset.y,
        }
    }
}
