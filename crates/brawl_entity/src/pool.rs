//! Actor identity and recycling.
//!
//! An [`ActorId`] is a lightweight `u64` handle. The [`ActorPool`] owns every
//! live actor and keeps removed actors in per-kind graveyards so creating a
//! new actor of the same kind reuses (and resets) an old allocation.

use std::collections::HashMap;

use brawl_math::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actor::{Actor, ActorKind};
use crate::npc::Npc;
use crate::player::Player;

/// A handle to a live actor. Ids start at 1 and are never reused, even
/// when the actor behind one is recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// Owns live actors and recycles removed ones.
#[derive(Debug, Default)]
pub struct ActorPool {
    last_id: u64,
    alive: Vec<(ActorId, Box<dyn Actor>)>,
    graveyard: HashMap<ActorKind, Vec<Box<dyn Actor>>>,
}

impl ActorPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an actor of `kind` at the origin, reusing a dead one if any.
    pub fn create(&mut self, kind: ActorKind) -> ActorId {
        self.spawn_at(kind, Vec2::ZERO)
    }

    /// Create an actor of `kind` with its top-left corner at `position`.
    ///
    /// A recycled actor is reset before it is placed.
    pub fn spawn_at(&mut self, kind: ActorKind, position: Vec2) -> ActorId {
        let recycled = self.graveyard.get_mut(&kind).and_then(Vec::pop);
        let reused = recycled.is_some();
        let mut actor = match recycled {
            Some(mut actor) => {
                actor.reset();
                actor
            }
            None => Self::fresh(kind),
        };
        actor.body_mut().position = position;

        self.last_id += 1;
        let id = ActorId(self.last_id);
        debug!(%id, %kind, reused, "actor created");
        self.alive.push((id, actor));
        id
    }

    fn fresh(kind: ActorKind) -> Box<dyn Actor> {
        match kind {
            ActorKind::Player => Box::new(Player::default()),
            ActorKind::Npc => Box::new(Npc::default()),
        }
    }

    /// Move a live actor to its kind's graveyard. Returns `false` if `id`
    /// is not alive.
    pub fn remove(&mut self, id: ActorId) -> bool {
        let Some(index) = self.alive.iter().position(|(alive, _)| *alive == id) else {
            return false;
        };
        let (_, actor) = self.alive.swap_remove(index);
        let kind = actor.kind();
        self.graveyard.entry(kind).or_default().push(actor);
        debug!(%id, %kind, "actor removed");
        true
    }

    /// Drop every recycled actor.
    pub fn cremate(&mut self) {
        let count: usize = self.graveyard.values().map(Vec::len).sum();
        self.graveyard.clear();
        debug!(count, "graveyard cleared");
    }

    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&dyn Actor> {
        self.alive
            .iter()
            .find(|(alive, _)| *alive == id)
            .map(|(_, actor)| actor.as_ref())
    }

    #[must_use]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut (dyn Actor + 'static)> {
        self.alive
            .iter_mut()
            .find(|(alive, _)| *alive == id)
            .map(|(_, actor)| actor.as_mut())
    }

    /// Iterate live actors mutably, in creation order (modulo removals).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut (dyn Actor + 'static))> {
        self.alive.iter_mut().map(|(id, actor)| (*id, actor.as_mut()))
    }

    /// Live actors ordered by x, then y.
    #[must_use]
    pub fn all_sorted(&self) -> Vec<(ActorId, &dyn Actor)> {
        let mut actors: Vec<(ActorId, &dyn Actor)> = self
            .alive
            .iter()
            .map(|(id, actor)| (*id, actor.as_ref()))
            .collect();
        actors.sort_by(|(_, a), (_, b)| {
            let (a, b) = (a.body().position, b.body().position);
            a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
        });
        actors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Number of dead actors of `kind` waiting to be reused.
    #[must_use]
    pub fn graveyard_len(&self, kind: ActorKind) -> usize {
        self.graveyard.get(&kind).map_or(0, Vec::len)
    }
}
