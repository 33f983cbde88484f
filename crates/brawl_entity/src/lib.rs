//! # brawl_entity
//!
//! Actors of the simulation and the pool that recycles them.
//!
//! This crate provides:
//!
//! - [`Actor`] trait: the capability interface every actor implements
//!   (`update`, `render`, `reset`).
//! - [`Body`]: position, size, speed, movement state, and jump arc shared
//!   by all actors, with the per-tick walking and jumping logic.
//! - [`Player`] and [`Npc`]: the two actor variants.
//! - [`ActorPool`]: creates, recycles, and orders actors.
//! - [`Viewport`]: the playfield bounds and pixel scale.

pub mod actor;
pub mod body;
pub mod npc;
pub mod player;
pub mod pool;
pub mod viewport;

pub use actor::{Actor, ActorKind, SpriteFrame, TickContext};
pub use body::{Body, BodyTemplate, TilesetOffset};
pub use npc::Npc;
pub use player::Player;
pub use pool::{ActorId, ActorPool};
pub use viewport::Viewport;
