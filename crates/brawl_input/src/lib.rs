//! # brawl_input
//!
//! Routes host input to the simulation.
//!
//! - [`action`]: the abstract [`ActionKey`]s and press/release [`Edge`]s.
//! - [`router`]: [`Router`], which dispatches an action to subscribers
//!   whose state requirement matches the current game state.
//! - [`bindings`]: the standard movement subscriptions for a
//!   [`Controllable`] target.
//! - [`keyboard`] and [`joystick`]: adapters turning raw host events into
//!   router calls.

pub mod action;
pub mod bindings;
pub mod error;
pub mod joystick;
pub mod keyboard;
pub mod router;

pub use action::{ActionKey, Edge};
pub use bindings::{Controllable, HELP, HeldKeys, PLAYING, movement_router, release_all};
pub use error::InputError;
pub use joystick::{JoystickAdapter, JoystickReading};
pub use keyboard::{KeyBinding, KeyboardAdapter, lookup, reverse_lookup};
pub use router::{Router, StateContext, StateRequirement};
