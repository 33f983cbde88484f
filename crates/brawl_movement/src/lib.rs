//! # brawl_movement
//!
//! Turns directional input into orientation, running, and jump state for a
//! single controllable actor.
//!
//! This crate provides:
//!
//! - [`compass`]: the eight named directions and their fixed angles.
//! - [`state`]: [`MovementState`], the per-actor resolver (steer, crouch,
//!   jump, punch, kick, reset) including the tap-to-run gesture.
//! - [`speed`]: tapered per-axis displacement for arbitrary angles.
//! - [`trajectory`]: the procedural jump arc.

pub mod compass;
pub mod speed;
pub mod state;
pub mod trajectory;

pub use compass::{Direction, Facing};
pub use speed::{Speed, tapered_displacement};
pub use state::{Guided, MovementState, RUN_TAP_WINDOW_MS, Timestamp};
pub use trajectory::{JUMP_PEAK_REFERENCE, JumpTrajectory, LaunchParams};
