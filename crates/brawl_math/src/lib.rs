//! # brawl_math
//!
//! Math primitives for the brawler simulation core. Re-exports [`glam`] for
//! 2D vectors and defines the game-specific geometry helpers:
//!
//! - [`curve`]: quadratic Bezier evaluation and the closed-form control
//!   point solve used by jump arcs.
//! - [`ellipse`]: ellipse descriptors sampled at a fixed angle.
//! - [`scalar`]: countdowns, rectangle overlap, and point-to-angle helpers.

pub mod curve;
pub mod ellipse;
pub mod scalar;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use curve::{quadratic_point, solve_control_point};
pub use ellipse::Ellipse;
pub use scalar::{Rect, cool_down, degree_of_points, min_max};
