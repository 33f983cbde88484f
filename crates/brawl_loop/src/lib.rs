//! # brawl_loop
//!
//! A fixed-timestep scheduler that decouples simulation ticks from
//! rendering.
//!
//! The host reports each frame opportunity with a millisecond timestamp.
//! The [`Scheduler`] converts elapsed time into zero or more fixed-length
//! simulation ticks, then renders exactly once. When too many ticks pile up
//! in one frame (for example after the host was suspended) it gives up on
//! catching up and discards the backlog instead.

pub mod config;
pub mod error;
pub mod host;
pub mod scheduler;

pub use config::SchedulerConfig;
pub use error::SchedulerError;
pub use host::{ClockHost, FrameHost, ScriptedHost};
pub use scheduler::{FrameInfo, FrameReport, Scheduler, TickInfo};
