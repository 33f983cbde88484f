//! Per-actor movement state and the operations that mutate it.
//!
//! [`MovementState`] is owned by exactly one actor. Input handlers mutate it
//! between frames; the actor's own tick reads it to displace the actor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compass::Facing;

/// Wall-clock timestamp in milliseconds.
pub type Timestamp = u64;

/// A release followed by a press of the same facing within this window
/// promotes walking to running.
pub const RUN_TAP_WINDOW_MS: u64 = 100;

/// Default height of a jump arc above the actor, in pixels.
pub const DEFAULT_JUMP_HEIGHT: f32 = 30.0;

/// Default jump duration in ticks.
pub const DEFAULT_JUMP_SPEED: u32 = 30;

/// Who is driving the actor's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Guided {
    /// Direct per-tick input integration.
    #[default]
    None,
    /// A precomputed jump arc.
    Jump,
    /// A scripted sequence that overrides input.
    Narrative,
}

/// Orientation, locomotion, and action state of one actor.
///
/// Invariants maintained by the operations on this type:
///
/// - `running` is only promoted while `guided == Guided::None`, and starting
///   a jump clears it.
/// - `jumping > 0` only while `guided` is [`Guided::Jump`] (or a narrative
///   override set by the caller).
/// - At most one of `punching` / `kicking` is `Some`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    /// Last steered compass angle in degrees. Kept when movement stops.
    pub direction: f32,
    /// Whether a direction is currently held.
    pub moving: bool,
    pub facing: Facing,
    pub running: bool,
    pub crouching: bool,
    pub stunned: bool,
    /// Remaining jump ticks.
    pub jumping: u32,
    pub guided: Guided,
    /// Time the current punch started.
    pub punching: Option<Timestamp>,
    /// Time the current kick started.
    pub kicking: Option<Timestamp>,
    pub jump_height: f32,
    /// Jump duration in ticks.
    pub jump_speed: u32,
    /// Whether the jump in flight was launched from a run.
    running_jump: bool,
    #[serde(skip)]
    last_release_right: Option<Timestamp>,
    #[serde(skip)]
    last_release_left: Option<Timestamp>,
}

impl MovementState {
    /// Create a resting state with default jump parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            direction: 0.0,
            moving: false,
            facing: Facing::Right,
            running: false,
            crouching: false,
            stunned: false,
            jumping: 0,
            guided: Guided::None,
            punching: None,
            kicking: None,
            jump_height: DEFAULT_JUMP_HEIGHT,
            jump_speed: DEFAULT_JUMP_SPEED,
            running_jump: false,
            last_release_right: None,
            last_release_left: None,
        }
    }

    /// Steer toward a compass angle, or stop with `None`.
    ///
    /// Stopping clears `running` and remembers when the current facing was
    /// released; `direction` keeps its last value. Steering updates
    /// `direction` and `facing` and applies the tap-to-run rule: a press
    /// inside the facing's ±45° band within [`RUN_TAP_WINDOW_MS`] of that
    /// facing's last release starts a run. Turning around or leaving the
    /// band stops running.
    pub fn steer(&mut self, angle: Option<f32>, now: Timestamp) {
        let Some(angle) = angle else {
            self.moving = false;
            self.running = false;
            *self.last_release_mut(self.facing) = Some(now);
            return;
        };

        self.moving = true;
        self.direction = angle;

        let facing = Facing::for_angle(angle);
        if facing != self.facing {
            self.running = false;
        }

        if facing.in_run_band(angle) {
            if let Some(released) = self.last_release_mut(facing).take() {
                let tapped = now.saturating_sub(released) < RUN_TAP_WINDOW_MS;
                let running = tapped && self.guided == Guided::None;
                if running && !self.running {
                    debug!(?facing, gap_ms = now.saturating_sub(released), "tap-to-run");
                }
                self.running = running;
            }
        } else {
            self.running = false;
        }

        self.facing = facing;
    }

    /// Stop moving without recording a release, so the next press cannot
    /// start a run.
    pub fn halt(&mut self) {
        self.moving = false;
        self.running = false;
    }

    /// Hold or release crouch.
    pub fn crouch(&mut self, active: bool) {
        self.crouching = active;
    }

    /// Try to start a jump.
    ///
    /// Ignored unless `active`, not `already_fired` (a held key repeating),
    /// and the actor is free (`guided == None`, no countdown). Returns `true`
    /// if a jump started.
    pub fn jump(&mut self, active: bool, already_fired: bool) -> bool {
        if !active || already_fired || self.guided != Guided::None || self.jumping > 0 {
            return false;
        }
        self.jumping = self.jump_speed;
        self.guided = Guided::Jump;
        self.running_jump = self.running;
        self.running = false;
        debug!(
            ticks = self.jumping,
            running_jump = self.running_jump,
            "jump started"
        );
        true
    }

    /// Start or release a punch. A new punch never interrupts a kick.
    pub fn punch(&mut self, active: bool, now: Timestamp) {
        if !active {
            self.punching = None;
        } else if self.punching.is_none() && self.kicking.is_none() {
            self.punching = Some(now);
        }
    }

    /// Start or release a kick. A new kick never interrupts a punch.
    pub fn kick(&mut self, active: bool, now: Timestamp) {
        if !active {
            self.kicking = None;
        } else if self.punching.is_none() && self.kicking.is_none() {
            self.kicking = Some(now);
        }
    }

    /// Whether the jump in flight was launched from a run.
    #[must_use]
    pub fn is_running_jump(&self) -> bool {
        self.running_jump
    }

    /// Finish a guided jump and hand control back to input.
    pub fn land(&mut self) {
        self.jumping = 0;
        self.running_jump = false;
        if self.guided == Guided::Jump {
            self.guided = Guided::None;
        }
    }

    /// Restore every field to its default, for actors recycled from a pool.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn last_release_mut(&mut self, facing: Facing) -> &mut Option<Timestamp> {
        match facing {
            Facing::Right => &mut self.last_release_right,
            Facing::Left => &mut self.last_release_left,
        }
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new()
    }
}
