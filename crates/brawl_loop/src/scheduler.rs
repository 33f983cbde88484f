//! The fixed-timestep scheduler.
//!
//! Each call to [`Scheduler::frame`] handles one host frame opportunity:
//!
//! 1. Add the time since the previous frame to the accumulator.
//! 2. Run one `update` per whole interval in the accumulator.
//! 3. If `panic_limit` updates ran and time is still owed, discard the
//!    backlog and call `panic`.
//! 4. Call `render` exactly once.
//!
//! Callbacks receive the simulation world as a parameter; the scheduler
//! never owns it.

use tracing::{debug, info, warn};

use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::host::FrameHost;

/// Wall time between FPS samples, in milliseconds.
const FPS_SAMPLE_MS: f64 = 1000.0;

/// Weight of the newest sample in the smoothed FPS.
const FPS_SMOOTHING: f64 = 0.25;

/// Passed to the update callback once per simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInfo {
    pub tick_id: u64,
    /// Timestamp of the frame this tick runs in, in milliseconds.
    pub now: f64,
    /// Fixed tick length in milliseconds.
    pub interval: f64,
}

/// Passed to the render callback once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub frame_id: u64,
    pub now: f64,
    /// Smoothed frames per second.
    pub fps: f64,
    /// Ticks run during this frame.
    pub steps: u32,
    /// Fraction of an interval left in the accumulator, in `[0, 1)`.
    pub alpha: f64,
    pub panicked: bool,
}

/// Outcome of one [`Scheduler::frame`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub steps: u32,
    pub panicked: bool,
    pub rendered: bool,
}

type UpdateFn<W> = Box<dyn FnMut(&mut W, &TickInfo)>;
type RenderFn<W> = Box<dyn FnMut(&mut W, &FrameInfo)>;
type PanicFn<W> = Box<dyn FnMut(&mut W)>;

/// Fixed-timestep scheduler driving a world of type `W`.
pub struct Scheduler<W> {
    config: SchedulerConfig,
    interval: f64,
    update: Option<UpdateFn<W>>,
    render: Option<RenderFn<W>>,
    panic: Option<PanicFn<W>>,
    running: bool,
    /// Accumulated, not yet simulated time in milliseconds.
    delta: f64,
    last_run: Option<f64>,
    tick_id: u64,
    frame_id: u64,
    fps: f64,
    frames_this_second: u32,
    last_fps_sample: Option<f64>,
    panics: u64,
}

impl<W> Scheduler<W> {
    /// Create a paused scheduler with no callbacks installed.
    #[must_use]
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            interval: config.interval(),
            fps: config.fps,
            config,
            update: None,
            render: None,
            panic: None,
            running: false,
            delta: 0.0,
            last_run: None,
            tick_id: 0,
            frame_id: 0,
            frames_this_second: 0,
            last_fps_sample: None,
            panics: 0,
        }
    }

    /// Install the per-tick simulation callback.
    #[must_use]
    pub fn with_update<F>(mut self, update: F) -> Self
    where
        F: FnMut(&mut W, &TickInfo) + 'static,
    {
        self.update = Some(Box::new(update));
        self
    }

    /// Install the per-frame render callback.
    #[must_use]
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: FnMut(&mut W, &FrameInfo) + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Install a callback run after the backlog is discarded.
    #[must_use]
    pub fn with_panic<F>(mut self, panic: F) -> Self
    where
        F: FnMut(&mut W) + 'static,
    {
        self.panic = Some(Box::new(panic));
        self
    }

    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Change the tick rate. Takes effect on the next frame.
    pub fn set_fps(&mut self, fps: f64) {
        self.config.fps = fps;
        self.interval = self.config.interval();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run since creation.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Number of times the backlog has been discarded.
    #[must_use]
    pub fn panics(&self) -> u64 {
        self.panics
    }

    /// Begin (or resume) scheduling. The first frame afterwards only sets
    /// the time baseline. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.delta = 0.0;
        self.last_run = None;
        info!(fps = self.config.fps, panic_limit = self.config.panic_limit, "scheduler started");
        true
    }

    /// Stop scheduling further frames. Returns `false` if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!(tick_id = self.tick_id, "scheduler paused");
        true
    }

    /// Handle one frame opportunity at `now` milliseconds.
    ///
    /// Fails if the update or render callback is missing. A paused
    /// scheduler does nothing.
    pub fn frame(&mut self, now: f64, world: &mut W) -> Result<FrameReport, SchedulerError> {
        let Some(update) = self.update.as_mut() else {
            return Err(SchedulerError::MissingCallback("update"));
        };
        if self.render.is_none() {
            return Err(SchedulerError::MissingCallback("render"));
        }
        if !self.running {
            return Ok(FrameReport::default());
        }

        if let Some(last_run) = self.last_run {
            self.delta += (now - last_run).max(0.0);
        }
        self.last_run = Some(now);

        let mut steps = 0u32;
        let mut overloaded = false;
        while self.delta >= self.interval {
            let info = TickInfo {
                tick_id: self.tick_id,
                now,
                interval: self.interval,
            };
            update(world, &info);
            self.tick_id += 1;
            self.delta -= self.interval;
            steps += 1;
            if steps >= self.config.panic_limit && self.delta >= self.interval {
                overloaded = true;
                break;
            }
        }

        if overloaded {
            self.recover(world, now);
        }

        self.sample_fps(now);

        let info = FrameInfo {
            frame_id: self.frame_id,
            now,
            fps: self.fps,
            steps,
            alpha: self.delta / self.interval,
            panicked: overloaded,
        };
        if let Some(render) = self.render.as_mut() {
            render(world, &info);
        }
        self.frame_id += 1;

        debug!(frame_id = info.frame_id, steps, panicked = overloaded, "frame complete");
        Ok(FrameReport {
            steps,
            panicked: overloaded,
            rendered: true,
        })
    }

    /// Drive frames from `host` until the host stops or the scheduler is
    /// paused. Starts the scheduler if needed. Returns the number of frames
    /// rendered.
    pub fn run<H: FrameHost>(
        &mut self,
        host: &mut H,
        world: &mut W,
    ) -> Result<u64, SchedulerError> {
        self.config.validate()?;
        self.start();

        let mut rendered = 0u64;
        while self.running {
            let Some(now) = host.next_frame() else {
                break;
            };
            if self.frame(now, world)?.rendered {
                rendered += 1;
            }
        }
        info!(frames = rendered, ticks = self.tick_id, panics = self.panics, "scheduler stopped");
        Ok(rendered)
    }

    /// Discard the backlog, as a pause and immediate resume would.
    fn recover(&mut self, world: &mut W, now: f64) {
        warn!(
            tick_id = self.tick_id,
            backlog_ms = self.delta,
            panic_limit = self.config.panic_limit,
            "simulation overloaded, discarding backlog"
        );
        self.delta = 0.0;
        self.last_run = Some(now);
        self.panics += 1;
        if let Some(panic) = self.panic.as_mut() {
            panic(world);
        }
    }

    fn sample_fps(&mut self, now: f64) {
        self.frames_this_second += 1;
        let Some(last) = self.last_fps_sample else {
            self.last_fps_sample = Some(now);
            return;
        };
        if now > last + FPS_SAMPLE_MS {
            self.fps = FPS_SMOOTHING * f64::from(self.frames_this_second)
                + (1.0 - FPS_SMOOTHING) * self.fps;
            self.frames_this_second = 0;
            self.last_fps_sample = Some(now);
        }
    }
}

impl<W> std::fmt::Debug for Scheduler<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("config", &self.config)
            .field("running", &self.running)
            .field("delta", &self.delta)
            .field("tick_id", &self.tick_id)
            .field("frame_id", &self.frame_id)
            .field("fps", &self.fps)
            .finish_non_exhaustive()
    }
}
