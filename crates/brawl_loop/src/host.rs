//! Frame opportunity sources.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// The host primitive that yields the next frame opportunity.
pub trait FrameHost {
    /// Block until the next frame and return its timestamp in milliseconds,
    /// or `None` when the host is shutting down.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Replays a fixed list of timestamps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    frames: VecDeque<f64>,
}

impl ScriptedHost {
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = f64>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Timestamps `start, start + step, ...`, `count` of them.
    #[must_use]
    pub fn evenly_spaced(start: f64, step: f64, count: usize) -> Self {
        Self::new((0..count).map(|i| start + step * i as f64))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameHost for ScriptedHost {
    fn next_frame(&mut self) -> Option<f64> {
        self.frames.pop_front()
    }
}

/// Paces frames against the wall clock, sleeping between them.
#[derive(Debug)]
pub struct ClockHost {
    epoch: Instant,
    frame: Duration,
    next: Instant,
    remaining: Option<u64>,
}

impl ClockHost {
    /// A host producing a frame every `frame`, forever.
    #[must_use]
    pub fn new(frame: Duration) -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            frame,
            next: now,
            remaining: None,
        }
    }

    /// Stop after `frames` frames.
    #[must_use]
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl FrameHost for ClockHost {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        }
        self.next += self.frame;

        Some(self.epoch.elapsed().as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_host_replays_in_order() {
        let mut host = ScriptedHost::evenly_spaced(100.0, 10.0, 3);
        assert_eq!(host.remaining(), 3);
        assert_eq!(host.next_frame(), Some(100.0));
        assert_eq!(host.next_frame(), Some(110.0));
        assert_eq!(host.next_frame(), Some(120.0));
        assert_eq!(host.next_frame(), None);
    }

    #[test]
    fn test_clock_host_limit_and_monotonic_time() {
        let mut host = ClockHost::new(Duration::from_millis(1)).with_frame_limit(3);
        let mut last = -1.0;
        for _ in 0..3 {
            let now = host.next_frame().unwrap();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(host.next_frame(), None);
    }
}
