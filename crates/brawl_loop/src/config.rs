//! Scheduler configuration.

use crate::error::SchedulerError;

/// Configuration for the fixed-timestep scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    /// Simulation ticks per second.
    pub fps: f64,
    /// Ticks allowed in one frame before the backlog is discarded.
    pub panic_limit: u32,
}

impl SchedulerConfig {
    #[must_use]
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    #[must_use]
    pub fn with_panic_limit(mut self, panic_limit: u32) -> Self {
        self.panic_limit = panic_limit;
        self
    }

    /// Length of one tick in milliseconds.
    #[must_use]
    pub fn interval(&self) -> f64 {
        1000.0 / self.fps
    }

    /// Reject values that cannot drive a loop.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(SchedulerError::InvalidConfig(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        if self.panic_limit == 0 {
            return Err(SchedulerError::InvalidConfig(
                "panic_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            panic_limit: 240,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.fps, 60.0);
        assert_eq!(config.panic_limit, 240);
        assert!((config.interval() - 16.666_666).abs() < 1e-3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonsense() {
        assert!(SchedulerConfig::default().with_fps(0.0).validate().is_err());
        assert!(SchedulerConfig::default().with_fps(f64::NAN).validate().is_err());
        assert!(SchedulerConfig::default().with_panic_limit(0).validate().is_err());
    }
}
