//! Scheduler error types.

/// Errors returned by the scheduler.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// A frame was run before a required callback was installed.
    #[error("scheduler is missing its {0} callback")]
    MissingCallback(&'static str),

    /// The configuration cannot drive a loop.
    #[error("invalid scheduler configuration: {0}")]
    InvalidConfig(String),
}
