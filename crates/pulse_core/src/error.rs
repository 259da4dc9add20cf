use thiserror::Error;

/// Precondition failures surfaced by the driver and sampler entry points.
/// The per-step numeric loops never construct these; everything is checked
/// once before stepping begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("buffer `{name}` has length {got}, expected {expected}")]
    BufferSize {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("time grid must hold at least two samples, got {got}")]
    TimeGridTooShort { got: usize },

    #[error("num_timesteps must be at least 1")]
    NoTimesteps,

    #[error("monitored index {index} out of range for a model with {count} monitored expressions")]
    MonitorIndexOutOfRange { index: usize, count: usize },
}
