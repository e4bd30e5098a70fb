use thiserror::Error;

/// Errors reported by the estimator and its command-line front end.
///
/// Every variant is raised before the first random draw, so a failed run
/// never produces a partial estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The sample count was not a non-negative integer.
    #[error("invalid sample count '{0}': expected a non-negative integer")]
    InvalidSampleCount(String),

    /// A run was requested with zero samples.
    #[error("sample count must be at least 1")]
    ZeroSamples,

    /// More than one positional argument was supplied.
    #[error("expected at most one argument (the sample count), got {0}")]
    TooManyArguments(usize),

    /// A parallel run was requested with zero workers.
    #[error("invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    /// The sampling rectangle is empty or not finite.
    #[error("invalid bounding box [{x_min}, {x_max}] x [0, {height}]")]
    InvalidBoundingBox { x_min: f64, x_max: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
