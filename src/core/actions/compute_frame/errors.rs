use std::fmt;

use thiserror::Error;

use crate::core::actions::cancellation::Cancelled;
use crate::core::data::view_params::ViewParametersError;

/// Which half of a frame a worker was running.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramePhase {
    Iterate,
    Colour,
}

impl fmt::Display for FramePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iterate => write!(f, "iteration"),
            Self::Colour => write!(f, "colouring"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ComputeFrameError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    #[error("invalid view: {0}")]
    InvalidView(#[from] ViewParametersError),

    #[error("{failed} of {total} workers failed during the {phase} pass")]
    WorkerFailed {
        phase: FramePhase,
        failed: usize,
        total: usize,
    },

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    #[error("worker pool could not be built: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ComputeFrameError {
    /// Cancellation is expected control flow rather than a failure to report.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
