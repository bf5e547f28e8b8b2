use std::num::NonZeroU32;
use std::thread;

use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::colour_mapping::settings::ColourSettings;

/// Used when the number of logical CPUs cannot be detected.
pub const DEFAULT_THREAD_COUNT: NonZeroU32 = NonZeroU32::new(4).unwrap();

/// How the blocks of one frame are executed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum WorkerStrategy {
    /// Every block on the calling thread, in order.
    Serial,
    /// Fresh scoped threads per frame, one per block, joined before returning.
    ScopedThreads,
    /// A persistent rayon pool sized to the thread count.
    #[default]
    RayonPool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub thread_count: NonZeroU32,
    pub strategy: WorkerStrategy,
    pub colour: ColourSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            thread_count: detect_thread_count(),
            strategy: WorkerStrategy::default(),
            colour: ColourSettings::default(),
        }
    }
}

impl RenderConfig {
    /// Default configuration with an explicit worker count; zero is rejected.
    pub fn with_thread_count(thread_count: u32) -> Result<Self, ComputeFrameError> {
        Ok(Self {
            thread_count: NonZeroU32::new(thread_count).ok_or(ComputeFrameError::InvalidThreadCount)?,
            ..Self::default()
        })
    }
}

/// Logical CPU count, or [`DEFAULT_THREAD_COUNT`] if it cannot be determined.
#[must_use]
pub fn detect_thread_count() -> NonZeroU32 {
    match thread::available_parallelism() {
        Ok(count) => u32::try_from(count.get())
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(DEFAULT_THREAD_COUNT),
        Err(err) => {
            log::warn!("could not detect CPU count ({err}), using {DEFAULT_THREAD_COUNT} workers");
            DEFAULT_THREAD_COUNT
        }
    }
}
