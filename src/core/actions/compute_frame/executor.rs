use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use rayon::prelude::*;

use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::render_config::{RenderConfig, WorkerStrategy};

pub(crate) type TaskResult<T> = Result<T, Box<dyn Any + Send>>;

/// Runs one task per block and joins them all before returning. Results come
/// back in block order; a panicking task yields `Err` instead of unwinding
/// into the caller.
pub(crate) enum BlockExecutor {
    Serial,
    ScopedThreads,
    RayonPool(rayon::ThreadPool),
}

impl BlockExecutor {
    pub(crate) fn new(config: &RenderConfig) -> Result<Self, ComputeFrameError> {
        Ok(match config.strategy {
            WorkerStrategy::Serial => Self::Serial,
            WorkerStrategy::ScopedThreads => Self::ScopedThreads,
            WorkerStrategy::RayonPool => Self::RayonPool(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.thread_count.get() as usize)
                    .thread_name(|index| format!("field-worker-{index}"))
                    .build()?,
            ),
        })
    }

    pub(crate) fn strategy(&self) -> WorkerStrategy {
        match self {
            Self::Serial => WorkerStrategy::Serial,
            Self::ScopedThreads => WorkerStrategy::ScopedThreads,
            Self::RayonPool(_) => WorkerStrategy::RayonPool,
        }
    }

    pub(crate) fn run<I, T, F>(&self, items: Vec<I>, task: F) -> Vec<TaskResult<T>>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Sync,
    {
        match self {
            Self::Serial => items
                .into_iter()
                .map(|item| panic::catch_unwind(AssertUnwindSafe(|| task(item))))
                .collect(),
            Self::ScopedThreads => thread::scope(|scope| {
                let task = &task;
                let handles: Vec<_> = items
                    .into_iter()
                    .map(|item| scope.spawn(move || task(item)))
                    .collect();

                handles.into_iter().map(|handle| handle.join()).collect()
            }),
            Self::RayonPool(pool) => pool.install(|| {
                items
                    .into_par_iter()
                    .map(|item| panic::catch_unwind(AssertUnwindSafe(|| task(item))))
                    .collect()
            }),
        }
    }
}
