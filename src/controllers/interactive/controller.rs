use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render::{RenderError, RenderEvent};
use crate::controllers::interactive::ports::frame_renderer::FrameRenderer;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::field_computer::FieldComputer;
use crate::core::actions::compute_frame::render_config::RenderConfig;
use crate::core::data::view_params::ViewParameters;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

/// Renders requests on a background thread, newest request wins.
///
/// Each submission bumps a generation counter. The frame in flight polls the
/// counter and stops as soon as a newer request arrives; a frame that still
/// completes after being superseded is dropped. If the workers of a frame
/// fail, an error event is emitted and the last view that rendered
/// successfully is rendered again in its place.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(renderer: impl FrameRenderer + 'static, sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, renderer);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Renders with a [`FieldComputer`] built from `config`.
    pub fn with_config(config: RenderConfig, sink: Arc<dyn FrameSink>) -> Result<Self, ComputeFrameError> {
        Ok(Self::new(FieldComputer::new(config)?, sink))
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.last_completed_generation.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState, mut renderer: impl FrameRenderer) {
        let mut last_good_view: Option<ViewParameters> = None;

        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared.wake.wait(guard).unwrap_or_else(PoisonError::into_inner);
                }
            };

            let superseded = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = renderer.render(&request, &superseded);

            match result {
                Ok(frame) => {
                    if superseded() {
                        continue;
                    }

                    last_good_view = Some(request.view);
                    Self::complete(
                        shared,
                        RenderEvent::Frame(FrameData {
                            generation: job_generation,
                            view: request.view,
                            recovered: false,
                            frame,
                            render_duration: start.elapsed(),
                        }),
                    );
                }
                Err(err) if err.is_cancelled() => continue,
                Err(err) => {
                    if superseded() {
                        continue;
                    }

                    log::error!("render {job_generation} failed: {err}");
                    let retry_view = match err {
                        ComputeFrameError::WorkerFailed { .. } => last_good_view,
                        _ => None,
                    };

                    shared.sink.present(RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    }));

                    let Some(view) = retry_view else {
                        shared
                            .last_completed_generation
                            .store(job_generation, Ordering::Release);
                        continue;
                    };

                    let retry = RenderRequest { view, ..request };
                    match renderer.render(&retry, &superseded) {
                        Ok(frame) if !superseded() => Self::complete(
                            shared,
                            RenderEvent::Frame(FrameData {
                                generation: job_generation,
                                view,
                                recovered: true,
                                frame,
                                render_duration: start.elapsed(),
                            }),
                        ),
                        Ok(_) => {}
                        Err(retry_err) => {
                            log::warn!("re-render of previous view failed: {retry_err}");
                            shared
                                .last_completed_generation
                                .store(job_generation, Ordering::Release);
                        }
                    }
                }
            }
        }
    }

    fn complete(shared: &SharedState, event: RenderEvent) {
        shared
            .last_completed_generation
            .store(event.generation(), Ordering::Release);
        shared.sink.present(event);
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
