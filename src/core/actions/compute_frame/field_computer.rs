use std::any::Any;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::compute_frame::errors::{ComputeFrameError, FramePhase};
use crate::core::actions::compute_frame::executor::{BlockExecutor, TaskResult};
use crate::core::actions::compute_frame::passes::{colour_block, iterate_block, split_rows, split_rows_mut};
use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::compute_frame::render_config::{RenderConfig, WorkerStrategy};
use crate::core::colour_mapping::hue_map::HueColourMap;
use crate::core::colour_mapping::settings::ColourSettings;
use crate::core::data::colour_field::ColourField;
use crate::core::data::frame_extrema::{reduce_extrema, FrameExtrema};
use crate::core::data::pixel_field::PixelField;
use crate::core::data::view_params::ViewParameters;
use crate::core::data::work_block::partition_rows;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;

/// A finished frame, borrowed from the [`FieldComputer`] that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub pixels: &'a PixelField,
    pub colours: &'a ColourField,
    pub extrema: FrameExtrema,
}

/// Computes frames into buffers it keeps across calls.
///
/// A frame is computed in two passes over the same row partition. The first
/// fills the iteration counts and returns per-block extrema; after every block
/// has joined, the extrema are merged and the second pass writes colours. A
/// frame that fails or is cancelled is never published: [`Self::last_frame`]
/// returns `None` until the next successful frame.
pub struct FieldComputer {
    config: RenderConfig,
    executor: BlockExecutor,
    pixels: PixelField,
    colours: ColourField,
    published: Option<FrameExtrema>,
}

impl FieldComputer {
    pub fn new(config: RenderConfig) -> Result<Self, ComputeFrameError> {
        Ok(Self {
            executor: BlockExecutor::new(&config)?,
            config,
            pixels: PixelField::new(0, 0),
            colours: ColourField::new(0, 0),
            published: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> WorkerStrategy {
        self.executor.strategy()
    }

    /// Applies to frames computed after this call.
    pub fn set_colour_settings(&mut self, colour: ColourSettings) {
        self.config.colour = colour;
    }

    pub fn compute_frame(
        &mut self,
        view: &ViewParameters,
        width: u32,
        height: u32,
    ) -> Result<Frame<'_>, ComputeFrameError> {
        self.compute_frame_cancelable(view, width, height, &NeverCancel)
    }

    pub fn compute_frame_cancelable<C: CancelToken + ?Sized>(
        &mut self,
        view: &ViewParameters,
        width: u32,
        height: u32,
        cancel: &C,
    ) -> Result<Frame<'_>, ComputeFrameError> {
        self.published = None;
        validate_request(view, width, height)?;

        let algorithm = EscapeTimeAlgorithm::new(*view, width, height);
        let colour_map = HueColourMap::new(self.config.colour);

        self.compute_frame_with(&algorithm, &colour_map, width, height, cancel)
    }

    /// Runs both passes with caller-supplied ports.
    pub fn compute_frame_with<A, M, C>(
        &mut self,
        algorithm: &A,
        colour_map: &M,
        width: u32,
        height: u32,
        cancel: &C,
    ) -> Result<Frame<'_>, ComputeFrameError>
    where
        A: FractalAlgorithm + Sync,
        M: ColourMap + Sync,
        C: CancelToken + ?Sized,
    {
        self.published = None;
        validate_dimensions(width, height)?;

        let started = Instant::now();
        let blocks = partition_rows(height, self.config.thread_count);
        let row_len = width as usize;

        self.pixels.resize(width, height);
        self.colours.resize(width, height);

        let items: Vec<_> = blocks
            .iter()
            .copied()
            .zip(split_rows_mut(self.pixels.as_mut_slice(), row_len, &blocks))
            .collect();
        let results = self.executor.run(items, |(block, iterations)| {
            iterate_block(algorithm, block, row_len, iterations, cancel)
        });
        let block_extrema = join_blocks(FramePhase::Iterate, results)?;
        let extrema = reduce_extrema(algorithm.max_iterations(), block_extrema);

        let stride = self.colours.stride();
        let items: Vec<_> = split_rows(self.pixels.as_slice(), row_len, &blocks)
            .into_iter()
            .zip(split_rows_mut(self.colours.as_mut_bytes(), stride, &blocks))
            .collect();
        let results = self.executor.run(items, |(iterations, rgb)| {
            colour_block(colour_map, extrema, row_len, stride, iterations, rgb, cancel)
        });
        join_blocks(FramePhase::Colour, results)?;

        log::debug!(
            "computed {}x{} frame in {} blocks ({:?}, colours: {}) in {:?}, iterations {}..={}",
            width,
            height,
            blocks.len(),
            self.executor.strategy(),
            colour_map.display_name(),
            started.elapsed(),
            extrema.min_iter(),
            extrema.max_iter()
        );

        self.published = Some(extrema);
        Ok(self.frame(extrema))
    }

    /// The most recent frame, if the last computation succeeded.
    #[must_use]
    pub fn last_frame(&self) -> Option<Frame<'_>> {
        self.published.map(|extrema| self.frame(extrema))
    }

    fn frame(&self, extrema: FrameExtrema) -> Frame<'_> {
        Frame {
            pixels: &self.pixels,
            colours: &self.colours,
            extrema,
        }
    }

    fn into_buffers(self) -> (PixelField, ColourField) {
        (self.pixels, self.colours)
    }
}

/// One-shot frame computation with a freshly built [`FieldComputer`].
///
/// Configuration errors are reported before any worker is started.
pub fn compute_frame(
    view: ViewParameters,
    width: u32,
    height: u32,
    thread_count: u32,
) -> Result<(PixelField, ColourField, FrameExtrema), ComputeFrameError> {
    validate_request(&view, width, height)?;

    let mut computer = FieldComputer::new(RenderConfig::with_thread_count(thread_count)?)?;
    let extrema = computer.compute_frame(&view, width, height)?.extrema;
    let (pixels, colours) = computer.into_buffers();

    Ok((pixels, colours, extrema))
}

fn validate_dimensions(width: u32, height: u32) -> Result<(), ComputeFrameError> {
    if width == 0 || height == 0 {
        return Err(ComputeFrameError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn validate_request(view: &ViewParameters, width: u32, height: u32) -> Result<(), ComputeFrameError> {
    validate_dimensions(width, height)?;
    view.validate()?;
    Ok(())
}

/// Collects block results after the join. Panicked blocks are counted into a
/// single error; otherwise any cancelled block cancels the frame.
fn join_blocks<T>(
    phase: FramePhase,
    results: Vec<TaskResult<Result<T, Cancelled>>>,
) -> Result<Vec<T>, ComputeFrameError> {
    let total = results.len();
    let mut values = Vec::with_capacity(total);
    let mut failed = 0;
    let mut cancelled = false;

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(Ok(value)) => values.push(value),
            Ok(Err(Cancelled)) => cancelled = true,
            Err(payload) => {
                failed += 1;
                log::error!("block {index} panicked during {phase} pass: {}", panic_message(payload.as_ref()));
            }
        }
    }

    if failed > 0 {
        return Err(ComputeFrameError::WorkerFailed {
            phase,
            failed,
            total,
        });
    }
    if cancelled {
        log::debug!("frame cancelled during {phase} pass");
        return Err(Cancelled.into());
    }

    Ok(values)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
