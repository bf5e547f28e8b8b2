use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::field_computer::FieldComputer;
use crate::core::actions::compute_frame::render_config::RenderConfig;
use crate::core::data::frame_extrema::FrameExtrema;
use crate::core::data::view_params::ViewParameters;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Compute(#[from] ComputeFrameError),

    #[error("no frame has been rendered yet")]
    NoFrame,

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    pub width: u32,
    pub height: u32,
    pub extrema: FrameExtrema,
    pub duration: Duration,
}

/// Renders one view once and hands the result to file presenters.
pub struct SingleFrameController {
    computer: FieldComputer,
    view: ViewParameters,
    width: u32,
    height: u32,
}

impl SingleFrameController {
    pub fn new(config: RenderConfig, view: ViewParameters, width: u32, height: u32) -> Result<Self, CliError> {
        Ok(Self {
            computer: FieldComputer::new(config)?,
            view,
            width,
            height,
        })
    }

    #[must_use]
    pub fn view(&self) -> &ViewParameters {
        &self.view
    }

    pub fn generate(&mut self) -> Result<FrameSummary, CliError> {
        log::info!(
            "rendering {:?}/{:?} at {}x{}, {} max iterations, {} threads",
            self.view.family(),
            self.view.poly_degree(),
            self.width,
            self.height,
            self.view.max_iterations(),
            self.computer.config().thread_count,
        );

        let start = Instant::now();
        let frame = self.computer.compute_frame(&self.view, self.width, self.height)?;
        let duration = start.elapsed();

        log::info!("rendered in {duration:?}");

        Ok(FrameSummary {
            width: self.width,
            height: self.height,
            extrema: frame.extrema,
            duration,
        })
    }

    pub fn write<P: FilePresenterPort>(&self, presenter: &P, filepath: impl AsRef<Path>) -> Result<(), CliError> {
        let frame = self.computer.last_frame().ok_or(CliError::NoFrame)?;
        let filepath = filepath.as_ref();

        presenter.present(&frame, filepath).map_err(|source| CliError::Write {
            path: filepath.to_path_buf(),
            source,
        })?;

        log::info!("saved {}", filepath.display());
        Ok(())
    }
}
