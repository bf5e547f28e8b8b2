//! Parallel escape-time field engine for Mandelbrot and Julia fractals.
//!
//! [`compute_frame`] renders a single view. [`FieldComputer`] keeps its
//! buffers and worker pool across frames, and [`InteractiveController`]
//! renders the newest of a stream of requests on a background thread.

pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::cli::{CliError, FrameSummary, SingleFrameController};
pub use controllers::interactive::{
    ExplorerSession, FrameData, FrameRenderer, FrameSink, InteractiveController, RenderEvent,
    RenderRequest, RenderedFrame,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::compute_frame::errors::{ComputeFrameError, FramePhase};
pub use crate::core::actions::compute_frame::field_computer::{compute_frame, FieldComputer, Frame};
pub use crate::core::actions::compute_frame::render_config::{RenderConfig, WorkerStrategy};
pub use crate::core::colour_mapping::hue_map::HueColourMap;
pub use crate::core::colour_mapping::settings::ColourSettings;
pub use crate::core::data::colour_field::ColourField;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_extrema::FrameExtrema;
pub use crate::core::data::pixel_field::PixelField;
pub use crate::core::data::view_params::{FractalFamily, PolyDegree, ViewParameters, ViewParametersError};
pub use crate::core::fractals::presets::FractalPreset;
pub use crate::core::navigation::commands::NavigationCommand;
pub use crate::core::navigation::navigator::Navigator;
pub use presenters::file::csv::CsvFilePresenter;
pub use presenters::file::ppm::{read_ppm_file, PpmError, PpmFilePresenter};
