use std::time::Duration;

use crate::core::data::colour_field::ColourField;
use crate::core::data::frame_extrema::FrameExtrema;
use crate::core::data::pixel_field::PixelField;
use crate::core::data::view_params::ViewParameters;

/// Buffers of one completed frame, detached from the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub pixels: PixelField,
    pub colours: ColourField,
    pub extrema: FrameExtrema,
}

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    /// The view actually rendered. After a worker failure this is the last
    /// view that rendered successfully, not the requested one.
    pub view: ViewParameters,
    pub recovered: bool,
    pub frame: RenderedFrame,
    pub render_duration: Duration,
}
