use crate::core::data::colour::Colour;
use crate::core::data::frame_extrema::FrameExtrema;

pub trait ColourMap {
    fn map(&self, iterations: u32, extrema: FrameExtrema) -> Colour;

    fn display_name(&self) -> &str;
}
