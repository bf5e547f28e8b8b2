use crate::core::colour_mapping::settings::ColourSettings;
use crate::core::data::view_params::ViewParameters;

/// Everything the render worker needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub view: ViewParameters,
    pub width: u32,
    pub height: u32,
    pub colour: ColourSettings,
}
