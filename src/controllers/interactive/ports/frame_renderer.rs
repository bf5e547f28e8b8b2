use crate::controllers::interactive::data::frame_data::RenderedFrame;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::field_computer::FieldComputer;

/// Produces frames on the render worker thread.
pub trait FrameRenderer: Send {
    fn render(
        &mut self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<RenderedFrame, ComputeFrameError>;
}

impl FrameRenderer for FieldComputer {
    fn render(
        &mut self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<RenderedFrame, ComputeFrameError> {
        self.set_colour_settings(request.colour);
        let frame = self.compute_frame_cancelable(&request.view, request.width, request.height, cancel)?;

        Ok(RenderedFrame {
            pixels: frame.pixels.clone(),
            colours: frame.colours.clone(),
            extrema: frame.extrema,
        })
    }
}
