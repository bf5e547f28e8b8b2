use thiserror::Error;

use crate::controllers::interactive::data::frame_data::FrameData;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render {generation} failed: {message}")]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Frame(frame) => frame.generation,
            Self::Error(error) => error.generation,
        }
    }
}
