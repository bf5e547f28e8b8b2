//! Interfaces between the render worker and the rest of the application.

pub mod frame_renderer;
pub mod frame_sink;
