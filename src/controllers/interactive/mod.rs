//! Interactive rendering: a background worker that always renders the most
//! recent request, plus a session type that feeds it from navigation.
//!
//! - **Input**: [`RenderRequest`] values, or [`NavigationCommand`]s through
//!   [`ExplorerSession`]
//! - **Output**: [`RenderEvent`]s delivered to a [`FrameSink`]
//! - **Rendering**: any [`FrameRenderer`], normally a `FieldComputer`
//!
//! [`NavigationCommand`]: crate::core::navigation::commands::NavigationCommand

mod controller;
pub mod data;
pub mod events;
pub mod ports;
mod session;

pub use controller::InteractiveController;
pub use data::frame_data::{FrameData, RenderedFrame};
pub use data::render_request::RenderRequest;
pub use events::render::{RenderError, RenderEvent};
pub use ports::frame_renderer::FrameRenderer;
pub use ports::frame_sink::FrameSink;
pub use session::ExplorerSession;
