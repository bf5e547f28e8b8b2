use crate::controllers::interactive::events::render::RenderEvent;

/// Receives frames and errors from the render worker thread.
pub trait FrameSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}
