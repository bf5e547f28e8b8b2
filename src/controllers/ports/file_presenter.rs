use std::path::Path;

use crate::core::actions::compute_frame::field_computer::Frame;

/// Writes one finished frame to a file.
pub trait FilePresenterPort {
    fn present(&self, frame: &Frame<'_>, filepath: impl AsRef<Path>) -> std::io::Result<()>;

    /// Conventional extension, without the dot.
    fn extension(&self) -> &'static str;
}
