//! Single-frame rendering for the command line.

mod single_frame;

pub use single_frame::{CliError, FrameSummary, SingleFrameController};
