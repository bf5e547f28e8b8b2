pub mod cancellation;
pub mod compute_frame;
