pub mod errors;
mod executor;
pub mod field_computer;
mod passes;
pub mod ports;
pub mod render_config;
