pub mod animator;
pub mod commands;
pub mod limits;
pub mod navigator;
pub mod state;
