pub mod csv;
pub mod ppm;
