pub mod colour;
pub mod colour_field;
pub mod complex;
pub mod frame_extrema;
pub mod pixel_field;
pub mod point;
pub mod view_params;
pub mod work_block;
