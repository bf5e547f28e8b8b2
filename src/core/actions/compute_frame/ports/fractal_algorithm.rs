use crate::core::data::point::Point;

/// Per-pixel iteration counter driven by the frame computer.
///
/// Implementations are shared across workers, so `compute` must be pure.
pub trait FractalAlgorithm {
    /// Upper bound of any value [`FractalAlgorithm::compute`] returns.
    fn max_iterations(&self) -> u32;

    fn compute(&self, pixel: Point) -> u32;
}
