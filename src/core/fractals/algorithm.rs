use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_params::{FractalFamily, ViewParameters};
use crate::core::fractals::escape_time::escape_iterations;

/// Escape-time evaluation of one frame's pixels for a fixed view and size.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    view: ViewParameters,
    half_width: i64,
    half_height: i64,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(view: ViewParameters, width: u32, height: u32) -> Self {
        Self {
            view,
            half_width: i64::from(width / 2),
            half_height: i64::from(height / 2),
        }
    }

    /// `center + (pixel - dimension / 2) * scale`, with integer halving so the
    /// pixel `(width / 2, height / 2)` lands exactly on the centre.
    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point) -> Complex {
        let center = self.view.center();
        let scale = self.view.scale();

        Complex {
            real: center.real + (i64::from(pixel.x) - self.half_width) as f64 * scale,
            imag: center.imag + (i64::from(pixel.y) - self.half_height) as f64 * scale,
        }
    }

    /// Iteration count for an arbitrary plane point under this view's family.
    #[must_use]
    pub fn compute_point(&self, point: Complex) -> u32 {
        let (z0, c) = match self.view.family() {
            FractalFamily::Mandelbrot => (Complex::ZERO, point),
            FractalFamily::Julia => (point, self.view.constant()),
        };

        escape_iterations(z0, c, self.view.poly_degree(), self.view.max_iterations())
    }

    #[must_use]
    pub fn view(&self) -> &ViewParameters {
        &self.view
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.view.max_iterations()
    }

    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        self.compute_point(self.pixel_to_plane(pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::view_params::PolyDegree;

    #[test]
    fn test_center_pixel_maps_to_view_center() {
        let mut view = ViewParameters::mandelbrot();
        view.set_center(Complex::new(-0.75, 0.1));
        let algorithm = EscapeTimeAlgorithm::new(view, 800, 600);

        assert_eq!(
            algorithm.pixel_to_plane(Point { x: 400, y: 300 }),
            Complex::new(-0.75, 0.1)
        );
    }

    #[test]
    fn test_odd_dimensions_use_integer_half() {
        let algorithm = EscapeTimeAlgorithm::new(ViewParameters::mandelbrot(), 5, 3);

        assert_eq!(algorithm.pixel_to_plane(Point { x: 2, y: 1 }), Complex::ZERO);
        assert_eq!(
            algorithm.pixel_to_plane(Point { x: 0, y: 0 }),
            Complex::new(-2.0 / 256.0, -1.0 / 256.0)
        );
    }

    #[test]
    fn test_mandelbrot_origin_reports_cap() {
        let algorithm = EscapeTimeAlgorithm::new(ViewParameters::mandelbrot(), 800, 800);

        assert_eq!(algorithm.compute(Point { x: 400, y: 400 }), 128);
    }

    #[test]
    fn test_mandelbrot_corner_escapes_quickly() {
        let algorithm = EscapeTimeAlgorithm::new(ViewParameters::mandelbrot(), 800, 800);

        assert!(algorithm.compute(Point { x: 0, y: 0 }) <= 3);
        assert!(algorithm.compute_point(Complex::new(2.5, 2.5)) <= 3);
    }

    #[test]
    fn test_julia_swaps_roles_of_point_and_constant() {
        let constant = Complex::new(0.285, 0.01);
        let julia = EscapeTimeAlgorithm::new(
            ViewParameters::julia(constant, PolyDegree::Quadratic),
            800,
            800,
        );
        let mandelbrot = EscapeTimeAlgorithm::new(ViewParameters::mandelbrot(), 800, 800);

        // The Julia origin iterates from z0 = 0 with c = constant, which is the
        // Mandelbrot orbit of the constant itself.
        assert!(julia.compute(Point { x: 400, y: 400 }) < 128);
        assert_eq!(
            julia.compute_point(Complex::ZERO),
            mandelbrot.compute_point(constant)
        );
        assert_eq!(mandelbrot.compute_point(Complex::ZERO), 128);
    }
}
