use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::data::view_params::PolyDegree;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of updates of `z ↦ f(z) + c` from `z0` until `|z|² ≥ 4`, or
/// `max_iterations` if the orbit stays bounded that long.
///
/// The escape test runs after every update, so a point that starts outside
/// the radius still reports `1`. There is no guard against overflow; a
/// non-finite orbit simply never passes the test and the cap ends the loop.
#[must_use]
pub fn escape_iterations(z0: Complex, c: Complex, degree: PolyDegree, max_iterations: u32) -> u32 {
    match degree {
        PolyDegree::Quadratic => iterate(z0, max_iterations, |z| z * z + c),
        PolyDegree::CubicExp => iterate(z0, max_iterations, |z| z.cube().exp() + c),
    }
}

#[inline]
fn iterate(z0: Complex, max_iterations: u32, step: impl Fn(Complex) -> Complex) -> u32 {
    let outcome = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let next = step(z);
        if next.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes_in_mandelbrot_mode() {
        let result = escape_iterations(Complex::ZERO, Complex::ZERO, PolyDegree::Quadratic, 128);
        assert_eq!(result, 128);
    }

    #[test]
    fn test_far_point_escapes_on_first_update() {
        let c = Complex::new(2.5, 2.5);
        let result = escape_iterations(Complex::ZERO, c, PolyDegree::Quadratic, 128);
        assert_eq!(result, 1);
    }

    #[test]
    fn test_minus_one_is_periodic_and_bounded() {
        let c = Complex::new(-1.0, 0.0);
        let result = escape_iterations(Complex::ZERO, c, PolyDegree::Quadratic, 500);
        assert_eq!(result, 500);
    }

    #[test]
    fn test_julia_origin_escapes_for_known_constant() {
        let c = Complex::new(0.285, 0.01);
        let result = escape_iterations(Complex::ZERO, c, PolyDegree::Quadratic, 128);

        assert!(result > 1);
        assert!(result < 128);
    }

    #[test]
    fn test_escape_on_radius_boundary_counts_as_escaped() {
        // 0² + 2 = 2, |2|² = 4
        let c = Complex::new(2.0, 0.0);
        let result = escape_iterations(Complex::ZERO, c, PolyDegree::Quadratic, 128);
        assert_eq!(result, 1);
    }

    #[test]
    fn test_cubic_exp_escapes_within_cap() {
        let c = Complex::new(-0.621, 0.0);
        let result = escape_iterations(Complex::ZERO, c, PolyDegree::CubicExp, 128);

        assert!(result > 1);
        assert!(result < 128);
    }

    #[test]
    fn test_cubic_exp_update_is_exp_of_cube_plus_c() {
        // z1 = exp(1³) + 0 = e > 2
        let result =
            escape_iterations(Complex::new(1.0, 0.0), Complex::ZERO, PolyDegree::CubicExp, 128);
        assert_eq!(result, 1);
    }

    #[test]
    fn test_result_never_exceeds_cap() {
        for degree in [PolyDegree::Quadratic, PolyDegree::CubicExp] {
            for step in -20..=20 {
                let z0 = Complex::new(f64::from(step) * 0.15, f64::from(step) * -0.07);
                let c = Complex::new(-0.4, 0.6);
                let result = escape_iterations(z0, c, degree, 200);

                assert!(result <= 200, "{degree:?} {z0:?} gave {result}");
            }
        }
    }

    #[test]
    fn test_zero_cap_returns_zero() {
        let result = escape_iterations(Complex::ZERO, Complex::new(3.0, 0.0), PolyDegree::Quadratic, 0);
        assert_eq!(result, 0);
    }
}
