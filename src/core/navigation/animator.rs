use crate::core::data::complex::Complex;
use crate::core::navigation::limits::AnimationLimits;
use crate::core::navigation::state::{ViewState, ViewTargets};

/// One smoothing tick: moves every animated quantity a fixed fraction of the
/// way towards its target and reports whether the result still differs
/// enough from the targets to warrant another frame.
///
/// The stop threshold is `stop_fraction * scale`. Centre deltas are scaled by
/// `scale` before the comparison; constant and scale deltas are compared
/// directly. Any difference in the iteration cap always needs a frame.
#[must_use]
pub fn advance(state: ViewState, targets: &ViewTargets, limits: &AnimationLimits) -> (ViewState, bool) {
    let next = ViewState {
        center: approach(state.center, targets.center, limits.center_divisor),
        scale: state.scale + (targets.scale - state.scale) / limits.scale_divisor,
        constant: approach(state.constant, targets.constant, limits.constant_divisor),
        max_iterations: step_iterations(state.max_iterations, targets.max_iterations),
    };

    let stop = limits.stop_fraction * next.scale;
    let center_delta = next.center - targets.center;
    let constant_delta = next.constant - targets.constant;

    let needs_recompute = (next.scale - targets.scale).abs() > stop
        || constant_delta.real.abs() > stop
        || constant_delta.imag.abs() > stop
        || center_delta.real.abs() * next.scale > stop
        || center_delta.imag.abs() * next.scale > stop
        || next.max_iterations != targets.max_iterations;

    (next, needs_recompute)
}

fn approach(current: Complex, target: Complex, divisor: f64) -> Complex {
    current + (target - current).scale(divisor.recip())
}

/// Halves the remaining distance, finishing outright once only one step is
/// left so the cap always reaches its target.
fn step_iterations(current: u32, target: u32) -> u32 {
    let delta = i64::from(target) - i64::from(current);
    let step = match delta / 2 {
        0 => delta,
        half => half,
    };

    u32::try_from(i64::from(current) + step).unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn state() -> ViewState {
        ViewState {
            center: Complex::ZERO,
            scale: 1.0 / 256.0,
            constant: Complex::ZERO,
            max_iterations: 128,
        }
    }

    #[test]
    fn settled_state_needs_no_frame() {
        let current = state();

        let (next, needs_recompute) = advance(current, &ViewTargets::from(current), &AnimationLimits::default());

        assert_eq!(next, current);
        assert!(!needs_recompute);
    }

    #[test]
    fn quantities_move_by_their_divisors() {
        let targets = ViewTargets {
            center: Complex::new(0.8, -1.6),
            scale: 1.0 / 128.0,
            constant: Complex::new(0.4, 0.08),
            max_iterations: 256,
        };

        let (next, needs_recompute) = advance(state(), &targets, &AnimationLimits::default());

        assert_approx_eq(next.center.real, 0.1);
        assert_approx_eq(next.center.imag, -0.2);
        assert_approx_eq(next.constant.real, 0.05);
        assert_approx_eq(next.constant.imag, 0.01);
        assert_approx_eq(next.scale, 1.0 / 256.0 + (1.0 / 256.0) / 4.0);
        assert_eq!(next.max_iterations, 192);
        assert!(needs_recompute);
    }

    #[test]
    fn centre_moves_towards_target_rather_than_jumping() {
        let mut current = state();
        current.center = Complex::new(1.0, 1.0);
        let targets = ViewTargets {
            center: Complex::new(1.8, 1.0),
            ..ViewTargets::from(current)
        };

        let (next, _) = advance(current, &targets, &AnimationLimits::default());

        assert_approx_eq(next.center.real, 1.1);
        assert_approx_eq(next.center.imag, 1.0);
    }

    #[test]
    fn iteration_cap_converges_exactly() {
        let limits = AnimationLimits::default();
        let mut current = state();
        let targets = ViewTargets {
            max_iterations: 136,
            ..ViewTargets::from(current)
        };

        let mut seen = Vec::new();
        for _ in 0..5 {
            let (next, _) = advance(current, &targets, &limits);
            current = next;
            seen.push(current.max_iterations);
        }

        assert_eq!(seen, vec![132, 134, 135, 136, 136]);
    }

    #[test]
    fn iteration_cap_can_decrease() {
        assert_eq!(step_iterations(256, 128), 192);
        assert_eq!(step_iterations(129, 128), 128);
    }

    #[test]
    fn iteration_mismatch_alone_forces_frame() {
        let current = state();
        let targets = ViewTargets {
            max_iterations: 4096,
            ..ViewTargets::from(current)
        };

        let (_, needs_recompute) = advance(current, &targets, &AnimationLimits::default());

        assert!(needs_recompute);
    }

    #[test]
    fn small_centre_delta_is_below_threshold() {
        let current = state();
        // 0.005 * scale is well under 0.01 * scale.
        let targets = ViewTargets {
            center: Complex::new(0.005, 0.0),
            ..ViewTargets::from(current)
        };

        let (_, needs_recompute) = advance(current, &targets, &AnimationLimits::default());

        assert!(!needs_recompute);
    }

    #[test]
    fn animation_settles_after_zoom() {
        let limits = AnimationLimits::default();
        let mut current = state();
        let targets = ViewTargets {
            scale: current.scale / 2.0,
            constant: Complex::new(0.285, 0.01),
            ..ViewTargets::from(current)
        };

        let mut ticks = 0;
        loop {
            let (next, needs_recompute) = advance(current, &targets, &limits);
            current = next;
            ticks += 1;
            if !needs_recompute {
                break;
            }
            assert!(ticks < 200, "animation never settled");
        }

        assert!((current.scale - targets.scale).abs() <= limits.stop_fraction * current.scale);
        assert!((current.constant.real - 0.285).abs() <= limits.stop_fraction * current.scale);
    }
}
