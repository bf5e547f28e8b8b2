use crate::core::colour_mapping::settings::ColourSettings;
use crate::core::data::complex::Complex;
use crate::core::data::view_params::{
    clamp_max_iterations, FractalFamily, PolyDegree, ViewParameters, ViewParametersError,
    DEFAULT_SCALE, MIN_MAX_ITERATIONS,
};
use crate::core::fractals::presets::FractalPreset;
use crate::core::navigation::animator::advance;
use crate::core::navigation::commands::{
    ConstantAxis, NavigationCommand, PanDirection, POINTER_ZOOM_FACTOR,
};
use crate::core::navigation::limits::AnimationLimits;
use crate::core::navigation::state::{ViewState, ViewTargets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandReport {
    /// Targets moved; ticks will animate towards them.
    pub targets_changed: bool,
    /// The displayed view changed without animation and needs a frame now.
    pub view_changed: bool,
    pub colours_changed: bool,
}

impl CommandReport {
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.view_changed || self.colours_changed
    }
}

/// Navigation state of an interactive session: the displayed view, its
/// targets, the fractal being explored and the colouring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    state: ViewState,
    targets: ViewTargets,
    family: FractalFamily,
    poly_degree: PolyDegree,
    colour: ColourSettings,
    limits: AnimationLimits,
}

impl Navigator {
    #[must_use]
    pub fn new(view: &ViewParameters, limits: AnimationLimits) -> Self {
        let state = ViewState::from(view);

        Self {
            state,
            targets: state.into(),
            family: view.family(),
            poly_degree: view.poly_degree(),
            colour: ColourSettings::default(),
            limits,
        }
    }

    #[must_use]
    pub fn from_preset(preset: FractalPreset) -> Self {
        Self::new(&preset.view(), AnimationLimits::default())
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn targets(&self) -> ViewTargets {
        self.targets
    }

    #[must_use]
    pub fn colour(&self) -> ColourSettings {
        self.colour
    }

    /// Snapshot of the displayed view for the frame computer.
    pub fn view_parameters(&self) -> Result<ViewParameters, ViewParametersError> {
        ViewParameters::new(
            self.state.center,
            self.state.scale,
            self.state.max_iterations,
            self.family,
            self.poly_degree,
            self.state.constant,
        )
    }

    /// Advances the displayed view one smoothing step; returns whether a new
    /// frame is warranted.
    pub fn tick(&mut self) -> bool {
        let (next, needs_recompute) = advance(self.state, &self.targets, &self.limits);
        self.state = next;
        needs_recompute
    }

    pub fn apply(&mut self, command: NavigationCommand) -> CommandReport {
        let mut report = CommandReport::default();
        let scale = self.state.scale;

        match command {
            NavigationCommand::Pan(direction, step) => {
                let distance = step.pan_pixels() * scale;
                match direction {
                    PanDirection::Left => self.targets.center.real -= distance,
                    PanDirection::Right => self.targets.center.real += distance,
                    PanDirection::Down => self.targets.center.imag -= distance,
                    PanDirection::Up => self.targets.center.imag += distance,
                }
                report.targets_changed = true;
            }
            NavigationCommand::ZoomIn(step) => {
                self.set_target_scale(self.targets.scale / step.zoom_factor());
                report.targets_changed = true;
            }
            NavigationCommand::ZoomOut(step) => {
                self.set_target_scale(self.targets.scale * step.zoom_factor());
                report.targets_changed = true;
            }
            NavigationCommand::ZoomTowards {
                offset_x,
                offset_y,
                zoom_in,
            } => {
                let factor = if zoom_in {
                    POINTER_ZOOM_FACTOR.recip()
                } else {
                    POINTER_ZOOM_FACTOR
                };
                self.set_target_scale(self.targets.scale * factor);
                self.targets.center.real += offset_x * scale;
                self.targets.center.imag -= offset_y * scale;
                report.targets_changed = true;
            }
            NavigationCommand::MoreIterations(step) => {
                self.targets.max_iterations = clamp_max_iterations(
                    self.targets.max_iterations.saturating_add(step.iteration_step()),
                );
                report.targets_changed = true;
            }
            NavigationCommand::FewerIterations(step) => {
                self.targets.max_iterations = clamp_max_iterations(
                    self.targets.max_iterations.saturating_sub(step.iteration_step()),
                );
                report.targets_changed = true;
            }
            NavigationCommand::SetIterations(max_iterations) => {
                self.targets.max_iterations = clamp_max_iterations(max_iterations);
                report.targets_changed = true;
            }
            NavigationCommand::NudgeConstant { axis, grow, step } => {
                let factor = step.constant_factor(axis);
                let component = self.target_constant_mut(axis);
                if grow {
                    *component *= factor;
                } else {
                    *component /= factor;
                }
                report.targets_changed = true;
            }
            NavigationCommand::NegateConstant(axis) => {
                let component = self.target_constant_mut(axis);
                *component = -*component;
                report.targets_changed = true;
            }
            NavigationCommand::Reset => {
                self.state.center = Complex::ZERO;
                self.state.scale = DEFAULT_SCALE;
                self.state.constant = self.targets.constant;
                self.targets = self.state.into();
                report.view_changed = true;
            }
            NavigationCommand::SelectPreset(preset) => {
                self.select_preset(preset);
                report.view_changed = true;
                report.targets_changed = true;
            }
            NavigationCommand::ToggleInvert => {
                self.colour.toggle_invert();
                report.colours_changed = true;
            }
            NavigationCommand::ToggleMonochrome => {
                self.colour.toggle_saturated();
                report.colours_changed = true;
            }
            NavigationCommand::RotateColours => {
                self.colour.rotate();
                report.colours_changed = true;
            }
        }

        report
    }

    fn set_target_scale(&mut self, scale: f64) {
        self.targets.scale = self.limits.clamp_scale(scale);
    }

    fn target_constant_mut(&mut self, axis: ConstantAxis) -> &mut f64 {
        match axis {
            ConstantAxis::Real => &mut self.targets.constant.real,
            ConstantAxis::Imaginary => &mut self.targets.constant.imag,
        }
    }

    /// Jumps straight to the preset's framing; only a Julia constant is
    /// animated towards.
    fn select_preset(&mut self, preset: FractalPreset) {
        let view = preset.view();

        self.family = view.family();
        self.poly_degree = view.poly_degree();
        self.state.center = Complex::ZERO;
        self.state.scale = DEFAULT_SCALE;
        self.state.max_iterations = MIN_MAX_ITERATIONS;
        if view.family() == FractalFamily::Mandelbrot {
            self.state.constant = Complex::ZERO;
        }

        self.targets = ViewTargets {
            constant: view.constant(),
            ..ViewTargets::from(self.state)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::commands::Step;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn navigator() -> Navigator {
        Navigator::from_preset(FractalPreset::Mandelbrot)
    }

    #[test]
    fn pans_move_targets_by_pixels_times_scale() {
        let mut nav = navigator();

        let report = nav.apply(NavigationCommand::Pan(PanDirection::Right, Step::Coarse));
        nav.apply(NavigationCommand::Pan(PanDirection::Up, Step::Fine));

        assert!(report.targets_changed);
        assert!(!report.needs_frame());
        assert_approx_eq(nav.targets().center.real, 50.0 / 256.0);
        assert_approx_eq(nav.targets().center.imag, 4.0 / 256.0);
        assert_eq!(nav.state().center, Complex::ZERO);
    }

    #[test]
    fn zoom_in_halves_and_fine_zoom_uses_five_percent() {
        let mut nav = navigator();

        nav.apply(NavigationCommand::ZoomIn(Step::Coarse));
        assert_approx_eq(nav.targets().scale, 1.0 / 512.0);

        nav.apply(NavigationCommand::ZoomOut(Step::Fine));
        assert_approx_eq(nav.targets().scale, 1.05 / 512.0);
    }

    #[test]
    fn zoom_out_is_bounded() {
        let mut nav = navigator();

        for _ in 0..100 {
            nav.apply(NavigationCommand::ZoomOut(Step::Coarse));
        }

        assert_eq!(nav.targets().scale, AnimationLimits::default().max_scale);
    }

    #[test]
    fn zoom_towards_recentres_on_pointer() {
        let mut nav = navigator();

        nav.apply(NavigationCommand::ZoomTowards {
            offset_x: 100.0,
            offset_y: -20.0,
            zoom_in: true,
        });

        assert_approx_eq(nav.targets().scale, 1.0 / 256.0 / 1.08);
        assert_approx_eq(nav.targets().center.real, 100.0 / 256.0);
        assert_approx_eq(nav.targets().center.imag, 20.0 / 256.0);
    }

    #[test]
    fn iteration_steps_are_clamped() {
        let mut nav = navigator();

        nav.apply(NavigationCommand::FewerIterations(Step::Coarse));
        assert_eq!(nav.targets().max_iterations, 128);

        nav.apply(NavigationCommand::MoreIterations(Step::Fine));
        assert_eq!(nav.targets().max_iterations, 136);

        nav.apply(NavigationCommand::SetIterations(u32::MAX));
        nav.apply(NavigationCommand::MoreIterations(Step::Coarse));
        assert_eq!(nav.targets().max_iterations, 1 << 15);
    }

    #[test]
    fn constant_nudges_use_axis_factors() {
        let mut nav = Navigator::from_preset(FractalPreset::JuliaDendrite);

        nav.apply(NavigationCommand::NudgeConstant {
            axis: ConstantAxis::Real,
            grow: true,
            step: Step::Coarse,
        });
        nav.apply(NavigationCommand::NudgeConstant {
            axis: ConstantAxis::Imaginary,
            grow: false,
            step: Step::Fine,
        });

        assert_approx_eq(nav.targets().constant.real, -0.8 * 1.01);
        assert_approx_eq(nav.targets().constant.imag, 0.156 / 1.005);

        nav.apply(NavigationCommand::NegateConstant(ConstantAxis::Real));
        assert_approx_eq(nav.targets().constant.real, 0.8 * 1.01);
    }

    #[test]
    fn reset_snaps_view_home() {
        let mut nav = navigator();
        nav.apply(NavigationCommand::Pan(PanDirection::Left, Step::Coarse));
        nav.apply(NavigationCommand::ZoomIn(Step::Coarse));
        nav.tick();

        let report = nav.apply(NavigationCommand::Reset);

        assert!(report.needs_frame());
        assert_eq!(nav.state().center, Complex::ZERO);
        assert_eq!(nav.state().scale, DEFAULT_SCALE);
        assert_eq!(ViewState::from(&nav.view_parameters().unwrap()), nav.state());
        assert!(!nav.tick());
    }

    #[test]
    fn julia_preset_animates_constant_only() {
        let mut nav = navigator();
        nav.apply(NavigationCommand::ZoomIn(Step::Coarse));
        nav.apply(NavigationCommand::SetIterations(1024));

        nav.apply(NavigationCommand::SelectPreset(FractalPreset::JuliaSpiral));

        let view = nav.view_parameters().unwrap();
        assert_eq!(view.family(), FractalFamily::Julia);
        assert_eq!(view.scale(), DEFAULT_SCALE);
        assert_eq!(view.max_iterations(), 128);
        assert_eq!(nav.state().constant, Complex::ZERO);
        assert_eq!(nav.targets().constant, Complex::new(0.285, 0.01));
        assert_eq!(nav.targets().max_iterations, 128);

        assert!(nav.tick());
        assert_approx_eq(nav.state().constant.real, 0.285 / 8.0);
    }

    #[test]
    fn mandelbrot_preset_clears_constant() {
        let mut nav = Navigator::from_preset(FractalPreset::CubicExpJulia);

        nav.apply(NavigationCommand::SelectPreset(FractalPreset::Mandelbrot));

        let view = nav.view_parameters().unwrap();
        assert_eq!(view.family(), FractalFamily::Mandelbrot);
        assert_eq!(view.poly_degree(), PolyDegree::Quadratic);
        assert_eq!(view.constant(), Complex::ZERO);
    }

    #[test]
    fn colour_commands_only_touch_colours() {
        let mut nav = navigator();
        let before = nav.targets();

        let report = nav.apply(NavigationCommand::RotateColours);
        nav.apply(NavigationCommand::ToggleInvert);
        nav.apply(NavigationCommand::ToggleMonochrome);

        assert!(report.colours_changed);
        assert!(!report.targets_changed);
        assert_eq!(nav.targets(), before);
        assert_eq!(nav.colour(), ColourSettings::new(1, true, false));
    }

    #[test]
    fn ticks_converge_after_pan() {
        let mut nav = navigator();
        nav.apply(NavigationCommand::Pan(PanDirection::Right, Step::Coarse));

        let mut frames = 0;
        while nav.tick() {
            frames += 1;
            assert!(frames < 200);
        }

        assert!(frames > 0);
        assert!(nav.state().center.real > 0.0);
    }
}
