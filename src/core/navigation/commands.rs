use crate::core::fractals::presets::FractalPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Coarse,
    Fine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantAxis {
    Real,
    Imaginary,
}

/// A discrete navigation request. Bindings from keys or mouse buttons to
/// commands live with whatever front end issues them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationCommand {
    Pan(PanDirection, Step),
    ZoomIn(Step),
    ZoomOut(Step),
    /// Zoom while recentring on a point given in pixels from the frame centre.
    ZoomTowards {
        offset_x: f64,
        offset_y: f64,
        zoom_in: bool,
    },
    MoreIterations(Step),
    FewerIterations(Step),
    SetIterations(u32),
    /// Multiplies (`grow`) or divides one component of the Julia constant.
    NudgeConstant {
        axis: ConstantAxis,
        grow: bool,
        step: Step,
    },
    NegateConstant(ConstantAxis),
    Reset,
    SelectPreset(FractalPreset),
    ToggleInvert,
    ToggleMonochrome,
    RotateColours,
}

impl Step {
    #[must_use]
    pub fn pan_pixels(self) -> f64 {
        match self {
            Self::Coarse => 50.0,
            Self::Fine => 4.0,
        }
    }

    #[must_use]
    pub fn zoom_factor(self) -> f64 {
        match self {
            Self::Coarse => 2.0,
            Self::Fine => 1.05,
        }
    }

    #[must_use]
    pub fn iteration_step(self) -> u32 {
        match self {
            Self::Coarse => 128,
            Self::Fine => 8,
        }
    }

    /// The imaginary fine step is coarser than the real one.
    #[must_use]
    pub fn constant_factor(self, axis: ConstantAxis) -> f64 {
        match (self, axis) {
            (Self::Coarse, _) => 1.01,
            (Self::Fine, ConstantAxis::Real) => 1.001,
            (Self::Fine, ConstantAxis::Imaginary) => 1.005,
        }
    }
}

/// Zoom factor per [`NavigationCommand::ZoomTowards`].
pub const POINTER_ZOOM_FACTOR: f64 = 1.08;
