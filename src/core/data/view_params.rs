use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::complex::Complex;

pub const MIN_MAX_ITERATIONS: u32 = 128;
pub const MAX_MAX_ITERATIONS: u32 = 1 << 15;
pub const DEFAULT_SCALE: f64 = 1.0 / 256.0;

#[derive(Debug, Error)]
pub enum ViewParametersError {
    #[error("view scale must be positive and finite: {0}")]
    InvalidScale(f64),

    #[error("max iterations {0} outside {MIN_MAX_ITERATIONS}..={MAX_MAX_ITERATIONS}")]
    InvalidMaxIterations(u32),

    #[error("view parameters could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FractalFamily {
    #[default]
    Mandelbrot,
    Julia,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolyDegree {
    /// `z² + c`
    #[default]
    Quadratic,
    /// `exp(z³) + c`
    CubicExp,
}

#[must_use]
pub fn clamp_max_iterations(max_iterations: u32) -> u32 {
    max_iterations.clamp(MIN_MAX_ITERATIONS, MAX_MAX_ITERATIONS)
}

fn validate_scale(scale: f64) -> Result<f64, ViewParametersError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ViewParametersError::InvalidScale(scale))
    }
}

/// Field layout as written in JSON, before clamping and validation.
#[derive(Debug, Deserialize)]
struct RawViewParameters {
    center: Complex,
    scale: f64,
    max_iterations: u32,
    family: FractalFamily,
    poly_degree: PolyDegree,
    constant: Complex,
}

impl TryFrom<RawViewParameters> for ViewParameters {
    type Error = ViewParametersError;

    fn try_from(raw: RawViewParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.center,
            raw.scale,
            raw.max_iterations,
            raw.family,
            raw.poly_degree,
            raw.constant,
        )
    }
}

/// Snapshot of everything a single frame depends on.
///
/// `scale` is the plane distance covered by one pixel. `constant` is only read
/// in [`FractalFamily::Julia`]. `max_iterations` always lies in
/// `[MIN_MAX_ITERATIONS, MAX_MAX_ITERATIONS]`; deserialising goes through
/// [`ViewParameters::new`], so the same clamping and validation apply.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewParameters")]
pub struct ViewParameters {
    center: Complex,
    scale: f64,
    max_iterations: u32,
    family: FractalFamily,
    poly_degree: PolyDegree,
    constant: Complex,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            scale: DEFAULT_SCALE,
            max_iterations: MIN_MAX_ITERATIONS,
            family: FractalFamily::Mandelbrot,
            poly_degree: PolyDegree::Quadratic,
            constant: Complex::ZERO,
        }
    }
}

impl ViewParameters {
    pub fn new(
        center: Complex,
        scale: f64,
        max_iterations: u32,
        family: FractalFamily,
        poly_degree: PolyDegree,
        constant: Complex,
    ) -> Result<Self, ViewParametersError> {
        Ok(Self {
            center,
            scale: validate_scale(scale)?,
            max_iterations: clamp_max_iterations(max_iterations),
            family,
            poly_degree,
            constant,
        })
    }

    #[must_use]
    pub fn mandelbrot() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn julia(constant: Complex, poly_degree: PolyDegree) -> Self {
        Self {
            family: FractalFamily::Julia,
            poly_degree,
            constant,
            ..Self::default()
        }
    }

    /// Parses a JSON view, then applies the same clamping and validation as
    /// [`ViewParameters::new`].
    pub fn from_json(json: &str) -> Result<Self, ViewParametersError> {
        let raw: RawViewParameters = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Checks every invariant the constructors establish.
    pub fn validate(&self) -> Result<(), ViewParametersError> {
        validate_scale(self.scale)?;
        if clamp_max_iterations(self.max_iterations) != self.max_iterations {
            return Err(ViewParametersError::InvalidMaxIterations(self.max_iterations));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ViewParametersError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn family(&self) -> FractalFamily {
        self.family
    }

    #[must_use]
    pub fn poly_degree(&self) -> PolyDegree {
        self.poly_degree
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }

    pub fn set_center(&mut self, center: Complex) {
        self.center = center;
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), ViewParametersError> {
        self.scale = validate_scale(scale)?;
        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.max_iterations = clamp_max_iterations(max_iterations);
    }

    pub fn set_constant(&mut self, constant: Complex) {
        self.constant = constant;
    }

    pub fn set_fractal(&mut self, family: FractalFamily, poly_degree: PolyDegree) {
        self.family = family;
        self.poly_degree = poly_degree;
    }
}
