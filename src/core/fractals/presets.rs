use crate::core::data::complex::Complex;
use crate::core::data::view_params::{PolyDegree, ViewParameters};

/// `1 - φ`
const GOLDEN_RATIO_CONSTANT: f64 = 1.0 - 1.618_033_988_7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FractalPreset {
    #[default]
    Mandelbrot,
    JuliaSpiral,
    JuliaGoldenRatio,
    JuliaDendrite,
    CubicExpJulia,
}

impl FractalPreset {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::JuliaSpiral,
        Self::JuliaGoldenRatio,
        Self::JuliaDendrite,
        Self::CubicExpJulia,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::JuliaSpiral => "Julia z² (0.285 + 0.01i)",
            Self::JuliaGoldenRatio => "Julia z² (1 - φ)",
            Self::JuliaDendrite => "Julia z² (-0.8 + 0.156i)",
            Self::CubicExpJulia => "Julia exp(z³) (-0.621)",
        }
    }

    /// Starting view: origin-centred, default scale and 128 iterations.
    #[must_use]
    pub fn view(self) -> ViewParameters {
        match self {
            Self::Mandelbrot => ViewParameters::mandelbrot(),
            Self::JuliaSpiral => {
                ViewParameters::julia(Complex::new(0.285, 0.01), PolyDegree::Quadratic)
            }
            Self::JuliaGoldenRatio => {
                ViewParameters::julia(Complex::new(GOLDEN_RATIO_CONSTANT, 0.0), PolyDegree::Quadratic)
            }
            Self::JuliaDendrite => {
                ViewParameters::julia(Complex::new(-0.8, 0.156), PolyDegree::Quadratic)
            }
            Self::CubicExpJulia => {
                ViewParameters::julia(Complex::new(-0.621, 0.0), PolyDegree::CubicExp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::view_params::{DEFAULT_SCALE, FractalFamily};

    #[test]
    fn test_every_preset_starts_from_the_same_framing() {
        for preset in FractalPreset::ALL {
            let view = preset.view();

            assert_eq!(view.center(), Complex::ZERO, "{}", preset.display_name());
            assert_eq!(view.scale(), DEFAULT_SCALE);
            assert_eq!(view.max_iterations(), 128);
        }
    }

    #[test]
    fn test_only_mandelbrot_preset_uses_mandelbrot_family() {
        for preset in FractalPreset::ALL {
            let expected = if *preset == FractalPreset::Mandelbrot {
                FractalFamily::Mandelbrot
            } else {
                FractalFamily::Julia
            };
            assert_eq!(preset.view().family(), expected);
        }
    }

    #[test]
    fn test_cubic_exp_preset_uses_cubic_exp_map() {
        assert_eq!(
            FractalPreset::CubicExpJulia.view().poly_degree(),
            PolyDegree::CubicExp
        );
    }
}
