/// Smoothing rates and bounds for the view animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationLimits {
    /// Fraction of the remaining centre distance covered per tick is `1 / center_divisor`.
    pub center_divisor: f64,
    pub constant_divisor: f64,
    pub scale_divisor: f64,
    /// Animation stops once every delta is within `stop_fraction * scale`.
    pub stop_fraction: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for AnimationLimits {
    fn default() -> Self {
        Self {
            center_divisor: 8.0,
            constant_divisor: 8.0,
            scale_divisor: 4.0,
            stop_fraction: 0.01,
            min_scale: 1e-18,
            max_scale: 16.0,
        }
    }
}

impl AnimationLimits {
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.max_scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }
}
