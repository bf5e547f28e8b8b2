pub const ROTATION_STEPS: u8 = 6;

/// User-selectable colouring options shared by every frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColourSettings {
    rotation: u8,
    invert: bool,
    saturated: bool,
}

impl Default for ColourSettings {
    fn default() -> Self {
        Self {
            rotation: 0,
            invert: false,
            saturated: true,
        }
    }
}

impl ColourSettings {
    /// `rotation` is reduced modulo 6.
    #[must_use]
    pub fn new(rotation: u8, invert: bool, saturated: bool) -> Self {
        Self {
            rotation: rotation % ROTATION_STEPS,
            invert,
            saturated,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    #[must_use]
    pub fn invert(&self) -> bool {
        self.invert
    }

    #[must_use]
    pub fn saturated(&self) -> bool {
        self.saturated
    }

    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % ROTATION_STEPS;
    }

    pub fn toggle_invert(&mut self) {
        self.invert = !self.invert;
    }

    pub fn toggle_saturated(&mut self) {
        self.saturated = !self.saturated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_saturated_unrotated() {
        let settings = ColourSettings::default();

        assert_eq!(settings.rotation(), 0);
        assert!(!settings.invert());
        assert!(settings.saturated());
    }

    #[test]
    fn test_rotation_wraps_after_six_steps() {
        let mut settings = ColourSettings::default();
        let mut seen = Vec::new();

        for _ in 0..7 {
            seen.push(settings.rotation());
            settings.rotate();
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_new_reduces_rotation() {
        assert_eq!(ColourSettings::new(8, false, true).rotation(), 2);
    }

    #[test]
    fn test_toggles() {
        let mut settings = ColourSettings::default();

        settings.toggle_invert();
        settings.toggle_saturated();
        assert!(settings.invert());
        assert!(!settings.saturated());

        settings.toggle_invert();
        settings.toggle_saturated();
        assert_eq!(settings, ColourSettings::default());
    }
}
