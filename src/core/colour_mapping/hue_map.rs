use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::settings::ColourSettings;
use crate::core::data::colour::Colour;
use crate::core::data::frame_extrema::FrameExtrema;

/// Keeps integer hue values off exact sector boundaries.
const HUE_EPSILON: f64 = 1e-4;
const HUE_SPAN: f64 = 4.0;
const HUE_SECTORS: f64 = 6.0;
const FULL_CHANNEL: f64 = 255.0;

/// Walks the hue hexagon across the frame's iteration range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct HueColourMap {
    settings: ColourSettings,
}

impl HueColourMap {
    #[must_use]
    pub fn new(settings: ColourSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> ColourSettings {
        self.settings
    }

    /// `(iteration, min, max) -> RGB`. Total for every input; `min == max` is
    /// treated as `max = min + 1`.
    #[must_use]
    pub fn colour(&self, iterations: u32, min: u32, max: u32) -> Colour {
        let min = i64::from(min);
        let mut max = i64::from(max);
        if min == max {
            max = min + 1;
        }

        let iterations = i64::from(iterations);
        let hue = if self.settings.invert() {
            max - (iterations - min)
        } else {
            iterations
        };

        if !self.settings.saturated() {
            let level = (255 * (max - hue) / (max - min)).clamp(0, 255);
            return Colour::grey(level as u8);
        }

        let h = (f64::from(self.settings.rotation())
            + HUE_EPSILON
            + HUE_SPAN * (hue - min) as f64 / (max - min) as f64)
            % HUE_SECTORS;
        let c = FULL_CHANNEL;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Colour {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }
}

impl ColourMap for HueColourMap {
    #[inline]
    fn map(&self, iterations: u32, extrema: FrameExtrema) -> Colour {
        self.colour(iterations, extrema.min_iter(), extrema.max_iter())
    }

    fn display_name(&self) -> &str {
        if self.settings.saturated() {
            "Hue hexagon"
        } else {
            "Monochrome"
        }
    }
}
