use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourFieldError {
    #[error("pixel {pixel:?} outside of {width}x{height} field")]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
}

/// Smallest power of two that is at least `dimension` (and at least 1).
#[must_use]
pub fn padded_dimension(dimension: u32) -> u32 {
    dimension.max(1).next_power_of_two()
}

/// RGB store whose dimensions are rounded up to powers of two.
///
/// Only the top-left `width × height` region holds the frame; the padding is
/// kept so the whole buffer can be handed to a texture upload as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourField {
    width: u32,
    height: u32,
    padded_width: u32,
    padded_height: u32,
    buffer: Vec<u8>,
}

impl ColourField {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let padded_width = padded_dimension(width);
        let padded_height = padded_dimension(height);

        Self {
            width,
            height,
            padded_width,
            padded_height,
            buffer: vec![0; padded_width as usize * padded_height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Adopts new frame dimensions. The backing store is only reallocated
    /// when the padded dimensions change; returns `true` in that case.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let padded_width = padded_dimension(width);
        let padded_height = padded_dimension(height);

        self.width = width;
        self.height = height;

        if padded_width == self.padded_width && padded_height == self.padded_height {
            return false;
        }

        log::debug!(
            "reallocating colour field {}x{} -> {}x{}",
            self.padded_width,
            self.padded_height,
            padded_width,
            padded_height
        );

        self.padded_width = padded_width;
        self.padded_height = padded_height;
        self.buffer = vec![0; padded_width as usize * padded_height as usize * BYTES_PER_PIXEL];
        true
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn padded_width(&self) -> u32 {
        self.padded_width
    }

    #[must_use]
    pub fn padded_height(&self) -> u32 {
        self.padded_height
    }

    /// Bytes between the starts of two consecutive rows.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.padded_width as usize * BYTES_PER_PIXEL
    }

    /// The whole padded buffer, row-major, top row first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The meaningful `width * 3` bytes of row `y`.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }

        let start = y as usize * self.stride();
        Some(&self.buffer[start..start + self.width as usize * BYTES_PER_PIXEL])
    }

    /// Full stride of row `y`, padding included.
    #[must_use]
    pub fn padded_row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.padded_height {
            return None;
        }

        let start = y as usize * self.stride();
        Some(&self.buffer[start..start + self.stride()])
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width {
            return None;
        }

        let row = self.row(y)?;
        let index = x as usize * BYTES_PER_PIXEL;
        Some(Colour {
            r: row[index],
            g: row[index + 1],
            b: row[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), ColourFieldError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(ColourFieldError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        let index = pixel.y as usize * self.stride() + pixel.x as usize * BYTES_PER_PIXEL;
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
