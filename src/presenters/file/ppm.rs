use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmDecoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageDecoder, ImageError};
use thiserror::Error;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::compute_frame::field_computer::Frame;
use crate::core::data::colour::Colour;
use crate::core::data::colour_field::{ColourField, ColourFieldError, BYTES_PER_PIXEL};
use crate::core::data::point::Point;

const MAGIC: &str = "P6";
const MAX_VALUE: u32 = 255;

#[derive(Debug, Error)]
pub enum PpmError {
    #[error("ppm i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("ppm could not be decoded: {0}")]
    Decode(#[from] ImageError),

    #[error("unsupported ppm variant: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Field(#[from] ColourFieldError),
}

/// Binary `P6` image of the meaningful region, bottom row first.
pub fn write_ppm<W: Write>(colours: &ColourField, mut writer: W) -> io::Result<()> {
    write!(writer, "{MAGIC}\n{} {}\n{MAX_VALUE}\n", colours.width(), colours.height())?;

    for y in (0..colours.height()).rev() {
        if let Some(row) = colours.row(y) {
            writer.write_all(row)?;
        }
    }

    writer.flush()
}

/// Parses what [`write_ppm`] produces, restoring internal row order. Only
/// binary pixmaps with 8-bit samples are accepted.
pub fn read_ppm<R: BufRead>(reader: R) -> Result<ColourField, PpmError> {
    let decoder = PnmDecoder::new(reader)?;

    let subtype = decoder.subtype();
    if !matches!(subtype, PnmSubtype::Pixmap(SampleEncoding::Binary)) {
        return Err(PpmError::Unsupported(format!("{subtype:?}")));
    }
    let colour_type = decoder.color_type();
    if colour_type != ColorType::Rgb8 {
        return Err(PpmError::Unsupported(format!("{colour_type:?} samples")));
    }

    let (width, height) = decoder.dimensions();
    let mut data = vec![0; width as usize * height as usize * BYTES_PER_PIXEL];
    decoder.read_image(&mut data)?;

    let row_len = width as usize * BYTES_PER_PIXEL;
    let mut colours = ColourField::new(width, height);
    for (file_row, bytes) in data.chunks_exact(row_len.max(1)).enumerate() {
        let y = height - 1 - file_row as u32;
        for (x, rgb) in bytes.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            let colour = Colour {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            };
            colours.set_pixel(Point { x: x as u32, y }, colour)?;
        }
    }

    Ok(colours)
}

pub fn read_ppm_file(filepath: impl AsRef<Path>) -> Result<ColourField, PpmError> {
    read_ppm(BufReader::new(File::open(filepath)?))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &Frame<'_>, filepath: impl AsRef<Path>) -> io::Result<()> {
        write_ppm(frame.colours, BufWriter::new(File::create(filepath)?))
    }

    fn extension(&self) -> &'static str {
        "ppm"
    }
}
