use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::compute_frame::field_computer::Frame;
use crate::core::data::pixel_field::PixelField;

/// One line per row, top row first, values separated by `,`.
pub fn write_csv<W: Write>(pixels: &PixelField, mut writer: W) -> io::Result<()> {
    for row in pixels.rows() {
        let mut values = row.iter();
        if let Some(first) = values.next() {
            write!(writer, "{first}")?;
        }
        for value in values {
            write!(writer, ",{value}")?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvFilePresenter;

impl CsvFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for CsvFilePresenter {
    fn present(&self, frame: &Frame<'_>, filepath: impl AsRef<Path>) -> io::Result<()> {
        write_csv(frame.pixels, BufWriter::new(File::create(filepath)?))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}
