use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour_field::BYTES_PER_PIXEL;
use crate::core::data::frame_extrema::FrameExtrema;
use crate::core::data::point::Point;
use crate::core::data::work_block::WorkBlock;

/// Splits `buffer` into one disjoint run of whole rows per block.
///
/// `blocks` must be contiguous from row 0 and fit inside `buffer`; anything
/// past the last block is left out.
pub(crate) fn split_rows_mut<'a, T>(
    mut buffer: &'a mut [T],
    row_len: usize,
    blocks: &[WorkBlock],
) -> Vec<&'a mut [T]> {
    let mut slices = Vec::with_capacity(blocks.len());

    for block in blocks {
        let (head, tail) = std::mem::take(&mut buffer).split_at_mut(block.rows() as usize * row_len);
        slices.push(head);
        buffer = tail;
    }

    slices
}

pub(crate) fn split_rows<'a, T>(mut buffer: &'a [T], row_len: usize, blocks: &[WorkBlock]) -> Vec<&'a [T]> {
    let mut slices = Vec::with_capacity(blocks.len());

    for block in blocks {
        let (head, tail) = buffer.split_at(block.rows() as usize * row_len);
        slices.push(head);
        buffer = tail;
    }

    slices
}

/// First pass: fills the block's iteration counts and returns the extrema
/// it saw.
pub(crate) fn iterate_block<A, C>(
    algorithm: &A,
    block: WorkBlock,
    width: usize,
    iterations: &mut [u32],
    cancel: &C,
) -> Result<FrameExtrema, Cancelled>
where
    A: FractalAlgorithm + ?Sized,
    C: CancelToken + ?Sized,
{
    let mut extrema = FrameExtrema::empty(algorithm.max_iterations());

    for (y, row) in (block.row_start..block.row_end).zip(iterations.chunks_exact_mut(width)) {
        for (x, slot) in row.iter_mut().enumerate() {
            cancel.checkpoint(x)?;

            let count = algorithm.compute(Point { x: x as u32, y });
            *slot = count;
            extrema.observe(count);
        }
    }

    Ok(extrema)
}

/// Second pass: colours the meaningful part of each padded row in the block.
pub(crate) fn colour_block<M, C>(
    colour_map: &M,
    extrema: FrameExtrema,
    width: usize,
    stride: usize,
    iterations: &[u32],
    rgb: &mut [u8],
    cancel: &C,
) -> Result<(), Cancelled>
where
    M: ColourMap + ?Sized,
    C: CancelToken + ?Sized,
{
    for (counts, padded_row) in iterations.chunks_exact(width).zip(rgb.chunks_exact_mut(stride)) {
        let pixels = padded_row[..width * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL);

        for (x, (&count, pixel)) in counts.iter().zip(pixels).enumerate() {
            cancel.checkpoint(x)?;

            let colour = colour_map.map(count, extrema);
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    Ok(())
}
