use std::num::NonZeroU32;

/// A contiguous, half-open range of rows `[row_start, row_end)` owned by one
/// worker for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorkBlock {
    pub thread_index: u32,
    pub row_start: u32,
    pub row_end: u32,
}

impl WorkBlock {
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.row_end - self.row_start
    }
}

/// Splits `height` rows into at most `thread_count` non-empty blocks.
///
/// The first `height % blocks` blocks take one extra row, so every row in
/// `[0, height)` belongs to exactly one block.
#[must_use]
pub fn partition_rows(height: u32, thread_count: NonZeroU32) -> Vec<WorkBlock> {
    let blocks = thread_count.get().min(height);
    if blocks == 0 {
        return Vec::new();
    }

    let base_rows = height / blocks;
    let extra_rows = height % blocks;

    let mut row_start = 0;
    (0..blocks)
        .map(|thread_index| {
            let rows = base_rows + u32::from(thread_index < extra_rows);
            let block = WorkBlock {
                thread_index,
                row_start,
                row_end: row_start + rows,
            };
            row_start = block.row_end;
            block
        })
        .collect()
}
