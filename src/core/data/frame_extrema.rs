/// Smallest and largest iteration count seen over a frame (or a block of it).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameExtrema {
    min_iter: u32,
    max_iter: u32,
}

impl FrameExtrema {
    /// Identity for [`FrameExtrema::merge`]: nothing observed yet.
    #[must_use]
    pub const fn empty(max_iterations: u32) -> Self {
        Self {
            min_iter: max_iterations,
            max_iter: 0,
        }
    }

    #[must_use]
    pub fn min_iter(&self) -> u32 {
        self.min_iter
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    #[inline]
    pub fn observe(&mut self, iterations: u32) {
        self.min_iter = self.min_iter.min(iterations);
        self.max_iter = self.max_iter.max(iterations);
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_iter: self.min_iter.min(other.min_iter),
            max_iter: self.max_iter.max(other.max_iter),
        }
    }

    /// Forces `max_iter > min_iter` so the colour normalisation never divides
    /// by zero.
    #[must_use]
    pub fn normalised(self) -> Self {
        if self.max_iter > self.min_iter {
            self
        } else {
            Self {
                min_iter: self.min_iter,
                max_iter: self.min_iter.saturating_add(1),
            }
        }
    }
}

/// Folds per-block extrema into the frame-wide pair. Order of the blocks
/// does not affect the result.
#[must_use]
pub fn reduce_extrema(
    max_iterations: u32,
    blocks: impl IntoIterator<Item = FrameExtrema>,
) -> FrameExtrema {
    blocks
        .into_iter()
        .fold(FrameExtrema::empty(max_iterations), FrameExtrema::merge)
        .normalised()
}
