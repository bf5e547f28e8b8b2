/// Raw escape iteration counts, `height` rows of `width` values, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelField {
    width: u32,
    height: u32,
    iterations: Vec<u32>,
}

impl PixelField {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            iterations: vec![0; width as usize * height as usize],
        }
    }

    /// Resizes in place, keeping the allocation when it is already large
    /// enough. Returns `true` when the dimensions changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }

        self.width = width;
        self.height = height;
        self.iterations.resize(width as usize * height as usize, 0);
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
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.iterations[y as usize * self.width as usize + x as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.iterations.chunks_exact(self.width.max(1) as usize)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.iterations
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.iterations
    }
}
