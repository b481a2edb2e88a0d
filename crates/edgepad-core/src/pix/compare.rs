//! Image comparison

use super::Pix;

impl Pix {
    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Check if two PIX are pixel-for-pixel identical.
    ///
    /// Images of different sizes are never equal.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Find the first pixel, in row-major order, where two same-sized
    /// images differ.
    ///
    /// Returns `None` if the images are equal or have different sizes.
    pub fn first_difference(&self, other: &Pix) -> Option<(u32, u32)> {
        if !self.sizes_equal(other) {
            return None;
        }
        let w = self.width() as usize;
        self.data()
            .iter()
            .zip(other.data())
            .position(|(a, b)| a != b)
            .map(|i| ((i % w) as u32, (i / w) as u32))
    }
}
