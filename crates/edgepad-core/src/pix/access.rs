//! Pixel access functions
//!
//! Getting and setting individual pixels. Values are opaque `u32`s and are
//! returned exactly as stored.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without a coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without a coordinate check.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without a coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    /// Set pixels `[x0, x1)` of row `y` to `val`.
    ///
    /// # Panics
    ///
    /// Panics if the range or row is outside the image.
    #[inline]
    pub fn fill_row_range(&mut self, y: u32, x0: u32, x1: u32, val: u32) {
        self.row_data_mut(y)[x0 as usize..x1 as usize].fill(val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut pm = PixMut::new(4, 3).unwrap();
        pm.set_pixel(3, 2, 0xff00_00ff).unwrap();
        assert_eq!(pm.get_pixel(3, 2), Some(0xff00_00ff));
        assert_eq!(pm.get_pixel(4, 2), None);

        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(3, 2), Some(0xff00_00ff));
        assert_eq!(pix.get_pixel_unchecked(3, 2), 0xff00_00ff);
        assert_eq!(pix.data()[11], 0xff00_00ff);
        assert_eq!(pix.get_pixel(0, 3), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut pm = PixMut::new(2, 2).unwrap();
        assert_eq!(
            pm.set_pixel(2, 0, 1),
            Err(Error::IndexOutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
        assert!(pm.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_fill_row_range() {
        let mut pm = PixMut::new(5, 2).unwrap();
        pm.fill_row_range(1, 1, 4, 8);
        assert_eq!(pm.row_data(1), &[0, 8, 8, 8, 0]);
        assert_eq!(pm.row_data(0), &[0, 0, 0, 0, 0]);
    }
}
