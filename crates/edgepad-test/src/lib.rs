//! edgepad-test - Regression test framework for edgepad
//!
//! Provides [`RegParams`], which counts and records comparisons so a
//! regression test can report every failure at the end instead of stopping
//! at the first one, plus deterministic fixture images.
//!
//! # Usage
//!
//! ```ignore
//! use edgepad_test::{RegParams, synthetic_pix};
//!
//! let mut rp = RegParams::new("border");
//! let pixs = synthetic_pix(300, 100, 1).unwrap();
//! rp.compare_values(310.0, pixs.add_edges(5).unwrap().width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod params;

pub use params::{RegParams, RegTestMode};

use edgepad_core::{Pix, PixMut, Result};
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

/// Create an image of pseudo-random pixel values.
///
/// The same `(width, height, seed)` always yields the same image.
pub fn synthetic_pix(width: u32, height: u32, seed: u64) -> Result<Pix> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pm = PixMut::new(width, height)?;
    for v in pm.data_mut() {
        *v = StandardUniform.sample(&mut rng);
    }
    Ok(pm.into())
}

/// Create an image whose pixel at (x, y) is `(x << 16) | y`.
///
/// Every pixel is distinct for images up to 65536 on a side, so a wrong
/// copy shows up as a wrong coordinate.
pub fn coordinate_pix(width: u32, height: u32) -> Result<Pix> {
    let mut pm = PixMut::new(width, height)?;
    for y in 0..height {
        for (x, v) in pm.row_data_mut(y).iter_mut().enumerate() {
            *v = coordinate_value(x as u32, y);
        }
    }
    Ok(pm.into())
}

/// Pixel value stored at (x, y) by [`coordinate_pix`].
#[inline]
pub fn coordinate_value(x: u32, y: u32) -> u32 {
    (x << 16) | (y & 0xffff)
}
