//! Border operations for images
//!
//! Adding a margin of replicated edge pixels around an image, and removing
//! a uniform margin again:
//!
//! - [`Pix::add_edges`] pads by `npix` on every side, clamp-to-edge
//! - [`Pix::remove_edges`] crops `npix` from every side
//!
//! Padding then cropping with the same `npix` gives back the source image.
//! Both return a freshly allocated image; the source is never touched.

use super::{Pix, PixMut, pixel_count};
use crate::error::{Error, Result};
use log::{debug, trace};

impl Pix {
    /// Add a margin of replicated edge pixels around the image.
    ///
    /// The source is copied into the centre of a `(w + 2*npix, h + 2*npix)`
    /// image. The top and bottom margins repeat the first and last source
    /// rows, the left and right margins repeat the first and last source
    /// columns, and each corner block takes the value of the nearest source
    /// corner pixel.
    ///
    /// ```text
    ///  a,b,c          a a,b,c c
    ///  d,e,f   --->   a a,b,c c
    ///                 d d,e,f f
    ///                 d d,e,f f
    /// ```
    ///
    /// `npix == 0` returns an independent copy of the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if the padded size does not fit.
    pub fn add_edges(&self, npix: u32) -> Result<Pix> {
        let (w, h) = self.dimensions();
        trace!("add_edges: {}x{} by {}", w, h, npix);
        check_dimensions(w, h)?;

        if npix == 0 {
            return Ok(self.deep_clone());
        }

        let (nw, nh) = padded_dimensions(w, h, npix)?;
        let mut out = PixMut::new(nw, nh)?;
        let (e, w_len, h_len, nw_len) = (npix as usize, w as usize, h as usize, nw as usize);

        let data = out.data_mut();
        for (y, src) in self.data().chunks_exact(w_len).enumerate() {
            let start = (y + e) * nw_len + e;
            data[start..start + w_len].copy_from_slice(src);
        }

        // Vertical pass first, over the interior columns only. The
        // horizontal pass below then sweeps every row including these
        // margin rows, which is what puts the source corner value into
        // each corner block. Swapping the passes changes the corners.
        let first = e * nw_len + e;
        let last = (e + h_len - 1) * nw_len + e;
        for j in 0..e {
            data.copy_within(first..first + w_len, j * nw_len + e);
            data.copy_within(last..last + w_len, (e + h_len + j) * nw_len + e);
        }

        let right_edge = npix + w;
        for y in 0..nh {
            let left = out.get_pixel_unchecked(npix, y);
            let right = out.get_pixel_unchecked(right_edge - 1, y);
            out.fill_row_range(y, 0, npix, left);
            out.fill_row_range(y, right_edge, nw, right);
        }

        Ok(out.into())
    }

    /// Remove a uniform margin from the image.
    ///
    /// Returns a copy of the interior rectangle
    /// `[npix, w - npix) x [npix, h - npix)`. `npix == 0` returns an
    /// independent copy of the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MarginTooLarge`] if `2*npix >= w` or `2*npix >= h`.
    pub fn remove_edges(&self, npix: u32) -> Result<Pix> {
        let (w, h) = self.dimensions();
        trace!("remove_edges: {}x{} by {}", w, h, npix);
        check_dimensions(w, h)?;

        let twice = 2 * u64::from(npix);
        if twice >= u64::from(w) || twice >= u64::from(h) {
            debug!(
                "remove_edges: margin {} leaves nothing of {}x{}",
                npix, w, h
            );
            return Err(Error::MarginTooLarge {
                margin: npix,
                width: w,
                height: h,
            });
        }

        if npix == 0 {
            return Ok(self.deep_clone());
        }

        let nw = w - 2 * npix;
        let nh = h - 2 * npix;
        let mut out = PixMut::new(nw, nh)?;
        let (e, nw_len) = (npix as usize, nw as usize);

        for (y, dst) in out.data_mut().chunks_exact_mut(nw_len).enumerate() {
            let src = self.row_data(y as u32 + npix);
            dst.copy_from_slice(&src[e..e + nw_len]);
        }

        Ok(out.into())
    }
}

fn check_dimensions(w: u32, h: u32) -> Result<()> {
    if w == 0 || h == 0 {
        debug!("edge transform on empty {}x{} image", w, h);
        return Err(Error::InvalidDimension {
            width: w,
            height: h,
        });
    }
    Ok(())
}

/// Size of a `w x h` image padded by `npix` on every side.
fn padded_dimensions(w: u32, h: u32, npix: u32) -> Result<(u32, u32)> {
    let overflow = || {
        debug!("add_edges: {}x{} by {} overflows", w, h, npix);
        Error::DimensionOverflow {
            width: w,
            height: h,
            margin: npix,
        }
    };
    let twice = npix.checked_mul(2).ok_or_else(overflow)?;
    let nw = w.checked_add(twice).ok_or_else(overflow)?;
    let nh = h.checked_add(twice).ok_or_else(overflow)?;
    pixel_count(nw, nh).ok_or_else(overflow)?;
    Ok((nw, nh))
}
