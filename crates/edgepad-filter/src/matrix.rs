//! Matrix filter padding
//!
//! The entry points a matrix (convolution) filter calls around its kernel
//! pass. Edge sizes arrive as signed integers from filter code, so a
//! negative size is rejected here before reaching the core transforms.

use crate::{FilterError, FilterResult};
use edgepad_core::{Error, Pix};
use log::debug;

/// Pad an image by `edge_size` replicated pixels on every side.
///
/// The result is `(w + 2*edge_size, h + 2*edge_size)`; see
/// [`Pix::add_edges`] for the fill rule.
///
/// # Errors
///
/// Returns [`Error::InvalidMargin`] if `edge_size < 0`.
pub fn add_edges_to_image(pix: &Pix, edge_size: i32) -> FilterResult<Pix> {
    let npix = margin(edge_size)?;
    Ok(pix.add_edges(npix)?)
}

/// Crop `edge_size` pixels from every side of an image.
///
/// # Errors
///
/// Returns [`Error::InvalidMargin`] if `edge_size < 0`, and
/// [`Error::MarginTooLarge`] if `2*edge_size` is not less than both the
/// width and the height.
pub fn remove_edges_from_image(pix: &Pix, edge_size: i32) -> FilterResult<Pix> {
    let npix = margin(edge_size)?;
    Ok(pix.remove_edges(npix)?)
}

/// Margin needed around an image for a square kernel of `kernel_size`.
///
/// This is `kernel_size / 2`, rounded down.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernelSize`] for a zero-size kernel.
pub fn edge_size_for_kernel(kernel_size: u32) -> FilterResult<u32> {
    if kernel_size == 0 {
        return Err(FilterError::InvalidKernelSize(kernel_size));
    }
    Ok(kernel_size / 2)
}

/// Run a filter over an edge-padded copy of `pix` and crop the result.
///
/// `filter` receives the image padded by
/// [`edge_size_for_kernel(kernel_size)`](edge_size_for_kernel) and must
/// return an image of that same padded size. Its output is cropped back to
/// the size of `pix`.
///
/// # Errors
///
/// Errors from `filter` are returned unchanged. Returns
/// [`FilterError::FilterOutputMismatch`] if the filter changes the image
/// size.
///
/// # Example
///
/// ```
/// use edgepad_core::Pix;
/// use edgepad_filter::apply_with_edges;
///
/// let pix = Pix::from_data(3, 1, vec![1, 2, 3]).unwrap();
/// let out = apply_with_edges(&pix, 3, |padded| {
///     assert_eq!(padded.dimensions(), (5, 3));
///     Ok(padded.clone())
/// })
/// .unwrap();
/// assert!(out.equals(&pix));
/// ```
pub fn apply_with_edges<F>(pix: &Pix, kernel_size: u32, filter: F) -> FilterResult<Pix>
where
    F: FnOnce(&Pix) -> FilterResult<Pix>,
{
    let npix = edge_size_for_kernel(kernel_size)?;
    debug!(
        "apply_with_edges: {}x{} kernel {} edge {}",
        pix.width(),
        pix.height(),
        kernel_size,
        npix
    );

    let padded = pix.add_edges(npix)?;
    let expected = padded.dimensions();
    let filtered = filter(&padded)?;
    if filtered.dimensions() != expected {
        return Err(FilterError::FilterOutputMismatch {
            expected,
            actual: filtered.dimensions(),
        });
    }

    Ok(filtered.remove_edges(npix)?)
}

pub(crate) fn margin(edge_size: i32) -> Result<u32, Error> {
    u32::try_from(edge_size).map_err(|_| {
        debug!("rejecting negative edge size {}", edge_size);
        Error::InvalidMargin(i64::from(edge_size))
    })
}
