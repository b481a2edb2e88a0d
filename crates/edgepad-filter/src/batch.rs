//! Batch padding and cropping
//!
//! The edge transforms share no state, so independent images are handed
//! to the rayon global pool. Results come back in input order, one per
//! image; a failing image does not stop the others.

use crate::matrix::margin;
use crate::{FilterError, FilterResult};
use edgepad_core::Pix;
use log::debug;
use rayon::prelude::*;

/// Pad every image by `edge_size` replicated pixels, in parallel.
///
/// A negative `edge_size` yields [`edgepad_core::Error::InvalidMargin`]
/// for every image.
pub fn add_edges_batch(images: &[Pix], edge_size: i32) -> Vec<FilterResult<Pix>> {
    run_batch("add_edges_batch", images, edge_size, Pix::add_edges)
}

/// Crop `edge_size` pixels from every side of every image, in parallel.
///
/// Images too small for the margin get
/// [`edgepad_core::Error::MarginTooLarge`]; the rest are still cropped.
pub fn remove_edges_batch(images: &[Pix], edge_size: i32) -> Vec<FilterResult<Pix>> {
    run_batch("remove_edges_batch", images, edge_size, Pix::remove_edges)
}

fn run_batch<F>(name: &str, images: &[Pix], edge_size: i32, op: F) -> Vec<FilterResult<Pix>>
where
    F: Fn(&Pix, u32) -> edgepad_core::Result<Pix> + Sync,
{
    let npix = match margin(edge_size) {
        Ok(npix) => npix,
        Err(e) => return images.iter().map(|_| Err(e.clone().into())).collect(),
    };

    let results: Vec<FilterResult<Pix>> = images
        .par_iter()
        .map(|pix| op(pix, npix).map_err(FilterError::from))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    debug!(
        "{}: {} images by {}, {} failed",
        name,
        images.len(),
        npix,
        failed
    );
    results
}
