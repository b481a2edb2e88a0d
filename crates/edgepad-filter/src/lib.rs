//! edgepad-filter - Edge padding for matrix image filters
//!
//! A convolution kernel samples a neighbourhood around each pixel. This
//! crate provides the padding side of that contract:
//!
//! - [`add_edges_to_image`] / [`remove_edges_from_image`] - pad and crop
//!   with a signed edge size, as handed over by filter code
//! - [`edge_size_for_kernel`] - the margin a kernel of a given size needs
//! - [`apply_with_edges`] - pad, run a caller-supplied filter, crop
//! - [`add_edges_batch`] / [`remove_edges_batch`] - many images in parallel
//!
//! The kernel itself is always supplied by the caller.

pub mod batch;
mod error;
pub mod matrix;

pub use error::{FilterError, FilterResult};

pub use batch::{add_edges_batch, remove_edges_batch};
pub use matrix::{
    add_edges_to_image, apply_with_edges, edge_size_for_kernel, remove_edges_from_image,
};
