//! edgepad-core - Image container and edge replication
//!
//! This crate provides:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Pix::add_edges`] - Pad an image by replicating its border pixels
//! - [`Pix::remove_edges`] - Crop a uniform margin from an image
//!
//! Matrix filters sample a neighbourhood around each pixel. Padding with
//! replicated edges lets such a filter run over the enlarged buffer without
//! special-casing borders; cropping afterwards restores the original size.
//!
//! ```
//! use edgepad_core::Pix;
//!
//! let pix = Pix::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let padded = pix.add_edges(1).unwrap();
//! assert_eq!(padded.dimensions(), (4, 4));
//! assert_eq!(padded.get_pixel(0, 0), Some(1));
//! assert!(padded.remove_edges(1).unwrap().equals(&pix));
//! ```

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut};
