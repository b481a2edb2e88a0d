//! edgepad - Edge replication for matrix image filters
//!
//! Pads an image by replicating its border pixels outward, so that a
//! convolution kernel can run over the whole enlarged buffer without
//! special-casing the borders, and crops the margin off again afterwards.
//!
//! # Example
//!
//! ```
//! use edgepad::Pix;
//! use edgepad::filter::{add_edges_to_image, edge_size_for_kernel, remove_edges_from_image};
//!
//! let pix = Pix::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
//! let edge = edge_size_for_kernel(5).unwrap() as i32;
//!
//! let padded = add_edges_to_image(&pix, edge).unwrap();
//! assert_eq!(padded.dimensions(), (7, 6));
//! assert_eq!(padded.get_pixel(0, 0), Some(1));
//! assert_eq!(padded.get_pixel(6, 5), Some(6));
//!
//! let back = remove_edges_from_image(&padded, edge).unwrap();
//! assert!(back.equals(&pix));
//! ```

// Re-export core types (the image container and edge transforms)
pub use edgepad_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use edgepad_filter as filter;
