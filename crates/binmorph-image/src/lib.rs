#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for binary morphology.
pub mod image;

/// binary masks and label maps.
pub mod binary;

/// Error types for the image module.
pub mod error;

pub use crate::binary::{BinaryImage, LabelImage};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
