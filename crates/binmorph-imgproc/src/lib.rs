#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
/// connected component labeling module.
pub mod label;

/// binary morphology module.
pub mod morphology;

/// module containing parallization utilities.
pub mod parallel;

/// operations to threshold images.
pub mod threshold;

#[cfg(test)]
mod testing;
