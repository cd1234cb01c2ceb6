//! Morphological operations on binary images.
//!
//! Every operation uses the fixed 3x3 neighbourhood and treats pixels outside
//! the image as background.
//!
//! # Available Operations
//!
//! - **erode / dilate**: the primitive set operations, see [`StructuringElement`]
//! - **boundary / thicken**: derived from a single erosion or dilation
//! - **fill_holes**: background flood fill from the image corner
//! - **convex_hull**: filled convex hull of the foreground
//! - **thin / skeletonize**: topology preserving peeling to one pixel wide curves
//! - **prune**: drop small connected fragments of a skeleton

mod kernel;
pub use kernel::*;

mod ops;
pub use ops::*;

mod fill;
pub use fill::*;

mod hull;
pub use hull::*;

mod thinning;
pub use thinning::*;

mod skeleton;
pub use skeleton::*;

mod prune;
pub use prune::*;

mod iterative;
mod neighbors;
