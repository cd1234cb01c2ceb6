#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use binmorph_image as image;

#[doc(inline)]
pub use binmorph_imgproc as imgproc;

#[doc(inline)]
pub use binmorph_io as io;

/// The end-to-end processing pipeline.
pub mod pipeline;

pub use crate::pipeline::{
    process, process_buffer, PipelineConfig, PipelineError, ResultSet, Stage, StageImage,
};
