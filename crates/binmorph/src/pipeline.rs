use binmorph_image::{BinaryImage, Image, ImageError, ImageSize};
use binmorph_imgproc::{
    label::{colorize, label, Connectivity, DEFAULT_COLOR_SEED},
    morphology::{
        boundary, convex_hull, fill_holes, prune, skeletonize, thicken, thin, DEFAULT_PRUNE_SIZE,
    },
    parallel::ExecutionStrategy,
    threshold::{threshold_binary_with, DEFAULT_THRESHOLD},
};
use serde::{Deserialize, Serialize};

/// Largest image accepted by default, 4096 x 4096 pixels.
pub const DEFAULT_MAX_PIXELS: usize = 4096 * 4096;

/// Parameters of [`process`].
///
/// Every field has a default, so a partial JSON document is a valid config.
///
/// # Examples
///
/// ```
/// use binmorph::PipelineConfig;
///
/// let config = PipelineConfig {
///     prune_min_size: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.threshold, 127);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Gray values strictly above this become foreground.
    pub threshold: u8,
    /// Skeleton fragments with fewer pixels are pruned.
    pub prune_min_size: usize,
    /// Seed of the component color palette.
    pub color_seed: u64,
    /// Images with more pixels are rejected.
    pub max_pixels: usize,
    /// Adjacency used to find connected components.
    pub connectivity: Connectivity,
    /// How row-wise operations are scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            prune_min_size: DEFAULT_PRUNE_SIZE,
            color_seed: DEFAULT_COLOR_SEED,
            max_pixels: DEFAULT_MAX_PIXELS,
            connectivity: Connectivity::default(),
            strategy: ExecutionStrategy::default(),
        }
    }
}

/// An error type for the pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The input is empty or its buffer does not match its size.
    #[error("Invalid input image. {0}")]
    InvalidInput(#[from] ImageError),

    /// The decoded buffer is not single channel grayscale.
    #[error("Unsupported format: expected 1 channel, got {channels}")]
    UnsupportedFormat {
        /// The number of channels found.
        channels: usize,
    },

    /// The image is larger than the configured ceiling.
    #[error("Image has {pixels} pixels, the maximum is {max}")]
    TooManyPixels {
        /// The number of pixels of the input.
        pixels: usize,
        /// The configured ceiling.
        max: usize,
    },
}

/// A step of the pipeline, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The thresholded input.
    Original,
    /// Object contours.
    Boundary,
    /// Objects with enclosed holes filled.
    HoleFilled,
    /// Filled convex hull of the foreground.
    ConvexHull,
    /// Thinned objects.
    Thinned,
    /// Objects grown by one pixel.
    Thickened,
    /// Topological skeleton.
    Skeleton,
    /// Skeleton without small fragments.
    PrunedSkeleton,
    /// Colorized connected components of the input.
    ConnectedComponents,
}

impl Stage {
    /// All stages in the order [`process`] produces them.
    pub const ALL: [Stage; 9] = [
        Stage::Original,
        Stage::Boundary,
        Stage::HoleFilled,
        Stage::ConvexHull,
        Stage::Thinned,
        Stage::Thickened,
        Stage::Skeleton,
        Stage::PrunedSkeleton,
        Stage::ConnectedComponents,
    ];

    /// Human readable name, used as caption.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Original => "Original",
            Stage::Boundary => "Boundary",
            Stage::HoleFilled => "Hole Filled",
            Stage::ConvexHull => "Convex Hull",
            Stage::Thinned => "Thinned",
            Stage::Thickened => "Thickened",
            Stage::Skeleton => "Skeleton",
            Stage::PrunedSkeleton => "Pruned Skeleton",
            Stage::ConnectedComponents => "Connected Components",
        }
    }

    /// File name stem for saved outputs.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Stage::Original => "original",
            Stage::Boundary => "boundary",
            Stage::HoleFilled => "hole_filled",
            Stage::ConvexHull => "convex",
            Stage::Thinned => "thinned",
            Stage::Thickened => "thickened",
            Stage::Skeleton => "skeleton",
            Stage::PrunedSkeleton => "pruned",
            Stage::ConnectedComponents => "connected_components",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The output of one stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageImage {
    /// A mask, rendered as 0/255 gray.
    Binary(BinaryImage),
    /// An RGB image.
    Color(Image<u8, 3>),
}

impl StageImage {
    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            StageImage::Binary(mask) => mask.size(),
            StageImage::Color(image) => image.size(),
        }
    }

    /// The number of channels of [`StageImage::to_bytes`].
    pub fn num_channels(&self) -> usize {
        match self {
            StageImage::Binary(_) => 1,
            StageImage::Color(image) => image.num_channels(),
        }
    }

    /// The pixels as row-major bytes: 0/255 gray for masks, interleaved RGB otherwise.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            StageImage::Binary(mask) => mask.to_gray().into_vec(),
            StageImage::Color(image) => image.as_slice().to_vec(),
        }
    }

    /// The mask, if this is a binary output.
    pub fn as_binary(&self) -> Option<&BinaryImage> {
        match self {
            StageImage::Binary(mask) => Some(mask),
            StageImage::Color(_) => None,
        }
    }
}

/// The named outputs of the pipeline, in stage order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(Stage, StageImage)>,
}

impl ResultSet {
    fn push(&mut self, stage: Stage, image: StageImage) {
        match &image {
            StageImage::Binary(mask) => {
                log::debug!("{stage}: {} foreground pixels", mask.count_foreground())
            }
            StageImage::Color(_) => log::debug!("{stage}: {}", image.size()),
        }
        self.entries.push((stage, image));
    }

    /// The output of `stage`, if present.
    pub fn get(&self, stage: Stage) -> Option<&StageImage> {
        self.entries
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, image)| image)
    }

    /// Iterate the outputs in stage order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &StageImage)> {
        self.entries.iter().map(|(stage, image)| (*stage, image))
    }

    /// Number of outputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no outputs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The same set with `stage` removed.
    pub fn without(mut self, stage: Stage) -> Self {
        self.entries.retain(|(s, _)| *s != stage);
        self
    }
}

/// Run every stage of the pipeline on a grayscale image.
///
/// The image is thresholded once and each stage is derived from that mask, except
/// the pruned skeleton which is derived from the skeleton.
///
/// # Arguments
///
/// * `gray` - The decoded grayscale image.
/// * `config` - The pipeline parameters.
///
/// # Errors
///
/// [`PipelineError::InvalidInput`] for an empty image and
/// [`PipelineError::TooManyPixels`] above `config.max_pixels`.
///
/// # Examples
///
/// ```
/// use binmorph::{image::{Image, ImageSize}, process, PipelineConfig, Stage};
///
/// let gray = Image::<u8, 1>::from_fn(ImageSize { width: 8, height: 8 }, |x, y| {
///     [if (2..6).contains(&x) && (2..6).contains(&y) { 255 } else { 0 }]
/// })
/// .unwrap();
///
/// let results = process(&gray, &PipelineConfig::default()).unwrap();
/// assert_eq!(results.len(), Stage::ALL.len());
/// ```
pub fn process(gray: &Image<u8, 1>, config: &PipelineConfig) -> Result<ResultSet, PipelineError> {
    let size = gray.size();
    if size.is_empty() {
        return Err(ImageError::EmptyImage(size.width, size.height).into());
    }
    let pixels = size.num_pixels();
    if pixels > config.max_pixels {
        return Err(PipelineError::TooManyPixels {
            pixels,
            max: config.max_pixels,
        });
    }

    let binary = threshold_binary_with(gray, config.threshold, config.strategy)?;
    log::debug!(
        "threshold {}: {} of {} pixels are foreground",
        config.threshold,
        binary.count_foreground(),
        pixels
    );

    let mut results = ResultSet::default();
    results.push(Stage::Original, StageImage::Binary(binary.clone()));
    results.push(Stage::Boundary, StageImage::Binary(boundary(&binary)));
    results.push(Stage::HoleFilled, StageImage::Binary(fill_holes(&binary)));
    results.push(Stage::ConvexHull, StageImage::Binary(convex_hull(&binary)));
    results.push(Stage::Thinned, StageImage::Binary(thin(&binary)));
    results.push(Stage::Thickened, StageImage::Binary(thicken(&binary)));

    let skeleton = skeletonize(&binary);
    let pruned = prune(&skeleton, config.prune_min_size);
    results.push(Stage::Skeleton, StageImage::Binary(skeleton));
    results.push(Stage::PrunedSkeleton, StageImage::Binary(pruned));

    let (labels, num_components) = label(&binary, config.connectivity);
    log::debug!("{num_components} connected components");
    results.push(
        Stage::ConnectedComponents,
        StageImage::Color(colorize(&labels, config.color_seed)),
    );

    Ok(results)
}

/// Run the pipeline on a raw decoded buffer.
///
/// # Arguments
///
/// * `width` - The image width in pixels.
/// * `height` - The image height in pixels.
/// * `channels` - The number of interleaved channels in `data`; must be 1.
/// * `data` - The row-major samples.
/// * `config` - The pipeline parameters.
///
/// # Errors
///
/// [`PipelineError::UnsupportedFormat`] when `channels != 1`, otherwise as
/// [`process`]. A buffer whose length does not match the size, or a size whose
/// pixel count overflows, is [`PipelineError::InvalidInput`].
pub fn process_buffer(
    width: usize,
    height: usize,
    channels: usize,
    data: &[u8],
    config: &PipelineConfig,
) -> Result<ResultSet, PipelineError> {
    if channels != 1 {
        return Err(PipelineError::UnsupportedFormat { channels });
    }
    let size = ImageSize { width, height };
    if !size.is_empty() {
        let pixels = size
            .checked_num_pixels()
            .ok_or(ImageError::ImageTooLarge(width, height))?;
        if pixels > config.max_pixels {
            return Err(PipelineError::TooManyPixels {
                pixels,
                max: config.max_pixels,
            });
        }
    }

    let gray = Image::<u8, 1>::new(size, data.to_vec())?;
    process(&gray, config)
}
