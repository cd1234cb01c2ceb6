use crate::{
    error::ImageError,
    image::{Image, ImageSize},
};

/// A label map: `0` is background and `1..=N` identify connected components.
pub type LabelImage = Image<u32, 1>;

/// A binary image where `true` marks a foreground pixel.
///
/// The mask is always rectangular and non-empty. Operations never mutate a
/// mask in place; they produce a new one of the same size. Reads outside the
/// image return background, which gives every neighborhood operation
/// zero-padding semantics at the borders.
///
/// # Examples
///
/// ```
/// use binmorph_image::{BinaryImage, ImageSize};
///
/// let mask = BinaryImage::from_fn(ImageSize { width: 4, height: 3 }, |x, y| x == y).unwrap();
///
/// assert_eq!(mask.count_foreground(), 3);
/// assert!(mask.get(2, 2));
/// assert!(!mask.get_padded(-1, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage(Image<bool, 1>);

impl BinaryImage {
    /// Create a binary image from a row-major vector of flags.
    pub fn new(size: ImageSize, data: Vec<bool>) -> Result<Self, ImageError> {
        Ok(Self(Image::new(size, data)?))
    }

    /// Create an all-background binary image.
    pub fn zeros(size: ImageSize) -> Result<Self, ImageError> {
        Ok(Self(Image::from_size_val(size, false)?))
    }

    /// Create a binary image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        size: ImageSize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, ImageError> {
        Ok(Self(Image::from_fn(size, |x, y| [f(x, y)])?))
    }

    /// Create a binary image from raw bytes, where any non-zero byte is foreground.
    ///
    /// This accepts both 0/1 and 0/255 encoded masks.
    pub fn from_bytes(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        Self::new(size, data.iter().map(|&v| v != 0).collect())
    }

    /// An all-background image with the same size as `self`.
    pub fn empty_like(&self) -> Self {
        Self(Image::from_raw_parts(
            self.size(),
            vec![false; self.size().num_pixels()],
        ))
    }

    /// A new image of the same size whose pixels are `f(x, y, value)`.
    pub fn map_pixels(&self, f: impl Fn(usize, usize, bool) -> bool) -> Self {
        let width = self.width();
        let data = self
            .as_slice()
            .iter()
            .enumerate()
            .map(|(idx, &v)| f(idx % width, idx / width, v))
            .collect();
        Self(Image::from_raw_parts(self.size(), data))
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.0.size()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.0.width()
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.0.height()
    }

    /// Get the flags as a flat row-major slice.
    pub fn as_slice(&self) -> &[bool] {
        self.0.as_slice()
    }

    /// Get the flags as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [bool] {
        self.0.as_slice_mut()
    }

    /// Whether the pixel at `(x, y)` is foreground.
    ///
    /// Coordinates outside the image are background.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.0.as_slice()[y * self.width() + x]
    }

    /// Like [`BinaryImage::get`] but accepts signed coordinates.
    #[inline]
    pub fn get_padded(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && self.get(x as usize, y as usize)
    }

    /// Set the pixel at `(x, y)`. Out-of-bounds writes are reported as errors.
    pub fn set(&mut self, x: usize, y: usize, val: bool) -> Result<(), ImageError> {
        self.0.set_pixel(x, y, 0, val)
    }

    /// Number of foreground pixels.
    pub fn count_foreground(&self) -> usize {
        self.as_slice().iter().filter(|&&v| v).count()
    }

    /// Whether the image contains at least one foreground pixel.
    pub fn has_foreground(&self) -> bool {
        self.as_slice().iter().any(|&v| v)
    }

    /// Iterate the `(x, y)` coordinates of the foreground pixels in raster order.
    pub fn foreground(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width();
        self.as_slice()
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Whether every foreground pixel of `self` is also foreground in `other`.
    pub fn is_subset_of(&self, other: &BinaryImage) -> bool {
        self.size() == other.size()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(&a, &b)| !a || b)
    }

    /// Render the mask as an 8-bit grayscale image with foreground = 255.
    pub fn to_gray(&self) -> Image<u8, 1> {
        self.0.map(|&v| if v { 255 } else { 0 })
    }

    /// Borrow the underlying single channel image.
    pub fn as_image(&self) -> &Image<bool, 1> {
        &self.0
    }
}
