/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the image has zero width or height.
    #[error("Image must not be empty, got width {0} and height {1}")]
    EmptyImage(usize, usize),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the number of elements of the image does not fit in memory.
    #[error("Image size {0}x{1} is too large")]
    ImageTooLarge(usize, usize),

    /// Error when the number of channels of a raw buffer is not supported.
    #[error("Unsupported number of channels {0}, expected {1}")]
    UnsupportedChannels(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
