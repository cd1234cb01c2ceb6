use std::path::Path;

use binmorph_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to 8-bit grayscale.
///
/// The method tries to read from any image format supported by the image crate.
/// Color images are converted to luma.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A grayscale image with a single channel.
pub fn read_image_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()
        .map_err(IoError::ImageDecodeError)?;

    log::debug!(
        "decoded {} as {:?} {}x{}",
        file_path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

/// Writes a single channel 8-bit image to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The grayscale image.
pub fn write_image_png_gray8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 1>,
) -> Result<(), IoError> {
    write_png_impl(file_path.as_ref(), image.as_slice(), image.size(), image::ExtendedColorType::L8)
}

/// Writes a three channel 8-bit image to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The RGB image.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path.as_ref(),
        image.as_slice(),
        image.size(),
        image::ExtendedColorType::Rgb8,
    )
}

fn write_png_impl(
    file_path: &Path,
    data: &[u8],
    size: ImageSize,
    color_type: image::ExtendedColorType,
) -> Result<(), IoError> {
    image::save_buffer_with_format(
        file_path,
        data,
        size.width as u32,
        size.height as u32,
        color_type,
        image::ImageFormat::Png,
    )
    .map_err(IoError::PngEncodingError)
}
