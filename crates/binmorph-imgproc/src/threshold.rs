use binmorph_image::{BinaryImage, Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Default cutoff used to binarize 8-bit grayscale images.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Apply a binary threshold to a grayscale image.
///
/// Every pixel strictly greater than `threshold` becomes foreground, every other
/// pixel becomes background.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `threshold` - The cutoff value.
///
/// # Returns
///
/// The binary mask with the same size as the input image.
///
/// # Examples
///
/// ```
/// use binmorph_image::{Image, ImageSize};
/// use binmorph_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 127, 128, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mask = threshold_binary(&image, 127).unwrap();
/// assert_eq!(mask.as_slice(), &[false, true, false, false, true, true]);
/// ```
pub fn threshold_binary(src: &Image<u8, 1>, threshold: u8) -> Result<BinaryImage, ImageError> {
    threshold_binary_with(src, threshold, ExecutionStrategy::Serial)
}

/// Apply a binary threshold to a grayscale image using the given execution strategy.
///
/// See [`threshold_binary`].
pub fn threshold_binary_with(
    src: &Image<u8, 1>,
    threshold: u8,
    strategy: ExecutionStrategy,
) -> Result<BinaryImage, ImageError> {
    if src.size().is_empty() {
        return Err(ImageError::EmptyImage(src.width(), src.height()));
    }

    let mut dst = BinaryImage::zeros(src.size())?;
    let width = src.width();
    let src_slice = src.as_slice();

    parallel::for_each_row(strategy, dst.as_slice_mut(), width, |y, row| {
        let src_row = &src_slice[y * width..(y + 1) * width];
        row.iter_mut()
            .zip(src_row)
            .for_each(|(dst_pixel, &src_pixel)| *dst_pixel = src_pixel > threshold);
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use binmorph_image::ImageSize;

    #[test]
    fn threshold_binary_strictly_greater() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 1>::new(
            ImageSize { width: 4, height: 2 },
            vec![
                0, 126, 127, 128,
                255, 200, 10, 127,
            ],
        )?;

        let mask = threshold_binary(&image, DEFAULT_THRESHOLD)?;
        assert_eq!(
            mask.as_slice(),
            &[false, false, false, true, true, true, false, false]
        );

        Ok(())
    }

    #[test]
    fn threshold_binary_strategies_agree() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 31,
            height: 17,
        };
        let image = Image::<u8, 1>::from_fn(size, |x, y| [((x * 37 + y * 11) % 256) as u8])?;

        let serial = threshold_binary_with(&image, 90, ExecutionStrategy::Serial)?;
        let parallel = threshold_binary_with(&image, 90, ExecutionStrategy::ParallelRows)?;
        assert_eq!(serial, parallel);

        Ok(())
    }

    #[test]
    fn threshold_binary_extremes() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            255,
        )?;
        assert_eq!(threshold_binary(&image, 255)?.count_foreground(), 0);
        assert_eq!(threshold_binary(&image, 0)?.count_foreground(), 9);

        Ok(())
    }
}
