use binmorph_image::BinaryImage;

use super::kernel::StructuringElement;
use crate::parallel::{self, ExecutionStrategy};

/// Erode a binary image using a [`StructuringElement`].
///
/// Erosion shrinks foreground regions. A pixel stays foreground only if every
/// pixel under the structuring element is foreground; pixels outside the image
/// count as background.
///
/// # Arguments
///
/// * `src` - The source mask.
/// * `kernel` - The morphological structuring element.
/// * `iterations` - How many times the erosion is applied. Zero returns a copy.
///
/// # Returns
///
/// The eroded mask.
pub fn erode(src: &BinaryImage, kernel: &StructuringElement, iterations: usize) -> BinaryImage {
    erode_with(src, kernel, iterations, ExecutionStrategy::Serial)
}

/// Erode a binary image with an explicit [`ExecutionStrategy`].
///
/// See [`erode`].
pub fn erode_with(
    src: &BinaryImage,
    kernel: &StructuringElement,
    iterations: usize,
    strategy: ExecutionStrategy,
) -> BinaryImage {
    iterate(src, iterations, |cur| {
        apply_kernel(cur, strategy, |x, y| {
            kernel
                .offsets()
                .iter()
                .all(|&(dx, dy)| cur.get_padded(x + dx, y + dy))
        })
    })
}

/// Dilate a binary image using a [`StructuringElement`].
///
/// Dilation expands foreground regions. A pixel becomes foreground if any pixel
/// under the structuring element is foreground.
///
/// # Arguments
///
/// * `src` - The source mask.
/// * `kernel` - The morphological structuring element.
/// * `iterations` - How many times the dilation is applied. Zero returns a copy.
///
/// # Returns
///
/// The dilated mask.
pub fn dilate(src: &BinaryImage, kernel: &StructuringElement, iterations: usize) -> BinaryImage {
    dilate_with(src, kernel, iterations, ExecutionStrategy::Serial)
}

/// Dilate a binary image with an explicit [`ExecutionStrategy`].
///
/// See [`dilate`].
pub fn dilate_with(
    src: &BinaryImage,
    kernel: &StructuringElement,
    iterations: usize,
    strategy: ExecutionStrategy,
) -> BinaryImage {
    iterate(src, iterations, |cur| {
        apply_kernel(cur, strategy, |x, y| {
            kernel
                .offsets()
                .iter()
                .any(|&(dx, dy)| cur.get_padded(x + dx, y + dy))
        })
    })
}

/// Extract the boundary of every object: `src AND NOT erode(src)`.
///
/// With the 3x3 element the result is the one pixel wide contour of each
/// foreground region, including the contours around holes.
pub fn boundary(src: &BinaryImage) -> BinaryImage {
    let eroded = erode(src, &StructuringElement::square3(), 1);
    src.map_pixels(|x, y, v| v && !eroded.get(x, y))
}

/// Thicken every object by exactly one layer of pixels (a single 3x3 dilation).
pub fn thicken(src: &BinaryImage) -> BinaryImage {
    dilate(src, &StructuringElement::square3(), 1)
}

fn iterate(
    src: &BinaryImage,
    iterations: usize,
    step: impl Fn(&BinaryImage) -> BinaryImage,
) -> BinaryImage {
    let mut cur = src.clone();
    for _ in 0..iterations {
        cur = step(&cur);
    }
    cur
}

fn apply_kernel(
    src: &BinaryImage,
    strategy: ExecutionStrategy,
    f: impl Fn(isize, isize) -> bool + Send + Sync,
) -> BinaryImage {
    let mut dst = src.empty_like();
    let width = src.width();
    parallel::for_each_row(strategy, dst.as_slice_mut(), width, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = f(x as isize, y as isize);
        }
    });
    dst
}
