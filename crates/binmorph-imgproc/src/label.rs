//! Connected component labeling and visualization.

use std::collections::VecDeque;

use binmorph_image::{BinaryImage, Image, LabelImage};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seed used by [`colorize`] unless the caller picks another one.
pub const DEFAULT_COLOR_SEED: u64 = 42;

/// Pixel adjacency used to decide whether two foreground pixels touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Connectivity {
    /// Horizontal and vertical neighbours only.
    Four,
    /// Horizontal, vertical and diagonal neighbours.
    #[default]
    Eight,
}

impl Connectivity {
    fn offsets(&self) -> &'static [(isize, isize)] {
        const FOUR: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(isize, isize); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

/// A connected foreground component of a label image.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// The label of the component, starting at 1.
    pub id: u32,
    /// The `(x, y)` coordinates of the pixels, in raster order.
    pub pixels: Vec<(usize, usize)>,
    /// The number of pixels.
    pub area: usize,
    /// The mean `(x, y)` position of the pixels.
    pub centroid: (f64, f64),
}

/// Label the connected foreground components of a mask.
///
/// Components are discovered in raster order of their first pixel and grown
/// breadth first, so labels are sequential from `1` and `0` is background.
///
/// # Arguments
///
/// * `src` - The mask to label.
/// * `connectivity` - The pixel adjacency.
///
/// # Returns
///
/// The label image and the number of components found.
///
/// # Examples
///
/// ```
/// use binmorph_image::{BinaryImage, ImageSize};
/// use binmorph_imgproc::label::{label, Connectivity};
///
/// let mask = BinaryImage::from_fn(ImageSize { width: 3, height: 3 }, |x, y| x == y).unwrap();
///
/// assert_eq!(label(&mask, Connectivity::Eight).1, 1);
/// assert_eq!(label(&mask, Connectivity::Four).1, 3);
/// ```
pub fn label(src: &BinaryImage, connectivity: Connectivity) -> (LabelImage, usize) {
    let mut labels = src.as_image().map(|_| 0u32);
    let (width, height) = (src.width(), src.height());
    let mut queue = VecDeque::new();
    let mut count = 0u32;

    for (x0, y0) in src.foreground() {
        let out = labels.as_slice_mut();
        if out[y0 * width + x0] != 0 {
            continue;
        }

        count += 1;
        out[y0 * width + x0] = count;
        queue.push_back((x0, y0));

        while let Some((x, y)) = queue.pop_front() {
            for &(dx, dy) in connectivity.offsets() {
                let (nx, ny) = (x as isize + dx, y as isize + dy);
                if !src.get_padded(nx, ny) {
                    continue;
                }
                let idx = ny as usize * width + nx as usize;
                if out[idx] == 0 {
                    out[idx] = count;
                    queue.push_back((nx as usize, ny as usize));
                }
            }
        }
    }

    log::trace!("label: {count} components in {width}x{height} image");

    (labels, count as usize)
}

/// Collect the regions of a label image, ordered by ascending label.
pub fn regions(labels: &LabelImage) -> Vec<Region> {
    let width = labels.width();
    let num_labels = labels.as_slice().iter().copied().max().unwrap_or(0) as usize;

    let mut pixels = vec![Vec::new(); num_labels];
    for (idx, &id) in labels.as_slice().iter().enumerate() {
        if id > 0 {
            pixels[id as usize - 1].push((idx % width, idx / width));
        }
    }

    pixels
        .into_iter()
        .enumerate()
        .filter(|(_, pixels)| !pixels.is_empty())
        .map(|(i, pixels)| {
            let area = pixels.len();
            let (sx, sy) = pixels
                .iter()
                .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x as f64, sy + y as f64));
            Region {
                id: i as u32 + 1,
                centroid: (sx / area as f64, sy / area as f64),
                area,
                pixels,
            }
        })
        .collect()
}

/// Paint every labeled component with a pseudo-random color.
///
/// Colors are drawn from a generator seeded with `seed`, one RGB triple per label
/// in ascending label order, each channel in `0..255`. Background stays black.
/// The same labeling and seed always produce the same image.
pub fn colorize(labels: &LabelImage, seed: u64) -> Image<u8, 3> {
    let num_labels = labels.as_slice().iter().copied().max().unwrap_or(0) as usize;

    let mut rng = StdRng::seed_from_u64(seed);
    let palette = (0..num_labels)
        .map(|_| {
            [
                rng.random_range(0..255u8),
                rng.random_range(0..255u8),
                rng.random_range(0..255u8),
            ]
        })
        .collect::<Vec<_>>();

    let mut dst = labels.filled_like::<u8, 3>(0);
    for (pixel, &id) in dst.as_slice_mut().chunks_exact_mut(3).zip(labels.as_slice()) {
        if id > 0 {
            pixel.copy_from_slice(&palette[id as usize - 1]);
        }
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mask_from_rows, random_mask};
    use binmorph_image::ImageError;

    #[test]
    fn test_label_two_objects() -> Result<(), ImageError> {
        let src = mask_from_rows(&[
            "##....", //
            "##..#.", //
            "....##", //
        ])?;
        let (labels, n) = label(&src, Connectivity::Eight);
        assert_eq!(n, 2);
        #[rustfmt::skip]
        assert_eq!(
            labels.as_slice(),
            &[
                1, 1, 0, 0, 0, 0,
                1, 1, 0, 0, 2, 0,
                0, 0, 0, 0, 2, 2,
            ]
        );

        Ok(())
    }

    #[test]
    fn test_label_connectivity() -> Result<(), ImageError> {
        let src = mask_from_rows(&["#.#", ".#.", "#.#"])?;
        assert_eq!(label(&src, Connectivity::Eight).1, 1);
        assert_eq!(label(&src, Connectivity::Four).1, 5);
        assert_eq!(Connectivity::default(), Connectivity::Eight);

        Ok(())
    }

    #[test]
    fn test_label_empty() -> Result<(), ImageError> {
        let src = mask_from_rows(&["...", "..."])?;
        let (labels, n) = label(&src, Connectivity::Eight);
        assert_eq!(n, 0);
        assert!(labels.as_slice().iter().all(|&v| v == 0));
        assert!(regions(&labels).is_empty());

        Ok(())
    }

    #[test]
    fn test_labels_are_sequential_random() -> Result<(), ImageError> {
        for seed in 0..10 {
            let src = random_mask(seed, 30, 20, 0.4)?;
            let (labels, n) = label(&src, Connectivity::Eight);
            let found = regions(&labels);
            assert_eq!(found.len(), n);
            for (i, region) in found.iter().enumerate() {
                assert_eq!(region.id as usize, i + 1);
            }
            let area = found.iter().map(|r| r.area).sum::<usize>();
            assert_eq!(area, src.count_foreground());
        }

        Ok(())
    }

    #[test]
    fn test_regions_centroid() -> Result<(), ImageError> {
        let src = mask_from_rows(&["###..", "###..", "###.#"])?;
        let (labels, _) = label(&src, Connectivity::Eight);
        let found = regions(&labels);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].area, 9);
        assert_eq!(found[0].centroid, (1.0, 1.0));
        assert_eq!(found[1].pixels, vec![(4, 2)]);
        assert_eq!(found[1].centroid, (4.0, 2.0));

        Ok(())
    }

    #[test]
    fn test_colorize_deterministic() -> Result<(), ImageError> {
        let src = mask_from_rows(&["#..#", "....", "#..#"])?;
        let (labels, n) = label(&src, Connectivity::Eight);
        assert_eq!(n, 4);

        let a = colorize(&labels, DEFAULT_COLOR_SEED);
        let b = colorize(&labels, DEFAULT_COLOR_SEED);
        assert_eq!(a, b);
        assert_eq!(a.num_channels(), 3);
        assert_eq!(a.size(), labels.size());

        // background is black, every component is one flat color
        assert_eq!(a.get_pixel(1, 1, 0)?, &0);
        assert_eq!(a.get_pixel(1, 1, 1)?, &0);
        assert_eq!(a.get_pixel(1, 1, 2)?, &0);
        assert!(a.as_slice().iter().all(|&c| c < 255));

        Ok(())
    }

    #[test]
    fn test_colorize_same_component_same_color() -> Result<(), ImageError> {
        let src = mask_from_rows(&["##.", "...", "..#"])?;
        let (labels, _) = label(&src, Connectivity::Eight);
        let colored = colorize(&labels, 7);
        let pixel = |x: usize, y: usize| -> Result<[u8; 3], ImageError> {
            Ok([
                *colored.get_pixel(x, y, 0)?,
                *colored.get_pixel(x, y, 1)?,
                *colored.get_pixel(x, y, 2)?,
            ])
        };
        assert_eq!(pixel(0, 0)?, pixel(1, 0)?);

        Ok(())
    }
}
