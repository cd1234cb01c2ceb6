use binmorph_image::BinaryImage;

use crate::label::{label, regions, Connectivity};

/// Components smaller than this many pixels are removed by default.
pub const DEFAULT_PRUNE_SIZE: usize = 5;

/// Remove every 8-connected component with fewer than `min_size` pixels.
///
/// Intended for skeletons, where noise leaves short isolated fragments. Pixels
/// of the surviving components are untouched.
///
/// # Arguments
///
/// * `skeleton` - The mask to prune, usually the output of
///   [`skeletonize`](super::skeletonize).
/// * `min_size` - The smallest area that is kept.
///
/// # Returns
///
/// The pruned mask.
pub fn prune(skeleton: &BinaryImage, min_size: usize) -> BinaryImage {
    let (labels, num_components) = label(skeleton, Connectivity::Eight);

    let mut keep = vec![false; num_components + 1];
    let mut removed = 0;
    for region in regions(&labels) {
        if region.area >= min_size {
            keep[region.id as usize] = true;
        } else {
            removed += 1;
        }
    }
    log::debug!("prune: removed {removed} of {num_components} components below {min_size} pixels");

    let ids = labels.as_slice();
    let width = skeleton.width();
    skeleton.map_pixels(|x, y, v| v && keep[ids[y * width + x] as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::skeletonize;
    use crate::testing::{mask_from_rows, random_mask};
    use binmorph_image::ImageError;

    #[test]
    fn test_prune_specks_and_blob() -> Result<(), ImageError> {
        let src = mask_from_rows(&[
            "#.........",
            "..........",
            "...#####..",
            "...#####..",
            "...#####..",
            "...#####..",
            "..........",
            ".........#",
        ])?;
        assert_eq!(src.count_foreground(), 22);

        let pruned = prune(&src, DEFAULT_PRUNE_SIZE);
        assert_eq!(pruned.count_foreground(), 20);
        assert!(!pruned.get(0, 0));
        assert!(!pruned.get(9, 7));
        assert!(pruned.get(3, 2));

        Ok(())
    }

    #[test]
    fn test_prune_zero_keeps_everything() -> Result<(), ImageError> {
        let src = random_mask(3, 12, 12, 0.2)?;
        assert_eq!(prune(&src, 0), src);
        assert_eq!(prune(&src, 1), src);

        Ok(())
    }

    #[test]
    fn test_prune_skeleton_removes_exactly_small_components() -> Result<(), ImageError> {
        for seed in 0..15 {
            let skeleton = skeletonize(&random_mask(seed, 28, 20, 0.45)?);
            let min_size = 4;
            let pruned = prune(&skeleton, min_size);

            let (labels, _) = label(&skeleton, Connectivity::Eight);
            for region in regions(&labels) {
                let kept = region.area >= min_size;
                for &(x, y) in &region.pixels {
                    assert_eq!(pruned.get(x, y), kept, "seed {seed}");
                }
            }
            assert!(pruned.is_subset_of(&skeleton));
        }

        Ok(())
    }
}
