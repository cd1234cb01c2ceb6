use binmorph_image::BinaryImage;

use super::iterative::{peel_until_stable, Pass};
use super::neighbors::Neighborhood;

/// Extract the topological skeleton of every object.
///
/// Zhang-Suen skeletonization: in each sub-iteration a pixel with
/// `2 <= B(p) <= 6` foreground neighbours and exactly one background to
/// foreground transition `A(p)` around it is removed when
///
/// * first sub-iteration: `P2·P4·P6 = 0` and `P4·P6·P8 = 0`,
/// * second sub-iteration: `P2·P4·P8 = 0` and `P2·P6·P8 = 0`.
///
/// Marked pixels are re-validated against the partially peeled image before
/// being removed, so the skeleton stays one pixel wide while keeping the number
/// of connected components and holes of the input. Runs until a full pass
/// changes nothing.
///
/// # Arguments
///
/// * `src` - The source mask.
///
/// # Returns
///
/// The skeleton mask, a subset of `src`.
pub fn skeletonize(src: &BinaryImage) -> BinaryImage {
    peel_until_stable(
        src,
        "skeletonize",
        None,
        |nb, pass| nb.is_deletable() && directional(nb, pass),
        Neighborhood::is_deletable,
    )
}

fn directional(nb: &Neighborhood, pass: Pass) -> bool {
    let [p2, _, p4, _, p6, _, p8, _] = nb.clockwise();
    match pass {
        Pass::First => !(p2 && p4 && p6) && !(p4 && p6 && p8),
        Pass::Second => !(p2 && p4 && p8) && !(p2 && p6 && p8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{label, Connectivity};
    use crate::testing::{mask_from_rows, random_mask, square_on_canvas};
    use binmorph_image::ImageError;

    #[test]
    fn test_skeleton_two_by_two_survives() -> Result<(), ImageError> {
        let src = mask_from_rows(&["....", ".##.", ".##.", "...."])?;
        let skeleton = skeletonize(&src);
        assert_eq!(skeleton, mask_from_rows(&["....", "....", ".##.", "...."])?);

        Ok(())
    }

    #[test]
    fn test_skeleton_of_line_is_line() -> Result<(), ImageError> {
        let src = mask_from_rows(&["......", ".####.", "......"])?;
        assert_eq!(skeletonize(&src), src);

        Ok(())
    }

    #[test]
    fn test_skeleton_keeps_hole() -> Result<(), ImageError> {
        let src = mask_from_rows(&[
            "...........",
            ".#########.",
            ".#########.",
            ".###...###.",
            ".###...###.",
            ".###...###.",
            ".#########.",
            ".#########.",
            "...........",
        ])?;
        let skeleton = skeletonize(&src);
        assert!(skeleton.is_subset_of(&src));

        // the ring stays closed: the hole is still separated from the outside
        let holes = skeleton.map_pixels(|_, _, v| !v);
        let (_, background_regions) = label(&holes, Connectivity::Four);
        assert_eq!(background_regions, 2);
        assert_eq!(label(&skeleton, Connectivity::Eight).1, 1);

        Ok(())
    }

    #[test]
    fn test_skeleton_of_square_is_sparse() -> Result<(), ImageError> {
        let src = square_on_canvas(15, 2, 11)?;
        let skeleton = skeletonize(&src);
        assert!(skeleton.is_subset_of(&src));
        assert_eq!(label(&skeleton, Connectivity::Eight).1, 1);
        assert!(skeleton.count_foreground() * 3 < src.count_foreground());
        // converged: a second run removes nothing
        assert_eq!(skeletonize(&skeleton), skeleton);

        Ok(())
    }

    #[test]
    fn test_skeleton_preserves_components_random() -> Result<(), ImageError> {
        for seed in 0..25 {
            let src = random_mask(100 + seed, 26, 19, 0.65)?;
            let (_, expected) = label(&src, Connectivity::Eight);
            let skeleton = skeletonize(&src);
            assert!(skeleton.is_subset_of(&src));
            assert_eq!(label(&skeleton, Connectivity::Eight).1, expected, "seed {seed}");
        }

        Ok(())
    }
}
