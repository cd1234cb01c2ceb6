use binmorph_image::BinaryImage;

use super::iterative::{peel_until_stable, Pass};
use super::neighbors::Neighborhood;

/// Thin every object down to a one pixel wide curve.
///
/// Two sub-iteration parallel thinning in the formulation of Lam, Lee and Suen
/// (after Guo and Hall): a pixel is removed when its Hilditch crossing number is
/// one, `2 <= min(N1, N2) <= 3`, and the directional condition of the current
/// sub-iteration holds. Endpoints are never removed and the number of connected
/// components is preserved. Runs until a full pass changes nothing.
///
/// # Arguments
///
/// * `src` - The source mask.
///
/// # Returns
///
/// The thinned mask.
pub fn thin(src: &BinaryImage) -> BinaryImage {
    thin_with_limit(src, None)
}

/// Like [`thin`], stopping after at most `max_iterations` full passes.
pub fn thin_with_limit(src: &BinaryImage, max_iterations: Option<usize>) -> BinaryImage {
    peel_until_stable(
        src,
        "thin",
        max_iterations,
        |nb, pass| is_simple_border(nb) && directional(nb, pass),
        is_simple_border,
    )
}

// `x[k - 1]` is x_k counter-clockwise from east, with x_9 = x_1.
fn x(nb: &[bool; 8], k: usize) -> bool {
    nb[(k - 1) % 8]
}

fn crossing_number(nb: &[bool; 8]) -> usize {
    (1..=4)
        .filter(|&i| !x(nb, 2 * i - 1) && (x(nb, 2 * i) || x(nb, 2 * i + 1)))
        .count()
}

fn is_simple_border(nb: &Neighborhood) -> bool {
    let nb = nb.counter_clockwise_from_east();
    if crossing_number(&nb) != 1 {
        return false;
    }

    let n1 = (1..=4)
        .filter(|&k| x(&nb, 2 * k - 1) || x(&nb, 2 * k))
        .count();
    let n2 = (1..=4)
        .filter(|&k| x(&nb, 2 * k) || x(&nb, 2 * k + 1))
        .count();

    (2..=3).contains(&n1.min(n2))
}

fn directional(nb: &Neighborhood, pass: Pass) -> bool {
    let nb = nb.counter_clockwise_from_east();
    match pass {
        Pass::First => !((x(&nb, 2) || x(&nb, 3) || !x(&nb, 8)) && x(&nb, 1)),
        Pass::Second => !((x(&nb, 6) || x(&nb, 7) || !x(&nb, 4)) && x(&nb, 5)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{label, Connectivity};
    use crate::testing::{mask_from_rows, random_mask, square_on_canvas};
    use binmorph_image::ImageError;

    #[test]
    fn test_thin_bar_to_line() -> Result<(), ImageError> {
        let src = mask_from_rows(&[
            "............",
            ".##########.",
            ".##########.",
            ".##########.",
            "............",
        ])?;
        let thinned = thin(&src);

        assert!(thinned.is_subset_of(&src));
        assert_eq!(label(&thinned, Connectivity::Eight).1, 1);
        // away from the ends every column keeps exactly one pixel
        for x in 3..9 {
            let column = (0..5).filter(|&y| thinned.get(x, y)).count();
            assert_eq!(column, 1, "column {x}");
        }

        Ok(())
    }

    #[test]
    fn test_thin_keeps_lines_and_points() -> Result<(), ImageError> {
        let src = mask_from_rows(&[
            ".......",
            ".#####.",
            ".......",
            "...#...",
            ".......",
        ])?;
        assert_eq!(thin(&src), src);

        Ok(())
    }

    #[test]
    fn test_thin_keeps_hole() -> Result<(), ImageError> {
        let src = mask_from_rows(&[
            "............",
            ".##########.",
            ".##########.",
            ".###....###.",
            ".###....###.",
            ".###....###.",
            ".##########.",
            ".##########.",
            "............",
        ])?;
        let thinned = thin(&src);
        assert!(thinned.is_subset_of(&src));
        assert_eq!(label(&thinned, Connectivity::Eight).1, 1);

        // outside and the enclosed hole stay two separate background regions
        let background = thinned.map_pixels(|_, _, v| !v);
        assert_eq!(label(&background, Connectivity::Four).1, 2);
        assert!(!thinned.get(5, 4));

        Ok(())
    }

    #[test]
    fn test_thin_is_idempotent() -> Result<(), ImageError> {
        let src = square_on_canvas(12, 2, 7)?;
        let once = thin(&src);
        assert_eq!(thin(&once), once);
        assert!(once.has_foreground());

        Ok(())
    }

    #[test]
    fn test_thin_preserves_components_random() -> Result<(), ImageError> {
        for seed in 0..25 {
            let src = random_mask(seed, 24, 18, 0.6)?;
            let (_, expected) = label(&src, Connectivity::Eight);
            let (_, found) = label(&thin(&src), Connectivity::Eight);
            assert_eq!(found, expected, "seed {seed}");
        }

        Ok(())
    }

    #[test]
    fn test_thin_with_limit_zero() -> Result<(), ImageError> {
        let src = square_on_canvas(8, 1, 5)?;
        assert_eq!(thin_with_limit(&src, Some(0)), src);
        assert_ne!(thin_with_limit(&src, Some(1)), src);

        Ok(())
    }
}
