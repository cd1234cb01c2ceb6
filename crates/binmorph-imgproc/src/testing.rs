//! Helpers shared by the unit tests of this crate.

use binmorph_image::{BinaryImage, ImageError, ImageSize};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A `size` x `size` canvas with a filled square of side `side` at `(start, start)`.
pub(crate) fn square_on_canvas(
    size: usize,
    start: usize,
    side: usize,
) -> Result<BinaryImage, ImageError> {
    let range = start..start + side;
    BinaryImage::from_fn(
        ImageSize {
            width: size,
            height: size,
        },
        |x, y| range.contains(&x) && range.contains(&y),
    )
}

/// Build a mask from rows of text where `#` marks foreground.
pub(crate) fn mask_from_rows(rows: &[&str]) -> Result<BinaryImage, ImageError> {
    let size = ImageSize {
        width: rows.first().map_or(0, |r| r.len()),
        height: rows.len(),
    };
    let data = rows
        .iter()
        .flat_map(|row| row.bytes().map(|b| b == b'#'))
        .collect();
    BinaryImage::new(size, data)
}

/// A seeded random mask where each pixel is foreground with probability `density`.
pub(crate) fn random_mask(
    seed: u64,
    width: usize,
    height: usize,
    density: f64,
) -> Result<BinaryImage, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    BinaryImage::from_fn(ImageSize { width, height }, |_, _| rng.random_bool(density))
}
