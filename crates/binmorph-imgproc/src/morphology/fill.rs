use std::collections::VecDeque;

use binmorph_image::BinaryImage;

/// Fill the holes of every object.
///
/// The background is flood filled (4-connected) from the top-left corner. Any
/// background pixel the fill cannot reach is enclosed by foreground and becomes
/// foreground in the output.
///
/// If the corner pixel is itself foreground there is no seed to start from: no
/// hole is detected and the input is returned unchanged.
///
/// # Arguments
///
/// * `src` - The source mask.
///
/// # Returns
///
/// `src` with its holes set to foreground.
pub fn fill_holes(src: &BinaryImage) -> BinaryImage {
    if src.get(0, 0) {
        log::debug!("fill_holes: seed pixel (0, 0) is foreground, nothing to fill");
        return src.clone();
    }

    let width = src.width();
    let mut reached = src.empty_like();
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    reached.as_slice_mut()[0] = true;

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in [(0isize, -1isize), (-1, 0), (1, 0), (0, 1)] {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= src.height() {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            let seen = &mut reached.as_slice_mut()[ny * width + nx];
            if !*seen && !src.get(nx, ny) {
                *seen = true;
                queue.push_back((nx, ny));
            }
        }
    }

    src.map_pixels(|x, y, v| v || !reached.get(x, y))
}
