use binmorph_image::BinaryImage;

use super::neighbors::Neighborhood;

/// The two directional sub-iterations of a thinning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    First,
    Second,
}

/// Repeatedly peel pixels off `src` until a full pass removes nothing.
///
/// Each sub-iteration marks candidates with `candidate` against a snapshot of the
/// image, then deletes them in raster order, re-checking each one with
/// `still_deletable` against the partially thinned image. The re-check keeps
/// parallel deletions from breaking a two pixel thick stroke apart.
pub(crate) fn peel_until_stable(
    src: &BinaryImage,
    name: &str,
    max_iterations: Option<usize>,
    candidate: impl Fn(&Neighborhood, Pass) -> bool,
    still_deletable: impl Fn(&Neighborhood) -> bool,
) -> BinaryImage {
    let mut img = src.clone();
    let mut iteration = 0usize;

    loop {
        if let Some(max) = max_iterations {
            if iteration >= max {
                log::warn!("{name}: stopped after {max} iterations without converging");
                break;
            }
        }

        let removed = [Pass::First, Pass::Second]
            .into_iter()
            .map(|pass| sub_iteration(&mut img, pass, &candidate, &still_deletable))
            .sum::<usize>();
        iteration += 1;
        log::trace!("{name}: iteration {iteration} removed {removed} pixels");

        if removed == 0 {
            break;
        }
    }

    log::debug!(
        "{name}: converged after {iteration} iterations, {} of {} pixels left",
        img.count_foreground(),
        src.count_foreground()
    );

    img
}

fn sub_iteration(
    img: &mut BinaryImage,
    pass: Pass,
    candidate: &impl Fn(&Neighborhood, Pass) -> bool,
    still_deletable: &impl Fn(&Neighborhood) -> bool,
) -> usize {
    let snapshot: &BinaryImage = img;
    let marked = snapshot
        .foreground()
        .filter(|&(x, y)| candidate(&Neighborhood::of(snapshot, x, y), pass))
        .collect::<Vec<_>>();

    let width = img.width();
    let mut removed = 0;
    for (x, y) in marked {
        if still_deletable(&Neighborhood::of(img, x, y)) {
            img.as_slice_mut()[y * width + x] = false;
            removed += 1;
        }
    }

    removed
}
