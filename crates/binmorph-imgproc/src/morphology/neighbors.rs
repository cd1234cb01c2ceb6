use binmorph_image::BinaryImage;

/// Offsets of the eight neighbours, clockwise starting at north.
const CLOCKWISE: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// The 8-neighbourhood of a pixel.
///
/// Stored clockwise from north, i.e. `P2..P9` in the usual thinning notation:
/// `[N, NE, E, SE, S, SW, W, NW]`. Neighbours outside the image are background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Neighborhood([bool; 8]);

impl Neighborhood {
    pub(crate) fn of(src: &BinaryImage, x: usize, y: usize) -> Self {
        let (x, y) = (x as isize, y as isize);
        let mut values = [false; 8];
        for (value, (dx, dy)) in values.iter_mut().zip(CLOCKWISE) {
            *value = src.get_padded(x + dx, y + dy);
        }
        Self(values)
    }

    /// `P2..P9`, clockwise from north.
    pub(crate) fn clockwise(&self) -> [bool; 8] {
        self.0
    }

    /// `x1..x8`, counter-clockwise from east.
    pub(crate) fn counter_clockwise_from_east(&self) -> [bool; 8] {
        let [n, ne, e, se, s, sw, w, nw] = self.0;
        [e, ne, n, nw, w, sw, s, se]
    }

    /// Number of foreground neighbours, `B(p)`.
    pub(crate) fn count(&self) -> usize {
        self.0.iter().filter(|&&v| v).count()
    }

    /// Number of background to foreground transitions around the pixel, `A(p)`.
    pub(crate) fn transitions(&self) -> usize {
        (0..8)
            .filter(|&i| !self.0[i] && self.0[(i + 1) % 8])
            .count()
    }

    /// Removing a pixel with this neighbourhood keeps the number of 8-connected
    /// components and 4-connected holes, and does not shorten a curve end.
    pub(crate) fn is_deletable(&self) -> bool {
        let count = self.count();
        (2..=6).contains(&count) && self.transitions() == 1
    }
}
