use binmorph_image::BinaryImage;
use geo::{ConvexHull, Coord, MultiPoint, Point};

/// Compute the convex hull of the foreground as a mask.
///
/// The hull is taken over the pixel centres of the foreground and rasterized
/// back by marking every pixel whose centre lies inside the hull or on its
/// edges. Because the hull vertices are themselves pixel centres the result is
/// stable: applying the function twice gives the same mask as applying it once.
///
/// A single pixel or a set of collinear pixels produces the covering point or
/// segment. An image without foreground produces an empty mask.
///
/// # Arguments
///
/// * `src` - The source mask.
///
/// # Returns
///
/// The filled hull, always a superset of `src`.
pub fn convex_hull(src: &BinaryImage) -> BinaryImage {
    // only the outermost pixel of each row can be a hull vertex
    let mut extremes: Vec<Point<i64>> = Vec::new();
    for y in 0..src.height() {
        let row = &src.as_slice()[y * src.width()..(y + 1) * src.width()];
        let first = row.iter().position(|&v| v);
        let last = row.iter().rposition(|&v| v);
        if let (Some(first), Some(last)) = (first, last) {
            extremes.push(Point::new(first as i64, y as i64));
            if last != first {
                extremes.push(Point::new(last as i64, y as i64));
            }
        }
    }

    if extremes.is_empty() {
        return src.empty_like();
    }

    let polygon = MultiPoint::from(extremes).convex_hull();
    let mut vertices: Vec<Coord<i64>> = polygon.exterior().coords().copied().collect();
    vertices.dedup();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    let shape = HullShape::new(vertices);
    log::trace!("convex_hull: {shape:?}");

    src.map_pixels(|x, y, _| {
        shape.contains(Coord {
            x: x as i64,
            y: y as i64,
        })
    })
}

/// A convex polygon with lattice vertices, or the point/segment it degenerates to.
#[derive(Debug)]
enum HullShape {
    Segment(Coord<i64>, Coord<i64>),
    Polygon(Vec<Coord<i64>>),
}

impl HullShape {
    fn new(vertices: Vec<Coord<i64>>) -> Self {
        let twice_area = (0..vertices.len())
            .map(|i| {
                let (a, b) = (vertices[i], vertices[(i + 1) % vertices.len()]);
                a.x * b.y - b.x * a.y
            })
            .sum::<i64>();

        if vertices.len() >= 3 && twice_area != 0 {
            return HullShape::Polygon(vertices);
        }

        // all vertices lie on one line: keep its two extreme points
        let min = vertices.iter().min_by_key(|c| (c.x, c.y)).copied();
        let max = vertices.iter().max_by_key(|c| (c.x, c.y)).copied();
        match (min, max) {
            (Some(a), Some(b)) => HullShape::Segment(a, b),
            _ => HullShape::Polygon(Vec::new()),
        }
    }

    fn contains(&self, p: Coord<i64>) -> bool {
        match self {
            HullShape::Segment(a, b) => {
                cross(*a, *b, p) == 0
                    && a.x.min(b.x) <= p.x
                    && p.x <= a.x.max(b.x)
                    && a.y.min(b.y) <= p.y
                    && p.y <= a.y.max(b.y)
            }
            HullShape::Polygon(vertices) => {
                if vertices.is_empty() {
                    return false;
                }
                let n = vertices.len();
                let sides = (0..n).map(|i| cross(vertices[i], vertices[(i + 1) % n], p).signum());
                let (mut left, mut right) = (false, false);
                for side in sides {
                    left |= side > 0;
                    right |= side < 0;
                }
                !(left && right)
            }
        }
    }
}

/// Twice the signed area of the triangle `a, b, p`.
fn cross(a: Coord<i64>, b: Coord<i64>, p: Coord<i64>) -> i64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}
