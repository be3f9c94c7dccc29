use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent on a 4-connected grid with unit edge weights.
#[inline]
pub fn manhattan(from: Point, to: Point) -> u32 {
    (to.x - from.x).unsigned_abs() + (to.y - from.y).unsigned_abs()
}
