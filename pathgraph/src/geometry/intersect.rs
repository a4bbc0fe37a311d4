// Strict segment crossing test and crossing-point solver.
// Endpoint touches and collinear overlaps are deliberately not crossings.

use crate::model::Point;

#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True when segment `p00-p01` and segment `p10-p11` cross at a point interior
/// to both. Both orientation pairs must have strictly opposite signs, so an
/// exact endpoint touch or a collinear overlap returns false.
pub fn is_cross(p00: Point, p01: Point, p10: Point, p11: Point) -> bool {
    let o1 = orient(p00, p01, p10);
    let o2 = orient(p00, p01, p11);
    let o3 = orient(p10, p11, p00);
    let o4 = orient(p10, p11, p01);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// Intersection point of two segments already known to cross.
///
/// The point is interpolated between `p00` and `p01` weighted by their
/// distances to the line through `p10-p11`, which stays well conditioned for
/// any pair accepted by [`is_cross`].
pub fn cross_point(p00: Point, p01: Point, p10: Point, p11: Point) -> Point {
    let d0 = orient(p10, p11, p00).abs();
    let d1 = orient(p10, p11, p01).abs();
    let denom = d0 + d1;
    debug_assert!(denom > 0.0, "cross_point called on non-crossing segments");
    Point {
        x: p00.x + (p01.x - p00.x) * d0 / denom,
        y: p00.y + (p01.y - p00.y) * d0 / denom,
    }
}
