use crate::model::Point;

/// Squared distance from `p` to segment `a-b`, with the segment parameter of
/// the closest point clamped to `[0, 1]`.
pub fn seg_distance_sq(p: Point, a: Point, b: Point) -> (f64, f64) {
    let vx = b.x - a.x; let vy = b.y - a.y;
    let wx = p.x - a.x; let wy = p.y - a.y;
    let vv = vx*vx + vy*vy;
    let t = if vv > 0.0 { ((wx*vx + wy*vy) / vv).clamp(0.0, 1.0) } else { 0.0 };
    let projx = a.x + t * vx; let projy = a.y + t * vy;
    let dx = p.x - projx; let dy = p.y - projy;
    (dx*dx + dy*dy, t)
}

/// Closest point on segment `a-b` to `p` and its distance.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> (Point, f64) {
    let (d2, t) = seg_distance_sq(p, a, b);
    (Point { x: a.x + (b.x - a.x) * t, y: a.y + (b.y - a.y) * t }, d2.sqrt())
}

/// Boundary-inclusive containment test that works for either triangle
/// orientation.
pub fn point_in_triangle(p: Point, tri: [Point; 3]) -> bool {
    let [a, b, c] = tri;
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);
    let ab = ax*by - ay*bx;
    let bc = bx*cy - by*cx;
    let ca = cx*ay - cy*ax;
    !(ab * bc < 0.0 || bc * ca < 0.0 || ca * ab < 0.0)
}
