//! Rounded-corner geometry for outline polygons.
//!
//! A fillet of radius `r` at a corner with interior angle `θ` touches both
//! incident edges at distance `r / tan(θ/2)` from the corner. Reflex corners
//! use the supplementary half-angle, see [`fillet_half_angle`].

use std::f64::consts::TAU;

use serde::Serialize;

use crate::config::PathEditConfig;
use crate::geometry::math::point_in_triangle;
use crate::geometry::tolerance::{fillet_half_angle, norm2, normalize_angle, EPS_LEN};
use crate::graph::PlanarGraph;
use crate::model::{GraphNode, Point};

/// Fillet geometry and drag handle for one outline corner.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerFillet {
    pub node: String,
    pub previous_node: String,
    pub next_node: String,
    pub corner: Point,
    pub previous: Point,
    pub next: Point,
    /// Tangent point on the edge towards the previous node.
    pub arc_start: Point,
    /// Tangent point on the edge towards the next node.
    pub arc_end: Point,
    pub handle: Point,
    /// Distance from the corner to each tangent point.
    pub offset: f64,
    pub corner_angle: f64,
    pub arc_angle: f64,
}

// Angle at p1 swept from the direction of p2 to the direction of p0.
fn corner_angle(p0: Point, p1: Point, p2: Point) -> f64 {
    let to_prev = (p0.y - p1.y).atan2(p0.x - p1.x);
    let to_next = (p2.y - p1.y).atan2(p2.x - p1.x);
    normalize_angle(-(to_next - to_prev))
}

/// Fillet descriptors for every usable corner of `outline`.
///
/// Corners whose previous and next node coincide (a two-node outline) or
/// that have a zero-length incident edge are skipped. The handle sits on the
/// corner bisector at `max(hypot(offset, radius), margin)` from the corner.
pub fn corner_fillets(outline: &[GraphNode], radius: f64, margin: f64) -> Vec<CornerFillet> {
    let n = outline.len();
    let mut fillets = Vec::with_capacity(n);
    for i in 0..n {
        let p0 = &outline[(i + n - 1) % n];
        let p1 = &outline[i];
        let p2 = &outline[(i + 1) % n];
        if p0.id == p2.id {
            continue;
        }
        let ((i10x, i10y), len10) = norm2(p0.x - p1.x, p0.y - p1.y);
        let ((i12x, i12y), len12) = norm2(p2.x - p1.x, p2.y - p1.y);
        if len10 == 0.0 || len12 == 0.0 {
            continue;
        }

        let angle = corner_angle(p0.point(), p1.point(), p2.point());
        assert!(angle != 0.0, "corner {} folds back onto its own edge", p1.id);
        let offset = radius / fillet_half_angle(angle).tan();

        // straight corners have no bisector; fall back to the edge normal
        let ((bx, by), blen) = norm2(i10x + i12x, i10y + i12y);
        let (bx, by) = if blen > EPS_LEN { (bx, by) } else { (-i12y, i12x) };
        let reach = offset.hypot(radius).max(margin);

        fillets.push(CornerFillet {
            node: p1.id.clone(),
            previous_node: p0.id.clone(),
            next_node: p2.id.clone(),
            corner: p1.point(),
            previous: p0.point(),
            next: p2.point(),
            arc_start: Point::new(p1.x + offset * i10x, p1.y + offset * i10y),
            arc_end: Point::new(p1.x + offset * i12x, p1.y + offset * i12y),
            handle: Point::new(p1.x + bx * reach, p1.y + by * reach),
            offset,
            corner_angle: angle,
            arc_angle: if angle > std::f64::consts::PI { TAU - angle } else { angle },
        });
    }
    fillets
}

/// Largest radius for which neighboring fillets do not overlap on any edge.
///
/// For edge `i` between corners `i` and `i+1` the tangent offsets must fit in
/// its length: `r * (1/tan(θi/2) + 1/tan(θi+1/2)) <= len`. Returns infinity for
/// an empty outline.
pub fn max_corner_radius(outline: &[Point]) -> f64 {
    let n = outline.len();
    let mut inv_tans = Vec::with_capacity(n);
    let mut lengths = Vec::with_capacity(n);
    for i in 0..n {
        let p0 = outline[(i + n - 1) % n];
        let p1 = outline[i];
        let p2 = outline[(i + 1) % n];
        let angle = corner_angle(p0, p1, p2);
        inv_tans.push(1.0 / fillet_half_angle(angle).tan());
        lengths.push((p2.x - p1.x).hypot(p2.y - p1.y));
    }
    let mut max = f64::INFINITY;
    for i in 0..n {
        max = max.min(lengths[i] / (inv_tans[i] + inv_tans[(i + 1) % n]));
    }
    max
}

/// The fillets whose corner triangle contains `pointer`; only those handles
/// are shown while hovering.
pub fn visible_corner_handles(fillets: &[CornerFillet], pointer: Point) -> Vec<CornerFillet> {
    fillets
        .iter()
        .filter(|f| point_in_triangle(pointer, [f.previous, f.corner, f.next]))
        .cloned()
        .collect()
}

impl PlanarGraph {
    /// Fillet descriptors along this graph's outline.
    pub fn corner_handles(&self, radius: f64, config: &PathEditConfig) -> Vec<CornerFillet> {
        corner_fillets(&self.get_outline().nodes, radius, config.corner_handle_margin)
    }

    /// Largest corner radius this graph's outline can carry.
    pub fn max_corner_radius(&self) -> f64 {
        max_corner_radius(&self.get_outline().points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn n(id: &str, x: f64, y: f64) -> GraphNode {
        GraphNode::new(id, x, y)
    }

    fn square() -> Vec<GraphNode> {
        vec![n("A", 0.0, 0.0), n("B", 10.0, 0.0), n("C", 10.0, 10.0), n("D", 0.0, 10.0)]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn square_corner_fillets() {
        let f = corner_fillets(&square(), 2.0, 0.0);
        assert_eq!(f.len(), 4);
        let a = &f[0];
        assert_eq!(a.node, "A");
        assert_eq!(a.previous_node, "D");
        assert_eq!(a.next_node, "B");
        assert!(close(a.corner_angle, 3.0 * FRAC_PI_2) || close(a.corner_angle, FRAC_PI_2));
        assert!(close(a.arc_angle, FRAC_PI_2));
        assert!(close(a.offset, 2.0));
        assert!(close(a.arc_start.x, 0.0) && close(a.arc_start.y, 2.0));
        assert!(close(a.arc_end.x, 2.0) && close(a.arc_end.y, 0.0));
        let reach = 8f64.sqrt();
        assert!(close(a.handle.x, reach / 2f64.sqrt()) && close(a.handle.y, reach / 2f64.sqrt()));
    }

    #[test]
    fn handle_respects_margin_at_zero_radius() {
        let f = corner_fillets(&square(), 0.0, 50.0);
        let a = &f[0];
        assert!(close(a.offset, 0.0));
        assert!(close(a.handle.x.hypot(a.handle.y), 50.0));
        assert_eq!(a.arc_start, a.corner);
    }

    #[test]
    fn reflex_corner_uses_supplementary_half_angle() {
        // L shape; corner (5,5) is reflex
        let l = vec![
            n("a", 0.0, 0.0),
            n("b", 10.0, 0.0),
            n("c", 10.0, 5.0),
            n("d", 5.0, 5.0),
            n("e", 5.0, 10.0),
            n("f", 0.0, 10.0),
        ];
        let f = corner_fillets(&l, 1.0, 0.0);
        assert_eq!(f.len(), 6);
        for fillet in &f {
            assert!(close(fillet.offset, 1.0), "offset at {} was {}", fillet.node, fillet.offset);
            assert!(close(fillet.arc_angle, FRAC_PI_2));
        }
        let angles: Vec<f64> = f.iter().map(|f| f.corner_angle).collect();
        let reflex = angles.iter().filter(|a| **a > PI).count();
        assert!(reflex == 1 || reflex == 5);
    }

    #[test]
    fn two_node_outline_has_no_corners() {
        let f = corner_fillets(&[n("a", 0.0, 0.0), n("b", 10.0, 0.0)], 5.0, 10.0);
        assert!(f.is_empty());
    }

    #[test]
    fn straight_corner_gets_zero_offset_and_normal_handle() {
        let tri = vec![n("a", 0.0, 0.0), n("m", 5.0, 0.0), n("b", 10.0, 0.0), n("c", 5.0, 10.0)];
        let f = corner_fillets(&tri, 1.0, 3.0);
        let m = f.iter().find(|f| f.node == "m").unwrap();
        assert!(m.offset.abs() < 1e-9);
        assert!(m.handle.x.is_finite() && m.handle.y.is_finite());
        assert!(close((m.handle.x - 5.0).abs(), 0.0));
        assert!(close(m.handle.y.abs(), 3.0));
    }

    #[test]
    fn max_radius_of_rectangle_is_half_short_side() {
        let rect = [Point::new(0.0, 0.0), Point::new(20.0, 0.0), Point::new(20.0, 8.0), Point::new(0.0, 8.0)];
        assert!(close(max_corner_radius(&rect), 4.0));
        assert_eq!(max_corner_radius(&[]), f64::INFINITY);
    }

    #[test]
    fn max_radius_shrinks_with_edge() {
        let mut last = f64::INFINITY;
        for w in [30.0, 20.0, 12.0, 6.0, 2.0] {
            let rect = [Point::new(0.0, 0.0), Point::new(w, 0.0), Point::new(w, 10.0), Point::new(0.0, 10.0)];
            let r = max_corner_radius(&rect);
            assert!(r <= last + 1e-12);
            last = r;
        }
    }

    #[test]
    fn graph_handles_follow_outline() {
        let mut g = PlanarGraph::new();
        let sq = square();
        for i in 0..sq.len() {
            g.add_edge(sq[i].clone(), sq[(i + 1) % sq.len()].clone());
        }
        let handles = g.corner_handles(3.0, &PathEditConfig::default());
        assert_eq!(handles.len(), 4);
        assert_eq!(handles[0].node, "A");
        assert!(handles.iter().all(|h| close(h.offset, 3.0)));
        assert!(close(g.max_corner_radius(), 5.0));
    }

    #[test]
    fn hovered_corner_only() {
        let f = corner_fillets(&square(), 1.0, 1.0);
        let visible = visible_corner_handles(&f, Point::new(1.0, 1.0));
        // (1,1) sits in the corner triangle at A but not in the one at C
        assert!(visible.iter().any(|v| v.node == "A"));
        assert!(visible.iter().all(|v| v.node != "C"));
    }
}
