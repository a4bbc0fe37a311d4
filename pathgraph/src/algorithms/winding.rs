//! Winding number calculation for point-in-outline testing.
//!
//! Uses horizontal ray casting with signed crossing count to determine
//! the winding number of a point relative to a polygon.

use crate::algorithms::outline::Outline;
use crate::graph::PlanarGraph;
use crate::model::Point;

/// Compute the winding number of a point relative to a polygon.
///
/// Returns the number of times the polygon winds around the point; zero
/// means outside. Polygons with fewer than three vertices enclose nothing.
pub fn winding_number(p: Point, polygon: &[Point]) -> i32 {
    if polygon.len() < 3 {
        return 0;
    }

    let mut winding = 0i32;
    let n = polygon.len();

    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];

        if p1.y <= p.y {
            if p2.y > p.y && cross_product(p1.x - p.x, p1.y - p.y, p2.x - p.x, p2.y - p.y) > 0.0 {
                winding += 1;
            }
        } else if p2.y <= p.y && cross_product(p1.x - p.x, p1.y - p.y, p2.x - p.x, p2.y - p.y) < 0.0 {
            winding -= 1;
        }
    }

    winding
}

/// Check if a point is inside a polygon using the non-zero winding rule.
#[inline]
pub fn point_in_polygon_nonzero(p: Point, polygon: &[Point]) -> bool {
    winding_number(p, polygon) != 0
}

#[inline]
fn cross_product(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

impl Outline {
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon_nonzero(p, &self.points())
    }
}

impl PlanarGraph {
    /// Whether `p` lies inside the outline of this graph.
    pub fn contains(&self, p: Point) -> bool {
        self.get_outline().contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphNode;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn winding_sign_follows_orientation() {
        let square = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
        assert_eq!(winding_number(pt(5.0, 5.0), &square), 1);
        assert_eq!(winding_number(pt(-5.0, 5.0), &square), 0);
        assert_eq!(winding_number(pt(5.0, 15.0), &square), 0);

        let reversed: Vec<Point> = square.iter().rev().copied().collect();
        assert_eq!(winding_number(pt(5.0, 5.0), &reversed), -1);
    }

    #[test]
    fn concave_notch_is_outside() {
        let l_shape = vec![
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(10.0, 5.0),
            pt(5.0, 5.0),
            pt(5.0, 10.0),
            pt(0.0, 10.0),
        ];
        assert!(point_in_polygon_nonzero(pt(2.0, 7.0), &l_shape));
        assert!(!point_in_polygon_nonzero(pt(7.0, 7.0), &l_shape));
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        assert_eq!(winding_number(pt(0.0, 0.0), &[]), 0);
        assert_eq!(winding_number(pt(0.0, 0.0), &[pt(0.0, 0.0), pt(1.0, 1.0)]), 0);
    }

    #[test]
    fn graph_contains_uses_outline() {
        let mut g = PlanarGraph::new();
        g.add_edge(GraphNode::new("a", 0.0, 0.0), GraphNode::new("b", 10.0, 0.0));
        g.add_edge(GraphNode::new("b", 10.0, 0.0), GraphNode::new("c", 5.0, 10.0));
        g.add_edge(GraphNode::new("c", 5.0, 10.0), GraphNode::new("a", 0.0, 0.0));
        assert!(g.contains(pt(5.0, 3.0)));
        assert!(!g.contains(pt(0.0, 9.0)));
    }
}
