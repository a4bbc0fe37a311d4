use std::f64::consts::TAU;

use crate::geometry::tolerance::normalize_angle;
use crate::graph::PlanarGraph;
use crate::model::{GraphNode, Point};

/// Boundary polygon of a normalized graph: closed, non-repeating, starting at
/// its lowest-y node. With fewer than three nodes it is just the node list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    pub nodes: Vec<GraphNode>,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.nodes.len() < 3
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn points(&self) -> Vec<Point> {
        self.nodes.iter().map(GraphNode::point).collect()
    }

    /// Shoelace area; positive when the walk turns clockwise on screen (y down).
    pub fn signed_area(&self) -> f64 {
        let n = self.nodes.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..n {
            let p = &self.nodes[i];
            let q = &self.nodes[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }
}

// Index of the lowest node; among equal y the last one wins.
fn lowest_index(nodes: &[&GraphNode]) -> usize {
    (0..nodes.len())
        .reduce(|a, b| if nodes[a].y < nodes[b].y { a } else { b })
        .unwrap_or(0)
}

impl PlanarGraph {
    /// Outer boundary of the normalized graph.
    ///
    /// Starting at the lowest node, the walk repeatedly takes the neighbor
    /// reached by the smallest clockwise turn from the edge it arrived on,
    /// until it returns to the start. Turning straight back counts as a full
    /// turn, so the walk only backtracks at a dead end.
    ///
    /// Panics when two adjacent nodes share a position, since the walk then
    /// has no direction to compare.
    pub fn get_outline(&self) -> Outline {
        if !self.normalized {
            return self.normalize().get_outline();
        }
        if self.nodes.len() < 3 {
            return Outline { nodes: self.nodes.values().cloned().collect() };
        }

        let all: Vec<&GraphNode> = self.nodes.values().collect();
        let start = all[lowest_index(&all)];
        // each directed edge can be walked at most once before the walk closes
        let max_len = 2 * self.edge_count() + 1;

        let mut path: Vec<&GraphNode> = vec![start];
        loop {
            let reference = match path.as_slice() {
                [.., prev, cur] => self.get_argument(&cur.id, &prev.id),
                _ => 0.0,
            };
            let current = path[path.len() - 1];
            let next = self.next_clockwise(&current.id, reference);
            if next.id == start.id {
                break;
            }
            path.push(next);
            assert!(path.len() <= max_len, "outline walk from {} did not close", start.id);
        }
        tracing::debug!(start = %start.id, len = path.len(), "outline walk");

        let first = lowest_index(&path);
        path.rotate_left(first);
        Outline { nodes: path.into_iter().cloned().collect() }
    }

    // Neighbor of `id` with the smallest clockwise turn from `reference`.
    fn next_clockwise(&self, id: &str, reference: f64) -> &GraphNode {
        let from = self.expect_node(id);
        let mut best: Option<(&GraphNode, f64)> = None;
        for next_id in self.neighbors(id) {
            let next = self.expect_node(next_id);
            assert!(
                next.x != from.x || next.y != from.y,
                "Nodes {id} and {next_id} share position ({}, {})",
                from.x,
                from.y
            );
            let mut angle = normalize_angle(self.get_argument(id, next_id) - reference);
            if angle == 0.0 {
                angle = TAU;
            }
            if best.map_or(true, |(_, b)| angle < b) {
                best = Some((next, angle));
            }
        }
        match best {
            Some((node, _)) => node,
            None => panic!("Node {id} has no neighbors."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: &str, x: f64, y: f64) -> GraphNode {
        GraphNode::new(id, x, y)
    }

    fn polygon(pts: &[(&str, f64, f64)]) -> PlanarGraph {
        let mut g = PlanarGraph::new();
        for i in 0..pts.len() {
            let (a, b) = (pts[i], pts[(i + 1) % pts.len()]);
            g.add_edge(n(a.0, a.1, a.2), n(b.0, b.1, b.2));
        }
        g
    }

    #[test]
    fn square_outline() {
        let g = polygon(&[("A", 0.0, 0.0), ("B", 10.0, 0.0), ("C", 10.0, 10.0), ("D", 0.0, 10.0)]);
        let outline = g.get_outline();
        assert_eq!(outline.ids(), ["A", "B", "C", "D"]);
        assert!(outline.signed_area() > 0.0);
    }

    #[test]
    fn outline_of_crossed_bowtie_runs_through_cross_point() {
        // a(0,0) -> b(10,10) -> c(10,0) -> d(0,10) -> a crosses itself at (5,5)
        let g = polygon(&[("a", 0.0, 0.0), ("b", 10.0, 10.0), ("c", 10.0, 0.0), ("d", 0.0, 10.0)]);
        let outline = g.get_outline();
        // the cross point joins the two lobes, so the walk passes it twice
        assert_eq!(outline.len(), 6);
        let hubs: Vec<&GraphNode> = outline.nodes.iter().filter(|n| n.is_synthetic()).collect();
        assert_eq!(hubs.len(), 2);
        assert_eq!(hubs[0].id, hubs[1].id);
        assert!((hubs[0].x - 5.0).abs() < 1e-9 && (hubs[0].y - 5.0).abs() < 1e-9);
        assert_eq!(outline.nodes[0].y, 0.0);
        let mut ids = outline.ids();
        ids.retain(|id| !id.contains('-'));
        ids.sort();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn outline_skips_interior_chord() {
        // square with a diagonal chord; the chord never reaches the boundary walk
        let mut g = polygon(&[("A", 0.0, 0.0), ("B", 10.0, 0.0), ("C", 10.0, 10.0), ("D", 0.0, 10.0)]);
        g.add_edge(n("A", 0.0, 0.0), n("C", 10.0, 10.0));
        let outline = g.get_outline();
        assert_eq!(outline.len(), 4);
        let mut ids = outline.ids();
        ids.sort();
        assert_eq!(ids, ["A", "B", "C", "D"]);
    }

    #[test]
    fn open_polyline_degenerates_after_pruning() {
        let mut g = PlanarGraph::new();
        g.add_edge(n("a", 0.0, 0.0), n("b", 10.0, 0.0));
        let outline = g.get_outline();
        assert!(outline.is_empty());
        assert!(outline.is_degenerate());
    }

    #[test]
    fn starts_at_lowest_node() {
        let g = polygon(&[("p", 0.0, 10.0), ("q", 5.0, -3.0), ("r", 10.0, 10.0)]);
        let outline = g.get_outline();
        assert_eq!(outline.nodes[0].id, "q");
        assert_eq!(outline.len(), 3);
    }

    #[test]
    #[should_panic(expected = "share position")]
    fn coincident_neighbors_panic() {
        let g = polygon(&[("a", 0.0, 0.0), ("b", 0.0, 0.0), ("c", 5.0, 5.0)]);
        g.get_outline();
    }
}
