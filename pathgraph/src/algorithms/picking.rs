use serde::Serialize;

use crate::config::PathEditConfig;
use crate::geometry::math::closest_point_on_segment;
use crate::graph::PlanarGraph;
use crate::model::Point;

/// Editable control under the pointer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PathControl {
    Node { id: String },
    /// The midpoint handle of edge `a-b`; pressing it splits the edge there.
    EdgeCenter { a: String, b: String, point: Point },
    /// Anywhere else along edge `a-b`; `point` is the closest point on it.
    Edge { a: String, b: String, point: Point },
}

/// First control hit by `point`: nodes take precedence over edges, and within
/// each kind the first in iteration order wins, not the closest.
pub fn pick_control(g: &PlanarGraph, point: Point, config: &PathEditConfig) -> Option<PathControl> {
    for n in g.nodes() {
        if (n.x - point.x).hypot(n.y - point.y) < config.node_hit_radius {
            return Some(PathControl::Node { id: n.id.clone() });
        }
    }
    for e in g.get_edges() {
        let (a, b) = (e.p1.point(), e.p2.point());
        let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        if (center.x - point.x).hypot(center.y - point.y) < config.edge_hit_width {
            return Some(PathControl::EdgeCenter { a: e.p1.id, b: e.p2.id, point: center });
        }
        let (closest, d) = closest_point_on_segment(point, a, b);
        if d < config.edge_hit_width {
            return Some(PathControl::Edge { a: e.p1.id, b: e.p2.id, point: closest });
        }
    }
    None
}
