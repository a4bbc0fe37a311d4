use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// How a node came to exist in a graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Authored by the user or by a prior edit.
    Explicit,
    /// Inserted by normalization where two edges cross. The four ids are the
    /// endpoints of the crossing edges in canonical order.
    CrossPoint {
        p00: String,
        p01: String,
        p10: String,
        p11: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub kind: NodeKind,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        GraphNode { id: id.into(), x, y, kind: NodeKind::Explicit }
    }

    /// Synthetic node at the crossing of edges `p00-p01` and `p10-p11`. The id
    /// depends only on the four endpoint ids, so re-running normalization on
    /// the same configuration produces the same node.
    pub fn cross_point(p00: &str, p01: &str, p10: &str, p11: &str, at: Point) -> Self {
        GraphNode {
            id: cross_point_id(p00, p01, p10, p11),
            x: at.x,
            y: at.y,
            kind: NodeKind::CrossPoint {
                p00: p00.to_owned(),
                p01: p01.to_owned(),
                p10: p10.to_owned(),
                p11: p11.to_owned(),
            },
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.kind, NodeKind::CrossPoint { .. })
    }

    pub fn point(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

pub fn cross_point_id(p00: &str, p01: &str, p10: &str, p11: &str) -> String {
    format!("{p00}-{p01}-{p10}-{p11}")
}

/// Id of the undirected edge between `a` and `b`: `min-max`.
pub fn edge_id(a: &str, b: &str) -> String {
    if a < b { format!("{a}-{b}") } else { format!("{b}-{a}") }
}

/// An undirected edge with its endpoints ordered by id (`p1.id < p2.id`).
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
    pub p1: GraphNode,
    pub p2: GraphNode,
}

impl GraphEdge {
    pub fn new(a: GraphNode, b: GraphNode) -> Self {
        if a.id > b.id { GraphEdge { p1: b, p2: a } } else { GraphEdge { p1: a, p2: b } }
    }

    pub fn id(&self) -> String {
        format!("{}-{}", self.p1.id, self.p2.id)
    }

    pub fn shares_endpoint(&self, other: &GraphEdge) -> bool {
        self.p1.id == other.p1.id
            || self.p1.id == other.p2.id
            || self.p2.id == other.p1.id
            || self.p2.id == other.p2.id
    }
}

/// 2D affine transform `[a c tx; b d ty]` applied as `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Transform { tx, ty, ..Self::IDENTITY }
    }

    /// Scale about `origin`.
    pub fn scale(sx: f64, sy: f64, origin: Point) -> Self {
        Transform {
            a: sx,
            d: sy,
            tx: origin.x - sx * origin.x,
            ty: origin.y - sy * origin.y,
            ..Self::IDENTITY
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.tx,
            y: self.b * p.x + self.d * p.y + self.ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_canonicalizes_endpoint_order() {
        let e1 = GraphEdge::new(GraphNode::new("b", 0.0, 0.0), GraphNode::new("a", 1.0, 1.0));
        let e2 = GraphEdge::new(GraphNode::new("a", 1.0, 1.0), GraphNode::new("b", 0.0, 0.0));
        assert_eq!(e1, e2);
        assert_eq!(e1.id(), "a-b");
        assert_eq!(edge_id("b", "a"), "a-b");
    }

    #[test]
    fn cross_point_id_is_positional() {
        let n = GraphNode::cross_point("a", "b", "c", "d", Point::new(1.0, 2.0));
        assert_eq!(n.id, "a-b-c-d");
        assert!(n.is_synthetic());
        assert!(!GraphNode::new("a", 0.0, 0.0).is_synthetic());
    }

    #[test]
    fn scale_about_origin_keeps_origin_fixed() {
        let t = Transform::scale(2.0, 0.5, Point::new(10.0, 10.0));
        assert_eq!(t.apply(Point::new(10.0, 10.0)), Point::new(10.0, 10.0));
        assert_eq!(t.apply(Point::new(20.0, 20.0)), Point::new(30.0, 15.0));
        assert_eq!(Transform::translate(1.0, 2.0).apply(Point::new(0.0, 0.0)), Point::new(1.0, 2.0));
    }
}
