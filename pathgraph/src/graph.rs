use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::PI;

use indexmap::IndexMap;

use crate::geometry::tolerance::normalize_angle;
use crate::model::{GraphEdge, GraphNode};

/// Undirected graph of path nodes keyed by string id.
///
/// Adjacency is symmetric: `b` is listed under `a` iff `a` is listed under `b`.
/// A node with no neighbors is removed together with its last edge. Node and
/// adjacency maps keep insertion order, which is the iteration order every
/// tie-break in this crate refers to.
///
/// Contract violations (unknown ids, self edges, equal ids passed to
/// [`PlanarGraph::get_argument`]) panic: they mean an upstream invariant is
/// already broken and the current edit must be discarded.
#[derive(Debug, Default)]
pub struct PlanarGraph {
    pub(crate) nodes: IndexMap<String, GraphNode>,
    pub(crate) adjacency: IndexMap<String, Vec<String>>,
    // (smaller id, larger id) -> argument of smaller -> larger
    arguments: RefCell<HashMap<(String, String), f64>>,
    pub(crate) normalized: bool,
}

impl Clone for PlanarGraph {
    /// Copies nodes and adjacency only. The clone starts without cached
    /// arguments and is not marked normalized, since callers clone to mutate.
    fn clone(&self) -> Self {
        PlanarGraph {
            nodes: self.nodes.clone(),
            adjacency: self.adjacency.clone(),
            arguments: RefCell::new(HashMap::new()),
            normalized: false,
        }
    }
}

impl PlanarGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.normalized = false;
        self.arguments.get_mut().clear();
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub(crate) fn expect_node(&self, id: &str) -> &GraphNode {
        match self.nodes.get(id) {
            Some(n) => n,
            None => panic!("Node {id} is not found."),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.neighbors(a).iter().any(|n| n == b)
    }

    /// Connects two nodes, inserting them (last writer wins on position).
    /// Adding an edge that already exists leaves the graph untouched.
    pub fn add_edge(&mut self, n1: GraphNode, n2: GraphNode) -> &mut Self {
        assert_ne!(n1.id, n2.id, "edge endpoints should be different: {}", n1.id);
        if self.has_edge(&n1.id, &n2.id) {
            return self;
        }
        self.adjacency.entry(n1.id.clone()).or_default().push(n2.id.clone());
        self.adjacency.entry(n2.id.clone()).or_default().push(n1.id.clone());
        self.nodes.insert(n1.id.clone(), n1);
        self.nodes.insert(n2.id.clone(), n2);
        self.invalidate();
        self
    }

    // Removes `gone` from `id`'s neighbor list, dropping `id` if it ends up isolated.
    fn detach(&mut self, id: &str, gone: &str) {
        let remaining = match self.adjacency.get_mut(id) {
            Some(list) => {
                list.retain(|n| n != gone);
                list.len()
            }
            None => 0,
        };
        if remaining == 0 {
            self.nodes.shift_remove(id);
            self.adjacency.shift_remove(id);
        }
    }

    pub fn delete_edge(&mut self, id1: &str, id2: &str) -> &mut Self {
        self.detach(id1, id2);
        self.detach(id2, id1);
        self.invalidate();
        self
    }

    pub fn delete_node(&mut self, id: &str) -> &mut Self {
        self.nodes.shift_remove(id);
        let next = self.adjacency.shift_remove(id).unwrap_or_default();
        for other in &next {
            self.detach(other, id);
        }
        self.invalidate();
        self
    }

    /// Welds `source` onto `dest`: every other neighbor of `source` is
    /// reconnected to `dest`, then `source` is deleted.
    pub fn merge_nodes(&mut self, source: &str, dest: &str) -> &mut Self {
        assert_ne!(source, dest, "cannot merge node {source} into itself");
        let dest_node = self.expect_node(dest).clone();
        let others: Vec<GraphNode> = self
            .neighbors(source)
            .iter()
            .filter(|id| id.as_str() != dest)
            .map(|id| self.expect_node(id).clone())
            .collect();
        tracing::debug!(source, dest, reattached = others.len(), "merge nodes");
        for other in others {
            self.add_edge(other, dest_node.clone());
        }
        self.delete_node(source)
    }

    /// Inserts `node` in the middle of the existing edge `a-b`.
    pub fn split_edge(&mut self, a: &str, b: &str, node: GraphNode) -> &mut Self {
        assert!(self.has_edge(a, b), "Edge {a}-{b} is not found.");
        let na = self.expect_node(a).clone();
        let nb = self.expect_node(b).clone();
        self.add_edge(na, node.clone());
        self.add_edge(nb, node);
        self.delete_edge(a, b)
    }

    pub fn set_node_position(&mut self, id: &str, x: f64, y: f64) -> &mut Self {
        match self.nodes.get_mut(id) {
            Some(n) => {
                n.x = x;
                n.y = y;
            }
            None => panic!("Node {id} is not found."),
        }
        self.invalidate();
        self
    }

    /// Angle in `[0, 2π)` of the direction `p0 -> p1`, measured from the x axis.
    pub fn get_argument(&self, p0: &str, p1: &str) -> f64 {
        assert_ne!(p0, p1, "from and to should be different: {p0}");
        if p0 > p1 {
            return normalize_angle(self.get_argument(p1, p0) + PI);
        }
        let key = (p0.to_owned(), p1.to_owned());
        if let Some(v) = self.arguments.borrow().get(&key) {
            return *v;
        }
        let a = self.expect_node(p0);
        let b = self.expect_node(p1);
        let value = normalize_angle((b.y - a.y).atan2(b.x - a.x));
        self.arguments.borrow_mut().insert(key, value);
        value
    }

    /// Every undirected edge exactly once, endpoints ordered by id.
    pub fn get_edges(&self) -> Vec<GraphEdge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (from, tos) in &self.adjacency {
            let from_node = self.expect_node(from);
            for to in tos {
                if from > to {
                    continue;
                }
                edges.push(GraphEdge::new(from_node.clone(), self.expect_node(to).clone()));
            }
        }
        edges
    }
}
