use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashSet;

use indexmap::IndexMap;

use crate::geometry::intersect::{cross_point, is_cross};
use crate::graph::PlanarGraph;
use crate::model::{GraphEdge, GraphNode};

// Order along an edge's dominant direction: by x, then by y.
fn cmp_xy(a: &GraphNode, b: &GraphNode) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

impl PlanarGraph {
    /// Crossing-free equivalent of this graph.
    ///
    /// Every proper crossing is replaced by a shared synthetic node, then
    /// nodes left with at most one neighbor are pruned until none remain.
    /// Collinear overlaps and endpoint touches are not crossings and stay
    /// as they are. An already normalized graph is returned as is.
    pub fn normalize(&self) -> Cow<'_, PlanarGraph> {
        if self.normalized {
            return Cow::Borrowed(self);
        }
        let mut clone = self.split_crossings();
        let pruned = prune_dangling(&mut clone);
        tracing::debug!(nodes = clone.node_count(), pruned, "normalized graph");
        clone.normalized = true;
        Cow::Owned(clone)
    }

    /// Copy of this graph with every proper crossing replaced by a shared
    /// synthetic node, before dangling nodes are pruned.
    pub fn split_crossings(&self) -> PlanarGraph {
        let mut clone = self.clone();
        let edges = clone.get_edges();

        // edge index -> synthetic nodes inserted along it
        let mut inserted: IndexMap<usize, Vec<GraphNode>> = IndexMap::new();
        let mut crossings = 0usize;
        for (i, e1) in edges.iter().enumerate() {
            for (j, e2) in edges.iter().enumerate() {
                if i == j || e1.p1.id > e2.p1.id || e1.shares_endpoint(e2) {
                    continue;
                }
                if !is_cross(e1.p1.point(), e1.p2.point(), e2.p1.point(), e2.p2.point()) {
                    continue;
                }
                let at = cross_point(e1.p1.point(), e1.p2.point(), e2.p1.point(), e2.p2.point());
                let node = GraphNode::cross_point(&e1.p1.id, &e1.p2.id, &e2.p1.id, &e2.p2.id, at);
                tracing::trace!(id = %node.id, x = at.x, y = at.y, "edge crossing");
                inserted.entry(i).or_default().push(node.clone());
                inserted.entry(j).or_default().push(node);
                crossings += 1;
            }
        }

        for (i, mut chain) in inserted {
            let GraphEdge { p1, p2 } = &edges[i];
            chain.sort_by(cmp_xy);
            let (first, last) = if cmp_xy(p1, p2) == Ordering::Less { (p1, p2) } else { (p2, p1) };
            chain.insert(0, first.clone());
            chain.push(last.clone());
            clone.delete_edge(&p1.id, &p2.id);
            for w in chain.windows(2) {
                clone.add_edge(w[0].clone(), w[1].clone());
            }
        }
        tracing::debug!(edges = edges.len(), crossings, "split edge crossings");
        clone
    }
}

// Deletes every node that has at most one neighbor once already-doomed
// neighbors are ignored, repeating until a pass marks nothing new.
fn prune_dangling(g: &mut PlanarGraph) -> usize {
    let mut doomed: HashSet<String> = HashSet::new();
    let mut dirty = true;
    while dirty {
        dirty = false;
        for id in g.nodes.keys() {
            if doomed.contains(id) {
                continue;
            }
            let live = g.neighbors(id).iter().filter(|n| !doomed.contains(*n)).count();
            if live <= 1 {
                doomed.insert(id.clone());
                dirty = true;
            }
        }
    }
    let order: Vec<String> = g.nodes.keys().filter(|id| doomed.contains(*id)).cloned().collect();
    for id in &order {
        g.delete_node(id);
    }
    order.len()
}
