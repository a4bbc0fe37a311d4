//! Persisted path entity and its conversion to and from [`PlanarGraph`].
//!
//! The entity is the storage form: a flat node list and an edge list of id
//! pairs. Graphs are rebuilt from it for every edit and flattened back, so
//! this is the one place where malformed input surfaces as a [`PathError`]
//! rather than a panic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::algorithms::fillet::{self, CornerFillet};
use crate::config::PathEditConfig;
use crate::error::{PathError, Result};
use crate::geometry::limits;
use crate::graph::PlanarGraph;
use crate::model::{GraphNode, Transform};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathEntity {
    pub id: String,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<[String; 2]>,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub arrow_head_node_ids: Vec<String>,
}

impl PathEntity {
    pub fn new(id: impl Into<String>) -> Self {
        PathEntity {
            id: id.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            corner_radius: 0.0,
            arrow_head_node_ids: Vec::new(),
        }
    }

    /// Size caps and numeric bounds. Structure (missing nodes, self loops)
    /// is checked when the graph is built.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.len() > limits::MAX_NODES {
            return Err(PathError::LimitExceeded { what: "node", max: limits::MAX_NODES, got: self.nodes.len() });
        }
        if self.edges.len() > limits::MAX_EDGES {
            return Err(PathError::LimitExceeded { what: "edge", max: limits::MAX_EDGES, got: self.edges.len() });
        }
        for n in &self.nodes {
            if !limits::in_coord_bounds(n.x) || !limits::in_coord_bounds(n.y) {
                return Err(PathError::NonFinite { param: format!("node {}", n.id) });
            }
        }
        if !limits::in_radius_bounds(self.corner_radius) {
            return Err(PathError::NonFinite { param: "cornerRadius".into() });
        }
        Ok(())
    }

    pub fn from_json_value(v: Value) -> Result<Self> {
        let entity: PathEntity = serde_json::from_value(v)?;
        entity.validate()?;
        Ok(entity)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let entity: PathEntity = serde_json::from_str(s)?;
        entity.validate()?;
        Ok(entity)
    }

    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Builds the graph by adding every persisted edge in order. Nodes that
    /// no edge references are not part of the graph.
    pub fn graph(&self) -> Result<PlanarGraph> {
        let by_id: HashMap<&str, &NodeRecord> = self.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
        let lookup = |id: &str| {
            by_id
                .get(id)
                .map(|n| GraphNode::new(n.id.clone(), n.x, n.y))
                .ok_or_else(|| PathError::MissingNode { path: self.id.clone(), node: id.to_owned() })
        };

        let mut g = PlanarGraph::new();
        for [a, b] in &self.edges {
            if a == b {
                return Err(PathError::SelfLoop { node: a.clone() });
            }
            g.add_edge(lookup(a)?, lookup(b)?);
        }
        Ok(g)
    }

    /// This entity with its nodes and edges replaced by `graph`'s. Arrow
    /// heads on nodes that no longer exist are dropped.
    pub fn with_graph(&self, graph: &PlanarGraph) -> Result<PathEntity> {
        let mut nodes = Vec::with_capacity(graph.node_count());
        for n in graph.nodes() {
            if n.is_synthetic() {
                return Err(PathError::SyntheticNode { node: n.id.clone() });
            }
            nodes.push(NodeRecord { id: n.id.clone(), x: n.x, y: n.y });
        }
        let edges = graph.get_edges().into_iter().map(|e| [e.p1.id, e.p2.id]).collect();
        let arrow_head_node_ids = self
            .arrow_head_node_ids
            .iter()
            .filter(|id| graph.node(id).is_some())
            .cloned()
            .collect();
        Ok(PathEntity {
            id: self.id.clone(),
            nodes,
            edges,
            corner_radius: self.corner_radius,
            arrow_head_node_ids,
        })
    }

    pub fn transform(&self, t: &Transform) -> Result<PathEntity> {
        let mut g = self.graph()?;
        let moved: Vec<(String, f64, f64)> = g
            .nodes()
            .map(|n| {
                let p = t.apply(n.point());
                (n.id.clone(), p.x, p.y)
            })
            .collect();
        for (id, x, y) in moved {
            g.set_node_position(&id, x, y);
        }
        self.with_graph(&g)
    }

    /// This entity with its corner radius lowered to what the outline can
    /// carry, typically after a transform shrank it.
    pub fn clamp_corner_radius(&self) -> Result<PathEntity> {
        let max = self.graph()?.max_corner_radius();
        let mut out = self.clone();
        if max < self.corner_radius {
            tracing::debug!(path = %self.id, from = self.corner_radius, to = max, "clamp corner radius");
            out.corner_radius = max;
        }
        Ok(out)
    }

    pub fn corner_handles(&self, config: &PathEditConfig) -> Result<Vec<CornerFillet>> {
        let outline = self.graph()?.get_outline();
        Ok(fillet::corner_fillets(&outline.nodes, self.corner_radius, config.corner_handle_margin))
    }
}
