use wasm_bindgen::prelude::*;
use pathgraph::{GraphNode, PathEditConfig, PathEntity, PlanarGraph};
use serde::Serialize;

mod api;
mod error;
mod interop;

/// A single path being edited: its graph plus the entity fields the graph
/// does not carry (id, corner radius, arrow heads).
#[wasm_bindgen]
pub struct PathGraph {
    pub(crate) inner: PlanarGraph,
    pub(crate) entity: PathEntity,
    pub(crate) config: PathEditConfig,
}

#[derive(Serialize)]
pub(crate) struct NodeView<'a> {
    id: &'a str,
    x: f64,
    y: f64,
    synthetic: bool,
}

impl<'a> From<&'a GraphNode> for NodeView<'a> {
    fn from(n: &'a GraphNode) -> Self {
        NodeView { id: &n.id, x: n.x, y: n.y, synthetic: n.is_synthetic() }
    }
}

#[derive(Serialize)]
pub(crate) struct EdgeView<'a> {
    id: String,
    p1: NodeView<'a>,
    p2: NodeView<'a>,
}

impl PathGraph {
    pub fn rs_new() -> PathGraph {
        PathGraph { inner: PlanarGraph::new(), entity: PathEntity::new(""), config: PathEditConfig::default() }
    }

    pub(crate) fn rs_load(&mut self, entity: PathEntity) -> pathgraph::Result<()> {
        let graph = entity.graph()?;
        tracing::debug!(path = %entity.id, nodes = graph.node_count(), "loaded path entity");
        self.inner = graph;
        self.entity = entity;
        Ok(())
    }

    pub(crate) fn rs_entity(&self) -> pathgraph::Result<PathEntity> {
        self.entity.with_graph(&self.inner)
    }
}
