use crate::{EdgeView, NodeView, PathGraph};
use pathgraph::geometry::limits::{in_coord_bounds, in_radius_bounds};
use pathgraph::{pick_control, visible_corner_handles, GraphNode, PathEditConfig, PathEntity, Point};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop::to_js;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `tracing` events to the browser console. Safe to call repeatedly.
#[wasm_bindgen]
pub fn init_logging() {
    if tracing_wasm::try_set_as_global_default().is_ok() {
        tracing::info!("pathgraph logging initialized");
    }
}

// First offending parameter name, if any coordinate is non-finite or out of bounds.
fn check_coords(params: &[(&'static str, f64)]) -> Option<&'static str> {
    params.iter().find(|(_, v)| !in_coord_bounds(*v)).map(|(name, _)| *name)
}

#[wasm_bindgen]
impl PathGraph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PathGraph {
        crate::PathGraph::rs_new()
    }
    pub fn node_count(&self) -> u32 {
        self.inner.node_count() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }

    // Persistence
    pub fn from_entity(&mut self, json: &str) -> bool {
        match PathEntity::from_json_str(json) {
            Ok(entity) => self.rs_load(entity).is_ok(),
            Err(_) => false,
        }
    }
    pub fn from_entity_res(&mut self, json: &str) -> JsValue {
        let loaded = PathEntity::from_json_str(json).and_then(|entity| self.rs_load(entity));
        match loaded {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.node_count() as f64)),
            Err(e) => error::from_path_error(&e),
        }
    }
    pub fn to_entity(&self) -> JsValue {
        match self.rs_entity() {
            Ok(entity) => to_js(&entity),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn to_entity_res(&self) -> JsValue {
        match self.rs_entity() {
            Ok(entity) => error::ok(to_js(&entity)),
            Err(e) => error::from_path_error(&e),
        }
    }
    pub fn set_config(&mut self, json: &str) -> bool {
        match serde_json::from_str::<PathEditConfig>(json) {
            Ok(cfg) => {
                self.config = cfg;
                true
            }
            Err(_) => false,
        }
    }
    pub fn set_config_res(&mut self, json: &str) -> JsValue {
        match serde_json::from_str::<PathEditConfig>(json) {
            Ok(cfg) => {
                self.config = cfg;
                error::ok(to_js(&cfg))
            }
            Err(e) => error::err("invalid_json", e.to_string(), None),
        }
    }

    // Edits
    pub fn add_edge(&mut self, id1: &str, x1: f64, y1: f64, id2: &str, x2: f64, y2: f64) -> bool {
        if id1 == id2 || check_coords(&[("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]).is_some() {
            return false;
        }
        self.inner.add_edge(GraphNode::new(id1, x1, y1), GraphNode::new(id2, x2, y2));
        true
    }
    pub fn add_edge_res(&mut self, id1: &str, x1: f64, y1: f64, id2: &str, x2: f64, y2: f64) -> JsValue {
        if let Some(param) = check_coords(&[("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]) {
            return error::non_finite(param);
        }
        if id1 == id2 {
            return error::same_node("add_edge", id1);
        }
        let existed = self.inner.has_edge(id1, id2);
        self.inner.add_edge(GraphNode::new(id1, x1, y1), GraphNode::new(id2, x2, y2));
        error::ok(JsValue::from_bool(!existed))
    }
    pub fn delete_edge(&mut self, a: &str, b: &str) -> bool {
        if !self.inner.has_edge(a, b) {
            return false;
        }
        self.inner.delete_edge(a, b);
        true
    }
    pub fn delete_edge_res(&mut self, a: &str, b: &str) -> JsValue {
        if !self.inner.has_edge(a, b) {
            return error::invalid_id("edge", &pathgraph::model::edge_id(a, b));
        }
        self.inner.delete_edge(a, b);
        error::ok(JsValue::from_bool(true))
    }
    pub fn delete_node(&mut self, id: &str) -> bool {
        if self.inner.node(id).is_none() {
            return false;
        }
        self.inner.delete_node(id);
        true
    }
    pub fn delete_node_res(&mut self, id: &str) -> JsValue {
        if self.inner.node(id).is_none() {
            return error::invalid_id("node", id);
        }
        self.inner.delete_node(id);
        error::ok(JsValue::from_bool(true))
    }
    pub fn merge_nodes(&mut self, source: &str, dest: &str) -> bool {
        if source == dest || self.inner.node(source).is_none() || self.inner.node(dest).is_none() {
            return false;
        }
        self.inner.merge_nodes(source, dest);
        true
    }
    pub fn merge_nodes_res(&mut self, source: &str, dest: &str) -> JsValue {
        for id in [source, dest] {
            if self.inner.node(id).is_none() {
                return error::invalid_id("node", id);
            }
        }
        if source == dest {
            return error::same_node("merge_nodes", source);
        }
        self.inner.merge_nodes(source, dest);
        error::ok(JsValue::from_bool(true))
    }
    pub fn set_node_position(&mut self, id: &str, x: f64, y: f64) -> bool {
        if self.inner.node(id).is_none() || check_coords(&[("x", x), ("y", y)]).is_some() {
            return false;
        }
        self.inner.set_node_position(id, x, y);
        true
    }
    pub fn set_node_position_res(&mut self, id: &str, x: f64, y: f64) -> JsValue {
        if let Some(param) = check_coords(&[("x", x), ("y", y)]) {
            return error::non_finite(param);
        }
        if self.inner.node(id).is_none() {
            return error::invalid_id("node", id);
        }
        self.inner.set_node_position(id, x, y);
        error::ok(JsValue::from_bool(true))
    }
    pub fn split_edge(&mut self, a: &str, b: &str, id: &str, x: f64, y: f64) -> bool {
        if !self.inner.has_edge(a, b) || self.inner.node(id).is_some() || check_coords(&[("x", x), ("y", y)]).is_some() {
            return false;
        }
        self.inner.split_edge(a, b, GraphNode::new(id, x, y));
        true
    }
    pub fn split_edge_res(&mut self, a: &str, b: &str, id: &str, x: f64, y: f64) -> JsValue {
        if let Some(param) = check_coords(&[("x", x), ("y", y)]) {
            return error::non_finite(param);
        }
        if !self.inner.has_edge(a, b) {
            return error::invalid_id("edge", &pathgraph::model::edge_id(a, b));
        }
        if self.inner.node(id).is_some() {
            return error::duplicate_id(id);
        }
        self.inner.split_edge(a, b, GraphNode::new(id, x, y));
        error::ok(JsValue::from_bool(true))
    }

    // Queries
    pub fn get_argument(&self, from: &str, to: &str) -> f64 {
        if from == to || self.inner.node(from).is_none() || self.inner.node(to).is_none() {
            return f64::NAN;
        }
        self.inner.get_argument(from, to)
    }
    pub fn get_argument_res(&self, from: &str, to: &str) -> JsValue {
        for id in [from, to] {
            if self.inner.node(id).is_none() {
                return error::invalid_id("node", id);
            }
        }
        if from == to {
            return error::same_node("get_argument", from);
        }
        error::ok(JsValue::from_f64(self.inner.get_argument(from, to)))
    }
    pub fn get_nodes(&self) -> JsValue {
        let views: Vec<NodeView> = self.inner.nodes().map(NodeView::from).collect();
        to_js(&views)
    }
    pub fn get_edges(&self) -> JsValue {
        let edges = self.inner.get_edges();
        let views: Vec<EdgeView> = edges
            .iter()
            .map(|e| EdgeView { id: e.id(), p1: NodeView::from(&e.p1), p2: NodeView::from(&e.p2) })
            .collect();
        to_js(&views)
    }
    /// Outline of the normalized graph, starting at its lowest node.
    pub fn get_outline(&self) -> JsValue {
        let outline = self.inner.get_outline();
        let views: Vec<NodeView> = outline.nodes.iter().map(NodeView::from).collect();
        to_js(&views)
    }
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x.is_finite() && y.is_finite() && self.inner.contains(Point::new(x, y))
    }
    pub fn max_corner_radius(&self) -> f64 {
        self.inner.max_corner_radius()
    }
    pub fn corner_handles(&self, radius: f64) -> JsValue {
        if !in_radius_bounds(radius) {
            return JsValue::NULL;
        }
        to_js(&self.inner.corner_handles(radius, &self.config))
    }
    pub fn corner_handles_res(&self, radius: f64) -> JsValue {
        if !in_radius_bounds(radius) {
            return error::non_finite("radius");
        }
        error::ok(self.corner_handles(radius))
    }
    /// Handles whose corner triangle contains the pointer.
    pub fn hovered_corner_handles(&self, radius: f64, x: f64, y: f64) -> JsValue {
        if !in_radius_bounds(radius) || !x.is_finite() || !y.is_finite() {
            return JsValue::NULL;
        }
        let handles = self.inner.corner_handles(radius, &self.config);
        to_js(&visible_corner_handles(&handles, Point::new(x, y)))
    }
    pub fn pick(&self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() || !y.is_finite() {
            return JsValue::NULL;
        }
        match pick_control(&self.inner, Point::new(x, y), &self.config) {
            Some(control) => to_js(&control),
            None => JsValue::NULL,
        }
    }
    pub fn pick_res(&self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(self.pick(x, y))
    }
}

impl Default for PathGraph {
    fn default() -> Self {
        Self::new()
    }
}
