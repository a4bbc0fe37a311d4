//! Planar path graphs for a whiteboard-style editor.
//!
//! A [`PlanarGraph`] holds the nodes and undirected edges of one drawn path.
//! Editing goes through the graph's mutation methods; rendering asks for the
//! [`Outline`] of the normalized (crossing-free, no dangling tails) graph and
//! for rounded-corner geometry along it.

pub mod config;
pub mod entity;
pub mod error;
pub mod graph;
pub mod model;
pub mod geometry {
    pub mod intersect;
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod fillet;
    pub mod normalize;
    pub mod outline;
    pub mod picking;
    pub mod winding;
}

pub use algorithms::fillet::{corner_fillets, max_corner_radius, visible_corner_handles, CornerFillet};
pub use algorithms::outline::Outline;
pub use algorithms::picking::{pick_control, PathControl};
pub use config::PathEditConfig;
pub use entity::{NodeRecord, PathEntity};
pub use error::{PathError, Result};
pub use graph::PlanarGraph;
pub use model::{GraphEdge, GraphNode, NodeKind, Point, Transform};
