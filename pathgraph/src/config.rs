use serde::{Deserialize, Serialize};

/// Caller-owned tunables for path editing. Distances are in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathEditConfig {
    /// A node control is hit when the pointer is strictly closer than this.
    pub node_hit_radius: f64,
    /// An edge control is hit when the pointer is strictly closer than this.
    pub edge_hit_width: f64,
    /// Minimum distance between a corner and its radius handle, so the handle
    /// stays grabbable at radius 0.
    pub corner_handle_margin: f64,
}

impl Default for PathEditConfig {
    fn default() -> Self {
        PathEditConfig {
            node_hit_radius: 16.0,
            edge_hit_width: 16.0,
            corner_handle_margin: 50.0,
        }
    }
}
