/// Failures at the persistence boundary. Contract violations inside the graph
/// itself panic instead; see [`crate::graph::PlanarGraph`].
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("path {path} has an edge referencing missing node {node}")]
    MissingNode { path: String, node: String },
    #[error("synthetic cross-point node {node} cannot be persisted")]
    SyntheticNode { node: String },
    #[error("edge connects node {node} to itself")]
    SelfLoop { node: String },
    #[error("parameter '{param}' must be finite and in bounds")]
    NonFinite { param: String },
    #[error("{what} count {got} exceeds limit {max}")]
    LimitExceeded { what: &'static str, max: usize, got: usize },
    #[error("invalid path json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl PathError {
    /// Stable machine-readable code, used by the wasm error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            PathError::MissingNode { .. } => "missing_node",
            PathError::SyntheticNode { .. } => "synthetic_node",
            PathError::SelfLoop { .. } => "self_loop",
            PathError::NonFinite { .. } => "non_finite",
            PathError::LimitExceeded { .. } => "limit_exceeded",
            PathError::InvalidJson(_) => "invalid_json",
        }
    }
}

pub type Result<T> = std::result::Result<T, PathError>;
