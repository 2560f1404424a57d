// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::dag::NodeId;

#[derive(Error, Debug)]
pub enum DagError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Kahn's algorithm could only order `sorted` of `total` nodes.
    #[error("Cycle detected in graph: ordered {sorted} of {total} nodes")]
    Cycle { sorted: usize, total: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Renderer '{program}' could not be started: {reason}")]
    RendererUnavailable { program: String, reason: String },

    #[error("Renderer '{program}' exited with status {code:?}")]
    RendererFailed { program: String, code: Option<i32> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DagError {
    /// True for the two failure kinds raised by the external renderer.
    pub fn is_renderer_failure(&self) -> bool {
        matches!(
            self,
            DagError::RendererUnavailable { .. } | DagError::RendererFailed { .. }
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DagError>;
