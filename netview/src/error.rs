//! Load-time error types.
//!
//! Everything here is raised while building a [`crate::Diagram`]; once a
//! diagram exists, interaction never fails.

use thiserror::Error;

/// A key was declared twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("duplicate node name '{0}'")]
    DuplicateNode(String),

    #[error("duplicate edge id '{0}'")]
    DuplicateEdge(String),
}

/// A record points at something that was never declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("{context} references unknown node '{name}'")]
    UnknownNode { context: String, name: String },

    #[error("{context} references unknown edge '{id}'")]
    UnknownEdge { context: String, id: String },

    #[error("arc {arc} anchors at '{at_v}', which is not an endpoint of edge '{edge}'")]
    DetachedArc {
        arc: usize,
        at_v: String,
        edge: String,
    },
}

impl ReferenceError {
    pub fn unknown_node(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownNode {
            context: context.into(),
            name: name.into(),
        }
    }

    pub fn unknown_edge(context: impl Into<String>, id: impl Into<String>) -> Self {
        Self::UnknownEdge {
            context: context.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("invalid graph description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("too many {kind}: {got} (max {max})")]
    TooLarge {
        kind: &'static str,
        got: usize,
        max: usize,
    },

    #[error("node '{name}' has an out-of-range coordinate")]
    BadCoordinate { name: String },

    #[error("edge '{id}' has index {index} in a bundle of {siblings}")]
    InvalidBundle { id: String, index: u32, siblings: u32 },

    #[error("render config: {0}")]
    BadConfig(String),
}

impl LoadError {
    /// Stable machine-readable code, used by host bindings.
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Lookup(_) => "lookup",
            LoadError::Reference(_) => "reference",
            LoadError::Json(_) => "json_parse",
            LoadError::TooLarge { .. } => "too_large",
            LoadError::BadCoordinate { .. } => "bad_coordinate",
            LoadError::InvalidBundle { .. } => "invalid_bundle",
            LoadError::BadConfig(_) => "bad_config",
        }
    }
}
