//! Error types for parsing, reference checks and assignment.

use thiserror::Error;

use crate::types::NodeId;

/// Malformed line-oriented input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number; one past the last line when input ended early.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    /// A cycle names a node missing from the node table.
    #[error("cycle references unknown node {0}")]
    UnknownNode(NodeId),
    /// A cycle with no nodes has no centroid.
    #[error("cycle #{0} has no nodes")]
    EmptyCycle(usize),
    /// Users were given but the network has no cycle to receive them.
    #[error("no polygons found to assign {users} user(s) to")]
    NoPolygons { users: usize },
}

/// Any failure of the end-to-end run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("format error: {0}")]
    Parse(#[from] ParseError),
    #[error("edge #{edge} references unknown node {node}")]
    Reference { node: NodeId, edge: usize },
    #[error(transparent)]
    Assign(#[from] AssignError),
}
