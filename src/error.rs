use thiserror::Error;

use crate::node::Node;

/// Errors raised by algorithm entry points on invalid input.
///
/// Unreachable targets and empty graphs are *not* errors: they are reported
/// as infinite distances, empty paths, or empty/zero-valued results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The requested start/source node is not a node of the graph
    #[error("unknown node {0}")]
    UnknownNode(Node),
}
