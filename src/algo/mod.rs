//! Graph algorithms: traversals, connectivity, shortest paths, and minimum
//! spanning trees.

// shared import surface for the algorithm modules
pub(crate) use crate::{
    edge::*,
    error::GraphError,
    graph::*,
    node::*,
    ops::*,
};

mod connectivity;
mod dijkstra;
mod floyd;
mod mst;
mod traversal;

pub use connectivity::*;
pub use dijkstra::*;
pub use floyd::*;
pub use mst::*;
pub use traversal::*;
