/*!
`wgraphs` is a graph data structure & algorithms library for weighted street
networks, i.e. graphs that are
- **w**eighted : Every segment carries a length and a travel time,
- undirected by default : Streets connect both ways; one-way streets are supported explicitly,
- compact : Nodes are numbered `0` to `n - 1`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. As most street networks do not exceed `2^32` nodes, this
saves space as compared to `u64/usize`. Original dataset identifiers (e.g. OSM
node ids) can be kept around via [`utils::ExternalIds`].

The central storage backend is [`StreetGraph`](graph::StreetGraph), an
adjacency list whose entries carry both weights of a segment. Algorithms that
operate on a single weight take one of its derived views:
- [`weighted_view`](graph::StreetGraph::weighted_view) yields an
  [`AdjView`](graph::AdjView) for shortest-path searches,
- [`weight_matrix`](graph::StreetGraph::weight_matrix) yields a
  [`WeightMatrix`](graph::WeightMatrix) with parallel segments deduplicated to
  their cheapest weight for spanning-tree construction.

# Design

All algorithms are provided as configurable structs that one can alter to
their needs using either the *Builder* / *Setter* pattern before calling the
configured algorithm on a provided graph. Alternatively, the most commonly
used functionalities are implemented via traits on the graph itself, making
them usable without configuring the algorithm beforehand, e.g.
`graph.bfs(start)` or `graph.connected_components()`.

Every algorithm reports run statistics (node/edge counters, wall time)
through the [`stats`] module alongside its result.

# Usage

```
use wgraphs::{prelude::*, algo::*};

let mut g = StreetGraph::new(0);
g.add_street(0, 1, 250.0, 0.5);
g.add_street(1, 2, 400.0, 0.8);
g.add_street(0, 2, 900.0, 1.1);

let view = g.weighted_view(WeightKind::Distance);
let tree = Dijkstra::new(&view).run(0)?;
assert_eq!(tree.distance_to(2), 650.0);
assert_eq!(tree.path_to(2), [0, 1, 2]);
# Ok::<(), wgraphs::error::GraphError>(())
```

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your
needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod stats;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all
/// basic graph operation traits as well as the graph representation and its
/// views.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, node::*, ops::*};
}
