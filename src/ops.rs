use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a node of this graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphOrder + Sized {
    /// Returns an iterator over the (open) out-neighborhood of a given vertex.
    /// Parallel edges yield their endpoint once per occurrence.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of directed adjacency entries in the graph
    fn number_of_directed_edges(&self) -> NumEdges;

    /// Approximate number of undirected street segments, i.e. half the
    /// directed entry count. Exact for fully symmetric graphs; one-way
    /// streets make it an underestimate.
    fn approx_number_of_segments(&self) -> NumEdges {
        self.number_of_directed_edges() / 2
    }
}

/// A graph-view whose adjacency entries carry a single active weight.
/// This is what the single-source shortest-path engine consumes.
pub trait WeightedAdjacency: AdjacencyList {
    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;
}
