/*!
# Node Representation

We choose `Node = u32` as street networks rarely exceed `2^32` intersections.
This allows us to (1) save space compared to `usize`/`u64` and (2) index
directly into per-node arrays without abstracting over the node type.

External datasets (e.g. OSM extracts) use sparse 64-bit identifiers; those are
remapped to the compact `0..n` range by a loader via
[`ExternalIds`](crate::utils::ExternalIds) before any algorithm runs.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it is wasteful in
/// dense per-pair tables such as the next-hop matrix of
/// [`FloydWarshall`](crate::algo::FloydWarshall). This instead uses the
/// `NonZero`-Wrapper so that `Option<OptionalNodeImpl>` is a single `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
