/*!
# Edges & Weights

A street segment connects two intersections and carries **two** non-negative
weights: its length in meters and its travel time in minutes. Algorithms that
operate on a single weight select one of the two via [`WeightKind`].

[`Edge`] is the bare endpoint pair, used wherever only the topology matters
(e.g. deduplicating unordered pairs in Kruskal's algorithm). [`StreetEdge`] is
the adjacency-list entry, [`TreeEdge`] a committed spanning-tree edge.
*/

use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are non-negative reals; `f64::INFINITY` is the
/// "unreachable / no path found yet" sentinel, never a numeric error.
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// Selects which of the two stored weights an algorithm operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightKind {
    /// Segment length in meters
    #[default]
    Distance,
    /// Travel time in minutes (derived by the loader, e.g. length / speed)
    TravelTime,
}

/// A single adjacency-list entry: the neighbor plus both weights.
///
/// Loaders with only one weight available should fill both fields with it;
/// a "missing" weight is a loader concern, never one of the algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreetEdge {
    /// The neighboring intersection
    pub node: Node,
    /// Segment length in meters
    pub distance: Weight,
    /// Travel time in minutes
    pub travel_time: Weight,
}

impl StreetEdge {
    pub fn new(node: Node, distance: Weight, travel_time: Weight) -> Self {
        Self {
            node,
            distance,
            travel_time,
        }
    }

    /// Returns the weight selected by `kind`
    #[inline]
    pub fn weight(&self, kind: WeightKind) -> Weight {
        match kind {
            WeightKind::Distance => self.distance,
            WeightKind::TravelTime => self.travel_time,
        }
    }
}

/// An edge committed to a spanning tree: both endpoints and the weight it
/// was selected with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge(pub Node, pub Node, pub Weight);

impl Display for TreeEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(!Edge(3, 1).is_normalized());
        assert!(Edge(3, 1).normalized().is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(Edge(1, 3).reverse(), Edge(3, 1));
    }

    #[test]
    fn weight_selection() {
        let e = StreetEdge::new(7, 120.0, 1.5);
        assert_eq!(e.weight(WeightKind::Distance), 120.0);
        assert_eq!(e.weight(WeightKind::TravelTime), 1.5);
    }
}
