/*!
# Graph Representation

[`StreetGraph`] is the canonical adjacency-list representation of a street
network: per node a list of [`StreetEdge`]s carrying both a distance and a
travel-time weight. Two-way streets are stored symmetrically, one-way streets
only in the forward direction. Parallel edges from multiple source segments
are allowed and preserved.

Algorithms that need a single active weight consume one of two derived views:

- [`AdjView`] — neighbor lists with one weight, input to
  [`Dijkstra`](crate::algo::Dijkstra),
- [`WeightMatrix`] — per-node weight maps with parallel edges deduplicated
  to the minimum, input to [`Prim`](crate::algo::Prim) and
  [`Kruskal`](crate::algo::Kruskal).

Both derivations are total: every node of the graph is present in the view,
even if it has no outgoing edges. Since constructors grow the node range to
cover every referenced endpoint, a dangling neighbor cannot exist.

The graph is an immutable input to each algorithm invocation; algorithms
never mutate it and every run returns freshly owned results. Callers that
restrict to a component should treat the restricted graph as a new snapshot
handle, not an in-place edit of the old one.
*/

use fxhash::FxHashMap;

use crate::{edge::*, node::*, ops::*};

/// Adjacency-list street network with per-edge distance and travel time.
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    nbs: Vec<Vec<StreetEdge>>,
    num_entries: NumEdges,
}

impl GraphOrder for StreetGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl AdjacencyList for StreetGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|e| e.node)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    fn number_of_directed_edges(&self) -> NumEdges {
        self.num_entries
    }
}

impl StreetGraph {
    /// Creates an empty graph with `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_entries: 0,
        }
    }

    /// Creates a graph from an iterator of `(u, v, distance, travel_time)`
    /// two-way street segments. The node range grows to cover all endpoints.
    pub fn from_streets<I>(streets: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node, Weight, Weight)>,
    {
        let mut graph = Self::new(0);
        for (u, v, d, t) in streets {
            graph.add_street(u, v, d, t);
        }
        graph
    }

    /// Grows the node range so that `u` becomes a valid node
    fn ensure_node(&mut self, u: Node) {
        if u as usize >= self.nbs.len() {
            self.nbs.resize(u as usize + 1, Vec::new());
        }
    }

    fn push_entry(&mut self, u: Node, e: StreetEdge) {
        self.ensure_node(u);
        self.ensure_node(e.node);
        self.nbs[u as usize].push(e);
        self.num_entries += 1;
    }

    /// Adds a two-way street between `u` and `v`, i.e. an adjacency entry
    /// in both directions.
    pub fn add_street(&mut self, u: Node, v: Node, distance: Weight, travel_time: Weight) {
        self.push_entry(u, StreetEdge::new(v, distance, travel_time));
        self.push_entry(v, StreetEdge::new(u, distance, travel_time));
    }

    /// Adds a one-way street from `u` to `v` (forward direction only).
    pub fn add_one_way(&mut self, u: Node, v: Node, distance: Weight, travel_time: Weight) {
        self.push_entry(u, StreetEdge::new(v, distance, travel_time));
    }

    /// Returns the adjacency entries of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn street_edges_of(&self, u: Node) -> &[StreetEdge] {
        &self.nbs[u as usize]
    }

    /// Derives the single-weight adjacency view selecting `kind` as the
    /// active weight. Parallel edges are preserved.
    pub fn weighted_view(&self, kind: WeightKind) -> AdjView {
        AdjView {
            nbs: self
                .nbs
                .iter()
                .map(|nb| nb.iter().map(|e| (e.node, e.weight(kind))).collect())
                .collect(),
            num_entries: self.num_entries,
        }
    }

    /// Derives the weight-matrix view selecting `kind` as the active weight.
    /// When several entries exist for the same directed pair, the minimum
    /// weight is retained.
    pub fn weight_matrix(&self, kind: WeightKind) -> WeightMatrix {
        let mut rows: Vec<FxHashMap<Node, Weight>> = vec![FxHashMap::default(); self.len()];
        let mut num_entries = 0;
        for (u, nb) in self.nbs.iter().enumerate() {
            for e in nb {
                let w = e.weight(kind);
                match rows[u].get(&e.node) {
                    Some(&old) if old <= w => {}
                    Some(_) => {
                        rows[u].insert(e.node, w);
                    }
                    None => {
                        rows[u].insert(e.node, w);
                        num_entries += 1;
                    }
                }
            }
        }
        WeightMatrix { rows, num_entries }
    }

    /// Restricts the graph to the given node set: an adjacency entry is kept
    /// only if both endpoints are contained in `nodes`. The node range is
    /// preserved (or grown for unknown ids), so nodes outside the set and
    /// ids not present in the original graph simply end up with empty
    /// adjacency lists rather than failing.
    pub fn induced_subgraph(&self, nodes: &[Node]) -> StreetGraph {
        let n = nodes
            .iter()
            .map(|&u| u + 1)
            .max()
            .unwrap_or(0)
            .max(self.number_of_nodes());

        let mut keep = NodeBitSet::new(n);
        keep.set_bits(nodes.iter().copied());

        let mut sub = Self::new(n);
        for &u in nodes {
            if !self.contains_node(u) {
                continue;
            }
            for e in self.street_edges_of(u) {
                if keep.get_bit(e.node) {
                    sub.nbs[u as usize].push(*e);
                    sub.num_entries += 1;
                }
            }
        }
        sub
    }
}

/// Neighbor lists with a single active weight, derived from a
/// [`StreetGraph`] via [`StreetGraph::weighted_view`].
#[derive(Debug, Clone)]
pub struct AdjView {
    nbs: Vec<Vec<(Node, Weight)>>,
    num_entries: NumEdges,
}

impl GraphOrder for AdjView {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl AdjacencyList for AdjView {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    fn number_of_directed_edges(&self) -> NumEdges {
        self.num_entries
    }
}

impl WeightedAdjacency for AdjView {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

/// Per-node weight maps (`node -> node -> weight`) with duplicate directed
/// pairs deduplicated to the minimum weight. Derived from a [`StreetGraph`]
/// via [`StreetGraph::weight_matrix`].
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    rows: Vec<FxHashMap<Node, Weight>>,
    num_entries: NumEdges,
}

impl GraphOrder for WeightMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl AdjacencyList for WeightMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].keys().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].len() as NumNodes
    }

    fn number_of_directed_edges(&self) -> NumEdges {
        self.num_entries
    }
}

impl WeightedAdjacency for WeightMatrix {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.rows[u as usize].iter().map(|(&v, &w)| (v, w))
    }
}

impl WeightMatrix {
    /// Returns the stored weight of the directed pair `(u, v)`, if any.
    /// ** Panics if `u >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.rows[u as usize].get(&v).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sample() -> StreetGraph {
        let mut g = StreetGraph::new(0);
        g.add_street(0, 1, 100.0, 2.0);
        g.add_street(1, 2, 50.0, 1.0);
        g.add_one_way(2, 3, 80.0, 1.5);
        g
    }

    #[test]
    fn symmetric_and_one_way_insertion() {
        let g = sample();
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_directed_edges(), 5);
        assert_eq!(g.neighbors_of(1).sorted().collect_vec(), vec![0, 2]);
        assert_eq!(g.neighbors_of(3).count(), 0); // one-way: no back edge
    }

    #[test]
    fn endpoints_grow_node_range() {
        let mut g = StreetGraph::new(0);
        g.add_one_way(0, 9, 1.0, 1.0);
        // the referenced neighbor must itself be a node, with an empty list
        assert_eq!(g.number_of_nodes(), 10);
        assert_eq!(g.degree_of(9), 0);
    }

    #[test]
    fn view_selects_weight() {
        let g = sample();
        let dist = g.weighted_view(WeightKind::Distance);
        let time = g.weighted_view(WeightKind::TravelTime);
        assert_eq!(dist.weighted_neighbors_of(2).collect_vec(), {
            let mut v = vec![(1, 50.0), (3, 80.0)];
            v.sort_by_key(|&(n, _)| n);
            v
        });
        assert_eq!(
            time.weighted_neighbors_of(0).collect_vec(),
            vec![(1, 2.0)]
        );
    }

    #[test]
    fn matrix_dedups_parallel_edges_by_minimum() {
        let mut g = StreetGraph::new(2);
        g.add_street(0, 1, 100.0, 2.0);
        g.add_street(0, 1, 60.0, 3.0);
        let m = g.weight_matrix(WeightKind::Distance);
        assert_eq!(m.weight(0, 1), Some(60.0));
        assert_eq!(m.weight(1, 0), Some(60.0));
        let t = g.weight_matrix(WeightKind::TravelTime);
        assert_eq!(t.weight(0, 1), Some(2.0));
    }

    #[test]
    fn matrix_covers_isolated_nodes() {
        let mut g = StreetGraph::new(5);
        g.add_street(0, 1, 1.0, 1.0);
        let m = g.weight_matrix(WeightKind::Distance);
        assert_eq!(m.number_of_nodes(), 5);
        assert_eq!(m.degree_of(4), 0);
    }

    #[test]
    fn induced_subgraph_keeps_only_inner_edges() {
        let g = sample();
        let sub = g.induced_subgraph(&[0, 1, 3]);
        assert_eq!(sub.number_of_nodes(), g.number_of_nodes());
        assert_eq!(sub.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(sub.neighbors_of(1).collect_vec(), vec![0]);
        // 2 is outside the set, 3 keeps an empty entry
        assert_eq!(sub.degree_of(2), 0);
        assert_eq!(sub.degree_of(3), 0);
    }

    #[test]
    fn induced_subgraph_tolerates_unknown_nodes() {
        let g = sample();
        let sub = g.induced_subgraph(&[1, 2, 17]);
        assert_eq!(sub.number_of_nodes(), 18);
        assert_eq!(sub.degree_of(17), 0);
        assert_eq!(sub.neighbors_of(2).collect_vec(), vec![1]);
    }
}
