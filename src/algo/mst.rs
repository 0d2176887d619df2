/*!
Minimum spanning trees via Prim and Kruskal.

Both algorithms consume a [`WeightMatrix`] which already deduplicated
parallel segments to their cheapest weight. They expect a connected input:
on a disconnected graph they silently return a spanning tree of a subset of
the nodes (Prim: the start node's component; Kruskal: a spanning forest).
Restrict the graph to a single component first via
[`Connectivity::largest_component`](crate::algo::Connectivity::largest_component)
and [`StreetGraph::induced_subgraph`](crate::graph::StreetGraph::induced_subgraph)
when that matters.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    time::Instant,
};

use fxhash::FxHashSet;

use crate::{algo::*, stats::MstStats, utils::DisjointSetForest};

/// A spanning tree (or forest) with its construction statistics.
pub struct MstResult {
    /// Tree edges in the order they were accepted
    pub edges: Vec<TreeEdge>,
    /// Sum of the tree edges' weights
    pub total_weight: Weight,
    pub stats: MstStats,
}

/// A weighted candidate edge for [`Prim`]'s frontier heap.
struct Candidate {
    weight: Weight,
    from: Node,
    to: Node,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// Orders by weight; ties are broken by endpoints for deterministic pops
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

/// Prim's algorithm: grows the tree from node `0` by repeatedly accepting
/// the cheapest candidate edge leaving the tree.
pub struct Prim<'a> {
    matrix: &'a WeightMatrix,
}

impl<'a> Prim<'a> {
    pub fn new(matrix: &'a WeightMatrix) -> Self {
        Self { matrix }
    }

    pub fn run(&self) -> MstResult {
        let t0 = Instant::now();
        let n = self.matrix.number_of_nodes();

        let mut edges = Vec::new();
        let mut total_weight = 0.0;
        let mut edges_considered = 0;
        let mut cycles_skipped = 0;

        if n > 0 {
            let mut in_tree = self.matrix.vertex_bitset_unset();
            let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();

            in_tree.set_bit(0);
            for (v, w) in self.matrix.weighted_neighbors_of(0) {
                frontier.push(Reverse(Candidate {
                    weight: w,
                    from: 0,
                    to: v,
                }));
            }

            while let Some(Reverse(Candidate { weight, from, to })) = frontier.pop() {
                edges_considered += 1;
                if in_tree.get_bit(to) {
                    cycles_skipped += 1;
                    continue;
                }

                in_tree.set_bit(to);
                edges.push(TreeEdge(from, to, weight));
                total_weight += weight;

                for (v, w) in self.matrix.weighted_neighbors_of(to) {
                    if !in_tree.get_bit(v) {
                        frontier.push(Reverse(Candidate {
                            weight: w,
                            from: to,
                            to: v,
                        }));
                    }
                }
            }
        }

        let edges_in_tree = edges.len() as u64;
        MstResult {
            edges,
            total_weight,
            stats: MstStats {
                algorithm: "Prim",
                complexity: "O(E log V)",
                nodes: n,
                approx_segments: self.matrix.approx_number_of_segments(),
                edges_considered,
                cycles_skipped,
                edges_in_tree,
                total_weight,
                elapsed: t0.elapsed(),
            },
        }
    }
}

/// Kruskal's algorithm: sorts all distinct segments by weight and accepts
/// every edge that does not close a cycle, tracked by a
/// [`DisjointSetForest`].
pub struct Kruskal<'a> {
    matrix: &'a WeightMatrix,
}

impl<'a> Kruskal<'a> {
    pub fn new(matrix: &'a WeightMatrix) -> Self {
        Self { matrix }
    }

    pub fn run(&self) -> MstResult {
        let t0 = Instant::now();
        let n = self.matrix.number_of_nodes();

        // collect each segment once, in normalized orientation
        let mut seen: FxHashSet<Edge> = FxHashSet::default();
        let mut candidates: Vec<(Weight, Node, Node)> = Vec::new();
        for u in self.matrix.vertices() {
            for (v, w) in self.matrix.weighted_neighbors_of(u) {
                let Edge(a, b) = Edge(u, v).normalized();
                if seen.insert(Edge(a, b)) {
                    candidates.push((w, a, b));
                }
            }
        }

        // stable sort keeps equal-weight edges in insertion order
        candidates.sort_by(|x, y| {
            x.0.total_cmp(&y.0)
                .then_with(|| x.1.cmp(&y.1))
                .then_with(|| x.2.cmp(&y.2))
        });

        let mut forest = DisjointSetForest::new(n);
        let mut edges = Vec::new();
        let mut total_weight = 0.0;
        let mut edges_considered = 0;
        let mut cycles_skipped = 0;

        for (w, u, v) in candidates {
            edges_considered += 1;
            if forest.union(u, v) {
                edges.push(TreeEdge(u, v, w));
                total_weight += w;
                if edges.len() + 1 == n as usize {
                    break;
                }
            } else {
                cycles_skipped += 1;
            }
        }

        let edges_in_tree = edges.len() as u64;
        MstResult {
            edges,
            total_weight,
            stats: MstStats {
                algorithm: "Kruskal",
                complexity: "O(E log E)",
                nodes: n,
                approx_segments: self.matrix.approx_number_of_segments(),
                edges_considered,
                cycles_skipped,
                edges_in_tree,
                total_weight,
                elapsed: t0.elapsed(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    /// Square with one diagonal: the tree picks 2.0 + 3.0 + 4.0
    fn square() -> StreetGraph {
        let mut g = StreetGraph::new(4);
        g.add_street(0, 1, 4.0, 4.0);
        g.add_street(1, 2, 3.0, 3.0);
        g.add_street(2, 3, 2.0, 2.0);
        g.add_street(3, 0, 7.0, 7.0);
        g.add_street(0, 2, 9.0, 9.0);
        g
    }

    #[test]
    fn kruskal_picks_the_cheapest_tree() {
        let matrix = square().weight_matrix(WeightKind::Distance);
        let mst = Kruskal::new(&matrix).run();

        assert_eq!(mst.total_weight, 9.0);
        assert_eq!(mst.edges.len(), 3);
        // accepted cheapest-first
        assert_eq!(mst.edges[0], TreeEdge(2, 3, 2.0));
        assert_eq!(mst.edges[1], TreeEdge(1, 2, 3.0));
        assert_eq!(mst.edges[2], TreeEdge(0, 1, 4.0));
    }

    #[test]
    fn prim_matches_kruskal_cost() {
        let matrix = square().weight_matrix(WeightKind::Distance);
        let prim = Prim::new(&matrix).run();
        let kruskal = Kruskal::new(&matrix).run();

        assert_eq!(prim.total_weight, kruskal.total_weight);
        assert_eq!(prim.edges.len(), 3);
    }

    #[test]
    fn tree_has_exactly_n_minus_one_edges() {
        let matrix = square().weight_matrix(WeightKind::Distance);
        for mst in [Prim::new(&matrix).run(), Kruskal::new(&matrix).run()] {
            assert_eq!(mst.stats.edges_in_tree, 3);
            assert_eq!(
                mst.edges.iter().map(|e| e.2).sum::<Weight>(),
                mst.total_weight
            );
        }
    }

    #[test]
    fn tree_edges_are_acyclic_and_spanning() {
        let matrix = square().weight_matrix(WeightKind::Distance);
        let mst = Prim::new(&matrix).run();

        let mut forest = DisjointSetForest::new(4);
        for TreeEdge(u, v, _) in &mst.edges {
            assert!(forest.union(*u, *v));
        }
        assert!((0..4).tuple_windows().all(|(u, v)| forest.connected(u, v)));
    }

    #[test]
    fn empty_graph_yields_empty_tree() {
        let g = StreetGraph::new(0);
        let matrix = g.weight_matrix(WeightKind::Distance);

        for mst in [Prim::new(&matrix).run(), Kruskal::new(&matrix).run()] {
            assert!(mst.edges.is_empty());
            assert_eq!(mst.total_weight, 0.0);
            assert_eq!(mst.stats.edges_considered, 0);
        }
    }

    #[test]
    fn parallel_segments_use_the_minimum() {
        let mut g = StreetGraph::new(2);
        g.add_street(0, 1, 8.0, 8.0);
        g.add_street(0, 1, 3.0, 3.0);
        let matrix = g.weight_matrix(WeightKind::Distance);

        let mst = Kruskal::new(&matrix).run();
        assert_eq!(mst.edges, [TreeEdge(0, 1, 3.0)]);
    }

    #[test]
    fn counters_account_for_cycles() {
        let matrix = square().weight_matrix(WeightKind::Distance);
        let mst = Kruskal::new(&matrix).run();
        assert_eq!(
            mst.stats.edges_considered,
            mst.stats.edges_in_tree + mst.stats.cycles_skipped
        );
    }

    #[test]
    fn random_graphs_agree_on_cost() {
        use rand::prelude::*;
        use rand_pcg::Pcg64Mcg;

        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for round in 0u64..5 {
            let n = 16u32;
            let mut g = StreetGraph::new(n);
            // a random spanning path keeps everything connected
            for u in 1..n {
                let v = rng.random_range(0..u);
                g.add_street(u, v, rng.random_range(1..1000) as Weight, 1.0);
            }
            for _ in 0..24 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v {
                    g.add_street(u, v, rng.random_range(1..1000) as Weight, 1.0);
                }
            }

            let matrix = g.weight_matrix(WeightKind::Distance);
            let prim = Prim::new(&matrix).run();
            let kruskal = Kruskal::new(&matrix).run();
            assert_eq!(prim.total_weight, kruskal.total_weight, "round {round}");
            assert_eq!(prim.edges.len() as u32, n - 1);
        }
    }
}
