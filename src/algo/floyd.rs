/*!
All-pairs shortest paths via Floyd-Warshall.

Produces an `n x n` distance matrix together with a first-hop matrix for path
reconstruction. Both matrices index nodes by their id, so rows and columns are
ordered `0..n`.
*/

use std::time::Instant;

use crate::{algo::*, stats::ApspStats};

/// All-pairs shortest-path computation over a [`StreetGraph`] with a fixed
/// [`WeightKind`].
///
/// Runs in cubic time and quadratic memory: intended for the dense analysis
/// of small to medium graphs, not for one-off routing queries (use
/// [`Dijkstra`](crate::algo::Dijkstra) for those).
pub struct FloydWarshall<'a> {
    graph: &'a StreetGraph,
    kind: WeightKind,
}

impl<'a> FloydWarshall<'a> {
    pub fn new(graph: &'a StreetGraph, kind: WeightKind) -> Self {
        Self { graph, kind }
    }

    /// Computes the full distance and first-hop matrices.
    pub fn run(&self) -> ApspMatrix {
        let t0 = Instant::now();
        let n = self.graph.len();

        let mut dist = vec![vec![Weight::INFINITY; n]; n];
        let mut next: Vec<Vec<Option<OptionalNode>>> = vec![vec![None; n]; n];

        for u in self.graph.vertices() {
            dist[u as usize][u as usize] = 0.0;
            next[u as usize][u as usize] = OptionalNode::new(u);
        }

        // direct segments; parallel entries keep the minimum
        for u in self.graph.vertices() {
            for e in self.graph.street_edges_of(u) {
                let w = e.weight(self.kind);
                let (i, j) = (u as usize, e.node as usize);
                if w < dist[i][j] {
                    dist[i][j] = w;
                    next[i][j] = OptionalNode::new(e.node);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let dik = dist[i][k];
                // everything through an unreachable k stays unreachable
                if dik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = dik + dist[k][j];
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        ApspMatrix {
            dist,
            next,
            stats: ApspStats {
                nodes: n as NumNodes,
                elapsed: t0.elapsed(),
            },
        }
    }
}

/// Result of a [`FloydWarshall`] run.
pub struct ApspMatrix {
    dist: Vec<Vec<Weight>>,
    next: Vec<Vec<Option<OptionalNode>>>,
    pub stats: ApspStats,
}

impl ApspMatrix {
    /// Shortest distance between `u` and `v`; infinite if unreachable.
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn distance(&self, u: Node, v: Node) -> Weight {
        self.dist[u as usize][v as usize]
    }

    /// Reconstructs the node sequence of the shortest path between `u` and
    /// `v` via first hops; empty if `v` is unreachable from `u`.
    /// ** Panics if `u >= n` or `v >= n` **
    pub fn path(&self, u: Node, v: Node) -> Vec<Node> {
        if self.next[u as usize][v as usize].is_none() {
            return Vec::new();
        }

        let n = self.dist.len();
        let mut path = vec![u];
        let mut cur = u;
        while cur != v {
            cur = match self.next[cur as usize][v as usize] {
                Some(hop) => hop.get(),
                None => return Vec::new(),
            };
            path.push(cur);
            // a path revisiting nodes signals corrupted hops; bail out
            if path.len() > n {
                return Vec::new();
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> StreetGraph {
        let mut g = StreetGraph::new(4);
        g.add_street(0, 1, 4.0, 4.0);
        g.add_street(1, 2, 3.0, 3.0);
        g.add_street(0, 2, 9.0, 9.0);
        g.add_street(2, 3, 2.0, 2.0);
        g
    }

    #[test]
    fn distances_and_paths() {
        let g = diamond();
        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();

        assert_eq!(apsp.distance(0, 3), 9.0);
        assert_eq!(apsp.path(0, 3), [0, 1, 2, 3]);
        assert_eq!(apsp.distance(0, 2), 7.0);
        assert_eq!(apsp.path(0, 2), [0, 1, 2]);

        // the graph is undirected
        assert_eq!(apsp.distance(3, 0), 9.0);
        assert_eq!(apsp.path(3, 0), [3, 2, 1, 0]);
    }

    #[test]
    fn diagonal_is_zero() {
        let g = diamond();
        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();
        for u in g.vertices() {
            assert_eq!(apsp.distance(u, u), 0.0);
            assert_eq!(apsp.path(u, u), [u]);
        }
    }

    #[test]
    fn unreachable_pairs() {
        let mut g = diamond();
        g.add_street(5, 6, 1.0, 1.0);
        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();

        assert!(apsp.distance(0, 5).is_infinite());
        assert!(apsp.path(0, 5).is_empty());
        // node 4 is isolated
        assert!(apsp.distance(4, 0).is_infinite());
        assert_eq!(apsp.path(4, 4), [4]);
    }

    #[test]
    fn parallel_segments_keep_the_minimum() {
        let mut g = StreetGraph::new(2);
        g.add_street(0, 1, 5.0, 5.0);
        g.add_street(0, 1, 2.0, 2.0);
        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();
        assert_eq!(apsp.distance(0, 1), 2.0);
    }

    #[test]
    fn empty_graph() {
        let g = StreetGraph::new(0);
        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();
        assert_eq!(apsp.stats.nodes, 0);
    }

    #[test]
    fn path_weights_sum_to_distance() {
        let mut g = diamond();
        g.add_street(1, 3, 8.0, 8.0);
        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();
        let matrix = g.weight_matrix(WeightKind::Distance);

        for u in g.vertices() {
            for v in g.vertices() {
                let path = apsp.path(u, v);
                if path.is_empty() {
                    assert!(apsp.distance(u, v).is_infinite());
                    continue;
                }
                let total: Weight = path
                    .windows(2)
                    .map(|st| matrix.weight(st[0], st[1]).unwrap())
                    .sum();
                assert_eq!(total, apsp.distance(u, v), "{u} -> {v}");
            }
        }
    }

    #[test]
    fn consistent_with_dijkstra() {
        use rand::prelude::*;
        use rand_pcg::Pcg64Mcg;

        let mut rng = Pcg64Mcg::seed_from_u64(1234);
        let n = 24u32;
        let mut g = StreetGraph::new(n);
        for _ in 0..60 {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u == v {
                continue;
            }
            let w = rng.random_range(1..100) as Weight;
            g.add_street(u, v, w, w);
        }

        let apsp = FloydWarshall::new(&g, WeightKind::Distance).run();
        let view = g.weighted_view(WeightKind::Distance);

        for s in g.vertices() {
            let tree = Dijkstra::new(&view).run(s).unwrap();
            for t in g.vertices() {
                assert_eq!(apsp.distance(s, t), tree.distance_to(t), "{s} -> {t}");
            }
        }
    }
}
