/*!
Single-source shortest paths via Dijkstra's algorithm.

The search runs over a single-weight view (see
[`StreetGraph::weighted_view`](crate::graph::StreetGraph::weighted_view)) and
keeps, per frontier entry, the partial path from the source. This trades
memory for a backtracking-free reconstruction: once a node is finalized its
path is simply moved out of the popped entry.

# Precondition
All weights must be non-negative. Negative weights produce undefined results;
this is not checked at runtime.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    time::Instant,
};

use crate::{
    algo::*,
    stats::{DijkstraStats, RouteSummary},
};

/// A frontier entry: the partial distance from the source, the node, and the
/// partial path leading to it.
struct FrontierEntry {
    weight: Weight,
    node: Node,
    path: Vec<Node>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    /// Orders by partial distance; ties are broken by node id so that runs
    /// on identical input pop in identical order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Configurable single-source shortest-path search.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut g = StreetGraph::new(0);
/// g.add_street(0, 1, 4.0, 1.0);
/// g.add_street(1, 2, 3.0, 1.0);
/// g.add_street(0, 2, 9.0, 1.0);
///
/// let view = g.weighted_view(WeightKind::Distance);
/// let tree = Dijkstra::new(&view).run(0).unwrap();
/// assert_eq!(tree.distance_to(2), 7.0);
/// assert_eq!(tree.path_to(2), [0, 1, 2]);
/// ```
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    target: Option<Node>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            target: None,
        }
    }

    /// Sets a target node: the search stops as soon as the target is
    /// finalized. Untouched nodes keep infinite distances; nodes that were
    /// relaxed but not yet finalized keep their tentative label (see
    /// [`ShortestPathTree::distance_to`]). Safe due to the
    /// non-negative-weight finalization order.
    pub fn set_stop_at(&mut self, target: Node) {
        self.target = Some(target);
    }

    /// Builder version of [`Dijkstra::set_stop_at`].
    pub fn stop_at(mut self, target: Node) -> Self {
        self.set_stop_at(target);
        self
    }

    /// Runs the search from `source`.
    ///
    /// Returns [`GraphError::UnknownNode`] if `source` is not a node of the
    /// graph. An unreachable (or never-explored) node is not an error: its
    /// distance is infinite and its path empty.
    pub fn run(&self, source: Node) -> Result<ShortestPathTree, GraphError> {
        if !self.graph.contains_node(source) {
            return Err(GraphError::UnknownNode(source));
        }

        let t0 = Instant::now();
        let n = self.graph.len();

        let mut distances = vec![Weight::INFINITY; n];
        let mut paths = vec![Vec::new(); n];
        distances[source as usize] = 0.0;

        let mut visited = self.graph.vertex_bitset_unset();
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(FrontierEntry {
            weight: 0.0,
            node: source,
            path: vec![source],
        }));

        let mut nodes_explored = 0;
        let mut edges_relaxed = 0;

        while let Some(Reverse(FrontierEntry { weight, node, path })) = frontier.pop() {
            // stale entries for already finalized nodes are no-ops
            if visited.get_bit(node) {
                continue;
            }
            visited.set_bit(node);
            nodes_explored += 1;

            distances[node as usize] = weight;
            paths[node as usize] = path;

            if self.target == Some(node) {
                break;
            }

            for (v, w) in self.graph.weighted_neighbors_of(node) {
                if visited.get_bit(v) {
                    continue;
                }
                edges_relaxed += 1;

                let relaxed = weight + w;
                if relaxed < distances[v as usize] {
                    distances[v as usize] = relaxed;
                    let mut longer = paths[node as usize].clone();
                    longer.push(v);
                    frontier.push(Reverse(FrontierEntry {
                        weight: relaxed,
                        node: v,
                        path: longer,
                    }));
                }
            }
        }

        let route = self.target.map(|target| RouteSummary {
            source,
            target,
            total_weight: distances[target as usize],
            nodes_on_path: paths[target as usize].len(),
        });

        let stats = DijkstraStats {
            nodes: self.graph.number_of_nodes(),
            approx_segments: self.graph.approx_number_of_segments(),
            nodes_explored,
            edges_relaxed,
            elapsed: t0.elapsed(),
            route,
        };

        Ok(ShortestPathTree {
            source,
            target: self.target,
            distances,
            paths,
            stats,
        })
    }
}

/// Result of a [`Dijkstra`] run: per-node distances and reconstructed paths,
/// plus the run's statistics.
pub struct ShortestPathTree {
    source: Node,
    target: Option<Node>,
    distances: Vec<Weight>,
    paths: Vec<Vec<Node>>,
    pub stats: DijkstraStats,
}

impl ShortestPathTree {
    pub fn source(&self) -> Node {
        self.source
    }

    pub fn target(&self) -> Option<Node> {
        self.target
    }

    /// Shortest distance from the source to `v`; infinite if `v` is
    /// unreachable or was never touched before early termination.
    ///
    /// After an early-terminated run, a node that was relaxed but never
    /// finalized keeps its tentative (possibly non-optimal) label.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Weight {
        self.distances[v as usize]
    }

    /// The node sequence of the shortest path from the source to `v`
    /// (including both endpoints); empty if `v` is unreachable or was never
    /// finalized.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> &[Node] {
        &self.paths[v as usize]
    }

    /// *true* iff `v` holds a finite label. After early termination this
    /// includes tentatively labelled nodes whose path is still empty.
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize].is_finite()
    }
}
