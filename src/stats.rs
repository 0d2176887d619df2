/*!
# Statistics Records

Every algorithm run returns, next to its primary result, a statistics record:
counters gathered during the run, elapsed wall time, and the theoretical
complexity label. Statistics are purely observational and never affect the
primary result.

Each record is a plain struct; the [`AlgoStats`] trait additionally exposes a
flat `(name, value)` metric listing so callers can format or export records
uniformly (e.g. as a table or CSV row) without knowing the concrete type.
*/

use std::fmt::{self, Display};
use std::time::Duration;

use crate::{
    edge::{NumEdges, Weight},
    node::{Node, NumNodes},
};

/// A single named metric value of a statistics record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// An integral counter (node counts, relaxation counts, ...)
    Count(u64),
    /// A weight in the active weight unit (meters or minutes)
    Weight(Weight),
    /// Elapsed wall time in seconds
    Seconds(f64),
    /// A static label such as the algorithm name or complexity class
    Text(&'static str),
    /// A boolean diagnostic such as the saturation flag
    Flag(bool),
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(x) => write!(f, "{x}"),
            MetricValue::Weight(w) => write!(f, "{w}"),
            MetricValue::Seconds(s) => write!(f, "{s:.6}"),
            MetricValue::Text(t) => write!(f, "{t}"),
            MetricValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Uniform access to the flat metric listing of a statistics record.
pub trait AlgoStats {
    /// Name of the algorithm that produced this record
    fn algorithm(&self) -> &'static str;

    /// Theoretical complexity label, e.g. `"O(V^3)"`
    fn complexity(&self) -> &'static str;

    /// The record as a flat listing of named metrics, starting with the
    /// algorithm name and ending with the complexity label.
    fn metrics(&self) -> Vec<(&'static str, MetricValue)>;
}

fn seconds(d: Duration) -> MetricValue {
    MetricValue::Seconds(d.as_secs_f64())
}

/// Statistics of an instrumented depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalStats {
    /// Distinct nodes visited
    pub nodes_visited: NumNodes,
    /// Maximal push-depth seen (root has depth 0)
    pub max_depth: NumNodes,
    /// *true* iff the traversal visited every node of the given graph.
    /// This only reflects saturation of the input graph, which may already
    /// be a subgraph, not global connectivity.
    pub saturated: bool,
    /// Elapsed wall time
    pub elapsed: Duration,
}

impl AlgoStats for TraversalStats {
    fn algorithm(&self) -> &'static str {
        "DFS"
    }

    fn complexity(&self) -> &'static str {
        "O(V + E)"
    }

    fn metrics(&self) -> Vec<(&'static str, MetricValue)> {
        vec![
            ("algorithm", MetricValue::Text(self.algorithm())),
            ("nodes_visited", MetricValue::Count(self.nodes_visited as u64)),
            ("max_depth", MetricValue::Count(self.max_depth as u64)),
            ("saturated", MetricValue::Flag(self.saturated)),
            ("elapsed_s", seconds(self.elapsed)),
            ("complexity", MetricValue::Text(self.complexity())),
        ]
    }
}

/// Per-target route summary, filled when a Dijkstra run was given a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub source: Node,
    pub target: Node,
    /// Total path weight; infinite if the target is unreachable
    pub total_weight: Weight,
    /// Number of nodes on the reconstructed path; 0 if unreachable
    pub nodes_on_path: usize,
}

/// Statistics of a single-source shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DijkstraStats {
    /// Number of nodes of the input view
    pub nodes: NumNodes,
    /// Approximate number of undirected segments of the input view
    pub approx_segments: NumEdges,
    /// Nodes finalized (popped with a fresh distance)
    pub nodes_explored: u64,
    /// Relaxation attempts over unvisited neighbors, improving or not
    pub edges_relaxed: u64,
    /// Elapsed wall time
    pub elapsed: Duration,
    /// Route summary, present iff a target was configured
    pub route: Option<RouteSummary>,
}

impl AlgoStats for DijkstraStats {
    fn algorithm(&self) -> &'static str {
        "Dijkstra"
    }

    fn complexity(&self) -> &'static str {
        "O((V + E) log V)"
    }

    fn metrics(&self) -> Vec<(&'static str, MetricValue)> {
        let mut m = vec![
            ("algorithm", MetricValue::Text(self.algorithm())),
            ("nodes", MetricValue::Count(self.nodes as u64)),
            ("segments_approx", MetricValue::Count(self.approx_segments as u64)),
            ("nodes_explored", MetricValue::Count(self.nodes_explored)),
            ("edges_relaxed", MetricValue::Count(self.edges_relaxed)),
            ("elapsed_s", seconds(self.elapsed)),
        ];
        if let Some(route) = &self.route {
            m.push(("source", MetricValue::Count(route.source as u64)));
            m.push(("target", MetricValue::Count(route.target as u64)));
            m.push(("total_weight", MetricValue::Weight(route.total_weight)));
            m.push(("nodes_on_path", MetricValue::Count(route.nodes_on_path as u64)));
        }
        m.push(("complexity", MetricValue::Text(self.complexity())));
        m
    }
}

/// Statistics of an all-pairs shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApspStats {
    /// Number of nodes, i.e. the generated matrix is `nodes x nodes`
    pub nodes: NumNodes,
    /// Elapsed wall time
    pub elapsed: Duration,
}

impl AlgoStats for ApspStats {
    fn algorithm(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn complexity(&self) -> &'static str {
        "O(V^3)"
    }

    fn metrics(&self) -> Vec<(&'static str, MetricValue)> {
        vec![
            ("algorithm", MetricValue::Text(self.algorithm())),
            ("nodes", MetricValue::Count(self.nodes as u64)),
            ("matrix_rows", MetricValue::Count(self.nodes as u64)),
            ("elapsed_s", seconds(self.elapsed)),
            ("complexity", MetricValue::Text(self.complexity())),
        ]
    }
}

/// Statistics of a minimum-spanning-tree construction, shared by both
/// constructors and distinguished by the `algorithm` label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstStats {
    pub(crate) algorithm: &'static str,
    pub(crate) complexity: &'static str,
    /// Number of nodes of the input matrix
    pub nodes: NumNodes,
    /// Approximate number of undirected segments of the input matrix
    pub approx_segments: NumEdges,
    /// Candidate edges inspected (heap pops / sorted edges processed)
    pub edges_considered: u64,
    /// Inspected edges discarded because they would close a cycle
    pub cycles_skipped: u64,
    /// Edges actually placed in the tree
    pub edges_in_tree: u64,
    /// Sum of the committed edge weights
    pub total_weight: Weight,
    /// Elapsed wall time
    pub elapsed: Duration,
}

impl AlgoStats for MstStats {
    fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    fn complexity(&self) -> &'static str {
        self.complexity
    }

    fn metrics(&self) -> Vec<(&'static str, MetricValue)> {
        vec![
            ("algorithm", MetricValue::Text(self.algorithm)),
            ("nodes", MetricValue::Count(self.nodes as u64)),
            ("segments_approx", MetricValue::Count(self.approx_segments as u64)),
            ("edges_considered", MetricValue::Count(self.edges_considered)),
            ("cycles_skipped", MetricValue::Count(self.cycles_skipped)),
            ("edges_in_tree", MetricValue::Count(self.edges_in_tree)),
            ("total_weight", MetricValue::Weight(self.total_weight)),
            ("elapsed_s", seconds(self.elapsed)),
            ("complexity", MetricValue::Text(self.complexity)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_are_flat_and_labelled() {
        let stats = TraversalStats {
            nodes_visited: 5,
            max_depth: 3,
            saturated: true,
            elapsed: Duration::from_millis(2),
        };
        let metrics = stats.metrics();
        assert_eq!(metrics[0], ("algorithm", MetricValue::Text("DFS")));
        assert_eq!(
            metrics.last().unwrap(),
            &("complexity", MetricValue::Text("O(V + E)"))
        );
        assert!(metrics.iter().any(|&(k, v)| k == "max_depth" && v == MetricValue::Count(3)));
    }

    #[test]
    fn metric_display() {
        assert_eq!(MetricValue::Count(7).to_string(), "7");
        assert_eq!(MetricValue::Text("Prim").to_string(), "Prim");
        assert_eq!(MetricValue::Flag(false).to_string(), "false");
        assert_eq!(MetricValue::Seconds(0.5).to_string(), "0.500000");
    }
}
