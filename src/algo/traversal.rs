/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator over an explicit frontier, where the frontier
  container determines the order (queue -> BFS, stack -> DFS).
- Optional per-item depth tracking (`DepthOfNode`), which backs the
  depth and saturation statistics of `dfs_with_stats`.
- A high-level [`Traversal`] trait exposing `bfs` / `dfs` /
  `dfs_with_stats` directly as methods on graph data structures.

All traversals are iterative; no recursion is used anywhere, so large street
graphs cannot overflow the call stack.
*/

use std::{collections::VecDeque, marker::PhantomData, time::Instant};

use crate::{algo::*, stats::TraversalStats};

/// Abstraction for items yielded by a traversal iterator.
///
/// An item encodes the **node currently visited** and optionally the depth at
/// which it was pushed onto the frontier (push depth = parent depth + 1).
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (depth reported as 0).
/// - [`DepthOfNode`] — stores `(node, depth)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs the item for the traversal root (depth 0).
    fn new_root(item: Node) -> Self;

    /// Constructs an item pushed while expanding `parent`.
    fn new_child(parent: &Self, item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the push-depth of this item.
    fn depth(&self) -> NumNodes;
}

impl SequencedItem for Node {
    fn new_root(item: Node) -> Self {
        item
    }
    fn new_child(_: &Self, item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn depth(&self) -> NumNodes {
        0
    }
}

/// Compact `(node, push-depth)` item for depth-tracking traversals.
pub type DepthOfNode = (Node, NumNodes);

impl SequencedItem for DepthOfNode {
    fn new_root(item: Node) -> Self {
        (item, 0)
    }
    fn new_child(parent: &Self, item: Node) -> Self {
        (item, parent.1 + 1)
    }
    fn item(&self) -> Node {
        self.0
    }
    fn depth(&self) -> NumNodes {
        self.1
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" items during a traversal.
/// The implementation determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS** (most recently pushed first)
pub trait NodeSequencer<T> {
    /// Whether nodes are marked visited when pushed or when popped.
    ///
    /// Queues mark on push, so each node enters the frontier at most once.
    /// Stacks mark on pop: a node may sit on the stack several times and
    /// the most recent push determines when (and at which depth) it is
    /// visited, while the stale entries are skipped on pop.
    const MARK_ON_PUSH: bool;

    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const MARK_ON_PUSH: bool = true;

    fn init(u: T) -> Self {
        Self::from_iter([u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const MARK_ON_PUSH: bool = false;

    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of items to visit and a
/// bitset of visited nodes. The marking discipline follows the sequencer
/// (see [`NodeSequencer::MARK_ON_PUSH`]): the queue variant enqueues each
/// node at most once, the stack variant allows re-pushes and skips stale
/// stack entries when popped. Either way every node is yielded at most once
/// and the yield order is deterministic for identical input.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A DFS traversal iterator that additionally yields the push-depth of
/// every visited node.
pub type DfsWithDepth<'a, G> = TraversalSearch<'a, G, Vec<DepthOfNode>, DepthOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = loop {
            let item = self.sequencer.pop()?;
            // set_bit reports whether the bit was already set, i.e. whether
            // this is a stale stack duplicate
            if S::MARK_ON_PUSH || !self.visited.set_bit(item.item()) {
                break item;
            }
        };
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.sequencer.push(I::new_child(&popped, v));
                    if S::MARK_ON_PUSH {
                        self.visited.set_bit(v);
                    }
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // stale stack duplicates may be skipped, so the frontier size is an
        // upper bound only when marking on pop
        let lower = if S::MARK_ON_PUSH {
            self.sequencer.cardinality()
        } else {
            0
        };
        (lower, Some(self.graph.len()))
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` ** — use [`Traversal::bfs`] and friends for
    /// a checked entry point.
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));
        let mut visited = graph.vertex_bitset_unset();
        if S::MARK_ON_PUSH {
            visited.set_bit(start);
        }
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_root(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and
    /// returns true iff successful. Requires that the search came to a hold
    /// earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(u) => {
                if S::MARK_ON_PUSH {
                    self.visited.set_bit(u);
                }
                self.sequencer.push(I::new_root(u));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it
    /// and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it
    /// and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was
    /// already visited, i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// A queue-based search will still yield the node if it is already on
    /// the frontier. It is therefore highly recommended to call this method
    /// directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Excludes multiple nodes from the traversal. Functionally equivalent to
    /// repeatedly calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }
}

/// Provides convenient traversal methods directly on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **breadth-first order**: FIFO frontier, each node enqueued at most
    /// once, yield order is the dequeue order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = StreetGraph::new(3);
    /// g.add_street(0, 1, 1.0, 1.0);
    /// g.add_street(1, 2, 1.0, 1.0);
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Result<Bfs<'_, Self>, GraphError> {
        if !self.contains_node(start) {
            return Err(GraphError::UnknownNode(start));
        }
        Ok(Bfs::new(self, start))
    }

    /// Returns an iterator that traverses nodes reachable from `start` in
    /// **depth-first order**: LIFO frontier, the most recently pushed
    /// neighbor is explored first.
    fn dfs(&self, start: Node) -> Result<Dfs<'_, Self>, GraphError> {
        if !self.contains_node(start) {
            return Err(GraphError::UnknownNode(start));
        }
        Ok(Dfs::new(self, start))
    }

    /// Runs an instrumented depth-first traversal from `start` and returns
    /// the visitation order together with [`TraversalStats`]: distinct nodes
    /// visited, maximal push-depth, elapsed wall time, and whether the
    /// traversal saturated the given graph (`visited == n`).
    fn dfs_with_stats(&self, start: Node) -> Result<(Vec<Node>, TraversalStats), GraphError> {
        if !self.contains_node(start) {
            return Err(GraphError::UnknownNode(start));
        }

        let t0 = Instant::now();
        let mut order = Vec::with_capacity(self.len());
        let mut max_depth = 0;
        for (u, depth) in DfsWithDepth::new(self, start) {
            order.push(u);
            max_depth = max_depth.max(depth);
        }

        let stats = TraversalStats {
            nodes_visited: order.len() as NumNodes,
            max_depth,
            saturated: order.len() == self.len(),
            elapsed: t0.elapsed(),
        };
        Ok((order, stats))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
