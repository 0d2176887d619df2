/*!
Connected components of a possibly-disconnected street network.

Raw street data is rarely fully connected: disconnected islands and one-way
artifacts are common. The [`Connectivity`] trait finds all
components by repeated breadth-first traversal, selects the giant component
(optionally minus a caller-supplied denylist of known-bad nodes), and the
induced subgraph of a component is obtained via
[`StreetGraph::induced_subgraph`]. The spanning-tree constructors expect
their input to be restricted to a single component this way.
*/

use itertools::Itertools;

use crate::algo::*;

/// Iterator over the connected components of a graph, one `Vec<Node>` at a
/// time. Components are discovered by a breadth-first search that restarts
/// at the smallest unvisited node, so identical input yields an identical
/// component ordering.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    excluded: NodeBitSet,
    bfs: Option<Bfs<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            excluded: graph.vertex_bitset_unset(),
            bfs: None,
        }
    }

    /// Treats the given nodes as already visited: they join no component and
    /// their edges are not taken. Must be called before iteration starts.
    pub fn set_exclude_nodes<I>(&mut self, exclude: I)
    where
        I: IntoIterator<Item = Node>,
    {
        assert!(self.bfs.is_none());
        self.excluded
            .set_bits(exclude.into_iter().filter(|&u| self.graph.contains_node(u)));
    }

    /// Builder version of [`ConnectedComponents::set_exclude_nodes`].
    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bfs.is_none() {
            // start at the smallest non-excluded node; an empty graph (or a
            // fully excluded one) has no components, which is a value here,
            // never a panic
            let excluded = &self.excluded;
            let start = self.graph.vertices().find(|&u| !excluded.get_bit(u))?;
            let mut bfs = Bfs::new(self.graph, start);
            bfs.exclude_nodes(self.excluded.iter_set_bits().map(|u| u as Node));
            self.bfs = Some(bfs);
        }

        let bfs = self.bfs.as_mut().unwrap();
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Component analysis methods, available on every adjacency structure.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over all connected components.
    ///
    /// Note that with one-way streets present, reachability follows the
    /// stored forward edges only.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = StreetGraph::new(5);
    /// g.add_street(0, 1, 1.0, 1.0);
    /// g.add_street(3, 4, 1.0, 1.0);
    ///
    /// let comps: Vec<_> = g.connected_components().collect();
    /// assert_eq!(comps, vec![vec![0, 1], vec![2], vec![3, 4]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the connected components while treating `exclude` as removed
    /// from the graph.
    fn connected_components_excluding<I>(&self, exclude: I) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        ConnectedComponents::new(self).exclude_nodes(exclude)
    }

    /// Returns the component with the greatest cardinality. Ties are broken
    /// by first-found order; an empty graph yields an empty component.
    fn largest_component(&self) -> Vec<Node> {
        self.largest_component_excluding([])
    }

    /// Returns the largest component minus a denylist of known-bad nodes
    /// (e.g. corrupted ids from a broken source extract). The denylist is
    /// applied *after* selecting the component, so it cannot flip which
    /// component wins.
    fn largest_component_excluding<I>(&self, denylist: I) -> Vec<Node>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut largest = Vec::new();
        for cc in self.connected_components() {
            if cc.len() > largest.len() {
                largest = cc;
            }
        }

        let mut denied = self.vertex_bitset_unset();
        denied.set_bits(denylist.into_iter().filter(|&u| self.contains_node(u)));
        largest.retain(|&u| !denied.get_bit(u));
        largest
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}
