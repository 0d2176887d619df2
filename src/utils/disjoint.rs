use crate::node::{Node, NumNodes};

/// Disjoint-set forest over node ids with path compression and union by
/// rank. Used by [`Kruskal`](crate::algo::Kruskal) for cycle detection.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<Node>,
    rank: Vec<u32>,
}

impl DisjointSetForest {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
        }
    }

    /// Returns the representative of the set containing `u`, compressing
    /// the path walked along the way.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cur = u;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`. Returns *false* if they
    /// already belong to the same set.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        match self.rank[ru as usize].cmp(&self.rank[rv as usize]) {
            std::cmp::Ordering::Less => self.parent[ru as usize] = rv,
            std::cmp::Ordering::Greater => self.parent[rv as usize] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv as usize] = ru;
                self.rank[ru as usize] += 1;
            }
        }

        true
    }

    /// *true* iff `u` and `v` belong to the same set
    pub fn connected(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut dsf = DisjointSetForest::new(5);
        for u in 0..5 {
            assert_eq!(dsf.find(u), u);
        }
    }

    #[test]
    fn union_merges_and_reports_cycles() {
        let mut dsf = DisjointSetForest::new(6);
        assert!(dsf.union(0, 1));
        assert!(dsf.union(2, 3));
        assert!(!dsf.connected(0, 2));

        assert!(dsf.union(1, 2));
        assert!(dsf.connected(0, 3));

        // closing a cycle
        assert!(!dsf.union(0, 3));
    }

    #[test]
    fn path_compression_flattens() {
        let mut dsf = DisjointSetForest::new(8);
        for u in 0..7 {
            dsf.union(u, u + 1);
        }
        let root = dsf.find(7);
        for u in 0..8 {
            assert_eq!(dsf.find(u), root);
        }
    }
}
