use fxhash::FxHashMap;

use crate::node::{Node, NumNodes};

/// Bidirectional mapping between external 64bit identifiers (OSM-style node
/// ids) and the compact internal ids used by
/// [`StreetGraph`](crate::graph::StreetGraph). Internal ids are assigned
/// consecutively in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct ExternalIds {
    to_internal: FxHashMap<u64, Node>,
    to_external: Vec<u64>,
}

impl ExternalIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the internal id of `ext`, assigning the next free one if it
    /// was never seen before.
    pub fn node_of(&mut self, ext: u64) -> Node {
        *self.to_internal.entry(ext).or_insert_with(|| {
            let node = self.to_external.len() as Node;
            self.to_external.push(ext);
            node
        })
    }

    /// Returns the internal id of `ext` without assigning
    pub fn get_node(&self, ext: u64) -> Option<Node> {
        self.to_internal.get(&ext).copied()
    }

    /// Returns the external id of `node`
    /// ** Panics if `node` was never assigned **
    pub fn external_of(&self, node: Node) -> u64 {
        self.to_external[node as usize]
    }

    pub fn len(&self) -> NumNodes {
        self.to_external.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.to_external.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_in_order_of_appearance() {
        let mut ids = ExternalIds::new();
        assert_eq!(ids.node_of(900_000_001), 0);
        assert_eq!(ids.node_of(123), 1);
        assert_eq!(ids.node_of(900_000_001), 0);
        assert_eq!(ids.len(), 2);

        assert_eq!(ids.external_of(1), 123);
        assert_eq!(ids.get_node(123), Some(1));
        assert_eq!(ids.get_node(42), None);
    }
}
