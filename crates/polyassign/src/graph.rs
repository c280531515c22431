//! Undirected adjacency built from an edge list.

use std::collections::HashMap;

use crate::types::NodeId;

/// Symmetric adjacency lists.
///
/// Nodes are ordered by first appearance in the edge list (`u` before `v`
/// within each edge); each list keeps edge insertion order and multiplicity.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    ids: Vec<NodeId>,
    slot: HashMap<NodeId, usize>,
    adj: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Build from `(u, v)` pairs. Duplicates and self-loops are kept as given;
    /// endpoints are not checked against any node table.
    pub fn build<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut g = Graph::default();
        for (u, v) in edges {
            let su = g.slot_of(u);
            g.adj[su].push(v);
            let sv = g.slot_of(v);
            g.adj[sv].push(u);
        }
        g
    }

    fn slot_of(&mut self, id: NodeId) -> usize {
        if let Some(&s) = self.slot.get(&id) {
            return s;
        }
        let s = self.ids.len();
        self.ids.push(id);
        self.slot.insert(id, s);
        self.adj.push(Vec::new());
        s
    }

    /// Neighbours of `id` in insertion order; empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.slot
            .get(&id)
            .map(|&s| self.adj[s].as_slice())
            .unwrap_or(&[])
    }

    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot.contains_key(&id)
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
