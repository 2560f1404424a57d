// src/dag/graph.rs

use std::collections::HashMap;

use crate::dag::node::{Node, NodeId, SimpleNode};
use crate::errors::{DagError, Result};

/// Read/write contract shared by all directed graph types.
///
/// Topological analysis is written against this trait only, so it works for
/// any node type (plain ids, task nodes, ...).
pub trait GraphOperable {
    type Node: Node + Clone;

    // Node operations
    fn add_node(&mut self, node: Self::Node);
    fn get_node(&self, id: NodeId) -> Result<&Self::Node>;
    fn node_count(&self) -> usize;
    fn all_nodes(&self) -> &[Self::Node];

    // Edge operations
    fn add_edge(&mut self, from: NodeId, to: NodeId);
    fn remove_edge(&mut self, from: NodeId, to: NodeId);
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;

    // Adjacency access
    fn adjacency(&self) -> &HashMap<NodeId, Vec<NodeId>>;
    fn adjacency_from(&self, id: NodeId) -> &[NodeId];

    fn is_directed(&self) -> bool {
        true
    }
}

/// In-memory directed graph keyed by node identity.
///
/// - `nodes` keeps insertion order; that order seeds the frontier in
///   topological analysis, so it is observable.
/// - `adjacency` maps a node id to its successors in edge-insertion order.
///   Duplicate edges are kept.
/// - `index` is a side map from id to position in `nodes` so node data can be
///   found without hashing the node itself.
///
/// Nodes are never removed. Adding the same id twice is a caller error; the
/// graph does not guard against it.
#[derive(Debug, Clone)]
pub struct Digraph<N = SimpleNode> {
    nodes: Vec<N>,
    index: HashMap<NodeId, usize>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl<N: Node + Clone> Digraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Position of `id` in the node sequence.
    pub fn node_index(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Look up a node by id through the side index (O(1)).
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.node_index(id).and_then(|i| self.nodes.get(i))
    }

    /// Total number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// All edges in node-sequence order, then successor order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().flat_map(move |u| {
            let from = u.id();
            self.adjacency_from(from).iter().map(move |&to| (from, to))
        })
    }

    /// Edges as `(from, to)` positions in the node sequence.
    ///
    /// Edges pointing at ids that were never added as nodes are skipped.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(move |(i, u)| {
                self.adjacency_from(u.id())
                    .iter()
                    .filter_map(move |v| self.node_index(*v).map(|j| (i, j)))
            })
            .collect()
    }

    /// Successor nodes of `id`, skipping successors that are not in the graph.
    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = &N> + '_ {
        self.adjacency_from(id)
            .iter()
            .filter_map(move |v| self.node(*v))
    }
}

impl Digraph<SimpleNode> {
    /// Graph with `n` fresh, unconnected nodes.
    pub fn with_size(n: usize) -> Self {
        let mut g = Self::new();
        for _ in 0..n {
            g.add_node(SimpleNode::new());
        }
        g
    }
}

impl<N: Node + Clone> Default for Digraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node + Clone> GraphOperable for Digraph<N> {
    type Node = N;

    fn add_node(&mut self, node: N) {
        let id = node.id();
        self.index.insert(id, self.nodes.len());
        self.adjacency.entry(id).or_default();
        self.nodes.push(node);
    }

    /// Linear scan over the node sequence.
    fn get_node(&self, id: NodeId) -> Result<&N> {
        self.nodes
            .iter()
            .find(|n| n.id() == id)
            .ok_or(DagError::NodeNotFound(id))
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn all_nodes(&self) -> &[N] {
        &self.nodes
    }

    /// No cycle or duplicate check.
    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Removes every `from -> to` edge, not only the first.
    fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        if let Some(succ) = self.adjacency.get_mut(&from) {
            succ.retain(|v| *v != to);
        }
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency_from(from).contains(&to)
    }

    fn adjacency(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.adjacency
    }

    fn adjacency_from(&self, id: NodeId) -> &[NodeId] {
        self.adjacency
            .get(&id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
