// src/dag/topo.rs

//! Kahn's algorithm: total topological order and parallel execution layers.
//!
//! Both functions work purely through [`GraphOperable`] and keep their
//! in-degree bookkeeping private; the input graph is never mutated.
//!
//! Tie-breaking is deterministic: the initial frontier follows node-sequence
//! order and newly freed nodes follow successor-list order.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use crate::dag::graph::GraphOperable;
use crate::dag::node::{Node, NodeId};
use crate::errors::{DagError, Result};

/// Private working state shared by sort and layering.
struct InDegrees<'g, N> {
    indeg: HashMap<NodeId, usize>,
    by_id: HashMap<NodeId, &'g N>,
}

impl<'g, N: Node> InDegrees<'g, N> {
    fn compute<G>(g: &'g G) -> Self
    where
        G: GraphOperable<Node = N>,
    {
        let nodes = g.all_nodes();
        let mut indeg: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
        let mut by_id: HashMap<NodeId, &'g N> = HashMap::with_capacity(nodes.len());

        for u in nodes {
            indeg.insert(u.id(), 0);
            by_id.entry(u.id()).or_insert(u);
        }
        for u in nodes {
            for v in g.adjacency_from(u.id()) {
                // Edges to ids that were never added are ignored.
                if let Some(d) = indeg.get_mut(v) {
                    *d += 1;
                }
            }
        }

        Self { indeg, by_id }
    }

    /// Nodes with no incoming edges, in node-sequence order.
    fn sources(&self, nodes: &'g [N]) -> Vec<&'g N> {
        nodes
            .iter()
            .filter(|u| self.indeg.get(&u.id()) == Some(&0))
            .collect()
    }

    /// Virtually remove `u`'s outgoing edges; return successors that became
    /// free, in successor-list order.
    fn release<G>(&mut self, g: &G, u: NodeId) -> Vec<&'g N>
    where
        G: GraphOperable<Node = N>,
    {
        let mut freed = Vec::new();
        for v in g.adjacency_from(u) {
            if let Some(d) = self.indeg.get_mut(v) {
                *d = d.saturating_sub(1);
                if *d == 0 {
                    if let Some(node) = self.by_id.get(v) {
                        freed.push(*node);
                    }
                }
            }
        }
        freed
    }
}

/// Topological order via Kahn's algorithm.
///
/// Returns [`DagError::Cycle`] (and no partial order) iff fewer than
/// `node_count()` nodes could be ordered, i.e. some node sits on or behind a
/// cycle.
pub fn topological_sort<G: GraphOperable>(g: &G) -> Result<Vec<G::Node>> {
    let mut state = InDegrees::compute(g);

    let mut queue: VecDeque<&G::Node> = state.sources(g.all_nodes()).into();
    let mut order: Vec<G::Node> = Vec::with_capacity(g.node_count());

    while let Some(u) = queue.pop_front() {
        order.push(u.clone());
        queue.extend(state.release(g, u.id()));
    }

    if order.len() != g.node_count() {
        warn!(
            sorted = order.len(),
            total = g.node_count(),
            "topological sort failed: graph has a cycle"
        );
        return Err(DagError::Cycle {
            sorted: order.len(),
            total: g.node_count(),
        });
    }

    debug!(nodes = order.len(), "topological sort complete");
    Ok(order)
}

/// Partition the graph into execution layers.
///
/// Layer 0 holds every source; layer `k + 1` holds the nodes whose in-degree
/// reaches zero once layers `0..=k` have been removed. Nodes inside a layer
/// have no ordering dependency on one another.
///
/// On cyclic input the layers silently cover fewer than all nodes; use
/// [`compute_layers_strict`] or [`topological_sort`] when that matters.
pub fn compute_layers<G: GraphOperable>(g: &G) -> Vec<Vec<G::Node>> {
    let mut state = InDegrees::compute(g);

    let mut frontier = state.sources(g.all_nodes());
    let mut layers: Vec<Vec<G::Node>> = Vec::new();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for u in &frontier {
            next.extend(state.release(g, u.id()));
        }
        layers.push(frontier.into_iter().cloned().collect());
        frontier = next;
    }

    debug!(layers = layers.len(), "layer partition complete");
    layers
}

/// Like [`compute_layers`], but reports [`DagError::Cycle`] when the layers do
/// not cover every node.
pub fn compute_layers_strict<G: GraphOperable>(g: &G) -> Result<Vec<Vec<G::Node>>> {
    let layers = compute_layers(g);
    let covered: usize = layers.iter().map(Vec::len).sum();
    if covered != g.node_count() {
        return Err(DagError::Cycle {
            sorted: covered,
            total: g.node_count(),
        });
    }
    Ok(layers)
}
