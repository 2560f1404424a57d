// src/dag/builders.rs

//! Deterministic graph builders that re-materialise analysis results.

use crate::dag::graph::{Digraph, GraphOperable};
use crate::dag::node::Node;

/// Build a chain that follows `order` exactly: `u0 -> u1 -> ... -> uk`.
///
/// Feeding a topological order of some graph `G` yields a serialised
/// version of `G`: a total order where `G` may only have had a partial one.
pub fn build_linear_chain<N: Node + Clone>(order: &[N]) -> Digraph<N> {
    let mut g = Digraph::new();
    for node in order {
        g.add_node(node.clone());
    }
    for pair in order.windows(2) {
        if let [from, to] = pair {
            g.add_edge(from.id(), to.id());
        }
    }
    g
}

/// Build a layered DAG: every node of layer `i` points to every node of
/// layer `i + 1` (complete bipartite between adjacent layers).
///
/// Nodes are added layer by layer, preserving order inside each layer. The
/// result keeps layer membership only; finer edge structure of whatever graph
/// produced `layers` is discarded.
pub fn build_layered_dag<N: Node + Clone>(layers: &[Vec<N>]) -> Digraph<N> {
    let mut g = Digraph::new();
    for node in layers.iter().flatten() {
        g.add_node(node.clone());
    }
    for pair in layers.windows(2) {
        if let [from_layer, to_layer] = pair {
            for u in from_layer {
                for v in to_layer {
                    g.add_edge(u.id(), v.id());
                }
            }
        }
    }
    g
}
