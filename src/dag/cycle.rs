// src/dag/cycle.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::GraphOperable;
use crate::dag::node::{Node, NodeId};

/// Name one node that lies on a cycle, or `None` for a DAG.
///
/// Used for diagnostics after [`topological_sort`](crate::dag::topological_sort)
/// has reported a cycle; the Kahn result itself only says *that* a cycle
/// exists.
pub fn find_cycle_node<G: GraphOperable>(g: &G) -> Option<NodeId> {
    let mut graph: DiGraphMap<NodeId, ()> = DiGraphMap::new();

    for node in g.all_nodes() {
        graph.add_node(node.id());
    }

    for node in g.all_nodes() {
        let from = node.id();
        for &to in g.adjacency_from(from) {
            if graph.contains_node(to) {
                graph.add_edge(from, to, ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => None,
        Err(cycle) => Some(cycle.node_id()),
    }
}
