// src/report.rs

//! Plain-text views of graphs and analysis results for stdout.

use crate::dag::{Digraph, GraphOperable, Node};
use crate::export::DotOptions;

/// One `  a -> b` line per edge, in node-sequence then successor order.
///
/// Successors that are not nodes of `g` are shown by their short id.
pub fn edge_lines<N: Node + Clone>(g: &Digraph<N>, opts: &DotOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for u in g.all_nodes() {
        let from = opts.display_label(u);
        for &v in g.adjacency_from(u.id()) {
            let to = match g.node(v) {
                Some(node) => opts.display_label(node),
                None => v.short(),
            };
            lines.push(format!("  {from} -> {to}"));
        }
    }
    lines
}

/// `a -> b -> c`
pub fn format_order<N: Node>(order: &[N], opts: &DotOptions) -> String {
    order
        .iter()
        .map(|n| opts.display_label(n))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One `  Layer i: a b` line per layer.
pub fn layer_lines<N: Node>(layers: &[Vec<N>], opts: &DotOptions) -> Vec<String> {
    layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let mut line = format!("  Layer {i}:");
            for n in layer {
                line.push(' ');
                line.push_str(&opts.display_label(n));
            }
            line
        })
        .collect()
}
