// src/export/dot.rs

//! Graphviz DOT text for any [`GraphOperable`].

use std::collections::HashMap;
use std::fmt::Write;

use crate::dag::{GraphOperable, Node, NodeId};

/// Presentation knobs for [`render_dot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Graphviz `rankdir` (`LR`, `TB`, ...).
    pub rankdir: String,
    /// Prefix labels with `T` (`T67e55044`).
    pub names: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            rankdir: "LR".to_string(),
            names: true,
        }
    }
}

impl DotOptions {
    pub fn display_label(&self, node: &impl Node) -> String {
        if self.names {
            format!("T{}", node.label())
        } else {
            node.label()
        }
    }
}

fn escape_label(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render `g` as a DOT digraph.
///
/// Nodes are numbered by their position in the node sequence. Each entry of
/// `ranks` becomes a `rank=same` group so a layer is drawn side by side;
/// rank members that are not in `g`, and edges to ids that are not in `g`,
/// are left out.
pub fn render_dot<G: GraphOperable>(
    g: &G,
    ranks: Option<&[Vec<G::Node>]>,
    opts: &DotOptions,
) -> String {
    let nodes = g.all_nodes();
    let idx: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect();

    let mut dot = String::new();
    let _ = writeln!(dot, "digraph G {{");
    let _ = writeln!(dot, "  rankdir={};", opts.rankdir);
    let _ = writeln!(dot, "  node [shape=box, style=rounded, fontsize=12];");

    for (i, node) in nodes.iter().enumerate() {
        let label = escape_label(&opts.display_label(node));
        let _ = writeln!(dot, "  {i} [label=\"{label}\"];");
    }

    for (ri, layer) in ranks.unwrap_or(&[]).iter().enumerate() {
        let _ = writeln!(dot, "  {{ rank=same; // layer {ri}");
        for node in layer {
            if let Some(j) = idx.get(&node.id()) {
                let _ = writeln!(dot, "    {j};");
            }
        }
        let _ = writeln!(dot, "  }}");
    }

    for (i, u) in nodes.iter().enumerate() {
        for v in g.adjacency_from(u.id()) {
            if let Some(j) = idx.get(v) {
                let _ = writeln!(dot, "  {i} -> {j};");
            }
        }
    }

    let _ = writeln!(dot, "}}");
    dot
}
