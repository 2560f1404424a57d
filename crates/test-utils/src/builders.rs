#![allow(dead_code)]

use std::collections::HashMap;

use workflow_dag::dag::{Digraph, GraphOperable, Node, NodeId};

/// Node with a fixed, human-chosen label so assertions can talk about
/// `"A"` and `"B"` instead of uuids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedNode {
    pub id: NodeId,
    pub name: String,
}

impl NamedNode {
    pub fn new(name: &str) -> Self {
        Self {
            id: NodeId::new(),
            name: name.to_string(),
        }
    }
}

impl Node for NamedNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// Fresh named nodes, one per name, in order.
pub fn named_nodes(names: &[&str]) -> Vec<NamedNode> {
    names.iter().map(|n| NamedNode::new(n)).collect()
}

/// Labels of a node sequence, for compact assertions.
pub fn labels<N: Node>(nodes: &[N]) -> Vec<String> {
    nodes.iter().map(|n| n.label()).collect()
}

/// Labels of each layer.
pub fn layer_labels<N: Node>(layers: &[Vec<N>]) -> Vec<Vec<String>> {
    layers.iter().map(|l| labels(l)).collect()
}

/// Builder for small named graphs.
///
/// ```ignore
/// let fx = GraphBuilder::new()
///     .nodes(&["A", "B", "C"])
///     .edge("A", "B")
///     .edge("B", "C")
///     .build();
/// assert!(fx.graph.has_edge(fx.id("A"), fx.id("B")));
/// ```
pub struct GraphBuilder {
    nodes: Vec<NamedNode>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(mut self, name: &str) -> Self {
        self.nodes.push(NamedNode::new(name));
        self
    }

    pub fn nodes(mut self, names: &[&str]) -> Self {
        for name in names {
            self.nodes.push(NamedNode::new(name));
        }
        self
    }

    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.edges.push((from.to_string(), to.to_string()));
        self
    }

    pub fn edges(mut self, edges: &[(&str, &str)]) -> Self {
        for (from, to) in edges {
            self.edges.push((from.to_string(), to.to_string()));
        }
        self
    }

    pub fn build(self) -> Fixture {
        let ids: HashMap<String, NodeId> = self
            .nodes
            .iter()
            .map(|n| (n.name.clone(), n.id))
            .collect();

        let mut graph = Digraph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for (from, to) in self.edges {
            let from = *ids.get(&from).expect("edge source must be a declared node");
            let to = *ids.get(&to).expect("edge target must be a declared node");
            graph.add_edge(from, to);
        }

        Fixture { graph, ids }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built graph plus name -> id lookup.
pub struct Fixture {
    pub graph: Digraph<NamedNode>,
    pub ids: HashMap<String, NodeId>,
}

impl Fixture {
    pub fn id(&self, name: &str) -> NodeId {
        *self.ids.get(name).expect("unknown node name")
    }

    pub fn node(&self, name: &str) -> NamedNode {
        self.graph
            .get_node(self.id(name))
            .expect("node present in fixture")
            .clone()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.graph.has_edge(self.id(from), self.id(to))
    }
}
