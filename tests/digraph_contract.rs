use workflow_dag::dag::{Digraph, GraphOperable, Node, NodeId, SimpleNode};
use workflow_dag::errors::DagError;
use workflow_dag_test_utils::builders::{GraphBuilder, labels};

#[test]
fn add_node_creates_empty_successor_list() {
    let mut g: Digraph = Digraph::new();
    let a = SimpleNode::new();
    g.add_node(a);

    assert_eq!(g.node_count(), 1);
    assert!(g.adjacency().contains_key(&a.id()));
    assert!(g.adjacency_from(a.id()).is_empty());
}

#[test]
fn re_adding_a_node_keeps_its_successors() {
    let mut g: Digraph = Digraph::new();
    let a = SimpleNode::new();
    let b = SimpleNode::new();
    g.add_node(a);
    g.add_node(b);
    g.add_edge(a.id(), b.id());

    g.add_node(a);

    assert_eq!(g.node_count(), 3);
    assert!(g.has_edge(a.id(), b.id()));
    assert_eq!(g.adjacency_from(a.id()), &[b.id()]);
    assert_eq!(g.node_index(a.id()), Some(2));
}

#[test]
fn edges_added_before_their_source_node_survive_add_node() {
    let mut g: Digraph = Digraph::new();
    let a = SimpleNode::new();
    let b = SimpleNode::new();
    g.add_node(b);
    g.add_edge(a.id(), b.id());

    g.add_node(a);

    assert!(g.has_edge(a.id(), b.id()));
    assert_eq!(g.edge_indices(), vec![(1, 0)]);
}

#[test]
fn all_nodes_preserves_insertion_order() {
    let fx = GraphBuilder::new().nodes(&["C", "A", "B"]).build();
    assert_eq!(labels(fx.graph.all_nodes()), vec!["C", "A", "B"]);
}

#[test]
fn get_node_finds_by_identity() {
    let fx = GraphBuilder::new().nodes(&["A", "B"]).build();
    let node = fx.graph.get_node(fx.id("B")).unwrap();
    assert_eq!(node.label(), "B");
}

#[test]
fn get_node_unknown_id_is_not_found() {
    let fx = GraphBuilder::new().nodes(&["A"]).build();
    let missing = NodeId::new();

    match fx.graph.get_node(missing) {
        Err(DagError::NodeNotFound(id)) => assert_eq!(id, missing),
        other => panic!("expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn duplicate_edges_are_kept() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B"])
        .edge("A", "B")
        .edge("A", "B")
        .build();

    assert_eq!(fx.graph.adjacency_from(fx.id("A")).len(), 2);
    assert_eq!(fx.graph.edge_count(), 2);
}

#[test]
fn remove_edge_drops_every_occurrence() {
    let mut fx = GraphBuilder::new()
        .nodes(&["A", "B", "C"])
        .edge("A", "B")
        .edge("A", "C")
        .edge("A", "B")
        .build();
    let (a, b, c) = (fx.id("A"), fx.id("B"), fx.id("C"));

    fx.graph.remove_edge(a, b);

    assert!(!fx.graph.has_edge(a, b));
    assert_eq!(fx.graph.adjacency_from(a), &[c]);
}

#[test]
fn remove_missing_edge_is_a_noop() {
    let mut fx = GraphBuilder::new().nodes(&["A", "B"]).edge("A", "B").build();
    let (a, b) = (fx.id("A"), fx.id("B"));

    fx.graph.remove_edge(b, a);
    fx.graph.remove_edge(NodeId::new(), a);

    assert!(fx.graph.has_edge(a, b));
    assert_eq!(fx.graph.edge_count(), 1);
}

#[test]
fn has_edge_is_directional() {
    let fx = GraphBuilder::new().nodes(&["A", "B"]).edge("A", "B").build();
    assert!(fx.has_edge("A", "B"));
    assert!(!fx.has_edge("B", "A"));
}

#[test]
fn adjacency_from_unknown_node_is_empty() {
    let g: Digraph = Digraph::with_size(3);
    assert!(g.adjacency_from(NodeId::new()).is_empty());
}

#[test]
fn successor_order_follows_insertion() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C", "D"])
        .edges(&[("A", "D"), ("A", "B"), ("A", "C")])
        .build();

    let succ: Vec<String> = fx
        .graph
        .successors(fx.id("A"))
        .map(|n| n.label())
        .collect();
    assert_eq!(succ, vec!["D", "B", "C"]);
}

#[test]
fn graph_is_directed() {
    let g: Digraph = Digraph::new();
    assert!(g.is_directed());
}

#[test]
fn with_size_creates_unconnected_nodes() {
    let g = Digraph::with_size(4);
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 0);
    for node in g.all_nodes() {
        assert!(g.adjacency_from(node.id()).is_empty());
    }
}

#[test]
fn edge_indices_use_node_positions_and_skip_dangling_targets() {
    let mut fx = GraphBuilder::new()
        .nodes(&["A", "B", "C"])
        .edges(&[("A", "C"), ("B", "C"), ("A", "B")])
        .build();
    let a = fx.id("A");
    fx.graph.add_edge(a, NodeId::new());

    assert_eq!(fx.graph.edge_indices(), vec![(0, 2), (0, 1), (1, 2)]);
    assert_eq!(fx.graph.edges().count(), 4);
}

#[test]
fn labels_are_eight_char_id_prefixes() {
    let node = SimpleNode::new();
    let label = node.label();

    assert_eq!(label.len(), 8);
    assert!(node.id().to_string().starts_with(&label));
}

#[test]
fn node_ids_are_unique() {
    let g = Digraph::with_size(50);
    let mut ids: Vec<NodeId> = g.all_nodes().iter().map(|n| n.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}
