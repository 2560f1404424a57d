use workflow_dag::dag::{Digraph, GraphOperable, find_cycle_node, topological_sort};
use workflow_dag::errors::DagError;
use workflow_dag_test_utils::builders::{GraphBuilder, labels};
use workflow_dag_test_utils::init_tracing;

#[test]
fn chain_is_sorted_in_order() {
    init_tracing();
    let fx = GraphBuilder::new()
        .nodes(&["C", "B", "A"])
        .edges(&[("A", "B"), ("B", "C")])
        .build();

    let order = topological_sort(&fx.graph).unwrap();
    assert_eq!(labels(&order), vec!["A", "B", "C"]);
}

#[test]
fn diamond_breaks_ties_by_successor_order() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C", "D"])
        .edges(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
        .build();

    let order = topological_sort(&fx.graph).unwrap();
    assert_eq!(labels(&order), vec!["A", "B", "C", "D"]);
}

#[test]
fn initial_frontier_follows_node_sequence() {
    let fx = GraphBuilder::new().nodes(&["C", "A", "B"]).build();

    let order = topological_sort(&fx.graph).unwrap();
    assert_eq!(labels(&order), vec!["C", "A", "B"]);
}

#[test]
fn freed_nodes_follow_successor_list_order() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C"])
        .edges(&[("A", "C"), ("A", "B")])
        .build();

    let order = topological_sort(&fx.graph).unwrap();
    assert_eq!(labels(&order), vec!["A", "C", "B"]);
}

#[test]
fn every_edge_points_forward_in_the_order() {
    let fx = GraphBuilder::new()
        .nodes(&["E", "D", "C", "B", "A"])
        .edges(&[("A", "C"), ("B", "C"), ("C", "D"), ("A", "E"), ("D", "E")])
        .build();

    let order = topological_sort(&fx.graph).unwrap();
    let pos = |name: &str| {
        order
            .iter()
            .position(|n| n.name == name)
            .expect("node in order")
    };
    for (from, to) in [("A", "C"), ("B", "C"), ("C", "D"), ("A", "E"), ("D", "E")] {
        assert!(pos(from) < pos(to), "{from} must come before {to}");
    }
}

#[test]
fn two_node_cycle_is_reported() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B"])
        .edges(&[("A", "B"), ("B", "A")])
        .build();

    match topological_sort(&fx.graph) {
        Err(DagError::Cycle { sorted, total }) => {
            assert_eq!(sorted, 0);
            assert_eq!(total, 2);
        }
        other => panic!("expected Cycle, got {:?}", other),
    }
}

#[test]
fn cycle_behind_a_valid_prefix_still_fails() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C", "D"])
        .edges(&[("A", "B"), ("B", "C"), ("C", "B")])
        .build();

    match topological_sort(&fx.graph) {
        Err(DagError::Cycle { sorted, total }) => {
            assert_eq!(sorted, 2);
            assert_eq!(total, 4);
        }
        other => panic!("expected Cycle, got {:?}", other),
    }
}

#[test]
fn self_loop_is_a_cycle() {
    let fx = GraphBuilder::new().nodes(&["A"]).edge("A", "A").build();
    assert!(matches!(
        topological_sort(&fx.graph),
        Err(DagError::Cycle { .. })
    ));
}

#[test]
fn duplicate_edges_do_not_block_sorting() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B"])
        .edges(&[("A", "B"), ("A", "B")])
        .build();

    let order = topological_sort(&fx.graph).unwrap();
    assert_eq!(labels(&order), vec!["A", "B"]);
}

#[test]
fn empty_graph_sorts_to_empty_order() {
    let g: Digraph = Digraph::new();
    let order = topological_sort(&g).unwrap();
    assert!(order.is_empty());
}

#[test]
fn sorting_does_not_mutate_the_graph() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C"])
        .edges(&[("A", "B"), ("B", "C"), ("C", "B")])
        .build();
    let before: Vec<_> = fx.graph.edges().collect();

    let _ = topological_sort(&fx.graph);

    let after: Vec<_> = fx.graph.edges().collect();
    assert_eq!(before, after);
    assert_eq!(fx.graph.node_count(), 3);
}

#[test]
fn find_cycle_node_names_a_node_on_the_cycle() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C"])
        .edges(&[("A", "B"), ("B", "C"), ("C", "B")])
        .build();

    let culprit = find_cycle_node(&fx.graph).expect("cycle expected");
    assert!(culprit == fx.id("B") || culprit == fx.id("C"));
}

#[test]
fn find_cycle_node_is_none_for_a_dag() {
    let fx = GraphBuilder::new()
        .nodes(&["A", "B", "C"])
        .edges(&[("A", "B"), ("A", "C")])
        .build();

    assert_eq!(find_cycle_node(&fx.graph), None);
}
