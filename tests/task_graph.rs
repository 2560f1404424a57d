use std::sync::Arc;

use uuid::Uuid;
use workflow_dag::dag::{
    Digraph, GraphOperable, Node, build_layered_dag, compute_layers, topological_sort,
};
use workflow_dag::task::{Action, ActionInput, ActionOutput, ActionStatus, TaskNode};

#[derive(Debug)]
struct Echo {
    id: Uuid,
    key: &'static str,
}

impl Action for Echo {
    fn conduct(&self, input: &ActionInput) -> ActionOutput {
        let mut data = ActionInput::new();
        let status = match input.get(self.key) {
            Some(value) => {
                data.insert(self.key.to_string(), value.clone());
                ActionStatus::Finished
            }
            None => ActionStatus::Failed,
        };
        ActionOutput {
            action_id: self.id,
            status,
            data,
        }
    }

    fn describe(&self) -> String {
        format!("echo {}", self.key)
    }
}

fn echo(key: &'static str) -> Arc<dyn Action> {
    Arc::new(Echo {
        id: Uuid::new_v4(),
        key,
    })
}

#[test]
fn task_graphs_use_the_same_analysis() {
    let fetch = TaskNode::new().with_action(echo("url"));
    let parse = TaskNode::new().with_action(echo("body"));
    let index = TaskNode::new().with_action(echo("doc"));
    let report = TaskNode::new();

    let mut g: Digraph<TaskNode> = Digraph::new();
    for t in [&report, &index, &parse, &fetch] {
        g.add_node(t.clone());
    }
    g.add_edge(fetch.id(), parse.id());
    g.add_edge(parse.id(), index.id());
    g.add_edge(parse.id(), report.id());

    let order: Vec<_> = topological_sort(&g)
        .unwrap()
        .iter()
        .map(|t| t.id())
        .collect();
    assert_eq!(order[0], fetch.id());
    assert_eq!(order[1], parse.id());

    let layers = compute_layers(&g);
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[2].len(), 2);

    let expanded = build_layered_dag(&layers);
    assert!(expanded.has_edge(parse.id(), index.id()));
    assert!(expanded.has_edge(parse.id(), report.id()));
}

#[test]
fn task_nodes_keep_their_actions_in_order() {
    let task = TaskNode::new()
        .with_action(echo("a"))
        .with_action(echo("b"));

    assert_eq!(task.action_descriptions(), vec!["echo a", "echo b"]);
    assert_eq!(task.label(), task.id().short());
}

#[test]
fn actions_report_their_status() {
    let action = echo("k");
    let mut input = ActionInput::new();

    assert_eq!(action.conduct(&input).status, ActionStatus::Failed);

    input.insert("k".to_string(), "v".to_string());
    let out = action.conduct(&input);
    assert_eq!(out.status, ActionStatus::Finished);
    assert_eq!(out.data.get("k").map(String::as_str), Some("v"));
}

#[test]
fn action_status_displays_lowercase() {
    let all = [
        ActionStatus::Queued,
        ActionStatus::Running,
        ActionStatus::Waiting,
        ActionStatus::Finished,
        ActionStatus::Failed,
    ];
    let shown: Vec<String> = all.iter().map(|s| s.to_string()).collect();
    assert_eq!(shown, vec!["queued", "running", "waiting", "finished", "failed"]);
}
