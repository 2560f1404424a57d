// src/task.rs

//! Task nodes: graph nodes that carry an ordered list of actions.
//!
//! Nothing here executes actions. A task graph is a `Digraph<TaskNode>`;
//! the order and layers computed by [`crate::dag::topo`] are the scheduling
//! metadata an executor would consume.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::dag::{Node, NodeId};

/// Free-form key/value input handed to an action.
pub type ActionInput = BTreeMap<String, String>;

/// Lifecycle state of a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Queued,
    Running,
    Waiting,
    Finished,
    Failed,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionStatus::Queued => "queued",
            ActionStatus::Running => "running",
            ActionStatus::Waiting => "waiting",
            ActionStatus::Finished => "finished",
            ActionStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Result reported by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutput {
    pub action_id: Uuid,
    pub status: ActionStatus,
    pub data: BTreeMap<String, String>,
}

/// A unit of work attached to a task.
pub trait Action: fmt::Debug + Send + Sync {
    fn conduct(&self, input: &ActionInput) -> ActionOutput;

    /// Short human-readable description.
    fn describe(&self) -> String;
}

/// Graph node carrying an ordered list of actions.
#[derive(Debug, Clone)]
pub struct TaskNode {
    pub id: NodeId,
    pub actions: Vec<Arc<dyn Action>>,
}

impl TaskNode {
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: Arc<dyn Action>) -> Self {
        self.actions.push(action);
        self
    }

    /// Descriptions of the attached actions, in order.
    pub fn action_descriptions(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.describe()).collect()
    }
}

impl Default for TaskNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for TaskNode {
    fn id(&self) -> NodeId {
        self.id
    }
}
