// src/dag/node.rs

//! Node identity and the [`Node`] capability trait.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Length of the display label derived from a node id.
pub const LABEL_LEN: usize = 8;

/// Globally unique, immutable node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Draw a fresh random (v4) identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight characters of the hyphenated form, e.g. `"67e55044"`.
    ///
    /// Purely cosmetic; collisions across unrelated graphs are possible.
    pub fn short(&self) -> String {
        let mut s = self.0.hyphenated().to_string();
        s.truncate(LABEL_LEN);
        s
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can live in a [`Digraph`](crate::dag::Digraph).
///
/// Graph storage and analysis only ever look at [`Node::id`]; the label is
/// used for display and diagram export.
pub trait Node {
    fn id(&self) -> NodeId;

    fn label(&self) -> String {
        self.id().short()
    }
}

/// Identity-only node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SimpleNode {
    pub id: NodeId,
}

impl SimpleNode {
    pub fn new() -> Self {
        Self { id: NodeId::new() }
    }
}

impl Default for SimpleNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for SimpleNode {
    fn id(&self) -> NodeId {
        self.id
    }
}
