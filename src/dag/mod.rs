// src/dag/mod.rs

//! Directed graphs of workflow nodes and their scheduling analyses.
//!
//! - [`node`] defines node identity and the [`Node`] trait.
//! - [`graph`] holds the [`Digraph`] storage and the [`GraphOperable`] contract.
//! - [`generate`] builds random graphs that are acyclic by construction.
//! - [`builders`] turns an order or a layering back into a graph.
//! - [`topo`] runs Kahn's algorithm for a total order or execution layers.
//! - [`cycle`] names a node on a cycle for diagnostics.

pub mod builders;
pub mod cycle;
pub mod generate;
pub mod graph;
pub mod node;
pub mod topo;

pub use builders::{build_layered_dag, build_linear_chain};
pub use cycle::find_cycle_node;
pub use generate::{generate_random_dag, resolve_seed, seeded_rng};
pub use graph::{Digraph, GraphOperable};
pub use node::{Node, NodeId, SimpleNode};
pub use topo::{compute_layers, compute_layers_strict, topological_sort};
