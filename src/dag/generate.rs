// src/dag/generate.rs

//! Random DAG generation.
//!
//! Acyclicity is enforced structurally: a random permutation fixes a total
//! order over the nodes and edges only ever point from a lower to a higher
//! rank. The permutation is therefore a valid topological order of the
//! result and no cycle check is needed.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::dag::graph::{Digraph, GraphOperable};
use crate::dag::node::{Node, SimpleNode};

/// Generate a random DAG with `n` nodes where each order-respecting pair
/// `(u, v)` gets the edge `u -> v` with probability `p`.
///
/// The edge structure is a pure function of the random stream: the same
/// seeded `rng` yields the same edges (as node-sequence index pairs). Node
/// ids are always fresh.
///
/// `p <= 0` adds no edges and `p >= 1` adds every allowed edge.
pub fn generate_random_dag<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Digraph<SimpleNode> {
    let mut g = Digraph::with_size(n);

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut *rng);

    // position[node] = rank of node in the permutation
    let mut position = vec![0usize; n];
    for (rank, &node) in perm.iter().enumerate() {
        position[node] = rank;
    }

    let ids: Vec<_> = g.all_nodes().iter().map(|node| node.id()).collect();

    for u in 0..n {
        for v in 0..n {
            if u != v && position[u] < position[v] && rng.r#gen::<f64>() < p {
                g.add_edge(ids[u], ids[v]);
            }
        }
    }

    debug!(nodes = n, p, edges = g.edge_count(), "generated random DAG");
    g
}

/// Deterministic RNG for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolve a user-facing seed: `0` means "pick one from the clock".
///
/// The resolved value is returned so callers can log it and reproduce a run.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    nanos.max(1)
}
