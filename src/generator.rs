use crate::error::{GraphError, Result};
use crate::models::Graph;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Random directed graph generator over an injected random source
#[derive(Debug, Clone)]
pub struct GraphGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl GraphGenerator<ChaCha8Rng> {
    /// Create a generator whose output is fully determined by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GraphGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a graph with `node_count` nodes.
    ///
    /// Every node in `[0, node_count)` is present as a key. Each node gets
    /// between 1 and `max(1, node_count / 2)` distinct outgoing edges, capped
    /// at `node_count - 1` so a single-node graph has none. Neighbors are
    /// stored in the order they were drawn.
    pub fn generate(&mut self, node_count: usize) -> Result<Graph> {
        if node_count < 1 {
            return Err(GraphError::InvalidNodeCount(node_count));
        }

        let max_edges = (node_count / 2).max(1);
        let mut adjacency = BTreeMap::new();

        for node in 0..node_count {
            let desired = self.rng.gen_range(1..=max_edges);
            let edge_count = desired.min(node_count - 1);
            let neighbors = self.sample_neighbors(node, node_count, edge_count);
            adjacency.insert(node, neighbors);
        }

        let graph = Graph::from_generated(adjacency);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "generated random graph"
        );
        Ok(graph)
    }

    /// Draw `edge_count` distinct neighbors of `node`, excluding `node` itself.
    /// Callers guarantee `edge_count < node_count`.
    fn sample_neighbors(&mut self, node: usize, node_count: usize, edge_count: usize) -> Vec<usize> {
        let mut chosen = HashSet::with_capacity(edge_count);
        let mut neighbors = Vec::with_capacity(edge_count);

        while neighbors.len() < edge_count {
            let candidate = self.rng.gen_range(0..node_count);
            if candidate != node && chosen.insert(candidate) {
                neighbors.push(candidate);
            }
        }

        neighbors
    }
}
