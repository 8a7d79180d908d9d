use crate::error::Result;
use crate::generator::GraphGenerator;
use crate::models::{Graph, TraversalKind, TraversalOutcome};
use crate::traversal;
use tracing::info;

/// Graph state held on behalf of one collaborator.
///
/// Starts with an empty graph. Each regeneration replaces the graph
/// wholesale and records the seed it was generated from, so
/// `regenerate(n, Some(seed()))` always reproduces the current graph.
#[derive(Debug, Default)]
pub struct GraphSession {
    seed: Option<u64>,
    graph: Graph,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed of the current graph; `None` when it was loaded or nothing has
    /// been generated yet
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Replace the current graph with a freshly generated one, drawing a
    /// random seed when none is given. On error the previous graph and seed
    /// are kept.
    pub fn regenerate(&mut self, node_count: usize, seed: Option<u64>) -> Result<&Graph> {
        let seed = seed.unwrap_or_else(rand::random);
        let graph = GraphGenerator::seeded(seed).generate(node_count)?;
        info!(node_count, seed, edges = graph.edge_count(), "graph regenerated");
        self.seed = Some(seed);
        self.graph = graph;
        Ok(&self.graph)
    }

    /// Replace the current graph with a caller-supplied one
    pub fn load(&mut self, graph: Graph) {
        info!(nodes = graph.node_count(), "graph loaded");
        self.seed = None;
        self.graph = graph;
    }

    pub fn traverse(&self, kind: TraversalKind, start: usize) -> TraversalOutcome {
        traversal::traverse(kind, start, &self.graph)
    }
}
