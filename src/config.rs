//! Traversal request configuration.

use crate::error::{GraphError, Result};
use crate::models::TraversalKind;

/// Node count used when none is given.
pub const DEFAULT_NODE_COUNT: usize = 5;

/// Start node used when none is given.
pub const DEFAULT_START_NODE: usize = 0;

/// The inputs a collaborator supplies for one generate-and-traverse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    pub node_count: usize,
    pub start_node: usize,
    pub kind: TraversalKind,
    /// Seed for graph generation; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            start_node: DEFAULT_START_NODE,
            kind: TraversalKind::default(),
            seed: None,
        }
    }
}

impl TraversalConfig {
    pub fn new(kind: TraversalKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    pub fn with_start_node(mut self, start_node: usize) -> Self {
        self.start_node = start_node;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations that cannot produce a graph.
    pub fn validate(&self) -> Result<()> {
        if self.node_count < 1 {
            return Err(GraphError::InvalidNodeCount(self.node_count));
        }
        Ok(())
    }
}
