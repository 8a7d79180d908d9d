use crate::error::{GraphError, Result};
use clap::ValueEnum;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Adjacency list keyed by node id
type Adjacency = BTreeMap<usize, Vec<usize>>;

/// A directed graph as a mapping from node id to its outgoing neighbors.
///
/// Keys iterate in ascending order. A node that is absent from the mapping
/// and a node with an empty neighbor list are equivalent: neither has
/// outgoing edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Adjacency")]
pub struct Graph {
    adjacency: Adjacency,
}

impl Graph {
    /// Build a graph from caller-supplied adjacency lists.
    ///
    /// Rejects a node listed twice, self-loops, and neighbors listed twice
    /// for the same node.
    pub fn from_adjacency<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, Vec<usize>)>,
    {
        let mut adjacency = Adjacency::new();
        for (node, neighbors) in entries {
            match adjacency.entry(node) {
                Entry::Vacant(slot) => {
                    slot.insert(neighbors);
                }
                Entry::Occupied(_) => return Err(GraphError::DuplicateNode(node)),
            }
        }

        for (&node, neighbors) in &adjacency {
            let mut seen = HashSet::with_capacity(neighbors.len());
            for &neighbor in neighbors {
                if neighbor == node {
                    return Err(GraphError::SelfLoop(node));
                }
                if !seen.insert(neighbor) {
                    return Err(GraphError::DuplicateEdge { node, neighbor });
                }
            }
        }

        Ok(Graph { adjacency })
    }

    /// Wrap adjacency lists the generator already guarantees are valid
    pub(crate) fn from_generated(adjacency: Adjacency) -> Self {
        Graph { adjacency }
    }

    /// Number of nodes present as keys
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `node` is a key of the graph
    pub fn contains(&self, node: usize) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Outgoing neighbors of `node`, empty when the node has none or is absent
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    /// `(node, neighbors)` pairs in ascending node order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.adjacency
            .iter()
            .map(|(&node, neighbors)| (node, neighbors.as_slice()))
    }
}

// Repeated keys must reach `from_adjacency`, which rejects them.
impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GraphVisitor;

        impl<'de> Visitor<'de> for GraphVisitor {
            type Value = Graph;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from node id to a list of neighbor ids")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Graph, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<usize, Vec<usize>>()? {
                    entries.push(entry);
                }
                Graph::from_adjacency(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(GraphVisitor)
    }
}

impl From<Graph> for Adjacency {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Depth-first, stack based
    #[default]
    Dfs,
    /// Breadth-first, queue based
    Bfs,
}

impl TraversalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::Dfs => "DFS",
            TraversalKind::Bfs => "BFS",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TraversalKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(TraversalKind::Dfs),
            "bfs" => Ok(TraversalKind::Bfs),
            _ => Err(GraphError::InvalidKind(s.to_string())),
        }
    }
}

/// Outcome of a traversal request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TraversalOutcome {
    /// Nodes in visitation order, starting with the start node
    Visited { order: Vec<usize> },
    /// The start node is not a key of the graph
    StartNotFound { start: usize },
}

impl TraversalOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, TraversalOutcome::Visited { .. })
    }

    pub fn order(&self) -> Option<&[usize]> {
        match self {
            TraversalOutcome::Visited { order } => Some(order),
            TraversalOutcome::StartNotFound { .. } => None,
        }
    }

    /// Collapse to the plain sequence form, where an absent start is empty
    pub fn into_sequence(self) -> Vec<usize> {
        match self {
            TraversalOutcome::Visited { order } => order,
            TraversalOutcome::StartNotFound { .. } => Vec::new(),
        }
    }
}
