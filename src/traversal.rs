use crate::models::{Graph, TraversalKind, TraversalOutcome};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Stack-based depth-first traversal from `start`.
///
/// Returns an empty sequence when `start` is not a key of `graph`. Neighbors
/// are pushed in list order, so the last neighbor listed is visited first.
/// A node may sit on the stack several times; it is recorded only on its
/// first pop.
pub fn dfs(start: usize, graph: &Graph) -> Vec<usize> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited.insert(node) {
            order.push(node);
            stack.extend_from_slice(graph.neighbors(node));
        }
    }

    order
}

/// Queue-based breadth-first traversal from `start`.
///
/// Returns an empty sequence when `start` is not a key of `graph`.
pub fn bfs(start: usize, graph: &Graph) -> Vec<usize> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        if visited.insert(node) {
            order.push(node);
            queue.extend(graph.neighbors(node).iter().copied());
        }
    }

    order
}

/// Run the traversal selected by `kind`, distinguishing an absent start node
/// from a visited sequence.
pub fn traverse(kind: TraversalKind, start: usize, graph: &Graph) -> TraversalOutcome {
    if !graph.contains(start) {
        debug!(%kind, start, "start node not in graph");
        return TraversalOutcome::StartNotFound { start };
    }

    let order = match kind {
        TraversalKind::Dfs => dfs(start, graph),
        TraversalKind::Bfs => bfs(start, graph),
    };
    debug!(%kind, start, visited = order.len(), "traversal complete");

    TraversalOutcome::Visited { order }
}
