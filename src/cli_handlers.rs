use crate::config::TraversalConfig;
use crate::core::GraphSession;
use crate::error::GraphError;
use crate::models::{Graph, TraversalOutcome};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Render a graph one node per line as `id: n1, n2`, keys ascending
pub fn render_graph(graph: &Graph) -> String {
    graph
        .iter()
        .map(|(node, neighbors)| {
            let joined = neighbors
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{node}: {joined}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a traversal outcome the way the result banner reads
pub fn render_outcome(outcome: &TraversalOutcome) -> String {
    match outcome {
        TraversalOutcome::Visited { order } => {
            let path = order
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            format!("Traversal Result: {path}")
        }
        TraversalOutcome::StartNotFound { start } => {
            format!("Node {start} does not exist in the graph!")
        }
    }
}

fn print_graph(graph: &Graph) {
    println!("Generated Graph:");
    for line in render_graph(graph).lines() {
        println!("  {line}");
    }
}

/// Load a graph from a JSON file of the form `{"0": [1, 2], ...}`
pub fn read_graph_file(path: &Path) -> Result<Graph, GraphError> {
    let contents = fs::read_to_string(path)?;
    let graph: Graph = serde_json::from_str(&contents).inspect_err(|e| {
        warn!(path = %path.display(), "rejected graph file: {e}");
    })?;
    Ok(graph)
}

/// Handle the generate command
pub fn handle_generate(node_count: usize, seed: Option<u64>, json: bool) -> Result<(), GraphError> {
    let mut session = GraphSession::new();
    session.regenerate(node_count, seed)?;
    let graph = session.graph();

    if json {
        let output = serde_json::json!({
            "seed": session.seed(),
            "graph": graph,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(seed) = session.seed() {
        println!(
            "Generated {} nodes, {} edges (seed {seed})",
            graph.node_count(),
            graph.edge_count(),
        );
    }
    print_graph(graph);

    Ok(())
}

/// Handle the traverse command
pub fn handle_traverse(
    config: &TraversalConfig,
    graph_file: Option<&Path>,
    json: bool,
) -> Result<(), GraphError> {
    let mut session = GraphSession::new();

    match graph_file {
        Some(path) => session.load(read_graph_file(path)?),
        None => {
            config.validate()?;
            session.regenerate(config.node_count, config.seed)?;
        }
    }

    let outcome = session.traverse(config.kind, config.start_node);

    if json {
        let mut output = serde_json::json!({
            "kind": config.kind,
            "start": config.start_node,
            "graph": session.graph(),
            "result": outcome,
        });
        if let Some(seed) = session.seed() {
            output["seed"] = serde_json::json!(seed);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} Traversal", config.kind);
    if let Some(seed) = session.seed() {
        println!("Seed: {seed}");
    }
    print_graph(session.graph());
    println!();
    println!("Start Node: {}", config.start_node);
    println!("{}", render_outcome(&outcome));

    Ok(())
}
