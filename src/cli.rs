use crate::config::{DEFAULT_NODE_COUNT, DEFAULT_START_NODE};
use crate::models::TraversalKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gt")]
#[command(about = "Random directed graph generator with DFS/BFS traversal")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random directed graph and print it
    Generate {
        /// Number of nodes
        #[arg(long, short, default_value_t = DEFAULT_NODE_COUNT)]
        nodes: usize,
        /// Seed for the random generator
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Traverse a graph from a start node
    Traverse {
        /// Traversal strategy
        #[arg(value_enum)]
        kind: TraversalKind,
        /// Start node
        #[arg(long, short, default_value_t = DEFAULT_START_NODE)]
        start: usize,
        /// Number of nodes in the generated graph
        #[arg(long, short, default_value_t = DEFAULT_NODE_COUNT)]
        nodes: usize,
        /// Seed for the random generator
        #[arg(long)]
        seed: Option<u64>,
        /// Read the graph from a JSON file instead of generating one
        #[arg(long, conflicts_with_all = ["nodes", "seed"])]
        graph: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start MCP server
    Mcp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_traverse() {
        let cli = Cli::try_parse_from(["gt", "traverse", "bfs", "--start", "3", "--seed", "8"]).unwrap();
        match cli.command {
            Commands::Traverse {
                kind,
                start,
                nodes,
                seed,
                graph,
                json,
            } => {
                assert_eq!(kind, TraversalKind::Bfs);
                assert_eq!(start, 3);
                assert_eq!(nodes, DEFAULT_NODE_COUNT);
                assert_eq!(seed, Some(8));
                assert!(graph.is_none());
                assert!(!json);
            }
            _ => panic!("expected traverse"),
        }
    }

    #[test]
    fn test_graph_conflicts_with_nodes() {
        let result = Cli::try_parse_from(["gt", "traverse", "dfs", "--graph", "g.json", "--nodes", "4"]);
        assert!(result.is_err());
    }
}
