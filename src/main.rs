use clap::Parser;
use graph_traverse::TraversalConfig;
use graph_traverse::cli::{Cli, Commands};
use graph_traverse::cli_handlers;
use graph_traverse::mcp::run_mcp_server;
use std::process;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for output and the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { nodes, seed, json } => cli_handlers::handle_generate(nodes, seed, json),
        Commands::Traverse {
            kind,
            start,
            nodes,
            seed,
            graph,
            json,
        } => {
            let config = TraversalConfig::new(kind)
                .with_node_count(nodes)
                .with_start_node(start)
                .with_seed(seed);
            cli_handlers::handle_traverse(&config, graph.as_deref(), json)
        }
        Commands::Mcp => {
            if let Err(e) = run_mcp_server().await {
                eprintln!("MCP server error: {e}");
                process::exit(1);
            }
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
