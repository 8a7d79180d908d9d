pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod mcp;
pub mod models;
pub mod traversal;

pub use config::TraversalConfig;
pub use error::{GraphError, Result};
pub use generator::GraphGenerator;
pub use models::*;
pub use traversal::{bfs, dfs, traverse};
