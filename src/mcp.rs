use crate::cli_handlers::render_graph;
use crate::core::GraphSession;
use crate::error::GraphError;
use crate::models::TraversalKind;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Graph traversal MCP server
#[derive(Clone)]
pub struct GraphTraverseMcp {
    session: Arc<Mutex<GraphSession>>,
    tool_router: ToolRouter<Self>,
}

// Input types for tools
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GenerateGraphInput {
    pub node_count: usize,
    /// Seed for a reproducible graph; a random one is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TraverseInput {
    /// "dfs" or "bfs"
    pub kind: String,
    pub start: usize,
}

// Response type
#[derive(Debug, Serialize)]
pub struct McpResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> McpResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "ok",
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: &str, message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            error_code: Some(error_code.to_string()),
            message: Some(message.to_string()),
        }
    }
}

fn to_json<T: Serialize>(response: McpResponse<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&response)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn error_code(e: &GraphError) -> &'static str {
    match e {
        GraphError::InvalidNodeCount(_) => "invalid_node_count",
        GraphError::SelfLoop(_)
        | GraphError::DuplicateEdge { .. }
        | GraphError::DuplicateNode(_) => "invalid_graph",
        GraphError::InvalidKind(_) => "invalid_kind",
        GraphError::Io(_) => "io",
        GraphError::Json(_) => "json",
    }
}

fn error_to_response(e: GraphError) -> McpResponse<serde_json::Value> {
    McpResponse::error(error_code(&e), &e.to_string())
}

#[tool_router]
impl GraphTraverseMcp {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(GraphSession::new())),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Generate a random directed graph with node_count nodes, replacing the current graph. Each node gets between 1 and node_count/2 distinct outgoing edges and no self-loops. The returned seed reproduces the graph; pass it back as seed to regenerate the same graph."
    )]
    async fn generate_graph(
        &self,
        params: Parameters<GenerateGraphInput>,
    ) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let p = params.0;

        if let Err(e) = session.regenerate(p.node_count, p.seed) {
            return to_json(error_to_response(e));
        }

        let graph = session.graph();
        let data = serde_json::json!({
            "graph": graph,
            "rendered": render_graph(graph),
        });
        to_json(McpResponse::success(with_seed(data, session.seed())))
    }

    #[tool(description = "Get the current graph as a mapping from node id to its neighbor list.")]
    async fn get_graph(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let graph = session.graph();

        let data = serde_json::json!({
            "graph": graph,
            "rendered": render_graph(graph),
        });
        to_json(McpResponse::success(with_seed(data, session.seed())))
    }

    #[tool(
        description = "Traverse the current graph from start using kind \"dfs\" or \"bfs\". Returns status \"visited\" with the visit order, or \"start_not_found\" when start is not a node of the graph."
    )]
    async fn traverse(&self, params: Parameters<TraverseInput>) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let p = params.0;

        let kind = match p.kind.parse::<TraversalKind>() {
            Ok(kind) => kind,
            Err(e) => return to_json(error_to_response(e)),
        };

        let outcome = session.traverse(kind, p.start);
        to_json(McpResponse::success(outcome))
    }
}

impl Default for GraphTraverseMcp {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the graph's seed to a response payload when it has one
fn with_seed(mut data: serde_json::Value, seed: Option<u64>) -> serde_json::Value {
    if let Some(seed) = seed {
        data["seed"] = serde_json::json!(seed);
    }
    data
}

#[tool_handler]
impl ServerHandler for GraphTraverseMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Graph Traverse - generate random directed graphs and walk them. \
                 Key workflow: 1) Call generate_graph with a node count, 2) Inspect it with get_graph, \
                 3) Call traverse with kind dfs or bfs and a start node. Regenerating replaces the graph."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_mcp_server() -> anyhow::Result<()> {
    let mcp = GraphTraverseMcp::new();
    info!("starting MCP server on stdio");

    let service = mcp.serve(stdio()).await.inspect_err(|e| {
        eprintln!("Error starting MCP server: {e}");
    })?;

    service.waiting().await?;
    Ok(())
}
