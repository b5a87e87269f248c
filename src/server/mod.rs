//! MCP server for the advocate directory.
//!
//! Exposes search, seeding and highlighting as Model Context Protocol tools
//! over stdio.

pub mod handlers;

pub use handlers::AdvocateSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: AdvocateSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
