//! Advocate Search - Main entry point
//!
//! Runs the advocate directory as a Model Context Protocol (MCP) server over
//! stdio.

use advocate_search::repositories::{AdvocateRepository, SqliteAdvocateRepository};
use advocate_search::services::{SearchService, SearchServiceImpl};
use advocate_search::{AdvocateSearchServer, Config, SearchMetrics};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr only; stdout carries MCP traffic
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting Advocate Search with store {} (backend: {})",
        config.db_path, config.search_backend
    );

    let repository =
        Arc::new(SqliteAdvocateRepository::open(&config.db_path)?) as Arc<dyn AdvocateRepository>;

    let metrics = SearchMetrics::new();
    let service = Arc::new(SearchServiceImpl::new(
        repository,
        config.search_backend,
        metrics.clone(),
    )) as Arc<dyn SearchService>;

    if config.seed_on_start {
        let inserted = service.seed_if_empty().await?;
        info!("Startup seeding inserted {} advocates", inserted);
    }

    let server = AdvocateSearchServer::new(service);

    info!("Starting MCP server with stdio transport");
    advocate_search::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("Advocate Search shutdown complete");
    Ok(())
}
