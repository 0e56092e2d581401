//! Testwright MCP server
//!
//! Stdio MCP server exposing the guided test-authoring catalog: workflow
//! steps as tools and prompts, reference documents alongside them, and a
//! built-in health check.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use testwright_catalog::{Catalog, CapabilityService, CatalogPrompts, CatalogTools, ContentStore};
use testwright_mcp::{CompositeRegistry, HealthTools, TestwrightMcpServer};
use tracing_subscriber::EnvFilter;

const SERVER_NAME: &str = "testwright";

const INSTRUCTIONS: &str = "Guided end-to-end test authoring. Invoke the workflow \
steps in order, starting with analyze-app; consult the reference-* documents as \
needed along the way.";

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the MCP transport, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin();
    let store = ContentStore::discover();
    tracing::info!(
        capabilities = catalog.len(),
        roots = ?store.roots(),
        "loaded builtin catalog"
    );

    let service = CapabilityService::shared(catalog, store);
    let capability_count = service.catalog().len();

    let registry = CompositeRegistry::new()
        .add(CatalogTools::new(service.clone()))
        .add(HealthTools::new(
            SERVER_NAME,
            env!("CARGO_PKG_VERSION"),
            capability_count + 1,
        ));

    TestwrightMcpServer::new(registry)
        .with_name(SERVER_NAME)
        .with_instructions(INSTRUCTIONS)
        .with_prompts(CatalogPrompts::new(service))
        .serve_stdio()
        .await?;

    Ok(())
}
