//! CLI entry point for the Kinship family tree API.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kinship_core::KinshipConfig;
use kinship_graph::{FamilyStore, GraphClient, GraphConfig, MemoryStore};

#[derive(Parser)]
#[command(name = "kinship-server")]
#[command(about = "HTTP API for browsing and editing a family tree stored in Neo4j")]
struct Cli {
    /// Config file prefix (default: kinship).
    #[arg(short, long, default_value = "kinship")]
    config: String,

    /// Listen address, overriding server.host and server.port.
    #[arg(short, long)]
    bind: Option<String>,

    /// Serve from an in-process store instead of Neo4j (development only).
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let config = KinshipConfig::load(&cli.config)?;

    let store: Arc<dyn FamilyStore> = if cli.in_memory {
        tracing::warn!("Using in-memory store, data is lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let graph_config = GraphConfig::from(config.neo4j.clone());
        Arc::new(GraphClient::connect(&graph_config).await?)
    };

    let bind_addr = cli
        .bind
        .clone()
        .unwrap_or_else(|| config.server.bind_addr());

    kinship_server::server::serve(&bind_addr, &config.server.cors_origins, store).await
}
