//! HTTP and CLI front end for the viaplan route planner.
//!
//! Builds the route graph once at startup (one provider lookup per ordered
//! pair of configured places, memoized for the session) and then answers
//! shortest-path queries over it.

mod api;
mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use viaplan_core::prelude::*;

use crate::api::AppState;
use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "viaplan-server",
    version,
    about = "Shortest driving routes between a fixed set of places"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the route graph and serve the HTTP API
    Serve,
    /// Resolve a single route and print it
    Route {
        /// Start place name
        from: String,
        /// End place name
        to: String,
        /// Edge attribute to minimize
        #[arg(long, default_value = "distance")]
        metric: Metric,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    let provider = config.planner.provider.clone();
    let api_key = std::env::var(&provider.api_key_env)
        .map_err(|_| format!("environment variable '{}' is not set", provider.api_key_env))?;

    let places = config.planner.places();
    info!("building route graph over {} places", places.len());
    let graph = tokio::task::spawn_blocking(
        move || -> Result<RouteGraph, viaplan_core::Error> {
            let client =
                DistanceMatrixClient::new(api_key, provider.base_url.as_str(), provider.timeout())?;
            let oracle = CachedOracle::new(client);
            build_route_graph(&oracle, &places)
        },
    )
    .await??;
    info!(
        "route graph ready: {} places, {} legs",
        graph.node_count(),
        graph.edge_count()
    );

    match cli.command {
        Command::Serve => serve(graph, config.server.listen).await?,
        Command::Route { from, to, metric } => print_route(&graph, &from, &to, metric),
    }

    Ok(())
}

async fn serve(graph: RouteGraph, listen: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState { graph });
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

fn print_route(graph: &RouteGraph, from: &str, to: &str, metric: Metric) {
    match shortest_path(graph, from, to, metric) {
        Ok(path) => {
            println!(
                "Shortest path from {from} to {to}: {}",
                path.places.join(" -> ")
            );
            println!("Total {metric}: {:.2} {}", path.total, metric.unit());
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
