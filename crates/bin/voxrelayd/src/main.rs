//! # voxrelayd — voice relay daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + environment overrides) and validate it
//! - Initialize the `tracing` subscriber
//! - Construct the backend client and the model interpreter (adapters)
//! - Assemble the relay pipeline, injecting adapters via port traits
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use voxrelay_adapter_backend_reqwest::HttpBackend;
use voxrelay_adapter_gemini::GeminiInterpreter;
use voxrelay_adapter_http_axum::state::AppState;
use voxrelay_app::services::dispatch_service::DispatchService;
use voxrelay_app::services::relay_service::RelayService;
use voxrelay_app::services::resolver_service::ResolverService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("configuration is invalid")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Adapters
    let backend = HttpBackend::new(&config.backend)?;
    let interpreter = GeminiInterpreter::new(config.gemini.clone())?;

    // Pipeline: one backend client serves as snapshot source, resolver
    // source and command gateway.
    let pipeline = RelayService::new(
        backend.clone(),
        interpreter,
        ResolverService::new(backend.clone()),
        DispatchService::new(backend),
    );

    // HTTP
    let state = AppState::new(pipeline);
    let app = voxrelay_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, backend = %config.backend.base_url, "voxrelayd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received, draining connections");
}
