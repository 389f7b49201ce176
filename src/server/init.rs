//! Server initialization and main run loop
//!
//! Contains the main `run()` function that starts the HTTP server.

use super::config::{AppConfig, ServerConfig, StreamConfig};
use super::loader::load_config;
use super::validation::validate_config;
use crate::api::StreamSettings;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{Extension, Router};
use hitlog_core::LogSummaryService;
use hitlog_llm::{CompletionProvider, SummarizationClient, WriterProvider};
use hitlog_store::EventLog;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Run the server
pub async fn run() -> Result<()> {
    info!("Starting Hitlog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load configuration")?;
    info!("Configuration loaded");

    validate_config(&config)?;

    let summaries = build_summary_service(&config)?;
    info!("Event log: {}", summaries.log().path().display());

    let app = build_app(&config, summaries)?;

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .context("Failed to bind to address")?;

    let addr = listener.local_addr().context("Failed to read bound address")?;
    info!("HTTP server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")?;

    info!("Hitlog shutdown complete");
    Ok(())
}

/// Wire the event log, the Writer provider and the summary service
pub fn build_summary_service(config: &AppConfig) -> Result<LogSummaryService> {
    let log = EventLog::new(config.log.path.clone());

    let provider: Arc<dyn CompletionProvider> = Arc::new(
        WriterProvider::new(config.provider.writer_config())
            .context("Failed to create completion provider")?,
    );
    let client = SummarizationClient::new(provider).with_model(&config.provider.model);

    Ok(LogSummaryService::new(log, client).with_options(config.summary.options()))
}

/// Assemble the router with shared state and layers
pub fn build_app(config: &AppConfig, summaries: LogSummaryService) -> Result<Router> {
    let cors = cors_layer(&config.server)?;

    Ok(crate::api::api_router()
        .layer(Extension(summaries.log().clone()))
        .layer(Extension(Arc::new(summaries)))
        .layer(Extension(stream_settings(&config.stream)))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn stream_settings(config: &StreamConfig) -> StreamSettings {
    StreamSettings {
        interval: Duration::from_secs(config.interval_secs),
        duration: Duration::from_secs(config.duration_secs),
    }
}

/// CORS with credentials; methods and headers mirror the request
fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let origin = if config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Invalid CORS origin")?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
