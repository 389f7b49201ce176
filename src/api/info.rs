//! Service information endpoint

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::collections::BTreeMap;

/// Response for `GET /`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

fn service_info() -> InfoResponse {
    InfoResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: "Request logging with AI-generated log summaries",
        endpoints: BTreeMap::from([
            ("/", "API information"),
            ("/health", "Health check"),
            ("/file-append", "Record this request and return the log (GET or POST)"),
            ("/file-summary", "Summarize the request log"),
            ("/stream", "Current time as server-sent events"),
        ]),
    }
}

async fn get_info() -> Json<InfoResponse> {
    Json(service_info())
}

/// Create info routes
pub fn info_routes() -> Router {
    Router::new().route("/", get(get_info))
}
