//! Event log API endpoints
//!
//! GET|POST /file-append - Record the calling request and return the whole log
//! GET /file-summary - Aggregate the log and summarize it with the provider

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::ConnectInfo,
    http::{header, HeaderMap},
    routing::get,
    Extension, Json, Router,
};
use hitlog_core::{DateRange, LogSummary, LogSummaryService, Narrative};
use hitlog_store::{EventLog, LogRecord};
use serde::Serialize;
use tracing::{debug, instrument};

use super::error::ApiError;

/// Response for a successful append
#[derive(Debug, Serialize)]
pub struct AppendResponse {
    pub message: &'static str,
    pub rows_added: usize,
    pub total_rows: usize,
    pub data: Vec<LogRecord>,
}

/// Response shapes for the summary endpoint
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    /// Provider produced a narrative
    Generated {
        message: &'static str,
        total_rows: usize,
        unique_ips: usize,
        unique_agents: usize,
        date_range: DateRange,
        writer_summary: String,
    },
    /// Provider failed; statistics sentence instead
    Fallback {
        message: &'static str,
        error: String,
        fallback_summary: String,
    },
    /// Log has a header but no rows
    Empty {
        message: &'static str,
        summary: &'static str,
    },
}

impl From<LogSummary> for SummaryResponse {
    fn from(summary: LogSummary) -> Self {
        let report = match summary {
            LogSummary::Empty => {
                return SummaryResponse::Empty {
                    message: "CSV file is empty",
                    summary: "No data to summarize",
                }
            }
            LogSummary::Report(report) => report,
        };

        match report.narrative {
            Narrative::Generated { text } => SummaryResponse::Generated {
                message: "Summary generated successfully",
                total_rows: report.stats.total_rows,
                unique_ips: report.stats.unique_client_count,
                unique_agents: report.stats.unique_agent_count,
                date_range: report.stats.date_range,
                writer_summary: text,
            },
            Narrative::Fallback { error, text } => SummaryResponse::Fallback {
                message: "Error generating summary with Writer",
                error,
                fallback_summary: text,
            },
        }
    }
}

/// Build the record for this request from its connection and headers
fn capture_record(remote: Option<SocketAddr>, headers: &HeaderMap) -> LogRecord {
    let client_id = remote.map(|addr| addr.ip().to_string());
    let agent = headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    LogRecord::capture(client_id, agent)
}

/// Record the calling request and return the log contents
#[instrument(skip_all)]
pub async fn file_append(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Extension(log): Extension<EventLog>,
) -> Result<Json<AppendResponse>, ApiError> {
    let record = capture_record(connect_info.map(|ConnectInfo(addr)| addr), &headers);
    debug!(client = %record.client_id, "Appending request to event log");

    let data = log.append_and_read(record).await?;

    Ok(Json(AppendResponse {
        message: "Data appended successfully",
        rows_added: 1,
        total_rows: data.len(),
        data,
    }))
}

/// Summarize the log contents
#[instrument(skip_all)]
pub async fn file_summary(
    Extension(service): Extension<Arc<LogSummaryService>>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = service.summarize_log().await?;
    Ok(Json(summary.into()))
}

/// Create event log routes
pub fn events_routes() -> Router {
    Router::new()
        .route("/file-append", get(file_append).post(file_append))
        .route("/file-summary", get(file_summary))
}
