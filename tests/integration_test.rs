//! Integration tests for Hitlog
//!
//! These tests verify the integration between the workspace crates:
//! - hitlog-store: event log append and read-back
//! - hitlog-llm: summarization client over an injected provider
//! - hitlog-core: aggregate statistics and fallback narrative

use std::sync::Arc;

use hitlog_core::{LogSummary, LogSummaryService, Narrative};
use hitlog_llm::{
    CompletionProvider, CompletionRequest, CompletionResponse, Error as LlmError, MockProvider,
    SummarizationClient,
};
use hitlog_store::{EventLog, LogRecord, UNKNOWN};

// ============================================================================
// Helpers
// ============================================================================

/// Provider that always fails, as when the network is down
struct OfflineProvider;

#[async_trait::async_trait]
impl CompletionProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    fn default_model(&self) -> &str {
        "none"
    }

    async fn complete(&self, _request: CompletionRequest) -> hitlog_llm::Result<CompletionResponse> {
        Err(LlmError::Network("network unreachable".to_string()))
    }
}

fn service(log: &EventLog, provider: Arc<dyn CompletionProvider>) -> LogSummaryService {
    LogSummaryService::new(log.clone(), SummarizationClient::new(provider))
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[tokio::test]
async fn test_append_then_summarize_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let log = EventLog::new(dir.path().join("data.csv"));
    let mock = MockProvider::new();
    mock.push_text("Three hits from two clients.");

    let agents = ["curl/8.0", UNKNOWN, "Mozilla/5.0 (X11; Linux x86_64), \"Gecko\""];
    for (i, agent) in agents.iter().enumerate() {
        let ip = if i == 1 { "10.0.0.2" } else { "10.0.0.1" };
        log.append(LogRecord::new(format!("2025-05-0{}T09:00:00.000000", i + 1), ip, *agent))
            .await
            .unwrap();
    }

    let summary = service(&log, Arc::new(mock.clone())).summarize_log().await.unwrap();
    let LogSummary::Report(report) = summary else {
        panic!("expected a report");
    };

    assert_eq!(report.stats.total_rows, 3);
    assert_eq!(report.stats.unique_client_count, 2);
    assert_eq!(report.stats.unique_agent_count, 2);
    assert_eq!(report.stats.date_range.start, "2025-05-01T09:00:00.000000");
    assert_eq!(report.stats.date_range.end, "2025-05-03T09:00:00.000000");
    assert_eq!(report.narrative.text(), "Three hits from two clients.");

    // The prompt carries every raw record, including the escaped agent
    let prompt = &mock.prompts()[0];
    assert!(prompt.contains(r#"Mozilla/5.0 (X11; Linux x86_64), \"Gecko\""#));
}

#[tokio::test]
async fn test_offline_provider_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let log = EventLog::new(dir.path().join("data.csv"));
    log.append(LogRecord::new("2025-05-01T09:00:00.000000", UNKNOWN, UNKNOWN))
        .await
        .unwrap();

    let summary = service(&log, Arc::new(OfflineProvider)).summarize_log().await.unwrap();
    let LogSummary::Report(report) = summary else {
        panic!("expected a report");
    };

    assert_eq!(report.stats.unique_client_count, 0);
    assert_eq!(report.stats.unique_agent_count, 0);
    match report.narrative {
        Narrative::Fallback { error, text } => {
            assert_eq!(error, "network error: network unreachable");
            assert!(text.starts_with("The log contains 1 entries from 0 unique IP addresses"));
        }
        Narrative::Generated { .. } => panic!("expected fallback"),
    }
}

#[tokio::test]
async fn test_summary_before_first_append_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let log = EventLog::new(dir.path().join("data.csv"));
    let mock = MockProvider::new();

    let err = service(&log, Arc::new(mock.clone())).summarize_log().await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(mock.call_count(), 0);

    log.append(LogRecord::capture(None, None)).await.unwrap();
    assert!(service(&log, Arc::new(mock)).summarize_log().await.is_ok());
}
