//! Log summary service
//!
//! `summarize_log` reads the whole event log, computes [`LogStats`], and
//! asks the summarization client for a narrative. The outcomes are:
//! - log never created: `Err` with [`Error::is_not_found`] set
//! - header only: [`LogSummary::Empty`], no provider call
//! - provider succeeded: [`Narrative::Generated`]
//! - provider failed: [`Narrative::Fallback`] built from the aggregates

use crate::error::Result;
use crate::prompt::build_prompt;
use crate::stats::LogStats;
use hitlog_llm::SummarizationClient;
use hitlog_store::EventLog;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Summary behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Leave the `"unknown"` placeholder out of distinct counts
    pub exclude_unknown: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            exclude_unknown: true,
        }
    }
}

/// Narrative part of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Narrative {
    /// Provider text, verbatim
    Generated {
        /// Generated summary
        text: String,
    },
    /// Provider failed; templated sentence from the aggregates
    Fallback {
        /// Provider failure cause
        error: String,
        /// Templated summary
        text: String,
    },
}

impl Narrative {
    /// Summary text regardless of origin
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Narrative::Generated { text } | Narrative::Fallback { text, .. } => text,
        }
    }

    /// Whether the provider failed
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Narrative::Fallback { .. })
    }
}

/// Aggregates plus narrative for a non-empty log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Aggregate statistics
    #[serde(flatten)]
    pub stats: LogStats,
    /// Narrative summary
    pub narrative: Narrative,
}

/// Result of summarizing an existing log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LogSummary {
    /// Log exists but holds no data rows
    Empty,
    /// Log has data
    Report(SummaryReport),
}

/// Reads the event log and produces summaries
#[derive(Clone)]
pub struct LogSummaryService {
    log: EventLog,
    client: SummarizationClient,
    options: SummaryOptions,
}

impl LogSummaryService {
    /// Create a service over a log and a summarization client
    #[must_use]
    pub fn new(log: EventLog, client: SummarizationClient) -> Self {
        Self {
            log,
            client,
            options: SummaryOptions::default(),
        }
    }

    /// Override the summary options
    #[must_use]
    pub fn with_options(mut self, options: SummaryOptions) -> Self {
        self.options = options;
        self
    }

    /// The event log this service reads
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Summarize the current log contents
    #[instrument(skip(self), fields(path = %self.log.path().display()))]
    pub async fn summarize_log(&self) -> Result<LogSummary> {
        let records = self.log.read_all().await?;

        let Some(stats) = LogStats::compute(&records, self.options.exclude_unknown) else {
            info!("Event log is empty, nothing to summarize");
            return Ok(LogSummary::Empty);
        };

        let prompt = build_prompt(&records)?;

        let narrative = match self.client.summarize(&prompt).await {
            Ok(text) => Narrative::Generated { text },
            Err(e) => {
                warn!(
                    error = %e,
                    provider = %self.client.provider_name(),
                    "Summary generation failed, using fallback"
                );
                Narrative::Fallback {
                    error: e.to_string(),
                    text: stats.fallback_sentence(),
                }
            }
        };

        info!(
            rows = stats.total_rows,
            fallback = narrative.is_fallback(),
            "Log summarized"
        );

        Ok(LogSummary::Report(SummaryReport { stats, narrative }))
    }
}
