//! Aggregate statistics over the event log

use hitlog_store::LogRecord;
use serde::Serialize;
use std::collections::HashSet;

/// First and last capture time, by file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// Timestamp of the first record
    pub start: String,
    /// Timestamp of the last record
    pub end: String,
}

/// Counts and range computed from a non-empty log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogStats {
    /// Number of data rows
    pub total_rows: usize,
    /// Distinct client addresses
    pub unique_client_count: usize,
    /// Distinct agent strings
    pub unique_agent_count: usize,
    /// Capture range
    pub date_range: DateRange,
}

impl LogStats {
    /// Compute statistics, or `None` for an empty log.
    ///
    /// With `exclude_unknown` set, the `"unknown"` placeholder is not counted
    /// as a distinct client or agent. The range comes from file order, not
    /// from parsing timestamps.
    #[must_use]
    pub fn compute(records: &[LogRecord], exclude_unknown: bool) -> Option<Self> {
        let first = records.first()?;
        let last = records.last()?;

        let unique_client_count = records
            .iter()
            .filter(|r| !(exclude_unknown && r.has_unknown_client()))
            .map(|r| r.client_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let unique_agent_count = records
            .iter()
            .filter(|r| !(exclude_unknown && r.has_unknown_agent()))
            .map(|r| r.agent.as_str())
            .collect::<HashSet<_>>()
            .len();

        Some(Self {
            total_rows: records.len(),
            unique_client_count,
            unique_agent_count,
            date_range: DateRange {
                start: first.timestamp.clone(),
                end: last.timestamp.clone(),
            },
        })
    }

    /// Deterministic one-sentence summary built only from the aggregates
    #[must_use]
    pub fn fallback_sentence(&self) -> String {
        format!(
            "The log contains {} entries from {} unique IP addresses and {} unique user agents, spanning from {} to {}.",
            self.total_rows,
            self.unique_client_count,
            self.unique_agent_count,
            self.date_range.start,
            self.date_range.end
        )
    }
}
